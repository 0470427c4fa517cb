use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

use crate::error::SiteError;
use crate::state::demo_form::{ComposeDispatcher, ScheduledTask, Scheduler};
use crate::utils::mailto::MailtoLink;

/// Schedules work on the browser event loop. Dropping the returned task
/// cancels it through a flag, so the guard may be dropped from inside the
/// task itself without freeing the running JS closure.
pub struct TimeoutScheduler;

struct CancelFlag(Rc<Cell<bool>>);

impl Drop for CancelFlag {
    fn drop(&mut self) {
        self.0.set(true);
    }
}

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> ScheduledTask {
        let cancelled = Rc::new(Cell::new(false));
        let flag = cancelled.clone();
        // leaks one small closure per scheduled task
        Timeout::new(delay_ms, move || {
            if !flag.get() {
                task();
            }
        })
        .forget();
        ScheduledTask::new(CancelFlag(cancelled))
    }
}

/// Opens the user's mail client by navigating to the `mailto:` URI.
pub struct LocationDispatcher;

impl ComposeDispatcher for LocationDispatcher {
    fn dispatch(&self, link: &MailtoLink) -> Result<(), SiteError> {
        let window = web_sys::window()
            .ok_or_else(|| SiteError::CompositionFailure("no window available".to_string()))?;
        window
            .location()
            .set_href(&link.to_uri())
            .map_err(|e| SiteError::CompositionFailure(format!("{:?}", e)))
    }
}

/// Replaces the static `<title>` and description from index.html.
pub fn set_document_meta(title: &str, description: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    document.set_title(title);
    match document.query_selector("meta[name=\"description\"]") {
        Ok(Some(meta)) => {
            if let Err(e) = meta.set_attribute("content", description) {
                log::warn!("Failed to set page description: {:?}", e);
            }
        }
        Ok(None) => log::debug!("No description meta tag on the page"),
        Err(e) => log::warn!("Failed to look up description meta tag: {:?}", e),
    }
}

/// Stops the page behind an overlay from scrolling.
pub fn set_body_scroll_locked(locked: bool) {
    let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let value = if locked { "hidden" } else { "" };
    if let Err(e) = body.style().set_property("overflow", value) {
        log::warn!("Failed to set body overflow: {:?}", e);
    }
}
