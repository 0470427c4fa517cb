use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use yew::Callback;

use crate::config;
use crate::error::SiteError;
use crate::utils::mailto::MailtoLink;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Company,
    Role,
    Message,
}

impl FormField {
    pub const REQUIRED: [FormField; 3] = [FormField::Name, FormField::Email, FormField::Company];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Full Name",
            FormField::Email => "Work Email",
            FormField::Company => "Company",
            FormField::Role => "Role",
            FormField::Message => "Message",
        }
    }

    pub fn is_required(&self) -> bool {
        Self::REQUIRED.contains(self)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    MarketingManager,
    BrandManager,
    Cmo,
    ContentCreator,
    Agency,
    Founder,
    Other,
}

impl Role {
    pub const ALL: [Role; 7] = [
        Role::MarketingManager,
        Role::BrandManager,
        Role::Cmo,
        Role::ContentCreator,
        Role::Agency,
        Role::Founder,
        Role::Other,
    ];

    /// Value submitted in the email body.
    pub fn value(&self) -> &'static str {
        match self {
            Role::MarketingManager => "marketing-manager",
            Role::BrandManager => "brand-manager",
            Role::Cmo => "cmo",
            Role::ContentCreator => "content-creator",
            Role::Agency => "agency",
            Role::Founder => "founder",
            Role::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::MarketingManager => "Marketing Manager",
            Role::BrandManager => "Brand Manager",
            Role::Cmo => "CMO / VP Marketing",
            Role::ContentCreator => "Content Creator",
            Role::Agency => "Agency",
            Role::Founder => "Founder / CEO",
            Role::Other => "Other",
        }
    }

    /// Empty input means "no role selected".
    pub fn parse(value: &str) -> Result<Option<Role>, SiteError> {
        if value.is_empty() {
            return Ok(None);
        }
        Role::ALL
            .iter()
            .find(|role| role.value() == value)
            .copied()
            .map(Some)
            .ok_or_else(|| SiteError::UnknownRole(value.to_string()))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub company: String,
    pub role: Option<Role>,
    pub message: String,
}

impl FormFields {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Company => &self.company,
            FormField::Role => self.role_value(),
            FormField::Message => &self.message,
        }
    }

    pub fn role_value(&self) -> &'static str {
        self.role.map(|role| role.value()).unwrap_or("")
    }

    fn set(&mut self, field: FormField, value: String) -> Result<(), SiteError> {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Company => self.company = value,
            FormField::Role => self.role = Role::parse(&value)?,
            FormField::Message => self.message = value,
        }
        Ok(())
    }

    pub fn first_missing(&self) -> Option<FormField> {
        FormField::REQUIRED
            .into_iter()
            .find(|field| self.get(*field).is_empty())
    }

    pub fn is_empty(&self) -> bool {
        *self == FormFields::default()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Editing,
    Submitting,
    Success,
}

/// Keeps a scheduled task alive. Dropping it cancels the task if it has not
/// run yet.
pub struct ScheduledTask {
    _guard: Box<dyn Any>,
}

impl ScheduledTask {
    pub fn new<G: 'static>(guard: G) -> Self {
        Self {
            _guard: Box::new(guard),
        }
    }
}

pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> ScheduledTask;
}

/// Hands a compose target to whatever opens the user's mail client.
/// Failures are reported as [`SiteError::CompositionFailure`].
pub trait ComposeDispatcher {
    fn dispatch(&self, link: &MailtoLink) -> Result<(), SiteError>;
}

#[derive(Clone)]
pub struct FormCallbacks {
    /// Asks the owning overlay to close.
    pub on_close: Callback<()>,
    pub on_success: Option<Callback<()>>,
    /// Fired after every state change so the view can re-render.
    pub on_change: Callback<()>,
}

impl Default for FormCallbacks {
    fn default() -> Self {
        Self {
            on_close: Callback::from(|_| ()),
            on_success: None,
            on_change: Callback::from(|_| ()),
        }
    }
}

#[derive(Debug)]
pub enum SubmitOutcome {
    Dispatched(MailtoLink),
    /// Submit arrived outside of `Editing` and was dropped.
    Ignored,
}

#[derive(Default)]
struct FormState {
    fields: FormFields,
    phase: SubmissionPhase,
    pending_reset: Option<ScheduledTask>,
    disposed: bool,
}

/// Owns the demo request form and its submit lifecycle:
/// `Editing -> Submitting -> Success -> (delay) -> Editing`.
#[derive(Clone)]
pub struct DemoFormController {
    state: Rc<RefCell<FormState>>,
    scheduler: Rc<dyn Scheduler>,
    dispatcher: Rc<dyn ComposeDispatcher>,
    callbacks: FormCallbacks,
    recipient: String,
    site_name: String,
}

impl PartialEq for DemoFormController {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl DemoFormController {
    pub fn new(
        scheduler: Rc<dyn Scheduler>,
        dispatcher: Rc<dyn ComposeDispatcher>,
        callbacks: FormCallbacks,
    ) -> Self {
        Self {
            state: Rc::default(),
            scheduler,
            dispatcher,
            callbacks,
            recipient: config::get_contact_email().to_string(),
            site_name: config::get_site_name().to_string(),
        }
    }

    pub fn with_recipient(mut self, recipient: impl Into<String>) -> Self {
        self.recipient = recipient.into();
        self
    }

    pub fn with_site_name(mut self, site_name: impl Into<String>) -> Self {
        self.site_name = site_name.into();
        self
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.state.borrow().phase
    }

    pub fn fields(&self) -> FormFields {
        self.state.borrow().fields.clone()
    }

    pub fn has_pending_reset(&self) -> bool {
        let state = self.state.borrow();
        state.phase == SubmissionPhase::Success && state.pending_reset.is_some()
    }

    pub fn update_field(&self, field: FormField, value: String) -> Result<(), SiteError> {
        {
            let mut state = self.state.borrow_mut();
            if state.disposed || state.phase != SubmissionPhase::Editing {
                return Ok(());
            }
            state.fields.set(field, value)?;
        }
        self.callbacks.on_change.emit(());
        Ok(())
    }

    /// Closes the overlay without submitting. Fields are kept.
    pub fn cancel(&self) -> bool {
        {
            let state = self.state.borrow();
            if state.disposed || state.phase != SubmissionPhase::Editing {
                return false;
            }
        }
        self.callbacks.on_close.emit(());
        true
    }

    pub fn submit(&self) -> Result<SubmitOutcome, SiteError> {
        let fields = {
            let mut state = self.state.borrow_mut();
            if state.disposed || state.phase != SubmissionPhase::Editing {
                return Ok(SubmitOutcome::Ignored);
            }
            if let Some(field) = state.fields.first_missing() {
                return Err(SiteError::MissingField(field));
            }
            state.phase = SubmissionPhase::Submitting;
            state.fields.clone()
        };
        self.callbacks.on_change.emit(());

        let dispatched = MailtoLink::demo_request(&self.recipient, &self.site_name, &fields)
            .and_then(|link| self.dispatcher.dispatch(&link).map(|()| link));
        let link = match dispatched {
            Ok(link) => link,
            Err(err) => {
                log::warn!("Demo request not sent, staying on the form: {}", err);
                self.state.borrow_mut().phase = SubmissionPhase::Editing;
                self.callbacks.on_change.emit(());
                return Err(err);
            }
        };

        log::info!("Demo request handed to mail client for {}", fields.company);
        self.state.borrow_mut().phase = SubmissionPhase::Success;

        let weak = Rc::downgrade(&self.state);
        let callbacks = self.callbacks.clone();
        let task = self.scheduler.schedule(
            config::RESET_DELAY_MS,
            Box::new(move || finish_reset(&weak, &callbacks)),
        );
        let replaced = {
            let mut state = self.state.borrow_mut();
            if state.phase == SubmissionPhase::Success {
                state.pending_reset.replace(task)
            } else {
                Some(task)
            }
        };
        drop(replaced);

        self.callbacks.on_change.emit(());
        Ok(SubmitOutcome::Dispatched(link))
    }

    /// Called when the view unmounts. A pending reset is cancelled and any
    /// later call becomes a no-op.
    pub fn dispose(&self) {
        let pending = {
            let mut state = self.state.borrow_mut();
            state.disposed = true;
            state.pending_reset.take()
        };
        if pending.is_some() {
            log::debug!("Demo form unmounted with a reset pending, cancelling it");
        }
        drop(pending);
    }
}

fn finish_reset(state: &Weak<RefCell<FormState>>, callbacks: &FormCallbacks) {
    let Some(state) = state.upgrade() else {
        return;
    };
    {
        let mut state = state.borrow_mut();
        if state.disposed || state.phase != SubmissionPhase::Success {
            return;
        }
        state.fields = FormFields::default();
        state.phase = SubmissionPhase::Editing;
        // the spent task handle stays in `pending_reset` until the next submit
        // or dispose; it must not be dropped from inside its own callback
    }
    callbacks.on_close.emit(());
    if let Some(on_success) = &callbacks.on_success {
        on_success.emit(());
    }
    callbacks.on_change.emit(());
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[derive(Default)]
    struct ManualScheduler {
        tasks: RefCell<Vec<(u32, Rc<Cell<bool>>, Option<Box<dyn FnOnce()>>)>>,
    }

    struct CancelOnDrop(Rc<Cell<bool>>);

    impl Drop for CancelOnDrop {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    impl ManualScheduler {
        /// Runs every task that is due and was not cancelled.
        fn advance(&self, elapsed_ms: u32) {
            let due: Vec<Box<dyn FnOnce()>> = self
                .tasks
                .borrow_mut()
                .iter_mut()
                .filter(|(delay, cancelled, _)| *delay <= elapsed_ms && !cancelled.get())
                .filter_map(|(_, _, task)| task.take())
                .collect();
            for task in due {
                task();
            }
        }

        fn scheduled(&self) -> Vec<u32> {
            self.tasks.borrow().iter().map(|(delay, _, _)| *delay).collect()
        }

        fn run_everything_even_cancelled(&self) {
            let all: Vec<Box<dyn FnOnce()>> = self
                .tasks
                .borrow_mut()
                .iter_mut()
                .filter_map(|(_, _, task)| task.take())
                .collect();
            for task in all {
                task();
            }
        }
    }

    impl Scheduler for ManualScheduler {
        fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> ScheduledTask {
            let cancelled = Rc::new(Cell::new(false));
            self.tasks
                .borrow_mut()
                .push((delay_ms, cancelled.clone(), Some(task)));
            ScheduledTask::new(CancelOnDrop(cancelled))
        }
    }

    #[derive(Default)]
    struct RecordingDispatcher {
        sent: RefCell<Vec<String>>,
        fail: Cell<bool>,
    }

    impl ComposeDispatcher for RecordingDispatcher {
        fn dispatch(&self, link: &MailtoLink) -> Result<(), SiteError> {
            if self.fail.get() {
                return Err(SiteError::CompositionFailure("mail client unavailable".to_string()));
            }
            self.sent.borrow_mut().push(link.to_uri());
            Ok(())
        }
    }

    struct Harness {
        controller: DemoFormController,
        scheduler: Rc<ManualScheduler>,
        dispatcher: Rc<RecordingDispatcher>,
        closes: Rc<Cell<u32>>,
        successes: Rc<Cell<u32>>,
    }

    fn counter(count: &Rc<Cell<u32>>) -> Callback<()> {
        let count = count.clone();
        Callback::from(move |_| count.set(count.get() + 1))
    }

    fn harness() -> Harness {
        let scheduler = Rc::new(ManualScheduler::default());
        let dispatcher = Rc::new(RecordingDispatcher::default());
        let closes = Rc::new(Cell::new(0));
        let successes = Rc::new(Cell::new(0));
        let callbacks = FormCallbacks {
            on_close: counter(&closes),
            on_success: Some(counter(&successes)),
            on_change: Callback::from(|_| ()),
        };
        let controller = DemoFormController::new(scheduler.clone(), dispatcher.clone(), callbacks)
            .with_recipient("demos@example.com")
            .with_site_name("Example site");
        Harness {
            controller,
            scheduler,
            dispatcher,
            closes,
            successes,
        }
    }

    fn fill(controller: &DemoFormController) {
        for (field, value) in [
            (FormField::Name, "A"),
            (FormField::Email, "a@b.com"),
            (FormField::Company, "C"),
            (FormField::Role, "founder"),
            (FormField::Message, "hi"),
        ] {
            controller.update_field(field, value.to_string()).unwrap();
        }
    }

    #[test]
    fn starts_editing_with_empty_fields() {
        let h = harness();
        assert_eq!(h.controller.phase(), SubmissionPhase::Editing);
        assert!(h.controller.fields().is_empty());
    }

    #[test]
    fn update_field_touches_only_that_field() {
        let h = harness();
        fill(&h.controller);
        let before = h.controller.fields();

        h.controller
            .update_field(FormField::Company, "Initech".to_string())
            .unwrap();

        let after = h.controller.fields();
        assert_eq!(after.get(FormField::Company), "Initech");
        for field in [FormField::Name, FormField::Email, FormField::Role, FormField::Message] {
            assert_eq!(after.get(field), before.get(field), "{} changed", field);
        }
        assert_eq!(h.controller.phase(), SubmissionPhase::Editing);
    }

    #[test]
    fn unknown_role_is_rejected_without_changing_state() {
        let h = harness();
        fill(&h.controller);
        let err = h
            .controller
            .update_field(FormField::Role, "astronaut".to_string())
            .unwrap_err();
        assert!(matches!(err, SiteError::UnknownRole(ref v) if v == "astronaut"));
        assert_eq!(h.controller.fields().role, Some(Role::Founder));

        h.controller.update_field(FormField::Role, String::new()).unwrap();
        assert_eq!(h.controller.fields().role, None);
    }

    #[test]
    fn submit_composes_link_and_enters_success() {
        let h = harness();
        fill(&h.controller);

        let link = match h.controller.submit().unwrap() {
            SubmitOutcome::Dispatched(link) => link,
            SubmitOutcome::Ignored => panic!("submit was ignored"),
        };

        assert_eq!(h.controller.phase(), SubmissionPhase::Success);
        assert_eq!(link.recipient(), "demos@example.com");
        assert_eq!(h.dispatcher.sent.borrow().as_slice(), &[link.to_uri()]);

        let uri = link.to_uri();
        let encoded_body = uri.split_once("&body=").unwrap().1;
        let body = urlencoding::decode(encoded_body).unwrap();
        for expected in ["Name: A\n", "Email: a@b.com\n", "Company: C\n", "Role: founder\n", "Message: hi\n"] {
            assert!(body.contains(expected), "body missing {:?}: {}", expected, body);
        }
        assert!(body.starts_with("New demo request from Example site:"));
        assert_eq!(h.scheduler.scheduled(), vec![config::RESET_DELAY_MS]);
        assert_eq!(h.closes.get(), 0);
    }

    #[test]
    fn reset_after_delay_clears_fields_and_closes_once() {
        let h = harness();
        fill(&h.controller);
        h.controller.submit().unwrap();

        h.scheduler.advance(config::RESET_DELAY_MS - 1);
        assert_eq!(h.controller.phase(), SubmissionPhase::Success);
        assert_eq!(h.closes.get(), 0);

        h.scheduler.advance(config::RESET_DELAY_MS);
        assert_eq!(h.controller.phase(), SubmissionPhase::Editing);
        assert!(h.controller.fields().is_empty());
        assert_eq!(h.closes.get(), 1);
        assert_eq!(h.successes.get(), 1);

        // the task is spent; advancing again fires nothing
        h.scheduler.advance(config::RESET_DELAY_MS * 2);
        assert_eq!(h.closes.get(), 1);
        assert_eq!(h.successes.get(), 1);
    }

    #[test]
    fn form_is_reusable_after_reset() {
        let h = harness();
        fill(&h.controller);
        h.controller.submit().unwrap();
        h.scheduler.advance(config::RESET_DELAY_MS);

        fill(&h.controller);
        assert!(matches!(h.controller.submit().unwrap(), SubmitOutcome::Dispatched(_)));
        assert_eq!(h.dispatcher.sent.borrow().len(), 2);
        assert!(h.controller.has_pending_reset());
    }

    #[test]
    fn cancel_closes_without_touching_fields() {
        let h = harness();
        fill(&h.controller);
        let before = h.controller.fields();

        assert!(h.controller.cancel());

        assert_eq!(h.closes.get(), 1);
        assert_eq!(h.controller.fields(), before);
        assert_eq!(h.controller.phase(), SubmissionPhase::Editing);
        assert!(h.dispatcher.sent.borrow().is_empty());
    }

    #[test]
    fn cancel_and_edits_are_ignored_during_success() {
        let h = harness();
        fill(&h.controller);
        h.controller.submit().unwrap();

        assert!(!h.controller.cancel());
        h.controller.update_field(FormField::Name, "B".to_string()).unwrap();
        assert!(matches!(h.controller.submit().unwrap(), SubmitOutcome::Ignored));

        assert_eq!(h.closes.get(), 0);
        assert_eq!(h.controller.fields().name, "A");
        assert_eq!(h.dispatcher.sent.borrow().len(), 1);
    }

    #[test]
    fn missing_required_field_blocks_submit() {
        let h = harness();
        fill(&h.controller);
        h.controller.update_field(FormField::Email, String::new()).unwrap();

        let err = h.controller.submit().unwrap_err();
        assert!(matches!(err, SiteError::MissingField(FormField::Email)));
        assert_eq!(h.controller.phase(), SubmissionPhase::Editing);
        assert!(h.dispatcher.sent.borrow().is_empty());
        assert!(h.scheduler.scheduled().is_empty());
    }

    #[test]
    fn whitespace_counts_as_filled_like_the_browser_required_gate() {
        let h = harness();
        for (field, value) in [(FormField::Name, " "), (FormField::Email, "a@b.com"), (FormField::Company, "C")] {
            h.controller.update_field(field, value.to_string()).unwrap();
        }
        assert!(matches!(h.controller.submit().unwrap(), SubmitOutcome::Dispatched(_)));
        assert_eq!(h.controller.phase(), SubmissionPhase::Success);
        assert_eq!(h.dispatcher.sent.borrow().len(), 1);
    }

    #[test]
    fn required_fields_are_name_email_and_company() {
        let required: Vec<FormField> = [
            FormField::Name,
            FormField::Email,
            FormField::Company,
            FormField::Role,
            FormField::Message,
        ]
        .into_iter()
        .filter(FormField::is_required)
        .collect();
        assert_eq!(required, FormField::REQUIRED);
    }

    #[test]
    fn optional_fields_may_stay_empty() {
        let h = harness();
        for (field, value) in [(FormField::Name, "A"), (FormField::Email, "a@b.com"), (FormField::Company, "C")] {
            h.controller.update_field(field, value.to_string()).unwrap();
        }
        assert!(matches!(h.controller.submit().unwrap(), SubmitOutcome::Dispatched(_)));
    }

    #[test]
    fn dispatch_failure_returns_to_editing_and_allows_retry() {
        let h = harness();
        fill(&h.controller);
        h.dispatcher.fail.set(true);

        let err = h.controller.submit().unwrap_err();
        assert!(matches!(err, SiteError::CompositionFailure(_)));
        assert_eq!(h.controller.phase(), SubmissionPhase::Editing);
        assert_eq!(h.controller.fields().name, "A");
        assert!(h.scheduler.scheduled().is_empty());

        h.dispatcher.fail.set(false);
        assert!(matches!(h.controller.submit().unwrap(), SubmitOutcome::Dispatched(_)));
        assert_eq!(h.controller.phase(), SubmissionPhase::Success);
    }

    #[test]
    fn bad_recipient_is_a_recoverable_composition_failure() {
        let h = harness();
        let controller = h.controller.clone().with_recipient("");
        fill(&controller);

        assert!(matches!(controller.submit(), Err(SiteError::CompositionFailure(_))));
        assert_eq!(controller.phase(), SubmissionPhase::Editing);
        assert!(h.dispatcher.sent.borrow().is_empty());
    }

    #[test]
    fn dispose_cancels_pending_reset() {
        let h = harness();
        fill(&h.controller);
        h.controller.submit().unwrap();
        assert!(h.controller.has_pending_reset());

        h.controller.dispose();
        h.scheduler.advance(config::RESET_DELAY_MS);

        assert_eq!(h.controller.phase(), SubmissionPhase::Success);
        assert_eq!(h.controller.fields().name, "A");
        assert_eq!(h.closes.get(), 0);
        assert_eq!(h.successes.get(), 0);
    }

    #[test]
    fn reset_that_runs_after_dispose_does_nothing() {
        let h = harness();
        fill(&h.controller);
        h.controller.submit().unwrap();
        h.controller.dispose();

        // a timer that ignored its cancellation must still not touch the form
        h.scheduler.run_everything_even_cancelled();

        assert_eq!(h.controller.fields().name, "A");
        assert_eq!(h.closes.get(), 0);
    }

    #[test]
    fn reset_after_controller_dropped_is_harmless() {
        let h = harness();
        fill(&h.controller);
        h.controller.submit().unwrap();
        let Harness {
            controller,
            scheduler,
            closes,
            ..
        } = h;
        drop(controller);

        scheduler.run_everything_even_cancelled();
        assert_eq!(closes.get(), 0);
    }

    #[test]
    fn role_parse_round_trips_every_option() {
        for role in Role::ALL {
            assert_eq!(Role::parse(role.value()).unwrap(), Some(role));
        }
        assert_eq!(Role::parse("").unwrap(), None);
    }
}
