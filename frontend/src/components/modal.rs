use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::utils::browser::set_body_scroll_locked;

const MODAL_CSS: &str = r#"
    .modal-backdrop {
        position: fixed;
        inset: 0;
        background: rgba(0, 0, 0, 0.5);
        backdrop-filter: blur(4px);
        z-index: 50;
        animation: modal-fade-in 200ms ease-out;
    }
    .modal-container {
        position: fixed;
        inset: 0;
        z-index: 50;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 1rem;
        pointer-events: none;
    }
    .modal-panel {
        position: relative;
        width: 100%;
        max-width: 32rem;
        background: #fff;
        border-radius: var(--radius);
        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
        pointer-events: auto;
        animation: modal-zoom-in 200ms ease-out;
    }
    .modal-close {
        position: absolute;
        top: 1rem;
        right: 1rem;
        padding: 0.5rem;
        border: none;
        background: transparent;
        color: var(--muted);
        font-size: 1.25rem;
        cursor: pointer;
        border-radius: 8px;
    }
    .modal-close:hover {
        color: var(--ink);
        background: rgba(140, 110, 255, 0.05);
    }
    .modal-title {
        padding: 1.5rem 1.5rem 0.5rem;
        font-size: 1.5rem;
        font-weight: 700;
        color: var(--ink);
    }
    .modal-body {
        padding: 0.5rem 1.5rem 1.5rem;
        max-height: 70vh;
        overflow-y: auto;
    }
    @keyframes modal-fade-in {
        from { opacity: 0; }
        to { opacity: 1; }
    }
    @keyframes modal-zoom-in {
        from { opacity: 0; transform: scale(0.95); }
        to { opacity: 1; transform: scale(1); }
    }
"#;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    // Escape closes the dialog and the page behind it stops scrolling while open
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |is_open| {
                let document = web_sys::window().and_then(|w| w.document());
                let destructor: Box<dyn FnOnce()> = match document {
                    Some(document) if *is_open => {
                        let listener = Closure::<dyn Fn(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                            if e.key() == "Escape" {
                                on_close.emit(());
                            }
                        });
                        if let Err(e) = document
                            .add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref())
                        {
                            log::warn!("Failed to attach modal keydown listener: {:?}", e);
                        }
                        set_body_scroll_locked(true);
                        Box::new(move || {
                            let _ = document.remove_event_listener_with_callback(
                                "keydown",
                                listener.as_ref().unchecked_ref(),
                            );
                            set_body_scroll_locked(false);
                        })
                    }
                    _ => Box::new(|| ()),
                };
                move || {
                    destructor();
                }
            },
            props.is_open,
        );
    }

    if !props.is_open {
        return html! {};
    }

    let close = props.on_close.reform(|_: MouseEvent| ());
    let swallow = Callback::from(|e: MouseEvent| e.stop_propagation());
    let title = props.title.clone().map(|title| {
        html! { <h2 id="modal-title" class="modal-title">{ title }</h2> }
    });

    html! {
        <>
            <style>{MODAL_CSS}</style>
            <div class="modal-backdrop" aria-hidden="true" onclick={close.clone()}></div>
            <div
                class="modal-container"
                role="dialog"
                aria-modal="true"
                aria-labelledby={props.title.as_ref().map(|_| "modal-title")}
            >
                <div class="modal-panel" onclick={swallow}>
                    <button class="modal-close" aria-label="Close modal" onclick={close}>{"✕"}</button>
                    { title.unwrap_or_default() }
                    <div class="modal-body">
                        { for props.children.iter() }
                    </div>
                </div>
            </div>
        </>
    }
}
