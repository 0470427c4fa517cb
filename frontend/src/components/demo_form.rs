use std::rc::Rc;

use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::components::modal::Modal;
use crate::content::DemoFormCopy;
use crate::error::SiteError;
use crate::state::demo_form::{DemoFormController, FormCallbacks, FormField, Role, SubmissionPhase};
use crate::state::modal::ModalStore;
use crate::utils::browser::{LocationDispatcher, TimeoutScheduler};

const FORM_CSS: &str = r#"
    .demo-form { display: flex; flex-direction: column; gap: 1rem; }
    .demo-form .intro { color: var(--muted); margin-bottom: 0.5rem; }
    .demo-form label {
        display: block;
        font-size: 0.875rem;
        font-weight: 600;
        color: var(--ink);
        margin-bottom: 0.5rem;
    }
    .demo-form input,
    .demo-form select,
    .demo-form textarea {
        width: 100%;
        padding: 0.5rem 1rem;
        border: 1px solid var(--line);
        border-radius: 8px;
        font: inherit;
        transition: box-shadow 0.2s ease;
    }
    .demo-form input:focus,
    .demo-form select:focus,
    .demo-form textarea:focus {
        outline: none;
        border-color: transparent;
        box-shadow: 0 0 0 2px var(--violet);
    }
    .demo-form textarea { resize: none; }
    .demo-form .form-error { color: var(--rose); font-size: 0.875rem; }
    .demo-form .form-actions { display: flex; gap: 0.75rem; padding-top: 1rem; }
    .demo-form .form-actions > * { flex: 1; }
    .demo-success { padding: 3rem 0; text-align: center; }
    .demo-success .check {
        width: 4rem;
        height: 4rem;
        margin: 0 auto 1rem;
        border-radius: 9999px;
        background: rgba(69, 214, 179, 0.1);
        color: var(--mint);
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 2rem;
        font-weight: 700;
    }
    .demo-success h3 { font-size: 1.25rem; font-weight: 700; color: var(--ink); margin-bottom: 0.5rem; }
    .demo-success p { color: var(--muted); }
"#;

#[derive(Properties, PartialEq)]
pub struct DemoModalProps {
    pub modal: ModalStore,
    pub copy: DemoFormCopy,
}

/// The "request a demo" overlay. The form only exists while the overlay is
/// open, so closing it discards anything the form still had pending.
#[function_component(DemoModal)]
pub fn demo_modal(props: &DemoModalProps) -> Html {
    let on_close = props.modal.close_callback();
    html! {
        <Modal
            is_open={props.modal.is_open()}
            on_close={on_close.clone()}
            title={AttrValue::from(props.copy.modal_title.clone())}
        >
            <DemoRequestForm copy={props.copy.clone()} {on_close} />
        </Modal>
    }
}

#[derive(Properties, PartialEq)]
pub struct DemoRequestFormProps {
    pub copy: DemoFormCopy,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub on_success: Option<Callback<()>>,
}

fn field_callback<E: 'static>(
    controller: &DemoFormController,
    error: &UseStateHandle<Option<String>>,
    field: FormField,
    read: fn(E) -> String,
) -> Callback<E> {
    let controller = controller.clone();
    let error = error.clone();
    Callback::from(move |e: E| {
        let next = input_error(controller.update_field(field, read(e)));
        if *error != next {
            error.set(next);
        }
    })
}

/// Error line to show after an edit. An accepted edit clears any earlier
/// rejection.
fn input_error(result: Result<(), SiteError>) -> Option<String> {
    match result {
        Ok(()) => None,
        Err(err) => {
            log::warn!("Rejected form input: {}", err);
            Some(err.to_string())
        }
    }
}

fn field_label(field: FormField) -> String {
    if field.is_required() {
        format!("{} *", field.label())
    } else {
        field.label().to_string()
    }
}

fn input_value(e: InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

fn textarea_value(e: InputEvent) -> String {
    e.target_unchecked_into::<HtmlTextAreaElement>().value()
}

fn select_value(e: Event) -> String {
    e.target_unchecked_into::<HtmlSelectElement>().value()
}

#[function_component(DemoRequestForm)]
pub fn demo_request_form(props: &DemoRequestFormProps) -> Html {
    let refresh = use_force_update();
    let error = use_state(|| None::<String>);
    let controller = {
        let callbacks = FormCallbacks {
            on_close: props.on_close.clone(),
            on_success: props.on_success.clone(),
            on_change: Callback::from(move |_| refresh.force_update()),
        };
        use_state(move || {
            DemoFormController::new(Rc::new(TimeoutScheduler), Rc::new(LocationDispatcher), callbacks)
        })
    };

    {
        let controller = (*controller).clone();
        use_effect_with_deps(move |_| move || controller.dispose(), ());
    }

    let phase = controller.phase();
    if phase == SubmissionPhase::Success {
        return html! {
            <div class="demo-success">
                <style>{FORM_CSS}</style>
                <div class="check" aria-hidden="true">{"✓"}</div>
                <h3>{ &props.copy.success_title }</h3>
                <p>{ &props.copy.success_message }</p>
            </div>
        };
    }

    let fields = controller.fields();
    let submitting = phase == SubmissionPhase::Submitting;

    let onsubmit = {
        let controller = (*controller).clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match controller.submit() {
                Ok(_) => error.set(None),
                Err(err @ SiteError::MissingField(_)) => error.set(Some(err.to_string())),
                Err(err) => {
                    log::error!("Error submitting demo request: {}", err);
                    error.set(Some(
                        "We couldn't open your email client. Please try again.".to_string(),
                    ));
                }
            }
        })
    };
    let oncancel = {
        let controller = (*controller).clone();
        Callback::from(move |_: MouseEvent| {
            controller.cancel();
        })
    };

    html! {
        <form class="demo-form" {onsubmit}>
            <style>{FORM_CSS}</style>
            <p class="intro">{ &props.copy.intro }</p>

            <div>
                <label for="name">{ field_label(FormField::Name) }</label>
                <input
                    type="text"
                    id="name"
                    name="name"
                    required={FormField::Name.is_required()}
                    placeholder="John Smith"
                    value={fields.name.clone()}
                    oninput={field_callback(&controller, &error, FormField::Name, input_value)}
                />
            </div>

            <div>
                <label for="email">{ field_label(FormField::Email) }</label>
                <input
                    type="email"
                    id="email"
                    name="email"
                    required={FormField::Email.is_required()}
                    placeholder="john@company.com"
                    value={fields.email.clone()}
                    oninput={field_callback(&controller, &error, FormField::Email, input_value)}
                />
            </div>

            <div>
                <label for="company">{ field_label(FormField::Company) }</label>
                <input
                    type="text"
                    id="company"
                    name="company"
                    required={FormField::Company.is_required()}
                    placeholder="Acme Inc."
                    value={fields.company.clone()}
                    oninput={field_callback(&controller, &error, FormField::Company, input_value)}
                />
            </div>

            <div>
                <label for="role">{ field_label(FormField::Role) }</label>
                <select
                    id="role"
                    name="role"
                    onchange={field_callback(&controller, &error, FormField::Role, select_value)}
                >
                    <option value="" selected={fields.role.is_none()}>{ "Select your role" }</option>
                    { for Role::ALL.iter().map(|role| html! {
                        <option value={role.value()} selected={fields.role == Some(*role)}>
                            { role.label() }
                        </option>
                    }) }
                </select>
            </div>

            <div>
                <label for="message">{ "Tell us about your needs" }</label>
                <textarea
                    id="message"
                    name="message"
                    rows="4"
                    placeholder="What are you hoping to achieve with BrandStudios.AI?"
                    value={fields.message.clone()}
                    oninput={field_callback(&controller, &error, FormField::Message, textarea_value)}
                />
            </div>

            {
                if let Some(message) = (*error).clone() {
                    html! { <p class="form-error" role="alert">{ message }</p> }
                } else {
                    html! {}
                }
            }

            <div class="form-actions">
                <Button variant={ButtonVariant::Secondary} onclick={Some(oncancel)} disabled={submitting}>
                    { "Cancel" }
                </Button>
                <Button button_type="submit" disabled={submitting}>
                    { if submitting { "Sending..." } else { "Request Demo" } }
                </Button>
            </div>
        </form>
    }
}
