use yew::prelude::*;

use crate::content::LinkTarget;
use crate::state::modal::{require_store, ModalStore};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    /// Bare text link, used in the header navigation.
    Link,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Secondary => "btn btn-secondary",
            ButtonVariant::Link => "nav-link",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    fn class(&self) -> &'static str {
        match self {
            ButtonSize::Sm => "btn-sm",
            ButtonSize::Md => "btn-md",
            ButtonSize::Lg => "btn-lg",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    /// Without a target this is a plain `<button>` driven by `onclick`.
    #[prop_or_default]
    pub target: Option<LinkTarget>,
    /// Required when `target` is `TriggerModal`.
    #[prop_or_default]
    pub modal: Option<ModalStore>,
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub size: ButtonSize,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or(AttrValue::Static("button"))]
    pub button_type: AttrValue,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let class = classes!(
        props.variant.class(),
        (props.variant != ButtonVariant::Link).then_some(props.size.class()),
        props.disabled.then_some("btn-disabled"),
        props.class.clone()
    );
    let aria_label = props.aria_label.clone();

    match &props.target {
        Some(LinkTarget::NavigateInternal { path }) => html! {
            <a href={path.clone()} {class} aria-label={aria_label}>
                { for props.children.iter() }
            </a>
        },
        Some(LinkTarget::NavigateExternal { url, new_tab }) => {
            let (target, rel) = if *new_tab {
                (Some("_blank"), Some("noopener noreferrer"))
            } else {
                (None, None)
            };
            html! {
                <a href={url.clone()} {class} aria-label={aria_label} {target} {rel}>
                    { for props.children.iter() }
                </a>
            }
        }
        Some(LinkTarget::TriggerModal) => {
            let store = match require_store(props.modal.as_ref(), "Button") {
                Ok(store) => store.clone(),
                Err(err) => {
                    log::error!("{}", err);
                    panic!("{}", err);
                }
            };
            let onclick = Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                store.open();
            });
            html! {
                <button type="button" {class} aria-label={aria_label} {onclick} disabled={props.disabled}>
                    { for props.children.iter() }
                </button>
            }
        }
        None => html! {
            <button
                type={props.button_type.clone()}
                {class}
                aria-label={aria_label}
                onclick={props.onclick.clone()}
                disabled={props.disabled}
            >
                { for props.children.iter() }
            </button>
        },
    }
}
