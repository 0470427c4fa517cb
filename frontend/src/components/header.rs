use std::rc::Rc;

use yew::prelude::*;
use yew_router::components::Link;

use crate::components::button::{Button, ButtonVariant};
use crate::content::SiteContent;
use crate::state::modal::ModalStore;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub content: Rc<SiteContent>,
    pub modal: ModalStore,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let navigation = &props.content.navigation;
    html! {
        <header class="site-header" aria-label="Site header">
            <nav class="site-nav">
                <Link<Route> to={Route::Home} classes="brand">
                    <div class="brand-mark" aria-hidden="true"></div>
                    <span>{ &props.content.meta.brand }</span>
                </Link<Route>>

                <div class="nav-links" role="navigation">
                    { for navigation.links.iter().map(|link| html! {
                        <Button
                            target={Some(link.target.clone())}
                            modal={Some(props.modal.clone())}
                            variant={ButtonVariant::Link}
                            aria_label={link.aria_label.clone().map(AttrValue::from)}
                        >
                            { &link.label }
                        </Button>
                    }) }
                </div>

                <Button
                    target={Some(navigation.cta.target.clone())}
                    modal={Some(props.modal.clone())}
                    aria_label={navigation.cta.aria_label.clone().map(AttrValue::from)}
                >
                    { &navigation.cta.label }
                </Button>
            </nav>
        </header>
    }
}
