use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;

pub mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod pages;
pub mod state;
pub mod utils;

use components::demo_form::DemoModal;
use content::SiteContent;
use pages::landing::Landing;
use state::modal::{use_modal_store, ModalStore};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route, content: &Rc<SiteContent>, modal: &ModalStore) -> Html {
    match route {
        Route::Home => html! { <Landing content={content.clone()} modal={modal.clone()} /> },
        Route::NotFound => html! {
            <div class="not-found" style="padding: 4rem 1rem; text-align: center;">
                <h1>{ "Page not found" }</h1>
                <Link<Route> to={Route::Home}>{ "Back to the home page" }</Link<Route>>
            </div>
        },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    // one modal store per page session; handed to every view that needs it
    let modal = use_modal_store();
    let content = use_memo(|_| content::load().map(Rc::new), ());

    let content = match &*content {
        Ok(content) => content.clone(),
        Err(err) => {
            log::error!("Failed to load site content: {}", err);
            return html! {
                <div style="padding: 4rem 1rem; text-align: center; font-family: system-ui, sans-serif;">
                    <h1>{ "Something went wrong" }</h1>
                    <p>{ "This page could not be displayed. Please try again later." }</p>
                </div>
            };
        }
    };

    let render = {
        let content = content.clone();
        let modal = modal.clone();
        Callback::from(move |route: Route| switch(route, &content, &modal))
    };

    html! {
        <BrowserRouter>
            <Switch<Route> render={render} />
            <DemoModal modal={modal} copy={content.demo_form.clone()} />
        </BrowserRouter>
    }
}
