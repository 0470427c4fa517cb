use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub tagline: AttrValue,
    pub copyright: AttrValue,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-tagline">{ props.tagline.clone() }</div>
            <div>{ props.copyright.clone() }</div>
        </footer>
    }
}
