use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CardProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or(true)]
    pub gradient: bool,
    #[prop_or(true)]
    pub hover: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    let class = classes!(
        "card",
        props.gradient.then_some("gradient-card"),
        props.hover.then_some("card-hover"),
        props.class.clone()
    );
    html! {
        <article id={props.id.clone()} {class}>
            { for props.children.iter() }
        </article>
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    #[default]
    Gradient,
    Solid,
}

#[derive(Properties, PartialEq)]
pub struct BadgeProps {
    #[prop_or_default]
    pub variant: BadgeVariant,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Badge)]
pub fn badge(props: &BadgeProps) -> Html {
    let variant = match props.variant {
        BadgeVariant::Gradient => "badge-gradient",
        BadgeVariant::Solid => "badge-solid",
    };
    html! {
        <span class={classes!("badge", variant)}>{ for props.children.iter() }</span>
    }
}

#[derive(Properties, PartialEq)]
pub struct PillProps {
    #[prop_or(true)]
    pub violet: bool,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Pill)]
pub fn pill(props: &PillProps) -> Html {
    let variant = if props.violet { "pill-violet" } else { "pill-muted" };
    html! {
        <div class={classes!("pill", variant)}>{ for props.children.iter() }</div>
    }
}

/// Small uppercase label above a card title.
#[derive(Properties, PartialEq)]
pub struct EyebrowProps {
    pub text: AttrValue,
}

#[function_component(Eyebrow)]
pub fn eyebrow(props: &EyebrowProps) -> Html {
    html! { <div class="eyebrow">{ props.text.clone() }</div> }
}

#[derive(Properties, PartialEq)]
pub struct BulletListProps {
    pub items: Vec<String>,
}

#[function_component(BulletList)]
pub fn bullet_list(props: &BulletListProps) -> Html {
    html! {
        <ul class="bullet-list">
            { for props.items.iter().map(|item| html! { <li>{ item }</li> }) }
        </ul>
    }
}
