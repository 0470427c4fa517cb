use std::rc::Rc;

use yew::prelude::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::card::{Badge, BulletList, Card, Eyebrow, Pill};
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::config;
use crate::content::{LinkTarget, ListCard, SiteContent};
use crate::pages::comparison::Comparison;
use crate::pages::showcase::Showcase;
use crate::state::modal::ModalStore;
use crate::utils::browser::set_document_meta;
use crate::utils::mailto::format_email_link;

const LANDING_CSS: &str = r#"
    :root {
        --ink: #14121f;
        --muted: #6b6880;
        --line: #e7e4f2;
        --violet: #8c6eff;
        --rose: #ff6e9c;
        --mint: #45d6b3;
        --radius: 20px;
        --pad: 24px;
        --shadow: 0 10px 30px rgba(20, 18, 31, 0.06);
        --max-width: 1120px;
    }
    body {
        margin: 0;
        font-family: "Inter", system-ui, sans-serif;
        color: var(--ink);
        background: #fbfaff;
    }
    .site-header {
        position: sticky;
        top: 0;
        z-index: 40;
        backdrop-filter: blur(16px) saturate(140%);
        background: rgba(255, 255, 255, 0.8);
        border-bottom: 1px solid var(--line);
    }
    .site-nav {
        max-width: var(--max-width);
        margin: 0 auto;
        padding: 0.75rem 1rem;
        display: flex;
        align-items: center;
        gap: 1rem;
    }
    .brand {
        display: flex;
        align-items: center;
        gap: 10px;
        font-weight: 800;
        color: var(--ink);
        text-decoration: none;
    }
    .brand-mark {
        width: 36px;
        height: 36px;
        border-radius: 12px;
        box-shadow: 0 4px 12px rgba(0, 0, 0, 0.12);
        background: conic-gradient(from 180deg, var(--violet), var(--rose), var(--mint));
    }
    .nav-links { margin-left: auto; display: flex; gap: 1rem; flex-wrap: wrap; }
    .nav-link { font-weight: 600; color: var(--ink); text-decoration: none; }
    .nav-link:hover { color: var(--violet); }
    .btn {
        display: inline-flex;
        align-items: center;
        justify-content: center;
        gap: 0.5rem;
        font-weight: 700;
        border-radius: 9999px;
        cursor: pointer;
        text-decoration: none;
        border: none;
        transition: box-shadow 0.2s ease, transform 0.2s ease;
    }
    .btn:hover { transform: scale(1.02); }
    .btn:active { transform: scale(0.98); }
    .btn-primary {
        color: #fff;
        background: linear-gradient(135deg, var(--violet), var(--rose));
        box-shadow: 0 8px 24px rgba(140, 110, 255, 0.3);
    }
    .btn-primary:hover { box-shadow: 0 12px 32px rgba(140, 110, 255, 0.4); }
    .btn-secondary { background: #fff; border: 1px solid var(--violet); color: var(--violet); }
    .btn-sm { padding: 0.5rem 0.75rem; font-size: 0.875rem; }
    .btn-md { padding: 10px 14px; }
    .btn-lg { padding: 0.75rem 1.5rem; font-size: 1.125rem; }
    .btn-disabled { opacity: 0.5; cursor: not-allowed; }
    main { max-width: var(--max-width); margin: 0 auto; padding: 40px 18px 80px; }
    .card {
        border-radius: var(--radius);
        padding: var(--pad);
        box-shadow: var(--shadow);
        border: 2px solid var(--line);
        background: #fff;
        transition: all 0.3s ease-out;
    }
    .gradient-card { background: linear-gradient(180deg, #fff, #faf8ff); }
    .card-hover:hover {
        border-color: var(--violet);
        box-shadow: 0 12px 32px rgba(140, 110, 255, 0.3);
        transform: translateY(-3px);
    }
    .badge {
        display: inline-block;
        font-size: 11px;
        color: #fff;
        padding: 4px 10px;
        border-radius: 9999px;
        font-weight: 700;
        margin-bottom: 10px;
    }
    .badge-gradient { background: linear-gradient(135deg, var(--violet), var(--rose)); }
    .badge-solid { background: var(--violet); }
    .pill { padding: 8px 14px; border-radius: 9999px; font-size: 13px; font-weight: 600; }
    .pill-violet { background: rgba(140, 110, 255, 0.08); color: var(--violet); }
    .pill-muted { background: rgba(107, 104, 128, 0.1); color: var(--muted); }
    .pill-row { display: flex; flex-wrap: wrap; gap: 0.5rem; }
    .eyebrow {
        font-size: 12px;
        font-weight: 600;
        text-transform: uppercase;
        letter-spacing: 0.3px;
        color: var(--muted);
        margin-bottom: 6px;
    }
    .card-title { font-weight: 700; font-size: clamp(20px, 2.4vw, 26px); margin: 0.5rem 0; }
    .bullet-list { padding-left: 1.2rem; color: var(--muted); line-height: 1.7; }
    .section { margin-top: 2rem; }
    .grid-3 { display: grid; gap: 1.25rem; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); }
    .grid-2 { display: grid; gap: 1.25rem; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); }
    .hero {
        margin-top: 1.25rem;
        padding: clamp(2rem, 5vw, 4rem);
        border-radius: var(--radius);
        box-shadow: var(--shadow);
        position: relative;
        overflow: hidden;
        background: radial-gradient(closest-side, rgba(140, 110, 255, 0.12), transparent 60%), #fff;
    }
    .hero h1 { font-size: clamp(32px, 5vw, 56px); line-height: 1.1; margin: 0 0 1.5rem; }
    .hero .highlight {
        background: linear-gradient(135deg, var(--violet), var(--rose));
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .hero-columns { display: grid; gap: 2rem; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); align-items: center; }
    .hero-columns p { color: var(--muted); font-size: 1.1rem; line-height: 1.6; }
    .hero-video { width: 100%; border-radius: 16px; box-shadow: var(--shadow); }
    .hero-cta { margin-top: 1.5rem; }
    .stats { display: grid; gap: 1rem; grid-template-columns: repeat(auto-fit, minmax(140px, 1fr)); }
    .stat-value { font-size: 2rem; font-weight: 800; color: var(--violet); }
    .stat-label { color: var(--muted); font-size: 0.9rem; }
    .disclaimer { color: var(--muted); font-size: 12px; margin-top: 1rem; }
    .contact-actions { display: flex; flex-wrap: wrap; gap: 0.75rem; margin-top: 1rem; }
    .site-footer { text-align: center; color: var(--muted); font-size: 13px; padding: 2.5rem 0 0; }
    @media (max-width: 768px) {
        .nav-links { display: none; }
        main { padding: 24px 12px 60px; }
    }
"#;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub content: Rc<SiteContent>,
    pub modal: ModalStore,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    {
        let meta = props.content.meta.clone();
        use_effect_with_deps(
            move |_| {
                set_document_meta(&meta.title, &meta.description);
                || ()
            },
            (),
        );
    }

    let content = props.content.clone();
    let header = html! { <Header content={content.clone()} modal={props.modal.clone()} /> };
    let sections = html! {
        <>
            <Hero content={content.clone()} modal={Some(props.modal.clone())} />
            <CoreCapabilities content={content.clone()} />
            <Outcomes content={content.clone()} />
            <Showcase showcase={content.showcase.clone()} />
            <Features content={content.clone()} />
            <Security content={content.clone()} />
            <Comparison comparison={content.comparison.clone()} fit={content.fit.clone()} />
            <ContactCta content={content.clone()} modal={Some(props.modal.clone())} />
        </>
    };
    let footer = html! {
        <Footer
            tagline={AttrValue::from(content.meta.tagline.clone())}
            copyright={AttrValue::from(content.footer.copyright.clone())}
        />
    };
    page_layout(header, sections, footer)
}

/// Header, then the page sections in `<main>`, then the footer as a sibling.
fn page_layout(header: Html, sections: Html, footer: Html) -> Html {
    html! {
        <div class="landing-page">
            <style>{LANDING_CSS}</style>
            { header }
            <main>{ sections }</main>
            { footer }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SectionProps {
    content: Rc<SiteContent>,
    #[prop_or_default]
    modal: Option<ModalStore>,
}

#[function_component(Hero)]
fn hero(props: &SectionProps) -> Html {
    let hero = &props.content.hero;
    html! {
        <section class="hero" id="top">
            <h1>
                { &hero.headline.prefix }
                <span class="highlight">{ &hero.headline.highlight }</span>
                { &hero.headline.suffix }
            </h1>
            <div class="hero-columns">
                <div>
                    <p>{ &hero.subheadline }</p>
                    <div class="pill-row">
                        { for hero.pills.iter().map(|pill| html! { <Pill>{ pill }</Pill> }) }
                    </div>
                    <div class="hero-cta">
                        <Button
                            target={Some(hero.cta.target.clone())}
                            modal={props.modal.clone()}
                            size={ButtonSize::Lg}
                        >
                            { &hero.cta.label }
                        </Button>
                    </div>
                </div>
                <video
                    class="hero-video"
                    src={hero.video.src.clone()}
                    poster={hero.video.poster.clone()}
                    aria-label={hero.video.aria_label.clone()}
                    controls=true
                    autoplay=true
                    muted=true
                    loop=true
                    playsinline=true
                ></video>
            </div>
        </section>
    }
}

#[function_component(CoreCapabilities)]
fn core_capabilities(props: &SectionProps) -> Html {
    html! {
        <section class="section grid-3" aria-label="Core capabilities">
            { for props.content.capabilities.iter().map(|capability| html! {
                <Card id={AttrValue::from(capability.anchor())}>
                    <Badge>{ &capability.badge }</Badge>
                    <Eyebrow text={AttrValue::from(capability.eyebrow.clone())} />
                    <h3 class="card-title">{ &capability.title }</h3>
                    <p>{ &capability.description }</p>
                </Card>
            }) }
        </section>
    }
}

#[function_component(Outcomes)]
fn outcomes(props: &SectionProps) -> Html {
    let outcomes = &props.content.outcomes;
    let intelligence = &props.content.brand_intelligence;
    html! {
        <section class="section grid-2" id="intelligence">
            <Card>
                <Eyebrow text={AttrValue::from(outcomes.eyebrow.clone())} />
                <div class="stats">
                    { for outcomes.stats.iter().map(|stat| html! {
                        <div>
                            <div class="stat-value">{ &stat.value }</div>
                            <div class="stat-label">{ &stat.label }</div>
                        </div>
                    }) }
                </div>
                <p class="disclaimer">{ &outcomes.disclaimer }</p>
            </Card>
            <Card>
                <Eyebrow text={AttrValue::from(intelligence.eyebrow.clone())} />
                <h3 class="card-title">{ &intelligence.title }</h3>
                <ul class="bullet-list">
                    { for intelligence.features.iter().map(|feature| match &feature.title {
                        Some(title) => html! {
                            <li><strong>{ title }</strong>{ " " }{ &feature.description }</li>
                        },
                        None => html! { <li>{ &feature.description }</li> },
                    }) }
                </ul>
            </Card>
        </section>
    }
}

fn list_card(card: &ListCard) -> Html {
    html! {
        <Card>
            <Eyebrow text={AttrValue::from(card.eyebrow.clone())} />
            {
                match &card.title {
                    Some(title) => html! { <h3 class="card-title">{ title }</h3> },
                    None => html! {},
                }
            }
            <BulletList items={card.items.clone()} />
        </Card>
    }
}

#[function_component(Features)]
fn features(props: &SectionProps) -> Html {
    let features = &props.content.features;
    html! {
        <>
            <section class="section grid-2" aria-label="Features">
                { list_card(&features.creative) }
                { list_card(&features.integrations) }
            </section>
            <section class="section" aria-label="Measurement">
                { list_card(&props.content.measurement) }
            </section>
        </>
    }
}

#[function_component(Security)]
fn security(props: &SectionProps) -> Html {
    let tech = &props.content.tech_stack;
    html! {
        <section class="section grid-2" id="security">
            { list_card(&props.content.security) }
            <Card>
                <Eyebrow text={AttrValue::from(tech.eyebrow.clone())} />
                <div class="pill-row">
                    { for tech.pills.iter().map(|pill| html! { <Pill>{ pill }</Pill> }) }
                </div>
            </Card>
        </section>
    }
}

#[function_component(ContactCta)]
fn contact_cta(props: &SectionProps) -> Html {
    let contact = &props.content.contact;
    // a plain mailto link for visitors who would rather write themselves
    let email_link = match format_email_link(config::get_contact_email(), Some(&contact.email_subject)) {
        Ok(url) => Some(LinkTarget::NavigateExternal { url, new_tab: false }),
        Err(err) => {
            log::warn!("Hiding email link: {}", err);
            None
        }
    };
    html! {
        <section class="section" id="contact">
            <Card>
                <Eyebrow text={AttrValue::from(contact.eyebrow.clone())} />
                <h3 class="card-title">{ &contact.title }</h3>
                <p>{ &contact.description }</p>
                <div class="contact-actions">
                    <Button target={Some(contact.cta.target.clone())} modal={props.modal.clone()}>
                        { &contact.cta.label }
                    </Button>
                    {
                        match email_link {
                            Some(target) => html! {
                                <Button target={Some(target)} variant={ButtonVariant::Secondary}>
                                    { "Email us" }
                                </Button>
                            },
                            None => html! {},
                        }
                    }
                </div>
            </Card>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use yew::virtual_dom::VNode;

    use super::*;

    fn child_tags(node: &VNode) -> Vec<String> {
        match node {
            VNode::VTag(tag) => tag
                .children()
                .iter()
                .filter_map(|child| match child {
                    VNode::VTag(child) => Some(child.tag().to_string()),
                    _ => None,
                })
                .collect(),
            other => panic!("expected an element, got {:?}", other),
        }
    }

    #[test]
    fn footer_sits_after_main() {
        let page = page_layout(
            html! { <header /> },
            html! { <section /> },
            html! { <footer /> },
        );
        assert_eq!(child_tags(&page), ["style", "header", "main", "footer"]);

        let VNode::VTag(root) = &page else {
            panic!("expected the page wrapper element");
        };
        let main = root
            .children()
            .iter()
            .find(|child| matches!(child, VNode::VTag(tag) if tag.tag() == "main"))
            .unwrap();
        assert!(!child_tags(main).contains(&"footer".to_string()));
    }
}
