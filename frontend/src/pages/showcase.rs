use yew::prelude::*;

use crate::components::card::{Card, Eyebrow};
use crate::content;
use crate::state::showcase::{ShowcaseEvent, ShowcaseFocus};

const SHOWCASE_CSS: &str = r#"
    .showcase-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
        gap: 2rem;
        place-items: center;
        margin-top: 2rem;
    }
    .showcase-item {
        display: flex;
        flex-direction: column;
        align-items: center;
        width: 100%;
        max-width: 320px;
        position: relative;
        transition: all 0.3s ease;
    }
    .showcase-item.active { z-index: 50; transform: scale(1.05); }
    .platform-badge {
        display: flex;
        align-items: center;
        gap: 0.25rem;
        font-size: 11px;
        font-weight: 600;
        padding: 0.375rem 0.75rem;
        border-radius: 9999px;
        margin-bottom: 0.75rem;
        color: #fff;
    }
    .platform-tiktok { background: #000; }
    .platform-instagram-reel { background: linear-gradient(90deg, #a855f7, #ec4899, #f97316); }
    .platform-instagram-post { background: linear-gradient(90deg, #a855f7, #ec4899); }
    .platform-youtube-short { background: #dc2626; }
    .platform-generic { background: #4b5563; }
    .video-frame { position: relative; display: flex; justify-content: center; z-index: 10; }
    .showcase-item.active .video-frame { z-index: 50; }
    .video-frame-narrow { width: clamp(200px, 22vw, 280px); }
    .video-frame-square { width: clamp(200px, 25vw, 320px); }
    .video-frame-wide { width: clamp(280px, 32vw, 400px); }
    .video-shell {
        position: relative;
        width: 100%;
        overflow: hidden;
        border-radius: 16px;
        background: #f3f4f6;
        border: 2px solid var(--line);
        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
        transition: all 0.3s ease;
    }
    .showcase-item.active .video-shell {
        border-color: var(--violet);
        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
        transform: scale(1.02);
    }
    .video-shell video { width: 100%; height: 100%; object-fit: cover; display: block; }
    .aspect-vertical { aspect-ratio: 9 / 16; }
    .aspect-square { aspect-ratio: 1 / 1; }
    .aspect-portrait { aspect-ratio: 4 / 5; }
    .aspect-landscape { aspect-ratio: 16 / 9; }
    .format-label {
        position: absolute;
        bottom: 0.5rem;
        right: 0.5rem;
        background: rgba(0, 0, 0, 0.8);
        color: #fff;
        font-size: 10px;
        font-family: monospace;
        padding: 0.25rem 0.5rem;
        border-radius: 6px;
    }
    .video-glow {
        position: absolute;
        inset: 0;
        z-index: -10;
        filter: blur(24px);
        border-radius: 16px;
        opacity: 0;
        background: linear-gradient(135deg, var(--violet), var(--rose));
        transition: opacity 0.3s ease;
    }
    .video-frame:hover .video-glow { opacity: 0.5; }
    .showcase-item.active .video-glow { opacity: 0.6; }
    .showcase-dim {
        position: absolute;
        inset: 0;
        background: rgba(255, 255, 255, 0.3);
        backdrop-filter: blur(1px);
        border-radius: 16px;
        z-index: 20;
        pointer-events: none;
    }
    .showcase-note { color: var(--muted); font-size: 12px; margin-top: 2rem; text-align: center; }
"#;

fn dispatch_on<E: 'static>(focus: &UseReducerHandle<ShowcaseFocus>, event: ShowcaseEvent) -> Callback<E> {
    let focus = focus.clone();
    Callback::from(move |_: E| focus.dispatch(event))
}

#[derive(Properties, PartialEq)]
pub struct ShowcaseProps {
    pub showcase: content::Showcase,
}

/// Grid of platform clips. Hovering or playing a clip brings it forward and
/// dims the rest.
#[function_component(Showcase)]
pub fn showcase(props: &ShowcaseProps) -> Html {
    let focus = use_reducer(ShowcaseFocus::default);
    let showcase = &props.showcase;

    let item = |index: usize, video: &content::Video| {
        let active = focus.is_active(index);
        html! {
            <div
                class={classes!("showcase-item", active.then_some("active"))}
                onmouseenter={dispatch_on::<MouseEvent>(&focus, ShowcaseEvent::HoverEnter(index))}
                onmouseleave={dispatch_on::<MouseEvent>(&focus, ShowcaseEvent::HoverLeave)}
            >
                <div class={classes!("platform-badge", video.platform.badge_class())}>
                    <span aria-hidden="true">{ video.platform.icon() }</span>
                    <span>{ video.platform.label() }</span>
                </div>
                <div class={classes!("video-frame", video.format.frame_class())}>
                    <div class="video-shell">
                        <video
                            class={video.format.aspect_class()}
                            aria-label={video.aria_label.clone()}
                            poster={video.poster.clone()}
                            controls=true
                            preload="metadata"
                            muted=true
                            loop=true
                            onplay={dispatch_on::<Event>(&focus, ShowcaseEvent::Play(index))}
                            onpause={dispatch_on::<Event>(&focus, ShowcaseEvent::Pause(index))}
                            onended={dispatch_on::<Event>(&focus, ShowcaseEvent::Ended(index))}
                        >
                            <source src={video.src.clone()} type="video/mp4" />
                            { "Your browser does not support the video tag." }
                        </video>
                        <div class="format-label">{ video.format.label() }</div>
                    </div>
                    <div class="video-glow" aria-hidden="true"></div>
                </div>
                {
                    if focus.is_dimmed(index) {
                        html! { <div class="showcase-dim"></div> }
                    } else {
                        html! {}
                    }
                }
            </div>
        }
    };

    html! {
        <section class="section" aria-label="Showcase">
            <style>{SHOWCASE_CSS}</style>
            <Card>
                <Eyebrow text={AttrValue::from(showcase.eyebrow.clone())} />
                <h2 class="card-title">{ &showcase.title }</h2>
                {
                    match &showcase.subtitle {
                        Some(subtitle) => html! { <p class="showcase-subtitle">{ subtitle }</p> },
                        None => html! {},
                    }
                }
                <div class="showcase-grid">
                    { for showcase.videos.iter().enumerate().map(|(index, video)| item(index, video)) }
                </div>
                {
                    match &showcase.note {
                        Some(note) => html! { <p class="showcase-note">{ note }</p> },
                        None => html! {},
                    }
                }
            </Card>
        </section>
    }
}
