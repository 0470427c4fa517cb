use std::rc::Rc;

use serde::Deserialize;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Platform {
    Tiktok,
    InstagramReel,
    InstagramPost,
    YoutubeShort,
    #[default]
    #[serde(other)]
    Generic,
}

impl Platform {
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Tiktok => "TikTok",
            Platform::InstagramReel => "Instagram Reels",
            Platform::InstagramPost => "Instagram Post",
            Platform::YoutubeShort => "YouTube Shorts",
            Platform::Generic => "Video",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Platform::Tiktok => "♪",
            Platform::InstagramPost => "□",
            Platform::InstagramReel | Platform::YoutubeShort | Platform::Generic => "▶",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Platform::Tiktok => "platform-tiktok",
            Platform::InstagramReel => "platform-instagram-reel",
            Platform::InstagramPost => "platform-instagram-post",
            Platform::YoutubeShort => "platform-youtube-short",
            Platform::Generic => "platform-generic",
        }
    }
}

/// Aspect ratio a clip was cut for. Anything unrecognised plays as 16:9.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub enum VideoFormat {
    #[serde(rename = "9:16")]
    Vertical,
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "4:5")]
    Portrait,
    #[default]
    #[serde(rename = "16:9", other)]
    Landscape,
}

impl VideoFormat {
    pub fn label(&self) -> &'static str {
        match self {
            VideoFormat::Vertical => "Vertical",
            VideoFormat::Square => "Square",
            VideoFormat::Portrait => "Portrait",
            VideoFormat::Landscape => "Landscape",
        }
    }

    pub fn aspect_class(&self) -> &'static str {
        match self {
            VideoFormat::Vertical => "aspect-vertical",
            VideoFormat::Square => "aspect-square",
            VideoFormat::Portrait => "aspect-portrait",
            VideoFormat::Landscape => "aspect-landscape",
        }
    }

    pub fn frame_class(&self) -> &'static str {
        match self {
            VideoFormat::Vertical => "video-frame-narrow",
            VideoFormat::Square => "video-frame-square",
            VideoFormat::Portrait | VideoFormat::Landscape => "video-frame-wide",
        }
    }
}

/// Which showcase clip is in front, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShowcaseFocus {
    pub active: Option<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShowcaseEvent {
    HoverEnter(usize),
    HoverLeave,
    Play(usize),
    Pause(usize),
    Ended(usize),
}

impl ShowcaseFocus {
    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// True for every clip other than the active one while a clip is active.
    pub fn is_dimmed(&self, index: usize) -> bool {
        matches!(self.active, Some(active) if active != index)
    }

    fn apply(self, event: ShowcaseEvent) -> Self {
        let active = match event {
            ShowcaseEvent::HoverEnter(index) | ShowcaseEvent::Play(index) => Some(index),
            ShowcaseEvent::HoverLeave => None,
            ShowcaseEvent::Pause(index) | ShowcaseEvent::Ended(index) => {
                if self.active == Some(index) {
                    None
                } else {
                    self.active
                }
            }
        };
        ShowcaseFocus { active }
    }
}

impl Reducible for ShowcaseFocus {
    type Action = ShowcaseEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(events: &[ShowcaseEvent]) -> ShowcaseFocus {
        *events
            .iter()
            .fold(Rc::new(ShowcaseFocus::default()), |focus, event| focus.reduce(*event))
    }

    #[test]
    fn hover_and_play_take_focus() {
        use ShowcaseEvent::*;
        assert_eq!(run(&[HoverEnter(2)]).active, Some(2));
        assert_eq!(run(&[HoverEnter(2), Play(0)]).active, Some(0));
        assert_eq!(run(&[Play(1), HoverLeave]).active, None);
    }

    #[test]
    fn pause_and_end_only_clear_their_own_clip() {
        use ShowcaseEvent::*;
        assert_eq!(run(&[Play(1), Pause(3)]).active, Some(1));
        assert_eq!(run(&[Play(1), Pause(1)]).active, None);
        assert_eq!(run(&[Play(1), Ended(2)]).active, Some(1));
        assert_eq!(run(&[Play(1), Ended(1)]).active, None);
        assert_eq!(run(&[Pause(0)]).active, None);
    }

    #[test]
    fn other_clips_dim_while_one_is_active() {
        let idle = ShowcaseFocus::default();
        assert!((0..4).all(|i| !idle.is_dimmed(i)));

        let focus = run(&[ShowcaseEvent::HoverEnter(1)]);
        assert!(focus.is_active(1));
        assert!(!focus.is_dimmed(1));
        assert!(focus.is_dimmed(0));
        assert!(focus.is_dimmed(3));
    }

    #[test]
    fn formats_and_platforms_parse_from_content_strings() {
        let formats: Vec<VideoFormat> =
            serde_json::from_str(r#"["9:16", "1:1", "4:5", "16:9", "21:9"]"#).unwrap();
        assert_eq!(
            formats,
            vec![
                VideoFormat::Vertical,
                VideoFormat::Square,
                VideoFormat::Portrait,
                VideoFormat::Landscape,
                VideoFormat::Landscape,
            ]
        );

        let platforms: Vec<Platform> =
            serde_json::from_str(r#"["tiktok", "instagram-reel", "youtube-short", "vimeo"]"#).unwrap();
        assert_eq!(
            platforms,
            vec![Platform::Tiktok, Platform::InstagramReel, Platform::YoutubeShort, Platform::Generic]
        );
        assert_eq!(Platform::Generic.label(), "Video");
        assert_eq!(VideoFormat::Square.label(), "Square");
    }
}
