use serde::Deserialize;

use crate::error::SiteError;
use crate::state::showcase::{Platform, VideoFormat};

const SITE_JSON: &str = include_str!("../content/site.json");

/// Where a link or call-to-action goes. Fixed in the content document so the
/// views never have to guess from the shape of a URL.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LinkTarget {
    NavigateInternal {
        path: String,
    },
    NavigateExternal {
        url: String,
        #[serde(default)]
        new_tab: bool,
    },
    TriggerModal,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NavLink {
    pub label: String,
    #[serde(default)]
    pub aria_label: Option<String>,
    pub target: LinkTarget,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SiteMeta {
    pub brand: String,
    pub title: String,
    pub description: String,
    pub tagline: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Navigation {
    pub links: Vec<NavLink>,
    pub cta: NavLink,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Headline {
    pub prefix: String,
    pub highlight: String,
    pub suffix: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Video {
    pub src: String,
    pub aria_label: String,
    #[serde(default)]
    pub poster: Option<String>,
    #[serde(default)]
    pub platform: Platform,
    #[serde(default)]
    pub format: VideoFormat,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Hero {
    pub headline: Headline,
    pub subheadline: String,
    pub pills: Vec<String>,
    pub cta: NavLink,
    pub video: Video,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Capability {
    pub badge: String,
    pub eyebrow: String,
    pub title: String,
    pub description: String,
}

impl Capability {
    /// In-page anchor the header navigation points at.
    pub fn anchor(&self) -> String {
        self.badge.to_lowercase()
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Outcomes {
    pub eyebrow: String,
    pub stats: Vec<Stat>,
    pub disclaimer: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub title: Option<String>,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BrandIntelligence {
    pub eyebrow: String,
    pub title: String,
    pub features: Vec<Feature>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Showcase {
    pub eyebrow: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub videos: Vec<Video>,
    #[serde(default)]
    pub note: Option<String>,
}

/// Eyebrow, title and a bullet list; most cards on the page have this shape.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ListCard {
    pub eyebrow: String,
    #[serde(default)]
    pub title: Option<String>,
    pub items: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Features {
    pub creative: ListCard,
    pub integrations: ListCard,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TechStack {
    pub eyebrow: String,
    pub pills: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ComparisonRow {
    pub dimension: String,
    pub ours: String,
    pub competitor: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Comparison {
    pub title: String,
    pub aria_label: String,
    pub headers: [String; 3],
    pub rows: Vec<ComparisonRow>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Fit {
    pub ours: ListCard,
    pub others: ListCard,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Contact {
    pub eyebrow: String,
    pub title: String,
    pub description: String,
    pub cta: NavLink,
    /// Subject line for the plain "email us" fallback link.
    pub email_subject: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DemoFormCopy {
    pub modal_title: String,
    pub intro: String,
    pub success_title: String,
    pub success_message: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Footer {
    pub copyright: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SiteContent {
    pub meta: SiteMeta,
    pub navigation: Navigation,
    pub hero: Hero,
    pub capabilities: Vec<Capability>,
    pub outcomes: Outcomes,
    pub brand_intelligence: BrandIntelligence,
    pub showcase: Showcase,
    pub features: Features,
    pub measurement: ListCard,
    pub security: ListCard,
    pub tech_stack: TechStack,
    pub comparison: Comparison,
    pub fit: Fit,
    pub contact: Contact,
    pub demo_form: DemoFormCopy,
    pub footer: Footer,
}

/// Parses the content bundled into the binary.
pub fn load() -> Result<SiteContent, SiteError> {
    parse(SITE_JSON)
}

pub fn parse(raw: &str) -> Result<SiteContent, SiteError> {
    let content: SiteContent = serde_json::from_str(raw)?;
    log::debug!(
        "Loaded site content: {} nav links, {} showcase videos",
        content.navigation.links.len(),
        content.showcase.videos.len()
    );
    Ok(content)
}
