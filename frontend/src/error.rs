use thiserror::Error;

use crate::state::demo_form::FormField;

#[derive(Debug, Error)]
pub enum SiteError {
    /// A view that drives the demo modal was rendered without a store handle.
    #[error("{consumer} needs the demo modal store but none was provided")]
    ContextUnavailable { consumer: &'static str },

    #[error("could not compose demo request email: {0}")]
    CompositionFailure(String),

    #[error("{} is required", .0.label())]
    MissingField(FormField),

    #[error("unknown role: {0:?}")]
    UnknownRole(String),

    #[error("site content is malformed: {0}")]
    Content(#[from] serde_json::Error),
}
