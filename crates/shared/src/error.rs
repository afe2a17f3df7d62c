use thiserror::Error;

/// Why a submission could not be resolved. Every variant renders as canvas
/// content; the message text is what the widget user sees.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error("User Address is required")]
    MissingAddress,
    #[error("Space Id or Campaign Id is required")]
    MissingTarget,
    #[error("Space Id must be a positive integer, got '{0}'")]
    MalformedTarget(String),
    #[error("could not decode submission: {0}")]
    MalformedPayload(String),
    #[error("remote query failed: {0}")]
    RemoteQuery(String),
}

impl SubmitError {
    pub fn remote(cause: impl std::fmt::Display) -> Self {
        Self::RemoteQuery(cause.to_string())
    }
}
