//! Error types for the rendering engine.

/// Errors returned by [`crate::render`] and the helpers that feed it.
///
/// Every error is raised before any output is produced; a render either
/// yields a complete artifact or one of these.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum RenderError {
    /// A render option is out of range or unrecognized.
    #[error("Invalid option: {0}")]
    InvalidOption(String),

    /// The pixel source is empty, malformed, or could not be decoded.
    #[error("Unreadable source: {0}")]
    UnreadableSource(String),

    /// A quantized symbol fell outside its glyph table.
    #[error("Internal invariant violated: {0}")]
    InternalInvariantViolation(String),
}

impl RenderError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        RenderError::InvalidOption(msg.into())
    }

    pub(crate) fn unreadable(msg: impl Into<String>) -> Self {
        RenderError::UnreadableSource(msg.into())
    }
}
