/// Convenience result type used across Amble.
pub type AmbleResult<T> = Result<T, AmbleError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum AmbleError {
    /// Invalid user-provided scene configuration or generator parameters.
    #[error("config error: {0}")]
    Config(String),

    /// Errors while resolving or querying the frame timeline.
    #[error("timeline error: {0}")]
    Timeline(String),

    /// Errors from the off-band audio pipeline (synthesis, duration probing).
    #[error("audio error: {0}")]
    Audio(String),

    /// Errors while invoking or driving the external renderer.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AmbleError {
    /// Build an [`AmbleError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build an [`AmbleError::Timeline`] value.
    pub fn timeline(msg: impl Into<String>) -> Self {
        Self::Timeline(msg.into())
    }

    /// Build an [`AmbleError::Audio`] value.
    pub fn audio(msg: impl Into<String>) -> Self {
        Self::Audio(msg.into())
    }

    /// Build an [`AmbleError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
