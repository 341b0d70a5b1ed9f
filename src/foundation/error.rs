/// Crate-wide result alias.
pub type DrawingResult<T> = Result<T, DrawingError>;

/// Errors raised at the parsing and animation-setup boundary.
///
/// Path generation never fails; degenerate geometry yields empty or minimal paths.
#[derive(thiserror::Error, Debug)]
pub enum DrawingError {
    /// Invalid input value.
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid animation setup.
    #[error("animation error: {0}")]
    Animation(String),

    /// Malformed serialized input.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DrawingError {
    /// Build a [`DrawingError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`DrawingError::Animation`].
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`DrawingError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for DrawingError {
    fn from(e: serde_json::Error) -> Self {
        Self::serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
