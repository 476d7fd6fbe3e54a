/// Convenience result type used across Portray.
pub type PortrayResult<T> = Result<T, PortrayError>;

/// Top-level error taxonomy used by library APIs.
#[derive(thiserror::Error, Debug)]
pub enum PortrayError {
    /// Invalid user-provided or manifest data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing a manifest.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PortrayError {
    /// Build a [`PortrayError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PortrayError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
