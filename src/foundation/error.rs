/// Result alias used by every fallible library API.
pub type FolioResult<T> = Result<T, FolioError>;

/// Error taxonomy for page configuration and choreography.
#[derive(thiserror::Error, Debug)]
pub enum FolioError {
    /// Invalid arguments or page data.
    #[error("validation error: {0}")]
    Validation(String),

    /// A state-machine edge taken from the wrong phase or out of order.
    #[error("phase error: {0}")]
    Phase(String),

    /// Timing table or page configuration that breaks an ordering or range rule.
    #[error("config error: {0}")]
    Config(String),

    /// JSON that could not be parsed into the page model.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FolioError {
    /// Build a [`FolioError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FolioError::Phase`] value.
    pub fn phase(msg: impl Into<String>) -> Self {
        Self::Phase(msg.into())
    }

    /// Build a [`FolioError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`FolioError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for FolioError {
    fn from(value: serde_json::Error) -> Self {
        Self::serde(value.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
