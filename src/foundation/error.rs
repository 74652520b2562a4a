/// Crate-wide result alias.
pub type RouteFxResult<T> = Result<T, RouteFxError>;

/// Errors raised while building or validating overlay configuration.
///
/// Orchestration itself never fails: stale timers and repeated navigation are
/// handled structurally, so these variants only surface from configuration
/// loading and parsing.
#[derive(thiserror::Error, Debug)]
pub enum RouteFxError {
    /// A value is out of its permitted range or structurally inconsistent.
    #[error("validation error: {0}")]
    Validation(String),

    /// A configuration key or strategy name is unknown.
    #[error("config error: {0}")]
    Config(String),

    /// JSON (de)serialization failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Anything else, with its source preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RouteFxError {
    /// Build a [`RouteFxError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`RouteFxError::Config`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`RouteFxError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for RouteFxError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
