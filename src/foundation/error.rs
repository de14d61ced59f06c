/// Convenience result type used across keyline.
pub type KeylineResult<T> = Result<T, KeylineError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum KeylineError {
    /// Malformed geometry or color, duplicate ids, out-of-bounds placement, bad time ordering,
    /// broken continuity between chained motions.
    #[error("validation error: {0}")]
    Validation(String),

    /// Operation is not allowed in the current lifecycle state.
    #[error("state error: {0}")]
    State(String),

    /// Unknown shape id, keyframe tick, or no shape under a queried point.
    #[error("lookup error: {0}")]
    Lookup(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl KeylineError {
    /// Build a [`KeylineError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`KeylineError::State`] value.
    pub fn state(msg: impl Into<String>) -> Self {
        Self::State(msg.into())
    }

    /// Build a [`KeylineError::Lookup`] value.
    pub fn lookup(msg: impl Into<String>) -> Self {
        Self::Lookup(msg.into())
    }

    /// Build a [`KeylineError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    pub(crate) fn unknown_shape(id: &str) -> Self {
        Self::Lookup(format!("unknown shape id '{id}'"))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
