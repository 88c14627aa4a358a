/// Convenience result type used across the crate.
pub type SceneResult<T> = Result<T, SceneError>;

/// Top-level error taxonomy used by object and surface APIs.
#[derive(thiserror::Error, Debug)]
pub enum SceneError {
    /// A payload was required but the object carries none.
    #[error("null object data: {0}")]
    NullData(&'static str),

    /// The surface backend cannot perform this operation on its resource kind.
    #[error("unsupported operation {operation} on {backend}")]
    Unsupported {
        /// Name of the rejected operation.
        operation: &'static str,
        /// Backend type that rejected it.
        backend: &'static str,
    },

    /// Invalid caller-provided data (indices, coordinates, definitions).
    #[error("validation error: {0}")]
    Validation(String),

    /// A named surface or image could not be resolved or decoded.
    #[error("asset error: {0}")]
    Asset(String),

    /// Errors when serializing or deserializing scene data.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SceneError {
    /// Build a [`SceneError::Unsupported`] value.
    pub fn unsupported(operation: &'static str, backend: &'static str) -> Self {
        Self::Unsupported { operation, backend }
    }

    /// Build a [`SceneError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SceneError::Asset`] value.
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    /// Build a [`SceneError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Name of the rejected operation, if this is a capability error.
    pub fn unsupported_operation(&self) -> Option<&'static str> {
        match self {
            Self::Unsupported { operation, .. } => Some(operation),
            _ => None,
        }
    }

    /// Whether this error is a backend capability gap rather than a data fault.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
