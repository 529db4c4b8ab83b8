/// Convenience result type used across the crate.
pub type PlateResult<T> = Result<T, PlateError>;

/// Top-level error taxonomy.
///
/// Plate generation itself is total over its clamped parameter domain, so these errors only
/// surface at the boundaries: parsing parameter documents, validating batches, building worker
/// pools and writing files.
#[derive(thiserror::Error, Debug)]
pub enum PlateError {
    /// Invalid caller-provided data that cannot be repaired by clamping.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing parameter documents.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Filesystem or encoder failures while writing outputs.
    #[error("io error: {0}")]
    Io(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PlateError {
    /// Build a [`PlateError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PlateError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`PlateError::Io`] value.
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
