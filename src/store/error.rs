//! Store error types.

use thiserror::Error;

/// Errors that can occur while loading or saving the pet's record
#[derive(Debug, Error)]
pub enum StoreError {
    /// Serializing the record to JSON failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// The persisted document could not be parsed as a pet record
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Reading or writing the backing storage failed
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
