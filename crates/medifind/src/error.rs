//! Error types for the MediFind library.

use std::path::PathBuf;
use thiserror::Error;

use crate::validation::FieldErrors;

/// Main error type for MediFind operations.
#[derive(Debug, Error)]
pub enum MedifindError {
    /// The backing store exists but could not be read or decoded.
    #[error("Could not read provider data from '{path}': {message}")]
    StoreRead { path: PathBuf, message: String },

    /// The backing store could not be written.
    #[error("Could not save provider data to '{path}': {message}")]
    StoreWrite { path: PathBuf, message: String },

    /// Request body is not a JSON object.
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    /// One or more payload fields failed validation.
    #[error("Invalid provider data: {0}")]
    Validation(FieldErrors),
}

impl MedifindError {
    /// Whether the error was caused by the caller's input rather than the service.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            MedifindError::MalformedPayload(_) | MedifindError::Validation(_)
        )
    }
}

/// Result type alias for MediFind operations.
pub type Result<T> = std::result::Result<T, MedifindError>;
