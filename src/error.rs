//! Error types for persistence and draft validation.

use thiserror::Error;

use crate::bet::BetField;

/// Failures while reading or writing the persisted bet list.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The storage backend refused the operation
    #[error("Storage error: {0}")]
    Storage(String),

    /// Persisted bytes were not a valid bet list, or could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

impl From<gloo::storage::errors::StorageError> for StoreError {
    fn from(err: gloo::storage::errors::StorageError) -> Self {
        use gloo::storage::errors::StorageError as Gloo;
        match err {
            Gloo::SerdeError(e) => StoreError::Serialization(e.to_string()),
            other => StoreError::Storage(other.to_string()),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Why a draft could not be turned into a bet.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftError {
    #[error("{0} is required")]
    MissingField(BetField),

    #[error("{0} is not a number")]
    NotANumber(BetField),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::Storage("quota exceeded".to_string());
        assert_eq!(err.to_string(), "Storage error: quota exceeded");

        let err = DraftError::MissingField(BetField::Title);
        assert_eq!(err.to_string(), "title is required");

        let err = DraftError::NotANumber(BetField::Multiplier);
        assert_eq!(err.to_string(), "multiplier is not a number");
    }

    #[test]
    fn test_serde_error_conversion() {
        let json_err = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let err: StoreError = json_err.into();
        assert!(matches!(err, StoreError::Serialization(_)));
    }
}
