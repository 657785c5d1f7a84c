use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error while accessing a file or resource: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file exists but does not hold a mapping of contacts.
    #[error("Contact file {path:?} is corrupt: {source}")]
    StorageCorrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("{0} Not found")]
    NotFound(String),

    #[error("Contact '{0}' already exists")]
    AlreadyExists(String),

    /// Two stored keys collapse to the same lowercase name.
    #[error("Contact file holds more than one record for '{0}'")]
    DuplicateKey(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_not_found_message() {
        let err = AppError::NotFound("Contact".to_string());

        assert_eq!(format!("{}", err), "Contact Not found");
    }

    #[test]
    fn confirm_validation_error() {
        let err = AppError::Validation("Name must not be empty".to_string());

        assert_eq!(
            format!("{}", err),
            "Validation failed: Name must not be empty"
        );
    }

    #[test]
    fn duplicate_key_names_the_contact() {
        let err = AppError::DuplicateKey("alice".to_string());

        assert_eq!(err.to_string(), "Contact file holds more than one record for 'alice'");
    }

    #[test]
    fn storage_corrupt_names_the_file() {
        let source = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = AppError::StorageCorrupt {
            path: PathBuf::from("contacts.json"),
            source,
        };

        let message = err.to_string();
        assert!(message.contains("contacts.json"));
        assert!(message.contains("corrupt"));
    }
}
