// Centralized error types for the top-up pipeline

use std::path::PathBuf;
use thiserror::Error;

/// A single record failed one of the field rules.
///
/// Only the first violated rule is reported. Collected per dataset, never
/// propagated across records.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid {0}: must be a positive integer")]
    NotPositiveInteger(&'static str),

    #[error("Invalid {0}: must be a non-negative integer")]
    NotNonNegativeInteger(&'static str),

    #[error("Invalid {0}: must be a boolean")]
    NotBoolean(&'static str),

    #[error("Invalid record: must be a JSON object")]
    NotAnObject,
}

impl ValidationError {
    /// Name of the field that broke the rule, if the failure is field-level
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ValidationError::MissingField(field)
            | ValidationError::NotPositiveInteger(field)
            | ValidationError::NotNonNegativeInteger(field)
            | ValidationError::NotBoolean(field) => Some(*field),
            ValidationError::NotAnObject => None,
        }
    }
}

/// Fatal errors while reading a dataset from disk
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Unknown file type: {}", .0.display())]
    UnknownFileType(PathBuf),

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Expected a JSON array of records in {}", .0.display())]
    NotAnArray(PathBuf),

    #[error("Expected {expected} data in {}, found {actual} data", .path.display())]
    UnexpectedDataset {
        path: PathBuf,
        expected: &'static str,
        actual: &'static str,
    },
}

/// Persisting the rendered report failed
#[derive(Error, Debug)]
pub enum WriteError {
    #[error("Error creating directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error writing to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Anything that stops a run before the report is written
#[derive(Error, Debug)]
pub enum RunError {
    #[error("Cannot proceed due to validation errors")]
    Validation {
        user_errors: Vec<String>,
        company_errors: Vec<String>,
    },

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Write(#[from] WriteError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ValidationError::MissingField("tokens").to_string(),
            "Missing required field: tokens"
        );
        assert_eq!(
            ValidationError::NotPositiveInteger("company_id").to_string(),
            "Invalid company_id: must be a positive integer"
        );
        assert_eq!(
            ValidationError::NotNonNegativeInteger("tokens").to_string(),
            "Invalid tokens: must be a non-negative integer"
        );
        assert_eq!(
            ValidationError::NotBoolean("active_status").to_string(),
            "Invalid active_status: must be a boolean"
        );
    }

    #[test]
    fn test_validation_field() {
        assert_eq!(ValidationError::NotBoolean("email_status").field(), Some("email_status"));
        assert_eq!(ValidationError::NotAnObject.field(), None);
    }

    #[test]
    fn test_unknown_file_type_message() {
        let err = LoadError::UnknownFileType(PathBuf::from("input/orders.json"));
        assert_eq!(err.to_string(), "Unknown file type: input/orders.json");
    }

    #[test]
    fn test_write_error_names_path() {
        let err = WriteError::Write {
            path: PathBuf::from("output/output.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Write error"),
        };
        assert_eq!(err.to_string(), "Error writing to output/output.txt: Write error");
    }
}
