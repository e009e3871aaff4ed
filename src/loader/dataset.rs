use crate::core::error::{LoadError, ValidationError};
use crate::models::{company::Company, user::User};
use crate::validation::record::{validate_company, validate_user, RecordKind};
use serde_json::Value;
use std::path::Path;
use tracing::{info, warn};

/// Accepted records of one dataset, plus a message for every rejected one
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset<T> {
    pub records: Vec<T>,
    pub errors: Vec<String>,
}

impl<T> Dataset<T> {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of input records this dataset was built from
    pub fn total(&self) -> usize {
        self.records.len() + self.errors.len()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadedDataset {
    Users(Dataset<User>),
    Companies(Dataset<Company>),
}

impl LoadedDataset {
    pub fn kind(&self) -> RecordKind {
        match self {
            LoadedDataset::Users(_) => RecordKind::User,
            LoadedDataset::Companies(_) => RecordKind::Company,
        }
    }

    pub fn into_users(self, path: &Path) -> Result<Dataset<User>, LoadError> {
        match self {
            LoadedDataset::Users(users) => Ok(users),
            other => Err(unexpected(path, RecordKind::User, other.kind())),
        }
    }

    pub fn into_companies(self, path: &Path) -> Result<Dataset<Company>, LoadError> {
        match self {
            LoadedDataset::Companies(companies) => Ok(companies),
            other => Err(unexpected(path, RecordKind::Company, other.kind())),
        }
    }
}

fn unexpected(path: &Path, expected: RecordKind, actual: RecordKind) -> LoadError {
    LoadError::UnexpectedDataset {
        path: path.to_path_buf(),
        expected: expected.as_str(),
        actual: actual.as_str(),
    }
}

/// The dataset kind is decided by file name alone.
pub fn dataset_kind(path: &Path) -> Result<RecordKind, LoadError> {
    match path.file_name().and_then(|name| name.to_str()) {
        Some("users.json") => Ok(RecordKind::User),
        Some("companies.json") => Ok(RecordKind::Company),
        _ => Err(LoadError::UnknownFileType(path.to_path_buf())),
    }
}

/// Read, parse and validate a dataset file
pub fn load_json(path: &Path) -> Result<LoadedDataset, LoadError> {
    let kind = dataset_kind(path)?;

    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let data: Value = serde_json::from_str(&content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let records = data
        .as_array()
        .ok_or_else(|| LoadError::NotAnArray(path.to_path_buf()))?;

    let loaded = match kind {
        RecordKind::User => LoadedDataset::Users(validate_users(records)),
        RecordKind::Company => LoadedDataset::Companies(validate_companies(records)),
    };

    info!(path = %path.display(), kind = kind.as_str(), "Dataset loaded");

    Ok(loaded)
}

pub fn validate_users(records: &[Value]) -> Dataset<User> {
    validate_records(records, RecordKind::User, validate_user)
}

pub fn validate_companies(records: &[Value]) -> Dataset<Company> {
    validate_records(records, RecordKind::Company, validate_company)
}

// Every record is checked; a rejection never stops the fold.
fn validate_records<T, F>(records: &[Value], kind: RecordKind, validate: F) -> Dataset<T>
where
    F: Fn(&Value) -> Result<T, ValidationError>,
{
    let dataset = records.iter().enumerate().fold(
        Dataset {
            records: Vec::with_capacity(records.len()),
            errors: Vec::new(),
        },
        |mut dataset, (index, record)| {
            match validate(record) {
                Ok(valid) => dataset.records.push(valid),
                Err(e) => {
                    warn!(kind = kind.as_str(), index = index, error = %e, "Record rejected");
                    dataset
                        .errors
                        .push(format!("Error in {} at index {}: {}", kind.as_str(), index, e));
                }
            }
            dataset
        },
    );

    info!(
        kind = kind.as_str(),
        accepted = dataset.records.len(),
        rejected = dataset.errors.len(),
        "Validation completed"
    );

    dataset
}
