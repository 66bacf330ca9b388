//! Error types for Guru

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A required top-level field was absent from the input
    #[error("{0}")]
    MissingField(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Base64 decode error: {0}")]
    Encoding(#[from] base64::DecodeError),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl Error {
    /// A top-level request field (e.g. `expenses`) is missing
    pub fn missing_data(field: &str) -> Self {
        Self::MissingField(format!("Missing '{}' data", field))
    }

    /// No record in an expense list carries the given key
    pub fn missing_column(field: &str) -> Self {
        Self::MissingField(format!("Missing '{}' column in expense data", field))
    }

    /// Whether this error was caused by the caller omitting a field
    pub fn is_missing_field(&self) -> bool {
        matches!(self, Self::MissingField(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
