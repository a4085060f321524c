use thiserror::Error;

#[derive(Debug, Error)]
pub enum JournalError {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Entry not found: {0}")]
    NotFound(String),

    #[error("Invalid entry: {0}")]
    Invalid(String),
}

impl From<JournalError> for String {
    fn from(err: JournalError) -> Self {
        err.to_string()
    }
}
