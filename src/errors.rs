use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Rusqlite error: {0}")]
    Rusqlite(#[from] rusqlite::Error),

    #[error("Failed to parse imported presets: {0}")]
    ImportParse(#[source] serde_json::Error),

    #[error("Unknown measurement unit: {0}")]
    InvalidUnit(String),

    #[error("Cannot remove the last remaining week of a schedule")]
    LastWeek,
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
