//! Error types for georadius

use thiserror::Error;

/// Main error type for georadius operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Invalid point: {0}")]
    InvalidPoint(String),

    #[error("Unknown region: {0}")]
    UnknownRegion(String),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Server error: {0}")]
    Server(String),
}

/// Result type alias for georadius operations
pub type Result<T> = std::result::Result<T, Error>;
