// crates/aqdash-core/src/error.rs
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AqError>;

/// Errors surfaced by the fallible loader API and the view helpers.
///
/// The dashboard-facing entry points ([`crate::load_cities`],
/// [`crate::classify`]) never return these: they degrade to an empty list or
/// a default band instead.
#[derive(Debug, Error)]
pub enum AqError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
