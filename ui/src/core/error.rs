//! Error type shared by the navbar loader, the DOM adapters and the lead ledger.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("fetching navbar fragment {url} failed: {reason}")]
    FragmentFetch { url: String, reason: String },

    #[error("navbar fragment {url} returned HTTP {status}")]
    FragmentStatus { url: String, status: u16 },

    #[error("local storage is unavailable")]
    StorageUnavailable,

    #[error("local storage error on `{key}`: {reason}")]
    Storage { key: String, reason: String },

    #[error("required element `{0}` not found")]
    MissingElement(String),

    #[error("malformed CSV at line {line}: {reason}")]
    Csv { line: usize, reason: &'static str },

    #[error("download failed: {0}")]
    Download(String),

    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SiteError>;
