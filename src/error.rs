use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the dashboard library.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to parse dataset: {0}")]
    Dataset(#[from] serde_json::Error),

    #[error("invalid date {date:?} in dataset: {source}")]
    InvalidDate {
        date: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to persist preferences: {0}")]
    Preferences(String),

    #[error("failed to render chart: {0}")]
    Render(String),

    #[error("background task failed: {0}")]
    Task(String),

    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
