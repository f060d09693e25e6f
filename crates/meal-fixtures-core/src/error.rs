use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FixtureError>;

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("sample catalog is empty; at least one sample meal is required")]
    EmptyCatalog,

    #[error("failed to serialize meal records: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to write fixture file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read fixture file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse fixture file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid creation timestamp `{input}`: {source}")]
    Timestamp {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
}
