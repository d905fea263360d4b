use std::path::PathBuf;

use thiserror::Error;

pub type DashResult<T> = Result<T, DashError>;

#[derive(Debug, Error)]
pub enum DashError {
    #[error("failed to read `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing required column `{0}`")]
    MissingColumn(&'static str),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("server error: {0}")]
    Server(String),
}
