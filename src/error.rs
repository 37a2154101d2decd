//! Error type shared by the extractors, the gatherer and the page writer

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub type Result<T, E = GatherError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum GatherError {
    #[error("incompatible antiSMASH results file schema version: {0}")]
    IncompatibleSchema(i64),

    #[error("No results file ('*.json') in result directory: {}", .0.display())]
    NoResultsFile(PathBuf),

    #[error("Javascript data does not contain relevant results: {}", .0.display())]
    MissingResultsData(PathBuf),

    #[error("No result directories provided in {}", .0.display())]
    NoResultDirectories(PathBuf),

    #[error("malformed module data for {anchor}: {reason}")]
    MalformedBubbleData { anchor: String, reason: String },

    #[error("invalid JSON in {}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot access {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl GatherError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        GatherError::Io { path: path.to_path_buf(), source }
    }

    pub(crate) fn json(path: &Path, source: serde_json::Error) -> Self {
        GatherError::Json { path: path.to_path_buf(), source }
    }
}
