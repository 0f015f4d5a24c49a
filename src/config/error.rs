use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while locating or reading an environment file
#[derive(Debug, Error)]
pub enum EnvFileError {
    #[error("environment file not found at {path:?}")]
    NotFound { path: PathBuf },

    #[error("failed to read environment file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse environment file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}
