use crate::config::EnvFileError;
use crate::install::InstallError;
use crate::launch::LaunchError;
use thiserror::Error;

/// Launcher-level failure. Every variant is fatal; the process exits non-zero.
#[derive(Debug, Error)]
pub enum LauncherError {
    #[error("dependency installation failed: {0}")]
    Install(#[from] InstallError),

    #[error("environment resolution failed: {0}")]
    Env(#[from] EnvFileError),

    #[error("required credential {key} is not configured")]
    MissingCredential { key: &'static str },

    #[error("server launch failed: {0}")]
    Launch(#[from] LaunchError),
}
