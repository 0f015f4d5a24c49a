use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum InstallError {
    #[error("failed to run {program} for dependency install: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("dependency install from {manifest:?} failed with {status}")]
    Failed { manifest: PathBuf, status: ExitStatus },
}

/// Install the Python dependencies listed in `manifest` via
/// `<python> -m pip install -r <manifest>`.
///
/// The installer's output is inherited so pip progress stays visible. A
/// non-zero status aborts the launcher before the credential gate runs.
pub async fn install_requirements(python: &str, manifest: &Path) -> Result<(), InstallError> {
    info!(manifest = %manifest.display(), "Installing Python dependencies");

    let status = Command::new(python)
        .args(["-m", "pip", "install", "-r"])
        .arg(manifest)
        .status()
        .await
        .map_err(|source| InstallError::Spawn {
            program: python.to_string(),
            source,
        })?;

    if !status.success() {
        return Err(InstallError::Failed {
            manifest: manifest.to_path_buf(),
            status,
        });
    }

    debug!("Dependency install completed");
    Ok(())
}
