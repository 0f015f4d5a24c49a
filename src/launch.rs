use crate::config::ResolvedEnv;
use std::path::Path;
use thiserror::Error;
use tokio::process::Command;
use tracing::info;

/// Listen address convention printed in the startup banner. The server itself
/// owns the actual bind; these lines are informational only.
pub const API_URL: &str = "http://localhost:8000";

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("failed to start server process {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed waiting for server process: {source}")]
    Wait {
        #[source]
        source: std::io::Error,
    },
}

/// Command line for the server process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl LaunchSpec {
    /// `<python> <entry>`, plus `--reload` when requested. Reload is
    /// suppressed on Windows, where the server does not support it.
    pub fn server(python: &str, entry: &Path, reload: bool) -> Self {
        let mut args = vec![entry.display().to_string()];
        if reload && !cfg!(windows) {
            args.push("--reload".to_string());
        }
        Self {
            program: python.to_string(),
            args,
        }
    }
}

pub fn print_banner() {
    let rule = "=".repeat(60);
    println!("{rule}");
    println!("🚀 MAVKUS AI Server");
    println!("📡 API disponibile su: {API_URL}");
    println!("📚 Documentazione: {API_URL}/docs");
    println!("❤️ Health check: {API_URL}/health");
    println!("{rule}");
}

/// Spawn the server with the resolved mapping applied on top of the inherited
/// environment, wait for it, and return its exit code. A signal-terminated
/// child maps to a generic failure code.
pub async fn run(spec: &LaunchSpec, env: &ResolvedEnv) -> Result<i32, LaunchError> {
    info!(program = %spec.program, args = ?spec.args, "Handing off to server process");

    let mut command = Command::new(&spec.program);
    command.args(&spec.args);
    command.envs(env.vars());

    let mut child = command.spawn().map_err(|source| LaunchError::Spawn {
        program: spec.program.clone(),
        source,
    })?;
    let status = child
        .wait()
        .await
        .map_err(|source| LaunchError::Wait { source })?;

    let code = status.code().unwrap_or(1);
    info!(code, "Server process exited");
    Ok(code)
}
