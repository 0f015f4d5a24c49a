use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "mavkus-launcher",
    version,
    about = "Installs dependencies, checks credentials, and starts the MAVKUS AI server"
)]
pub struct Cli {
    /// Explicit .env file; skips the candidate-path search
    #[arg(long)]
    pub env_file: Option<String>,
    /// Dependency manifest passed to pip
    #[arg(long, default_value = "requirements.txt")]
    pub requirements: String,
    /// Skip the dependency-install step
    #[arg(long)]
    pub skip_install: bool,
    /// Python interpreter used for pip and the server entry point
    #[arg(long, default_value = "python")]
    pub python: String,
    /// Server entry point handed to the interpreter
    #[arg(long, default_value = "run.py")]
    pub entry: PathBuf,
    /// Ask the server to reload on code changes (ignored on Windows)
    #[arg(long)]
    pub reload: bool,
}

/// Expand `~` and environment references in user-supplied paths.
pub fn expand_path(raw: &str) -> PathBuf {
    let expanded = shellexpand::full(raw)
        .map(|cow| cow.into_owned())
        .unwrap_or_else(|_| raw.to_string());
    PathBuf::from(expanded)
}
