pub mod cli;
pub mod config;
pub mod error;
pub mod gate;
pub mod install;
pub mod launch;

pub use cli::Cli;
pub use config::ResolvedEnv;
pub use error::LauncherError;
