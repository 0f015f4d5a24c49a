pub mod error;
pub mod resolver;

/// Candidate configuration files, checked in priority order relative to the
/// launcher's base directory. First existing file wins; no merging.
pub const ENV_CANDIDATES: [&str; 3] = [".env", "../.env", "../../.env"];

pub use error::EnvFileError;
pub use resolver::{ResolvedEnv, launcher_dir, resolve};
