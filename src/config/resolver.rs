use super::ENV_CANDIDATES;
use super::error::EnvFileError;
use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment values loaded from a configuration file, kept as an explicit
/// mapping instead of being written into the process environment.
#[derive(Debug, Clone, Default)]
pub struct ResolvedEnv {
    /// Path of the file that supplied the values, if any was found.
    pub source: Option<PathBuf>,
    vars: HashMap<String, String>,
}

impl ResolvedEnv {
    pub fn from_vars(vars: HashMap<String, String>) -> Self {
        Self { source: None, vars }
    }

    /// Look up a key in the loaded mapping, falling back to the surrounding
    /// process environment. Empty values count as absent.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match self.vars.get(key) {
            Some(value) => Some(value.clone()),
            None => env::var(key).ok(),
        };
        value.filter(|v| !v.is_empty())
    }

    pub fn vars(&self) -> &HashMap<String, String> {
        &self.vars
    }
}

/// Base directory for the candidate search: the launcher executable's own
/// directory when determinable, otherwise the current working directory.
pub fn launcher_dir() -> PathBuf {
    if let Ok(exe) = env::current_exe() {
        if let Some(dir) = exe.parent() {
            return dir.to_path_buf();
        }
    }
    env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Locate and load the environment file.
///
/// An explicit path bypasses the search and must exist. Otherwise the
/// candidates in [`ENV_CANDIDATES`] are probed in order and the first existing
/// file is loaded; finding none is not an error.
pub fn resolve(base: &Path, explicit: Option<&Path>) -> Result<ResolvedEnv, EnvFileError> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(EnvFileError::NotFound {
                path: path.to_path_buf(),
            });
        }
        debug!(path = %path.display(), "Loading explicit environment file");
        let vars = read_env_file(path)?;
        return Ok(ResolvedEnv {
            source: Some(path.to_path_buf()),
            vars,
        });
    }

    for candidate in ENV_CANDIDATES {
        let path = base.join(candidate);
        if path.is_file() {
            debug!(path = %path.display(), "Found environment file candidate");
            let vars = read_env_file(&path)?;
            return Ok(ResolvedEnv {
                source: Some(path),
                vars,
            });
        }
    }

    debug!(base = %base.display(), "No environment file found among candidates");
    Ok(ResolvedEnv::default())
}

fn read_env_file(path: &Path) -> Result<HashMap<String, String>, EnvFileError> {
    let iter = dotenvy::from_path_iter(path).map_err(|source| file_error(path, source))?;
    let mut vars = HashMap::new();
    for item in iter {
        let (key, value) = item.map_err(|source| file_error(path, source))?;
        vars.insert(key, value);
    }
    Ok(vars)
}

fn file_error(path: &Path, source: dotenvy::Error) -> EnvFileError {
    match source {
        dotenvy::Error::Io(source) => EnvFileError::Io {
            path: path.to_path_buf(),
            source,
        },
        source => EnvFileError::Parse {
            path: path.to_path_buf(),
            source,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn loads_key_value_pairs_without_touching_process_env() {
        let dir = tempdir().expect("tempdir");
        fs::write(dir.path().join(".env"), "MAVKUS_RESOLVER_ONLY=abc\n").expect("write .env");

        let env = resolve(dir.path(), None).expect("resolve");

        assert_eq!(env.source.as_deref(), Some(dir.path().join(".env").as_path()));
        assert_eq!(env.get("MAVKUS_RESOLVER_ONLY").as_deref(), Some("abc"));
        assert!(std::env::var("MAVKUS_RESOLVER_ONLY").is_err());
    }

    #[test]
    fn reports_absence_when_no_candidate_exists() {
        let dir = tempdir().expect("tempdir");
        let base = dir.path().join("a/b");
        fs::create_dir_all(&base).expect("mkdir");

        let env = resolve(&base, None).expect("resolve");

        assert!(env.source.is_none());
        assert!(env.vars().is_empty());
    }

    #[test]
    fn first_candidate_wins_over_parent_directories() {
        let dir = tempdir().expect("tempdir");
        let base = dir.path().join("a/b");
        fs::create_dir_all(&base).expect("mkdir");
        fs::write(base.join(".env"), "WHICH=base\n").expect("write");
        fs::write(dir.path().join("a/.env"), "WHICH=parent\n").expect("write");
        fs::write(dir.path().join(".env"), "WHICH=grandparent\n").expect("write");

        let env = resolve(&base, None).expect("resolve");
        assert_eq!(env.get("WHICH").as_deref(), Some("base"));

        fs::remove_file(base.join(".env")).expect("remove");
        let env = resolve(&base, None).expect("resolve");
        assert_eq!(env.get("WHICH").as_deref(), Some("parent"));

        fs::remove_file(dir.path().join("a/.env")).expect("remove");
        let env = resolve(&base, None).expect("resolve");
        assert_eq!(env.get("WHICH").as_deref(), Some("grandparent"));
    }

    #[test]
    fn explicit_file_bypasses_candidate_search() {
        let dir = tempdir().expect("tempdir");
        fs::write(dir.path().join(".env"), "WHICH=candidate\n").expect("write");
        let custom = dir.path().join("custom.env");
        fs::write(&custom, "WHICH=explicit\n").expect("write");

        let env = resolve(dir.path(), Some(&custom)).expect("resolve");

        assert_eq!(env.source.as_deref(), Some(custom.as_path()));
        assert_eq!(env.get("WHICH").as_deref(), Some("explicit"));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempdir().expect("tempdir");
        let missing = dir.path().join("nope.env");

        let result = resolve(dir.path(), Some(&missing));
        assert!(matches!(result, Err(EnvFileError::NotFound { .. })));
    }

    #[test]
    fn empty_values_count_as_absent() {
        let dir = tempdir().expect("tempdir");
        fs::write(dir.path().join(".env"), "MAVKUS_EMPTY_VALUE=\n").expect("write");

        let env = resolve(dir.path(), None).expect("resolve");
        assert_eq!(env.get("MAVKUS_EMPTY_VALUE"), None);
    }

    #[test]
    #[serial]
    fn falls_back_to_process_environment() {
        unsafe {
            std::env::set_var("MAVKUS_AMBIENT_FALLBACK", "from-process");
        }

        let env = ResolvedEnv::default();
        assert_eq!(
            env.get("MAVKUS_AMBIENT_FALLBACK").as_deref(),
            Some("from-process")
        );

        unsafe {
            std::env::remove_var("MAVKUS_AMBIENT_FALLBACK");
        }
    }

    #[test]
    #[serial]
    fn loaded_mapping_shadows_process_environment() {
        unsafe {
            std::env::set_var("MAVKUS_SHADOWED", "ambient");
        }

        let mut vars = HashMap::new();
        vars.insert("MAVKUS_SHADOWED".to_string(), "loaded".to_string());
        let env = ResolvedEnv::from_vars(vars);
        assert_eq!(env.get("MAVKUS_SHADOWED").as_deref(), Some("loaded"));

        unsafe {
            std::env::remove_var("MAVKUS_SHADOWED");
        }
    }
}
