use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "ON_THIS_DAY_PATH";

const APP_DIR_NAME: &str = "on-this-day";

/// Resolve the data directory (history, config, log) by priority:
/// 1. Explicit path (with tilde expansion)
/// 2. `ON_THIS_DAY_PATH` environment variable
/// 3. Platform data directory
/// 4. `~/.on-this-day`
pub fn resolve_data_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(expand_tilde(&path.to_string_lossy()));
    }

    if let Ok(env_path) = env::var(DATA_DIR_ENV)
        && !env_path.is_empty()
    {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join(APP_DIR_NAME));
    }

    if let Some(home) = env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(format!(".{}", APP_DIR_NAME)));
    }

    bail!("Could not determine data directory: no HOME or platform data directory found")
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_wins() {
        let dir = resolve_data_dir(Some(Path::new("/tmp/on-this-day-test"))).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/on-this-day-test"));
    }

    #[test]
    fn test_expand_tilde_leaves_plain_paths() {
        assert_eq!(expand_tilde("/opt/data"), PathBuf::from("/opt/data"));
        assert_eq!(expand_tilde("relative/dir"), PathBuf::from("relative/dir"));
    }

    #[test]
    fn test_expand_tilde_uses_home() {
        if let Some(home) = env::var_os("HOME") {
            assert_eq!(expand_tilde("~/facts"), PathBuf::from(home).join("facts"));
        }
    }
}
