//! Configuration and cache directory paths
//!
//! Uses platform directories via the `dirs` crate:
//! - Linux: `~/.config/netserve-console/`, `~/.cache/netserve-console/`
//! - macOS: `~/Library/Application Support/netserve-console/`, `~/Library/Caches/netserve-console/`
//! - Windows: `%APPDATA%\netserve-console\`, `%LOCALAPPDATA%\netserve-console\`

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

const APP_NAME: &str = "netserve-console";
const CONFIG_FILE_NAME: &str = "config.toml";

fn app_dir(base: &Path) -> PathBuf {
    base.join(APP_NAME)
}

/// Get the application cache directory, creating it if missing
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = app_dir(&base);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Could not create {}", dir.display()))?;
    Ok(dir)
}

fn config_file_in(base: &Path) -> PathBuf {
    app_dir(base).join(CONFIG_FILE_NAME)
}

/// Where the per-user app config file lives
///
/// Only resolves the path; the directory is not created, since the console
/// never writes its config.
pub fn app_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| config_file_in(&base))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_dir_appends_app_name() {
        let dir = app_dir(Path::new("/tmp/base"));
        assert_eq!(dir, PathBuf::from("/tmp/base/netserve-console"));
    }

    #[test]
    fn test_config_file_resolves_without_touching_disk() {
        let base = std::env::temp_dir().join(format!("netserve-paths-{}", std::process::id()));
        let file = config_file_in(&base);

        assert_eq!(file, base.join("netserve-console").join("config.toml"));
        assert!(!base.exists());
    }
}
