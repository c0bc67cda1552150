use std::{
    env,
    path::{Path, PathBuf},
};

const CONFIG_FILE: &str = ".netserve.toml";

/// Load config file content
///
/// Searches, in order:
/// 1. `.netserve.toml` in the current working directory
/// 2. `~/.netserve.toml`
/// 3. `config.toml` in the platform config directory
///
/// Returns the file content if found, None otherwise. Looking never
/// creates anything on disk.
pub fn load_config_file() -> Option<String> {
    let home = env::var_os("HOME").map(PathBuf::from);
    let platform = crate::paths::app_config_path();
    if platform.is_none() {
        log::debug!("No platform config directory");
    }

    first_readable(&candidate_paths(home.as_deref(), platform))
}

fn candidate_paths(home: Option<&Path>, platform: Option<PathBuf>) -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE)];
    paths.extend(home.map(|home| home.join(CONFIG_FILE)));
    paths.extend(platform);
    paths
}

fn first_readable(paths: &[PathBuf]) -> Option<String> {
    paths
        .iter()
        .find_map(|path| match std::fs::read_to_string(path) {
            Ok(content) => {
                log::debug!("Loaded config from {}", path.display());
                Some(content)
            }
            Err(_) => None,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("netserve-config-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_working_directory_wins_over_home_and_platform() {
        let paths = candidate_paths(
            Some(Path::new("/home/noc")),
            Some(PathBuf::from("/etc/xdg/netserve-console/config.toml")),
        );
        assert_eq!(
            paths,
            vec![
                PathBuf::from(".netserve.toml"),
                PathBuf::from("/home/noc/.netserve.toml"),
                PathBuf::from("/etc/xdg/netserve-console/config.toml"),
            ]
        );
    }

    #[test]
    fn test_missing_home_and_platform_are_skipped() {
        assert_eq!(
            candidate_paths(None, None),
            vec![PathBuf::from(".netserve.toml")]
        );
    }

    #[test]
    fn test_first_existing_file_is_loaded() {
        let dir = scratch_dir("lookup");
        let home_file = dir.join(".netserve.toml");
        let platform_file = dir.join("config.toml");
        std::fs::write(&home_file, "company_name = \"Home\"").unwrap();
        std::fs::write(&platform_file, "company_name = \"Platform\"").unwrap();

        let content = first_readable(&[dir.join("missing.toml"), home_file, platform_file]);
        assert_eq!(content.as_deref(), Some("company_name = \"Home\""));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_nothing_found_yields_none() {
        let dir = scratch_dir("empty");
        assert!(first_readable(&[dir.join("a.toml"), dir.join("b.toml")]).is_none());
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
