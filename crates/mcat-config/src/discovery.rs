//! Configuration file discovery.
//!
//! Discovers `.mcat.toml` files by walking up the directory tree from a starting point,
//! then appending the global `~/.mcat.toml` if present.

use std::path::{Path, PathBuf};

use directories::BaseDirs;
use log::debug;

use crate::parse::is_root_config;

/// The configuration filename.
pub const CONFIG_FILENAME: &str = ".mcat.toml";

/// Discovers all configuration files relevant to the given directory.
///
/// Returns paths in precedence order: closest to `cwd` first, global (`~/.mcat.toml`) last.
///
/// Walking stops early at a file with `root = true`, in which case the global file is not
/// consulted either.
pub fn discover_config_files(cwd: &Path) -> Vec<PathBuf> {
    let mut configs = Vec::new();
    let mut found_root = false;

    let mut current = Some(cwd);
    while let Some(dir) = current {
        let config_path = dir.join(CONFIG_FILENAME);
        if config_path.is_file() {
            let is_root = is_root_config(&config_path);
            configs.push(config_path);
            if is_root {
                found_root = true;
                break;
            }
        }
        current = dir.parent();
    }

    if !found_root
        && let Some(global_path) = global_config_path()
        && global_path.is_file()
        && !configs.contains(&global_path)
    {
        configs.push(global_path);
    }

    debug!("discovered {} config file(s) from {}", configs.len(), cwd.display());
    configs
}

/// Returns the path to the global configuration file (`~/.mcat.toml`).
///
/// Returns `None` if the home directory cannot be determined.
pub fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(CONFIG_FILENAME))
}

/// Checks if a path is the global configuration file.
pub fn is_global_config(path: &Path) -> bool {
    global_config_path().is_some_and(|global| path == global)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::test_support::TestDir;

    /// Drops the global config, which depends on the machine running the tests.
    fn local(configs: &[PathBuf]) -> Vec<&PathBuf> {
        configs.iter().filter(|p| !is_global_config(p)).collect()
    }

    #[test]
    fn no_configs() {
        let test_dir = TestDir::new();
        let subdir = test_dir.create_dir("a/b/c");

        let configs = discover_config_files(&subdir);
        assert!(local(&configs).is_empty());
    }

    #[test]
    fn closest_config_comes_first() {
        let test_dir = TestDir::new();
        let top = test_dir.create_config_at_root();
        let mid = test_dir.create_config("films");
        let leaf = test_dir.create_config("films/noir/1940s");
        let working_dir = test_dir.create_dir("films/noir/1940s/extra");

        let configs = discover_config_files(&working_dir);
        assert_eq!(local(&configs), vec![&leaf, &mid, &top]);
    }

    #[test]
    fn config_in_cwd_is_found() {
        let test_dir = TestDir::new();
        let config = test_dir.create_config_at_root();

        let configs = discover_config_files(test_dir.path());
        assert_eq!(local(&configs), vec![&config]);
    }

    #[test]
    fn directory_named_like_config_is_skipped() {
        let test_dir = TestDir::new();
        fs::create_dir_all(test_dir.path().join(CONFIG_FILENAME)).unwrap();
        let subdir = test_dir.create_dir("subdir");

        let configs = discover_config_files(&subdir);
        assert!(local(&configs).is_empty());
    }

    #[test]
    fn root_config_stops_discovery() {
        let test_dir = TestDir::new();
        let _parent = test_dir.create_config_at_root();
        let root = test_dir.create_root_config("library");
        let child = test_dir.create_config("library/music");
        let working_dir = test_dir.create_dir("library/music/jazz");

        // Neither the parent nor the global config is included.
        let configs = discover_config_files(&working_dir);
        assert_eq!(configs, vec![child, root]);
    }

    #[test]
    fn root_false_does_not_stop_discovery() {
        let test_dir = TestDir::new();
        let parent = test_dir.create_config_at_root();
        let mid = test_dir.create_config_with_content("library", "root = false\n");
        let working_dir = test_dir.create_dir("library/tv");

        let configs = discover_config_files(&working_dir);
        assert_eq!(local(&configs), vec![&mid, &parent]);
    }

    #[test]
    fn global_path_uses_config_filename() {
        let path = global_config_path().unwrap();
        assert!(path.ends_with(CONFIG_FILENAME));
        assert!(is_global_config(&path));
        assert!(!is_global_config(Path::new("/elsewhere/.mcat.toml")));
    }
}
