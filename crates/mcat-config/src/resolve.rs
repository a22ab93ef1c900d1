//! Path resolution for configured files.
//!
//! Resolves relative and tilde-prefixed paths to absolute paths.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::ConfigError;

/// Resolves a catalogue path from a config file.
///
/// - Tilde paths (`~/media.json`) are expanded to the home directory
/// - Relative paths (`media.json`, `../shared/media.json`) are joined to `config_dir`
/// - Absolute paths are returned unchanged
///
/// The file does not need to exist; validation reports a missing catalogue separately.
pub fn resolve_catalogue_path(path: &str, config_dir: &Path) -> Result<PathBuf, ConfigError> {
    let expanded = expand_tilde(path)?;

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        Ok(config_dir.join(expanded))
    }
}

/// Expands a tilde prefix to the home directory.
fn expand_tilde(path: &str) -> Result<PathBuf, ConfigError> {
    if path == "~" {
        return home_dir();
    }

    if let Some(rest) = path.strip_prefix("~/") {
        let home = home_dir()?;
        return Ok(home.join(rest));
    }

    Ok(PathBuf::from(path))
}

/// Returns the home directory.
fn home_dir() -> Result<PathBuf, ConfigError> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or(ConfigError::NoHomeDirectory)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_path_joins_config_dir() {
        let resolved = resolve_catalogue_path("media.json", Path::new("/library")).unwrap();
        assert_eq!(resolved, PathBuf::from("/library/media.json"));
    }

    #[test]
    fn parent_relative_path() {
        let resolved =
            resolve_catalogue_path("../shared/media.json", Path::new("/library/films")).unwrap();
        assert_eq!(resolved, PathBuf::from("/library/films/../shared/media.json"));
    }

    #[test]
    fn absolute_path_unchanged() {
        let resolved = resolve_catalogue_path("/data/media.json", Path::new("/other")).unwrap();
        assert_eq!(resolved, PathBuf::from("/data/media.json"));
    }

    #[test]
    fn tilde_expands_to_home() {
        let home = BaseDirs::new().unwrap().home_dir().to_path_buf();
        let resolved = resolve_catalogue_path("~/media.json", Path::new("/other")).unwrap();
        assert_eq!(resolved, home.join("media.json"));
        assert_eq!(resolve_catalogue_path("~", Path::new("/other")).unwrap(), home);
    }

    #[test]
    fn tilde_in_middle_is_literal() {
        let resolved = resolve_catalogue_path("a~/b.json", Path::new("/x")).unwrap();
        assert_eq!(resolved, PathBuf::from("/x/a~/b.json"));
    }
}
