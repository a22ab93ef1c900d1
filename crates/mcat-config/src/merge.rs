//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`, applying precedence
//! rules and resolving the catalogue path.

use std::path::{Path, PathBuf};

use log::debug;

use crate::{
    Config, ConfigError, OutputSettings, SearchSettings, Settings,
    parse::{RawConfig, RawOutputSettings, RawSearchSettings},
    resolve::resolve_catalogue_path,
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

impl ParsedConfig {
    /// Directory holding the config file, against which relative paths resolve.
    fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to the
/// working directory), lowest precedence last (global config). Each scalar takes the first
/// defined value.
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    if configs.is_empty() {
        return Ok(Config::default());
    }

    let settings = merge_settings(configs)?;
    let search = merge_search_settings(configs);
    let output = merge_output_settings(configs);

    Ok(Config {
        settings,
        search,
        output,
    })
}

/// Merges general settings.
///
/// The catalogue comes from the closest file that names one, resolved against that file's
/// directory.
fn merge_settings(configs: &[ParsedConfig]) -> Result<Settings, ConfigError> {
    let defining = configs.iter().find_map(|parsed| {
        parsed
            .config
            .settings
            .as_ref()
            .and_then(|settings| settings.catalogue.as_deref())
            .map(|catalogue| (parsed, catalogue))
    });

    let catalogue = match defining {
        Some((parsed, catalogue)) => {
            let resolved = resolve_catalogue_path(catalogue, parsed.dir())?;
            debug!(
                "catalogue {} set by {}",
                resolved.display(),
                parsed.path.display()
            );
            Some(resolved)
        }
        None => None,
    };

    Ok(Settings { catalogue })
}

/// Merges search settings.
fn merge_search_settings(configs: &[ParsedConfig]) -> SearchSettings {
    let mut result = SearchSettings::default();

    // Lowest precedence first so closer files overwrite.
    for parsed in configs.iter().rev() {
        if let Some(ref search) = parsed.config.search {
            apply_raw_search(&mut result, search);
        }
    }

    result
}

/// Applies raw search settings to result.
fn apply_raw_search(result: &mut SearchSettings, raw: &RawSearchSettings) {
    if let Some(v) = raw.limit {
        result.limit = v;
    }
}

/// Merges output settings.
fn merge_output_settings(configs: &[ParsedConfig]) -> OutputSettings {
    let mut result = OutputSettings::default();

    for parsed in configs.iter().rev() {
        if let Some(ref output) = parsed.config.output {
            apply_raw_output(&mut result, output);
        }
    }

    result
}

/// Applies raw output settings to result.
fn apply_raw_output(result: &mut OutputSettings, raw: &RawOutputSettings) {
    if let Some(v) = raw.format {
        result.format = v;
    }
}
