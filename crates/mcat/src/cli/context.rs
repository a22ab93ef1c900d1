//! Shared context for running CLI commands.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
};

use mcat_catalogue::Catalogue;
use mcat_config::Config;

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (may be default if no config files found).
    pub config: Config,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = load_config_or_failure(&cwd)?;
        Ok(Self { cwd, config })
    }

    /// Loads only the current directory, skipping configuration parsing.
    pub fn load_cwd_only() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self {
            cwd,
            config: Config::default(),
        })
    }

    /// Picks the catalogue file: an explicit path wins over the configured one.
    ///
    /// A relative explicit path is taken relative to the working directory.
    pub fn catalogue_path(&self, explicit: Option<&Path>) -> Result<PathBuf, ExitCode> {
        if let Some(path) = explicit {
            return Ok(self.cwd.join(path));
        }
        match self.config.settings.catalogue {
            Some(ref path) => Ok(path.clone()),
            None => {
                eprintln!("error: no catalogue configured");
                eprintln!(
                    "Pass --catalogue, or run 'mcat init' and set [settings] catalogue."
                );
                Err(ExitCode::FAILURE)
            }
        }
    }

    /// Loads the catalogue chosen by [`Self::catalogue_path`].
    pub fn catalogue(&self, explicit: Option<&Path>) -> Result<Catalogue, ExitCode> {
        let path = self.catalogue_path(explicit)?;
        Catalogue::load(&path).map_err(|e| {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        })
    }
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

/// Loads configuration from the provided directory or exits with an error.
fn load_config_or_failure(cwd: &Path) -> Result<Config, ExitCode> {
    Config::load(cwd).map_err(|e| {
        eprintln!("error: failed to load configuration: {e}");
        ExitCode::FAILURE
    })
}
