//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for potential issues.

use std::{fmt, fs};

use crate::Config;

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// No catalogue file is configured.
    NoCatalogueConfigured,
    /// The catalogue path does not exist.
    CataloguePathMissing {
        /// Path that doesn't exist.
        path: String,
    },
    /// The catalogue path exists but is not a regular file.
    CataloguePathNotFile {
        /// Path that is not a file.
        path: String,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCatalogueConfigured => {
                write!(f, "no catalogue is configured")
            }
            Self::CataloguePathMissing { path } => {
                write!(f, "catalogue path does not exist: {path}")
            }
            Self::CataloguePathNotFile { path } => {
                write!(f, "catalogue path is not a file: {path}")
            }
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let Some(ref catalogue) = config.settings.catalogue else {
        return vec![ConfigWarning::NoCatalogueConfigured];
    };

    let path = catalogue.display().to_string();
    match fs::metadata(catalogue) {
        Err(_) => vec![ConfigWarning::CataloguePathMissing { path }],
        Ok(meta) if !meta.is_file() => vec![ConfigWarning::CataloguePathNotFile { path }],
        Ok(_) => Vec::new(),
    }
}
