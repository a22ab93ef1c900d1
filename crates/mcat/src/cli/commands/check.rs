//! Implementation of `mcat check`.

use std::process::ExitCode;

use mcat_catalogue::{Catalogue, MediaType};
use mcat_config::{ConfigWarning, discover_config_files};

use crate::cli::context::CommandContext;

/// Exit codes for `mcat check`.
mod exit_codes {
    use std::process::ExitCode;

    /// Configuration is valid with no warnings.
    pub const OK: ExitCode = ExitCode::SUCCESS;
    /// Configuration has warnings, or the catalogue cannot be read.
    pub const WARNINGS: ExitCode = ExitCode::FAILURE;
}

/// Validates configuration and the configured catalogue.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let config_files = discover_config_files(&ctx.cwd);

    println!("Checking configuration...");
    println!();

    if config_files.is_empty() {
        println!("No configuration files found.");
        println!();
        println!("Run 'mcat init' to create a configuration file.");
        return exit_codes::OK;
    }

    println!("Config files (highest precedence first):");
    for path in &config_files {
        println!("  {}", path.display());
    }
    println!();

    let warnings = ctx.config.validate();

    if let Some(ref path) = ctx.config.settings.catalogue
        && warnings.is_empty()
    {
        println!("Catalogue: {}", path.display());
        match Catalogue::load(path) {
            Ok(catalogue) => print_catalogue_summary(&catalogue),
            Err(e) => {
                eprintln!("error: {e}");
                return exit_codes::WARNINGS;
            }
        }
        println!();
    }

    if warnings.is_empty() {
        println!("No issues found.");
        return exit_codes::OK;
    }

    println!("Warnings ({}):", warnings.len());
    for warning in &warnings {
        println!("  - {warning}");
    }
    println!();

    print_hints(&warnings);

    exit_codes::WARNINGS
}

/// Prints record counts per media type.
fn print_catalogue_summary(catalogue: &Catalogue) {
    println!("  {} record(s)", catalogue.len());
    for media_type in MediaType::ALL {
        let count = catalogue.items_by_type(Some(media_type)).len();
        if count > 0 {
            println!("  {media_type}: {count}");
        }
    }
}

/// Prints hints for resolving common warnings.
fn print_hints(warnings: &[ConfigWarning]) {
    let mut hints: Vec<_> = warnings
        .iter()
        .map(|warning| match warning {
            ConfigWarning::NoCatalogueConfigured => {
                "Set catalogue under [settings] in .mcat.toml."
            }
            ConfigWarning::CataloguePathMissing { .. } => {
                "Create the catalogue file or fix the path; paths are relative to the config file."
            }
            ConfigWarning::CataloguePathNotFile { .. } => {
                "The catalogue must be a JSON file, not a directory."
            }
        })
        .collect();

    hints.sort_unstable();
    hints.dedup();

    if !hints.is_empty() {
        println!("Hints:");
        for hint in hints {
            println!("  - {hint}");
        }
    }
}
