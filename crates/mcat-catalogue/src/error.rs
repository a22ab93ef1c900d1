//! Error types for catalogue storage.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur when loading or saving a catalogue.
#[derive(Debug, Error)]
pub enum CatalogueError {
    /// Failed to read a catalogue file.
    #[error("failed to read catalogue {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to write a catalogue file.
    #[error("failed to write catalogue {path}: {source}")]
    WriteFile {
        /// Path to the file that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The catalogue file is not a valid JSON media list.
    #[error("failed to parse catalogue {path}: {source}")]
    Parse {
        /// Path to the file that could not be parsed.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// The catalogue could not be serialized.
    #[error("failed to serialize catalogue: {0}")]
    Serialize(#[source] serde_json::Error),

    /// An unrecognised media type name.
    #[error("unknown media type '{0}' (expected film, audio track or tv programme)")]
    UnknownMediaType(String),
}
