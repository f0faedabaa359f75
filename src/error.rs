// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error type shared by catalog loading and envelope rendering.
//!
//! Only construction and rendering can fail. Message resolution never
//! returns an error: a missing language or code falls back to the default
//! language and then to the code itself.

use std::io;
use std::path::PathBuf;

/// Result alias used throughout the library.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A language source could not be read from disk.
    #[error("failed to read language source {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A language source was read but is not a flat string-to-string object.
    #[error("language source `{language}` is not a flat string map: {source}")]
    Parse {
        language: String,
        #[source]
        source: serde_json::Error,
    },

    /// No language sources were found.
    #[error("no language files found in {origin}")]
    EmptyCatalog { origin: String },

    /// An envelope could not be rendered in the requested format.
    #[error("failed to render envelope as {format}: {reason}")]
    Render { format: &'static str, reason: String },
}

impl Error {
    /// True for failures reading or parsing a language source.
    pub fn is_load(&self) -> bool {
        matches!(self, Error::Load { .. } | Error::Parse { .. })
    }

    pub(crate) fn render(format: &'static str, reason: impl ToString) -> Self {
        Error::Render {
            format,
            reason: reason.to_string(),
        }
    }
}
