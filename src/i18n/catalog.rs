// SPDX-License-Identifier: PMPL-1.0-or-later

//! Message catalog: language id → message code → template.
//!
//! A catalog is built once from a set of sources, one per language, and is
//! read-only afterwards. Each source body is a flat JSON object mapping
//! message codes to templates:
//!
//! ```json
//! { "0": "ok", "1000": "Hello,%s! Your id is:%s" }
//! ```
//!
//! The language id is the source name with its extension stripped, so
//! `en-US.json` provides `en-US`.
//!
//! Fallback between languages is the resolver's job, not the catalog's.

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// Message code → template for a single language.
pub type Messages = HashMap<String, String>;

/// A named language source prior to parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSource {
    /// File name of the source, e.g. `zh-CN.json`.
    pub name: String,
    /// Raw source body.
    pub body: String,
}

impl CatalogSource {
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
        }
    }

    /// Language id derived from the source name: everything before the
    /// last `.`, or the whole name when there is no extension.
    pub fn language(&self) -> &str {
        match self.name.rfind('.') {
            Some(idx) => &self.name[..idx],
            None => &self.name,
        }
    }
}

/// Immutable per-language message store.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    languages: HashMap<String, Messages>,
}

impl Catalog {
    /// Parse every source and collect them into a catalog.
    ///
    /// A later source for the same language replaces an earlier one. Fails
    /// on the first source that is not a flat string map, and when there
    /// are no sources at all.
    pub fn build<I>(sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = CatalogSource>,
    {
        Self::build_from(sources, "provided sources")
    }

    /// Load every file under `dir` (recursively) as a language source.
    ///
    /// Files are visited in file-name order. Any unreadable entry aborts the
    /// load; no partial catalog is returned.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let mut sources = Vec::new();

        for entry in WalkDir::new(dir).sort_by_file_name() {
            let entry = entry.map_err(|err| Error::Load {
                path: err
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| dir.to_path_buf()),
                source: io::Error::from(err),
            })?;
            if entry.file_type().is_dir() {
                continue;
            }
            let path = entry.path();
            let body = fs::read_to_string(path).map_err(|source| Error::Load {
                path: path.to_path_buf(),
                source,
            })?;
            sources.push(CatalogSource::new(
                entry.file_name().to_string_lossy(),
                body,
            ));
        }

        Self::build_from(sources, &dir.display().to_string())
    }

    fn build_from<I>(sources: I, origin: &str) -> Result<Self>
    where
        I: IntoIterator<Item = CatalogSource>,
    {
        let mut languages = HashMap::new();
        for source in sources {
            let language = source.language().to_string();
            let messages: Messages =
                serde_json::from_str(&source.body).map_err(|err| Error::Parse {
                    language: language.clone(),
                    source: err,
                })?;
            debug!(
                language = %language,
                source = %source.name,
                messages = messages.len(),
                "loaded language source"
            );
            languages.insert(language, messages);
        }

        if languages.is_empty() {
            return Err(Error::EmptyCatalog {
                origin: origin.to_string(),
            });
        }

        Ok(Self { languages })
    }

    /// Messages for `language`, if the catalog has that language.
    pub fn get(&self, language: &str) -> Option<&Messages> {
        self.languages.get(language)
    }

    /// Number of languages in the catalog.
    pub fn count(&self) -> usize {
        self.languages.len()
    }

    /// Sorted language ids, skipping an empty id (a source named `.json`).
    pub fn languages(&self) -> Vec<&str> {
        let mut list: Vec<&str> = self
            .languages
            .keys()
            .map(String::as_str)
            .filter(|lang| !lang.is_empty())
            .collect();
        list.sort_unstable();
        list
    }

    pub fn contains(&self, language: &str) -> bool {
        self.languages.contains_key(language)
    }
}
