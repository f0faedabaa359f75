// SPDX-License-Identifier: PMPL-1.0-or-later

//! Construction-time options for a [`Resolver`](crate::resolver::Resolver).

use std::env;
use std::path::PathBuf;

/// Directory searched for language files when none is configured.
pub const DEFAULT_LANG_DIR: &str = "./lang";
/// Default language used when a request does not name one.
pub const DEFAULT_LANG: &str = "en-US";
/// Environment variable consulted for the run mode.
pub const DEFAULT_ENV_KEY: &str = "RUN_MODE";
/// Run mode in which debug traces are never emitted.
pub const PRODUCTION_ENV: &str = "prod";

/// Options for building a resolver.
///
/// ```
/// use i18n_respond::Options;
///
/// let options = Options::default()
///     .with_lang_dir("./custom/lang")
///     .with_default_lang("zh-CN")
///     .with_debug_mode(true);
/// assert_eq!(options.default_lang, "zh-CN");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Directory holding one JSON file per language.
    pub lang_dir: PathBuf,
    /// Language used when a request carries no language signal.
    pub default_lang: String,
    /// Name of the environment variable holding the run mode.
    pub env_key: String,
    /// Attach error descriptions to every envelope outside production.
    pub debug_mode: bool,
    /// Run mode to use instead of reading `env_key` from the environment.
    pub run_env: Option<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            lang_dir: PathBuf::from(DEFAULT_LANG_DIR),
            default_lang: DEFAULT_LANG.to_string(),
            env_key: DEFAULT_ENV_KEY.to_string(),
            debug_mode: false,
            run_env: None,
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lang_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.lang_dir = dir.into();
        self
    }

    pub fn with_default_lang(mut self, lang: impl Into<String>) -> Self {
        self.default_lang = lang.into();
        self
    }

    pub fn with_env_key(mut self, key: impl Into<String>) -> Self {
        self.env_key = key.into();
        self
    }

    pub fn with_debug_mode(mut self, debug: bool) -> Self {
        self.debug_mode = debug;
        self
    }

    /// Pin the run mode instead of reading it from the environment.
    pub fn with_run_env(mut self, run_env: impl Into<String>) -> Self {
        self.run_env = Some(run_env.into());
        self
    }

    /// The run mode: the pinned value if set, otherwise the value of the
    /// `env_key` environment variable (empty when unset or not UTF-8).
    pub fn resolve_run_env(&self) -> String {
        match &self.run_env {
            Some(run_env) => run_env.clone(),
            None => env::var(&self.env_key).unwrap_or_default(),
        }
    }
}
