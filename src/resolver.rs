// SPDX-License-Identifier: PMPL-1.0-or-later

//! Language selection, message resolution and envelope assembly.
//!
//! A [`Resolver`] owns a shared [`Catalog`] and the resolver configuration.
//! Every operation is a pure function of the catalog, the configuration and
//! its arguments, except [`Resolver::set_language`], which replaces the
//! default language for all later calls.
//!
//! ## Fallback chain
//!
//! 1. requested language
//! 2. current default language
//! 3. the message code itself
//!
//! Resolution never fails: a miss at every step still yields a string.

use crate::config::{Options, PRODUCTION_ENV};
use crate::error::Result;
use crate::i18n::{substitute, Catalog, Messages};
use crate::output::{EnvelopeFormat, EnvelopeResponse};
use crate::signals::RequestSignals;
use crate::types::{Envelope, Payload, Trace};
use std::fmt::Display;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, info};

/// Resolves message codes to localized strings and builds envelopes.
///
/// `Resolver` is `Send + Sync`; share it behind an `Arc` across handlers.
/// The default language sits behind an `RwLock`: a concurrent
/// [`set_language`](Self::set_language) is seen by calls that start after
/// it, with no ordering promised for calls already in flight.
#[derive(Debug)]
pub struct Resolver {
    catalog: Arc<Catalog>,
    default_lang: RwLock<String>,
    debug_mode: bool,
    run_env: String,
}

impl Resolver {
    /// Load the catalog from `options.lang_dir` and build a resolver.
    ///
    /// Fails when the directory cannot be read, a file is not a flat
    /// string map, or no language file is found.
    pub fn new(options: Options) -> Result<Self> {
        let catalog = Catalog::from_dir(&options.lang_dir)?;
        Ok(Self::with_catalog(catalog, &options))
    }

    /// Build a resolver around an already loaded catalog.
    pub fn with_catalog(catalog: impl Into<Arc<Catalog>>, options: &Options) -> Self {
        let catalog = catalog.into();
        let run_env = options.resolve_run_env();
        info!(
            languages = catalog.count(),
            default_lang = %options.default_lang,
            run_env = %run_env,
            debug_mode = options.debug_mode,
            "i18n resolver ready"
        );
        Self {
            catalog,
            default_lang: RwLock::new(options.default_lang.clone()),
            debug_mode: options.debug_mode,
            run_env,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Run mode captured at construction.
    pub fn run_env(&self) -> &str {
        &self.run_env
    }

    /// Current default language.
    pub fn default_language(&self) -> String {
        self.default_lang
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the default language. An empty `lang` keeps the current one.
    pub fn set_language(&self, lang: &str) {
        if lang.is_empty() {
            return;
        }
        let mut current = self
            .default_lang
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        debug!(from = %current, to = %lang, "default language changed");
        *current = lang.to_string();
    }

    /// Number of languages in the catalog.
    pub fn count(&self) -> usize {
        self.catalog.count()
    }

    /// Sorted language ids in the catalog.
    pub fn languages(&self) -> Vec<&str> {
        self.catalog.languages()
    }

    pub fn language_exists(&self, lang: &str) -> bool {
        self.catalog.contains(lang)
    }

    /// Language for a request: the `lang` override, then a `lang=` token in
    /// the user agent, then the default language.
    pub fn select_language(&self, signals: &RequestSignals) -> String {
        if let Some(lang) = signals.explicit_language() {
            return lang.to_string();
        }
        if let Some(lang) = signals.user_agent_language() {
            return lang.to_string();
        }
        self.default_language()
    }

    /// Resolve `code` in `language`, substituting `params` positionally.
    ///
    /// An unknown language falls back to the default language; an unknown
    /// code is returned unchanged.
    pub fn resolve<S: AsRef<str>>(&self, language: &str, code: &str, params: &[S]) -> String {
        let template = match self.messages_for(language) {
            Some(messages) => messages.get(code),
            None => {
                let default_lang = self.default_language();
                self.messages_for(&default_lang)
                    .and_then(|messages| messages.get(code))
            }
        };

        match template {
            Some(template) if params.is_empty() => template.clone(),
            Some(template) => substitute(template, params),
            None => {
                debug!(language = %language, code = %code, "no message for code");
                code.to_string()
            }
        }
    }

    /// Whether error details may be attached to a response.
    ///
    /// The production run mode always wins; otherwise the static debug flag
    /// or a non-empty request debug signal enables it.
    pub fn is_debug_allowed(&self, signals: &RequestSignals) -> bool {
        if self.run_env == PRODUCTION_ENV {
            return false;
        }
        self.debug_mode || signals.wants_debug()
    }

    /// Assemble the response envelope for `code`.
    ///
    /// `err` is only ever stringified into `trace.desc`, and only when debug
    /// output is allowed for this request.
    pub fn build_envelope(
        &self,
        signals: &RequestSignals,
        code: i64,
        payload: impl Into<Payload>,
        err: Option<&dyn Display>,
    ) -> Envelope {
        let (params, data) = payload.into().into_parts();
        let language = self.select_language(signals);
        let message = self.resolve(&language, &code.to_string(), &params);

        let description = match err {
            Some(err) if self.is_debug_allowed(signals) => err.to_string(),
            _ => String::new(),
        };

        Envelope {
            code,
            message,
            trace: Trace {
                id: signals.trace_id.clone().unwrap_or_default(),
                description,
            },
            data,
        }
    }

    /// Build the envelope and wrap it for rendering as an HTTP response.
    pub fn respond(
        &self,
        signals: &RequestSignals,
        format: EnvelopeFormat,
        code: i64,
        payload: impl Into<Payload>,
        err: Option<&dyn Display>,
    ) -> EnvelopeResponse {
        EnvelopeResponse::new(self.build_envelope(signals, code, payload, err), format)
    }

    fn messages_for(&self, language: &str) -> Option<&Messages> {
        self.catalog.get(language)
    }
}
