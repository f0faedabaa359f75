// SPDX-License-Identifier: PMPL-1.0-or-later

//! Per-request inputs read from the HTTP boundary.
//!
//! | Signal      | Source                              |
//! |-------------|-------------------------------------|
//! | language    | `lang` header                       |
//! | user agent  | `User-Agent` header (`lang=` token) |
//! | debug       | `debug` header                      |
//! | trace id    | [`TraceId`] request extension       |

use axum::http::header::USER_AGENT;
use axum::http::request::Parts;
use axum::http::{HeaderMap, Request};

/// Header carrying an explicit language override.
pub const LANG_HEADER: &str = "lang";
/// Header requesting debug output for a single request.
pub const DEBUG_HEADER: &str = "debug";

/// Trace id attached to a request by earlier middleware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceId(pub String);

/// Language, debug and trace signals of one inbound request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestSignals {
    pub language: Option<String>,
    pub user_agent: Option<String>,
    pub debug: Option<String>,
    pub trace_id: Option<String>,
}

impl RequestSignals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read language, user agent and debug signals from headers.
    /// Values are kept as UTF-8 text; a value that is not valid UTF-8 is
    /// ignored.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            language: header_value(headers, LANG_HEADER),
            user_agent: header_value(headers, USER_AGENT.as_str()),
            debug: header_value(headers, DEBUG_HEADER),
            trace_id: None,
        }
    }

    /// Headers plus the [`TraceId`] extension, if present.
    pub fn from_parts(parts: &Parts) -> Self {
        let mut signals = Self::from_headers(&parts.headers);
        signals.trace_id = parts.extensions.get::<TraceId>().map(|id| id.0.clone());
        signals
    }

    pub fn from_request<B>(request: &Request<B>) -> Self {
        let mut signals = Self::from_headers(request.headers());
        signals.trace_id = request
            .extensions()
            .get::<TraceId>()
            .map(|id| id.0.clone());
        signals
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn with_debug(mut self, debug: impl Into<String>) -> Self {
        self.debug = Some(debug.into());
        self
    }

    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }

    /// Explicit language override, used verbatim when non-empty.
    pub fn explicit_language(&self) -> Option<&str> {
        self.language.as_deref().filter(|lang| !lang.is_empty())
    }

    /// Value of the first `lang=` token in the user agent.
    ///
    /// The user agent is split on `;`, each segment on its first `=`. The key
    /// is matched ignoring ASCII case, so `Lang=fr-FR` counts.
    ///
    /// ```
    /// use i18n_respond::RequestSignals;
    /// let signals = RequestSignals::new().with_user_agent("MyApp/2.1; Lang=zh-CN; build=7");
    /// assert_eq!(signals.user_agent_language(), Some("zh-CN"));
    /// ```
    pub fn user_agent_language(&self) -> Option<&str> {
        self.user_agent.as_deref()?.split(';').find_map(|segment| {
            let (key, value) = segment.split_once('=')?;
            let value = value.trim();
            (key.trim().eq_ignore_ascii_case(LANG_HEADER) && !value.is_empty()).then_some(value)
        })
    }

    /// True when the request asked for debug output.
    pub fn wants_debug(&self) -> bool {
        self.debug.as_deref().is_some_and(|value| !value.is_empty())
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| std::str::from_utf8(value.as_bytes()).ok())
        .map(str::to_string)
}
