// SPDX-License-Identifier: PMPL-1.0-or-later

//! i18n-respond — localized response envelopes for web handlers.
//!
//! Loads one message catalog per language, picks a language for each
//! request, resolves a response code to a localized message and wraps the
//! result in a standard envelope:
//!
//! ```json
//! {"code": 1000, "msg": "Hello,Seakee!", "trace": {"id": "", "desc": ""}, "data": null}
//! ```
//!
//! BUILDING BLOCKS:
//! 1. **Catalog** (`i18n`): immutable language → code → template map.
//! 2. **Resolver** (`resolver`): language selection, fallback, template
//!    substitution and debug gating.
//! 3. **Output** (`output`): JSON, JSONP, ASCII JSON, pure JSON, XML and
//!    YAML renderings, plus an axum `IntoResponse` adapter.
//!
//! ```
//! use i18n_respond::i18n::{Catalog, CatalogSource};
//! use i18n_respond::{Options, Payload, RequestSignals, Resolver};
//!
//! let catalog = Catalog::build(vec![CatalogSource::new(
//!     "en-US.json",
//!     r#"{"0": "ok", "1000": "Hello,%s!"}"#,
//! )])?;
//! let resolver = Resolver::with_catalog(catalog, &Options::default());
//!
//! let signals = RequestSignals::new().with_user_agent("app/1.0; lang=fr-FR");
//! let envelope = resolver.build_envelope(&signals, 1000, Payload::with_params(["Seakee"], "x"), None);
//! assert_eq!(envelope.message, "Hello,Seakee!");
//! # Ok::<(), i18n_respond::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod i18n;
pub mod output;
pub mod resolver;
pub mod signals;
pub mod types;

pub use config::Options;
pub use error::{Error, Result};
pub use output::{EnvelopeFormat, EnvelopeResponse};
pub use resolver::Resolver;
pub use signals::{RequestSignals, TraceId};
pub use types::{Envelope, Payload, Trace};
