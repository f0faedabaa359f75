// SPDX-License-Identifier: PMPL-1.0-or-later

//! Message catalogs and template substitution.
//!
//! ## Layout on disk
//!
//! One JSON file per language in the language directory (`./lang` by
//! default). The file stem is the language id:
//!
//! | File          | Language id |
//! |---------------|-------------|
//! | `en-US.json`  | `en-US`     |
//! | `zh-CN.json`  | `zh-CN`     |
//!
//! Each file is a flat object of message code to template. Codes are
//! usually response codes printed as strings (`"0"`, `"400"`, `"-1"`).
//!
//! ## Design
//!
//! The [`Catalog`] is built once and never mutated, so it can be shared
//! behind an `Arc` by any number of request handlers without locking.
//! Language fallback and debug gating live in [`crate::resolver`].

mod catalog;
mod template;

pub use catalog::{Catalog, CatalogSource, Messages};
pub use template::substitute;
