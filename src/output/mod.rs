// SPDX-License-Identifier: PMPL-1.0-or-later

//! Envelope output: wire formats and the HTTP response adapter

pub mod escape;
pub mod format;
pub mod response;

pub use format::{EnvelopeFormat, DEFAULT_JSONP_CALLBACK};
pub use response::{EnvelopeResponse, ResponseCode};
