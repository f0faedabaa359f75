// SPDX-License-Identifier: PMPL-1.0-or-later

//! HTTP response adapter for rendered envelopes.

use crate::error::Result;
use crate::output::format::{EnvelopeFormat, DEFAULT_JSONP_CALLBACK};
use crate::types::Envelope;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use tracing::warn;

/// Envelope code, stored as a response extension so that middleware can
/// read it without parsing the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseCode(pub i64);

/// An envelope paired with the format it should be sent in.
///
/// Converts into `200 OK` with the format's content type. When rendering
/// fails the response is `500 Internal Server Error` and the failure is
/// logged.
#[derive(Debug, Clone)]
pub struct EnvelopeResponse {
    envelope: Envelope,
    format: EnvelopeFormat,
    callback: String,
}

impl EnvelopeResponse {
    pub fn new(envelope: Envelope, format: EnvelopeFormat) -> Self {
        Self {
            envelope,
            format,
            callback: DEFAULT_JSONP_CALLBACK.to_string(),
        }
    }

    /// JSONP callback name; ignored by the other formats.
    pub fn with_callback(mut self, callback: impl Into<String>) -> Self {
        self.callback = callback.into();
        self
    }

    pub fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    pub fn format(&self) -> EnvelopeFormat {
        self.format
    }

    pub fn render(&self) -> Result<String> {
        self.format
            .render_with_callback(&self.envelope, &self.callback)
    }
}

impl IntoResponse for EnvelopeResponse {
    fn into_response(self) -> Response {
        let code = ResponseCode(self.envelope.code);
        let mut response = match self.render() {
            Ok(body) => (
                StatusCode::OK,
                [(CONTENT_TYPE, HeaderValue::from_static(self.format.content_type()))],
                body,
            )
                .into_response(),
            Err(err) => {
                warn!(
                    error = %err,
                    code = self.envelope.code,
                    format = %self.format,
                    "failed to render envelope"
                );
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
            }
        };
        response.extensions_mut().insert(code);
        response
    }
}
