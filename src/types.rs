// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions: the response envelope and its payload.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Standardized response body handed to an output format.
///
/// Serializes as:
///
/// ```json
/// {"code": 0, "msg": "ok", "trace": {"id": "", "desc": ""}, "data": null}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub code: i64,
    #[serde(rename = "msg")]
    pub message: String,
    pub trace: Trace,
    pub data: Value,
}

/// Diagnostic details attached to an envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    /// Request trace id, empty when the request carried none.
    pub id: String,
    /// Error description, only filled when debug output is allowed.
    #[serde(rename = "desc")]
    pub description: String,
}

/// Response data, optionally carrying template parameters for the message.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Data echoed as-is; the message template is used without substitution.
    Plain(Value),
    /// `params` fill the message template; only `data` is echoed.
    WithParams { params: Vec<String>, data: Value },
}

impl Payload {
    pub fn plain(data: impl Into<Value>) -> Self {
        Payload::Plain(data.into())
    }

    pub fn with_params<I, S>(params: I, data: impl Into<Value>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Payload::WithParams {
            params: params.into_iter().map(Into::into).collect(),
            data: data.into(),
        }
    }

    /// Split into template parameters and response data.
    pub fn into_parts(self) -> (Vec<String>, Value) {
        match self {
            Payload::Plain(data) => (Vec::new(), data),
            Payload::WithParams { params, data } => (params, data),
        }
    }
}

impl Default for Payload {
    fn default() -> Self {
        Payload::Plain(Value::Null)
    }
}

impl From<Value> for Payload {
    fn from(data: Value) -> Self {
        Payload::Plain(data)
    }
}

impl From<&str> for Payload {
    fn from(data: &str) -> Self {
        Payload::Plain(Value::from(data))
    }
}

impl From<String> for Payload {
    fn from(data: String) -> Self {
        Payload::Plain(Value::from(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_wire_shape() {
        let envelope = Envelope {
            code: 400,
            message: "bad request".to_string(),
            trace: Trace {
                id: "abc".to_string(),
                description: "missing field".to_string(),
            },
            data: json!({"field": "name"}),
        };
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            value,
            json!({
                "code": 400,
                "msg": "bad request",
                "trace": {"id": "abc", "desc": "missing field"},
                "data": {"field": "name"}
            })
        );
        let back: Envelope = serde_json::from_value(value).unwrap();
        assert_eq!(back, envelope);
    }

    #[test]
    fn payload_parts() {
        let (params, data) = Payload::with_params(["Seakee", "18888888888"], "test").into_parts();
        assert_eq!(params, vec!["Seakee", "18888888888"]);
        assert_eq!(data, json!("test"));

        let (params, data) = Payload::from("busy").into_parts();
        assert!(params.is_empty());
        assert_eq!(data, json!("busy"));

        assert_eq!(Payload::default().into_parts().1, Value::Null);
    }
}
