// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization of envelopes into the supported wire formats
//!
//! XML output starts with an `<?xml ...?>` declaration and wraps the
//! envelope in a `<response>` root element.

use crate::error::{Error, Result};
use crate::output::escape::{ascii_json, html_safe_json, is_js_callback, is_xml_name, xml_text};
use crate::types::Envelope;
use clap::ValueEnum;
use serde_json::Value;
use std::fmt;

/// Callback name used for JSONP when the caller does not supply one.
pub const DEFAULT_JSONP_CALLBACK: &str = "callback";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum EnvelopeFormat {
    /// JSON with `<`, `>` and `&` escaped.
    Json,
    /// JSON wrapped in a JavaScript callback.
    Jsonp,
    /// JSON with every non-ASCII character escaped.
    AsciiJson,
    /// JSON without HTML escaping.
    PureJson,
    Xml,
    Yaml,
}

impl EnvelopeFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Some(EnvelopeFormat::Json),
            "jsonp" => Some(EnvelopeFormat::Jsonp),
            "ascii-json" | "ascii_json" | "asciijson" => Some(EnvelopeFormat::AsciiJson),
            "pure-json" | "pure_json" | "purejson" => Some(EnvelopeFormat::PureJson),
            "xml" => Some(EnvelopeFormat::Xml),
            "yaml" | "yml" => Some(EnvelopeFormat::Yaml),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EnvelopeFormat::Json => "json",
            EnvelopeFormat::Jsonp => "jsonp",
            EnvelopeFormat::AsciiJson => "ascii-json",
            EnvelopeFormat::PureJson => "pure-json",
            EnvelopeFormat::Xml => "xml",
            EnvelopeFormat::Yaml => "yaml",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            EnvelopeFormat::Json | EnvelopeFormat::AsciiJson | EnvelopeFormat::PureJson => {
                "application/json; charset=utf-8"
            }
            EnvelopeFormat::Jsonp => "application/javascript; charset=utf-8",
            EnvelopeFormat::Xml => "application/xml; charset=utf-8",
            EnvelopeFormat::Yaml => "application/yaml; charset=utf-8",
        }
    }

    pub fn render(&self, envelope: &Envelope) -> Result<String> {
        self.render_with_callback(envelope, DEFAULT_JSONP_CALLBACK)
    }

    /// Render `envelope`; `callback` is only used by [`EnvelopeFormat::Jsonp`]
    /// and must be a (dotted) JavaScript identifier.
    pub fn render_with_callback(&self, envelope: &Envelope, callback: &str) -> Result<String> {
        match self {
            EnvelopeFormat::Json => Ok(html_safe_json(&self.to_json(envelope)?)),
            EnvelopeFormat::PureJson => self.to_json(envelope),
            EnvelopeFormat::AsciiJson => Ok(ascii_json(&html_safe_json(&self.to_json(envelope)?))),
            EnvelopeFormat::Jsonp => {
                if !is_js_callback(callback) {
                    return Err(Error::render(
                        self.as_str(),
                        format!("invalid callback name `{}`", callback),
                    ));
                }
                let json = html_safe_json(&self.to_json(envelope)?);
                Ok(format!("{}({});", callback, json))
            }
            EnvelopeFormat::Xml => Ok(format_envelope_as_xml(envelope)),
            EnvelopeFormat::Yaml => {
                serde_yaml::to_string(envelope).map_err(|err| Error::render(self.as_str(), err))
            }
        }
    }

    fn to_json(&self, envelope: &Envelope) -> Result<String> {
        serde_json::to_string(envelope).map_err(|err| Error::render(self.as_str(), err))
    }
}

impl fmt::Display for EnvelopeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn format_envelope_as_xml(envelope: &Envelope) -> String {
    let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<response>");
    push_element(&mut out, "code", "", &Value::from(envelope.code));
    push_element(&mut out, "msg", "", &Value::from(envelope.message.as_str()));
    out.push_str("<trace>");
    push_element(&mut out, "id", "", &Value::from(envelope.trace.id.as_str()));
    push_element(
        &mut out,
        "desc",
        "",
        &Value::from(envelope.trace.description.as_str()),
    );
    out.push_str("</trace>");
    push_element(&mut out, "data", "", &envelope.data);
    out.push_str("</response>");
    out
}

// Arrays repeat <item>; object keys that are not XML names become
// <entry key="..."> so arbitrary data still produces well-formed output.
fn push_element(out: &mut String, name: &str, attrs: &str, value: &Value) {
    out.push('<');
    out.push_str(name);
    out.push_str(attrs);
    out.push('>');
    match value {
        Value::Null => {}
        Value::Bool(flag) => out.push_str(if *flag { "true" } else { "false" }),
        Value::Number(number) => out.push_str(&number.to_string()),
        Value::String(text) => out.push_str(&xml_text(text)),
        Value::Array(items) => {
            for item in items {
                push_element(out, "item", "", item);
            }
        }
        Value::Object(map) => {
            for (key, item) in map {
                if is_xml_name(key) {
                    push_element(out, key, "", item);
                } else {
                    let attrs = format!(" key=\"{}\"", xml_text(key));
                    push_element(out, "entry", &attrs, item);
                }
            }
        }
    }
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Trace;
    use serde_json::json;

    fn envelope(data: Value) -> Envelope {
        Envelope {
            code: 0,
            message: "<ok> & 好".to_string(),
            trace: Trace {
                id: "t1".to_string(),
                description: String::new(),
            },
            data,
        }
    }

    #[test]
    fn parse_aliases() {
        assert_eq!(EnvelopeFormat::parse("JSON"), Some(EnvelopeFormat::Json));
        assert_eq!(EnvelopeFormat::parse("yml"), Some(EnvelopeFormat::Yaml));
        assert_eq!(EnvelopeFormat::parse("ascii_json"), Some(EnvelopeFormat::AsciiJson));
        assert_eq!(EnvelopeFormat::parse("pure-json"), Some(EnvelopeFormat::PureJson));
        assert_eq!(EnvelopeFormat::parse("toml"), None);
        for format in EnvelopeFormat::value_variants() {
            assert_eq!(EnvelopeFormat::parse(format.as_str()), Some(*format));
        }
    }

    #[test]
    fn pure_json_is_untouched() {
        let body = EnvelopeFormat::PureJson.render(&envelope(json!(null))).unwrap();
        assert_eq!(
            body,
            r#"{"code":0,"msg":"<ok> & 好","trace":{"id":"t1","desc":""},"data":null}"#
        );
    }

    #[test]
    fn json_escapes_markup_and_round_trips() {
        let original = envelope(json!({"html": "<p>"}));
        let body = EnvelopeFormat::Json.render(&original).unwrap();
        assert!(!body.contains('<'));
        assert!(!body.contains('&'));
        assert!(body.contains('好'));
        let back: Envelope = serde_json::from_str(&body).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn ascii_json_has_no_non_ascii() {
        let original = envelope(json!("世界"));
        let body = EnvelopeFormat::AsciiJson.render(&original).unwrap();
        assert!(body.is_ascii());
        let back: Envelope = serde_json::from_str(&body).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn jsonp_wraps_callback() {
        let env = envelope(json!(1));
        let body = EnvelopeFormat::Jsonp.render(&env).unwrap();
        assert!(body.starts_with("callback({"));
        assert!(body.ends_with("});"));

        let body = EnvelopeFormat::Jsonp
            .render_with_callback(&env, "app.onData")
            .unwrap();
        assert!(body.starts_with("app.onData("));

        let err = EnvelopeFormat::Jsonp
            .render_with_callback(&env, "alert(1)//")
            .unwrap_err();
        assert!(matches!(err, Error::Render { format: "jsonp", .. }));
    }

    #[test]
    fn xml_structure() {
        let body = EnvelopeFormat::Xml
            .render(&envelope(json!({"name": "test", "tags": ["a", "b"], "2x": true})))
            .unwrap();
        assert!(body.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<response>"));
        assert!(body.contains("<code>0</code>"));
        assert!(body.contains("<msg>&lt;ok&gt; &amp; 好</msg>"));
        assert!(body.contains("<trace><id>t1</id><desc></desc></trace>"));
        assert!(body.contains("<entry key=\"2x\">true</entry>"));
        assert!(body.contains("<name>test</name>"));
        assert!(body.contains("<tags><item>a</item><item>b</item></tags>"));
        assert!(body.ends_with("</data></response>"));
    }

    #[test]
    fn yaml_fields() {
        let body = EnvelopeFormat::Yaml
            .render(&envelope(json!({"name": "test"})))
            .unwrap();
        let back: Envelope = serde_yaml::from_str(&body).unwrap();
        assert_eq!(back.trace.id, "t1");
        assert_eq!(back.data, json!({"name": "test"}));
        assert!(body.contains("msg:"));
    }

    #[test]
    fn content_types() {
        assert_eq!(
            EnvelopeFormat::AsciiJson.content_type(),
            "application/json; charset=utf-8"
        );
        assert_eq!(
            EnvelopeFormat::Jsonp.content_type(),
            "application/javascript; charset=utf-8"
        );
        assert_eq!(EnvelopeFormat::Xml.to_string(), "xml");
    }
}
