// SPDX-License-Identifier: PMPL-1.0-or-later

//! Escaping helpers shared by the envelope formats.

/// Replace characters that are unsafe inside an HTML `<script>` block.
///
/// Operates on serialized JSON: `<`, `>` and `&` can only occur inside
/// string literals there, so `\u` escapes keep the document valid.
pub fn html_safe_json(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for ch in json.chars() {
        match ch {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape every non-ASCII character of serialized JSON as `\uXXXX`,
/// using surrogate pairs outside the basic multilingual plane.
pub fn ascii_json(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    let mut units = [0u16; 2];
    for ch in json.chars() {
        if ch.is_ascii() {
            out.push(ch);
            continue;
        }
        for unit in ch.encode_utf16(&mut units) {
            out.push_str(&format!("\\u{:04x}", unit));
        }
    }
    out
}

/// Escape text for use in XML character data and attribute values.
pub fn xml_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            // control characters other than tab/newline/CR are not legal XML 1.0
            c if c.is_control() && !matches!(c, '\t' | '\n' | '\r') => {
                out.push('\u{fffd}')
            }
            c => out.push(c),
        }
    }
    out
}

/// True when `name` can be used verbatim as an XML element name.
pub fn is_xml_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_alphabetic() || first == '_') {
        return false;
    }
    if name.get(..3).is_some_and(|prefix| prefix.eq_ignore_ascii_case("xml")) {
        return false;
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

/// True when `name` is a dotted JavaScript identifier usable as a JSONP
/// callback, e.g. `handle` or `window.app.onData`.
pub fn is_js_callback(name: &str) -> bool {
    !name.is_empty()
        && name.split('.').all(|part| {
            let mut chars = part.chars();
            matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        })
}
