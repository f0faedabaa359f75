// SPDX-License-Identifier: PMPL-1.0-or-later

//! Positional printf-style substitution for message templates.
//!
//! Templates stored in a catalog carry placeholders such as `%s` or `%d`.
//! Arguments are consumed left to right, one per placeholder. Mismatches
//! never fail; they leave an inline marker in the output instead:
//!
//! | Situation                       | Output                  |
//! |---------------------------------|-------------------------|
//! | placeholder without an argument | `%!s(MISSING)`          |
//! | `%d` with a non-integer         | `%!d(string=abc)`       |
//! | unknown verb                    | `%!x(string=abc)`       |
//! | `%` at end of template          | `%!(NOVERB)`            |
//! | width above one million         | `%!(BADWIDTH)` + value  |
//! | precision above one million     | `%!(BADPREC)` + value   |
//! | more arguments than placeholders| extras are ignored      |
//!
//! Supported verbs are `s`, `v` (plain text), `q` (quoted) and `d`
//! (integer), with optional `-+# 0` flags, a width and a precision.
//! `%%` renders a literal percent sign.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Largest width or precision honoured in a placeholder.
const MAX_PAD: usize = 1_000_000;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)%(?P<flags>[-+# 0]*)(?P<width>\d*)(?:\.(?P<prec>\d*))?(?P<verb>.)?")
        .expect("placeholder pattern is a valid regex")
});

/// Substitute `params` into `template`.
///
/// ```
/// use i18n_respond::i18n::substitute;
/// assert_eq!(
///     substitute("Hello,%s! Your id is:%s", &["Seakee", "18888888888"]),
///     "Hello,Seakee! Your id is:18888888888"
/// );
/// assert_eq!(substitute("%s and %s", &["one"]), "one and %!s(MISSING)");
/// ```
pub fn substitute<S: AsRef<str>>(template: &str, params: &[S]) -> String {
    let mut next = 0usize;
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| {
            let directive = Directive::from_captures(caps);
            let Some(verb) = directive.verb else {
                return "%!(NOVERB)".to_string();
            };
            if verb == '%' {
                return "%".to_string();
            }
            let Some(arg) = params.get(next) else {
                return format!("%!{}(MISSING)", verb);
            };
            next += 1;
            let mut out = String::new();
            if directive.bad_width {
                out.push_str("%!(BADWIDTH)");
            }
            if directive.bad_precision {
                out.push_str("%!(BADPREC)");
            }
            out.push_str(&directive.format(verb, arg.as_ref()));
            out
        })
        .into_owned()
}

#[derive(Debug, Default)]
struct Directive {
    minus: bool,
    plus: bool,
    space: bool,
    zero: bool,
    width: usize,
    precision: Option<usize>,
    bad_width: bool,
    bad_precision: bool,
    verb: Option<char>,
}

impl Directive {
    fn from_captures(caps: &Captures<'_>) -> Self {
        let flags = caps.name("flags").map_or("", |m| m.as_str());
        let width = caps.name("width").map_or(Some(0), |m| bounded(m.as_str()));
        // "%.s" is precision zero, as in C
        let precision = caps.name("prec").map(|m| bounded(m.as_str()));
        Directive {
            minus: flags.contains('-'),
            plus: flags.contains('+'),
            space: flags.contains(' '),
            zero: flags.contains('0'),
            width: width.unwrap_or(0),
            precision: precision.flatten(),
            bad_width: width.is_none(),
            bad_precision: precision.is_some_and(|p| p.is_none()),
            verb: caps.name("verb").and_then(|m| m.as_str().chars().next()),
        }
    }

    fn format(&self, verb: char, arg: &str) -> String {
        match verb {
            's' | 'v' => self.pad(self.truncate(arg)),
            'q' => self.pad(format!("{:?}", self.truncate(arg))),
            'd' => match arg.trim().parse::<i64>() {
                Ok(value) => self.integer(value),
                Err(_) => format!("%!d(string={})", arg),
            },
            other => format!("%!{}(string={})", other, arg),
        }
    }

    fn truncate(&self, arg: &str) -> String {
        match self.precision {
            Some(limit) => arg.chars().take(limit).collect(),
            None => arg.to_string(),
        }
    }

    fn integer(&self, value: i64) -> String {
        let sign = if value < 0 {
            "-"
        } else if self.plus {
            "+"
        } else if self.space {
            " "
        } else {
            ""
        };
        let digits = value.unsigned_abs().to_string();
        let len = sign.len() + digits.len();
        if self.zero && !self.minus && self.width > len {
            format!("{}{}{}", sign, "0".repeat(self.width - len), digits)
        } else {
            self.pad(format!("{}{}", sign, digits))
        }
    }

    fn pad(&self, body: String) -> String {
        let len = body.chars().count();
        if len >= self.width {
            return body;
        }
        let fill = self.width - len;
        if self.minus {
            format!("{}{}", body, " ".repeat(fill))
        } else if self.zero {
            format!("{}{}", "0".repeat(fill), body)
        } else {
            format!("{}{}", " ".repeat(fill), body)
        }
    }
}

// Empty digits count as zero; anything past MAX_PAD is rejected.
fn bounded(digits: &str) -> Option<usize> {
    if digits.is_empty() {
        return Some(0);
    }
    digits.parse::<usize>().ok().filter(|n| *n <= MAX_PAD)
}
