//! Decoding of recognized parameters into plain values.

use super::error::{FilterError, FilterResult};
use super::lexer::{RawParameter, RawValue};

/// Characters that must be escaped inside a quoted string.
const ESCAPED_CHARS: [char; 3] = ['\\', '"', '\''];

/// A decoded clause parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parameter {
    /// One or more non-empty values, matched with OR.
    List(Vec<String>),
    /// An inclusive numeric range; at least one bound is present.
    Range {
        /// Lower bound digits.
        start: Option<String>,
        /// Upper bound digits.
        end: Option<String>,
    },
}

impl Parameter {
    /// Returns true if this is a range parameter.
    pub fn is_range(&self) -> bool {
        matches!(self, Parameter::Range { .. })
    }

    /// Checks the invariants a hand-built parameter may break: a list holds
    /// at least one value and no empty ones, a range has at least one bound.
    pub fn validate(&self, key: &str) -> FilterResult<()> {
        match self {
            Parameter::List(values) if values.is_empty() || values.iter().any(String::is_empty) => {
                Err(FilterError::empty_parameter_list(key))
            }
            Parameter::Range {
                start: None,
                end: None,
            } => Err(FilterError::expected_parameter("..")),
            _ => Ok(()),
        }
    }
}

/// Escapes backslashes and both quote characters with a backslash.
///
/// The result can be placed between either kind of quote and read back by
/// the scanner; [`unescape`] restores the original text.
pub fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if ESCAPED_CHARS.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Resolves `\\`, `\"` and `\'` escape sequences.
///
/// A backslash followed by any other character is kept as written.
pub fn unescape(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some(next) if ESCAPED_CHARS.contains(&next) => result.push(next),
            Some(next) => {
                result.push('\\');
                result.push(next);
            }
            None => result.push('\\'),
        }
    }
    result
}

fn decode_value(raw: RawValue<'_>) -> String {
    if raw.quoted {
        unescape(raw.text)
    } else {
        raw.text.to_string()
    }
}

/// Turns a recognized parameter into a [`Parameter`].
///
/// Empty values are dropped from lists; a list left with no values fails
/// with [`FilterError::EmptyParameterList`].
pub fn decode(key: &str, raw: RawParameter<'_>) -> FilterResult<Parameter> {
    match raw {
        RawParameter::List(values) => {
            let values: Vec<String> = values
                .into_iter()
                .map(decode_value)
                .filter(|v| !v.is_empty())
                .collect();
            if values.is_empty() {
                return Err(FilterError::empty_parameter_list(key));
            }
            Ok(Parameter::List(values))
        }
        RawParameter::Range { start, end } => Ok(Parameter::Range {
            start: start.map(str::to_string),
            end: end.map(str::to_string),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        let list = |values: &[&str]| Parameter::List(values.iter().map(|v| v.to_string()).collect());
        assert_eq!(list(&["a"]).validate("name"), Ok(()));
        assert_eq!(
            list(&[]).validate("name"),
            Err(FilterError::EmptyParameterList {
                key: "name".to_string()
            })
        );
        assert!(list(&["a", ""]).validate("name").is_err());
        let unbounded = Parameter::Range {
            start: None,
            end: None,
        };
        assert!(matches!(
            unbounded.validate("filesize"),
            Err(FilterError::ExpectedParameter { .. })
        ));
    }

    #[test]
    fn test_escape_quotes_and_backslashes() {
        assert_eq!(escape(r#"a"b'c\d"#), r#"a\"b\'c\\d"#);
    }

    #[test]
    fn test_unescape_known_sequences() {
        assert_eq!(unescape(r#"a\"b\'c\\d"#), r#"a"b'c\d"#);
    }

    #[test]
    fn test_unescape_keeps_unknown_sequences() {
        assert_eq!(unescape(r"a\nb"), r"a\nb");
        assert_eq!(unescape(r"end\"), r"end\");
    }

    #[test]
    fn test_escape_unescape_round_trip() {
        for original in [
            "",
            "plain",
            r#"""#,
            "'",
            r"\",
            r#"\"'\\''"\"#,
            r#"mix "of" 'all' \kinds\"#,
            "ünïcödé \"q\"",
        ] {
            assert_eq!(unescape(&escape(original)), original);
        }
    }

    #[test]
    fn test_decode_drops_empty_values() {
        let raw = RawParameter::List(vec![
            RawValue {
                text: "",
                quoted: true,
            },
            RawValue {
                text: "koth",
                quoted: false,
            },
        ]);
        assert_eq!(
            decode("map", raw).unwrap(),
            Parameter::List(vec!["koth".to_string()])
        );
    }

    #[test]
    fn test_decode_empty_list_fails() {
        let raw = RawParameter::List(vec![RawValue {
            text: "",
            quoted: false,
        }]);
        assert_eq!(
            decode("name", raw),
            Err(FilterError::EmptyParameterList {
                key: "name".to_string()
            })
        );
    }

    #[test]
    fn test_decode_unescapes_quoted_only() {
        let raw = RawParameter::List(vec![RawValue {
            text: r#"a\"b"#,
            quoted: true,
        }]);
        assert_eq!(
            decode("name", raw).unwrap(),
            Parameter::List(vec![r#"a"b"#.to_string()])
        );
    }

    #[test]
    fn test_decode_range() {
        let raw = RawParameter::Range {
            start: None,
            end: Some("7"),
        };
        let parameter = decode("beststreak", raw).unwrap();
        assert!(parameter.is_range());
        assert_eq!(
            parameter,
            Parameter::Range {
                start: None,
                end: Some("7".to_string())
            }
        );
    }
}
