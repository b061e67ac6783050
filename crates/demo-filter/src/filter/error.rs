//! Error types for the filter parser and compiler.

use thiserror::Error;

/// A specialized Result type for filter operations.
pub type FilterResult<T> = Result<T, FilterError>;

/// Maximum number of input characters quoted in syntax errors.
pub(crate) const ERROR_CONTEXT_CHARS: usize = 10;

/// Errors that can occur while parsing or compiling a filter string.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FilterError {
    /// No `key:` sequence was found at the cursor.
    #[error("expected key at \"{context}\"")]
    ExpectedKey {
        /// Up to 10 characters of input at the failing position.
        context: String,
    },

    /// None of the parameter forms matched at the cursor.
    #[error("expected parameter at \"{context}\"")]
    ExpectedParameter {
        /// Up to 10 characters of input at the failing position.
        context: String,
    },

    /// The key is not part of the key table.
    #[error("unknown filter key: {key}{}", suggestion_suffix(.suggestion))]
    UnknownKey {
        /// The unrecognized key.
        key: String,
        /// The closest known key, if one is reasonably close.
        suggestion: Option<String>,
    },

    /// A value could not be coerced to the key's type.
    #[error("invalid parameter for {key}: {value}")]
    InvalidParameterType {
        /// The key the value was given for.
        key: String,
        /// The raw value.
        value: String,
    },

    /// A parameter held no usable (non-empty) values.
    #[error("empty parameter list for {key}")]
    EmptyParameterList {
        /// The key the parameter was given for.
        key: String,
    },

    /// A range was given for a string-typed key.
    #[error("key {key} does not accept a range")]
    RangeNotSupported {
        /// The key the range was given for.
        key: String,
    },
}

fn suggestion_suffix(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(" (did you mean '{s}'?)"),
        None => String::new(),
    }
}

/// Returns the first [`ERROR_CONTEXT_CHARS`] characters of `input`.
fn context(input: &str) -> String {
    input.chars().take(ERROR_CONTEXT_CHARS).collect()
}

impl FilterError {
    /// Creates an expected-key error quoting the start of `rest`.
    pub fn expected_key(rest: &str) -> Self {
        FilterError::ExpectedKey {
            context: context(rest),
        }
    }

    /// Creates an expected-parameter error quoting the start of `rest`.
    pub fn expected_parameter(rest: &str) -> Self {
        FilterError::ExpectedParameter {
            context: context(rest),
        }
    }

    /// Creates an unknown key error.
    pub fn unknown_key(key: impl Into<String>, suggestion: Option<String>) -> Self {
        FilterError::UnknownKey {
            key: key.into(),
            suggestion,
        }
    }

    /// Creates an invalid parameter type error.
    pub fn invalid_parameter(key: impl Into<String>, value: impl Into<String>) -> Self {
        FilterError::InvalidParameterType {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates an empty parameter list error.
    pub fn empty_parameter_list(key: impl Into<String>) -> Self {
        FilterError::EmptyParameterList { key: key.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_is_truncated() {
        let err = FilterError::expected_key("abcdefghijklmnop");
        assert_eq!(
            err,
            FilterError::ExpectedKey {
                context: "abcdefghij".to_string()
            }
        );
    }

    #[test]
    fn test_context_counts_chars_not_bytes() {
        let err = FilterError::expected_parameter("ääääääääääää");
        let FilterError::ExpectedParameter { context } = err else {
            panic!("wrong variant");
        };
        assert_eq!(context.chars().count(), 10);
    }

    #[test]
    fn test_unknown_key_message_with_suggestion() {
        let err = FilterError::unknown_key("nmae", Some("name".to_string()));
        assert_eq!(
            err.to_string(),
            "unknown filter key: nmae (did you mean 'name'?)"
        );
    }

    #[test]
    fn test_unknown_key_message_without_suggestion() {
        let err = FilterError::unknown_key("bogus", None);
        assert_eq!(err.to_string(), "unknown filter key: bogus");
    }
}
