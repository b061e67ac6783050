//! Scanner for filter strings.
//!
//! Splits `key: parameter` clauses off the input and recognizes the five
//! parameter forms. Matching is done by hand without backtracking into
//! quoted spans: inside a quoted string a backslash always consumes the
//! character after it, so an escaped quote can never end the string.

use super::error::{FilterError, FilterResult};

/// The negation marker placed in front of a key.
const NEGATION: char = '!';

/// Separator between a key and its parameter.
const KEY_SEPARATOR: char = ':';

/// Separator between clauses and between tuple elements.
const SEPARATOR: char = ',';

/// Escape character inside quoted strings.
const ESCAPE: char = '\\';

/// Returns true for characters allowed in keys and quoteless strings.
pub(crate) fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// A key split off the input, not yet checked against the key table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawClause<'a> {
    /// The key name.
    pub key: &'a str,
    /// Whether the key was prefixed with `!`.
    pub negated: bool,
}

/// A single value as it appeared in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawValue<'a> {
    /// Text between the quotes (still escaped) or the quoteless run.
    pub text: &'a str,
    /// Whether the value was quoted.
    pub quoted: bool,
}

impl<'a> RawValue<'a> {
    fn quoted(text: &'a str) -> Self {
        Self { text, quoted: true }
    }

    fn quoteless(text: &'a str) -> Self {
        Self {
            text,
            quoted: false,
        }
    }
}

/// A recognized parameter, before decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawParameter<'a> {
    /// One or more values (tuple or single string).
    List(Vec<RawValue<'a>>),
    /// A numeric range; at least one bound is present.
    Range {
        /// Digits before `..`.
        start: Option<&'a str>,
        /// Digits after `..`.
        end: Option<&'a str>,
    },
}

/// Cursor over a filter string.
pub struct Scanner<'a> {
    input: &'a str,
    /// Current byte position in the input string.
    position: usize,
}

impl<'a> Scanner<'a> {
    /// Creates a new scanner for the given input string.
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// Returns the unconsumed input.
    pub fn rest(&self) -> &'a str {
        &self.input[self.position..]
    }

    /// Returns true when no input is left.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Peeks at the next character without consuming it.
    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consumes and returns the next character, updating position.
    fn next_char(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.position += c.len_utf8();
        Some(c)
    }

    /// Consumes `expected` if it is the next character.
    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.position += expected.len_utf8();
            true
        } else {
            false
        }
    }

    /// Skips whitespace characters.
    pub fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.next_char();
            } else {
                break;
            }
        }
    }

    /// Reads a (possibly empty) run of identifier characters.
    fn read_identifier(&mut self) -> &'a str {
        let start = self.position;
        while let Some(c) = self.peek() {
            if is_ident_char(c) {
                self.next_char();
            } else {
                break;
            }
        }
        &self.input[start..self.position]
    }

    /// Reads a run of ASCII digits.
    fn read_digits(&mut self) -> &'a str {
        let start = self.position;
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                self.next_char();
            } else {
                break;
            }
        }
        &self.input[start..self.position]
    }

    /// Reads a single- or double-quoted string and returns its raw contents.
    ///
    /// Returns `None` (with the position left wherever scanning stopped) if
    /// there is no opening quote or the string is unterminated.
    fn read_quoted_string(&mut self) -> Option<&'a str> {
        let quote_char = match self.peek()? {
            c @ ('"' | '\'') => c,
            _ => return None,
        };
        self.next_char();

        let start = self.position;
        loop {
            let c = self.next_char()?;
            if c == ESCAPE {
                self.next_char()?;
            } else if c == quote_char {
                let end = self.position - quote_char.len_utf8();
                return Some(&self.input[start..end]);
            }
        }
    }

    /// Consumes the end of a parameter: optional whitespace followed by a
    /// separator or the end of input.
    fn read_terminator(&mut self) -> bool {
        self.skip_whitespace();
        self.is_at_end() || self.eat(SEPARATOR)
    }

    /// Splits one key off the input.
    ///
    /// Expects an optional `!`, a key name, and a `:`; whitespace after the
    /// colon is skipped.
    pub fn read_key(&mut self) -> FilterResult<RawClause<'a>> {
        let start = self.position;
        let negated = self.eat(NEGATION);
        let key = self.read_identifier();

        if !self.eat(KEY_SEPARATOR) {
            self.position = start;
            return Err(FilterError::expected_key(self.rest()));
        }
        self.skip_whitespace();

        Ok(RawClause { key, negated })
    }

    /// Recognizes exactly one parameter at the cursor, including its
    /// trailing separator.
    ///
    /// Forms are tried in a fixed order and the first match wins:
    /// quoted-string tuple, quoteless tuple, numeric range, quoteless
    /// string, quoted string.
    pub fn read_parameter(&mut self) -> FilterResult<RawParameter<'a>> {
        let start = self.position;
        let forms: [fn(&mut Self) -> Option<RawParameter<'a>>; 5] = [
            Self::try_quoted_tuple,
            Self::try_quoteless_tuple,
            Self::try_range,
            Self::try_quoteless_string,
            Self::try_quoted_string,
        ];

        for form in forms {
            if let Some(parameter) = form(self) {
                return Ok(parameter);
            }
            self.position = start;
        }

        Err(FilterError::expected_parameter(self.rest()))
    }

    /// `( "a", 'b', )` followed by a terminator.
    fn try_quoted_tuple(&mut self) -> Option<RawParameter<'a>> {
        if !self.eat('(') {
            return None;
        }
        let mut values = Vec::new();
        loop {
            self.skip_whitespace();
            values.push(RawValue::quoted(self.read_quoted_string()?));
            self.skip_whitespace();
            if self.eat(')') {
                break;
            }
            if !self.eat(SEPARATOR) {
                return None;
            }
            self.skip_whitespace();
            if self.eat(')') {
                break;
            }
        }
        self.read_terminator().then_some(RawParameter::List(values))
    }

    /// `(a, b)` followed by a terminator.
    fn try_quoteless_tuple(&mut self) -> Option<RawParameter<'a>> {
        if !self.eat('(') {
            return None;
        }
        let mut values = Vec::new();
        loop {
            self.skip_whitespace();
            let ident = self.read_identifier();
            if ident.is_empty() {
                return None;
            }
            values.push(RawValue::quoteless(ident));
            self.skip_whitespace();
            if self.eat(')') {
                break;
            }
            if !self.eat(SEPARATOR) {
                return None;
            }
        }
        self.read_terminator().then_some(RawParameter::List(values))
    }

    /// `START..END` with at least one bound, followed by a terminator.
    fn try_range(&mut self) -> Option<RawParameter<'a>> {
        let start = self.read_digits();
        if !(self.eat('.') && self.eat('.')) {
            return None;
        }
        let end = self.read_digits();
        if start.is_empty() && end.is_empty() {
            return None;
        }
        let bound = |s: &'a str| (!s.is_empty()).then_some(s);
        self.read_terminator().then_some(RawParameter::Range {
            start: bound(start),
            end: bound(end),
        })
    }

    /// A single quoteless run (possibly empty) followed by a terminator.
    fn try_quoteless_string(&mut self) -> Option<RawParameter<'a>> {
        let ident = self.read_identifier();
        self.read_terminator()
            .then(|| RawParameter::List(vec![RawValue::quoteless(ident)]))
    }

    /// A single quoted string followed by a terminator.
    fn try_quoted_string(&mut self) -> Option<RawParameter<'a>> {
        let text = self.read_quoted_string()?;
        self.read_terminator()
            .then(|| RawParameter::List(vec![RawValue::quoted(text)]))
    }
}
