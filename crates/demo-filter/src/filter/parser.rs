//! Parser turning a filter string into a list of clauses.

use tracing::trace;

use super::decode::{decode, Parameter};
use super::error::FilterResult;
use super::lexer::Scanner;

/// One `key: parameter` unit of a filter string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    /// Key name as written (not yet checked against the key table).
    pub key: String,
    /// Whether the clause was prefixed with `!`.
    pub negated: bool,
    /// The decoded parameter.
    pub parameter: Parameter,
}

impl Clause {
    /// Returns true if the clause has a range parameter.
    pub fn is_range(&self) -> bool {
        self.parameter.is_range()
    }
}

/// Parser for filter strings.
///
/// # Grammar
///
/// ```text
/// filter_string    ::= clause ("," clause)* | ""
/// clause           ::= ["!"] key ":" WS* parameter
/// key              ::= [A-Za-z0-9_-]*
/// parameter        ::= string_tuple | quoteless_tuple | range
///                    | quoteless_string | quoted_string
/// string_tuple     ::= "(" quoted_string ("," quoted_string)* ","? ")"
/// quoteless_tuple  ::= "(" ident ("," ident)* ")"
/// range            ::= digits? ".." digits?
/// quoted_string    ::= "'" chars "'" | "\"" chars "\""
/// quoteless_string ::= [A-Za-z0-9_-]*
/// ```
///
/// # Example
///
/// ```
/// use demo_filter_rs::filter::{FilterParser, Parameter};
///
/// let clauses = FilterParser::parse("map: koth_, !bookmarks: 0").unwrap();
/// assert_eq!(clauses.len(), 2);
/// assert_eq!(clauses[0].key, "map");
/// assert!(clauses[1].negated);
/// assert_eq!(clauses[1].parameter, Parameter::List(vec!["0".to_string()]));
/// ```
pub struct FilterParser;

impl FilterParser {
    /// Parses a filter string into its clauses.
    ///
    /// An empty (or all-whitespace) string yields no clauses.
    ///
    /// # Errors
    ///
    /// Returns `FilterError::ExpectedKey` or `FilterError::ExpectedParameter`
    /// for syntax errors, and `FilterError::EmptyParameterList` when a
    /// parameter holds no non-empty values.
    pub fn parse(input: &str) -> FilterResult<Vec<Clause>> {
        let mut scanner = Scanner::new(input);
        let mut clauses = Vec::new();

        loop {
            scanner.skip_whitespace();
            if scanner.is_at_end() {
                break;
            }

            let raw = scanner.read_key()?;
            let parameter = decode(raw.key, scanner.read_parameter()?)?;
            trace!(key = raw.key, negated = raw.negated, ?parameter, "parsed clause");

            clauses.push(Clause {
                key: raw.key.to_string(),
                negated: raw.negated,
                parameter,
            });
        }

        Ok(clauses)
    }
}
