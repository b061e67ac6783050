//! Filter query language for demo records.
//!
//! A filter string is a comma-separated list of `key: parameter` clauses.
//! It is parsed into [`Clause`]s, compiled against the static key table
//! into a [`CompiledQuery`], and evaluated against [`DemoRecord`]s. A record
//! matches when every clause matches.
//!
//! # Supported Syntax
//!
//! ## Keys
//! - `name`, `bookmark_contains` - substring match on the file name / bookmark labels
//! - `map`, `hostname`, `clientid` - substring match on demo header fields
//! - `killstreaks`, `bookmarks` - number of killstreaks / bookmarks
//! - `beststreak` - highest killstreak, `-1` if there are none
//! - `moddate`, `filesize` - file modification time (Unix seconds) / size in bytes
//!
//! ## Parameters
//! - `koth_` - a single quoteless value
//! - `"two words"` or `'it\'s'` - a single quoted value
//! - `(koth, cp)` or `("a", 'b',)` - any of several values
//! - `6..`, `..10`, `3..10` - an inclusive range (integer keys only)
//!
//! ## Negation
//! - `!key: parameter` - the clause must not match
//!
//! # Example
//!
//! ```
//! use demo_filter_rs::filter::{process, Flags};
//! use demo_filter_rs::record::{DemoRecord, Killstreak};
//!
//! let query = process("name: (koth, cp), beststreak: 6..").unwrap();
//! assert!(!query.flags.contains(Flags::NEEDS_HEADER));
//!
//! let mut record = DemoRecord::new("cp_process_final.dem");
//! record.killstreaks.push(Killstreak { peak: 12, tick: 4000 });
//! assert!(query.matches(&record));
//! ```
//!
//! [`DemoRecord`]: crate::record::DemoRecord

mod ast;
mod compiler;
mod decode;
mod error;
mod evaluator;
mod keys;
mod lexer;
mod parser;

pub use ast::{CmpOp, Expr, NumField, TextField};
pub use compiler::{compile, process, CompiledClause, CompiledQuery};
pub use decode::{escape, unescape, Parameter};
pub use error::{FilterError, FilterResult};
pub use evaluator::evaluate;
pub use keys::{Flags, KeySpec, Template, ValueType};
pub use parser::{Clause, FilterParser};

#[cfg(test)]
mod tests;
