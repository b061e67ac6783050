//! Filter query language for demo recordings.
//!
//! This crate parses compact filter strings such as
//! `map: koth_, beststreak: 6.., !bookmarks: 0` and compiles them into pure
//! predicates over [`record::DemoRecord`]s. It performs no I/O; the caller
//! supplies records and, guided by [`filter::Flags`], any header or
//! filesystem data the query needs.

pub mod filter;
pub mod record;

pub use filter::{evaluate, process, CompiledQuery, FilterError, FilterResult, Flags};
pub use record::DemoRecord;
