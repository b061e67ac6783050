//! Output formatting utilities for the dmf CLI.
//!
//! This module provides functions for formatting data as tables or JSON.
//! It is organized into submodules by entity type:
//!
//! - [`records`] - Demo record output (filter command)
//! - [`query`] - Compiled query output (check command)
//! - [`keys`] - Filter key table output (keys command)
//! - [`helpers`] - Common formatting utilities (truncation, sizes, dates)

pub mod helpers;
mod keys;
mod query;
mod records;

pub use keys::{format_keys_json, format_keys_table};
pub use query::{format_query_json, format_query_table};
pub use records::{format_records_json, format_records_table};
