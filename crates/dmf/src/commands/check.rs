//! Check command implementation.
//!
//! Parses and compiles a filter without loading any records, showing what
//! each clause compiles to and which record data the query needs.

use demo_filter_rs::filter::process;

use super::{CommandContext, Result};
use crate::output::{format_query_json, format_query_table};

/// Executes the check command.
///
/// # Errors
///
/// Returns the filter error if the filter does not parse or compile.
pub fn execute(ctx: &CommandContext, filter: &str) -> Result<()> {
    let query = process(filter)?;

    if ctx.json_output {
        let output = format_query_json(&query)?;
        println!("{output}");
    } else if !ctx.quiet {
        let output = format_query_table(&query, ctx.use_colors);
        print!("{output}");
    }

    Ok(())
}
