//! Keys command implementation.
//!
//! Lists the filter keys understood by the filter language.

use demo_filter_rs::filter::KeySpec;

use super::{CommandContext, Result};
use crate::output::{format_keys_json, format_keys_table};

/// Executes the keys command.
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let keys = KeySpec::all();

    if ctx.json_output {
        let output = format_keys_json(keys)?;
        println!("{output}");
    } else if !ctx.quiet {
        let output = format_keys_table(keys, ctx.use_colors);
        print!("{output}");
    }

    Ok(())
}
