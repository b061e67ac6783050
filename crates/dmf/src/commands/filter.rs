//! Filter command implementation.
//!
//! Loads demo records from a JSON file, compiles the filter string once,
//! and prints the records that match. Header and filesystem data are only
//! provided for records that still need them after the cheap clauses
//! (those reading name, killstreaks and bookmarks only) have passed.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use demo_filter_rs::filter::{process, CompiledClause, CompiledQuery, Flags};
use demo_filter_rs::record::{DemoHeader, DemoRecord, FileData};
use tracing::{debug, warn};

use super::config::Config;
use super::{CommandContext, CommandError, Result};
use crate::output::{format_records_json, format_records_table};

/// Options for the filter command.
#[derive(Debug, Default)]
pub struct FilterOptions {
    /// Filter string.
    pub filter: String,
    /// Records file (overrides config).
    pub records: Option<PathBuf>,
    /// Demo directory (overrides config).
    pub demo_dir: Option<PathBuf>,
    /// Limit results.
    pub limit: Option<usize>,
}

/// Executes the filter command.
///
/// # Errors
///
/// Returns an error if the filter is invalid, no records file is known, or
/// the records file cannot be read.
pub fn execute(ctx: &CommandContext, opts: &FilterOptions, config: &Config) -> Result<()> {
    let query = process(&opts.filter)?;

    let records_path = opts
        .records
        .as_deref()
        .or(config.records.as_deref())
        .ok_or_else(|| {
            CommandError::Config(
                "No records file. Use --records or 'dmf config set records <path>'".to_string(),
            )
        })?;
    let demo_dir = opts.demo_dir.as_deref().or(config.demo_dir.as_deref());

    let records = load_records(records_path)?;
    let total = records.len();
    debug!(total, path = %records_path.display(), "loaded records");

    let matched = apply_limit(select(&query, records, demo_dir), opts.limit);
    debug!(total, matched = matched.len(), "filter finished");

    if ctx.json_output {
        let output = format_records_json(&matched)?;
        println!("{output}");
    } else if !ctx.quiet {
        let output = format_records_table(&matched, ctx.use_colors);
        print!("{output}");
    }

    Ok(())
}

/// Reads a JSON array of demo records.
pub fn load_records(path: &Path) -> Result<Vec<DemoRecord>> {
    let content = fs::read_to_string(path).map_err(|e| {
        CommandError::Records(format!("Failed to read {}: {}", path.display(), e))
    })?;
    serde_json::from_str(&content).map_err(|e| {
        CommandError::Records(format!("Failed to parse {}: {}", path.display(), e))
    })
}

/// Returns the records matching `query`, in input order.
///
/// Clauses that need no extra data are checked first; header and filesystem
/// data are only filled in for records that pass them.
pub fn select(
    query: &CompiledQuery,
    records: Vec<DemoRecord>,
    demo_dir: Option<&Path>,
) -> Vec<DemoRecord> {
    let (cheap, costly): (Vec<&CompiledClause>, Vec<&CompiledClause>) =
        query.clauses.iter().partition(|c| c.flags.is_empty());

    records
        .into_iter()
        .filter_map(|mut record| {
            if !cheap.iter().all(|c| c.matches(&record)) {
                return None;
            }
            if !costly.is_empty() {
                supply_missing_data(&mut record, query.flags, demo_dir);
            }
            costly
                .iter()
                .all(|c| c.matches(&record))
                .then_some(record)
        })
        .collect()
}

/// Fills in the record data `flags` asks for when the record lacks it.
fn supply_missing_data(record: &mut DemoRecord, flags: Flags, demo_dir: Option<&Path>) {
    if flags.contains(Flags::NEEDS_HEADER) && record.header.is_none() {
        debug!(demo = %record.name, "record has no header, using fallback");
        record.header = Some(DemoHeader::default());
    }
    if flags.contains(Flags::NEEDS_FILESYSTEM_INFO) && record.filedata.is_none() {
        record.filedata = Some(stat_demo(&record.name, demo_dir));
    }
}

/// Reads size and modification time of a demo file, falling back to
/// `FileData::default()` when it cannot be stat'ed.
///
/// Only the final component of `name` is used, so the stat always stays
/// inside `demo_dir`.
fn stat_demo(name: &str, demo_dir: Option<&Path>) -> FileData {
    let Some(dir) = demo_dir else {
        warn!(demo = %name, "no demo directory configured, using empty file data");
        return FileData::default();
    };
    let Some(file_name) = Path::new(name).file_name() else {
        warn!(demo = %name, "demo name has no file name, using empty file data");
        return FileData::default();
    };

    let path = dir.join(file_name);
    match fs::metadata(&path) {
        Ok(meta) => FileData {
            filesize: i64::try_from(meta.len()).unwrap_or(i64::MAX),
            modtime: meta
                .modified()
                .map(|t| DateTime::<Utc>::from(t).timestamp())
                .unwrap_or(0),
        },
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not stat demo, using empty file data");
            FileData::default()
        }
    }
}

/// Applies the limit to the matched records.
fn apply_limit(records: Vec<DemoRecord>, limit: Option<usize>) -> Vec<DemoRecord> {
    match limit {
        Some(limit) => records.into_iter().take(limit).collect(),
        None => records,
    }
}
