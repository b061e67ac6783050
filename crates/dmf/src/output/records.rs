//! Demo record output formatting.

use demo_filter_rs::record::DemoRecord;
use owo_colors::OwoColorize;
use serde::Serialize;

use super::helpers::{format_size, format_timestamp, truncate_str};

/// JSON output structure for the filter command.
#[derive(Serialize)]
pub struct RecordsListOutput<'a> {
    pub records: Vec<RecordOutput<'a>>,
    pub count: usize,
}

/// JSON output structure for a single matched record.
#[derive(Serialize)]
pub struct RecordOutput<'a> {
    pub name: &'a str,
    pub killstreaks: usize,
    pub best_streak: i64,
    pub bookmarks: Vec<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filesize: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modtime: Option<i64>,
}

/// Formats matched records as JSON.
pub fn format_records_json(records: &[DemoRecord]) -> Result<String, serde_json::Error> {
    let records_output: Vec<RecordOutput> = records
        .iter()
        .map(|r| RecordOutput {
            name: &r.name,
            killstreaks: r.killstreaks.len(),
            best_streak: r.best_streak(),
            bookmarks: r.bookmarks.iter().map(|b| b.label.as_str()).collect(),
            map: r.header.as_ref().map(|h| h.map_name.as_str()),
            hostname: r.header.as_ref().map(|h| h.hostname.as_str()),
            filesize: r.filedata.map(|d| d.filesize),
            modtime: r.filedata.map(|d| d.modtime),
        })
        .collect();

    let output = RecordsListOutput {
        count: records_output.len(),
        records: records_output,
    };

    serde_json::to_string_pretty(&output)
}

/// Formats matched records as a table.
pub fn format_records_table(records: &[DemoRecord], use_colors: bool) -> String {
    if records.is_empty() {
        return "No matching demos.\n".to_string();
    }

    let mut output = String::new();

    let header = format!(
        "{:<36} {:<6} {:<9} {:<10} {}",
        "Name", "Streak", "Bookmarks", "Size", "Modified"
    );
    if use_colors {
        output.push_str(&format!("{}\n", header.dimmed()));
    } else {
        output.push_str(&header);
        output.push('\n');
    }

    for record in records {
        let streak = match record.best_streak() {
            -1 => "-".to_string(),
            peak => peak.to_string(),
        };
        let (size, modified) = match record.filedata {
            Some(data) => (format_size(data.filesize), format_timestamp(data.modtime)),
            None => ("-".to_string(), "-".to_string()),
        };

        let line = format!(
            "{:<36} {:<6} {:<9} {:<10} {}",
            truncate_str(&record.name, 36),
            streak,
            record.bookmarks.len(),
            size,
            modified
        );
        output.push_str(&line);
        output.push('\n');
    }

    output
}
