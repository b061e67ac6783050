//! Demo record data model.
//!
//! These types describe what the filter engine knows about a single demo
//! recording. Records are assembled by the caller; the `header` and
//! `filedata` parts are only expected to be present when a compiled query
//! asks for them (see [`Flags`](crate::filter::Flags)).

use serde::{Deserialize, Serialize};

/// A killstreak event recorded in a demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Killstreak {
    /// Streak value reached.
    pub peak: i64,
    /// Demo tick at which the streak was reached.
    pub tick: i64,
}

/// A user-placed bookmark in a demo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    /// Bookmark label.
    pub label: String,
    /// Demo tick of the bookmark.
    pub tick: i64,
}

/// Fields read from the binary demo header.
///
/// `DemoHeader::default()` is the fallback used when a query needs header
/// data that the caller could not provide: every field is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoHeader {
    /// Map the demo was recorded on.
    #[serde(default)]
    pub map_name: String,
    /// Server hostname.
    #[serde(default)]
    pub hostname: String,
    /// Client identifier of the recording player.
    #[serde(default)]
    pub clientid: String,
}

/// Filesystem metadata of the demo file.
///
/// `FileData::default()` (size 0, modification time 0) is the fallback used
/// when the file could not be stat'ed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileData {
    /// File size in bytes.
    pub filesize: i64,
    /// Modification time as seconds since the Unix epoch.
    pub modtime: i64,
}

/// A demo recording as seen by the filter engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoRecord {
    /// Demo file name (e.g. `koth_product_rc8.dem`).
    pub name: String,

    /// Killstreaks recorded in the demo's event log.
    #[serde(default)]
    pub killstreaks: Vec<Killstreak>,

    /// Bookmarks recorded in the demo's event log.
    #[serde(default)]
    pub bookmarks: Vec<Bookmark>,

    /// Demo header, supplied on demand.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<DemoHeader>,

    /// Filesystem metadata, supplied on demand.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filedata: Option<FileData>,
}

impl DemoRecord {
    /// Creates a record with only a name set.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Highest killstreak peak in the demo, or `-1` if there are none.
    pub fn best_streak(&self) -> i64 {
        self.killstreaks.iter().map(|k| k.peak).max().unwrap_or(-1)
    }

    /// All bookmark labels joined together without a separator.
    pub fn bookmark_labels(&self) -> String {
        self.bookmarks.iter().map(|b| b.label.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_streak_without_killstreaks() {
        assert_eq!(DemoRecord::new("a.dem").best_streak(), -1);
    }

    #[test]
    fn test_best_streak_takes_max_peak() {
        let mut record = DemoRecord::new("a.dem");
        record.killstreaks = vec![
            Killstreak { peak: 3, tick: 100 },
            Killstreak { peak: 9, tick: 900 },
            Killstreak { peak: 5, tick: 400 },
        ];
        assert_eq!(record.best_streak(), 9);
    }

    #[test]
    fn test_bookmark_labels_concatenated() {
        let mut record = DemoRecord::new("a.dem");
        record.bookmarks = vec![
            Bookmark {
                label: "General".to_string(),
                tick: 10,
            },
            Bookmark {
                label: "clip".to_string(),
                tick: 20,
            },
        ];
        assert_eq!(record.bookmark_labels(), "Generalclip");
    }

    #[test]
    fn test_deserialize_minimal_record() {
        let record: DemoRecord = serde_json::from_str(r#"{"name": "x.dem"}"#).unwrap();
        assert_eq!(record, DemoRecord::new("x.dem"));
        assert!(record.header.is_none());
        assert!(record.filedata.is_none());
    }
}
