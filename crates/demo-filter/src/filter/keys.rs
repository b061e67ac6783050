//! The static table of filter keys.

use std::fmt;

use bitflags::bitflags;
use strsim::levenshtein;

use super::ast::{NumField, TextField};

/// Maximum Levenshtein distance for suggesting a key.
const MAX_SUGGESTION_DISTANCE: usize = 3;

bitflags! {
    /// Record data a compiled query needs beyond name, killstreaks and bookmarks.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Flags: u8 {
        /// The demo header must be read.
        const NEEDS_HEADER = 0b01;
        /// The demo file must be stat'ed.
        const NEEDS_FILESYSTEM_INFO = 0b10;
    }
}

/// Primitive type of a key's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    /// Integer values; lists compare with equality, ranges are allowed.
    Int,
    /// String values; lists compare with substring containment.
    Str,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::Int => f.write_str("int"),
            ValueType::Str => f.write_str("str"),
        }
    }
}

/// How a key's values are compared against a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    /// Substring containment over a text field.
    Contains(TextField),
    /// Integer comparison over a numeric field.
    Compare(NumField),
}

/// Definition of one filter key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySpec {
    /// Key name as typed in filter strings.
    pub name: &'static str,
    /// Type the values are coerced to.
    pub value_type: ValueType,
    /// Comparison applied to each value.
    pub template: Template,
    /// Record data the key needs.
    pub flags: Flags,
}

const fn text(name: &'static str, field: TextField, flags: Flags) -> KeySpec {
    KeySpec {
        name,
        value_type: ValueType::Str,
        template: Template::Contains(field),
        flags,
    }
}

const fn number(name: &'static str, field: NumField, flags: Flags) -> KeySpec {
    KeySpec {
        name,
        value_type: ValueType::Int,
        template: Template::Compare(field),
        flags,
    }
}

static KEY_TABLE: [KeySpec; 10] = [
    text("name", TextField::Name, Flags::empty()),
    text(
        "bookmark_contains",
        TextField::BookmarkLabels,
        Flags::empty(),
    ),
    text("map", TextField::Map, Flags::NEEDS_HEADER),
    text("hostname", TextField::Hostname, Flags::NEEDS_HEADER),
    text("clientid", TextField::ClientId, Flags::NEEDS_HEADER),
    number("killstreaks", NumField::KillstreakCount, Flags::empty()),
    number("bookmarks", NumField::BookmarkCount, Flags::empty()),
    number("beststreak", NumField::BestStreak, Flags::empty()),
    number("moddate", NumField::ModDate, Flags::NEEDS_FILESYSTEM_INFO),
    number("filesize", NumField::FileSize, Flags::NEEDS_FILESYSTEM_INFO),
];

impl KeySpec {
    /// Looks up a key by exact name.
    pub fn lookup(name: &str) -> Option<&'static KeySpec> {
        KEY_TABLE.iter().find(|spec| spec.name == name)
    }

    /// Returns every known key, in table order.
    pub fn all() -> &'static [KeySpec] {
        &KEY_TABLE
    }

    /// Returns the closest known key name, if one is near enough.
    ///
    /// A suggestion must differ from `name` in fewer characters than `name`
    /// has, so an empty key never gets one.
    pub fn suggest(name: &str) -> Option<&'static str> {
        let query = name.to_lowercase();
        let (best, distance) = KEY_TABLE
            .iter()
            .map(|spec| (spec.name, levenshtein(&query, spec.name)))
            .min_by_key(|(_, d)| *d)?;

        let close_enough =
            distance <= MAX_SUGGESTION_DISTANCE && distance < query.chars().count();
        (close_enough && best != name).then_some(best)
    }
}
