//! Evaluation of compiled filters against demo records.
//!
//! Evaluation is pure: it reads the record and nothing else. Header and
//! filesystem fields are read through the fallbacks
//! [`DemoHeader::default`] and [`FileData::default`] when the record does
//! not carry them; supplying real data for the keys in
//! [`CompiledQuery::flags`] is the caller's job.

use std::borrow::Cow;

use crate::record::{DemoHeader, DemoRecord, FileData};

use super::ast::{Expr, NumField, TextField};
use super::compiler::{CompiledClause, CompiledQuery};

static FALLBACK_HEADER: DemoHeader = DemoHeader {
    map_name: String::new(),
    hostname: String::new(),
    clientid: String::new(),
};

fn header(record: &DemoRecord) -> &DemoHeader {
    record.header.as_ref().unwrap_or(&FALLBACK_HEADER)
}

fn filedata(record: &DemoRecord) -> FileData {
    record.filedata.unwrap_or_default()
}

impl TextField {
    /// Projects the field out of a record.
    pub fn project<'r>(&self, record: &'r DemoRecord) -> Cow<'r, str> {
        match self {
            TextField::Name => Cow::Borrowed(&record.name),
            TextField::BookmarkLabels => Cow::Owned(record.bookmark_labels()),
            TextField::Map => Cow::Borrowed(&header(record).map_name),
            TextField::Hostname => Cow::Borrowed(&header(record).hostname),
            TextField::ClientId => Cow::Borrowed(&header(record).clientid),
        }
    }
}

impl NumField {
    /// Projects the field out of a record.
    pub fn project(&self, record: &DemoRecord) -> i64 {
        match self {
            NumField::KillstreakCount => count(record.killstreaks.len()),
            NumField::BookmarkCount => count(record.bookmarks.len()),
            NumField::BestStreak => record.best_streak(),
            NumField::ModDate => filedata(record).modtime,
            NumField::FileSize => filedata(record).filesize,
        }
    }
}

fn count(len: usize) -> i64 {
    i64::try_from(len).unwrap_or(i64::MAX)
}

impl Expr {
    /// Returns true if the record satisfies the expression.
    pub fn evaluate(&self, record: &DemoRecord) -> bool {
        match self {
            Expr::Contains(field, needle) => field.project(record).contains(needle.as_str()),
            Expr::Compare(field, op, value) => op.holds(field.project(record), *value),
            Expr::And(children) => children.iter().all(|c| c.evaluate(record)),
            Expr::Or(children) => children.iter().any(|c| c.evaluate(record)),
            Expr::Not(inner) => !inner.evaluate(record),
        }
    }
}

impl CompiledClause {
    /// Returns true if the record satisfies this clause.
    pub fn matches(&self, record: &DemoRecord) -> bool {
        self.expr.evaluate(record)
    }
}

impl CompiledQuery {
    /// Returns true if the record satisfies every clause.
    pub fn matches(&self, record: &DemoRecord) -> bool {
        evaluate(&self.clauses, record)
    }

    /// Filters a slice of records, returning only those that match.
    pub fn filter_records<'r>(&self, records: &'r [DemoRecord]) -> Vec<&'r DemoRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

/// Returns true if the record satisfies every clause.
///
/// Stops at the first clause that does not match. An empty clause list
/// matches every record.
pub fn evaluate(clauses: &[CompiledClause], record: &DemoRecord) -> bool {
    clauses.iter().all(|clause| clause.matches(record))
}

#[cfg(test)]
#[path = "evaluator_tests.rs"]
mod tests;
