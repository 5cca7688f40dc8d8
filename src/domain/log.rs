//! Work-log value objects
//!
//! `Day` and `Entry` are derived from the typed document tree and hold no
//! back-reference to it.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// Separator between hierarchy levels inside a tag token
pub const TAG_SEPARATOR: &str = " / ";

/// A hierarchical tag, e.g. `Work / MyOrg / MyDept`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct TagPath(Vec<String>);

impl TagPath {
    /// Split a tag token into its hierarchy segments.
    ///
    /// Splitting never yields zero segments; a token without the separator is
    /// a single-segment path.
    pub fn parse(token: &str) -> Self {
        TagPath(token.split(TAG_SEPARATOR).map(str::to_string).collect())
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for TagPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("/"))
    }
}

/// One work interval
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub start: NaiveTime,
    pub end: NaiveTime,
    /// Duplicate paths collapse; ordering among tags carries no meaning
    pub tags: BTreeSet<TagPath>,
}

/// One calendar day with its entries in document order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Day {
    pub date: NaiveDate,
    pub entries: Vec<Entry>,
}
