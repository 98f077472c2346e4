//! Location value object - where a definition came from
//!
//! A location names a source file and, when the parser knows it, the line
//! and column of the construct. The last-modified timestamp of the source
//! is carried along so that stale sources can be detected by callers.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Source origin of a definition
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    file: String,
    line: Option<u32>,
    column: Option<u32>,
    last_modified: Option<DateTime<Utc>>,
}

impl Location {
    /// Create a location pointing at a line and column of a file
    ///
    /// `last_modified` is in milliseconds since the Unix epoch. Values that
    /// do not map to a representable instant are dropped.
    pub fn new(file: impl Into<String>, line: u32, column: u32, last_modified: i64) -> Self {
        Self {
            file: file.into(),
            line: Some(line),
            column: Some(column),
            last_modified: DateTime::from_timestamp_millis(last_modified),
        }
    }

    /// Create a location for a whole file (no line or column)
    pub fn for_file(file: impl Into<String>, last_modified: i64) -> Self {
        Self {
            file: file.into(),
            line: None,
            column: None,
            last_modified: DateTime::from_timestamp_millis(last_modified),
        }
    }

    /// Builder: set the line only
    pub fn with_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn line(&self) -> Option<u32> {
        self.line
    }

    pub fn column(&self) -> Option<u32> {
        self.column
    }

    pub fn last_modified(&self) -> Option<DateTime<Utc>> {
        self.last_modified
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.line, self.column) {
            (Some(line), Some(column)) => write!(f, "{}:{}:{}", self.file, line, column),
            (Some(line), None) => write!(f, "{}:{}", self.file, line),
            _ => write!(f, "{}", self.file),
        }
    }
}
