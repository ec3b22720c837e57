//! Core data structures for comment extraction
//!
//! This module defines the public types produced by an extraction run:
//! comment metadata, matched range text, export rows and the column set.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Comment identifier, unique within one document
pub type CommentId = i64;

/// Finalized range text keyed by comment id
pub type MatchedRanges = HashMap<CommentId, String>;

/// A reviewer comment read from `word/comments.xml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentRecord {
    pub id: CommentId,
    pub text: String,
    pub author: Option<String>,
    pub date: Option<String>,
}

/// Options recognized by an extraction run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractOptions {
    /// Add the Author column
    pub include_author: bool,
    /// Add the Date column
    pub include_date: bool,
    /// Keep rows whose commented text is empty
    pub keep_empty: bool,
}

/// Output columns, in the only order they may appear
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    CommentedText,
    Comment,
    Author,
    Date,
}

impl Column {
    pub fn header(self) -> &'static str {
        match self {
            Column::CommentedText => "Commented Text",
            Column::Comment => "Comment",
            Column::Author => "Author",
            Column::Date => "Date",
        }
    }
}

/// One comment paired with the text it annotates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRow {
    pub id: CommentId,
    pub commented_text: String,
    pub comment: String,
    pub author: Option<String>,
    pub date: Option<String>,
}

impl ExportRow {
    /// Cell value for a column; `None` means the optional value was absent
    pub fn value(&self, column: Column) -> Option<&str> {
        match column {
            Column::CommentedText => Some(&self.commented_text),
            Column::Comment => Some(&self.comment),
            Column::Author => self.author.as_deref(),
            Column::Date => self.date.as_deref(),
        }
    }
}

/// Result of one extraction run, ready to hand to a writer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentReport {
    pub source: PathBuf,
    pub columns: Vec<Column>,
    pub rows: Vec<ExportRow>,
}

impl CommentReport {
    pub fn headers(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.header()).collect()
    }

    /// Row cells in column order, absent values rendered as empty strings
    pub fn cells<'a>(&self, row: &'a ExportRow) -> Vec<&'a str> {
        self.columns
            .iter()
            .map(|&c| row.value(c).unwrap_or(""))
            .collect()
    }
}
