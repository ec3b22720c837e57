//! commentharvest: Export reviewer comments from .docx files
//!
//! This library pairs every comment in a Word document with the exact span
//! of text it annotates and produces rows ready for spreadsheet export.

pub mod config;
pub mod document;
pub mod error;
pub mod export;

use serde::{Deserialize, Serialize};

/// Export format options
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
    Markdown,
    Text,
}

// Re-export commonly used types
pub use config::Config;
pub use document::{extract_comments, CommentReport, ExportRow, ExtractOptions};
pub use error::HarvestError;
