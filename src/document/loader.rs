//! Extraction orchestration
//!
//! This module contains `extract_comments()`, which runs the whole pipeline
//! for one document: read the package, parse comment metadata, match comment
//! ranges in the body, then assemble rows.

use std::path::Path;
use tracing::{debug, info};

use super::io::{DocxPackage, DOCUMENT_PART};
use super::models::*;
use super::parsing::comments::read_comments;
use super::parsing::ranges::match_ranges;
use super::rows::{assemble_rows, select_columns};
use crate::error::{HarvestError, Result};

/// Extract every comment of the document at `file_path` with the text it annotates
///
/// Nothing is returned unless the full scan succeeds, so callers never see
/// a partial report.
pub fn extract_comments(file_path: &Path, options: &ExtractOptions) -> Result<CommentReport> {
    let package = DocxPackage::open(file_path)?;
    extract_from_package(&package, options)
}

/// Run extraction on an already opened package
pub fn extract_from_package(package: &DocxPackage, options: &ExtractOptions) -> Result<CommentReport> {
    let comments = read_comments(package.comments_xml.as_deref());
    debug!("Found {} comments in {}", comments.len(), package.path.display());

    // No comments means no rows; skip the body scan
    let ranges = if comments.is_empty() {
        MatchedRanges::new()
    } else {
        match_ranges(&package.document_xml).map_err(|source| HarvestError::MalformedBody {
            part: DOCUMENT_PART,
            source,
        })?
    };

    let rows = assemble_rows(&comments, &ranges, options);
    info!(
        "{}: {} comments, {} matched ranges, {} rows",
        package.path.display(),
        comments.len(),
        ranges.len(),
        rows.len()
    );

    Ok(CommentReport {
        source: package.path.clone(),
        columns: select_columns(options),
        rows,
    })
}
