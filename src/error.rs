//! Error types for comment extraction
//!
//! Only failures that prevent reading the package surface as errors.
//! Anomalies inside readable content (missing comments part, unmatched
//! ranges, stray markers) are absorbed by the parsers and logged instead.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort an extraction run
#[derive(Error, Debug)]
pub enum HarvestError {
    /// Input path does not exist
    #[error("Input not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The file exists but is not a readable zip container
    #[error(
        "Not a Word document package: {}\n\
        The file may be corrupted or is not a .docx file",
        path.display()
    )]
    InvalidPackage {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    /// A required archive member is missing
    #[error("Invalid .docx file: missing {part} in {}", path.display())]
    MissingPart { path: PathBuf, part: &'static str },

    /// The document body could not be parsed as XML
    #[error("Malformed XML in {part}")]
    MalformedBody {
        part: &'static str,
        #[source]
        source: quick_xml::Error,
    },

    #[error("I/O error reading {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl HarvestError {
    /// True for the errors that mean "there is no usable document here"
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            HarvestError::NotFound { .. }
                | HarvestError::InvalidPackage { .. }
                | HarvestError::MissingPart { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, HarvestError>;
