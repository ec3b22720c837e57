//! Package reading and validation
//!
//! Opens a .docx container and pulls out the two parts extraction needs.
//! The archive handle lives only for the duration of [`DocxPackage::open`].

use std::fs::File;
use std::io::{Read, Seek};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use zip::result::{ZipError, ZipResult};
use zip::ZipArchive;

use crate::error::{HarvestError, Result};

pub const DOCUMENT_PART: &str = "word/document.xml";
pub const COMMENTS_PART: &str = "word/comments.xml";

/// The parts of a document package used for comment extraction
#[derive(Debug, Clone)]
pub struct DocxPackage {
    pub path: PathBuf,
    pub document_xml: String,
    /// `None` when the document has no comments part
    pub comments_xml: Option<String>,
}

impl DocxPackage {
    /// Open the package at `path` and read its body and comments parts
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(HarvestError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let file = File::open(path).map_err(|source| HarvestError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_reader(file, path)
    }

    /// Read the parts from any seekable zip stream; `path` is used for messages
    pub fn from_reader<R: Read + Seek>(reader: R, path: &Path) -> Result<Self> {
        let invalid = |source| HarvestError::InvalidPackage {
            path: path.to_path_buf(),
            source,
        };

        let mut archive = ZipArchive::new(reader).map_err(invalid)?;

        let document_xml = match read_part(&mut archive, DOCUMENT_PART).map_err(invalid)? {
            Some(xml) => xml,
            None => {
                if archive.index_for_name("xl/workbook.xml").is_some() {
                    warn!("{} looks like an Excel workbook, not a Word document", path.display());
                }
                return Err(HarvestError::MissingPart {
                    path: path.to_path_buf(),
                    part: DOCUMENT_PART,
                });
            }
        };

        // A broken comments part must not cost us the run
        let comments_xml = match read_part(&mut archive, COMMENTS_PART) {
            Ok(Some(xml)) => Some(xml),
            Ok(None) => {
                debug!("{} has no {COMMENTS_PART}", path.display());
                None
            }
            Err(e) => {
                warn!("Could not read {COMMENTS_PART} from {}: {e}", path.display());
                None
            }
        };

        Ok(DocxPackage {
            path: path.to_path_buf(),
            document_xml,
            comments_xml,
        })
    }
}

/// Read a member as UTF-8 text, `Ok(None)` if the archive has no such member
fn read_part<R: Read + Seek>(archive: &mut ZipArchive<R>, name: &str) -> ZipResult<Option<String>> {
    let mut part = match archive.by_name(name) {
        Ok(part) => part,
        Err(ZipError::FileNotFound) => return Ok(None),
        Err(e) => return Err(e),
    };

    let mut xml = String::new();
    part.read_to_string(&mut xml)?;
    Ok(Some(xml))
}
