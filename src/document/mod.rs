//! Comment extraction from Word (.docx) packages
//!
//! This module reads a document package, matches each reviewer comment to
//! the span of body text it annotates, and assembles report rows.

pub mod io;
pub mod loader;
pub mod models;
pub(crate) mod parsing;
pub mod rows;

pub use io::DocxPackage;
pub use loader::{extract_comments, extract_from_package};
pub use models::*;
pub use parsing::comments::{parse_comments, read_comments};
pub use parsing::ranges::{match_ranges, RangeMatcher};
pub use rows::{assemble_rows, select_columns};
