//! Tabular export of comment reports
//!
//! Every format writes exactly the report's selected columns, in order.

use anyhow::{Context, Result};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt::Write as _;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::document::{Column, CommentReport, ExportRow};
use crate::ExportFormat;

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Markdown => "md",
            ExportFormat::Text => "txt",
        }
    }
}

/// `<stem>_comments.<ext>` next to the input document
pub fn default_output_path(input: &Path, format: &ExportFormat) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("document");
    input.with_file_name(format!("{stem}_comments.{}", format.extension()))
}

/// Render the report in the requested format
pub fn export_report(report: &CommentReport, format: &ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Csv => export_to_csv(report),
        ExportFormat::Json => export_to_json(report),
        ExportFormat::Markdown => export_to_markdown(report),
        ExportFormat::Text => export_to_text(report),
    }
}

/// Render and write to `output`, or to stdout when `output` is `None`
pub fn write_report(report: &CommentReport, format: &ExportFormat, output: Option<&Path>) -> Result<()> {
    let rendered = export_report(report, format)?;
    match output {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("Failed to write output file: {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

pub fn export_to_csv(report: &CommentReport) -> Result<String> {
    let mut writer = csv::WriterBuilder::new().from_writer(Vec::new());
    writer.write_record(report.headers())?;
    for row in &report.rows {
        writer.write_record(report.cells(row))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| e.into_error())
        .context("Failed to flush CSV output")?;
    Ok(String::from_utf8(bytes)?)
}

/// A row viewed through the report's column set
struct RowView<'a> {
    columns: &'a [Column],
    row: &'a ExportRow,
}

impl Serialize for RowView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for &column in self.columns {
            map.serialize_entry(column.header(), &self.row.value(column))?;
        }
        map.end()
    }
}

pub fn export_to_json(report: &CommentReport) -> Result<String> {
    let rows: Vec<RowView> = report
        .rows
        .iter()
        .map(|row| RowView {
            columns: &report.columns,
            row,
        })
        .collect();
    let mut json = serde_json::to_string_pretty(&rows)?;
    json.push('\n');
    Ok(json)
}

fn escape_markdown_cell(value: &str) -> String {
    value
        .replace('|', "\\|")
        .replace("\r\n", "<br>")
        .replace('\n', "<br>")
}

pub fn export_to_markdown(report: &CommentReport) -> Result<String> {
    let mut output = String::new();
    let headers = report.headers();

    writeln!(output, "| {} |", headers.join(" | "))?;
    writeln!(
        output,
        "|{}|",
        headers.iter().map(|_| "---").collect::<Vec<_>>().join("|")
    )?;
    for row in &report.rows {
        let cells: Vec<String> = report
            .cells(row)
            .into_iter()
            .map(escape_markdown_cell)
            .collect();
        writeln!(output, "| {} |", cells.join(" | "))?;
    }
    Ok(output)
}

pub fn export_to_text(report: &CommentReport) -> Result<String> {
    let mut output = String::new();
    for (index, row) in report.rows.iter().enumerate() {
        if index > 0 {
            output.push('\n');
        }
        for &column in &report.columns {
            writeln!(output, "{}: {}", column.header(), row.value(column).unwrap_or(""))?;
        }
    }
    Ok(output)
}
