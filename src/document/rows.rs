//! Row assembly
//!
//! Joins comment metadata with matched range text and picks the output
//! column set.

use super::models::*;

/// One row per comment, in comment encounter order.
///
/// Comments whose range never closed get empty commented text. Rows with
/// blank commented text are dropped unless `keep_empty` is set.
pub fn assemble_rows(
    comments: &[CommentRecord],
    ranges: &MatchedRanges,
    options: &ExtractOptions,
) -> Vec<ExportRow> {
    comments
        .iter()
        .map(|comment| ExportRow {
            id: comment.id,
            commented_text: ranges.get(&comment.id).cloned().unwrap_or_default(),
            comment: comment.text.clone(),
            author: comment.author.clone(),
            date: comment.date.clone(),
        })
        .filter(|row| options.keep_empty || !row.commented_text.trim().is_empty())
        .collect()
}

/// "Commented Text" and "Comment" always, then Author, then Date
pub fn select_columns(options: &ExtractOptions) -> Vec<Column> {
    let mut columns = vec![Column::CommentedText, Column::Comment];
    if options.include_author {
        columns.push(Column::Author);
    }
    if options.include_date {
        columns.push(Column::Date);
    }
    columns
}
