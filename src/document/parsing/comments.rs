//! Comment metadata extraction from `word/comments.xml`

use quick_xml::events::{BytesStart, Event};
use quick_xml::NsReader;
use std::collections::HashMap;
use tracing::warn;

use super::{attribute, comment_id, is_word_ns};
use crate::document::models::{CommentId, CommentRecord};

/// Comment records in the order the comments part lists them.
///
/// A missing or unparseable part yields no comments rather than an error.
pub fn read_comments(comments_xml: Option<&str>) -> Vec<CommentRecord> {
    let Some(xml) = comments_xml else {
        return Vec::new();
    };

    match parse_comments(xml) {
        Ok(comments) => comments,
        Err(e) => {
            warn!("Ignoring unreadable comments part: {e}");
            Vec::new()
        }
    }
}

/// Parse every `w:comment` into a record.
///
/// The text is the concatenation of the comment's `w:t` nodes, trimmed.
/// A repeated id keeps its first position and takes the later metadata.
pub fn parse_comments(xml: &str) -> quick_xml::Result<Vec<CommentRecord>> {
    let mut reader = NsReader::from_str(xml);
    reader.config_mut().trim_text(false);

    let mut comments: Vec<CommentRecord> = Vec::new();
    let mut positions: HashMap<CommentId, usize> = HashMap::new();

    let mut buf = Vec::new();
    let mut current: Option<CommentRecord> = None;
    let mut in_text = false;

    loop {
        let (ns, event) = reader.read_resolved_event_into(&mut buf)?;
        let finished = match event {
            Event::Start(ref e) if is_word_ns(&ns) => match e.local_name().as_ref() {
                b"comment" => {
                    current = new_record(e);
                    None
                }
                b"t" if current.is_some() => {
                    in_text = true;
                    None
                }
                _ => None,
            },
            // <w:comment/> with no content
            Event::Empty(ref e) if is_word_ns(&ns) && e.local_name().as_ref() == b"comment" => {
                new_record(e)
            }
            Event::End(ref e) if is_word_ns(&ns) => match e.local_name().as_ref() {
                b"comment" => current.take(),
                b"t" => {
                    in_text = false;
                    None
                }
                _ => None,
            },
            Event::Text(ref e) if in_text => {
                if let Some(record) = current.as_mut() {
                    record.text.push_str(&e.unescape()?);
                }
                None
            }
            Event::CData(e) if in_text => {
                if let Some(record) = current.as_mut() {
                    record.text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
                None
            }
            Event::Eof => break,
            _ => None,
        };

        if let Some(mut record) = finished {
            record.text = record.text.trim().to_string();
            match positions.get(&record.id) {
                Some(&index) => comments[index] = record,
                None => {
                    positions.insert(record.id, comments.len());
                    comments.push(record);
                }
            }
        }
        buf.clear();
    }

    Ok(comments)
}

fn new_record(e: &BytesStart) -> Option<CommentRecord> {
    let Some(id) = comment_id(e) else {
        warn!("Skipping comment without a numeric w:id");
        return None;
    };

    Some(CommentRecord {
        id,
        text: String::new(),
        author: attribute(e, b"author"),
        date: attribute(e, b"date"),
    })
}
