//! Comment range matching
//!
//! Walks `word/document.xml` once, in document order, and collects the text
//! between each `w:commentRangeStart` / `w:commentRangeEnd` pair. Ranges may
//! nest or interleave; text seen while several ranges are open belongs to
//! all of them.

use quick_xml::events::Event;
use quick_xml::NsReader;
use std::collections::HashMap;
use tracing::debug;

use super::{comment_id, is_word_ns};
use crate::document::models::{CommentId, MatchedRanges};

/// State of the linear scan over the body
#[derive(Debug, Default)]
pub struct RangeMatcher {
    /// Fragments accumulated per open range, in append order
    open: HashMap<CommentId, Vec<String>>,
    matched: MatchedRanges,
}

impl RangeMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// A range start marker. Starting an open or already finished id is ignored.
    pub fn start(&mut self, id: CommentId) {
        if self.matched.contains_key(&id) {
            debug!("Range {id} reopened after it was closed; ignoring");
            return;
        }
        self.open.entry(id).or_default();
    }

    /// A text-bearing node; the text goes to every open range
    pub fn text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        for fragments in self.open.values_mut() {
            fragments.push(text.to_string());
        }
    }

    /// A range end marker. Closing an id that is not open is a no-op.
    pub fn end(&mut self, id: CommentId) {
        match self.open.remove(&id) {
            Some(fragments) => {
                let text = fragments.concat().trim().to_string();
                self.matched.insert(id, text);
            }
            None => debug!("End marker for range {id} which is not open; ignoring"),
        }
    }

    /// Finish the scan. Ranges still open produce no entry.
    pub fn finish(self) -> MatchedRanges {
        if !self.open.is_empty() {
            let mut unmatched: Vec<_> = self.open.keys().copied().collect();
            unmatched.sort_unstable();
            debug!("Ranges without an end marker: {unmatched:?}");
        }
        self.matched
    }
}

/// Match every comment range in the body part to the text it spans
pub fn match_ranges(document_xml: &str) -> quick_xml::Result<MatchedRanges> {
    let mut reader = NsReader::from_str(document_xml);
    reader.config_mut().trim_text(false); // Spacing inside w:t is significant

    let mut matcher = RangeMatcher::new();
    let mut buf = Vec::new();
    let mut in_text = false;
    let mut current_text = String::new();

    loop {
        let (ns, event) = reader.read_resolved_event_into(&mut buf)?;
        match event {
            Event::Start(ref e) | Event::Empty(ref e) if is_word_ns(&ns) => {
                match e.local_name().as_ref() {
                    b"commentRangeStart" => {
                        if let Some(id) = comment_id(e) {
                            matcher.start(id);
                        }
                    }
                    b"commentRangeEnd" => {
                        if let Some(id) = comment_id(e) {
                            matcher.end(id);
                        }
                    }
                    b"t" if matches!(event, Event::Start(_)) => {
                        in_text = true;
                        current_text.clear();
                    }
                    _ => {}
                }
            }
            Event::End(ref e) if in_text && is_word_ns(&ns) && e.local_name().as_ref() == b"t" => {
                in_text = false;
                matcher.text(&current_text);
            }
            Event::Text(ref e) if in_text => {
                current_text.push_str(&e.unescape()?);
            }
            Event::CData(e) if in_text => {
                current_text.push_str(&String::from_utf8_lossy(&e.into_inner()));
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(matcher.finish())
}
