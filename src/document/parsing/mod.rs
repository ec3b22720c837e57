//! Document parsing utilities
//!
//! Both parsers stream raw WordprocessingML with `quick-xml` instead of
//! building a tree, so elements are always seen in document order.

pub mod comments;
pub mod ranges;

use quick_xml::events::BytesStart;
use quick_xml::name::{Namespace, ResolveResult};
use tracing::debug;

use super::models::CommentId;

/// WordprocessingML main namespace
pub(crate) const W_NS: &[u8] = b"http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// True if the resolved element namespace is WordprocessingML
pub(crate) fn is_word_ns(ns: &ResolveResult) -> bool {
    matches!(ns, ResolveResult::Bound(Namespace(uri)) if *uri == W_NS)
}

/// Unescaped value of the attribute with the given local name (`w:author` -> `author`)
pub(crate) fn attribute(e: &BytesStart, local: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|a| a.key.local_name().as_ref() == local)
        .and_then(|a| a.unescape_value().ok().map(|v| v.into_owned()))
}

/// The `w:id` of a comment, range start or range end element
pub(crate) fn comment_id(e: &BytesStart) -> Option<CommentId> {
    let raw = attribute(e, b"id")?;
    match raw.trim().parse() {
        Ok(id) => Some(id),
        Err(_) => {
            debug!(
                "Ignoring <{}> with non-numeric id {raw:?}",
                String::from_utf8_lossy(e.name().as_ref())
            );
            None
        }
    }
}
