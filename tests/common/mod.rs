//! Shared helpers for building .docx fixtures on the fly
#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

pub fn start(id: i64) -> String {
    format!(r#"<w:commentRangeStart w:id="{id}"/>"#)
}

pub fn end(id: i64) -> String {
    format!(r#"<w:commentRangeEnd w:id="{id}"/><w:r><w:commentReference w:id="{id}"/></w:r>"#)
}

pub fn run(text: &str) -> String {
    format!(r#"<w:r><w:t xml:space="preserve">{text}</w:t></w:r>"#)
}

pub fn para(content: &[String]) -> String {
    format!("<w:p>{}</w:p>", content.concat())
}

pub fn comment(id: i64, text: &str, author: Option<&str>, date: Option<&str>) -> String {
    let mut attrs = format!(r#"w:id="{id}""#);
    if let Some(author) = author {
        attrs.push_str(&format!(r#" w:author="{author}""#));
    }
    if let Some(date) = date {
        attrs.push_str(&format!(r#" w:date="{date}""#));
    }
    format!(r#"<w:comment {attrs}><w:p><w:r><w:t>{text}</w:t></w:r></w:p></w:comment>"#)
}

pub fn document_xml(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="{W_NS}"><w:body>{body}<w:sectPr/></w:body></w:document>"#
    )
}

pub fn comments_xml(comments: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:comments xmlns:w="{W_NS}">{comments}</w:comments>"#
    )
}

/// Write a zip with the given raw parts
pub fn write_package(dir: &Path, name: &str, parts: &[(&str, String)]) -> PathBuf {
    let path = dir.join(name);
    let mut writer = ZipWriter::new(File::create(&path).unwrap());
    writer
        .start_file("[Content_Types].xml", SimpleFileOptions::default())
        .unwrap();
    writer.write_all(b"<Types/>").unwrap();
    for (part, content) in parts {
        writer.start_file(*part, SimpleFileOptions::default()).unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }
    writer.finish().unwrap();
    path
}

/// Write a .docx with a body and, optionally, a comments part
pub fn write_docx(dir: &Path, name: &str, body: &str, comments: Option<&str>) -> PathBuf {
    let mut parts = vec![("word/document.xml", document_xml(body))];
    if let Some(comments) = comments {
        parts.push(("word/comments.xml", comments_xml(comments)));
    }
    write_package(dir, name, &parts)
}
