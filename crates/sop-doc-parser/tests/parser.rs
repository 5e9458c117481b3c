use std::fs;
use std::io::Write;
use std::path::Path;

use sop_doc_parser::{DocumentParser, ParseError};
use tempfile::TempDir;

fn setup_file(dir: &Path, relative: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(relative);
    let mut file = fs::File::create(&path).expect("create file");
    file.write_all(contents.as_bytes()).expect("write file");
    path
}

#[test]
fn parses_document_fields() {
    let temp = TempDir::new().expect("tempdir");
    let path = setup_file(temp.path(), "test.md", "# 测试文档\n\n这是一份测试文档。");

    let parser = DocumentParser::new();
    let record = parser.parse_path(&path).expect("parse document");

    assert_eq!(record.path, path);
    assert_eq!(record.content, "# 测试文档\n\n这是一份测试文档。");
    assert_eq!(record.lines, vec!["# 测试文档", "", "这是一份测试文档。"]);
    assert_eq!(record.metadata.line_count, 3);
}

#[test]
fn missing_file_surfaces_io_error() {
    let parser = DocumentParser::new();
    let err = parser
        .parse_path(Path::new("/nonexistent/path.md"))
        .expect_err("expected read failure");

    match err {
        ParseError::Io { path, .. } => assert_eq!(path, Path::new("/nonexistent/path.md")),
    }
}

#[test]
fn strips_carriage_returns_from_lines() {
    let parser = DocumentParser::new();
    let record = parser.parse_str(Path::new("crlf.md"), "first\r\nsecond\r\nthird");

    assert_eq!(record.lines, vec!["first", "second", "third"]);
    assert_eq!(record.metadata.line_count, 3);
}

#[test]
fn with_content_recomputes_lines_and_preserves_identity() {
    let parser = DocumentParser::new();
    let record = parser.parse_str(Path::new("doc.md"), "one\ntwo");

    let updated = record.with_content("one\ntwo\nthree\n".to_owned());

    assert_eq!(updated.path, record.path);
    assert_eq!(updated.metadata.parsed_at, record.metadata.parsed_at);
    assert_eq!(updated.lines, vec!["one", "two", "three", ""]);
    assert_eq!(updated.metadata.line_count, 4);

    // Source record is untouched.
    assert_eq!(record.lines, vec!["one", "two"]);
    assert_eq!(record.metadata.line_count, 2);
}

#[test]
fn empty_content_is_a_valid_record() {
    let parser = DocumentParser::new();
    let record = parser.parse_str(Path::new("empty.md"), "");

    assert!(record.is_empty());
    assert_eq!(record.metadata.line_count, 1);
}
