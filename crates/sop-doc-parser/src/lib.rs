//! Document parsing for the sop-doc pipeline.
//!
//! The parser turns raw file content into a [`DocumentRecord`], the immutable
//! value type threaded through quality checking and rule dispatch. Records
//! are never mutated in place: every transformation produces a fresh record
//! via [`DocumentRecord::with_content`], keeping rule handlers free of hidden
//! aliasing.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Structured view of one procedure document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentRecord {
    pub path: PathBuf,
    pub content: String,
    pub lines: Vec<String>,
    pub metadata: DocumentMetadata,
}

/// Parse-time metadata attached to a record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentMetadata {
    pub parsed_at: DateTime<Utc>,
    pub line_count: usize,
}

impl DocumentRecord {
    /// Produce a new record carrying `content`, with `lines` and
    /// `line_count` recomputed. `path` and `parsed_at` carry over so the
    /// record still identifies the original parse.
    pub fn with_content(&self, content: String) -> DocumentRecord {
        let lines = split_lines(&content);
        DocumentRecord {
            path: self.path.clone(),
            metadata: DocumentMetadata {
                parsed_at: self.metadata.parsed_at,
                line_count: lines.len(),
            },
            content,
            lines,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Errors raised while reading a document. Missing, unreadable, and
/// undecodable files all surface here; the orchestration layer recovers
/// them as a failed optimization rather than crashing.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read document {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
}

/// Stub parsing collaborator. The record structure is the contract; richer
/// section-aware parsing slots in behind the same two entry points.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentParser;

impl DocumentParser {
    pub fn new() -> Self {
        DocumentParser
    }

    /// Read and parse the UTF-8 document at `path`.
    pub fn parse_path(&self, path: &Path) -> Result<DocumentRecord, ParseError> {
        let content = fs::read_to_string(path).map_err(|source| ParseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.parse_str(path, &content))
    }

    /// Parse an in-memory document, tagging it with `path`.
    pub fn parse_str(&self, path: &Path, contents: &str) -> DocumentRecord {
        let lines = split_lines(contents);
        DocumentRecord {
            path: path.to_path_buf(),
            content: contents.to_owned(),
            metadata: DocumentMetadata {
                parsed_at: Utc::now(),
                line_count: lines.len(),
            },
            lines,
        }
    }
}

fn split_lines(contents: &str) -> Vec<String> {
    contents
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_owned())
        .collect()
}
