//! Quality report types and output renderers for the sop-doc toolkit.
//!
//! Report values are produced by the quality checker in `sop-doc-ops` and
//! rendered here into the HTML or Markdown artifact written next to the
//! optimized document.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use sop_doc_config::{OutputFormat, ReportFormat};
use sop_doc_parser::DocumentRecord;

/// Quality assessment for one document. Immutable after creation; consumed
/// only by the report renderer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QualityReport {
    pub score: u8,
    pub issues: Vec<QualityIssue>,
    pub checked_at: DateTime<Utc>,
}

/// Individual finding inside a quality report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QualityIssue {
    pub kind: String,
    pub severity: IssueSeverity,
    pub description: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IssueSeverity {
    Low,
    Medium,
    High,
}

impl IssueSeverity {
    pub fn as_str(self) -> &'static str {
        match self {
            IssueSeverity::Low => "low",
            IssueSeverity::Medium => "medium",
            IssueSeverity::High => "high",
        }
    }
}

impl fmt::Display for IssueSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compute the report path for a given output document: the file extension
/// is replaced with `_report.html` or `_report.md`. A path without an
/// extension gains the suffix directly.
pub fn report_path_for(output_path: &Path, format: ReportFormat) -> PathBuf {
    let suffix = match format {
        ReportFormat::Html => "_report.html",
        ReportFormat::Markdown => "_report.md",
    };
    let stem = output_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = format!("{stem}{suffix}");
    match output_path.parent() {
        Some(parent) => parent.join(file_name),
        None => PathBuf::from(file_name),
    }
}

/// Render a quality report for `document` in the requested format.
pub fn render_report(
    report: &QualityReport,
    document: &DocumentRecord,
    format: ReportFormat,
    generated_at: DateTime<Utc>,
) -> String {
    match format {
        ReportFormat::Html => render_report_html(report, document, generated_at),
        ReportFormat::Markdown => render_report_markdown(report, document, generated_at),
    }
}

fn render_report_html(
    report: &QualityReport,
    document: &DocumentRecord,
    generated_at: DateTime<Utc>,
) -> String {
    let mut out = String::new();
    out.push_str("<html><body>\n");
    out.push_str("<h1>SOP Optimization Report</h1>\n");
    out.push_str(&format!("<p>Document: {}</p>\n", document.path.display()));
    out.push_str(&format!("<p>Generated: {}</p>\n", generated_at.to_rfc3339()));
    out.push_str(&format!("<p>Quality score: {}</p>\n", report.score));
    if !report.issues.is_empty() {
        out.push_str("<ul>\n");
        for issue in &report.issues {
            out.push_str(&format!(
                "<li>[{}] {}: {}</li>\n",
                issue.severity, issue.kind, issue.description
            ));
        }
        out.push_str("</ul>\n");
    }
    out.push_str("</body></html>\n");
    out
}

fn render_report_markdown(
    report: &QualityReport,
    document: &DocumentRecord,
    generated_at: DateTime<Utc>,
) -> String {
    let mut out = String::new();
    out.push_str("# SOP Optimization Report\n\n");
    out.push_str(&format!("- Document: {}\n", document.path.display()));
    out.push_str(&format!("- Generated: {}\n", generated_at.to_rfc3339()));
    out.push_str(&format!("- Quality score: {}\n", report.score));
    if !report.issues.is_empty() {
        out.push_str("\n## Issues\n\n");
        for issue in &report.issues {
            out.push_str(&format!(
                "- [{}] {}: {}\n",
                issue.severity, issue.kind, issue.description
            ));
        }
    }
    out
}

/// Serialize the optimized document: a header line identifying the artifact,
/// a generation-timestamp line, then the document content itself.
pub fn render_document(
    document: &DocumentRecord,
    format: OutputFormat,
    generated_at: DateTime<Utc>,
) -> String {
    let mut out = String::new();
    match format {
        OutputFormat::Markdown => out.push_str("# Optimized Document\n\n"),
        OutputFormat::Plain => out.push_str("Optimized document\n\n"),
    }
    out.push_str(&format!("Generated: {}\n\n", generated_at.to_rfc3339()));
    out.push_str(&document.content);
    if !document.content.ends_with('\n') {
        out.push('\n');
    }
    out
}
