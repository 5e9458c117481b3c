use chrono::Utc;
use sop_doc_format::{IssueSeverity, QualityIssue, QualityReport};
use sop_doc_parser::DocumentRecord;

/// Stub scoring collaborator. The orchestration contract only requires that
/// checking never fails; richer heuristics slot in behind `check` without
/// changing the pipeline.
#[derive(Clone, Copy, Debug, Default)]
pub struct QualityChecker;

impl QualityChecker {
    pub fn new() -> Self {
        QualityChecker
    }

    pub fn check(&self, document: &DocumentRecord) -> QualityReport {
        QualityReport {
            score: 85,
            issues: vec![QualityIssue {
                kind: "format".to_owned(),
                severity: IssueSeverity::Medium,
                description: format!(
                    "formatting of {} needs attention",
                    document.path.display()
                ),
            }],
            checked_at: Utc::now(),
        }
    }
}
