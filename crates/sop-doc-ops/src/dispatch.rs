use std::fmt;

use sop_doc_parser::DocumentRecord;

/// Supported optimization rules. Keep the list in sync with the registry in
/// `executor_for`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OptimizationRule {
    FormatConsistency,
    TerminologyUnification,
    StructureValidation,
}

impl OptimizationRule {
    pub const ALL: &'static [OptimizationRule] = &[
        OptimizationRule::FormatConsistency,
        OptimizationRule::TerminologyUnification,
        OptimizationRule::StructureValidation,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OptimizationRule::FormatConsistency => "format_consistency",
            OptimizationRule::TerminologyUnification => "terminology_unification",
            OptimizationRule::StructureValidation => "structure_validation",
        }
    }
}

impl fmt::Display for OptimizationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OptimizationRule {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "format_consistency" => Ok(OptimizationRule::FormatConsistency),
            "terminology_unification" => Ok(OptimizationRule::TerminologyUnification),
            "structure_validation" => Ok(OptimizationRule::StructureValidation),
            _ => Err(()),
        }
    }
}

type RuleExecutor = fn(DocumentRecord) -> DocumentRecord;

fn executor_for(rule: OptimizationRule) -> RuleExecutor {
    match rule {
        OptimizationRule::FormatConsistency => apply_format_consistency,
        OptimizationRule::TerminologyUnification => apply_terminology_unification,
        OptimizationRule::StructureValidation => apply_structure_validation,
    }
}

// Handler bodies are pass-through placeholders. Each handler takes ownership
// of the current record and returns the next one; it must never fail, and
// empty content is a valid no-op input. Replacing a body with real logic
// must not require touching the dispatch loop.

fn apply_format_consistency(document: DocumentRecord) -> DocumentRecord {
    document
}

fn apply_terminology_unification(document: DocumentRecord) -> DocumentRecord {
    document
}

fn apply_structure_validation(document: DocumentRecord) -> DocumentRecord {
    document
}

/// Result of folding the configured rule list over a document.
#[derive(Clone, Debug)]
pub struct DispatchOutcome {
    pub document: DocumentRecord,
    /// Rules that ran, in execution order. Duplicated names appear once per
    /// application.
    pub applied: Vec<OptimizationRule>,
    /// Names that matched no registered rule. Skipping is deliberate:
    /// configurations may list rules this binary does not know yet, so an
    /// unknown name is reported rather than treated as an error.
    pub skipped: Vec<String>,
}

/// Apply each named rule to `document` in listed order.
///
/// This is a left fold: every handler receives the previous handler's
/// output, so `doc_n = rule_n(doc_{n-1})`.
pub fn apply_rules(document: DocumentRecord, rule_names: &[String]) -> DispatchOutcome {
    let mut applied = Vec::new();
    let mut skipped = Vec::new();

    let document = rule_names.iter().fold(document, |current, name| {
        match name.parse::<OptimizationRule>() {
            Ok(rule) => {
                applied.push(rule);
                executor_for(rule)(current)
            }
            Err(()) => {
                skipped.push(name.clone());
                current
            }
        }
    });

    DispatchOutcome {
        document,
        applied,
        skipped,
    }
}
