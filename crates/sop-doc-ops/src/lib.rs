//! High-level operations for the sop-doc optimizer.
//!
//! `Operations` drives the end-to-end flow for one document (parse → check →
//! optimize → report → save) and for a directory tree (enumerate matching
//! files, mirror the layout, run the per-file flow, aggregate results). All
//! per-document failures are recovered at the `optimize_document` boundary
//! and reported as a boolean; only configuration loading may abort a run.

pub mod dispatch;
mod quality;

pub use dispatch::{apply_rules, DispatchOutcome, OptimizationRule};
pub use quality::QualityChecker;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;
use sop_doc_config::Config;
use sop_doc_format::{render_document, render_report, report_path_for};
use sop_doc_parser::{DocumentParser, ParseError};
use sop_doc_utils::atomic_write;
use thiserror::Error;
use walkdir::WalkDir;

/// Errors raised while processing a single document. Every variant is caught
/// at the `optimize_document` boundary; none escapes to directory traversal
/// or the CLI.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("failed to read document {path}: {source}")]
    DocumentRead { path: PathBuf, source: io::Error },
    #[error("failed to write document {path}: {source}")]
    DocumentWrite { path: PathBuf, source: io::Error },
}

impl From<ParseError> for OperationError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::Io { path, source } => OperationError::DocumentRead { path, source },
        }
    }
}

/// Per-file results for a directory run, in traversal order.
#[derive(Clone, Debug, Default)]
pub struct DirectoryOutcome {
    pub entries: Vec<DirectoryEntry>,
}

/// One processed file, keyed by its path relative to the input root.
#[derive(Clone, Debug)]
pub struct DirectoryEntry {
    pub relative_path: PathBuf,
    pub success: bool,
}

impl DirectoryOutcome {
    pub fn all_succeeded(&self) -> bool {
        self.entries.iter().all(|entry| entry.success)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, relative_path: &Path) -> Option<bool> {
        self.entries
            .iter()
            .find(|entry| entry.relative_path == relative_path)
            .map(|entry| entry.success)
    }
}

/// Operation bundle wiring the parser and checker collaborators to the
/// configured rule list. The config is owned here and immutable for the
/// lifetime of the run.
pub struct Operations {
    config: Config,
    parser: DocumentParser,
    checker: QualityChecker,
}

impl Operations {
    pub fn new(config: Config) -> Self {
        Operations {
            config,
            parser: DocumentParser::new(),
            checker: QualityChecker::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the full pipeline for one document. Every failure is converted
    /// into `false` here; side effects already performed (such as a written
    /// report) are not rolled back.
    pub fn optimize_document(&self, input: &Path, output: &Path) -> bool {
        println!("optimizing {}", input.display());
        match self.run_pipeline(input, output) {
            Ok(()) => {
                println!("optimized {}", output.display());
                true
            }
            Err(err) => {
                println!("optimization failed for {}: {err}", input.display());
                false
            }
        }
    }

    fn run_pipeline(&self, input: &Path, output: &Path) -> Result<(), OperationError> {
        let document = self.parser.parse_path(input)?;
        let report = self.checker.check(&document);

        let outcome = dispatch::apply_rules(document, &self.config.optimization.rules);
        for name in &outcome.skipped {
            println!("skipping unknown optimization rule '{name}'");
        }

        if self.config.output.include_report {
            let report_format = self.config.output.report_format;
            let report_path = report_path_for(output, report_format);
            let rendered = render_report(&report, &outcome.document, report_format, Utc::now());
            // Report output is best-effort: a failed report never fails the
            // document it describes.
            if let Err(err) = atomic_write(&report_path, &rendered) {
                println!(
                    "report generation failed for {}: {err}",
                    report_path.display()
                );
            }
        }

        let rendered = render_document(&outcome.document, self.config.output.format, Utc::now());
        atomic_write(output, &rendered).map_err(|source| OperationError::DocumentWrite {
            path: output.to_path_buf(),
            source,
        })?;

        Ok(())
    }

    /// Mirror `input_dir` under `output_dir`, running the single-document
    /// flow for every `*.md` file found recursively. Traversal is sorted by
    /// file name, so the outcome order is deterministic; per-file failures
    /// are recorded and the walk continues.
    pub fn optimize_directory(&self, input_dir: &Path, output_dir: &Path) -> DirectoryOutcome {
        let mut entries = Vec::new();

        if !input_dir.is_dir() {
            println!("input directory does not exist: {}", input_dir.display());
            return DirectoryOutcome { entries };
        }

        if let Err(err) = fs::create_dir_all(output_dir) {
            println!(
                "failed to create output directory {}: {err}",
                output_dir.display()
            );
            return DirectoryOutcome { entries };
        }

        for entry in WalkDir::new(input_dir)
            .sort_by_file_name()
            .into_iter()
            .filter_map(Result::ok)
        {
            if !entry.file_type().is_file() || !is_markdown_path(entry.path()) {
                continue;
            }

            let relative_path = match entry.path().strip_prefix(input_dir) {
                Ok(relative) => relative.to_path_buf(),
                Err(_) => continue,
            };
            let output_path = output_dir.join(&relative_path);

            let success = self.optimize_document(entry.path(), &output_path);
            entries.push(DirectoryEntry {
                relative_path,
                success,
            });
        }

        DirectoryOutcome { entries }
    }
}

// Suffix match rather than `Path::extension`: a file named exactly `.md`
// still counts.
fn is_markdown_path(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map_or(false, |name| name.ends_with(".md"))
}
