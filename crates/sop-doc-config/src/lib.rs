//! Configuration primitives and loader for the sop-doc toolkit.
//!
//! The loader resolves configuration from an optional YAML file. An explicit
//! config replaces the built-in defaults wholesale; there is no layered
//! merging across sources. A missing or absent path silently falls back to
//! the defaults, while a file that exists but fails to parse is a hard error
//! at construction time.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Complete configuration driving a single optimizer run.
///
/// Built once at engine construction and immutable thereafter; the
/// orchestration layer owns it exclusively.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub optimization: OptimizationSettings,
    pub output: OutputSettings,
}

/// Settings that govern rule dispatch.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct OptimizationSettings {
    /// Ordered rule list, not a set: listing order determines application
    /// order and duplicates re-apply the rule. Names stay raw strings here
    /// so entries this binary does not recognise survive to dispatch, where
    /// they are skipped without error.
    pub rules: Vec<String>,
}

/// Settings covering document and report output.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub format: OutputFormat,
    pub include_report: bool,
    pub report_format: ReportFormat,
}

/// Serialization target for the optimized document.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Markdown,
    Plain,
}

/// Rendering target for the quality report artifact.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Html,
    Markdown,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Markdown => "markdown",
            OutputFormat::Plain => "plain",
        }
    }
}

impl ReportFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            ReportFormat::Html => "html",
            ReportFormat::Markdown => "markdown",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for OptimizationSettings {
    fn default() -> Self {
        OptimizationSettings {
            rules: default_rules(),
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        OutputSettings {
            format: OutputFormat::Markdown,
            include_report: true,
            report_format: ReportFormat::Html,
        }
    }
}

/// The built-in rule sequence applied when no config overrides it.
pub fn default_rules() -> Vec<String> {
    vec![
        "format_consistency".to_owned(),
        "terminology_unification".to_owned(),
        "structure_validation".to_owned(),
    ]
}

/// Errors surfaced while loading configuration. Both variants are fatal and
/// propagate out of engine construction.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

impl Config {
    /// Load configuration from an optional YAML file.
    ///
    /// A `None` path, or a path that does not exist, yields the built-in
    /// defaults. An existing file is parsed and returned as-is; fields the
    /// file omits take their individual defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Config::default());
        };
        if !path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
