use std::path::PathBuf;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use serde_json::json;
use sop_doc_config::Config;
use sop_doc_core::SopDoc;
use sop_doc_ops::DirectoryOutcome;

const USAGE: &str = "usage: sop-doc <INPUT_PATH> <OUTPUT_PATH> [--config <PATH>] [--format <plain|json>]";

/// Entry point for CLI execution. Returns the desired exit code.
pub fn run() -> Result<i32> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.print()?;
            return Ok(0);
        }
        Err(_) => {
            println!("{USAGE}");
            return Ok(1);
        }
    };

    // Configuration failures are the only errors allowed to escape
    // construction; everything per-document is recovered as a boolean.
    let config = Config::load(cli.config.as_deref())?;
    let engine = SopDoc::bootstrap(config);
    let ops = engine.operations();

    let success = if cli.input.is_file() {
        ops.optimize_document(&cli.input, &cli.output)
    } else if cli.input.is_dir() {
        let outcome = ops.optimize_directory(&cli.input, &cli.output);
        emit_summary(&outcome, cli.format.unwrap_or(SummaryFormat::Plain))?;
        outcome.all_succeeded()
    } else {
        println!("input path does not exist: {}", cli.input.display());
        return Ok(1);
    };

    Ok(if success { 0 } else { 1 })
}

fn emit_summary(outcome: &DirectoryOutcome, format: SummaryFormat) -> Result<()> {
    match format {
        SummaryFormat::Json => {
            let payload = json!({
                "files": outcome
                    .entries
                    .iter()
                    .map(|entry| {
                        json!({
                            "path": entry.relative_path,
                            "success": entry.success,
                        })
                    })
                    .collect::<Vec<_>>()
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        SummaryFormat::Plain => {
            for entry in &outcome.entries {
                let status = if entry.success { "ok" } else { "failed" };
                println!("{}: {status}", entry.relative_path.display());
            }
        }
    }
    Ok(())
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "SOP document optimizer",
    propagate_version = true
)]
struct Cli {
    /// Document or directory to optimize
    #[arg(value_name = "INPUT_PATH")]
    input: PathBuf,
    /// Output document or directory
    #[arg(value_name = "OUTPUT_PATH")]
    output: PathBuf,
    /// Optional configuration file (YAML)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Summary format for directory runs
    #[arg(long, value_enum)]
    format: Option<SummaryFormat>,
}

#[derive(Clone, Copy, ValueEnum)]
enum SummaryFormat {
    Plain,
    Json,
}
