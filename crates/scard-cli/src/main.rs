//! `scard` - command-line host for `scard-core`.
//!
//! # Usage
//!
//! ```bash
//! scard check cards/*.scard            # exit code 1 if any file has diagnostics
//! scard check --json card.scard
//! scard highlight card.scard --classes classes.yaml
//! scard complete 'rarity = "CO' 12 --accept COMMON
//! scard template > new.scard
//! ```
//!
//! Logs go to stderr; set `RUST_LOG=scard_core=trace` to see engine internals.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use scard_core::{
    Diagnostic, Severity, StyleClasses, TEMPLATE, analyze, get_suggestions, resolve_insertion,
};
use serde_json::json;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "scard=info";

#[derive(Parser, Debug)]
#[command(name = "scard", version, about = "Validate, highlight and complete .scard files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate one or more files
    Check {
        /// Files to validate
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Print diagnostics as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the style spans of a file
    Highlight {
        /// File to highlight
        file: PathBuf,
        /// YAML file mapping style tags to class names
        #[arg(long)]
        classes: Option<PathBuf>,
    },
    /// Print completion suggestions for a line
    Complete {
        /// Text of the line under the caret
        line: String,
        /// Caret column (chars)
        column: usize,
        /// Resolve how this suggestion would be inserted
        #[arg(long)]
        accept: Option<String>,
    },
    /// Print a starter document
    Template,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref()))
        .init();

    let cli = Cli::parse();
    debug!(?cli, "parsed arguments");

    match cli.command {
        Commands::Check { files, json } => check(&files, json),
        Commands::Highlight { file, classes } => highlight(&file, classes.as_deref()),
        Commands::Complete {
            line,
            column,
            accept,
        } => complete(&line, column, accept.as_deref()),
        Commands::Template => {
            print!("{TEMPLATE}");
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// `RUST_LOG` when set and parseable, otherwise info-level logs for the `scard` binary.
fn env_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

fn read_document(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn check(files: &[PathBuf], as_json: bool) -> Result<ExitCode> {
    let mut failed = 0usize;
    let mut reports = Vec::new();

    for path in files {
        let text = read_document(path)?;
        let analysis = analyze(&text);
        if !analysis.is_valid() {
            failed += 1;
        }

        if as_json {
            reports.push(json!({
                "file": path.display().to_string(),
                "diagnostics": analysis.diagnostics,
            }));
        } else if analysis.is_valid() {
            println!("{}: valid file", path.display());
        } else {
            for diagnostic in &analysis.diagnostics {
                println!("{}", format_diagnostic(path, diagnostic));
            }
        }
    }

    if as_json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }

    info!(files = files.len(), failed, "check finished");
    Ok(if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn format_diagnostic(path: &Path, diagnostic: &Diagnostic) -> String {
    let severity = match diagnostic.severity {
        Severity::Error => "error",
        Severity::Warning => "warning",
    };
    match diagnostic.line {
        Some(line) => format!(
            "{}:{}: {severity}: {}",
            path.display(),
            line + 1,
            diagnostic.message()
        ),
        None => format!("{}: {severity}: {}", path.display(), diagnostic.message()),
    }
}

fn highlight(path: &Path, classes: Option<&Path>) -> Result<ExitCode> {
    let classes = match classes {
        Some(classes_path) => StyleClasses::from_yaml_path(classes_path).with_context(|| {
            format!("failed to load classes from {}", classes_path.display())
        })?,
        None => StyleClasses::default(),
    };

    let text = read_document(path)?;
    let analysis = analyze(&text);

    let mut chars = text.chars();
    for span in &analysis.styles {
        let run: String = chars.by_ref().take(span.length).collect();
        println!(
            "{:>5}  {:<24} {:?}",
            span.length,
            classes.classes_for(span).join(" "),
            run
        );
    }
    eprintln!("{}", analysis.status_line());
    Ok(ExitCode::SUCCESS)
}

fn complete(line: &str, column: usize, accept: Option<&str>) -> Result<ExitCode> {
    let Some(suggestion) = accept else {
        for suggestion in get_suggestions(line, column) {
            println!("{suggestion}");
        }
        return Ok(ExitCode::SUCCESS);
    };

    let plan = resolve_insertion(line, column, suggestion)
        .with_context(|| format!("column {column} is past the end of the line"))?;
    let rewritten = plan
        .apply(line)
        .context("insertion plan does not fit the line")?;
    println!(
        "{}",
        serde_json::to_string_pretty(&json!({
            "plan": plan,
            "line": rewritten,
        }))?
    );
    Ok(ExitCode::SUCCESS)
}
