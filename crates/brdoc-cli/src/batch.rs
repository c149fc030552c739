//! # Batch Validation
//!
//! `brdoc batch --kind cpf|cnpj <FILE>` validates one candidate per line.
//! Blank lines and lines starting with `#` are skipped. A CPF line may end
//! with `,STATE` to cross-check the issuing region. `-` reads standard input.
//!
//! A line whose request is malformed, such as one naming an unknown state,
//! is reported as an error and does not stop the batch.

use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use brdoc_core::IdentifierKind;
use brdoc_validator::{default_registry, ValidationOptions};

use crate::config::{NormalizeFlags, OutputFormat, Settings};
use crate::exit_code;
use crate::output::Verdict;

/// Arguments for `brdoc batch`.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Identifier kind of every line in the file.
    #[arg(long)]
    pub kind: IdentifierKind,

    /// Input file, or `-` for standard input.
    pub file: PathBuf,

    #[command(flatten)]
    pub flags: NormalizeFlags,
}

/// One non-skipped input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchEntry {
    /// 1-based line number in the input.
    pub line: usize,
    /// Candidate value.
    pub value: String,
    /// Optional auxiliary value after the comma.
    pub state: Option<String>,
}

/// Result for one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchLine {
    /// 1-based line number in the input.
    pub line: usize,
    /// The verdict, absent when the request was malformed.
    #[serde(flatten)]
    pub verdict: Option<Verdict>,
    /// Why the request was malformed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Counts over a whole batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    /// Entries checked.
    pub total: usize,
    /// Entries that validated.
    pub valid: usize,
    /// Entries that did not validate.
    pub invalid: usize,
    /// Entries rejected as malformed requests.
    pub errors: usize,
}

impl BatchSummary {
    /// Process exit status for this batch.
    pub fn exit_code(&self) -> u8 {
        if self.errors > 0 {
            exit_code::USAGE
        } else if self.invalid > 0 {
            exit_code::INVALID
        } else {
            exit_code::VALID
        }
    }
}

/// A complete batch result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    /// Per-line results in input order.
    pub results: Vec<BatchLine>,
    /// Totals.
    pub summary: BatchSummary,
}

/// Parse one input line; `None` for blank and comment lines.
pub fn parse_line(kind: IdentifierKind, line: usize, text: &str) -> Option<BatchEntry> {
    let text = text.trim();
    if text.is_empty() || text.starts_with('#') {
        return None;
    }

    let (value, state) = match kind {
        IdentifierKind::Cpf => match text.split_once(',') {
            Some((value, state)) => (value.trim(), Some(state.trim().to_string())),
            None => (text, None),
        },
        IdentifierKind::Cnpj => (text, None),
    };

    Some(BatchEntry {
        line,
        value: value.to_string(),
        state,
    })
}

/// Validate every candidate read from `reader`.
pub fn validate_lines<R: BufRead>(
    kind: IdentifierKind,
    reader: R,
    options: ValidationOptions,
) -> Result<BatchReport> {
    let registry = default_registry();
    let mut results = Vec::new();
    let mut summary = BatchSummary::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read input line {}", index + 1))?;
        let Some(entry) = parse_line(kind, index + 1, &line) else {
            continue;
        };

        summary.total += 1;
        let outcome = registry.validate(kind, &entry.value, entry.state.as_deref(), options);
        let result = match outcome {
            Ok(valid) => {
                if valid {
                    summary.valid += 1;
                } else {
                    summary.invalid += 1;
                }
                BatchLine {
                    line: entry.line,
                    verdict: Some(Verdict {
                        kind,
                        value: entry.value,
                        state: entry.state.filter(|s| !s.is_empty()),
                        valid,
                    }),
                    error: None,
                }
            }
            Err(e) => {
                tracing::debug!(line = entry.line, error = %e, "malformed batch entry");
                summary.errors += 1;
                BatchLine {
                    line: entry.line,
                    verdict: None,
                    error: Some(e.to_string()),
                }
            }
        };
        results.push(result);
    }

    tracing::info!(
        %kind,
        total = summary.total,
        valid = summary.valid,
        invalid = summary.invalid,
        errors = summary.errors,
        "batch complete"
    );

    Ok(BatchReport { results, summary })
}

fn validate_path(
    kind: IdentifierKind,
    path: &Path,
    options: ValidationOptions,
) -> Result<BatchReport> {
    if path == Path::new("-") {
        return validate_lines(kind, std::io::stdin().lock(), options);
    }
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open batch input: {}", path.display()))?;
    validate_lines(kind, BufReader::new(file), options)
}

/// Render a report in `format`.
pub fn render_report(report: &BatchReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Text => {
            let mut out = String::new();
            for line in &report.results {
                match (&line.verdict, &line.error) {
                    (Some(verdict), _) => {
                        out.push_str(&format!("{:>5}  {}\n", line.line, verdict.to_text()))
                    }
                    (None, Some(error)) => {
                        out.push_str(&format!("{:>5}  error: {}\n", line.line, error))
                    }
                    (None, None) => {}
                }
            }
            let s = &report.summary;
            out.push_str(&format!(
                "checked {}: {} valid, {} invalid, {} errors",
                s.total, s.valid, s.invalid, s.errors
            ));
            Ok(out)
        }
    }
}

/// Execute `brdoc batch`.
pub fn run_batch(args: &BatchArgs, settings: &Settings) -> Result<u8> {
    let options = args.flags.apply(settings.defaults);
    let report = validate_path(args.kind, &args.file, options)?;
    println!("{}", render_report(&report, settings.format)?);
    Ok(report.summary.exit_code())
}
