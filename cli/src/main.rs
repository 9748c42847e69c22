//! Pulselog CLI
//!
//! Command-line interface for extracting heart-rate readings from log text.
//!
//! # Usage
//!
//! ```bash
//! pulselog
//! pulselog "LOG_01: HeartRate=72bpm; STATUS=OK | LOG_02: HeartRate= 85 ; STATUS=WARN"
//! journalctl -u monitor | pulselog --stdin --format json
//! pulselog --label SpO2 --delimiters ',;' --explain "SpO2=97%, SpO2=--"
//! ```

#![deny(unsafe_code)]

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use extractor::config::{FieldPattern, DEFAULT_LABEL};
use extractor::models::{ExtractionReport, Inspection};
use extractor::Extractor;
use serde::Serialize;
use std::ffi::OsString;
use std::io::{self, Read, Write};
use tracing_subscriber::EnvFilter;

/// Log text scanned when no input is given.
const EXAMPLE_LOG: &str = "LOG_01: HeartRate=72bpm; STATUS=OK | LOG_02: HeartRate= 85 ; STATUS=WARN | LOG_03: HeartRate=error; STATUS=FAIL";

/// Pulselog CLI - Extract heart-rate readings from log text
#[derive(Parser)]
#[command(name = "pulselog")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Any log text exits 0, even with no readings. An invalid --label or --delimiters exits non-zero."
)]
struct Cli {
    /// Log text to scan (a built-in example is used when omitted)
    #[arg(value_parser = clap::value_parser!(OsString))]
    input: Option<OsString>,

    /// Read the log text from standard input
    #[arg(long, conflicts_with = "input")]
    stdin: bool,

    /// Field label to look for (case-insensitive)
    #[arg(short, long, env = "PULSELOG_LABEL", default_value = DEFAULT_LABEL)]
    label: String,

    /// Characters that end a field value
    #[arg(short, long, env = "PULSELOG_DELIMITERS", default_value = ";|")]
    delimiters: String,

    /// Output format
    #[arg(
        short,
        long,
        env = "PULSELOG_FORMAT",
        value_enum,
        default_value_t = Format::Text
    )]
    format: Format,

    /// Also list every field occurrence and its outcome
    #[arg(long)]
    explain: bool,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Human-readable output
    Text,
    /// JSON report
    Json,
}

impl Cli {
    fn pattern(&self) -> Result<FieldPattern> {
        FieldPattern::new(self.label.clone(), self.delimiters.chars().collect::<Vec<_>>())
            .with_context(|| {
                format!(
                    "Invalid field pattern (label {:?}, delimiters {:?})",
                    self.label, self.delimiters
                )
            })
    }

    fn read_input(&self) -> Result<String> {
        if let Some(input) = &self.input {
            return Ok(decode_arg(input.clone()));
        }

        if self.stdin {
            let mut bytes = Vec::new();
            io::stdin()
                .read_to_end(&mut bytes)
                .context("Failed to read standard input")?;
            return Ok(decode_bytes(bytes));
        }

        Ok(EXAMPLE_LOG.to_string())
    }
}

// Input that is not text is scanned as empty rather than refused.
fn decode_arg(input: OsString) -> String {
    input.into_string().unwrap_or_else(|_| {
        tracing::warn!("Input argument is not valid UTF-8, treating it as empty");
        String::new()
    })
}

fn decode_bytes(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Standard input is not valid UTF-8, treating it as empty");
        String::new()
    })
}

fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();
}

/// JSON document written by `--format json`.
#[derive(Serialize)]
struct JsonOutput<'a> {
    input: &'a str,
    pattern: &'a FieldPattern,
    #[serde(flatten)]
    report: ExtractionReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    inspections: Option<Vec<Inspection<'a>>>,
}

fn run(cli: &Cli, extractor: &Extractor, input: &str, out: &mut impl Write) -> Result<()> {
    match cli.format {
        Format::Text => write_text(extractor, input, cli.explain, out),
        Format::Json => write_json(extractor, input, cli.explain, out),
    }
}

fn write_text(
    extractor: &Extractor,
    input: &str,
    explain: bool,
    out: &mut impl Write,
) -> Result<()> {
    let values = extractor.extract(input);

    writeln!(out, "Input string:")?;
    writeln!(out, "{input}")?;
    writeln!(out)?;
    writeln!(out, "Extracted {} values:", extractor.pattern().label())?;
    writeln!(out, "{values:?}")?;

    if explain {
        writeln!(out)?;
        writeln!(out, "Field occurrences:")?;
        for inspection in extractor.inspect(input) {
            writeln!(
                out,
                "  {}..{}  {:?} -> {}",
                inspection.occurrence.start,
                inspection.occurrence.end,
                inspection.raw,
                inspection.outcome
            )?;
        }
    }

    Ok(())
}

fn write_json(
    extractor: &Extractor,
    input: &str,
    explain: bool,
    out: &mut impl Write,
) -> Result<()> {
    let output = JsonOutput {
        input,
        pattern: extractor.pattern(),
        report: extractor.report(input),
        inspections: explain.then(|| extractor.inspect(input)),
    };

    serde_json::to_writer_pretty(&mut *out, &output)?;
    writeln!(out)?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let extractor = Extractor::new(cli.pattern()?);
    let input = cli.read_input()?;

    tracing::debug!(
        label = extractor.pattern().label(),
        bytes = input.len(),
        "Scanning input"
    );

    let stdout = io::stdout();
    run(&cli, &extractor, &input, &mut stdout.lock())
}
