//! CLI binary for doc2text.
//!
//! A thin shim over the library crate: parse the single positional
//! argument, run the pipeline, print exactly one JSON document on stdout,
//! and pick the exit code. All diagnostics go to stderr via tracing and
//! are silent unless `RUST_LOG` asks for them, so stdout stays a clean
//! machine-readable channel.

use anyhow::{Context, Result};
use clap::Parser;
use doc2text::{run, ErrorResult, RunConfig};
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = r#"OUTPUT:
  One JSON document on stdout per run:
    success  [{"page":1,"text":"..."},{"page":2,"text":"..."}]
    failure  {"error":"..."}

  A page whose recognition failed appears with "text":"" — the run still
  succeeds. The failure shape is produced only when no pages could be
  obtained at all (unreadable PDF or image).

EXIT CODES:
  0  normal completion, even if some or all pages recognised as empty
  1  the input could not be decomposed into pages, or stdout write failed

EXAMPLES:
  # OCR a scanned PDF, one result per page
  doc2text scan.pdf

  # OCR a single image
  doc2text page.png

  # Pipe page 2's text through jq
  doc2text scan.pdf | jq -r '.[1].text'

ENVIRONMENT VARIABLES:
  RUST_LOG         stderr diagnostics filter (e.g. doc2text=debug); default: error
  TESSDATA_PREFIX  tesseract language-data directory (read by tesseract itself)
"#;

/// OCR a PDF or image into per-page plain text.
#[derive(Parser, Debug)]
#[command(
    name = "doc2text",
    version,
    about = "OCR a PDF or image into per-page plain text (JSON on stdout)",
    arg_required_else_help = true,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Path to the input document (PDF or raster image).
    input: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_writer(io::stderr)
        .init();

    let config = RunConfig::default();

    let (emitted, code) = match run(&cli.input, &config) {
        Ok(pages) => (emit(&pages), ExitCode::SUCCESS),
        Err(err) => (emit(&ErrorResult::from(&err)), ExitCode::FAILURE),
    };

    if let Err(e) = emitted {
        eprintln!("doc2text: {e:#}");
        return ExitCode::FAILURE;
    }

    code
}

/// Write the output document to stdout, newline-terminated.
fn emit<T: Serialize>(doc: &T) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    serde_json::to_writer(&mut handle, doc).context("failed to serialise output document")?;
    handle
        .write_all(b"\n")
        .context("failed to write output document")?;
    Ok(())
}
