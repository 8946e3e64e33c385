//! # doc2text
//!
//! Convert a document — PDF or raster image — into per-page plain text by
//! running an OCR engine over every page, and report the result as one
//! structured JSON document.
//!
//! ## Why this crate?
//!
//! Scanned documents carry no text layer, so text-layer extractors return
//! nothing for exactly the documents people most want to search. This
//! crate rasterises each PDF page (or takes the input image as-is) and
//! hands the pixels to tesseract, collecting one result per page. A page
//! that fails to recognise degrades to empty text instead of sinking the
//! whole batch; only an input that yields no pages at all fails the run.
//!
//! ## Pipeline Overview
//!
//! ```text
//! PDF / image
//!  │
//!  ├─ 1. Input      classify by extension (.pdf vs. still image)
//!  ├─ 2. Rasterize  render pages via pdfium at 200 DPI (PDF only)
//!  ├─ 3. Recognise  tesseract per page, in order, failures contained
//!  └─ 4. Output     [{"page":1,"text":...},...] or {"error":...}
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use doc2text::{run, RunConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pages = run("scan.pdf", &RunConfig::default())?;
//!     for page in &pages {
//!         println!("page {}: {} bytes of text", page.page, page.text.len());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `doc2text` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! doc2text = { version = "0.3", default-features = false }
//! ```
//!
//! ## Collaborator seams
//!
//! Rasterisation and recognition sit behind the [`Rasterizer`] and
//! [`OcrEngine`] traits. The defaults (pdfium, tesseract) can be replaced
//! through [`RunConfig`] — tests use this to script page sequences and
//! recognition failures without either native library installed.

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod progress;
pub mod run;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{RunConfig, RunConfigBuilder};
pub use error::{OcrError, RasterizeError, RunError};
pub use output::{ErrorResult, PageResult};
pub use pipeline::input::InputKind;
pub use pipeline::ocr::{OcrEngine, TesseractEngine};
pub use pipeline::rasterize::{PdfiumRasterizer, Rasterizer};
pub use progress::{NoopProgressCallback, ProgressCallback, RunProgressCallback};
pub use run::run;
