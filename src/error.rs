//! Error types for the doc2text library.
//!
//! Two distinct categories reflect two distinct failure modes:
//!
//! * [`RunError`] — **Fatal**: no page sequence could be obtained at all
//!   (the PDF could not be rasterised, the image file could not be opened).
//!   Returned as `Err(RunError)` from [`crate::run`]; the CLI turns it into
//!   a single `{"error": ...}` document and a non-zero exit code.
//!
//! * [`OcrError`] — **Per-page**: a page image exists but text recognition
//!   failed. Never propagated upward; the page's text degrades to the empty
//!   string and the run continues with the next page.
//!
//! [`RasterizeError`] sits between the two: it is the error type of the
//! [`Rasterizer`](crate::pipeline::rasterize::Rasterizer) seam, and any
//! occurrence is promoted to the fatal [`RunError::Rasterize`] — a document
//! that cannot be decomposed into pages has nothing left to recognise.

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by [`crate::run`].
///
/// Page-level recognition failures use [`OcrError`] and degrade to empty
/// text rather than appearing here.
#[derive(Debug, Error)]
pub enum RunError {
    /// The PDF rasteriser collaborator failed; no pages were produced.
    #[error("failed to rasterise '{path}': {source}")]
    Rasterize {
        path: PathBuf,
        #[source]
        source: RasterizeError,
    },

    /// The single-image input could not be opened or decoded.
    #[error("failed to open image '{path}': {source}")]
    ImageOpen {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Builder validation failed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Errors produced by a [`Rasterizer`](crate::pipeline::rasterize::Rasterizer).
///
/// Always whole-run fatal: the pipeline treats the rasteriser as an
/// all-or-nothing source of the page sequence.
#[derive(Debug, Error)]
pub enum RasterizeError {
    /// The document could not be opened or parsed.
    #[error("could not open PDF '{path}': {detail}")]
    Open { path: PathBuf, detail: String },

    /// A page was located but could not be rendered to pixels.
    #[error("could not render page {page}: {detail}")]
    Render { page: usize, detail: String },
}

/// Errors produced by an [`OcrEngine`](crate::pipeline::ocr::OcrEngine).
///
/// Always recoverable: the affected page's text becomes `""` and no other
/// page is disturbed.
#[derive(Debug, Error)]
pub enum OcrError {
    /// The engine could not be initialised (missing language data, bad
    /// tessdata path).
    #[error("OCR engine initialisation failed: {detail}")]
    Init { detail: String },

    /// The page image could not be encoded into the format the engine
    /// consumes.
    #[error("failed to encode page image for recognition: {source}")]
    Encode {
        #[source]
        source: image::ImageError,
    },

    /// The engine accepted the image but recognition itself failed.
    #[error("text recognition failed: {detail}")]
    Recognition { detail: String },
}
