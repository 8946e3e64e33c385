//! Input classification: decide which source produces the page sequence.
//!
//! The decision is made once, from the file extension alone. The pipeline
//! deliberately does not stat the file or sniff magic bytes here — whatever
//! is wrong with the path surfaces as the collaborator's own error, which
//! carries a more useful message than anything we could synthesise up
//! front.

use std::ffi::OsStr;
use std::path::Path;

/// How the input path will be decomposed into pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Rasterise every page of the PDF.
    Pdf,
    /// Load the file as a single one-page image.
    Image,
}

impl InputKind {
    /// Classify a path by its extension, ASCII-case-insensitively.
    ///
    /// `.pdf` (in any casing) selects the PDF branch; everything else,
    /// including paths with no extension at all, is treated as a still
    /// image.
    pub fn classify(path: &Path) -> InputKind {
        match path.extension().and_then(OsStr::to_str) {
            Some(ext) if ext.eq_ignore_ascii_case("pdf") => InputKind::Pdf,
            _ => InputKind::Image,
        }
    }
}
