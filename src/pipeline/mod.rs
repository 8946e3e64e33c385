//! Pipeline stages for document-to-text recognition.
//!
//! Each submodule implements exactly one transformation step. Keeping
//! stages separate makes each independently testable and lets us swap
//! implementations (e.g. a different rasterisation backend) without
//! touching other stages.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ rasterize ──▶ ocr
//! (path)    (pdfium)      (tesseract)
//! ```
//!
//! 1. [`input`]     — classify the path as PDF or single still image
//! 2. [`rasterize`] — turn a PDF into an ordered sequence of page images;
//!    any failure here is whole-run fatal
//! 3. [`ocr`]       — recognise one page image into text; any failure here
//!    degrades that page to the empty string
//!
//! The stages run strictly in sequence on a single thread. There is no
//! overlap between pages: each page is rendered, recognised, and its result
//! appended before the next page begins.

pub mod input;
pub mod ocr;
pub mod rasterize;
