//! Text recognition: one page image in, recognised text out.
//!
//! The [`OcrEngine`] trait is the second collaborator seam. Tests inject
//! scripted engines through [`crate::config::RunConfigBuilder::engine`];
//! production uses [`TesseractEngine`], backed by leptess.
//!
//! ## Why PNG?
//!
//! leptess consumes an encoded image buffer, so each page bitmap is
//! PNG-encoded in memory before recognition. PNG is lossless — JPEG
//! artefacts on rendered text measurably degrade tesseract's accuracy at
//! rasterisation DPIs.
//!
//! ## Why a fresh `LepTess` per call?
//!
//! OCR handles are scoped to a single page's iteration: a fresh engine per
//! page means a page that crashes mid-recognition cannot leave dirty state
//! behind for the pages after it. Tesseract initialisation is milliseconds
//! against seconds of recognition, so the per-page cost is noise.

use crate::error::OcrError;
use image::DynamicImage;
use leptess::LepTess;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Recognises the text on one page image.
pub trait OcrEngine: Send + Sync {
    /// Engine identifier used in diagnostics (e.g. `"tesseract"`).
    fn name(&self) -> &'static str;

    /// Recognise `image` using the given ISO 639-2 language code.
    ///
    /// The returned string is the engine's output verbatim; the pipeline
    /// performs no trimming or normalisation on it.
    fn recognize(&self, image: &DynamicImage, language: &str) -> Result<String, OcrError>;
}

/// The production OCR engine, backed by tesseract via leptess.
#[derive(Debug, Clone, Default)]
pub struct TesseractEngine {
    /// Directory containing `*.traineddata` files; `None` uses the
    /// compiled-in default and `TESSDATA_PREFIX`.
    pub tessdata_dir: Option<PathBuf>,
}

impl TesseractEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tessdata_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            tessdata_dir: Some(dir.into()),
        }
    }
}

impl OcrEngine for TesseractEngine {
    fn name(&self) -> &'static str {
        "tesseract"
    }

    fn recognize(&self, image: &DynamicImage, language: &str) -> Result<String, OcrError> {
        let png = encode_png(image)?;

        let datapath = self.tessdata_dir.as_deref().and_then(Path::to_str);
        let mut tess = LepTess::new(datapath, language).map_err(|e| OcrError::Init {
            detail: e.to_string(),
        })?;

        tess.set_image_from_mem(&png)
            .map_err(|e| OcrError::Recognition {
                detail: e.to_string(),
            })?;

        let text = tess.get_utf8_text().map_err(|e| OcrError::Recognition {
            detail: e.to_string(),
        })?;

        debug!("recognised {} bytes of text", text.len());
        Ok(text)
    }
}

/// PNG-encode a page bitmap into an in-memory buffer.
fn encode_png(image: &DynamicImage) -> Result<Vec<u8>, OcrError> {
    let mut buf = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| OcrError::Encode { source: e })?;
    Ok(buf)
}
