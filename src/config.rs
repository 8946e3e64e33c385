//! Configuration for a recognition run.
//!
//! All behaviour is controlled through [`RunConfig`], built via its
//! [`RunConfigBuilder`]. Keeping every knob in one struct makes it trivial
//! to share a config between runs and to diff two runs to understand why
//! their outputs differ.
//!
//! The defaults reproduce the canonical pipeline: 200 DPI rasterisation,
//! English recognition, pdfium + tesseract collaborators. The CLI never
//! changes them; the knobs exist for library callers and for tests, which
//! inject mock collaborators through [`RunConfigBuilder::rasterizer`] and
//! [`RunConfigBuilder::engine`].

use crate::error::RunError;
use crate::pipeline::ocr::OcrEngine;
use crate::pipeline::rasterize::Rasterizer;
use crate::progress::RunProgressCallback;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Configuration for [`crate::run`].
///
/// # Example
/// ```rust
/// use doc2text::RunConfig;
///
/// let config = RunConfig::builder()
///     .dpi(200)
///     .language("deu")
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct RunConfig {
    /// Rasterisation resolution in DPI. Range: 72–600. Default: 200.
    ///
    /// 200 DPI is the long-standing sweet spot for tesseract: glyphs are
    /// large enough to segment reliably while page bitmaps stay small
    /// enough that a 100-page document does not exhaust memory.
    pub dpi: u32,

    /// ISO 639-2 language code handed to the OCR engine. Default: `"eng"`.
    pub language: String,

    /// Directory containing tesseract `*.traineddata` files.
    ///
    /// `None` lets the engine fall back to its compiled-in default and the
    /// `TESSDATA_PREFIX` environment variable.
    pub tessdata_dir: Option<PathBuf>,

    /// Pre-constructed rasteriser. Takes precedence over the built-in
    /// pdfium implementation; used by tests to script page sequences.
    pub rasterizer: Option<Arc<dyn Rasterizer>>,

    /// Pre-constructed OCR engine. Takes precedence over the built-in
    /// tesseract implementation; used by tests to script recognition
    /// results and failures.
    pub engine: Option<Arc<dyn OcrEngine>>,

    /// Callback receiving per-page progress events. Default: none.
    pub progress: Option<Arc<dyn RunProgressCallback>>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            dpi: 200,
            language: "eng".to_string(),
            tessdata_dir: None,
            rasterizer: None,
            engine: None,
            progress: None,
        }
    }
}

impl fmt::Debug for RunConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunConfig")
            .field("dpi", &self.dpi)
            .field("language", &self.language)
            .field("tessdata_dir", &self.tessdata_dir)
            .field("rasterizer", &self.rasterizer.as_ref().map(|_| "<dyn Rasterizer>"))
            .field("engine", &self.engine.as_ref().map(|_| "<dyn OcrEngine>"))
            .field("progress", &self.progress.as_ref().map(|_| "<dyn RunProgressCallback>"))
            .finish()
    }
}

impl RunConfig {
    /// Create a new builder for `RunConfig`.
    pub fn builder() -> RunConfigBuilder {
        RunConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`RunConfig`].
#[derive(Debug)]
pub struct RunConfigBuilder {
    config: RunConfig,
}

impl RunConfigBuilder {
    pub fn dpi(mut self, dpi: u32) -> Self {
        self.config.dpi = dpi.clamp(72, 600);
        self
    }

    pub fn language(mut self, lang: impl Into<String>) -> Self {
        self.config.language = lang.into();
        self
    }

    pub fn tessdata_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.tessdata_dir = Some(dir.into());
        self
    }

    pub fn rasterizer(mut self, rasterizer: Arc<dyn Rasterizer>) -> Self {
        self.config.rasterizer = Some(rasterizer);
        self
    }

    pub fn engine(mut self, engine: Arc<dyn OcrEngine>) -> Self {
        self.config.engine = Some(engine);
        self
    }

    pub fn progress(mut self, callback: Arc<dyn RunProgressCallback>) -> Self {
        self.config.progress = Some(callback);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<RunConfig, RunError> {
        let c = &self.config;
        if c.dpi < 72 || c.dpi > 600 {
            return Err(RunError::InvalidConfig(format!(
                "DPI must be 72-600, got {}",
                c.dpi
            )));
        }
        if c.language.is_empty() {
            return Err(RunError::InvalidConfig(
                "language code must not be empty".into(),
            ));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_pipeline_contract() {
        let config = RunConfig::default();
        assert_eq!(config.dpi, 200);
        assert_eq!(config.language, "eng");
        assert!(config.tessdata_dir.is_none());
        assert!(config.rasterizer.is_none());
        assert!(config.engine.is_none());
    }

    #[test]
    fn builder_clamps_dpi() {
        let config = RunConfig::builder().dpi(10).build().unwrap();
        assert_eq!(config.dpi, 72);

        let config = RunConfig::builder().dpi(10_000).build().unwrap();
        assert_eq!(config.dpi, 600);
    }

    #[test]
    fn builder_rejects_empty_language() {
        let err = RunConfig::builder().language("").build().unwrap_err();
        assert!(err.to_string().contains("language"));
    }

    #[test]
    fn builder_sets_language_and_tessdata() {
        let config = RunConfig::builder()
            .language("deu")
            .tessdata_dir("/usr/share/tessdata")
            .build()
            .unwrap();
        assert_eq!(config.language, "deu");
        assert_eq!(
            config.tessdata_dir.as_deref(),
            Some(std::path::Path::new("/usr/share/tessdata"))
        );
    }
}
