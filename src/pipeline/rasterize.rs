//! PDF rasterisation: turn a document into an ordered sequence of page
//! images via pdfium.
//!
//! The [`Rasterizer`] trait is the seam the rest of the pipeline sees: a
//! path plus a resolution in, page images in document order out, or one
//! failure for the whole document. Tests substitute scripted
//! implementations through [`crate::config::RunConfigBuilder::rasterizer`];
//! production uses [`PdfiumRasterizer`].
//!
//! ## Why convert DPI to pixels?
//!
//! pdfium's render API takes a target size in pixels, while PDF page
//! geometry is expressed in points (1/72 in). Rendering "at 200 DPI"
//! therefore means scaling each page's point width by `dpi / 72`. Doing the
//! arithmetic per page keeps mixed-size documents (an A4 report with a
//! foldout) rendering at a uniform physical resolution.

use crate::error::RasterizeError;
use image::DynamicImage;
use pdfium_render::prelude::*;
use std::path::Path;
use tracing::{debug, info};

/// Produces the ordered page-image sequence for a PDF document.
///
/// Implementations are all-or-nothing: a failure on any page fails the
/// whole document, because a partial page sequence would silently renumber
/// every page after the gap.
pub trait Rasterizer: Send + Sync {
    /// Rasterise every page of `path` at `dpi`, in document order.
    fn rasterize(&self, path: &Path, dpi: u32) -> Result<Vec<DynamicImage>, RasterizeError>;
}

/// The production rasteriser, backed by pdfium.
#[derive(Debug, Default)]
pub struct PdfiumRasterizer;

impl PdfiumRasterizer {
    pub fn new() -> Self {
        Self
    }
}

impl Rasterizer for PdfiumRasterizer {
    fn rasterize(&self, path: &Path, dpi: u32) -> Result<Vec<DynamicImage>, RasterizeError> {
        let pdfium = Pdfium::default();

        let document =
            pdfium
                .load_pdf_from_file(path, None)
                .map_err(|e| RasterizeError::Open {
                    path: path.to_path_buf(),
                    detail: format!("{e:?}"),
                })?;

        let pages = document.pages();
        info!("PDF loaded: {} pages", pages.len());

        let mut images = Vec::with_capacity(pages.len() as usize);

        for (idx, page) in pages.iter().enumerate() {
            let target_width = page_width_pixels(page.width().value, dpi);
            let render_config = PdfRenderConfig::new().set_target_width(target_width);

            let bitmap =
                page.render_with_config(&render_config)
                    .map_err(|e| RasterizeError::Render {
                        page: idx + 1,
                        detail: format!("{e:?}"),
                    })?;

            let image = bitmap.as_image();
            debug!(
                "rendered page {} at {} dpi -> {}x{} px",
                idx + 1,
                dpi,
                image.width(),
                image.height()
            );

            images.push(image);
        }

        Ok(images)
    }
}

/// Scale a page width in points to pixels at the requested resolution.
///
/// Clamped below at 1 so a degenerate zero-width page object cannot ask
/// pdfium for an empty bitmap.
fn page_width_pixels(width_points: f32, dpi: u32) -> i32 {
    ((width_points * dpi as f32) / 72.0).round().max(1.0) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a4_width_at_200_dpi() {
        // A4 is 595 pt wide; 595 * 200 / 72 ≈ 1653 px.
        assert_eq!(page_width_pixels(595.0, 200), 1653);
    }

    #[test]
    fn letter_width_at_72_dpi_is_point_size() {
        // At 72 DPI one point is one pixel.
        assert_eq!(page_width_pixels(612.0, 72), 612);
    }

    #[test]
    fn degenerate_width_clamps_to_one_pixel() {
        assert_eq!(page_width_pixels(0.0, 200), 1);
    }
}
