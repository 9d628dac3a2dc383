//! SVG and HTML rendering for ribbonboard.
//!
//! Everything here is pure string generation: the caller decides where the
//! output goes. Geometry comes from the validated band layouts and device
//! placements in `ribbonboard-core`; this crate only applies the pixel
//! scale and writes markup.
//!
//! ```text
//! Ribbon ──► render_ribbon ──► <svg> ─┐
//!                                      ├─► board_html ──► board_page / records_page
//! [RibbonEntry] ──► board_rows ───────┘
//! RibbonCatalog ──────────────────────────► catalog_page
//! ```

mod board;
mod defs;
mod page;
mod svg;
mod text;

pub use board::{BoardLayout, board_html, board_rows};
pub use page::{PersonBoard, board_page, catalog_page, records_page};
pub use svg::{render_ribbon, render_standalone, variants};

use ribbonboard_core::RibbonDims;

/// Pixels per ribbon unit unless configured otherwise.
pub const DEFAULT_SCALE: f64 = 3.0;

/// Rendering errors.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("invalid scale {0}: must be a finite number greater than 0")]
    InvalidScale(f64),
}

/// Pixel scale and ribbon dimensions used for all output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    scale: f64,
    dims: RibbonDims,
}

impl RenderOptions {
    pub fn new(scale: f64) -> Result<Self, RenderError> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(RenderError::InvalidScale(scale));
        }
        Ok(Self {
            scale,
            dims: RibbonDims::STANDARD,
        })
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn dims(&self) -> RibbonDims {
        self.dims
    }

    /// Rendered ribbon width in pixels.
    pub fn pixel_width(&self) -> f64 {
        self.dims.width * self.scale
    }

    /// Rendered ribbon height in pixels.
    pub fn pixel_height(&self) -> f64 {
        self.dims.height * self.scale
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            dims: RibbonDims::STANDARD,
        }
    }
}
