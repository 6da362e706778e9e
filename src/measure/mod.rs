//! Glyph and label measurement.
//!
//! The layout engine never touches fonts directly: every natural size comes from a
//! [`GlyphMeasurer`]. [`EmBoxMeasurer`] needs no font data and is deterministic,
//! [`ParleyMeasurer`] shapes text with a real font.

pub(crate) mod em_box;
pub(crate) mod parley_text;

use crate::foundation::{core::Size, error::StarsResult};

/// Font request passed to a [`GlyphMeasurer`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FontSpec {
    /// Family name; `None` picks the measurer's default family.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    /// Font size in pixels.
    pub size_px: f64,
}

impl FontSpec {
    /// Default family at `size_px`.
    pub fn sized(size_px: f64) -> Self {
        Self {
            family: None,
            size_px,
        }
    }
}

/// Natural box of a shaped glyph run.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct GlyphMetrics {
    /// Advance width in pixels.
    pub width: f64,
    /// Line box height in pixels.
    pub height: f64,
    /// Distance from the top of the box to the baseline.
    pub ascent: f64,
}

impl GlyphMetrics {
    /// Width and height as a [`Size`].
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Measures the natural size of a glyph or label string in a given font.
pub trait GlyphMeasurer {
    /// Measure `glyph` (one star glyph or a whole label) set in `font`.
    fn measure_glyph(&mut self, glyph: &str, font: &FontSpec) -> StarsResult<GlyphMetrics>;
}

impl<M: GlyphMeasurer + ?Sized> GlyphMeasurer for &mut M {
    fn measure_glyph(&mut self, glyph: &str, font: &FontSpec) -> StarsResult<GlyphMetrics> {
        (**self).measure_glyph(glyph, font)
    }
}

pub use em_box::EmBoxMeasurer;
pub use parley_text::ParleyMeasurer;
