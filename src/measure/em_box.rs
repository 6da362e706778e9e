use crate::{
    foundation::error::{StarsError, StarsResult},
    measure::{FontSpec, GlyphMeasurer, GlyphMetrics},
};

/// Font-free measurer that approximates every glyph with a fixed em-relative box.
///
/// Non-ASCII characters (star glyphs, symbols) advance by `wide_advance_em`, ASCII
/// characters by `narrow_advance_em`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EmBoxMeasurer {
    pub wide_advance_em: f64,
    pub narrow_advance_em: f64,
    pub line_height_em: f64,
    pub ascent_em: f64,
}

impl Default for EmBoxMeasurer {
    fn default() -> Self {
        Self {
            wide_advance_em: 1.0,
            narrow_advance_em: 0.6,
            line_height_em: 1.2,
            ascent_em: 0.95,
        }
    }
}

impl EmBoxMeasurer {
    /// Measurer where every character is exactly `advance_em` wide.
    pub fn uniform(advance_em: f64) -> Self {
        Self {
            wide_advance_em: advance_em,
            narrow_advance_em: advance_em,
            ..Self::default()
        }
    }
}

impl GlyphMeasurer for EmBoxMeasurer {
    fn measure_glyph(&mut self, glyph: &str, font: &FontSpec) -> StarsResult<GlyphMetrics> {
        if !font.size_px.is_finite() || font.size_px < 0.0 {
            return Err(StarsError::measure("font size_px must be finite and >= 0"));
        }
        if glyph.is_empty() {
            return Ok(GlyphMetrics::default());
        }

        let advance_em: f64 = glyph
            .chars()
            .map(|c| {
                if c.is_ascii() {
                    self.narrow_advance_em
                } else {
                    self.wide_advance_em
                }
            })
            .sum();
        Ok(GlyphMetrics {
            width: advance_em * font.size_px,
            height: self.line_height_em * font.size_px,
            ascent: self.ascent_em * font.size_px,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/measure/em_box.rs"]
mod tests;
