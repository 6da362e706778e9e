use std::path::Path;

use anyhow::Context;

use crate::{
    foundation::error::{StarsError, StarsResult},
    measure::{FontSpec, GlyphMeasurer, GlyphMetrics},
};

/// Measures glyphs by shaping them with Parley against a registered font.
pub struct ParleyMeasurer {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<()>,
    default_family: String,
}

impl std::fmt::Debug for ParleyMeasurer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParleyMeasurer")
            .field("default_family", &self.default_family)
            .finish_non_exhaustive()
    }
}

impl ParleyMeasurer {
    /// Register `font_bytes` and use its first family as the default.
    pub fn from_font_bytes(font_bytes: &[u8]) -> StarsResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| StarsError::measure("no font families registered from font bytes"))?;
        let default_family = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| StarsError::measure("registered font family has no name"))?
            .to_string();

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            default_family,
        })
    }

    /// Read a font file and register it, see [`ParleyMeasurer::from_font_bytes`].
    pub fn from_font_file(path: impl AsRef<Path>) -> StarsResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .with_context(|| format!("read font file '{}'", path.display()))?;
        Self::from_font_bytes(&bytes)
    }

    /// Family used when a [`FontSpec`] leaves `family` unset.
    pub fn default_family(&self) -> &str {
        &self.default_family
    }
}

impl GlyphMeasurer for ParleyMeasurer {
    fn measure_glyph(&mut self, glyph: &str, font: &FontSpec) -> StarsResult<GlyphMetrics> {
        if !font.size_px.is_finite() || font.size_px <= 0.0 {
            return Err(StarsError::measure("font size_px must be finite and > 0"));
        }
        if glyph.is_empty() {
            return Ok(GlyphMetrics::default());
        }

        let family = font
            .family
            .clone()
            .unwrap_or_else(|| self.default_family.clone());
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, glyph, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(font.size_px as f32));

        let mut layout: parley::Layout<()> = builder.build(glyph);
        layout.break_all_lines(None);

        let mut metrics = GlyphMetrics::default();
        for (idx, line) in layout.lines().enumerate() {
            let m = line.metrics();
            if idx == 0 {
                metrics.ascent = f64::from(m.ascent);
            }
            metrics.width = metrics.width.max(f64::from(m.advance));
            metrics.height += f64::from(m.ascent + m.descent + m.leading);
        }
        Ok(metrics)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/measure/parley_text.rs"]
mod tests;
