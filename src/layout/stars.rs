use crate::{
    foundation::core::{Point, Rect},
    foundation::error::StarsResult,
    measure::{GlyphMeasurer, GlyphMetrics},
    settings::model::StarSettings,
};

/// What a single star slot renders as.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Drawable {
    /// Filled glyph at natural size.
    FullStar,
    /// Empty glyph at natural size.
    EmptyStar,
    /// Empty glyph with a narrower filled glyph on top.
    PartialStar(PartialStar),
}

/// Two overlapping sub-drawables of a partially filled star.
///
/// `empty` is drawn first at its natural size. `filled` is drawn on top, anchored
/// at the left edge, with its width scaled to `fill_level` of the full glyph width.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PartialStar {
    pub fill_level: f64,
    pub empty: GlyphMetrics,
    pub filled: GlyphMetrics,
}

impl Drawable {
    /// Pick the drawable for `fill_level`: at least 1 is full, exactly 0 is empty,
    /// everything else is partial.
    pub fn for_fill_level(fill_level: f64, filled: GlyphMetrics, empty: GlyphMetrics) -> Self {
        if fill_level >= 1.0 {
            return Self::FullStar;
        }
        if fill_level == 0.0 {
            return Self::EmptyStar;
        }
        Self::PartialStar(PartialStar {
            fill_level,
            empty,
            filled: GlyphMetrics {
                width: filled.width * fill_level,
                ..filled
            },
        })
    }

    /// Fill level this drawable represents.
    pub fn fill_level(&self) -> f64 {
        match self {
            Self::FullStar => 1.0,
            Self::EmptyStar => 0.0,
            Self::PartialStar(p) => p.fill_level,
        }
    }
}

/// A star drawable placed in the layout.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PositionedStar {
    /// Star index, 0 is the leftmost.
    pub index: usize,
    pub drawable: Drawable,
    /// Layout cell of the star at its natural, unscaled size.
    pub frame: Rect,
    /// Baseline offset of the glyph occupying `frame`.
    pub ascent: f64,
}

/// Turn fill levels into drawables placed left to right.
///
/// Each star advances the pen by its natural width plus the configured spacing,
/// partial stars included, so star `i` of a uniform glyph of width `w` sits at
/// `i * (w + spacing)`. Partial stars take the filled glyph's box as their cell.
pub fn layout_stars<M: GlyphMeasurer + ?Sized>(
    fill_levels: &[f64],
    settings: &StarSettings,
    measurer: &mut M,
) -> StarsResult<Vec<PositionedStar>> {
    if fill_levels.is_empty() {
        return Ok(Vec::new());
    }

    let filled = measurer.measure_glyph(&settings.filled_glyph, &settings.star_font)?;
    let empty = measurer.measure_glyph(&settings.empty_glyph, &settings.star_font)?;
    let spacing = settings.star_spacing();

    let mut out = Vec::with_capacity(fill_levels.len());
    let mut x = 0.0;
    for (index, &level) in fill_levels.iter().enumerate() {
        let drawable = Drawable::for_fill_level(level, filled, empty);
        let natural = match drawable {
            Drawable::EmptyStar => empty,
            Drawable::FullStar | Drawable::PartialStar(_) => filled,
        };
        out.push(PositionedStar {
            index,
            drawable,
            frame: Rect::from_origin_size(Point::new(x, 0.0), natural.size()),
            ascent: natural.ascent,
        });
        x += natural.width + spacing;
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/stars.rs"]
mod tests;
