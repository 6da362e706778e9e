//! Star strip layout: drawables, positions and overall size.

pub(crate) mod label;
pub(crate) mod sizing;
pub(crate) mod stars;

use crate::{
    foundation::core::Rect,
    foundation::core::Size,
    layout::stars::PositionedStar,
    settings::model::StarSettings,
    touch::rating_at_position,
};

/// Trailing text placed after the stars.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PositionedLabel {
    pub text: String,
    pub frame: Rect,
    /// Baseline offset from `frame.y0`.
    pub ascent: f64,
}

/// Output of [`crate::render`]: every drawable with its frame plus the size that
/// encloses them.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LayoutResult {
    /// Stars in index order, leftmost first.
    pub stars: Vec<PositionedStar>,
    pub label: Option<PositionedLabel>,
    /// Bounding size of stars and label.
    pub size: Size,
    /// Width of a filled star glyph. Touch input uses it as the star pitch
    /// whatever the stars currently show.
    pub star_width: f64,
    /// Gap between stars used for this layout.
    pub star_spacing: f64,
}

impl LayoutResult {
    /// Fill level of each star in order.
    pub fn fill_levels(&self) -> Vec<f64> {
        self.stars.iter().map(|s| s.drawable.fill_level()).collect()
    }

    /// Frames of all drawables, stars first.
    pub fn frames(&self) -> impl Iterator<Item = Rect> + '_ {
        self.stars
            .iter()
            .map(|s| s.frame)
            .chain(self.label.iter().map(|l| l.frame))
    }

    /// Rating a touch at horizontal offset `x` would select.
    pub fn rating_at(&self, x: f64, settings: &StarSettings) -> f64 {
        rating_at_position(x, settings, self.star_width, self.star_spacing)
    }
}
