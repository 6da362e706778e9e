use crate::foundation::math::clamp01;

/// Share of a star glyph's width taken by side bearing on each side.
pub const PRECISE_CORRECTION_RATIO: f64 = 1.0 / 5.0;

/// Remap a precise fill level so that the visible part of a text star glyph
/// tracks the rating.
///
/// Star glyphs such as `★` carry empty space on both sides, so a fill of 0.1
/// would otherwise paint nothing visible. The level is clamped to `[0, 1]` and
/// mapped linearly onto `[r, 1 - r]` with `r = PRECISE_CORRECTION_RATIO`.
pub fn correct_precise_fill_level(fill_level: f64) -> f64 {
    let multiplier = 1.0 - 2.0 * PRECISE_CORRECTION_RATIO;
    multiplier * clamp01(fill_level) + PRECISE_CORRECTION_RATIO
}

#[cfg(test)]
#[path = "../../tests/unit/fill/correct.rs"]
mod tests;
