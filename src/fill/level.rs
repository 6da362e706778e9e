use crate::{
    fill::{correct::correct_precise_fill_level, mode::FillMode},
    foundation::math::{clamp01, clamp_or_lo},
};

/// Clamp a rating into `[0, total_stars]`. NaN counts as no rating.
pub fn number_of_filled_stars(rating: f64, total_stars: usize) -> f64 {
    clamp_or_lo(rating, 0.0, total_stars as f64)
}

/// Fill level of a single star given the rating left over for it.
///
/// `rating_remainder` is the rating minus the index of the star, so values at
/// or above 1 mean the star is full and values at or below 0 mean it is empty.
/// Full mode rounds with [`f64::round`], which sends ties (0.5) up to a full star.
///
/// With `Precise` mode and `correct_precise` set, the clamped value is always
/// passed through [`correct_precise_fill_level`], including exact 0 and 1.
pub fn star_fill_level(rating_remainder: f64, fill_mode: FillMode, correct_precise: bool) -> f64 {
    let raw = clamp01(rating_remainder);
    match fill_mode {
        FillMode::Full => raw.round(),
        FillMode::Half => (raw * 2.0).round() / 2.0,
        FillMode::Precise if correct_precise => correct_precise_fill_level(raw),
        FillMode::Precise => raw,
    }
}

/// Per-star fill levels for `rating`, leftmost star first.
///
/// Always returns exactly `total_stars` values in `[0, 1]`, non-increasing by index.
pub fn fill_levels(
    rating: f64,
    total_stars: usize,
    fill_mode: FillMode,
    correct_precise: bool,
) -> Vec<f64> {
    let mut remainder = number_of_filled_stars(rating, total_stars);
    let mut levels = Vec::with_capacity(total_stars);
    for _ in 0..total_stars {
        levels.push(star_fill_level(remainder, fill_mode, correct_precise));
        remainder -= 1.0;
    }
    levels
}

#[cfg(test)]
#[path = "../../tests/unit/fill/level.rs"]
mod tests;
