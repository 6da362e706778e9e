//! Mapping a horizontal touch position back to a rating.

use crate::{
    fill::level::star_fill_level,
    fill::mode::FillMode,
    foundation::math::clamp_or_lo,
    settings::model::StarSettings,
};

/// Unsnapped rating under `position`.
///
/// Whole stars are counted by the star pitch (`star_width + spacing`); a position
/// inside a star adds the covered fraction, a position in the gap after a star
/// counts that star as full.
pub fn precise_rating(position: f64, total_stars: usize, star_width: f64, spacing: f64) -> f64 {
    if position.is_nan() || position < 0.0 {
        return 0.0;
    }
    let total = total_stars as f64;
    let pitch = star_width + spacing;
    if pitch <= 0.0 || star_width <= 0.0 {
        return total;
    }

    let whole = (position / pitch).floor();
    if whole > total {
        return total;
    }
    let remainder = position - whole * pitch;
    if remainder > star_width {
        whole + 1.0
    } else {
        whole + remainder / star_width
    }
}

/// Snap a precise rating to what `fill_mode` can display, within `[0, total_stars]`.
pub fn displayed_rating(precise: f64, fill_mode: FillMode, total_stars: usize) -> f64 {
    let whole = precise.floor();
    let displayed = whole + star_fill_level(precise - whole, fill_mode, false);
    clamp_or_lo(displayed, 0.0, total_stars as f64)
}

/// Rating selected by a touch at `position`.
///
/// Coarse modes get a nudge before snapping so a touch slightly left of a star's
/// midpoint still selects it: +0.2 for `Half`, +0.45 for `Full`. The result is
/// never below [`StarSettings::min_touch_rating`].
pub fn rating_at_position(
    position: f64,
    settings: &StarSettings,
    star_width: f64,
    spacing: f64,
) -> f64 {
    let mut rating = precise_rating(position, settings.total_stars, star_width, spacing);
    rating += match settings.fill_mode {
        FillMode::Full => 0.45,
        FillMode::Half => 0.2,
        FillMode::Precise => 0.0,
    };
    let rating = displayed_rating(rating, settings.fill_mode, settings.total_stars);
    rating.max(settings.min_touch_rating())
}

#[cfg(test)]
#[path = "../tests/unit/touch/touch.rs"]
mod tests;
