use crate::{
    fill::level::fill_levels,
    foundation::core::Rect,
    foundation::error::StarsResult,
    layout::label::position_label,
    layout::sizing::measure_bounds,
    layout::stars::layout_stars,
    layout::{LayoutResult, PositionedLabel},
    measure::GlyphMeasurer,
    settings::model::StarSettings,
};

/// Fill levels for `rating` under `settings`, without any layout.
///
/// Settings are not validated here; the star count is capped at
/// [`crate::MAX_TOTAL_STARS`].
pub fn render_levels(rating: f64, settings: &StarSettings) -> Vec<f64> {
    fill_levels(
        rating,
        settings.star_count(),
        settings.fill_mode,
        settings.correct_precise_fill,
    )
}

/// Lay out a star rating and its optional label.
///
/// Steps: fill levels, star drawables and positions, star block size, label
/// placement after the block, then the final size over everything.
#[tracing::instrument(skip(settings, measurer), fields(total_stars = settings.total_stars, fill_mode = %settings.fill_mode))]
pub fn render<M: GlyphMeasurer + ?Sized>(
    rating: f64,
    settings: &StarSettings,
    label: Option<&str>,
    measurer: &mut M,
) -> StarsResult<LayoutResult> {
    settings.validate()?;

    let levels = render_levels(rating, settings);
    let stars = layout_stars(&levels, settings, measurer)?;
    let stars_size = measure_bounds(stars.iter().map(|s| s.frame));
    let star_width = measurer
        .measure_glyph(&settings.filled_glyph, &settings.star_font)?
        .width;

    let label = match label {
        Some(text) => {
            let metrics = measurer.measure_glyph(text, &settings.label_font)?;
            let origin = position_label(metrics.size(), stars_size, settings.label_gap());
            Some(PositionedLabel {
                text: text.to_string(),
                frame: Rect::from_origin_size(origin, metrics.size()),
                ascent: metrics.ascent,
            })
        }
        None => None,
    };

    let mut out = LayoutResult {
        stars,
        label,
        size: stars_size,
        star_width,
        star_spacing: settings.star_spacing(),
    };
    out.size = measure_bounds(out.frames());
    tracing::debug!(width = out.size.width, height = out.size.height, "laid out rating");
    Ok(out)
}

#[cfg(test)]
#[path = "../tests/unit/pipeline/pipeline.rs"]
mod tests;
