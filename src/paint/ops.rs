use crate::{
    foundation::core::{Rect, Rgba8},
    layout::LayoutResult,
    layout::stars::Drawable,
    measure::FontSpec,
    settings::model::{PartialPaint, StarSettings},
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// How a glyph's ink is coloured.
pub enum Paint {
    Solid(Rgba8),
    /// `start` left of `stop` (a fraction of the glyph box width), `end` right of it.
    HardStop { stop: f64, start: Rgba8, end: Rgba8 },
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// One text run to draw. Ops are painted in order, later ops on top.
pub struct PaintOp {
    pub text: String,
    pub font: FontSpec,
    /// Natural box of the run.
    pub frame: Rect,
    /// Absolute y of the baseline.
    pub baseline: f64,
    pub paint: Paint,
    /// Only ink inside this rect is visible.
    pub clip: Option<Rect>,
}

impl PaintOp {
    fn glyph(text: &str, font: &FontSpec, frame: Rect, ascent: f64, paint: Paint) -> Self {
        Self {
            text: text.to_string(),
            font: font.clone(),
            frame,
            baseline: frame.y0 + ascent,
            paint,
            clip: None,
        }
    }
}

/// Compile a layout into paint ops: stars left to right, then the label.
///
/// Partial stars follow [`StarSettings::partial_paint`]: `Overlay` emits the empty
/// glyph and then the filled glyph clipped to the filled width, `Gradient` emits a
/// single filled glyph with a hard colour stop at the fill fraction.
#[tracing::instrument(skip_all, fields(stars = layout.stars.len()))]
pub fn compile_paint_ops(layout: &LayoutResult, settings: &StarSettings) -> Vec<PaintOp> {
    let font = &settings.star_font;
    let mut ops = Vec::with_capacity(layout.stars.len() + 2);

    for star in &layout.stars {
        match star.drawable {
            Drawable::FullStar => ops.push(PaintOp::glyph(
                &settings.filled_glyph,
                font,
                star.frame,
                star.ascent,
                Paint::Solid(settings.filled_color),
            )),
            Drawable::EmptyStar => ops.push(PaintOp::glyph(
                &settings.empty_glyph,
                font,
                star.frame,
                star.ascent,
                Paint::Solid(settings.empty_color),
            )),
            Drawable::PartialStar(p) => match settings.partial_paint {
                PartialPaint::Overlay => {
                    let origin = star.frame.origin();
                    ops.push(PaintOp::glyph(
                        &settings.empty_glyph,
                        font,
                        Rect::from_origin_size(origin, p.empty.size()),
                        p.empty.ascent,
                        Paint::Solid(settings.empty_color),
                    ));
                    let mut filled = PaintOp::glyph(
                        &settings.filled_glyph,
                        font,
                        star.frame,
                        star.ascent,
                        Paint::Solid(settings.filled_color),
                    );
                    filled.clip = Some(Rect::from_origin_size(origin, p.filled.size()));
                    ops.push(filled);
                }
                PartialPaint::Gradient => ops.push(PaintOp::glyph(
                    &settings.filled_glyph,
                    font,
                    star.frame,
                    star.ascent,
                    Paint::HardStop {
                        stop: p.fill_level,
                        start: settings.filled_color,
                        end: settings.empty_color,
                    },
                )),
            },
        }
    }

    if let Some(label) = &layout.label {
        ops.push(PaintOp::glyph(
            &label.text,
            &settings.label_font,
            label.frame,
            label.ascent,
            Paint::Solid(settings.label_color),
        ));
    }
    ops
}

#[cfg(test)]
#[path = "../../tests/unit/paint/ops.rs"]
mod tests;
