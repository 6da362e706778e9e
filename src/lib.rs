//! starfill lays out star-rating indicators such as `★★★½☆ (132)`.
//!
//! A rating becomes a row of positioned drawables that any 2D backend can paint.
//!
//! # Pipeline overview
//!
//! 1. **Fill**: `rating + StarSettings -> Vec<f64>` one fill level per star ([`fill_levels`])
//! 2. **Layout**: fill levels become [`Drawable`]s with frames, measured through a
//!    [`GlyphMeasurer`] ([`layout_stars`], [`measure_bounds`], [`position_label`])
//! 3. **Paint** (optional): `LayoutResult -> Vec<PaintOp>` ([`compile_paint_ops`]), then SVG
//!    ([`write_svg`]) or pixels ([`rasterize_svg`])
//!
//! [`render`] runs steps 1 and 2. Touch input maps back to a rating with
//! [`rating_at_position`] or [`LayoutResult::rating_at`].
//!
//! The fill and layout steps are pure: the same rating, settings and measurer always give
//! the same result, and nothing is cached between calls.
#![forbid(unsafe_code)]

mod fill;
mod foundation;
mod layout;
mod measure;
mod paint;
mod pipeline;
mod settings;
mod touch;

pub use fill::correct::{PRECISE_CORRECTION_RATIO, correct_precise_fill_level};
pub use fill::level::{fill_levels, number_of_filled_stars, star_fill_level};
pub use fill::mode::FillMode;
pub use foundation::core::{Point, Rect, Rgba8, Size, Vec2};
pub use foundation::error::{StarsError, StarsResult};
pub use layout::label::position_label;
pub use layout::sizing::measure_bounds;
pub use layout::stars::{Drawable, PartialStar, PositionedStar, layout_stars};
pub use layout::{LayoutResult, PositionedLabel};
pub use measure::{EmBoxMeasurer, FontSpec, GlyphMeasurer, GlyphMetrics, ParleyMeasurer};
pub use paint::ops::{Paint, PaintOp, compile_paint_ops};
pub use paint::raster::{RasterOptions, RgbaImage, rasterize_svg};
pub use paint::svg::write_svg;
pub use pipeline::{render, render_levels};
pub use settings::model::{MAX_TOTAL_STARS, PartialPaint, StarSettings};
pub use touch::{displayed_rating, precise_rating, rating_at_position};
