use crate::foundation::core::{Rect, Size};

/// Bounding size from the origin: the furthest right edge and the furthest
/// bottom edge over `frames`. Frames with independent vertical offsets are
/// accounted for by their bottom edge, not by summing heights.
pub fn measure_bounds<I>(frames: I) -> Size
where
    I: IntoIterator<Item = Rect>,
{
    frames.into_iter().fold(Size::ZERO, |acc, r| {
        Size::new(acc.width.max(r.x1), acc.height.max(r.y1))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/layout/sizing.rs"]
mod tests;
