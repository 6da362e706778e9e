use crate::foundation::core::{Point, Size};

/// Origin of a label placed after the star block: `gap` to the right of it and
/// vertically centred on it. A label taller than the stars gets a negative `y`.
pub fn position_label(label: Size, stars: Size, gap: f64) -> Point {
    Point::new(stars.width + gap, (stars.height - label.height) / 2.0)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/label.rs"]
mod tests;
