/// Clamp to `[0, 1]`; NaN maps to 0.
#[inline]
pub(crate) fn clamp01(x: f64) -> f64 {
    if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) }
}

/// Replace NaN/negative/infinite inputs with 0.
#[inline]
pub(crate) fn non_negative(x: f64) -> f64 {
    if x.is_finite() && x > 0.0 { x } else { 0.0 }
}

/// Clamp to `[lo, hi]`; NaN maps to `lo`.
#[inline]
pub(crate) fn clamp_or_lo(x: f64, lo: f64, hi: f64) -> f64 {
    if x.is_nan() { lo } else { x.clamp(lo, hi) }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
