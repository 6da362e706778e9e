use super::*;

#[test]
fn star_glyph_is_one_em_wide() {
    let mut m = EmBoxMeasurer::default();
    let metrics = m.measure_glyph("★", &FontSpec::sized(20.0)).unwrap();
    assert!((metrics.width - 20.0).abs() < 1e-9);
    assert!((metrics.height - 24.0).abs() < 1e-9);
    assert!((metrics.ascent - 19.0).abs() < 1e-9);
}

#[test]
fn ascii_labels_use_narrow_advance() {
    let mut m = EmBoxMeasurer::default();
    let metrics = m.measure_glyph("(10)", &FontSpec::sized(10.0)).unwrap();
    assert!((metrics.width - 24.0).abs() < 1e-9);
}

#[test]
fn uniform_ignores_character_class() {
    let mut m = EmBoxMeasurer::uniform(0.5);
    let metrics = m.measure_glyph("a★", &FontSpec::sized(10.0)).unwrap();
    assert!((metrics.width - 10.0).abs() < 1e-9);
}

#[test]
fn empty_text_and_bad_sizes() {
    let mut m = EmBoxMeasurer::default();
    assert_eq!(
        m.measure_glyph("", &FontSpec::sized(12.0)).unwrap(),
        GlyphMetrics::default()
    );
    assert!(m.measure_glyph("★", &FontSpec::sized(f64::NAN)).is_err());
}
