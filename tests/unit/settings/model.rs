use super::*;

#[test]
fn empty_object_yields_defaults() {
    let s = StarSettings::from_json_str("{}").unwrap();
    assert_eq!(s, StarSettings::default());
    assert_eq!(s.total_stars, 5);
    assert_eq!(s.fill_mode, FillMode::Half);
    assert!(s.correct_precise_fill);
    assert_eq!(s.partial_paint, PartialPaint::Overlay);
}

#[test]
fn unknown_fill_mode_falls_back_to_half() {
    let s = StarSettings::from_json_str(r#"{ "fill_mode": "quarter" }"#).unwrap();
    assert_eq!(s.fill_mode, FillMode::Half);
    let s = StarSettings::from_json_str(r#"{ "fill_mode": "Precise" }"#).unwrap();
    assert_eq!(s.fill_mode, FillMode::Precise);
}

#[test]
fn negative_star_count_means_no_stars() {
    let s = StarSettings::from_json_str(r#"{ "total_stars": -3 }"#).unwrap();
    assert_eq!(s.total_stars, 0);
}

#[test]
fn negative_ratios_clamp_to_zero() {
    let s = StarSettings {
        star_spacing_ratio: -1.0,
        label_gap_ratio: f64::NAN,
        ..StarSettings::default()
    };
    assert_eq!(s.star_spacing(), 0.0);
    assert_eq!(s.label_gap(), 0.0);
}

#[test]
fn spacing_scales_with_star_font() {
    let s = StarSettings {
        star_font: FontSpec::sized(30.0),
        star_spacing_ratio: 0.5,
        label_gap_ratio: 1.0,
        ..StarSettings::default()
    };
    assert_eq!(s.star_spacing(), 15.0);
    assert_eq!(s.label_gap(), 30.0);
}

#[test]
fn min_touch_rating_is_bounded_by_star_count() {
    let s = StarSettings {
        total_stars: 3,
        min_touch_rating: 9.0,
        ..StarSettings::default()
    };
    assert_eq!(s.min_touch_rating(), 3.0);
    let s = StarSettings {
        min_touch_rating: -2.0,
        ..StarSettings::default()
    };
    assert_eq!(s.min_touch_rating(), 0.0);
}

#[test]
fn invalid_font_size_is_rejected() {
    let err = StarSettings::from_json_str(r#"{ "star_font": { "size_px": 0 } }"#).unwrap_err();
    assert!(err.to_string().contains("star_font.size_px"));
}

#[test]
fn blank_family_and_glyph_are_rejected() {
    let s = StarSettings {
        label_font: FontSpec {
            family: Some("  ".to_string()),
            size_px: 12.0,
        },
        ..StarSettings::default()
    };
    assert!(s.validate().is_err());

    let s = StarSettings {
        filled_glyph: String::new(),
        ..StarSettings::default()
    };
    assert!(s.validate().is_err());
}

#[test]
fn bad_colour_is_an_error() {
    assert!(StarSettings::from_json_str(r#"{ "filled_color": "orange" }"#).is_err());
}

#[test]
fn json_round_trips_through_pretty_output() {
    let s = StarSettings {
        fill_mode: FillMode::Precise,
        partial_paint: PartialPaint::Gradient,
        filled_color: Rgba8::new(1, 2, 3, 4),
        ..StarSettings::default()
    };
    let back = StarSettings::from_json_str(&s.to_json_pretty().unwrap()).unwrap();
    assert_eq!(back, s);
}

#[test]
fn oversized_star_count_is_rejected() {
    let s = StarSettings::from_json_str(&format!(
        r#"{{ "total_stars": {MAX_TOTAL_STARS} }}"#
    ))
    .unwrap();
    assert_eq!(s.total_stars, MAX_TOTAL_STARS);

    let err = StarSettings::from_json_str(r#"{ "total_stars": 9223372036854775807 }"#).unwrap_err();
    assert!(matches!(err, StarsError::Validation(_)));
    assert!(err.to_string().contains("total_stars"));
}

#[test]
fn star_count_is_capped_without_validation() {
    let s = StarSettings {
        total_stars: usize::MAX,
        ..StarSettings::default()
    };
    assert!(s.validate().is_err());
    assert_eq!(s.star_count(), MAX_TOTAL_STARS);
}
