use super::*;
use crate::{fill::level::fill_levels, fill::mode::FillMode, measure::EmBoxMeasurer};

fn settings() -> StarSettings {
    StarSettings {
        star_font: crate::measure::FontSpec::sized(20.0),
        star_spacing_ratio: 0.25,
        ..StarSettings::default()
    }
}

#[test]
fn positions_ignore_fill_level() {
    let s = settings();
    let mut m = EmBoxMeasurer::default();
    for levels in [
        vec![1.0, 1.0, 1.0, 0.5, 0.0],
        vec![0.0; 5],
        vec![0.3, 0.3, 0.3, 0.3, 0.3],
    ] {
        let stars = layout_stars(&levels, &s, &mut m).unwrap();
        assert_eq!(stars.len(), 5);
        for star in &stars {
            assert_eq!(star.frame.x0, star.index as f64 * (20.0 + 5.0));
            assert_eq!(star.frame.y0, 0.0);
            assert_eq!(star.frame.width(), 20.0);
        }
    }
}

#[test]
fn drawables_follow_thresholds() {
    let s = settings();
    let mut m = EmBoxMeasurer::default();
    let stars = layout_stars(&[1.0, 0.5, 0.0], &s, &mut m).unwrap();
    assert_eq!(stars[0].drawable, Drawable::FullStar);
    assert_eq!(stars[2].drawable, Drawable::EmptyStar);
    let Drawable::PartialStar(p) = stars[1].drawable else {
        panic!("expected partial star, got {:?}", stars[1].drawable);
    };
    assert_eq!(p.fill_level, 0.5);
    assert_eq!(p.filled.width, 10.0);
    assert_eq!(p.empty.width, 20.0);
    assert_eq!(p.filled.height, p.empty.height);
}

#[test]
fn corrected_precise_levels_are_all_partial() {
    let s = settings();
    let mut m = EmBoxMeasurer::default();
    let levels = fill_levels(5.0, 5, FillMode::Precise, true);
    let stars = layout_stars(&levels, &s, &mut m).unwrap();
    assert!(
        stars
            .iter()
            .all(|st| matches!(st.drawable, Drawable::PartialStar(_)))
    );
}

#[test]
fn empty_glyph_may_have_its_own_width() {
    struct Widths;
    impl GlyphMeasurer for Widths {
        fn measure_glyph(
            &mut self,
            glyph: &str,
            _font: &crate::measure::FontSpec,
        ) -> StarsResult<GlyphMetrics> {
            let width = if glyph == "★" { 10.0 } else { 14.0 };
            Ok(GlyphMetrics {
                width,
                height: 12.0,
                ascent: 10.0,
            })
        }
    }

    let s = StarSettings {
        star_spacing_ratio: 0.0,
        ..StarSettings::default()
    };
    let stars = layout_stars(&[1.0, 0.5, 0.0, 0.0], &s, &mut Widths).unwrap();
    let xs: Vec<f64> = stars.iter().map(|st| st.frame.x0).collect();
    assert_eq!(xs, vec![0.0, 10.0, 20.0, 34.0]);
}

#[test]
fn no_levels_means_no_measuring() {
    struct Failing;
    impl GlyphMeasurer for Failing {
        fn measure_glyph(
            &mut self,
            _glyph: &str,
            _font: &crate::measure::FontSpec,
        ) -> StarsResult<GlyphMetrics> {
            Err(crate::foundation::error::StarsError::measure("unreachable"))
        }
    }
    assert!(layout_stars(&[], &settings(), &mut Failing).unwrap().is_empty());
    assert!(layout_stars(&[1.0], &settings(), &mut Failing).is_err());
}

#[test]
fn drawable_reports_fill_level() {
    let g = GlyphMetrics {
        width: 10.0,
        height: 10.0,
        ascent: 8.0,
    };
    assert_eq!(Drawable::for_fill_level(1.3, g, g).fill_level(), 1.0);
    assert_eq!(Drawable::for_fill_level(0.0, g, g).fill_level(), 0.0);
    assert_eq!(Drawable::for_fill_level(0.25, g, g).fill_level(), 0.25);
}
