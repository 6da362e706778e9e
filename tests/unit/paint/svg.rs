use super::*;
use crate::{
    foundation::core::{Rect, Rgba8},
    measure::FontSpec,
};

fn op(text: &str, paint: Paint, clip: Option<Rect>) -> PaintOp {
    PaintOp {
        text: text.to_string(),
        font: FontSpec::sized(20.0),
        frame: Rect::new(10.0, 0.0, 30.0, 24.0),
        baseline: 19.0,
        paint,
        clip,
    }
}

#[test]
fn numbers_are_compact() {
    assert_eq!(num(20.0), "20");
    assert_eq!(num(0.5), "0.5");
    assert_eq!(num(-0.0001), "0");
    assert_eq!(num(1.23456), "1.235");
}

#[test]
fn text_is_escaped() {
    assert_eq!(escape_xml("<a & \"b\">"), "&lt;a &amp; &quot;b&quot;&gt;");
}

#[test]
fn solid_op_becomes_text_element() {
    let svg = write_svg(
        &[op("★", Paint::Solid(Rgba8::opaque(255, 0, 0)), None)],
        Size::new(30.0, 24.0),
    );
    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"30\" height=\"24\""));
    assert!(svg.contains("<text x=\"10\" y=\"19\" font-size=\"20\" fill=\"#ff0000\">★</text>"));
    assert!(!svg.contains("<defs>"));
}

#[test]
fn clip_and_gradient_get_definitions() {
    let svg = write_svg(
        &[
            op(
                "★",
                Paint::Solid(Rgba8::new(0, 0, 0, 128)),
                Some(Rect::new(10.0, 0.0, 20.0, 24.0)),
            ),
            op(
                "★",
                Paint::HardStop {
                    stop: 0.25,
                    start: Rgba8::opaque(255, 185, 0),
                    end: Rgba8::opaque(200, 200, 200),
                },
                None,
            ),
        ],
        Size::new(30.0, 24.0),
    );
    assert!(svg.contains("<clipPath id=\"clip0\"><rect x=\"10\" y=\"0\" width=\"10\" height=\"24\"/></clipPath>"));
    assert!(svg.contains("clip-path=\"url(#clip0)\""));
    assert!(svg.contains("fill-opacity=\"0.502\""));
    assert!(svg.contains("<linearGradient id=\"fill1\""));
    assert!(svg.contains("x1=\"10\" y1=\"0\" x2=\"30\" y2=\"0\""));
    assert_eq!(svg.matches("offset=\"0.25\"").count(), 2);
    assert!(svg.contains("fill=\"url(#fill1)\""));
}

#[test]
fn family_is_emitted_when_set() {
    let mut o = op("x", Paint::Solid(Rgba8::opaque(0, 0, 0)), None);
    o.font.family = Some("Noto Sans".to_string());
    let svg = write_svg(&[o], Size::new(30.0, 24.0));
    assert!(svg.contains("font-family=\"Noto Sans\""));
}

#[test]
fn empty_document_keeps_a_unit_canvas() {
    let svg = write_svg(&[], Size::ZERO);
    assert!(svg.starts_with(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"1\" height=\"1\" viewBox=\"0 0 1 1\">"
    ));
    assert!(!svg.contains("<text"));
}
