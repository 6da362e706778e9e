use std::fmt::Write as _;

use crate::{
    foundation::core::Size,
    paint::ops::{Paint, PaintOp},
};

/// Serialize paint ops into a standalone SVG document of `size`.
///
/// Each clipped op gets its own `clipPath` and each hard-stop paint its own
/// `linearGradient` spanning the op's frame in user space. The document is at
/// least 1x1 so an empty layout still parses as an SVG canvas.
pub fn write_svg(ops: &[PaintOp], size: Size) -> String {
    let mut defs = String::new();
    let mut body = String::new();

    for (idx, op) in ops.iter().enumerate() {
        let mut attrs = String::new();

        let fill = match op.paint {
            Paint::Solid(c) => {
                let _ = write!(attrs, " fill=\"{}\"", c.to_hex_rgb());
                if c.a != 255 {
                    let _ = write!(attrs, " fill-opacity=\"{}\"", num(c.opacity()));
                }
                None
            }
            Paint::HardStop { stop, start, end } => Some((stop, start, end)),
        };
        if let Some((stop, start, end)) = fill {
            let id = format!("fill{idx}");
            let _ = write!(
                defs,
                "<linearGradient id=\"{id}\" gradientUnits=\"userSpaceOnUse\" x1=\"{}\" y1=\"0\" x2=\"{}\" y2=\"0\">\
                 <stop offset=\"{stop}\" stop-color=\"{}\" stop-opacity=\"{}\"/>\
                 <stop offset=\"{stop}\" stop-color=\"{}\" stop-opacity=\"{}\"/>\
                 </linearGradient>",
                num(op.frame.x0),
                num(op.frame.x1),
                start.to_hex_rgb(),
                num(start.opacity()),
                end.to_hex_rgb(),
                num(end.opacity()),
                stop = num(stop),
            );
            let _ = write!(attrs, " fill=\"url(#{id})\"");
        }

        if let Some(clip) = op.clip {
            let id = format!("clip{idx}");
            let _ = write!(
                defs,
                "<clipPath id=\"{id}\"><rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"/></clipPath>",
                num(clip.x0),
                num(clip.y0),
                num(clip.width()),
                num(clip.height()),
            );
            let _ = write!(attrs, " clip-path=\"url(#{id})\"");
        }

        if let Some(family) = &op.font.family {
            let _ = write!(attrs, " font-family=\"{}\"", escape_xml(family));
        }

        let _ = writeln!(
            body,
            "  <text x=\"{}\" y=\"{}\" font-size=\"{}\"{attrs}>{}</text>",
            num(op.frame.x0),
            num(op.baseline),
            num(op.font.size_px),
            escape_xml(&op.text),
        );
    }

    let (w, h) = (num(size.width.max(1.0)), num(size.height.max(1.0)));
    let mut out = String::new();
    let _ = writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">"
    );
    if !defs.is_empty() {
        let _ = writeln!(out, "  <defs>{defs}</defs>");
    }
    out.push_str(&body);
    out.push_str("</svg>\n");
    out
}

fn num(v: f64) -> String {
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/paint/svg.rs"]
mod tests;
