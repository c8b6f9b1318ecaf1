#![forbid(unsafe_code)]

//! SVG export of a recorded frame.

use patternlock_core::color::Rgba;
use patternlock_widgets::{DrawList, DrawOp};

/// Render a recorded frame as a standalone SVG document.
#[must_use]
pub fn to_svg(frame: &DrawList, width: i32, height: i32) -> String {
    let mut out = String::with_capacity(128 + frame.len() * 96);
    out.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    ));
    out.push('\n');
    for op in frame.ops() {
        let element = match op {
            DrawOp::Circle {
                center,
                radius,
                color,
            } => format!(
                r#"<circle cx="{}" cy="{}" r="{}"{}/>"#,
                num(center.x),
                num(center.y),
                num(*radius),
                paint("fill", *color)
            ),
            DrawOp::Line {
                segment,
                width,
                color,
            } => format!(
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke-width="{}" stroke-linecap="round"{}/>"#,
                num(segment.start.x),
                num(segment.start.y),
                num(segment.end.x),
                num(segment.end.y),
                num(*width),
                paint("stroke", *color)
            ),
            DrawOp::Triangle { triangle, color } => {
                let points: Vec<String> = triangle
                    .points
                    .iter()
                    .map(|p| format!("{},{}", num(p.x), num(p.y)))
                    .collect();
                format!(
                    r#"<polygon points="{}"{}/>"#,
                    points.join(" "),
                    paint("fill", *color)
                )
            }
        };
        out.push_str("  ");
        out.push_str(&element);
        out.push('\n');
    }
    out.push_str("</svg>\n");
    out
}

/// Content checksum of an SVG document, `blake3:` followed by hex.
#[must_use]
pub fn checksum(svg: &str) -> String {
    format!("blake3:{}", blake3::hash(svg.as_bytes()).to_hex())
}

fn paint(attr: &str, color: Rgba) -> String {
    let mut out = format!(r#" {attr}="{}""#, color.to_rgb_hex());
    if color.a() != 255 {
        out.push_str(&format!(r#" {attr}-opacity="{}""#, num(color.opacity())));
    }
    out
}

/// Shortest decimal with at most two fractional digits.
fn num(value: f32) -> String {
    let fixed = format!("{value:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
