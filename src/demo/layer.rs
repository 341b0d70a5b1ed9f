use crate::color::cycle::LinearGradient;
use crate::foundation::core::{Rgba8Premul, Size};
use crate::path::Path;

/// How a layer is painted.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Paint {
    /// One flat color.
    Solid(Rgba8Premul),
    /// Two-stop linear gradient.
    Gradient(LinearGradient),
}

/// Fill or stroke.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Style {
    /// Non-zero fill.
    Fill,
    /// Centered stroke.
    Stroke {
        /// Line width.
        width: f64,
        /// Round caps and joins instead of butt/miter.
        round: bool,
    },
}

/// A path with its paint, ready for a host to draw.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Layer {
    /// Geometry.
    pub path: Path,
    /// Paint source.
    pub paint: Paint,
    /// Fill or stroke.
    pub style: Style,
}

impl Layer {
    /// Filled layer.
    pub fn fill(path: Path, color: Rgba8Premul) -> Self {
        Self {
            path,
            paint: Paint::Solid(color),
            style: Style::Fill,
        }
    }

    /// Stroked layer.
    pub fn stroke(path: Path, paint: Paint, width: f64, round: bool) -> Self {
        Self {
            path,
            paint,
            style: Style::Stroke { width, round },
        }
    }
}

/// Standalone SVG document drawing `layers` in order on a `size` canvas.
pub fn svg_document(size: Size, layers: &[Layer]) -> String {
    let mut defs = String::new();
    let mut body = String::new();

    for (i, layer) in layers.iter().enumerate() {
        if layer.path.is_empty() {
            continue;
        }
        let paint = match layer.paint {
            Paint::Solid(c) => c.to_hex(),
            Paint::Gradient(g) => {
                let id = format!("g{i}");
                defs.push_str(&gradient_def(&id, &g));
                format!("url(#{id})")
            }
        };
        let d = layer.path.to_svg();
        let element = match layer.style {
            Style::Fill => format!(r#"<path d="{d}" fill="{paint}"/>"#),
            Style::Stroke { width, round } => {
                let (cap, join) = if round {
                    ("round", "round")
                } else {
                    ("butt", "miter")
                };
                format!(
                    r#"<path d="{d}" fill="none" stroke="{paint}" stroke-width="{width}" stroke-linecap="{cap}" stroke-linejoin="{join}"/>"#
                )
            }
        };
        body.push_str(&element);
        body.push('\n');
    }

    let mut out = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = size.width,
        h = size.height,
    );
    out.push('\n');
    if !defs.is_empty() {
        out.push_str(&format!("<defs>{defs}</defs>\n"));
    }
    out.push_str(&body);
    out.push_str("</svg>\n");
    out
}

fn gradient_def(id: &str, g: &LinearGradient) -> String {
    format!(
        r#"<linearGradient id="{id}" gradientUnits="userSpaceOnUse" x1="{}" y1="{}" x2="{}" y2="{}"><stop offset="0" stop-color="{}"/><stop offset="1" stop-color="{}"/></linearGradient>"#,
        g.start.x,
        g.start.y,
        g.end.x,
        g.end.y,
        g.stops.0.to_hex(),
        g.stops.1.to_hex(),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/demo/layer.rs"]
mod tests;
