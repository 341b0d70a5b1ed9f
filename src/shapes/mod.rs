//! Rect-to-path shape generators.
//!
//! Every shape is a pure function of its parameters and the bounding rect it is
//! asked to fill. Zero-sized rects produce degenerate or empty paths, never errors.

pub mod any;
pub mod arc;
pub mod arrow;
pub mod checkerboard;
pub mod circle;
pub mod flower;
pub mod trapezoid;
pub mod triangle;

use kurbo::{Stroke, StrokeOpts};

use crate::foundation::core::{BezPath, Rect};
use crate::path::{Path, TOLERANCE};

/// A shape that describes itself as a path inside a bounding rect.
pub trait Shape {
    /// Generate the path filling `rect`.
    fn path(&self, rect: Rect) -> Path;
}

/// A shape family whose boundary can be pulled inward by a scalar amount.
pub trait InsettableShape: Shape + Sized {
    /// Copy of this shape inset by a further `amount`.
    fn inset(&self, amount: f64) -> Self;

    /// Inset by half of `line_width`, so a stroke of that width stays inside the rect.
    fn stroke_border(&self, line_width: f64) -> Self {
        self.inset(line_width / 2.0)
    }
}

/// Fillable outline of `path` stroked with `style`.
pub fn outline(path: &Path, style: &Stroke) -> BezPath {
    kurbo::stroke(
        path.to_bez_path(),
        style,
        &StrokeOpts::default(),
        TOLERANCE,
    )
}
