//! Concentric rings whose hues rotate together.

use crate::animation::animatable::Animatable;
use crate::color::hsb::Hsb;
use crate::foundation::core::{Point, Rect};
use crate::path::Path;
use crate::shapes::{InsettableShape, Shape, circle::Circle};

/// Stroke width of every ring.
pub const RING_LINE_WIDTH: f64 = 2.0;

/// Hue for ring `index` of `steps`, rotated by `amount`, at full saturation.
///
/// `hue = (index / steps + amount) mod 1`. With `steps == 0` the index term is dropped.
pub fn cycle_color(index: usize, steps: usize, amount: f64, brightness: f64) -> Hsb {
    let base = if steps == 0 {
        0.0
    } else {
        index as f64 / steps as f64
    };
    Hsb::new((base + amount).rem_euclid(1.0), 1.0, brightness)
}

/// Two-stop gradient along the segment `start -> end`.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LinearGradient {
    /// Where `stops.0` applies.
    pub start: Point,
    /// Where `stops.1` applies.
    pub end: Point,
    /// Colors at `start` and `end`.
    pub stops: (Hsb, Hsb),
}

/// One stroked ring of a [`ColorCyclingCircle`].
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GradientRing {
    /// Ring index, `0` is outermost.
    pub index: usize,
    /// Circle path to stroke.
    pub path: Path,
    /// Stroke width.
    pub line_width: f64,
    /// Vertical stroke paint.
    pub gradient: LinearGradient,
}

/// `steps` concentric circles, each inset by its index and stroked with a top-to-bottom
/// gradient from bright to half-bright of its cycled hue.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ColorCyclingCircle {
    /// Global hue rotation, the animated value.
    pub amount: f64,
    /// Number of rings.
    pub steps: usize,
}

impl Default for ColorCyclingCircle {
    fn default() -> Self {
        Self {
            amount: 0.0,
            steps: 100,
        }
    }
}

impl ColorCyclingCircle {
    /// Hue of ring `index` at `brightness`.
    pub fn color(&self, index: usize, brightness: f64) -> Hsb {
        cycle_color(index, self.steps, self.amount, brightness)
    }

    /// Rings from the outside in; rings inset past the center have empty paths.
    pub fn rings(&self, rect: Rect) -> Vec<GradientRing> {
        let top = Point::new(rect.center().x, rect.y0);
        let bottom = Point::new(rect.center().x, rect.y1);
        (0..self.steps)
            .map(|index| GradientRing {
                index,
                path: Circle::default()
                    .inset(index as f64)
                    .stroke_border(RING_LINE_WIDTH)
                    .path(rect),
                line_width: RING_LINE_WIDTH,
                gradient: LinearGradient {
                    start: top,
                    end: bottom,
                    stops: (self.color(index, 1.0), self.color(index, 0.5)),
                },
            })
            .collect()
    }
}

impl Animatable for ColorCyclingCircle {
    type Data = f64;

    fn animatable_data(&self) -> f64 {
        self.amount
    }

    fn set_animatable_data(&mut self, data: f64) {
        self.amount = data;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/cycle.rs"]
mod tests;
