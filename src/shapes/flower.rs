use std::f64::consts::PI;

use crate::animation::animatable::{Animatable, AnimatablePair};
use crate::foundation::core::{Affine, Rect};
use crate::path::Path;
use crate::shapes::Shape;

/// Angular distance between petals.
pub const PETAL_STEP: f64 = PI / 8.0;

/// Petals drawn per flower: one every [`PETAL_STEP`] over `[0, 2π]`, both ends included.
pub const PETAL_COUNT: usize = 17;

/// Rosette of ellipses rotated around the rect center.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Flower {
    /// Horizontal offset of each petal from the center; negative values bleed across it.
    #[serde(default = "default_petal_offset")]
    pub petal_offset: f64,
    /// Petal thickness; negative values extend the petal toward the center instead.
    #[serde(default = "default_petal_width")]
    pub petal_width: f64,
}

fn default_petal_offset() -> f64 {
    -20.0
}

fn default_petal_width() -> f64 {
    100.0
}

impl Default for Flower {
    fn default() -> Self {
        Self {
            petal_offset: default_petal_offset(),
            petal_width: default_petal_width(),
        }
    }
}

impl Shape for Flower {
    fn path(&self, rect: Rect) -> Path {
        let petal = {
            let mut p = Path::new();
            // A negative width flips the petal to the other side of its offset.
            p.add_ellipse(
                Rect::new(
                    self.petal_offset,
                    0.0,
                    self.petal_offset + self.petal_width,
                    rect.width() / 2.0,
                )
                .abs(),
            );
            p
        };
        let center = Affine::translate(rect.center().to_vec2());

        let mut path = Path::new();
        // Integer stepping avoids drift in the closing 2π petal.
        for i in 0..PETAL_COUNT {
            let angle = PETAL_STEP * i as f64;
            path.add_path(&petal.applying(center * Affine::rotate(angle)));
        }
        path
    }
}

impl Animatable for Flower {
    type Data = AnimatablePair<f64, f64>;

    fn animatable_data(&self) -> Self::Data {
        AnimatablePair::new(self.petal_offset, self.petal_width)
    }

    fn set_animatable_data(&mut self, data: Self::Data) {
        self.petal_offset = data.first;
        self.petal_width = data.second;
    }
}
