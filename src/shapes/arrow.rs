use kurbo::{Cap, Join, Stroke};

use crate::animation::animatable::Animatable;
use crate::foundation::core::{Point, Rect};
use crate::path::Path;
use crate::shapes::Shape;

/// Upward arrow of fixed size anchored on the rect center.
///
/// `inset_amount` does not change the geometry; it is the stroke thickness the
/// host draws the outline with (see [`Arrow::stroke_style`]).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Arrow {
    /// Stroke thickness.
    pub inset_amount: f64,
}

impl Arrow {
    /// Half the shaft width.
    pub const SHAFT_HALF_WIDTH: f64 = 20.0;
    /// Half the arrowhead base.
    pub const HEAD_HALF_WIDTH: f64 = 70.0;
    /// Apex height above the center.
    pub const HEAD_HEIGHT: f64 = 100.0;
    /// Shaft length below the center.
    pub const SHAFT_LENGTH: f64 = 200.0;

    /// Arrow stroked with `inset_amount`.
    pub fn new(inset_amount: f64) -> Self {
        Self { inset_amount }
    }

    /// Round-capped, round-joined stroke of width `inset_amount`.
    pub fn stroke_style(&self) -> Stroke {
        Stroke::new(self.inset_amount.max(0.0))
            .with_caps(Cap::Round)
            .with_join(Join::Round)
    }
}

impl Shape for Arrow {
    fn path(&self, rect: Rect) -> Path {
        let c = rect.center();
        let at = |dx: f64, dy: f64| Point::new(c.x + dx, c.y + dy);
        let (shaft, head) = (Self::SHAFT_HALF_WIDTH, Self::HEAD_HALF_WIDTH);

        let mut path = Path::new();
        path.move_to(at(-shaft, 0.0));
        path.line_to(at(-head, 0.0));
        path.line_to(at(0.0, -Self::HEAD_HEIGHT));
        path.line_to(at(head, 0.0));
        path.line_to(at(shaft, 0.0));
        path.line_to(at(shaft, Self::SHAFT_LENGTH));
        path.line_to(at(-shaft, Self::SHAFT_LENGTH));
        path.line_to(at(-shaft, 0.0));
        path.close();
        path
    }
}

impl Animatable for Arrow {
    type Data = f64;

    fn animatable_data(&self) -> f64 {
        self.inset_amount
    }

    fn set_animatable_data(&mut self, data: f64) {
        self.inset_amount = data;
    }
}
