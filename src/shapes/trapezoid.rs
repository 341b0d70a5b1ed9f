use crate::animation::animatable::Animatable;
use crate::foundation::core::{Point, Rect};
use crate::path::Path;
use crate::shapes::Shape;

/// Trapezoid standing on the bottom edge, its top edge pulled in from both sides.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Trapezoid {
    /// Horizontal inset of each top corner.
    pub inset_amount: f64,
}

impl Trapezoid {
    /// Trapezoid with the given top inset.
    pub fn new(inset_amount: f64) -> Self {
        Self { inset_amount }
    }

    /// Length of the top edge inside `rect`.
    pub fn top_width(&self, rect: Rect) -> f64 {
        rect.width() - 2.0 * self.inset_amount
    }
}

impl Shape for Trapezoid {
    fn path(&self, rect: Rect) -> Path {
        let mut path = Path::new();
        path.move_to(Point::new(rect.x0, rect.y1));
        path.line_to(Point::new(rect.x0 + self.inset_amount, rect.y0));
        path.line_to(Point::new(rect.x1 - self.inset_amount, rect.y0));
        path.line_to(Point::new(rect.x1, rect.y1));
        path.close();
        path
    }
}

impl Animatable for Trapezoid {
    type Data = f64;

    fn animatable_data(&self) -> f64 {
        self.inset_amount
    }

    fn set_animatable_data(&mut self, data: f64) {
        self.inset_amount = data;
    }
}
