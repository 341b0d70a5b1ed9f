use crate::animation::animatable::Animatable;
use crate::foundation::core::Rect;
use crate::path::Path;
use crate::shapes::{InsettableShape, Shape};

/// Largest circle centered in the rect, shrunk by `inset_amount`.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Circle {
    /// Accumulated inset.
    #[serde(default)]
    pub inset_amount: f64,
}

impl Circle {
    /// Radius inside `rect`; may be negative once the inset passes the center.
    pub fn radius_in(&self, rect: Rect) -> f64 {
        rect.width().min(rect.height()) / 2.0 - self.inset_amount
    }
}

impl Shape for Circle {
    fn path(&self, rect: Rect) -> Path {
        let mut path = Path::new();
        let r = self.radius_in(rect);
        if r > 0.0 {
            path.add_ellipse(Rect::from_center_size(rect.center(), (2.0 * r, 2.0 * r)));
        }
        path
    }
}

impl InsettableShape for Circle {
    fn inset(&self, amount: f64) -> Self {
        Self {
            inset_amount: self.inset_amount + amount,
        }
    }
}

impl Animatable for Circle {
    type Data = f64;

    fn animatable_data(&self) -> f64 {
        self.inset_amount
    }

    fn set_animatable_data(&mut self, data: f64) {
        self.inset_amount = data;
    }
}
