use crate::animation::animatable::{Animatable, AnimatablePair};
use crate::foundation::core::{Angle, Rect};
use crate::path::Path;
use crate::shapes::{InsettableShape, Shape};

/// Caller angles put zero at twelve o'clock; path angles put it at three o'clock.
const ROTATION_ADJUSTMENT: Angle = Angle::radians(std::f64::consts::FRAC_PI_2);

/// Circular arc centered in its rect, with angles measured from the top.
///
/// `clockwise` is the visual sweep direction on a y-down canvas.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Arc {
    /// Start angle, zero pointing up.
    pub start_angle: Angle,
    /// End angle, zero pointing up.
    pub end_angle: Angle,
    /// Visual sweep direction.
    pub clockwise: bool,
    /// Accumulated inset; the radius shrinks by this much.
    #[serde(default)]
    pub inset_amount: f64,
}

impl Arc {
    /// Arc with no inset.
    pub fn new(start_angle: Angle, end_angle: Angle, clockwise: bool) -> Self {
        Self {
            start_angle,
            end_angle,
            clockwise,
            inset_amount: 0.0,
        }
    }

    /// Radius used inside `rect`: half the width minus the inset.
    pub fn radius_in(&self, rect: Rect) -> f64 {
        rect.width() / 2.0 - self.inset_amount
    }
}

impl Shape for Arc {
    fn path(&self, rect: Rect) -> Path {
        let mut path = Path::new();
        path.add_arc(
            rect.center(),
            self.radius_in(rect),
            self.start_angle - ROTATION_ADJUSTMENT,
            self.end_angle - ROTATION_ADJUSTMENT,
            // Increasing path angles turn clockwise on screen; the path flag spells that `false`.
            !self.clockwise,
        );
        path
    }
}

impl InsettableShape for Arc {
    fn inset(&self, amount: f64) -> Self {
        let mut arc = *self;
        arc.inset_amount += amount;
        arc
    }
}

impl Animatable for Arc {
    type Data = AnimatablePair<Angle, Angle>;

    fn animatable_data(&self) -> Self::Data {
        AnimatablePair::new(self.start_angle, self.end_angle)
    }

    fn set_animatable_data(&mut self, data: Self::Data) {
        self.start_angle = data.first;
        self.end_angle = data.second;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/arc.rs"]
mod tests;
