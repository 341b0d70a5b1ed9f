use std::str::FromStr;

use crate::animation::animatable::{Animatable, Lerp};
use crate::foundation::core::Rect;
use crate::foundation::error::{DrawingError, DrawingResult};
use crate::path::Path;
use crate::shapes::{
    Shape, arc::Arc, arrow::Arrow, checkerboard::CheckerBoard, circle::Circle, flower::Flower,
    trapezoid::Trapezoid, triangle::Triangle,
};

/// Any shape generator, tagged by `kind` when serialized.
///
/// ```json
/// { "kind": "trapezoid", "inset_amount": 50.0 }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnyShape {
    /// See [`Triangle`].
    Triangle(Triangle),
    /// See [`Arc`].
    Arc(Arc),
    /// See [`Flower`].
    Flower(Flower),
    /// See [`Trapezoid`].
    Trapezoid(Trapezoid),
    /// See [`CheckerBoard`].
    #[serde(rename = "checkerboard")]
    CheckerBoard(CheckerBoard),
    /// See [`Arrow`].
    Arrow(Arrow),
    /// See [`Circle`].
    Circle(Circle),
}

impl AnyShape {
    /// snake_case kind name, as used in the `kind` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Triangle(_) => "triangle",
            Self::Arc(_) => "arc",
            Self::Flower(_) => "flower",
            Self::Trapezoid(_) => "trapezoid",
            Self::CheckerBoard(_) => "checkerboard",
            Self::Arrow(_) => "arrow",
            Self::Circle(_) => "circle",
        }
    }

    /// Interpolate between two shapes of the same kind.
    pub fn interpolate(from: &AnyShape, to: &AnyShape, t: f64) -> DrawingResult<AnyShape> {
        fn lerp<S: Animatable>(a: &S, b: &S, t: f64) -> S {
            S::interpolated(a, b, t)
        }

        Ok(match (from, to) {
            (Self::Triangle(a), Self::Triangle(b)) => Self::Triangle(lerp(a, b, t)),
            (Self::Arc(a), Self::Arc(b)) => Self::Arc(lerp(a, b, t)),
            (Self::Flower(a), Self::Flower(b)) => Self::Flower(lerp(a, b, t)),
            (Self::Trapezoid(a), Self::Trapezoid(b)) => Self::Trapezoid(lerp(a, b, t)),
            (Self::CheckerBoard(a), Self::CheckerBoard(b)) => Self::CheckerBoard(lerp(a, b, t)),
            (Self::Arrow(a), Self::Arrow(b)) => Self::Arrow(lerp(a, b, t)),
            (Self::Circle(a), Self::Circle(b)) => Self::Circle(lerp(a, b, t)),
            _ => {
                return Err(DrawingError::animation(format!(
                    "cannot animate '{}' into '{}'",
                    from.kind(),
                    to.kind()
                )));
            }
        })
    }

    /// Check that `self` and `other` can be interpolated.
    pub fn ensure_same_kind(&self, other: &AnyShape) -> DrawingResult<()> {
        Self::interpolate(self, other, 0.0).map(|_| ())
    }
}

impl Lerp for AnyShape {
    /// Shapes of different kinds cannot blend; they hold `a` until `t` reaches 1.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        AnyShape::interpolate(a, b, t).unwrap_or(if t >= 1.0 { *b } else { *a })
    }
}

impl Animatable for AnyShape {
    type Data = AnyShape;

    fn animatable_data(&self) -> AnyShape {
        *self
    }

    fn set_animatable_data(&mut self, data: AnyShape) {
        *self = data;
    }
}

impl Shape for AnyShape {
    fn path(&self, rect: Rect) -> Path {
        let path = match self {
            Self::Triangle(s) => s.path(rect),
            Self::Arc(s) => s.path(rect),
            Self::Flower(s) => s.path(rect),
            Self::Trapezoid(s) => s.path(rect),
            Self::CheckerBoard(s) => s.path(rect),
            Self::Arrow(s) => s.path(rect),
            Self::Circle(s) => s.path(rect),
        };
        tracing::trace!(kind = self.kind(), cmds = path.len(), "generated path");
        path
    }
}

impl FromStr for AnyShape {
    type Err = DrawingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(serde_json::from_str(s)?)
    }
}

impl From<Triangle> for AnyShape {
    fn from(s: Triangle) -> Self {
        Self::Triangle(s)
    }
}

impl From<Arc> for AnyShape {
    fn from(s: Arc) -> Self {
        Self::Arc(s)
    }
}

impl From<Flower> for AnyShape {
    fn from(s: Flower) -> Self {
        Self::Flower(s)
    }
}

impl From<Trapezoid> for AnyShape {
    fn from(s: Trapezoid) -> Self {
        Self::Trapezoid(s)
    }
}

impl From<CheckerBoard> for AnyShape {
    fn from(s: CheckerBoard) -> Self {
        Self::CheckerBoard(s)
    }
}

impl From<Arrow> for AnyShape {
    fn from(s: Arrow) -> Self {
        Self::Arrow(s)
    }
}

impl From<Circle> for AnyShape {
    fn from(s: Circle) -> Self {
        Self::Circle(s)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/any.rs"]
mod tests;
