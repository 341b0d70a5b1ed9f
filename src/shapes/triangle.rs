use crate::animation::animatable::Animatable;
use crate::foundation::core::{Point, Rect};
use crate::path::Path;
use crate::shapes::Shape;

/// Isosceles triangle: apex at top-center, base along the bottom edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Triangle;

impl Shape for Triangle {
    fn path(&self, rect: Rect) -> Path {
        let apex = Point::new(rect.center().x, rect.y0);
        let mut path = Path::new();
        path.move_to(apex);
        path.line_to(Point::new(rect.x0, rect.y1));
        path.line_to(Point::new(rect.x1, rect.y1));
        path.line_to(apex);
        path
    }
}

impl Animatable for Triangle {
    type Data = ();

    fn animatable_data(&self) {}

    fn set_animatable_data(&mut self, _data: ()) {}
}
