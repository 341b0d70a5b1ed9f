//! Ordered drawing instructions and their conversion to kurbo geometry.

mod arc;

pub use arc::ArcCmd;

use kurbo::{PathEl, Shape as _};

use crate::foundation::core::{Affine, Angle, BezPath, Point, Rect};

/// Flattening tolerance used when arcs and ellipses are expanded to cubics.
pub const TOLERANCE: f64 = 0.1;

/// One drawing instruction.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PathCmd {
    /// Start a new subpath.
    MoveTo {
        /// Target point.
        to: Point,
    },
    /// Straight segment from the current point.
    LineTo {
        /// Target point.
        to: Point,
    },
    /// Cubic segment from the current point.
    CurveTo {
        /// First control point.
        c1: Point,
        /// Second control point.
        c2: Point,
        /// Target point.
        to: Point,
    },
    /// Circular arc, connected to the current point by a straight segment if there is one.
    Arc(ArcCmd),
    /// Close the current subpath.
    Close,
}

/// A vector path: an ordered list of [`PathCmd`]s.
///
/// Order is significant, it defines the silhouette and the fill winding.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Path {
    cmds: Vec<PathCmd>,
}

impl Path {
    /// Empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Instructions in emission order.
    pub fn commands(&self) -> &[PathCmd] {
        &self.cmds
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    /// `true` if no instruction was emitted.
    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    /// Begin a new subpath at `p`.
    pub fn move_to(&mut self, p: Point) {
        self.cmds.push(PathCmd::MoveTo { to: p });
    }

    /// Straight line to `p`.
    pub fn line_to(&mut self, p: Point) {
        self.cmds.push(PathCmd::LineTo { to: p });
    }

    /// Cubic Bézier to `p`.
    pub fn curve_to(&mut self, c1: Point, c2: Point, p: Point) {
        self.cmds.push(PathCmd::CurveTo { c1, c2, to: p });
    }

    /// Circular arc around `center`; see [`ArcCmd`] for the sweep rules.
    pub fn add_arc(&mut self, center: Point, radius: f64, start: Angle, end: Angle, clockwise: bool) {
        self.cmds.push(PathCmd::Arc(ArcCmd {
            center,
            radius,
            start,
            end,
            clockwise,
        }));
    }

    /// Close the current subpath.
    pub fn close(&mut self) {
        self.cmds.push(PathCmd::Close);
    }

    /// Closed rectangle subpath: top-left, top-right, bottom-right, bottom-left.
    pub fn add_rect(&mut self, rect: Rect) {
        self.move_to(Point::new(rect.x0, rect.y0));
        self.line_to(Point::new(rect.x1, rect.y0));
        self.line_to(Point::new(rect.x1, rect.y1));
        self.line_to(Point::new(rect.x0, rect.y1));
        self.close();
    }

    /// Closed ellipse inscribed in `rect`, as cubic segments.
    pub fn add_ellipse(&mut self, rect: Rect) {
        let ellipse = kurbo::Ellipse::from_rect(rect);
        self.extend_elements(ellipse.path_elements(TOLERANCE));
        if self.cmds.last() != Some(&PathCmd::Close) {
            self.close();
        }
    }

    /// Append all instructions of `other`.
    pub fn add_path(&mut self, other: &Path) {
        self.cmds.extend_from_slice(&other.cmds);
    }

    /// Copy of this path with `affine` applied; arcs come back as cubics.
    pub fn applying(&self, affine: Affine) -> Path {
        Path::from_bez_path(&(affine * self.to_bez_path()))
    }

    /// Convert kurbo geometry into instructions. Quadratics are raised to cubics.
    pub fn from_bez_path(bez: &BezPath) -> Path {
        let mut out = Path::new();
        out.extend_elements(bez.iter());
        out
    }

    fn extend_elements(&mut self, els: impl IntoIterator<Item = PathEl>) {
        let mut last = Point::ZERO;
        for el in els {
            match el {
                PathEl::MoveTo(p) => {
                    self.move_to(p);
                    last = p;
                }
                PathEl::LineTo(p) => {
                    self.line_to(p);
                    last = p;
                }
                PathEl::QuadTo(c, p) => {
                    let cubic = kurbo::QuadBez::new(last, c, p).raise();
                    self.curve_to(cubic.p1, cubic.p2, cubic.p3);
                    last = p;
                }
                PathEl::CurveTo(c1, c2, p) => {
                    self.curve_to(c1, c2, p);
                    last = p;
                }
                PathEl::ClosePath => self.close(),
            }
        }
    }

    /// Lower to a kurbo [`BezPath`].
    ///
    /// A segment emitted with no current point starts a new subpath at its target.
    /// After a close, the next segment restarts from the closed subpath's start.
    pub fn to_bez_path(&self) -> BezPath {
        let mut out = BezPath::new();
        let mut current: Option<Point> = None;
        let mut subpath_start = Point::ZERO;
        let mut closed = false;

        fn ensure_current(
            out: &mut BezPath,
            current: &mut Option<Point>,
            closed: &mut bool,
            subpath_start: Point,
        ) -> bool {
            if *closed {
                out.move_to(subpath_start);
                *current = Some(subpath_start);
                *closed = false;
            }
            current.is_some()
        }

        for cmd in &self.cmds {
            match *cmd {
                PathCmd::MoveTo { to } => {
                    out.move_to(to);
                    current = Some(to);
                    subpath_start = to;
                    closed = false;
                }
                PathCmd::LineTo { to } => {
                    if ensure_current(&mut out, &mut current, &mut closed, subpath_start) {
                        out.line_to(to);
                    } else {
                        out.move_to(to);
                        subpath_start = to;
                    }
                    current = Some(to);
                }
                PathCmd::CurveTo { c1, c2, to } => {
                    if ensure_current(&mut out, &mut current, &mut closed, subpath_start) {
                        out.curve_to(c1, c2, to);
                    } else {
                        out.move_to(to);
                        subpath_start = to;
                    }
                    current = Some(to);
                }
                PathCmd::Arc(arc) => {
                    let start = arc.start_point();
                    if ensure_current(&mut out, &mut current, &mut closed, subpath_start) {
                        out.line_to(start);
                    } else {
                        out.move_to(start);
                        subpath_start = start;
                    }
                    for el in arc.to_kurbo().append_iter(TOLERANCE) {
                        out.push(el);
                    }
                    current = Some(arc.end_point());
                }
                PathCmd::Close => {
                    if current.is_some() && !closed {
                        out.close_path();
                        closed = true;
                        current = Some(subpath_start);
                    }
                }
            }
        }
        out
    }

    /// SVG path data (`d` attribute).
    pub fn to_svg(&self) -> String {
        self.to_bez_path().to_svg()
    }

    /// Tight bounding box of the rendered geometry; zero rect for an empty path.
    pub fn bounding_box(&self) -> Rect {
        if self.is_empty() {
            return Rect::ZERO;
        }
        self.to_bez_path().bounding_box()
    }
}

impl From<&Path> for BezPath {
    fn from(path: &Path) -> Self {
        path.to_bez_path()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/path.rs"]
mod tests;
