use std::f64::consts::TAU;

use crate::foundation::core::{Angle, Point, Vec2};
use crate::foundation::math::wrap_tau;

/// Circular arc instruction.
///
/// `clockwise == false` sweeps toward increasing angles, `clockwise == true` toward
/// decreasing angles. The sweep covers the angular distance between `start` and `end`
/// reduced into one turn, unless the two are a full turn (or more) apart.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ArcCmd {
    /// Arc center.
    pub center: Point,
    /// Arc radius; negative values are drawn as zero.
    pub radius: f64,
    /// Start angle.
    pub start: Angle,
    /// End angle.
    pub end: Angle,
    /// Sweep direction.
    pub clockwise: bool,
}

impl ArcCmd {
    /// Signed sweep in radians, in `[-2π, 2π]`.
    pub fn sweep(&self) -> f64 {
        let raw = self.end.radians - self.start.radians;
        if self.clockwise {
            if raw <= -TAU { -TAU } else { -wrap_tau(-raw) }
        } else if raw >= TAU {
            TAU
        } else {
            wrap_tau(raw)
        }
    }

    pub(crate) fn drawn_radius(&self) -> f64 {
        self.radius.max(0.0)
    }

    /// First point on the arc.
    pub fn start_point(&self) -> Point {
        self.point_at(self.start.radians)
    }

    /// Last point on the arc.
    pub fn end_point(&self) -> Point {
        self.point_at(self.start.radians + self.sweep())
    }

    fn point_at(&self, radians: f64) -> Point {
        let r = self.drawn_radius();
        self.center + Vec2::new(r * radians.cos(), r * radians.sin())
    }

    pub(crate) fn to_kurbo(self) -> kurbo::Arc {
        let r = self.drawn_radius();
        kurbo::Arc {
            center: self.center,
            radii: Vec2::new(r, r),
            start_angle: self.start.radians,
            sweep_angle: self.sweep(),
            x_rotation: 0.0,
        }
    }
}
