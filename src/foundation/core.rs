use crate::foundation::error::{DrawingError, DrawingResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Size, Vec2};

/// Angle value stored in radians.
///
/// Zero points along +x and positive angles turn toward +y, which on a y-down
/// canvas reads as clockwise.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
pub struct Angle {
    /// Angle in radians.
    pub radians: f64,
}

impl Angle {
    /// Zero angle.
    pub const ZERO: Self = Self { radians: 0.0 };

    /// Build an angle from radians.
    pub const fn radians(radians: f64) -> Self {
        Self { radians }
    }

    /// Build an angle from degrees.
    pub fn degrees(degrees: f64) -> Self {
        Self {
            radians: degrees.to_radians(),
        }
    }

    /// Angle expressed in degrees.
    pub fn as_degrees(self) -> f64 {
        self.radians.to_degrees()
    }
}

impl std::ops::Add for Angle {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::radians(self.radians + rhs.radians)
    }
}

impl std::ops::Sub for Angle {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::radians(self.radians - rhs.radians)
    }
}

impl std::ops::Neg for Angle {
    type Output = Self;

    fn neg(self) -> Self {
        Self::radians(-self.radians)
    }
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
/// Zero-based frame index on an animation timeline.
pub struct FrameIndex(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Rational frame rate (`num / den` frames per second).
pub struct Fps {
    /// Numerator.
    pub num: u32,
    /// Denominator, must be > 0.
    pub den: u32,
}

impl Fps {
    /// Build a validated frame rate.
    pub fn new(num: u32, den: u32) -> DrawingResult<Self> {
        if den == 0 {
            return Err(DrawingError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(DrawingError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Frames per second as a float.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Seconds covered by `frames` frames.
    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * f64::from(self.den) / f64::from(self.num)
    }

    /// Whole frames that fit in `secs`, rounded to nearest.
    pub fn secs_to_frames_round(self, secs: f64) -> u64 {
        (secs * self.as_f64()).round().max(0.0) as u64
    }
}

impl Default for Fps {
    fn default() -> Self {
        Self { num: 60, den: 1 }
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha.
    pub a: u8,
}

impl Rgba8Premul {
    /// Build from straight (non-premultiplied) channels.
    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        Self {
            r: premul(r, a),
            g: premul(g, a),
            b: premul(b, a),
            a,
        }
    }

    /// `#rrggbb` for opaque colors, `#rrggbbaa` otherwise.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Parse `x,y,w,h` into a rectangle with non-negative size.
pub fn parse_rect(s: &str) -> DrawingResult<Rect> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| DrawingError::validation(format!("rect '{s}': {e}")))?;
    let [x, y, w, h] = parts[..] else {
        return Err(DrawingError::validation(format!(
            "rect '{s}' must have exactly 4 components (x,y,w,h)"
        )));
    };
    if !(w >= 0.0 && h >= 0.0) {
        return Err(DrawingError::validation(format!(
            "rect '{s}' must have non-negative width and height"
        )));
    }
    Ok(Rect::new(x, y, x + w, y + h))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
