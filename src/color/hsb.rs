use crate::foundation::core::Rgba8Premul;

/// Hue/saturation/brightness color, each channel normalized to `[0, 1]`.
///
/// Hue wraps: `1.0` and `0.0` are the same red.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Hsb {
    /// Hue as a fraction of a full turn.
    pub hue: f64,
    /// Saturation.
    pub saturation: f64,
    /// Brightness (HSV value).
    pub brightness: f64,
}

impl Hsb {
    /// Build a color from its three channels.
    pub fn new(hue: f64, saturation: f64, brightness: f64) -> Self {
        Self {
            hue,
            saturation,
            brightness,
        }
    }

    /// Straight RGB channels in `[0, 1]`.
    pub fn to_rgb(self) -> (f64, f64, f64) {
        let h = self.hue.rem_euclid(1.0) * 6.0;
        let s = self.saturation.clamp(0.0, 1.0);
        let v = self.brightness.clamp(0.0, 1.0);

        let c = v * s;
        let x = c * (1.0 - ((h % 2.0) - 1.0).abs());
        let m = v - c;
        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        (r + m, g + m, b + m)
    }

    /// Opaque premultiplied RGBA8.
    pub fn to_rgba8_premul(self) -> Rgba8Premul {
        fn to_u8(x: f64) -> u8 {
            (x.clamp(0.0, 1.0) * 255.0).round() as u8
        }

        let (r, g, b) = self.to_rgb();
        Rgba8Premul::from_straight_rgba(to_u8(r), to_u8(g), to_u8(b), 255)
    }

    /// `#rrggbb`.
    pub fn to_hex(self) -> String {
        self.to_rgba8_premul().to_hex()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/hsb.rs"]
mod tests;
