use std::ops::RangeInclusive;

/// A numeric slider bound to one shape parameter.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Slider {
    /// Parameter name the slider drives.
    pub label: &'static str,
    /// Allowed values.
    pub range: RangeInclusive<f64>,
    value: f64,
}

impl Slider {
    /// Slider starting at `value`, clamped into `range`.
    pub fn new(label: &'static str, range: RangeInclusive<f64>, value: f64) -> Self {
        let mut s = Self {
            label,
            range,
            value: 0.0,
        };
        s.set(value);
        s
    }

    /// Current value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Move the thumb; out-of-range values clamp, NaN leaves the value unchanged.
    /// Returns the stored value.
    pub fn set(&mut self, value: f64) -> f64 {
        let (a, b) = (*self.range.start(), *self.range.end());
        if !value.is_nan() {
            self.value = value.max(a.min(b)).min(a.max(b));
        }
        self.value
    }

    /// Thumb position in `[0, 1]`; `0` for an empty range.
    pub fn fraction(&self) -> f64 {
        let span = self.range.end() - self.range.start();
        if span <= 0.0 {
            return 0.0;
        }
        (self.value - self.range.start()) / span
    }
}

#[cfg(test)]
#[path = "../../tests/unit/demo/slider.rs"]
mod tests;
