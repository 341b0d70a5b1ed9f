use crate::foundation::core::Angle;

/// Interpolation contract for animation value types.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with normalized factor `t` in `[0, 1]`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Angle {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Angle::radians(a.radians + (b.radians - a.radians) * t)
    }
}

/// Nothing to animate.
impl Lerp for () {
    fn lerp(_a: &Self, _b: &Self, _t: f64) {}
}

/// Two animatable values interpolated component-wise.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimatablePair<A, B> {
    /// First component.
    pub first: A,
    /// Second component.
    pub second: B,
}

impl<A, B> AnimatablePair<A, B> {
    /// Pair up two values.
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: Lerp, B: Lerp> Lerp for AnimatablePair<A, B> {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            first: A::lerp(&a.first, &b.first, t),
            second: B::lerp(&a.second, &b.second, t),
        }
    }
}

/// A shape whose parameters a host may animate continuously.
///
/// The host interpolates [`Animatable::Data`] between two states and writes each
/// intermediate value back; the shape then regenerates its path from that value alone.
pub trait Animatable: Clone {
    /// The interpolated state.
    type Data: Lerp + Clone;

    /// Current animatable state.
    fn animatable_data(&self) -> Self::Data;

    /// Overwrite the animatable state.
    fn set_animatable_data(&mut self, data: Self::Data);

    /// `to` with its animatable state replaced by the lerp of `from` and `to` at `t`.
    fn interpolated(from: &Self, to: &Self, t: f64) -> Self {
        let data = Self::Data::lerp(&from.animatable_data(), &to.animatable_data(), t);
        let mut out = to.clone();
        out.set_animatable_data(data);
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/animatable.rs"]
mod tests;
