/// SplitMix64 generator for deterministic "random" picks.
#[derive(Clone, Copy, Debug)]
pub struct Rng64 {
    state: u64,
}

impl Rng64 {
    /// Seeded generator; equal seeds give equal sequences.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next raw value.
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform value in `[0, 1)`.
    pub fn next_f64_01(&mut self) -> f64 {
        // 53 bits of precision.
        let v = self.next_u64() >> 11;
        (v as f64) * (1.0 / ((1u64 << 53) as f64))
    }

    /// Uniform value in `[lo, hi]`.
    pub fn next_in(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64_01()
    }
}

/// Reduce an angle in radians into `[0, 2π)`.
pub(crate) fn wrap_tau(radians: f64) -> f64 {
    let r = radians.rem_euclid(std::f64::consts::TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs.
    if r >= std::f64::consts::TAU { 0.0 } else { r }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
