use super::*;

#[test]
fn rng_is_deterministic() {
    let mut a = Rng64::new(123);
    let mut b = Rng64::new(123);
    for _ in 0..16 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
}

#[test]
fn next_in_stays_within_bounds() {
    let mut rng = Rng64::new(7);
    for _ in 0..1000 {
        let v = rng.next_in(10.0, 90.0);
        assert!((10.0..=90.0).contains(&v));
    }
}

#[test]
fn wrap_tau_reduces_into_one_turn() {
    use std::f64::consts::{PI, TAU};
    assert_eq!(wrap_tau(0.0), 0.0);
    assert!((wrap_tau(-PI / 2.0) - 1.5 * PI).abs() < 1e-12);
    assert!((wrap_tau(TAU + 1.0) - 1.0).abs() < 1e-12);
    assert_eq!(wrap_tau(TAU), 0.0);
}
