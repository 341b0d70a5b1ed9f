use super::*;

#[test]
fn set_clamps_into_range() {
    let mut s = Slider::new("thickness", 2.0..=20.0, 2.0);
    assert_eq!(s.set(50.0), 20.0);
    assert_eq!(s.set(-1.0), 2.0);
    assert_eq!(s.set(11.0), 11.0);
    assert_eq!(s.value(), 11.0);
}

#[test]
fn initial_value_is_clamped_too() {
    let s = Slider::new("width", 0.0..=100.0, 250.0);
    assert_eq!(s.value(), 100.0);
}

#[test]
fn nan_is_ignored() {
    let mut s = Slider::new("offset", -40.0..=40.0, -20.0);
    assert_eq!(s.set(f64::NAN), -20.0);
}

#[test]
fn fraction_maps_range_to_unit() {
    let s = Slider::new("offset", -40.0..=40.0, -20.0);
    assert_eq!(s.fraction(), 0.25);
    let flat = Slider::new("flat", 1.0..=1.0, 1.0);
    assert_eq!(flat.fraction(), 0.0);
}
