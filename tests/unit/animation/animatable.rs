use super::*;

#[derive(Clone, Debug, PartialEq)]
struct Gauge {
    level: f64,
    label: &'static str,
}

impl Animatable for Gauge {
    type Data = f64;

    fn animatable_data(&self) -> f64 {
        self.level
    }

    fn set_animatable_data(&mut self, data: f64) {
        self.level = data;
    }
}

#[test]
fn scalar_lerp_hits_endpoints_and_midpoint() {
    assert_eq!(f64::lerp(&10.0, &90.0, 0.0), 10.0);
    assert_eq!(f64::lerp(&10.0, &90.0, 1.0), 90.0);
    assert_eq!(f64::lerp(&10.0, &90.0, 0.5), 50.0);
}

#[test]
fn pair_lerps_each_component() {
    let a = AnimatablePair::new(4.0, 4.0);
    let b = AnimatablePair::new(8.0, 16.0);
    let mid = AnimatablePair::lerp(&a, &b, 0.5);
    assert_eq!(mid, AnimatablePair::new(6.0, 10.0));
}

#[test]
fn angle_lerp_is_linear_in_radians() {
    let a = Angle::degrees(0.0);
    let b = Angle::degrees(90.0);
    assert!((Angle::lerp(&a, &b, 0.5).as_degrees() - 45.0).abs() < 1e-9);
}

#[test]
fn interpolated_keeps_non_animatable_fields_from_target() {
    let from = Gauge {
        level: 0.0,
        label: "old",
    };
    let to = Gauge {
        level: 10.0,
        label: "new",
    };
    let mid = Gauge::interpolated(&from, &to, 0.3);
    assert!((mid.level - 3.0).abs() < 1e-12);
    assert_eq!(mid.label, "new");
}
