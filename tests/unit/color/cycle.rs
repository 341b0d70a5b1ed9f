use super::*;

#[test]
fn first_ring_without_rotation_is_pure_red() {
    assert_eq!(cycle_color(0, 100, 0.0, 1.0), Hsb::new(0.0, 1.0, 1.0));
}

#[test]
fn hue_wraps_past_one() {
    let c = cycle_color(50, 100, 0.6, 1.0);
    assert!((c.hue - 0.1).abs() < 1e-9);
    assert_eq!(c.saturation, 1.0);
    assert_eq!(c.brightness, 1.0);
}

#[test]
fn zero_steps_uses_amount_alone() {
    let c = cycle_color(3, 0, 0.25, 0.5);
    assert_eq!(c.hue, 0.25);
    assert_eq!(c.brightness, 0.5);
}

#[test]
fn rings_shrink_inward_with_vertical_gradients() {
    let rect = Rect::new(0.0, 0.0, 300.0, 300.0);
    let circle = ColorCyclingCircle {
        amount: 0.2,
        steps: 10,
    };
    let rings = circle.rings(rect);
    assert_eq!(rings.len(), 10);

    let widths: Vec<f64> = rings.iter().map(|r| r.path.bounding_box().width()).collect();
    assert!((widths[0] - (300.0 - RING_LINE_WIDTH)).abs() < 1e-6);
    assert!(widths.windows(2).all(|w| w[1] < w[0]));

    for ring in &rings {
        assert_eq!(ring.gradient.start, Point::new(150.0, 0.0));
        assert_eq!(ring.gradient.end, Point::new(150.0, 300.0));
        assert_eq!(ring.gradient.stops.0.brightness, 1.0);
        assert_eq!(ring.gradient.stops.1.brightness, 0.5);
        assert_eq!(ring.gradient.stops.0.hue, ring.gradient.stops.1.hue);
    }
}

#[test]
fn rings_past_the_center_are_empty() {
    let rect = Rect::new(0.0, 0.0, 20.0, 20.0);
    let rings = ColorCyclingCircle::default().rings(rect);
    assert_eq!(rings.len(), 100);
    assert!(!rings[0].path.is_empty());
    assert!(rings[99].path.is_empty());
}

#[test]
fn amount_is_the_animated_value() {
    let a = ColorCyclingCircle {
        amount: 0.0,
        steps: 100,
    };
    let b = ColorCyclingCircle {
        amount: 1.0,
        steps: 100,
    };
    let mid = ColorCyclingCircle::interpolated(&a, &b, 0.25);
    assert_eq!(mid.amount, 0.25);
    assert_eq!(mid.steps, 100);
}
