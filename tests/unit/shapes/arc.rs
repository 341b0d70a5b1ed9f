use super::*;
use crate::path::PathCmd;

fn rect() -> Rect {
    Rect::new(0.0, 0.0, 300.0, 300.0)
}

fn only_arc(path: &Path) -> crate::path::ArcCmd {
    match path.commands() {
        [PathCmd::Arc(arc)] => *arc,
        other => panic!("expected a single arc, got {other:?}"),
    }
}

#[test]
fn arc_is_centered_with_half_width_radius() {
    let arc = only_arc(&Arc::new(Angle::ZERO, Angle::degrees(110.0), true).path(rect()));
    assert_eq!(arc.center, rect().center());
    assert_eq!(arc.radius, 150.0);
}

#[test]
fn angles_are_rotated_back_a_quarter_turn_and_direction_flipped() {
    let arc = only_arc(&Arc::new(Angle::ZERO, Angle::degrees(110.0), true).path(rect()));
    assert!((arc.start.as_degrees() + 90.0).abs() < 1e-9);
    assert!((arc.end.as_degrees() - 20.0).abs() < 1e-9);
    assert!(!arc.clockwise);
}

#[test]
fn zero_degrees_starts_at_the_top() {
    let arc = only_arc(&Arc::new(Angle::ZERO, Angle::degrees(90.0), true).path(rect()));
    let start = arc.start_point();
    assert!((start.x - 150.0).abs() < 1e-9);
    assert!(start.y.abs() < 1e-9);
    // Visual clockwise from twelve o'clock lands at three o'clock.
    let end = arc.end_point();
    assert!((end.x - 300.0).abs() < 1e-9);
    assert!((end.y - 150.0).abs() < 1e-9);
}

#[test]
fn inset_accumulates_without_touching_the_source() {
    let arc = Arc::new(Angle::ZERO, Angle::degrees(180.0), false);
    let inner = arc.inset(5.0).inset(7.5);
    assert_eq!(arc.inset_amount, 0.0);
    assert_eq!(inner.inset_amount, 12.5);
    assert_eq!(only_arc(&inner.path(rect())).radius, 150.0 - 12.5);
}

#[test]
fn stroke_border_insets_by_half_the_line() {
    let arc = Arc::new(Angle::degrees(-90.0), Angle::degrees(90.0), true).stroke_border(40.0);
    assert_eq!(arc.inset_amount, 20.0);
}

#[test]
fn animates_start_and_end_together() {
    let a = Arc::new(Angle::ZERO, Angle::degrees(90.0), true);
    let b = Arc::new(Angle::degrees(90.0), Angle::degrees(270.0), true);
    let mid = Arc::interpolated(&a, &b, 0.5);
    assert!((mid.start_angle.as_degrees() - 45.0).abs() < 1e-9);
    assert!((mid.end_angle.as_degrees() - 180.0).abs() < 1e-9);
}
