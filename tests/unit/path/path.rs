use std::f64::consts::{FRAC_PI_2, PI, TAU};

use super::*;

fn els(path: &Path) -> Vec<PathEl> {
    path.to_bez_path().elements().to_vec()
}

#[test]
fn commands_keep_emission_order() {
    let mut p = Path::new();
    p.move_to(Point::new(0.0, 0.0));
    p.line_to(Point::new(10.0, 0.0));
    p.close();
    assert_eq!(
        p.commands(),
        &[
            PathCmd::MoveTo {
                to: Point::new(0.0, 0.0)
            },
            PathCmd::LineTo {
                to: Point::new(10.0, 0.0)
            },
            PathCmd::Close,
        ]
    );
    assert_eq!(p.len(), 3);
}

#[test]
fn arc_sweep_follows_direction_flag() {
    let ccw = ArcCmd {
        center: Point::ZERO,
        radius: 1.0,
        start: Angle::radians(0.0),
        end: Angle::radians(FRAC_PI_2),
        clockwise: false,
    };
    assert!((ccw.sweep() - FRAC_PI_2).abs() < 1e-12);

    let cw = ArcCmd {
        clockwise: true,
        ..ccw
    };
    assert!((cw.sweep() + 1.5 * PI).abs() < 1e-12);

    let full = ArcCmd {
        end: Angle::radians(TAU),
        ..ccw
    };
    assert!((full.sweep() - TAU).abs() < 1e-12);
}

#[test]
fn arc_endpoints_sit_on_the_circle() {
    let arc = ArcCmd {
        center: Point::new(50.0, 50.0),
        radius: 10.0,
        start: Angle::degrees(-90.0),
        end: Angle::degrees(0.0),
        clockwise: false,
    };
    let s = arc.start_point();
    let e = arc.end_point();
    assert!((s - Point::new(50.0, 40.0)).hypot() < 1e-9);
    assert!((e - Point::new(60.0, 50.0)).hypot() < 1e-9);
}

#[test]
fn lone_arc_starts_its_own_subpath() {
    let mut p = Path::new();
    p.add_arc(Point::new(0.0, 0.0), 5.0, Angle::ZERO, Angle::degrees(90.0), false);
    let e = els(&p);
    assert!(matches!(e[0], PathEl::MoveTo(m) if (m - Point::new(5.0, 0.0)).hypot() < 1e-9));
    assert!(e[1..].iter().all(|el| matches!(el, PathEl::CurveTo(..))));
}

#[test]
fn arc_after_point_connects_with_line() {
    let mut p = Path::new();
    p.move_to(Point::new(-20.0, 0.0));
    p.add_arc(Point::new(0.0, 0.0), 5.0, Angle::ZERO, Angle::degrees(90.0), false);
    let e = els(&p);
    assert!(matches!(e[1], PathEl::LineTo(l) if (l - Point::new(5.0, 0.0)).hypot() < 1e-9));
}

#[test]
fn negative_radius_collapses_to_center() {
    let mut p = Path::new();
    p.add_arc(Point::new(3.0, 4.0), -2.0, Angle::ZERO, Angle::degrees(180.0), false);
    let bb = p.bounding_box();
    assert!(bb.width() < 1e-9 && bb.height() < 1e-9);
}

#[test]
fn rect_is_one_closed_subpath() {
    let mut p = Path::new();
    p.add_rect(Rect::new(0.0, 0.0, 4.0, 2.0));
    assert_eq!(p.len(), 5);
    assert_eq!(p.commands()[4], PathCmd::Close);
    assert_eq!(p.bounding_box(), Rect::new(0.0, 0.0, 4.0, 2.0));
}

#[test]
fn ellipse_fits_its_rect() {
    let mut p = Path::new();
    p.add_ellipse(Rect::new(0.0, 0.0, 20.0, 10.0));
    assert!(matches!(p.commands()[0], PathCmd::MoveTo { .. }));
    assert_eq!(p.commands().last(), Some(&PathCmd::Close));
    let bb = p.bounding_box();
    assert!((bb.width() - 20.0).abs() < 1e-6);
    assert!((bb.height() - 10.0).abs() < 1e-6);
}

#[test]
fn applying_translation_moves_bounds() {
    let mut p = Path::new();
    p.add_rect(Rect::new(0.0, 0.0, 4.0, 2.0));
    let moved = p.applying(Affine::translate((10.0, 5.0)));
    assert_eq!(moved.bounding_box(), Rect::new(10.0, 5.0, 14.0, 7.0));
    // Source is untouched.
    assert_eq!(p.bounding_box(), Rect::new(0.0, 0.0, 4.0, 2.0));
}

#[test]
fn line_after_close_restarts_at_subpath_start() {
    let mut p = Path::new();
    p.move_to(Point::new(1.0, 1.0));
    p.line_to(Point::new(2.0, 1.0));
    p.close();
    p.line_to(Point::new(1.0, 3.0));
    let e = els(&p);
    assert_eq!(e[3], PathEl::MoveTo(Point::new(1.0, 1.0)));
    assert_eq!(e[4], PathEl::LineTo(Point::new(1.0, 3.0)));
}

#[test]
fn empty_path_has_zero_bounds_and_svg() {
    let p = Path::new();
    assert!(p.is_empty());
    assert_eq!(p.bounding_box(), Rect::ZERO);
    assert_eq!(p.to_svg(), "");
}

#[test]
fn commands_serialize_with_op_tag() {
    let mut p = Path::new();
    p.move_to(Point::new(1.0, 2.0));
    p.close();
    let json = serde_json::to_value(&p).unwrap();
    assert_eq!(json["cmds"][0]["op"], "move_to");
    assert_eq!(json["cmds"][1]["op"], "close");
}
