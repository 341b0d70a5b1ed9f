use super::*;

#[test]
fn angle_degrees_and_radians_agree() {
    let a = Angle::degrees(180.0);
    assert!((a.radians - std::f64::consts::PI).abs() < 1e-12);
    assert!((Angle::radians(std::f64::consts::FRAC_PI_2).as_degrees() - 90.0).abs() < 1e-12);
    assert!(((Angle::degrees(110.0) - Angle::degrees(90.0)).as_degrees() - 20.0).abs() < 1e-9);
    assert_eq!(-Angle::degrees(0.0), Angle::ZERO);
}

#[test]
fn fps_rejects_zero_components() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
    let fps = Fps::new(30, 1).unwrap();
    assert_eq!(fps.secs_to_frames_round(3.0), 90);
    assert!((fps.frames_to_secs(45) - 1.5).abs() < 1e-12);
}

#[test]
fn rgba_hex_formats_opaque_and_translucent() {
    let opaque = Rgba8Premul::from_straight_rgba(255, 128, 0, 255);
    assert_eq!(opaque.to_hex(), "#ff8000");
    let half = Rgba8Premul::from_straight_rgba(255, 255, 255, 128);
    assert_eq!(half.to_hex(), "#80808080");
}

#[test]
fn parse_rect_reads_origin_and_size() {
    let r = parse_rect("10, 20, 300, 150").unwrap();
    assert_eq!(r, Rect::new(10.0, 20.0, 310.0, 170.0));
    assert_eq!(r.width(), 300.0);
}

#[test]
fn parse_rect_rejects_bad_input() {
    assert!(parse_rect("1,2,3").is_err());
    assert!(parse_rect("a,b,c,d").is_err());
    assert!(parse_rect("0,0,-1,5").is_err());
}
