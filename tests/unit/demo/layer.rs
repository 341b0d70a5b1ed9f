use super::*;
use crate::color::hsb::Hsb;
use crate::foundation::core::{Point, Rect};

fn square() -> Path {
    let mut p = Path::new();
    p.add_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
    p
}

#[test]
fn fill_and_stroke_layers_render_in_order() {
    let red = Rgba8Premul::from_straight_rgba(255, 0, 0, 255);
    let svg = svg_document(
        Size::new(20.0, 10.0),
        &[
            Layer::fill(square(), red),
            Layer::stroke(square(), Paint::Solid(red), 2.5, true),
        ],
    );

    assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="10" viewBox="0 0 20 10">"#));
    assert!(svg.ends_with("</svg>\n"));
    assert!(!svg.contains("<defs>"));

    let fill = svg.find(r##"fill="#ff0000""##).unwrap();
    let stroke = svg
        .find(r##"fill="none" stroke="#ff0000" stroke-width="2.5" stroke-linecap="round" stroke-linejoin="round""##)
        .unwrap();
    assert!(fill < stroke);
    assert_eq!(svg.matches("<path ").count(), 2);
}

#[test]
fn gradient_layers_reference_their_defs() {
    let gradient = LinearGradient {
        start: Point::new(5.0, 0.0),
        end: Point::new(5.0, 10.0),
        stops: (Hsb::new(0.0, 1.0, 1.0), Hsb::new(0.0, 1.0, 0.5)),
    };
    let svg = svg_document(
        Size::new(10.0, 10.0),
        &[Layer::stroke(square(), Paint::Gradient(gradient), 1.0, false)],
    );

    assert!(svg.contains(r#"<linearGradient id="g0" gradientUnits="userSpaceOnUse" x1="5" y1="0" x2="5" y2="10">"#));
    assert!(svg.contains(r##"<stop offset="0" stop-color="#ff0000"/><stop offset="1" stop-color="#800000"/>"##));
    assert!(svg.contains(r#"stroke="url(#g0)""#));
    assert!(svg.contains(r#"stroke-linecap="butt" stroke-linejoin="miter""#));
}

#[test]
fn empty_paths_are_skipped() {
    let black = Rgba8Premul::from_straight_rgba(0, 0, 0, 255);
    let svg = svg_document(Size::new(1.0, 1.0), &[Layer::fill(Path::new(), black)]);
    assert!(!svg.contains("<path"));
}
