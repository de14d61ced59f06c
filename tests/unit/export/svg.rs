use super::*;
use crate::composition::builder::{AnimationBuilder, ModelBuilder};

fn model() -> AnimationModel {
    let mut b = ModelBuilder::new();
    b.set_bounds(200, 70, 360, 360).unwrap();
    b.declare_shape("R", ShapeKind::Rectangle).unwrap();
    b.declare_shape("C", ShapeKind::Ellipse).unwrap();
    b.declare_shape("idle", ShapeKind::Rectangle).unwrap();
    b.add_motion("R", 1, 200, 200, 50, 100, 255, 0, 0, 10, 300, 200, 50, 100, 255, 0, 0)
        .unwrap();
    b.add_motion("C", 6, 440, 70, 120, 60, 0, 0, 255, 20, 440, 70, 120, 80, 0, 170, 85)
        .unwrap();
    b.build().unwrap()
}

#[test]
fn document_has_root_and_one_element_per_shape() {
    let svg = export_svg(&model(), 1).unwrap();
    assert!(svg.starts_with(
        "<svg width=\"360\" height=\"360\" version=\"1.1\"\n    xmlns=\"http://www.w3.org/2000/svg\">\n"
    ));
    assert!(svg.ends_with("</svg>\n"));
    assert_eq!(svg.matches("<rect ").count(), 2);
    assert_eq!(svg.matches("<ellipse ").count(), 1);
    assert_eq!(svg.matches("</rect>").count(), 2);
}

#[test]
fn rectangle_start_state_is_canvas_relative() {
    let svg = export_svg(&model(), 1).unwrap();
    assert!(svg.contains(
        "<rect id=\"R\" x=\"0\" y=\"130\" width=\"50\" height=\"100\" fill=\"rgb(255,0,0)\" visibility=\"visible\" >"
    ));
    assert!(svg.contains(
        "    <animate attributeType=\"xml\" begin=\"1000ms\" dur=\"9000ms\" attributeName=\"x\" from=\"0\" to=\"100\" fill=\"freeze\" />"
    ));
}

#[test]
fn late_ellipse_is_hidden_then_revealed() {
    let svg = export_svg(&model(), 2).unwrap();
    assert!(svg.contains(
        "<ellipse id=\"C\" cx=\"300\" cy=\"30\" rx=\"60\" ry=\"30\" fill=\"rgb(0,0,255)\" visibility=\"hidden\" >"
    ));
    assert!(svg.contains(
        "begin=\"3000ms\" dur=\"1ms\" attributeName=\"visibility\" from=\"hidden\" to=\"visible\""
    ));
    // Height 60 -> 80 moves the center and the vertical radius, both halved.
    assert!(svg.contains("begin=\"3000ms\" dur=\"7000ms\" attributeName=\"cy\" from=\"30\" to=\"40\""));
    assert!(svg.contains("attributeName=\"ry\" from=\"30\" to=\"40\""));
    assert!(svg.contains("attributeName=\"fill\" from=\"rgb(0,0,255)\" to=\"rgb(0,170,85)\""));
    assert!(!svg.contains("attributeName=\"cx\""));
    assert!(!svg.contains("attributeName=\"rx\""));
}

#[test]
fn shape_without_motion_is_hidden_and_empty() {
    let svg = export_svg(&model(), 1).unwrap();
    assert!(svg.contains(
        "<rect id=\"idle\" x=\"-200\" y=\"-70\" width=\"0\" height=\"0\" fill=\"rgb(0,0,0)\" visibility=\"hidden\" >"
    ));
}

#[test]
fn zero_speed_is_rejected() {
    assert!(matches!(
        export_svg(&model(), 0),
        Err(KeylineError::Validation(_))
    ));
}
