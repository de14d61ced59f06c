use super::*;
use crate::{
    composition::builder::{AnimationBuilder, ModelBuilder},
    composition::reader::read_animation,
    scene::shape::ShapeKind,
};

fn sample() -> AnimationModel {
    let mut b = ModelBuilder::new();
    b.set_bounds(200, 70, 360, 360).unwrap();
    b.declare_shape("R", ShapeKind::Rectangle).unwrap();
    b.declare_shape("C", ShapeKind::Ellipse).unwrap();
    b.add_motion("R", 1, 200, 200, 50, 100, 255, 0, 0, 10, 200, 200, 50, 100, 255, 0, 0)
        .unwrap();
    b.add_motion("R", 10, 200, 200, 50, 100, 255, 0, 0, 50, 300, 300, 50, 100, 255, 0, 0)
        .unwrap();
    b.build().unwrap()
}

#[test]
fn text_layout_matches_column_rules() {
    let out = export_text(&sample()).unwrap();
    let expected = concat!(
        "canvas 200 70 360 360\n",
        "shape R rectangle\n",
        "motion R 1   200 200 50  100 255 0   0    10  200 200 50  100 255 0   0   \n",
        "motion R 10  200 200 50  100 255 0   0    50  300 300 50  100 255 0   0   \n",
        "shape C ellipse\n",
    );
    assert_eq!(out, expected);
}

#[test]
fn negative_and_wide_fields_get_one_space() {
    let mut b = ModelBuilder::new();
    b.set_bounds(-10, -10, 5000, 5000).unwrap();
    b.declare_shape("s", ShapeKind::Rectangle).unwrap();
    b.add_motion("s", 0, -5, -100, 1000, 1, 0, 0, 0, 7, 1, 1, 1, 1, 0, 0, 0)
        .unwrap();
    let out = export_text(&b.build().unwrap()).unwrap();
    let motion = out.lines().nth(2).unwrap();
    assert!(motion.starts_with("motion s 0   -5  -100 1000 1   0   0   0    7   "));
}

#[test]
fn export_reads_back_into_the_same_model() {
    let original = sample();
    let text = export_text(&original).unwrap();
    let again = read_animation(&text, ModelBuilder::new()).unwrap();
    assert_eq!(again.ids(), original.ids());
    for id in original.ids() {
        assert_eq!(again.keyframes(&id).unwrap(), original.keyframes(&id).unwrap());
    }
    assert_eq!(export_text(&again).unwrap(), text);
}

#[test]
fn export_without_bounds_is_a_state_error() {
    assert!(matches!(
        export_text(&AnimationModel::new()),
        Err(crate::foundation::error::KeylineError::State(_))
    ));
}
