use super::*;

#[test]
fn tick_from_signed_rejects_negatives() {
    assert_eq!(Tick::from_signed(7).unwrap(), Tick(7));
    assert!(matches!(
        Tick::from_signed(-1),
        Err(KeylineError::Validation(_))
    ));
}

#[test]
fn tick_since_saturates() {
    assert_eq!(Tick(10).since(Tick(4)), 6);
    assert_eq!(Tick(4).since(Tick(10)), 0);
    assert_eq!(Tick(u32::MAX).next(), Tick(u32::MAX));
}

#[test]
fn bounds_reject_degenerate_sizes() {
    assert!(Bounds::new(0, 0, 0, 10).is_err());
    assert!(Bounds::new(0, 0, 10, -3).is_err());
    let b = Bounds::new(-50, 25, 1, 1).unwrap();
    assert_eq!(b.right(), -49);
    assert_eq!(b.bottom(), 26);
}

#[test]
fn bounds_admit_points_up_to_the_far_edges() {
    let b = Bounds::new(200, 70, 360, 360).unwrap();
    assert!(b.admits(0, 0));
    assert!(b.admits(560, 430));
    assert!(!b.admits(561, 0));
    assert!(!b.admits(0, 431));
}

#[test]
fn attrs_validation_boundaries() {
    assert!(Attrs::new(0, 0, 1, 1, 0, 0, 0).validate().is_ok());
    assert!(Attrs::new(0, 0, 1, 1, 255, 255, 255).validate().is_ok());
    assert!(Attrs::new(0, 0, 0, 1, 0, 0, 0).validate().is_err());
    assert!(Attrs::new(0, 0, 1, 1, 256, 0, 0).validate().is_err());
    assert!(Attrs::new(0, 0, 1, 1, 0, -1, 0).validate().is_err());

    assert!(Attrs::default().validate_snapshot().is_ok());
    assert!(Attrs::new(0, 0, -1, 0, 0, 0, 0).validate_snapshot().is_err());
}

#[test]
fn attrs_array_order_is_position_size_color() {
    let a = Attrs::new(1, 2, 3, 4, 5, 6, 7);
    assert_eq!(a.to_array(), [1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(Attrs::from_array(a.to_array()), a);
}
