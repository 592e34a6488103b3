use base::Vec2;

#[test]
fn test_vec2_normalizes_pixel_position() {
    let size = Vec2::new(320usize, 240usize);
    let position = Vec2::new(160.0f32, 60.0) / size.map(|v| v as f32);
    assert_eq!(position, Vec2::new(0.5, 0.25));
    assert_eq!(size.area(), 76800);
}

#[test]
fn test_vec2_removes_padding_and_scales() {
    let padded = Vec2::new(330.0f32, 120.0);
    let unpadded = (padded - Vec2::new(10.0, 40.0)) * 0.5;
    assert_eq!(unpadded, Vec2::new(160.0, 40.0));
}

#[test]
fn test_vec2_zero_is_default() {
    assert_eq!(Vec2::<f32>::zero(), Vec2::new(0.0, 0.0));
    assert_eq!(format!("{:?}", Vec2::new(1, 2)), "Vec2 { x: 1, y: 2 }");
}
