use super::*;

#[test]
fn lerp_endpoints_are_exact() {
    let from = VisualState::COLLAPSED.with_translate(Vec2::new(120.0, -40.0));
    let to = VisualState::RESTING;
    assert_eq!(VisualState::lerp(&from, &to, 0.0), from);
    assert_eq!(VisualState::lerp(&from, &to, 1.0), to);
}

#[test]
fn lerp_midpoint_blends_every_channel() {
    let from = VisualState::COLLAPSED
        .with_translate(Vec2::new(100.0, -50.0))
        .with_shift(Vec2::new(0.0, 1.0));
    let mid = VisualState::lerp(&from, &VisualState::RESTING, 0.5);
    assert_eq!(mid.opacity, 0.5);
    assert_eq!(mid.scale, Vec2::new(0.5, 0.5));
    assert_eq!(mid.translate, Vec2::new(50.0, -25.0));
    assert_eq!(mid.shift, Vec2::new(0.0, 0.5));
}

#[test]
fn builders_touch_single_channels() {
    let s = VisualState::RESTING.with_scale_x(0.0);
    assert_eq!(s.scale, Vec2::new(0.0, 1.0));
    assert_eq!(s.opacity, 1.0);
    assert!(VisualState::default().is_resting());
    assert!(!s.is_resting());
}
