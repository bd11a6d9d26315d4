use super::*;

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(60, 0).is_err());
}

#[test]
fn fps_ceil_lands_on_exact_frames() {
    let fps = Fps::new(20, 1).unwrap();
    assert_eq!(fps.secs_to_frames_ceil(1.85), 37);
    assert_eq!(fps.secs_to_frames_ceil(1.86), 38);
    assert_eq!(fps.secs_to_frames_ceil(0.0), 0);
    assert!((fps.frames_to_secs(37) - 1.85).abs() < 1e-12);
}

#[test]
fn viewport_center_requires_positive_size() {
    assert_eq!(
        ViewportSize::new(1200.0, 800.0).center(),
        Some(Point::new(600.0, 400.0))
    );
    assert_eq!(ViewportSize::new(0.0, 800.0).center(), None);
    assert_eq!(ViewportSize::new(f64::NAN, 800.0).center(), None);
}

#[test]
fn axis_lock_zeroes_locked_axes() {
    let raw = Vec2::new(12.0, -7.5);
    assert_eq!(AxisLock::NONE.apply(raw), raw);
    assert_eq!(AxisLock::new(true, false).apply(raw), Vec2::new(0.0, -7.5));
    assert_eq!(AxisLock::new(false, true).apply(raw), Vec2::new(12.0, 0.0));
    assert_eq!(AxisLock::new(true, true).apply(raw), Vec2::ZERO);
}

#[test]
fn axis_lock_serializes_as_pair() {
    let lock: AxisLock = serde_json::from_str("[true, false]").unwrap();
    assert_eq!(lock, AxisLock::new(true, false));
    assert_eq!(serde_json::to_string(&lock).unwrap(), "[true,false]");
}
