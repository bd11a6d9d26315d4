use super::*;

#[test]
fn delayed_tween_holds_zero_until_delay() {
    let t = Transition::tween(0.65, Ease::Linear)
        .unwrap()
        .with_delay(1.85);
    assert_eq!(t.progress(0.0), 0.0);
    assert_eq!(t.progress(1.84), 0.0);
    assert_eq!(t.progress(1.85), 0.0);
    assert!((t.progress(1.85 + 0.325) - 0.5).abs() < 1e-9);
    assert_eq!(t.progress(10.0), 1.0);
    assert!((t.end() - 2.5).abs() < 1e-12);
}

#[test]
fn zero_duration_tween_jumps_at_delay() {
    let t = Transition::tween(0.0, Ease::EaseOut)
        .unwrap()
        .with_delay(0.5);
    assert_eq!(t.progress(0.49), 0.0);
    assert_eq!(t.progress(0.5), 1.0);
}

#[test]
fn spring_transition_uses_settle_time_as_duration() {
    let spring = Spring::from_duration(0.45, 0.0).unwrap();
    let t = Transition::spring(spring).with_delay(1.7);
    assert_eq!(t.duration(), 0.45);
    assert!(!t.is_complete(2.1));
    assert!(t.is_complete(2.15 + 1e-9));
    assert_eq!(t.progress(5.0), 1.0);
}

#[test]
fn negative_duration_is_rejected() {
    assert!(Transition::tween(-0.1, Ease::Linear).is_err());
}
