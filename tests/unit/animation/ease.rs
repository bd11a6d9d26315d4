use super::*;

const ALL: [Ease; 11] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::EaseIn,
    Ease::EaseOut,
    Ease::EaseInOut,
    Ease::out_soft(),
];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b, "{ease:?}");
        assert!(b < c, "{ease:?}");
    }
}

#[test]
fn input_is_clamped() {
    assert_eq!(Ease::EaseOut.apply(-3.0), 0.0);
    assert_eq!(Ease::EaseOut.apply(7.0), 1.0);
}

#[test]
fn symmetric_bezier_passes_through_midpoint() {
    let v = Ease::EaseInOut.apply(0.5);
    assert!((v - 0.5).abs() < 1e-5, "{v}");
}

#[test]
fn linear_bezier_is_identity() {
    let curve = CubicBezier::new(1.0 / 3.0, 1.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0);
    for x in [0.1, 0.3, 0.5, 0.9] {
        assert!((curve.apply(x) - x).abs() < 1e-5);
    }
}

#[test]
fn ease_out_leads_ease_in() {
    assert!(Ease::EaseOut.apply(0.3) > 0.3);
    assert!(Ease::EaseIn.apply(0.3) < 0.3);
}
