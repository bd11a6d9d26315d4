use super::*;
use crate::animation::ease::CubicBezier;

#[test]
fn defaults_match_the_page_and_validate() {
    let t = TimingTable::default();
    t.validate().unwrap();
    assert_eq!(t.entrance.delay, 1.7);
    assert_eq!(t.titles.base_delay, 1.85);
    assert_eq!(t.separators.base_delay, 1.65);
    assert_eq!(t.skills.step, 0.07);
    assert!(t.highlight.mask_delay > t.entrance.delay);
}

#[test]
fn highlight_mask_must_follow_generic_reveal() {
    let mut t = TimingTable::default();
    t.highlight.mask_delay = t.entrance.delay;
    let err = t.validate().unwrap_err();
    assert!(err.to_string().contains("mask_delay"));
}

#[test]
fn highlight_mask_must_wait_for_convergence() {
    let mut t = TimingTable::default();
    t.highlight.mask_delay = 1.9;
    assert!(t.validate().is_err());
}

#[test]
fn entrance_bounce_is_bounded() {
    let mut t = TimingTable::default();
    t.entrance.bounce = 0.5;
    assert!(t.validate().is_err());
    t.entrance.bounce = 0.2;
    t.validate().unwrap();
}

#[test]
fn negative_or_nan_values_are_rejected() {
    let mut t = TimingTable::default();
    t.titles.step = -0.1;
    assert!(t.validate().is_err());

    let mut t = TimingTable::default();
    t.loading_bar.fade_duration = f64::NAN;
    assert!(t.validate().is_err());
}

#[test]
fn partial_json_keeps_defaults() {
    let t: TimingTable =
        serde_json::from_str(r#"{ "entrance": { "delay": 1.2 }, "titles": { "step": 0.15 } }"#)
            .unwrap();
    assert_eq!(t.entrance.delay, 1.2);
    assert_eq!(t.entrance.duration, 0.45);
    assert_eq!(t.titles.step, 0.15);
    assert_eq!(t.titles.base_delay, 1.85);
    assert_eq!(t.separators.base_delay, 1.65);
}

#[test]
fn partial_separator_json_keeps_separator_defaults() {
    let t: TimingTable =
        serde_json::from_str(r#"{ "separators": { "step": 0.3 } }"#).unwrap();
    assert_eq!(t.separators.step, 0.3);
    assert_eq!(t.separators.base_delay, 1.65);
    assert_eq!(t.separators.ease, Ease::EaseOut);
    assert_eq!(t.titles.ease, Ease::out_soft());
}

#[test]
fn zero_stagger_step_is_rejected() {
    let mut t = TimingTable::default();
    t.titles.step = 0.0;
    assert!(t.validate().is_err());

    let mut t = TimingTable::default();
    t.skills.step = 0.0;
    assert!(t.validate().is_err());
}

#[test]
fn easings_are_configurable() {
    let t: TimingTable = serde_json::from_str(
        r#"{
            "titles": { "ease": "in_out_cubic" },
            "panel": { "height_ease": "linear",
                       "scale_ease": { "bezier": { "x1": 0.4, "y1": 0.0, "x2": 0.2, "y2": 1.0 } } }
        }"#,
    )
    .unwrap();
    t.validate().unwrap();
    assert_eq!(t.titles.ease, Ease::InOutCubic);
    assert_eq!(t.panel.height_ease, Ease::Linear);
    assert_eq!(
        t.panel.scale_ease,
        Ease::Bezier(CubicBezier::new(0.4, 0.0, 0.2, 1.0))
    );

    let title = t.title_transition().unwrap();
    assert_eq!(title.progress(0.325), Ease::InOutCubic.apply(0.5));
}

#[test]
fn entrance_transition_is_delayed_spring() {
    let t = TimingTable::default();
    let tr = t.entrance_transition().unwrap();
    assert_eq!(tr.delay, 1.7);
    assert_eq!(tr.duration(), 0.45);
    assert_eq!(tr.progress(1.7), 0.0);
    assert_eq!(tr.progress(2.2), 1.0);
}
