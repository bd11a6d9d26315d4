use super::*;
use crate::{
    choreography::accordion::Project,
    config::page::{BoxConfig, HighlightConfig, PanelConfig},
    foundation::core::{Fps, Rect, ViewportSize},
    layout::measure::StaticLayout,
};

fn project(title: &str) -> Project {
    Project {
        title: title.to_string(),
        link: format!("https://{}.example", title.to_lowercase()),
        image: format!("/assets/{}.png", title.to_lowercase()),
    }
}

fn page() -> PageConfig {
    PageConfig {
        viewport: Some(ViewportSize::new(1000.0, 800.0)),
        fps: Fps::new(20, 1).unwrap(),
        panels: vec![
            PanelConfig {
                entrance: EntranceConfig::centered("bg-blue-200", AxisLock::NONE),
                bbox: Some(BoxConfig {
                    left: 0.0,
                    top: 0.0,
                    width: 200.0,
                    height: 100.0,
                }),
            },
            PanelConfig {
                entrance: EntranceConfig::new("bg-blue-200"),
                bbox: None,
            },
        ],
        highlight: Some(HighlightConfig {
            bbox: Some(BoxConfig {
                left: 600.0,
                top: 300.0,
                width: 200.0,
                height: 200.0,
            }),
        }),
        projects: vec![project("Alpha"), project("Beta"), project("Gamma")],
        skills: vec!["Rust".into(), "Go".into()],
        ..PageConfig::default()
    }
}

#[test]
fn mounting_defers_measurement_to_the_first_frame() {
    let page = page();
    let layout = page.layout();
    let mut stage = Stage::new(&page).unwrap();
    assert_eq!(stage.entrance_phase(ElementId(0)), Some(EntrancePhase::Unmeasured));
    assert_eq!(stage.highlight_phase(), Some(EntrancePhase::Unmeasured));

    stage.step(&layout).unwrap();
    assert_eq!(stage.entrance_phase(ElementId(0)), Some(EntrancePhase::Measured));
    assert_eq!(
        stage.entrance_offset(ElementId(0)),
        Some(Offset::new(400.0, 350.0))
    );
    // Not center-animated: measured without geometry, zero offset.
    assert_eq!(stage.entrance_offset(ElementId(1)), Some(Offset::ZERO));
    assert_eq!(stage.highlight_phase(), Some(EntrancePhase::Measured));
}

#[test]
fn full_session_settles_everything() {
    let page = page();
    let layout = page.layout();
    let mut stage = Stage::new(&page).unwrap();

    stage.run_until(2.0, &layout).unwrap();
    assert!(!stage.is_settled());
    assert_eq!(stage.entrance_phase(ElementId(0)), Some(EntrancePhase::Measured));

    stage.run_until(3.0, &layout).unwrap();
    assert_eq!(stage.entrance_phase(ElementId(0)), Some(EntrancePhase::Settled));
    assert_eq!(stage.entrance_phase(ElementId(1)), Some(EntrancePhase::Settled));
    assert_eq!(stage.highlight_phase(), Some(EntrancePhase::Settled));
    assert!(stage.is_settled());
    assert_eq!(stage.pending_tasks(), 0);

    let snap = stage.snapshot();
    assert!(snap.entrances.iter().all(|e| e.frame.unwrap().visual.is_resting()));
    assert!(snap.skills.iter().all(VisualState::is_resting));
    assert_eq!(snap.rows.len(), 3);
    assert_eq!(snap.loading_bar.opacity, 0.0);
}

#[test]
fn unmount_before_measurement_cancels_it() {
    let page = page();
    let layout = page.layout();
    let mut stage = Stage::new(&page).unwrap();
    let before = stage.pending_tasks();

    assert!(stage.unmount_entrance(ElementId(0)).unwrap());
    assert!(!stage.unmount_entrance(ElementId(0)).unwrap());
    assert_eq!(stage.pending_tasks(), before - 1);

    stage.run_until(3.0, &layout).unwrap();
    assert_eq!(stage.entrance_phase(ElementId(0)), None);
    assert!(stage.snapshot().entrances[0].frame.is_none());
}

#[test]
fn unmount_while_measured_cancels_the_settle() {
    let page = page();
    let layout = page.layout();
    let mut stage = Stage::new(&page).unwrap();
    stage.run_until(1.0, &layout).unwrap();
    assert!(stage.unmount_entrance(ElementId(0)).unwrap());
    stage.run_until(3.0, &layout).unwrap();
    assert_eq!(stage.entrance_phase(ElementId(0)), None);
}

#[test]
fn remount_starts_a_fresh_measurement() {
    let page = page();
    let mut layout = page.layout();
    let mut stage = Stage::new(&page).unwrap();
    stage.run_until(3.0, &layout).unwrap();
    let first = stage.entrance_offset(ElementId(0)).unwrap();

    stage.unmount_entrance(ElementId(0)).unwrap();
    layout.set_box(ElementId(0), Rect::new(400.0, 350.0, 600.0, 450.0));
    assert!(stage.mount_entrance(ElementId(0)).unwrap());
    assert!(!stage.mount_entrance(ElementId(0)).unwrap());
    assert_eq!(stage.entrance_phase(ElementId(0)), Some(EntrancePhase::Unmeasured));

    stage.step(&layout).unwrap();
    assert_ne!(stage.entrance_offset(ElementId(0)), Some(first));
    assert_eq!(stage.entrance_offset(ElementId(0)), Some(Offset::ZERO));
}

#[test]
fn axis_lock_change_before_settle_remeasures() {
    let page = page();
    let layout = page.layout();
    let mut stage = Stage::new(&page).unwrap();
    stage.step(&layout).unwrap();

    stage
        .set_axis_lock(ElementId(0), AxisLock::new(true, false))
        .unwrap();
    assert_eq!(stage.entrance_phase(ElementId(0)), Some(EntrancePhase::Unmeasured));
    stage.step(&layout).unwrap();
    assert_eq!(
        stage.entrance_offset(ElementId(0)),
        Some(Offset::new(0.0, 350.0))
    );

    stage.run_until(4.0, &layout).unwrap();
    assert_eq!(stage.entrance_phase(ElementId(0)), Some(EntrancePhase::Settled));
    stage.set_axis_lock(ElementId(0), AxisLock::NONE).unwrap();
    assert_eq!(stage.entrance_phase(ElementId(0)), Some(EntrancePhase::Settled));
}

#[test]
fn stagger_reveals_fire_in_order_on_schedule() {
    let page = page();
    let layout = page.layout();
    let mut stage = Stage::new(&page).unwrap();
    stage.run_until(1.8, &layout).unwrap();
    assert_eq!(stage.accordion().titles().revealed_count(), 0);
    assert_eq!(stage.accordion().separators().revealed_count(), 1);

    stage.run_until(1.85, &layout).unwrap();
    assert_eq!(stage.accordion().titles().revealed_count(), 1);
    assert_eq!(stage.accordion().separators().revealed_count(), 2);

    stage.run_until(2.25, &layout).unwrap();
    assert_eq!(stage.accordion().titles().revealed_count(), 3);
}

#[test]
fn accordion_passthroughs_use_stage_time() {
    let page = page();
    let layout = page.layout();
    let mut stage = Stage::new(&page).unwrap();
    stage.run_until(3.0, &layout).unwrap();

    assert!(stage.select(2).unwrap());
    assert!(!stage.select(2).unwrap());
    assert!(stage.pointer_enter(2).unwrap());
    assert_eq!(
        stage.accordion().state(),
        Some(AccordionState {
            open_index: 2,
            hovered_index: Some(2),
        })
    );
    assert!(stage.pointer_leave());
    assert!(stage.select(9).is_err());
}

#[test]
fn unknown_elements_are_rejected() {
    let mut stage = Stage::new(&page()).unwrap();
    assert!(stage.mount_entrance(ElementId(7)).is_err());
    assert!(stage.unmount_entrance(ElementId(7)).is_err());
    assert!(stage.set_axis_lock(ElementId(7), AxisLock::NONE).is_err());
}

#[test]
fn missing_viewport_degrades_to_zero_offset() {
    let mut page = page();
    page.viewport = None;
    let layout = page.layout();
    let mut stage = Stage::new(&page).unwrap();
    stage.step(&layout).unwrap();
    assert_eq!(stage.entrance_offset(ElementId(0)), Some(Offset::ZERO));
    assert_eq!(stage.entrance_phase(ElementId(0)), Some(EntrancePhase::Measured));
}

#[test]
fn run_until_rejects_non_finite_targets() {
    let page = PageConfig::default();
    let layout = page.layout();
    let mut stage = Stage::new(&page).unwrap();
    assert!(matches!(
        stage.run_until(f64::NAN, &layout),
        Err(FolioError::Validation(_))
    ));
    assert!(stage.run_until(f64::INFINITY, &layout).is_err());
    assert_eq!(stage.frame(), FrameIndex(0));
    stage.run_until(0.1, &layout).unwrap();
}
