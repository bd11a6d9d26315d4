use super::*;
use crate::foundation::core::{Point, Size};

fn bbox() -> Rect {
    Rect::from_origin_size(Point::new(10.0, 20.0), Size::new(30.0, 40.0))
}

#[test]
fn attached_element_is_measured() {
    let env = StaticLayout::new(ViewportSize::new(800.0, 600.0)).with_box(ElementId(3), bbox());
    let m = measure_element(&env, ElementId(3)).unwrap();
    assert_eq!(m.bbox, bbox());
    assert_eq!(m.viewport, ViewportSize::new(800.0, 600.0));
}

#[test]
fn detached_element_is_skipped() {
    let mut env =
        StaticLayout::new(ViewportSize::new(800.0, 600.0)).with_box(ElementId(3), bbox());
    assert!(measure_element(&env, ElementId(4)).is_none());
    env.detach(ElementId(3));
    assert!(measure_element(&env, ElementId(3)).is_none());
}

#[test]
fn missing_viewport_is_skipped() {
    let env = StaticLayout::without_viewport().with_box(ElementId(0), bbox());
    assert!(measure_element(&env, ElementId(0)).is_none());
}

#[test]
fn measuring_is_a_pure_read() {
    let env = StaticLayout::new(ViewportSize::new(800.0, 600.0)).with_box(ElementId(1), bbox());
    assert_eq!(
        measure_element(&env, ElementId(1)),
        measure_element(&env, ElementId(1))
    );
}
