use std::collections::BTreeMap;

use crate::foundation::core::{ElementId, Rect, ViewportSize};

/// Host-side view of layout geometry.
///
/// Implementations are queried only from frame callbacks, after the host has
/// finished layout for the frame.
pub trait LayoutEnvironment {
    /// Current window size, or `None` before the host can report one.
    fn viewport(&self) -> Option<ViewportSize>;

    /// Bounding box in viewport coordinates, or `None` while detached.
    fn bounding_box(&self, element: ElementId) -> Option<Rect>;
}

/// Geometry read for one element at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measurement {
    pub bbox: Rect,
    pub viewport: ViewportSize,
}

pub fn measure_element(env: &dyn LayoutEnvironment, element: ElementId) -> Option<Measurement> {
    let Some(bbox) = env.bounding_box(element) else {
        tracing::debug!(?element, "element not attached; skipping measurement");
        return None;
    };
    let Some(viewport) = env.viewport() else {
        tracing::debug!(?element, "viewport unavailable; skipping measurement");
        return None;
    };
    Some(Measurement { bbox, viewport })
}

/// Fixed geometry, as produced by a finished layout pass.
#[derive(Clone, Debug, Default)]
pub struct StaticLayout {
    viewport: Option<ViewportSize>,
    boxes: BTreeMap<ElementId, Rect>,
}

impl StaticLayout {
    pub fn new(viewport: ViewportSize) -> Self {
        Self {
            viewport: Some(viewport),
            boxes: BTreeMap::new(),
        }
    }

    /// A layout whose host has not reported a window size yet.
    pub fn without_viewport() -> Self {
        Self::default()
    }

    pub fn with_box(mut self, element: ElementId, bbox: Rect) -> Self {
        self.boxes.insert(element, bbox);
        self
    }

    pub fn set_box(&mut self, element: ElementId, bbox: Rect) {
        self.boxes.insert(element, bbox);
    }

    pub fn detach(&mut self, element: ElementId) {
        self.boxes.remove(&element);
    }

    pub fn set_viewport(&mut self, viewport: Option<ViewportSize>) {
        self.viewport = viewport;
    }
}

impl LayoutEnvironment for StaticLayout {
    fn viewport(&self) -> Option<ViewportSize> {
        self.viewport
    }

    fn bounding_box(&self, element: ElementId) -> Option<Rect> {
        self.boxes.get(&element).copied()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/measure.rs"]
mod tests;
