use crate::foundation::core::{AxisLock, Offset, Rect, Vec2, ViewportSize};

/// Displacement from an element's resting center to the viewport center.
///
/// Animating from this offset back to zero makes the element appear to emerge
/// from the middle of the screen. Locked axes contribute exactly zero.
/// Degenerate boxes, an unusable viewport, or non-finite geometry all yield
/// [`Vec2::ZERO`], so callers never see NaN.
pub fn compute_offset(bbox: Rect, viewport: ViewportSize, lock: AxisLock) -> Offset {
    let Some(center) = viewport.center() else {
        return Vec2::ZERO;
    };
    let (w, h) = (bbox.width(), bbox.height());
    if !(w.is_finite() && h.is_finite()) || w <= 0.0 || h <= 0.0 {
        return Vec2::ZERO;
    }

    let raw = center - bbox.center();
    if !(raw.x.is_finite() && raw.y.is_finite()) {
        return Vec2::ZERO;
    }
    lock.apply(raw)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/offset.rs"]
mod tests;
