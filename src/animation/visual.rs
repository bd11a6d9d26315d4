use crate::foundation::core::Vec2;

pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

/// Rendered appearance of one animated element.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VisualState {
    pub opacity: f64,
    pub scale: Vec2,
    pub translate: Vec2, // pixels
    pub shift: Vec2,     // fraction of the element's own size
}

impl VisualState {
    pub const RESTING: Self = Self {
        opacity: 1.0,
        scale: Vec2::new(1.0, 1.0),
        translate: Vec2::ZERO,
        shift: Vec2::ZERO,
    };

    /// Invisible and collapsed to a point, but still occupying layout.
    pub const COLLAPSED: Self = Self {
        opacity: 0.0,
        scale: Vec2::ZERO,
        translate: Vec2::ZERO,
        shift: Vec2::ZERO,
    };

    pub fn with_opacity(self, opacity: f64) -> Self {
        Self { opacity, ..self }
    }

    pub fn with_scale(self, scale: f64) -> Self {
        Self {
            scale: Vec2::new(scale, scale),
            ..self
        }
    }

    pub fn with_scale_x(self, x: f64) -> Self {
        Self {
            scale: Vec2::new(x, self.scale.y),
            ..self
        }
    }

    pub fn with_translate(self, translate: Vec2) -> Self {
        Self { translate, ..self }
    }

    pub fn with_shift(self, shift: Vec2) -> Self {
        Self { shift, ..self }
    }

    pub fn is_resting(&self) -> bool {
        *self == Self::RESTING
    }
}

impl Default for VisualState {
    fn default() -> Self {
        Self::RESTING
    }
}

impl Lerp for VisualState {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            opacity: <f64 as Lerp>::lerp(&a.opacity, &b.opacity, t),
            scale: <Vec2 as Lerp>::lerp(&a.scale, &b.scale, t),
            translate: <Vec2 as Lerp>::lerp(&a.translate, &b.translate, t),
            shift: <Vec2 as Lerp>::lerp(&a.shift, &b.shift, t),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/visual.rs"]
mod tests;
