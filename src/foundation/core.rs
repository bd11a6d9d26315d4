use crate::foundation::error::{FolioError, FolioResult};

pub use kurbo::{Point, Rect, Size, Vec2};

/// Pixel displacement applied to an element's initial transform.
pub type Offset = Vec2;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ElementId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    pub num: u32,
    pub den: u32, // must be > 0
}

impl Fps {
    pub fn new(num: u32, den: u32) -> FolioResult<Self> {
        if den == 0 {
            return Err(FolioError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(FolioError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * self.frame_duration_secs()
    }

    /// First frame whose start time is at or after `secs`.
    pub fn secs_to_frames_ceil(self, secs: f64) -> u64 {
        // Absorb float noise so 1.85s at 20fps lands on frame 37, not 38.
        let frames = secs * self.as_f64();
        let rounded = frames.round();
        let frames = if (frames - rounded).abs() < 1e-9 {
            rounded
        } else {
            frames.ceil()
        };
        frames.max(0.0) as u64
    }
}

impl Default for Fps {
    fn default() -> Self {
        Self { num: 60, den: 1 }
    }
}

/// Window size as reported by the host environment.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

impl ViewportSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `None` when the size is not usable (pre-hydration zeros, NaN).
    pub fn center(self) -> Option<Point> {
        let usable = self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0;
        usable.then(|| Point::new(self.width / 2.0, self.height / 2.0))
    }
}

/// Per-axis suppression of the center offset. Serialized as `[x, y]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(from = "[bool; 2]", into = "[bool; 2]")]
pub struct AxisLock {
    pub x: bool,
    pub y: bool,
}

impl AxisLock {
    pub const NONE: Self = Self { x: false, y: false };

    pub fn new(x: bool, y: bool) -> Self {
        Self { x, y }
    }

    pub fn apply(self, raw: Vec2) -> Vec2 {
        Vec2::new(
            if self.x { 0.0 } else { raw.x },
            if self.y { 0.0 } else { raw.y },
        )
    }
}

impl From<[bool; 2]> for AxisLock {
    fn from(value: [bool; 2]) -> Self {
        Self::new(value[0], value[1])
    }
}

impl From<AxisLock> for [bool; 2] {
    fn from(value: AxisLock) -> Self {
        [value.x, value.y]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
