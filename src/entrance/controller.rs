use crate::{
    animation::{
        timing::TimingTable,
        transition::Transition,
        visual::{Lerp, VisualState},
    },
    foundation::core::{AxisLock, Offset, Vec2},
    foundation::error::{FolioError, FolioResult},
    layout::{measure::Measurement, offset::compute_offset},
};

/// Lifecycle of one entrance animation within a single mount.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum EntrancePhase {
    /// Rendered invisibly so its geometry can be read.
    Unmeasured,
    /// Offset frozen; the reveal is scheduled or playing.
    Measured,
    /// Resting; no further work for this mount.
    Settled,
}

/// What the embedding page asks of one entrance-animated element.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EntranceConfig {
    pub class_name: String,
    #[serde(default)]
    pub axis_lock: AxisLock,
    #[serde(default)]
    pub center_animation: bool,
}

impl EntranceConfig {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            axis_lock: AxisLock::NONE,
            center_animation: false,
        }
    }

    pub fn centered(class_name: impl Into<String>, axis_lock: AxisLock) -> Self {
        Self {
            class_name: class_name.into(),
            axis_lock,
            center_animation: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct EntranceFrame {
    pub phase: EntrancePhase,
    pub visual: VisualState,
    pub interactive: bool,
}

#[derive(Clone, Debug)]
pub struct EntranceController {
    config: EntranceConfig,
    transition: Transition,
    phase: EntrancePhase,
    offset: Option<Offset>,
    measured_at: Option<f64>,
}

impl EntranceController {
    pub fn new(config: EntranceConfig, timing: &TimingTable) -> FolioResult<Self> {
        Ok(Self {
            config,
            transition: timing.entrance_transition()?,
            phase: EntrancePhase::Unmeasured,
            offset: None,
            measured_at: None,
        })
    }

    pub fn config(&self) -> &EntranceConfig {
        &self.config
    }

    pub fn phase(&self) -> EntrancePhase {
        self.phase
    }

    /// `None` until the Measured edge.
    pub fn offset(&self) -> Option<Offset> {
        self.offset
    }

    /// Whether the Measured edge needs host geometry at all.
    pub fn wants_geometry(&self) -> bool {
        self.config.center_animation
    }

    /// Unmeasured -> Measured. Freezes the offset for this mount.
    ///
    /// Without center animation, or without a usable measurement, the offset
    /// is zero and the element enters by scale and opacity only.
    pub fn measure(&mut self, now: f64, measurement: Option<Measurement>) -> FolioResult<Offset> {
        if self.phase != EntrancePhase::Unmeasured {
            return Err(FolioError::phase(format!(
                "'{}' cannot be measured in phase {:?}",
                self.config.class_name, self.phase
            )));
        }

        let offset = match (self.config.center_animation, measurement) {
            (true, Some(m)) => compute_offset(m.bbox, m.viewport, self.config.axis_lock),
            _ => Vec2::ZERO,
        };

        self.offset = Some(offset);
        self.measured_at = Some(now);
        self.phase = EntrancePhase::Measured;
        tracing::debug!(
            class = %self.config.class_name,
            x = offset.x,
            y = offset.y,
            "entrance measured"
        );
        Ok(offset)
    }

    /// Time at which the reveal starts moving.
    pub fn reveal_at(&self) -> Option<f64> {
        self.measured_at.map(|t| t + self.transition.delay)
    }

    /// Time at which the reveal reaches its resting state.
    pub fn settle_at(&self) -> Option<f64> {
        self.measured_at.map(|t| t + self.transition.end())
    }

    /// Measured -> Settled, once the reveal has completed.
    pub fn settle(&mut self, now: f64) -> FolioResult<()> {
        let ready = self.settle_at().is_some_and(|t| now + 1e-9 >= t);
        if self.phase != EntrancePhase::Measured || !ready {
            return Err(FolioError::phase(format!(
                "'{}' cannot settle in phase {:?} at t={now}",
                self.config.class_name, self.phase
            )));
        }
        self.phase = EntrancePhase::Settled;
        tracing::debug!(class = %self.config.class_name, "entrance settled");
        Ok(())
    }

    /// Applies a new axis lock. Returns `true` when the controller restarted at
    /// Unmeasured and must be measured again.
    pub fn set_axis_lock(&mut self, lock: AxisLock) -> bool {
        if self.config.axis_lock == lock {
            return false;
        }
        self.config.axis_lock = lock;
        if self.phase == EntrancePhase::Settled {
            return false;
        }
        self.phase = EntrancePhase::Unmeasured;
        self.offset = None;
        self.measured_at = None;
        true
    }

    pub fn frame_at(&self, now: f64) -> EntranceFrame {
        let visual = match (self.phase, self.offset, self.measured_at) {
            (EntrancePhase::Measured, Some(offset), Some(at)) => {
                let from = VisualState::COLLAPSED.with_translate(offset);
                let t = self.transition.progress(now - at);
                VisualState::lerp(&from, &VisualState::RESTING, t)
            }
            (EntrancePhase::Settled, ..) => VisualState::RESTING,
            _ => VisualState::COLLAPSED,
        };
        EntranceFrame {
            phase: self.phase,
            visual,
            interactive: self.phase != EntrancePhase::Unmeasured,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/entrance/controller.rs"]
mod tests;
