//! The photo panel: a center-offset entrance with its own two-stage timeline.
//!
//! Stage one converges scale and position from a displaced, enlarged state.
//! Stage two fades in the content mask, strictly after the generic panels have
//! begun revealing, so backgrounds appear first and the photo emerges last.

use crate::{
    animation::{
        ease::Ease,
        timing::{HighlightTiming, TimingTable},
        transition::Transition,
        visual::{Lerp, VisualState},
    },
    entrance::controller::EntrancePhase,
    foundation::core::{AxisLock, Offset, Vec2},
    foundation::error::{FolioError, FolioResult},
    layout::{measure::Measurement, offset::compute_offset},
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct HighlightFrame {
    pub phase: EntrancePhase,
    pub visual: VisualState,
    /// Visibility of the photo inside the panel, `0..=1`.
    pub mask: f64,
    /// `false` while the placeholder is unmeasured.
    pub interactive: bool,
}

#[derive(Clone, Debug)]
pub struct HighlightController {
    timing: HighlightTiming,
    scale: Transition,
    position: Transition,
    mask: Transition,
    phase: EntrancePhase,
    offset: Option<Offset>,
    measured_at: Option<f64>,
}

impl HighlightController {
    pub fn new(timing: &TimingTable) -> FolioResult<Self> {
        let h = timing.highlight.clone();
        Ok(Self {
            scale: Transition::tween(h.converge_duration, Ease::EaseOut)?.with_delay(h.scale_delay),
            position: Transition::tween(h.converge_duration, Ease::EaseOut)?
                .with_delay(h.move_delay),
            mask: Transition::tween(h.mask_duration, Ease::EaseOut)?.with_delay(h.mask_delay),
            timing: h,
            phase: EntrancePhase::Unmeasured,
            offset: None,
            measured_at: None,
        })
    }

    pub fn phase(&self) -> EntrancePhase {
        self.phase
    }

    pub fn offset(&self) -> Option<Offset> {
        self.offset
    }

    pub fn measure(&mut self, now: f64, measurement: Option<Measurement>) -> FolioResult<Offset> {
        if self.phase != EntrancePhase::Unmeasured {
            return Err(FolioError::phase(format!(
                "highlight cannot be measured in phase {:?}",
                self.phase
            )));
        }
        let offset = measurement
            .map(|m| compute_offset(m.bbox, m.viewport, AxisLock::NONE))
            .unwrap_or(Vec2::ZERO);
        self.offset = Some(offset);
        self.measured_at = Some(now);
        self.phase = EntrancePhase::Measured;
        tracing::debug!(x = offset.x, y = offset.y, "highlight measured");
        Ok(offset)
    }

    /// Time at which the content mask starts to open.
    pub fn mask_at(&self) -> Option<f64> {
        self.measured_at.map(|t| t + self.mask.delay)
    }

    pub fn settle_at(&self) -> Option<f64> {
        self.measured_at.map(|t| t + self.mask.end())
    }

    pub fn settle(&mut self, now: f64) -> FolioResult<()> {
        let ready = self.settle_at().is_some_and(|t| now + 1e-9 >= t);
        if self.phase != EntrancePhase::Measured || !ready {
            return Err(FolioError::phase(format!(
                "highlight cannot settle in phase {:?} at t={now}",
                self.phase
            )));
        }
        self.phase = EntrancePhase::Settled;
        tracing::debug!("highlight settled");
        Ok(())
    }

    pub fn frame_at(&self, now: f64) -> HighlightFrame {
        match (self.phase, self.offset, self.measured_at) {
            (EntrancePhase::Measured, Some(offset), Some(at)) => {
                let t = now - at;
                HighlightFrame {
                    phase: self.phase,
                    visual: self.converging(offset, t),
                    mask: self.mask.progress(t),
                    interactive: true,
                }
            }
            (EntrancePhase::Settled, ..) => HighlightFrame {
                phase: self.phase,
                visual: VisualState::RESTING,
                mask: 1.0,
                interactive: true,
            },
            _ => HighlightFrame {
                phase: self.phase,
                visual: VisualState::RESTING.with_opacity(0.0),
                mask: 0.0,
                interactive: false,
            },
        }
    }

    fn converging(&self, offset: Offset, t: f64) -> VisualState {
        let h = &self.timing;
        let scale = if t < self.scale.delay {
            h.initial_scale
        } else {
            <f64 as Lerp>::lerp(&h.scale_keyframe, &1.0, self.scale.progress(t))
        };
        let translate = <Vec2 as Lerp>::lerp(&offset, &Vec2::ZERO, self.position.progress(t));
        VisualState::RESTING
            .with_scale(scale)
            .with_translate(translate)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/entrance/highlight.rs"]
mod tests;
