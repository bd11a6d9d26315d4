use crate::{
    animation::{
        timing::TimingTable,
        transition::Transition,
        visual::{Lerp, VisualState},
    },
    foundation::core::Vec2,
    foundation::error::{FolioError, FolioResult},
};

/// Reveal delays `base_delay + i * step` for `count` children.
///
/// `step` is strictly positive, so child `i` always reveals after child `i - 1`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct StaggerSchedule {
    pub base_delay: f64,
    pub step: f64,
    pub count: usize,
}

impl StaggerSchedule {
    pub fn new(base_delay: f64, step: f64, count: usize) -> FolioResult<Self> {
        if !base_delay.is_finite() || base_delay < 0.0 {
            return Err(FolioError::validation(
                "stagger base_delay must be finite and >= 0",
            ));
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(FolioError::validation("stagger step must be finite and > 0"));
        }
        Ok(Self {
            base_delay,
            step,
            count,
        })
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn delay(&self, index: usize) -> Option<f64> {
        (index < self.count).then(|| self.base_delay + (index as f64) * self.step)
    }

    pub fn delays(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.count).filter_map(|i| self.delay(i))
    }
}

/// Hidden and shown sub-states of a staggered child, and how to move between them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealVariant {
    pub hidden: VisualState,
    pub shown: VisualState,
    pub transition: Transition,
}

impl RevealVariant {
    /// Project title sliding up out of its clipping line.
    pub fn title(timing: &TimingTable) -> FolioResult<Self> {
        Ok(Self {
            hidden: VisualState::RESTING
                .with_opacity(0.0)
                .with_shift(Vec2::new(0.0, 1.0)),
            shown: VisualState::RESTING,
            transition: timing.title_transition()?,
        })
    }

    /// Row separator drawn left to right.
    pub fn separator(timing: &TimingTable) -> FolioResult<Self> {
        Ok(Self {
            hidden: VisualState::RESTING.with_scale_x(0.0),
            shown: VisualState::RESTING,
            transition: timing.separator_transition()?,
        })
    }

    /// Skill card popping in.
    pub fn skill(timing: &TimingTable) -> FolioResult<Self> {
        Ok(Self {
            hidden: VisualState::RESTING
                .with_opacity(0.0)
                .with_scale(timing.skills.hidden_scale),
            shown: VisualState::RESTING,
            transition: timing.skill_transition()?,
        })
    }
}

/// A list of siblings revealed one after another.
///
/// A child stays in its hidden sub-state until [`StaggerGroup::mark_revealed`]
/// has been called for it, so it cannot show early however often it is
/// rendered. Children must be marked in index order.
#[derive(Clone, Debug)]
pub struct StaggerGroup {
    label: &'static str,
    schedule: StaggerSchedule,
    variant: RevealVariant,
    mounted_at: f64,
    revealed: usize,
}

impl StaggerGroup {
    pub fn new(label: &'static str, schedule: StaggerSchedule, variant: RevealVariant) -> Self {
        Self {
            label,
            schedule,
            variant,
            mounted_at: 0.0,
            revealed: 0,
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn schedule(&self) -> &StaggerSchedule {
        &self.schedule
    }

    pub fn len(&self) -> usize {
        self.schedule.count
    }

    pub fn is_empty(&self) -> bool {
        self.schedule.is_empty()
    }

    /// Starts (or restarts) the group; every child returns to hidden.
    pub fn mount(&mut self, now: f64) {
        self.mounted_at = now;
        self.revealed = 0;
    }

    pub fn reveal_time(&self, index: usize) -> Option<f64> {
        self.schedule.delay(index).map(|d| self.mounted_at + d)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed
    }

    pub fn mark_revealed(&mut self, index: usize) -> FolioResult<()> {
        if index >= self.schedule.count || index != self.revealed {
            return Err(FolioError::phase(format!(
                "{} child {index} revealed out of order (next is {})",
                self.label, self.revealed
            )));
        }
        self.revealed += 1;
        tracing::trace!(group = self.label, index, "stagger child revealed");
        Ok(())
    }

    pub fn child_visual(&self, index: usize, now: f64) -> Option<VisualState> {
        let start = self.reveal_time(index)?;
        if index >= self.revealed {
            return Some(self.variant.hidden);
        }
        let t = self.variant.transition.progress(now - start);
        Some(VisualState::lerp(
            &self.variant.hidden,
            &self.variant.shown,
            t,
        ))
    }

    pub fn visuals(&self, now: f64) -> Vec<VisualState> {
        (0..self.len())
            .filter_map(|i| self.child_visual(i, now))
            .collect()
    }

    /// Whether every child has finished its transition.
    pub fn is_complete(&self, now: f64) -> bool {
        self.revealed == self.len()
            && self
                .reveal_time(self.len().saturating_sub(1))
                .is_none_or(|t| self.variant.transition.is_complete(now - t))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/choreography/stagger.rs"]
mod tests;
