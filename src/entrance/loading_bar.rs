use crate::{
    animation::{ease::Ease, timing::TimingTable, transition::Transition, visual::VisualState},
    foundation::error::FolioResult,
};

/// Thin progress line across the top of the page: fills left to right, then fades out.
#[derive(Clone, Copy, Debug)]
pub struct LoadingBar {
    fill: Transition,
    fade: Transition,
}

impl LoadingBar {
    pub fn new(timing: &TimingTable) -> FolioResult<Self> {
        let l = &timing.loading_bar;
        Ok(Self {
            fill: Transition::tween(l.fill_duration, Ease::EaseInOut)?,
            fade: Transition::tween(l.fade_duration, Ease::EaseInOut)?.with_delay(l.fade_delay),
        })
    }

    pub fn visual_at(&self, elapsed: f64) -> VisualState {
        VisualState::RESTING
            .with_scale_x(self.fill.progress(elapsed))
            .with_opacity(1.0 - self.fade.progress(elapsed))
    }

    pub fn finished_at(&self) -> f64 {
        self.fill.end().max(self.fade.end())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/entrance/loading_bar.rs"]
mod tests;
