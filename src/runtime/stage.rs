//! Page-level choreography: owns every controller and drives them from one frame loop.
//!
//! Mounting never measures synchronously; it requests a frame callback, and the
//! measurement runs at the start of that frame against the host layout.
//! Entrance settles and stagger reveals are timers. Unmounting an element
//! cancels whatever it still had pending, so a detached element is never updated.

use crate::{
    animation::{timing::TimingTable, visual::VisualState},
    choreography::{
        accordion::{Accordion, AccordionState, RowFrame},
        stagger::{RevealVariant, StaggerGroup},
    },
    config::page::PageConfig,
    entrance::{
        controller::{EntranceConfig, EntranceController, EntranceFrame, EntrancePhase},
        highlight::{HighlightController, HighlightFrame},
        loading_bar::LoadingBar,
    },
    foundation::core::{AxisLock, ElementId, FrameIndex, Offset},
    foundation::error::{FolioError, FolioResult},
    layout::measure::{LayoutEnvironment, measure_element},
    runtime::scheduler::{FrameScheduler, TaskId},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StageTask {
    Measure(ElementId),
    Settle(ElementId),
    MeasureHighlight,
    SettleHighlight,
    RevealTitle(usize),
    RevealSeparator(usize),
    RevealSkill(usize),
}

#[derive(Clone, Debug)]
struct MountedEntrance {
    controller: EntranceController,
    pending: Option<TaskId>,
}

#[derive(Clone, Debug)]
struct EntranceSlot {
    config: EntranceConfig,
    mounted: Option<MountedEntrance>,
}

#[derive(Clone, Debug)]
struct HighlightSlot {
    element: ElementId,
    controller: HighlightController,
    pending: Option<TaskId>,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct EntranceSnapshot {
    pub element: ElementId,
    pub class_name: String,
    pub offset: Option<Offset>,
    /// `None` while unmounted.
    pub frame: Option<EntranceFrame>,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct StageSnapshot {
    pub frame: FrameIndex,
    pub time: f64,
    pub loading_bar: VisualState,
    pub entrances: Vec<EntranceSnapshot>,
    pub highlight: Option<HighlightFrame>,
    pub accordion: Option<AccordionState>,
    pub rows: Vec<RowFrame>,
    pub skills: Vec<VisualState>,
}

#[derive(Debug)]
pub struct Stage {
    timing: TimingTable,
    scheduler: FrameScheduler<StageTask>,
    entrances: Vec<EntranceSlot>,
    highlight: Option<HighlightSlot>,
    accordion: Accordion,
    skills: StaggerGroup,
    loading_bar: LoadingBar,
}

impl Stage {
    /// Builds the page and mounts every element at t = 0.
    #[tracing::instrument(skip(page), fields(panels = page.panels.len(), projects = page.projects.len()))]
    pub fn new(page: &PageConfig) -> FolioResult<Self> {
        page.validate()?;
        let timing = page.timing.clone();

        let mut stage = Self {
            scheduler: FrameScheduler::new(page.fps),
            entrances: page
                .panels
                .iter()
                .map(|p| EntranceSlot {
                    config: p.entrance.clone(),
                    mounted: None,
                })
                .collect(),
            highlight: match page.highlight {
                Some(_) => Some(HighlightSlot {
                    element: page.highlight_element(),
                    controller: HighlightController::new(&timing)?,
                    pending: None,
                }),
                None => None,
            },
            accordion: Accordion::new(page.projects.clone(), &timing)?,
            skills: StaggerGroup::new(
                "skills",
                timing.skills.schedule(page.skills.len())?,
                RevealVariant::skill(&timing)?,
            ),
            loading_bar: LoadingBar::new(&timing)?,
            timing,
        };

        for i in 0..stage.entrances.len() {
            stage.mount_entrance(ElementId(i))?;
        }
        if let Some(slot) = stage.highlight.as_mut() {
            slot.pending = Some(stage.scheduler.request_frame(StageTask::MeasureHighlight));
        }
        stage.mount_staggers();
        Ok(stage)
    }

    pub fn timing(&self) -> &TimingTable {
        &self.timing
    }

    pub fn now(&self) -> f64 {
        self.scheduler.now()
    }

    pub fn frame(&self) -> FrameIndex {
        self.scheduler.frame()
    }

    pub fn accordion(&self) -> &Accordion {
        &self.accordion
    }

    pub fn pending_tasks(&self) -> usize {
        self.scheduler.pending_len()
    }

    pub fn entrance_phase(&self, element: ElementId) -> Option<EntrancePhase> {
        self.entrances
            .get(element.0)?
            .mounted
            .as_ref()
            .map(|m| m.controller.phase())
    }

    pub fn entrance_offset(&self, element: ElementId) -> Option<Offset> {
        self.entrances
            .get(element.0)?
            .mounted
            .as_ref()
            .and_then(|m| m.controller.offset())
    }

    pub fn highlight_phase(&self) -> Option<EntrancePhase> {
        self.highlight.as_ref().map(|h| h.controller.phase())
    }

    /// Mounts (or remounts) a panel. A fresh mount always starts Unmeasured.
    /// Returns `false` if it was already mounted.
    pub fn mount_entrance(&mut self, element: ElementId) -> FolioResult<bool> {
        let slot = self
            .entrances
            .get_mut(element.0)
            .ok_or_else(|| FolioError::validation(format!("unknown element {element:?}")))?;
        if slot.mounted.is_some() {
            return Ok(false);
        }
        let controller = EntranceController::new(slot.config.clone(), &self.timing)?;
        let pending = self.scheduler.request_frame(StageTask::Measure(element));
        slot.mounted = Some(MountedEntrance {
            controller,
            pending: Some(pending),
        });
        tracing::debug!(?element, "entrance mounted");
        Ok(true)
    }

    /// Detaches a panel, cancelling its pending measurement or settle.
    /// Returns `false` if it was not mounted.
    pub fn unmount_entrance(&mut self, element: ElementId) -> FolioResult<bool> {
        let slot = self
            .entrances
            .get_mut(element.0)
            .ok_or_else(|| FolioError::validation(format!("unknown element {element:?}")))?;
        let Some(mounted) = slot.mounted.take() else {
            return Ok(false);
        };
        if let Some(id) = mounted.pending {
            self.scheduler.cancel(id);
        }
        tracing::debug!(?element, "entrance unmounted");
        Ok(true)
    }

    /// Changes a panel's axis lock; a mounted, unsettled panel is re-measured
    /// on the next frame.
    pub fn set_axis_lock(&mut self, element: ElementId, lock: AxisLock) -> FolioResult<()> {
        let slot = self
            .entrances
            .get_mut(element.0)
            .ok_or_else(|| FolioError::validation(format!("unknown element {element:?}")))?;
        slot.config.axis_lock = lock;
        let Some(mounted) = slot.mounted.as_mut() else {
            return Ok(());
        };
        if mounted.controller.set_axis_lock(lock) {
            if let Some(id) = mounted.pending.take() {
                self.scheduler.cancel(id);
            }
            mounted.pending = Some(self.scheduler.request_frame(StageTask::Measure(element)));
        }
        Ok(())
    }

    pub fn select(&mut self, index: usize) -> FolioResult<bool> {
        let now = self.now();
        self.accordion.select(index, now)
    }

    pub fn pointer_enter(&mut self, index: usize) -> FolioResult<bool> {
        let now = self.now();
        self.accordion.pointer_enter(index, now)
    }

    pub fn pointer_leave(&mut self) -> bool {
        let now = self.now();
        self.accordion.pointer_leave(now)
    }

    /// Starts the next frame and runs everything due in it.
    #[tracing::instrument(level = "trace", skip(self, env))]
    pub fn step(&mut self, env: &dyn LayoutEnvironment) -> FolioResult<FrameIndex> {
        let tasks = self.scheduler.next_frame();
        let now = self.scheduler.now();
        for task in tasks {
            self.dispatch(task, now, env)?;
        }
        self.accordion.advance(now);
        Ok(self.scheduler.frame())
    }

    /// Steps until the current frame starts at or after `secs`.
    pub fn run_until(&mut self, secs: f64, env: &dyn LayoutEnvironment) -> FolioResult<()> {
        if !secs.is_finite() {
            return Err(FolioError::validation(format!(
                "run_until target must be finite, got {secs}"
            )));
        }
        loop {
            self.step(env)?;
            if self.now() + 1e-9 >= secs {
                return Ok(());
            }
        }
    }

    /// Every mounted element is resting and nothing is pending.
    pub fn is_settled(&self) -> bool {
        let now = self.now();
        let entrances = self
            .entrances
            .iter()
            .filter_map(|s| s.mounted.as_ref())
            .all(|m| m.controller.phase() == EntrancePhase::Settled);
        let highlight = self
            .highlight
            .as_ref()
            .is_none_or(|h| h.controller.phase() == EntrancePhase::Settled);
        entrances
            && highlight
            && self.scheduler.is_idle()
            && self.skills.is_complete(now)
            && self.accordion.titles().is_complete(now)
            && self.accordion.separators().is_complete(now)
    }

    pub fn snapshot(&self) -> StageSnapshot {
        let now = self.now();
        StageSnapshot {
            frame: self.frame(),
            time: now,
            loading_bar: self.loading_bar.visual_at(now),
            entrances: self
                .entrances
                .iter()
                .enumerate()
                .map(|(i, slot)| EntranceSnapshot {
                    element: ElementId(i),
                    class_name: slot.config.class_name.clone(),
                    offset: slot.mounted.as_ref().and_then(|m| m.controller.offset()),
                    frame: slot.mounted.as_ref().map(|m| m.controller.frame_at(now)),
                })
                .collect(),
            highlight: self.highlight.as_ref().map(|h| h.controller.frame_at(now)),
            accordion: self.accordion.state(),
            rows: self.accordion.frame_at(now),
            skills: self.skills.visuals(now),
        }
    }

    fn mount_staggers(&mut self) {
        let now = self.now();

        let titles = self.accordion.titles_mut();
        titles.mount(now);
        let times: Vec<f64> = (0..titles.len()).filter_map(|i| titles.reveal_time(i)).collect();
        for (i, t) in times.into_iter().enumerate() {
            self.scheduler.schedule_at(t, StageTask::RevealTitle(i));
        }

        let separators = self.accordion.separators_mut();
        separators.mount(now);
        let times: Vec<f64> = (0..separators.len())
            .filter_map(|i| separators.reveal_time(i))
            .collect();
        for (i, t) in times.into_iter().enumerate() {
            self.scheduler.schedule_at(t, StageTask::RevealSeparator(i));
        }

        self.skills.mount(now);
        for i in 0..self.skills.len() {
            if let Some(t) = self.skills.reveal_time(i) {
                self.scheduler.schedule_at(t, StageTask::RevealSkill(i));
            }
        }
    }

    fn dispatch(
        &mut self,
        task: StageTask,
        now: f64,
        env: &dyn LayoutEnvironment,
    ) -> FolioResult<()> {
        tracing::trace!(?task, now, "dispatch");
        match task {
            StageTask::Measure(element) => {
                let Some(mounted) = self
                    .entrances
                    .get_mut(element.0)
                    .and_then(|s| s.mounted.as_mut())
                else {
                    return Ok(());
                };
                let measurement = if mounted.controller.wants_geometry() {
                    measure_element(env, element)
                } else {
                    None
                };
                mounted.controller.measure(now, measurement)?;
                mounted.pending = mounted
                    .controller
                    .settle_at()
                    .map(|t| self.scheduler.schedule_at(t, StageTask::Settle(element)));
            }
            StageTask::Settle(element) => {
                let Some(mounted) = self
                    .entrances
                    .get_mut(element.0)
                    .and_then(|s| s.mounted.as_mut())
                else {
                    return Ok(());
                };
                mounted.controller.settle(now)?;
                mounted.pending = None;
            }
            StageTask::MeasureHighlight => {
                let Some(slot) = self.highlight.as_mut() else {
                    return Ok(());
                };
                let measurement = measure_element(env, slot.element);
                slot.controller.measure(now, measurement)?;
                slot.pending = slot
                    .controller
                    .settle_at()
                    .map(|t| self.scheduler.schedule_at(t, StageTask::SettleHighlight));
            }
            StageTask::SettleHighlight => {
                if let Some(slot) = self.highlight.as_mut() {
                    slot.controller.settle(now)?;
                    slot.pending = None;
                }
            }
            StageTask::RevealTitle(i) => self.accordion.titles_mut().mark_revealed(i)?,
            StageTask::RevealSeparator(i) => self.accordion.separators_mut().mark_revealed(i)?,
            StageTask::RevealSkill(i) => self.skills.mark_revealed(i)?,
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/stage.rs"]
mod tests;
