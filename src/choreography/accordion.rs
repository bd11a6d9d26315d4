//! Single-open project accordion.
//!
//! Exactly one row is open at any time; `select` opens a row and implicitly
//! closes the previous one, and never toggles. Hover is tracked separately and
//! never changes which row is open. Switching rows does not clear a stale
//! hover; only `pointer_leave` does.

use crate::{
    animation::{
        ease::Ease,
        timing::{IndicatorTiming, TimingTable},
        transition::Transition,
        visual::{Lerp, VisualState},
    },
    choreography::stagger::{RevealVariant, StaggerGroup},
    foundation::core::Vec2,
    foundation::error::{FolioError, FolioResult},
};

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Project {
    pub title: String,
    pub link: String,
    pub image: String,
}

impl Project {
    pub fn validate(&self) -> FolioResult<()> {
        if self.title.trim().is_empty() {
            return Err(FolioError::validation("project title must be non-empty"));
        }
        if !(self.link.starts_with("https://") || self.link.starts_with("http://")) {
            return Err(FolioError::validation(format!(
                "project '{}' link must be an http(s) URL",
                self.title
            )));
        }
        if self.image.trim().is_empty() {
            return Err(FolioError::validation(format!(
                "project '{}' image must be non-empty",
                self.title
            )));
        }
        Ok(())
    }
}

/// Outbound navigation: new browsing context, no opener, no referrer.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct OutboundLink {
    pub href: String,
    pub target: &'static str,
    pub rel: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct AccordionState {
    pub open_index: usize,
    pub hovered_index: Option<usize>,
}

/// Detail panel geometry; `height` is a fraction of the natural content height.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PanelFrame {
    pub height: f64,
    pub visual: VisualState,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct IndicatorFrame {
    pub offset: Vec2,
    pub opacity: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RowFrame {
    pub title: String,
    pub open: bool,
    pub title_visual: VisualState,
    pub separator: Option<VisualState>,
    pub panel: Option<PanelFrame>,
    pub indicator: IndicatorFrame,
}

#[derive(Clone, Copy, Debug)]
enum PanelMotion {
    Unmounted,
    Resting,
    Opening { since: f64, from: (f64, f64) }, // (height, scale)
    Closing { since: f64, from: (f64, f64) },
}

#[derive(Clone, Copy, Debug)]
enum IndicatorMotion {
    Rest,
    Looping { row: usize, since: f64 },
    Returning { row: usize, from: Vec2, since: f64 },
}

#[derive(Clone, Debug)]
pub struct Accordion {
    projects: Vec<Project>,
    open_index: usize,
    hovered_index: Option<usize>,
    panels: Vec<PanelMotion>,
    indicator: IndicatorMotion,
    indicator_timing: IndicatorTiming,
    height: Transition,
    scale: Transition,
    indicator_return: Transition,
    closed_scale: f64,
    titles: StaggerGroup,
    separators: StaggerGroup,
}

impl Accordion {
    pub fn new(projects: Vec<Project>, timing: &TimingTable) -> FolioResult<Self> {
        for project in &projects {
            project.validate()?;
        }
        let n = projects.len();
        let mut panels = vec![PanelMotion::Unmounted; n];
        // The first row starts open without playing its expand transition.
        if let Some(first) = panels.first_mut() {
            *first = PanelMotion::Resting;
        }
        Ok(Self {
            titles: StaggerGroup::new(
                "titles",
                timing.titles.schedule(n)?,
                RevealVariant::title(timing)?,
            ),
            separators: StaggerGroup::new(
                "separators",
                timing.separators.schedule(n.saturating_sub(1))?,
                RevealVariant::separator(timing)?,
            ),
            projects,
            open_index: 0,
            hovered_index: None,
            panels,
            indicator: IndicatorMotion::Rest,
            indicator_timing: timing.indicator.clone(),
            height: Transition::tween(timing.panel.height_duration, timing.panel.height_ease)?,
            scale: Transition::tween(timing.panel.scale_duration, timing.panel.scale_ease)?,
            indicator_return: Transition::tween(
                timing.indicator.rest_duration,
                Ease::EaseInOut,
            )?,
            closed_scale: timing.panel.closed_scale,
        })
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// `None` only for an accordion without projects.
    pub fn state(&self) -> Option<AccordionState> {
        (!self.is_empty()).then_some(AccordionState {
            open_index: self.open_index,
            hovered_index: self.hovered_index,
        })
    }

    pub fn is_open(&self, index: usize) -> bool {
        !self.is_empty() && self.open_index == index
    }

    pub fn titles(&self) -> &StaggerGroup {
        &self.titles
    }

    pub fn titles_mut(&mut self) -> &mut StaggerGroup {
        &mut self.titles
    }

    pub fn separators(&self) -> &StaggerGroup {
        &self.separators
    }

    pub fn separators_mut(&mut self) -> &mut StaggerGroup {
        &mut self.separators
    }

    pub fn link(&self, index: usize) -> Option<OutboundLink> {
        self.projects.get(index).map(|p| OutboundLink {
            href: p.link.clone(),
            target: "_blank",
            rel: "noopener noreferrer",
        })
    }

    /// Opens `index`. Returns `false` when it was already open.
    pub fn select(&mut self, index: usize, now: f64) -> FolioResult<bool> {
        self.check_index(index)?;
        if index == self.open_index {
            return Ok(false);
        }

        let previous = self.open_index;
        let closing_from = self.panel_frame(previous, now).map(|f| (f.height, f.visual.scale.x));
        self.panels[previous] = match closing_from {
            Some(from) => PanelMotion::Closing { since: now, from },
            None => PanelMotion::Unmounted,
        };

        let opening_from = self
            .panel_frame(index, now)
            .map(|f| (f.height, f.visual.scale.x))
            .unwrap_or((0.0, self.closed_scale));
        self.panels[index] = PanelMotion::Opening {
            since: now,
            from: opening_from,
        };

        self.open_index = index;
        tracing::debug!(previous, index, "accordion row selected");
        Ok(true)
    }

    /// Pointer entered the thumbnail of `index`. Ignored unless its panel is mounted.
    pub fn pointer_enter(&mut self, index: usize, now: f64) -> FolioResult<bool> {
        self.check_index(index)?;
        if self.panel_frame(index, now).is_none() || self.hovered_index == Some(index) {
            return Ok(false);
        }
        self.hovered_index = Some(index);
        self.indicator = IndicatorMotion::Looping {
            row: index,
            since: now,
        };
        Ok(true)
    }

    pub fn pointer_leave(&mut self, now: f64) -> bool {
        let Some(row) = self.hovered_index.take() else {
            return false;
        };
        let from = self.indicator_offset(row, now);
        self.indicator = IndicatorMotion::Returning {
            row,
            from,
            since: now,
        };
        true
    }

    /// Collapses finished panel transitions into their resting motion.
    pub fn advance(&mut self, now: f64) {
        for motion in &mut self.panels {
            *motion = match *motion {
                PanelMotion::Opening { since, .. }
                    if self.height.is_complete(now - since)
                        && self.scale.is_complete(now - since) =>
                {
                    PanelMotion::Resting
                }
                PanelMotion::Closing { since, .. }
                    if self.height.is_complete(now - since)
                        && self.scale.is_complete(now - since) =>
                {
                    PanelMotion::Unmounted
                }
                other => other,
            };
        }
        if let IndicatorMotion::Returning { since, .. } = self.indicator {
            if self.indicator_return.is_complete(now - since) {
                self.indicator = IndicatorMotion::Rest;
            }
        }
    }

    pub fn panel_frame(&self, index: usize, now: f64) -> Option<PanelFrame> {
        let (height, scale) = match *self.panels.get(index)? {
            PanelMotion::Unmounted => return None,
            PanelMotion::Resting => (1.0, 1.0),
            PanelMotion::Opening { since, from } => (
                <f64 as Lerp>::lerp(&from.0, &1.0, self.height.progress(now - since)),
                <f64 as Lerp>::lerp(&from.1, &1.0, self.scale.progress(now - since)),
            ),
            PanelMotion::Closing { since, from } => {
                let t = now - since;
                if self.height.is_complete(t) && self.scale.is_complete(t) {
                    return None;
                }
                (
                    <f64 as Lerp>::lerp(&from.0, &0.0, self.height.progress(t)),
                    <f64 as Lerp>::lerp(&from.1, &self.closed_scale, self.scale.progress(t)),
                )
            }
        };
        Some(PanelFrame {
            height,
            visual: VisualState::RESTING.with_scale(scale),
        })
    }

    pub fn indicator_frame(&self, index: usize, now: f64) -> IndicatorFrame {
        IndicatorFrame {
            offset: self.indicator_offset(index, now),
            opacity: if self.is_open(index) { 1.0 } else { 0.0 },
        }
    }

    pub fn frame_at(&self, now: f64) -> Vec<RowFrame> {
        self.projects
            .iter()
            .enumerate()
            .map(|(i, p)| RowFrame {
                title: p.title.clone(),
                open: self.is_open(i),
                title_visual: self
                    .titles
                    .child_visual(i, now)
                    .unwrap_or(VisualState::RESTING),
                separator: self.separators.child_visual(i, now),
                panel: self.panel_frame(i, now),
                indicator: self.indicator_frame(i, now),
            })
            .collect()
    }

    fn indicator_offset(&self, index: usize, now: f64) -> Vec2 {
        match self.indicator {
            IndicatorMotion::Looping { row, since } if row == index => {
                let amplitude = self.indicator_timing.amplitude;
                let period = self.indicator_timing.period;
                let phase = (now - since).max(0.0).rem_euclid(period) / period;
                // Keyframes 0 -> peak -> 0, eased per segment.
                let u = if phase < 0.5 {
                    Ease::EaseInOut.apply(phase * 2.0)
                } else {
                    1.0 - Ease::EaseInOut.apply((phase - 0.5) * 2.0)
                };
                Vec2::new(amplitude * u, -amplitude * u)
            }
            IndicatorMotion::Returning { row, from, since } if row == index => {
                let t = self.indicator_return.progress(now - since);
                <Vec2 as Lerp>::lerp(&from, &Vec2::ZERO, t)
            }
            _ => Vec2::ZERO,
        }
    }

    fn check_index(&self, index: usize) -> FolioResult<()> {
        if index >= self.projects.len() {
            return Err(FolioError::validation(format!(
                "project index {index} out of range (len {})",
                self.projects.len()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/choreography/accordion.rs"]
mod tests;
