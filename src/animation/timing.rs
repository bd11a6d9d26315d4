//! Every delay, duration and curve parameter used on the page, in one table.
//!
//! Cross-component ordering (the highlight photo emerging after the generic
//! panels, separators leading titles) is checked here by [`TimingTable::validate`]
//! instead of being left to literal values at each call site.

use crate::{
    animation::{ease::Ease, spring::Spring, transition::Transition},
    choreography::stagger::StaggerSchedule,
    foundation::error::{FolioError, FolioResult},
};

/// Largest bounce accepted for entrance springs (damping ratio >= 0.75).
pub const MAX_ENTRANCE_BOUNCE: f64 = 0.25;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TimingTable {
    pub entrance: EntranceTiming,
    pub highlight: HighlightTiming,
    pub titles: StaggerTiming,
    /// Missing fields fall back to the separator defaults, not the title ones.
    #[serde(deserialize_with = "separators_with_defaults")]
    pub separators: StaggerTiming,
    pub skills: SkillsTiming,
    pub panel: PanelTiming,
    pub indicator: IndicatorTiming,
    pub loading_bar: LoadingBarTiming,
}

impl Default for TimingTable {
    fn default() -> Self {
        Self {
            entrance: EntranceTiming::default(),
            highlight: HighlightTiming::default(),
            titles: StaggerTiming::default(),
            separators: StaggerTiming::separators(),
            skills: SkillsTiming::default(),
            panel: PanelTiming::default(),
            indicator: IndicatorTiming::default(),
            loading_bar: LoadingBarTiming::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EntranceTiming {
    pub delay: f64,
    pub duration: f64,
    pub bounce: f64,
}

impl Default for EntranceTiming {
    fn default() -> Self {
        Self {
            delay: 1.7,
            duration: 0.45,
            bounce: 0.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HighlightTiming {
    pub initial_scale: f64,
    pub scale_keyframe: f64,
    pub scale_delay: f64,
    pub move_delay: f64,
    pub converge_duration: f64,
    pub mask_delay: f64,
    pub mask_duration: f64,
}

impl HighlightTiming {
    /// When both the scale and the position have converged.
    pub fn convergence_end(&self) -> f64 {
        self.scale_delay.max(self.move_delay) + self.converge_duration
    }
}

impl Default for HighlightTiming {
    fn default() -> Self {
        Self {
            initial_scale: 1.5,
            scale_keyframe: 1.25,
            scale_delay: 1.0,
            move_delay: 1.6,
            converge_duration: 0.4,
            mask_delay: 2.0,
            mask_duration: 0.5,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StaggerTiming {
    pub base_delay: f64,
    pub step: f64,
    pub duration: f64,
    pub ease: Ease,
}

impl StaggerTiming {
    /// Row separators lead the titles and draw with a plain ease-out.
    pub fn separators() -> Self {
        Self {
            base_delay: 1.65,
            ease: Ease::EaseOut,
            ..Self::default()
        }
    }

    pub fn schedule(&self, count: usize) -> FolioResult<StaggerSchedule> {
        StaggerSchedule::new(self.base_delay, self.step, count)
    }
}

impl Default for StaggerTiming {
    fn default() -> Self {
        Self {
            base_delay: 1.85,
            step: 0.2,
            duration: 0.65,
            ease: Ease::out_soft(),
        }
    }
}

#[derive(serde::Deserialize)]
struct PartialStagger {
    base_delay: Option<f64>,
    step: Option<f64>,
    duration: Option<f64>,
    ease: Option<Ease>,
}

fn separators_with_defaults<'de, D>(de: D) -> Result<StaggerTiming, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let p = <PartialStagger as serde::Deserialize>::deserialize(de)?;
    let d = StaggerTiming::separators();
    Ok(StaggerTiming {
        base_delay: p.base_delay.unwrap_or(d.base_delay),
        step: p.step.unwrap_or(d.step),
        duration: p.duration.unwrap_or(d.duration),
        ease: p.ease.unwrap_or(d.ease),
    })
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SkillsTiming {
    pub base_delay: f64,
    pub step: f64,
    pub hidden_scale: f64,
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl SkillsTiming {
    pub fn schedule(&self, count: usize) -> FolioResult<StaggerSchedule> {
        StaggerSchedule::new(self.base_delay, self.step, count)
    }
}

impl Default for SkillsTiming {
    fn default() -> Self {
        Self {
            base_delay: 1.85,
            step: 0.07,
            hidden_scale: 0.6,
            stiffness: 400.0,
            damping: 20.0,
            mass: 1.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PanelTiming {
    pub height_duration: f64,
    pub height_ease: Ease,
    pub scale_duration: f64,
    pub scale_ease: Ease,
    pub closed_scale: f64,
}

impl Default for PanelTiming {
    fn default() -> Self {
        Self {
            height_duration: 0.4,
            height_ease: Ease::out_soft(),
            scale_duration: 0.3,
            scale_ease: Ease::EaseOut,
            closed_scale: 0.95,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct IndicatorTiming {
    pub amplitude: f64,
    pub period: f64,
    pub rest_duration: f64,
}

impl Default for IndicatorTiming {
    fn default() -> Self {
        Self {
            amplitude: 5.0,
            period: 1.6,
            rest_duration: 0.3,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoadingBarTiming {
    pub fill_duration: f64,
    pub fade_delay: f64,
    pub fade_duration: f64,
}

impl Default for LoadingBarTiming {
    fn default() -> Self {
        Self {
            fill_duration: 1.0,
            fade_delay: 1.0,
            fade_duration: 0.5,
        }
    }
}

impl TimingTable {
    pub fn validate(&self) -> FolioResult<()> {
        let e = &self.entrance;
        non_negative("entrance.delay", e.delay)?;
        positive("entrance.duration", e.duration)?;
        if !e.bounce.is_finite() || !(0.0..=MAX_ENTRANCE_BOUNCE).contains(&e.bounce) {
            return Err(FolioError::config(format!(
                "entrance.bounce must be in [0, {MAX_ENTRANCE_BOUNCE}]"
            )));
        }

        let h = &self.highlight;
        positive("highlight.initial_scale", h.initial_scale)?;
        positive("highlight.scale_keyframe", h.scale_keyframe)?;
        non_negative("highlight.scale_delay", h.scale_delay)?;
        non_negative("highlight.move_delay", h.move_delay)?;
        non_negative("highlight.converge_duration", h.converge_duration)?;
        non_negative("highlight.mask_delay", h.mask_delay)?;
        non_negative("highlight.mask_duration", h.mask_duration)?;
        if h.mask_delay <= e.delay {
            return Err(FolioError::config(
                "highlight.mask_delay must be later than entrance.delay",
            ));
        }
        if h.mask_delay + 1e-9 < h.convergence_end() {
            return Err(FolioError::config(
                "highlight.mask_delay must not start before scale/position convergence ends",
            ));
        }

        for (name, s) in [("titles", &self.titles), ("separators", &self.separators)] {
            non_negative(&format!("{name}.base_delay"), s.base_delay)?;
            positive(&format!("{name}.step"), s.step)?;
            non_negative(&format!("{name}.duration"), s.duration)?;
        }

        let k = &self.skills;
        non_negative("skills.base_delay", k.base_delay)?;
        positive("skills.step", k.step)?;
        non_negative("skills.hidden_scale", k.hidden_scale)?;
        self.skill_transition()?;

        non_negative("panel.height_duration", self.panel.height_duration)?;
        non_negative("panel.scale_duration", self.panel.scale_duration)?;
        non_negative("panel.closed_scale", self.panel.closed_scale)?;

        non_negative("indicator.amplitude", self.indicator.amplitude)?;
        positive("indicator.period", self.indicator.period)?;
        non_negative("indicator.rest_duration", self.indicator.rest_duration)?;

        let l = &self.loading_bar;
        non_negative("loading_bar.fill_duration", l.fill_duration)?;
        non_negative("loading_bar.fade_delay", l.fade_delay)?;
        non_negative("loading_bar.fade_duration", l.fade_duration)?;
        Ok(())
    }

    /// Shared reveal for every generic entrance controller.
    pub fn entrance_transition(&self) -> FolioResult<Transition> {
        let spring = Spring::from_duration(self.entrance.duration, self.entrance.bounce)?;
        Ok(Transition::spring(spring).with_delay(self.entrance.delay))
    }

    pub fn title_transition(&self) -> FolioResult<Transition> {
        Transition::tween(self.titles.duration, self.titles.ease)
    }

    pub fn separator_transition(&self) -> FolioResult<Transition> {
        Transition::tween(self.separators.duration, self.separators.ease)
    }

    pub fn skill_transition(&self) -> FolioResult<Transition> {
        let k = &self.skills;
        Ok(Transition::spring(Spring::from_physics(
            k.stiffness,
            k.damping,
            k.mass,
        )?))
    }
}

fn non_negative(name: &str, v: f64) -> FolioResult<()> {
    if !v.is_finite() || v < 0.0 {
        return Err(FolioError::config(format!(
            "{name} must be finite and >= 0"
        )));
    }
    Ok(())
}

fn positive(name: &str, v: f64) -> FolioResult<()> {
    if !v.is_finite() || v <= 0.0 {
        return Err(FolioError::config(format!("{name} must be finite and > 0")));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timing.rs"]
mod tests;
