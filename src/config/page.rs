use std::io::Read;

use crate::{
    animation::timing::TimingTable,
    choreography::accordion::Project,
    entrance::controller::EntranceConfig,
    foundation::core::{ElementId, Fps, Point, Rect, Size, ViewportSize},
    foundation::error::{FolioError, FolioResult},
    layout::measure::StaticLayout,
};

/// Element geometry as `{left, top, width, height}` in viewport pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BoxConfig {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl BoxConfig {
    pub fn to_rect(self) -> Rect {
        Rect::from_origin_size(
            Point::new(self.left, self.top),
            Size::new(self.width, self.height),
        )
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PanelConfig {
    #[serde(flatten)]
    pub entrance: EntranceConfig,
    /// Where the host lays the panel out; absent means not attached.
    #[serde(default)]
    pub bbox: Option<BoxConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HighlightConfig {
    #[serde(default)]
    pub bbox: Option<BoxConfig>,
}

/// Everything the page hands to the choreography engine.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PageConfig {
    /// Window size; absent simulates a host that cannot report one yet.
    #[serde(default)]
    pub viewport: Option<ViewportSize>,
    #[serde(default)]
    pub fps: Fps,
    #[serde(default)]
    pub timing: TimingTable,
    #[serde(default)]
    pub panels: Vec<PanelConfig>,
    #[serde(default)]
    pub highlight: Option<HighlightConfig>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// Absolute reveal times, in seconds after page mount.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RevealPlan {
    /// Generic entrance reveal, relative to each element's measurement.
    pub entrance_reveal: f64,
    pub entrance_settle: f64,
    pub highlight_mask: Option<f64>,
    pub loading_bar_done: f64,
    pub titles: Vec<f64>,
    pub separators: Vec<f64>,
    pub skills: Vec<f64>,
}

impl PageConfig {
    pub fn from_json_str(s: &str) -> FolioResult<Self> {
        let page: Self = serde_json::from_str(s)?;
        Ok(page)
    }

    pub fn from_reader(r: impl Read) -> FolioResult<Self> {
        let page: Self = serde_json::from_reader(r)?;
        Ok(page)
    }

    pub fn validate(&self) -> FolioResult<()> {
        Fps::new(self.fps.num, self.fps.den)?;
        self.timing.validate()?;
        for (i, panel) in self.panels.iter().enumerate() {
            if panel.entrance.class_name.trim().is_empty() {
                return Err(FolioError::config(format!(
                    "panels[{i}].class_name must be non-empty"
                )));
            }
        }
        for project in &self.projects {
            project.validate()?;
        }
        let mut titles = std::collections::BTreeSet::new();
        for project in &self.projects {
            if !titles.insert(project.title.as_str()) {
                return Err(FolioError::config(format!(
                    "duplicate project title '{}'",
                    project.title
                )));
            }
        }
        Ok(())
    }

    pub fn panel_element(&self, index: usize) -> ElementId {
        ElementId(index)
    }

    /// The highlight photo is registered right after the generic panels.
    pub fn highlight_element(&self) -> ElementId {
        ElementId(self.panels.len())
    }

    /// Geometry from the config, as a finished layout pass would report it.
    pub fn layout(&self) -> StaticLayout {
        let mut layout = StaticLayout::without_viewport();
        layout.set_viewport(self.viewport);
        for (i, panel) in self.panels.iter().enumerate() {
            if let Some(bbox) = panel.bbox {
                layout.set_box(self.panel_element(i), bbox.to_rect());
            }
        }
        if let Some(bbox) = self.highlight.as_ref().and_then(|h| h.bbox) {
            layout.set_box(self.highlight_element(), bbox.to_rect());
        }
        layout
    }

    pub fn reveal_plan(&self) -> FolioResult<RevealPlan> {
        let t = &self.timing;
        let entrance = t.entrance_transition()?;
        Ok(RevealPlan {
            entrance_reveal: entrance.delay,
            entrance_settle: entrance.end(),
            highlight_mask: self.highlight.as_ref().map(|_| t.highlight.mask_delay),
            loading_bar_done: t
                .loading_bar
                .fill_duration
                .max(t.loading_bar.fade_delay + t.loading_bar.fade_duration),
            titles: t.titles.schedule(self.projects.len())?.delays().collect(),
            separators: t
                .separators
                .schedule(self.projects.len().saturating_sub(1))?
                .delays()
                .collect(),
            skills: t.skills.schedule(self.skills.len())?.delays().collect(),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/page.rs"]
mod tests;
