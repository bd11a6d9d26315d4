//! Folio Motion choreographs the entrance of a single-page portfolio.
//!
//! Everything is driven from one cooperative frame loop ([`FrameScheduler`]):
//!
//! 1. **Measure**: on the first frame after mount, each panel reads its bounding box
//!    and the viewport through a [`LayoutEnvironment`] and freezes a center offset.
//! 2. **Reveal**: panels animate from that offset, collapsed and transparent, to
//!    their resting layout after a shared delay.
//! 3. **Stagger**: project titles, separators and skill cards reveal one after
//!    another on timers.
//! 4. **Interact**: the project list is a single-open [`Accordion`] with a hover
//!    indicator on the open row.
//!
//! The whole page is wrapped by [`Stage`], which owns every controller, and is
//! configured from JSON through [`PageConfig`]. All timing constants live in one
//! [`TimingTable`].
#![forbid(unsafe_code)]

mod animation;
mod choreography;
mod config;
mod entrance;
mod foundation;
mod layout;
mod runtime;

pub use animation::ease::{CubicBezier, Ease};
pub use animation::spring::Spring;
pub use animation::timing::{
    EntranceTiming, HighlightTiming, IndicatorTiming, LoadingBarTiming, MAX_ENTRANCE_BOUNCE,
    PanelTiming, SkillsTiming, StaggerTiming, TimingTable,
};
pub use animation::transition::{Curve, Transition};
pub use animation::visual::{Lerp, VisualState};
pub use choreography::accordion::{
    Accordion, AccordionState, IndicatorFrame, OutboundLink, PanelFrame, Project, RowFrame,
};
pub use choreography::stagger::{RevealVariant, StaggerGroup, StaggerSchedule};
pub use config::page::{BoxConfig, HighlightConfig, PageConfig, PanelConfig, RevealPlan};
pub use entrance::controller::{EntranceConfig, EntranceController, EntranceFrame, EntrancePhase};
pub use entrance::highlight::{HighlightController, HighlightFrame};
pub use entrance::loading_bar::LoadingBar;
pub use foundation::core::{
    AxisLock, ElementId, Fps, FrameIndex, Offset, Point, Rect, Size, Vec2, ViewportSize,
};
pub use foundation::error::{FolioError, FolioResult};
pub use layout::measure::{LayoutEnvironment, Measurement, StaticLayout, measure_element};
pub use layout::offset::compute_offset;
pub use runtime::scheduler::{FrameScheduler, TaskId};
pub use runtime::stage::{EntranceSnapshot, Stage, StageSnapshot, StageTask};
