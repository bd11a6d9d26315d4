//! Cooperative single-threaded frame loop.
//!
//! Two kinds of deferred work exist: frame callbacks, which run at the start of
//! the next frame (after the host has laid it out), and timers, which run on
//! the first frame whose start time is at or after their due time. Either kind
//! can be cancelled until it fires; a cancelled task is never returned.

use crate::foundation::core::{FrameIndex, Fps};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct TaskId(pub u64);

#[derive(Clone, Debug)]
struct Pending<T> {
    id: TaskId,
    due: f64,
    task: T,
}

#[derive(Clone, Debug)]
pub struct FrameScheduler<T> {
    fps: Fps,
    frame: FrameIndex,
    started: bool,
    next_id: u64,
    frame_callbacks: Vec<Pending<T>>,
    timers: Vec<Pending<T>>,
}

impl<T> FrameScheduler<T> {
    pub fn new(fps: Fps) -> Self {
        Self {
            fps,
            frame: FrameIndex(0),
            started: false,
            next_id: 0,
            frame_callbacks: Vec::new(),
            timers: Vec::new(),
        }
    }

    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Index of the most recently started frame.
    pub fn frame(&self) -> FrameIndex {
        self.frame
    }

    /// Start time of the current frame in seconds.
    pub fn now(&self) -> f64 {
        self.fps.frames_to_secs(self.frame.0)
    }

    pub fn pending_len(&self) -> usize {
        self.frame_callbacks.len() + self.timers.len()
    }

    pub fn is_idle(&self) -> bool {
        self.pending_len() == 0
    }

    /// Runs `task` at the start of the next frame.
    pub fn request_frame(&mut self, task: T) -> TaskId {
        let id = self.alloc_id();
        self.frame_callbacks.push(Pending { id, due: 0.0, task });
        id
    }

    /// Runs `task` on the first frame starting at or after `due` seconds.
    pub fn schedule_at(&mut self, due: f64, task: T) -> TaskId {
        let id = self.alloc_id();
        self.timers.push(Pending { id, due, task });
        id
    }

    /// Returns `true` if the task was still pending.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.pending_len();
        self.frame_callbacks.retain(|p| p.id != id);
        self.timers.retain(|p| p.id != id);
        self.pending_len() != before
    }

    /// Starts the next frame and drains its work: frame callbacks first, then
    /// due timers ordered by due time and then by scheduling order.
    ///
    /// The very first call starts frame 0 rather than advancing past it.
    pub fn next_frame(&mut self) -> Vec<T> {
        if self.started {
            self.frame = FrameIndex(self.frame.0 + 1);
        }
        self.started = true;

        let mut out: Vec<T> = std::mem::take(&mut self.frame_callbacks)
            .into_iter()
            .map(|p| p.task)
            .collect();

        let frame = self.frame.0;
        let fps = self.fps;
        let (mut due, rest): (Vec<_>, Vec<_>) = std::mem::take(&mut self.timers)
            .into_iter()
            .partition(|p| fps.secs_to_frames_ceil(p.due) <= frame);
        self.timers = rest;
        due.sort_by(|a, b| a.due.total_cmp(&b.due).then(a.id.cmp(&b.id)));
        out.extend(due.into_iter().map(|p| p.task));

        tracing::trace!(frame, fired = out.len(), "frame started");
        out
    }

    fn alloc_id(&mut self) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        id
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/scheduler.rs"]
mod tests;
