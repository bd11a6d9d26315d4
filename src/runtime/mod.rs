//! Frame loop and the page that runs on it.

pub mod scheduler;
pub mod stage;
