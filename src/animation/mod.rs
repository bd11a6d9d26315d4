//! Curves, springs and the time-parameterized visual state they drive.

pub mod ease;
pub mod spring;
pub mod timing;
pub mod transition;
pub mod visual;
