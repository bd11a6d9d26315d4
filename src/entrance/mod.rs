//! Per-element entrance state machines.

pub mod controller;
pub mod highlight;
pub mod loading_bar;
