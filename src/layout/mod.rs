//! Host geometry queries and the center-offset computed from them.

pub mod measure;
pub mod offset;
