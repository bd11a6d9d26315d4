pub mod accordion;
pub mod stagger;
