pub mod catalog;
pub mod filter;
pub mod models;
pub mod render;

pub use filter::{EMPTY_MESSAGE, FilterState, filter_projects};
pub use models::{Contact, Profile, Project, Selection, SkillGroup, Tech, TimelineEntry};

#[cfg(feature = "gui")]
pub mod gui;
