mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from portfolio for tests
pub use portfolio::{EMPTY_MESSAGE, FilterState, Project, Selection, Tech, filter_projects};
