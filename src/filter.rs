use tracing::debug;

use crate::catalog::PROJECTS;
use crate::models::{Project, Selection};

/// Shown in place of the project grid when nothing matches the selection.
pub const EMPTY_MESSAGE: &str = "No projects for this tech (yet).";

/// Projects of `catalog` matching `selection`, in catalog order.
///
/// `Selection::All` yields the whole catalog. The result is never sorted or
/// deduplicated; an empty result is a valid outcome, not an error.
pub fn filter_projects(catalog: &[Project], selection: Selection) -> Vec<&Project> {
    catalog
        .iter()
        .filter(|project| selection.matches(project))
        .collect()
}

/// Selection state of one portfolio view.
///
/// Owns nothing but the current selection and a borrow of the catalog; the
/// visible list is derived again on every call to [`FilterState::visible`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterState<'a> {
    catalog: &'a [Project],
    selection: Selection,
}

impl Default for FilterState<'static> {
    fn default() -> Self {
        Self::new(PROJECTS)
    }
}

impl<'a> FilterState<'a> {
    pub fn new(catalog: &'a [Project]) -> Self {
        Self {
            catalog,
            selection: Selection::All,
        }
    }

    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    pub fn select(&mut self, selection: Selection) {
        if self.selection != selection {
            debug!(from = %self.selection, to = %selection, "technology filter changed");
        }
        self.selection = selection;
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn is_active(&self, selection: Selection) -> bool {
        self.selection == selection
    }

    pub fn catalog(&self) -> &'a [Project] {
        self.catalog
    }

    pub fn visible(&self) -> Vec<&'a Project> {
        filter_projects(self.catalog, self.selection)
    }

    /// The fallback message, when the current selection matches nothing.
    pub fn empty_message(&self) -> Option<&'static str> {
        if self.catalog.iter().any(|project| self.selection.matches(project)) {
            None
        } else {
            Some(EMPTY_MESSAGE)
        }
    }
}
