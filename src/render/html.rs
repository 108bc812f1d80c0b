use std::fs;
use std::path::Path;

use anyhow::Context;
use askama::Template;
use tracing::info;

use crate::catalog::{self, CONTACT, PROFILE, SKILLS_PRIMARY, SKILLS_SECONDARY, TIMELINE, copy};
use crate::filter::FilterState;
use crate::models::{Contact, Profile, Project, Selection, SkillGroup, TimelineEntry};

/// One button of the filter row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chip {
    pub label: &'static str,
    pub active: bool,
}

impl Chip {
    fn row(state: &FilterState<'_>) -> Vec<Chip> {
        Selection::CHIPS
            .into_iter()
            .map(|selection| Chip {
                label: selection.label(),
                active: state.is_active(selection),
            })
            .collect()
    }
}

/// The whole page with the visible projects resolved for one selection.
#[derive(Template)]
#[template(path = "page.html")]
pub struct PageTemplate<'a> {
    pub profile: &'a Profile,
    pub primary: &'a SkillGroup,
    pub secondary: &'a SkillGroup,
    pub chips: Vec<Chip>,
    pub projects: Vec<&'a Project>,
    pub empty_message: Option<&'static str>,
    pub timeline: &'a [TimelineEntry],
    pub contact: &'a Contact,
    pub footer: String,
}

impl<'a> PageTemplate<'a> {
    pub fn new(state: &FilterState<'a>, year: i32) -> Self {
        Self {
            profile: &PROFILE,
            primary: &SKILLS_PRIMARY,
            secondary: &SKILLS_SECONDARY,
            chips: Chip::row(state),
            projects: state.visible(),
            empty_message: state.empty_message(),
            timeline: TIMELINE,
            contact: &CONTACT,
            footer: catalog::footer(year),
        }
    }
}

pub fn render_page(state: &FilterState<'_>, year: i32) -> anyhow::Result<String> {
    let page = PageTemplate::new(state, year);
    page.render().context("Failed to render portfolio page")
}

/// Render the page for `state` and write it to `path`, replacing any existing file.
pub fn write_page<P: AsRef<Path>>(path: P, state: &FilterState<'_>, year: i32) -> anyhow::Result<()> {
    let path = path.as_ref();
    let html = render_page(state, year)?;
    fs::write(path, html).with_context(|| format!("Failed to write page to {:?}", path))?;
    info!(path = %path.display(), selection = %state.selection(), "exported portfolio page");
    Ok(())
}
