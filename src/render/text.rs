use std::fmt::Write;

use anyhow::Context;

use crate::catalog::copy;
use crate::filter::FilterState;
use crate::models::Project;

/// Plain-text listing of the visible projects, one block per project.
pub fn render_list(state: &FilterState<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} [{}]", copy::PROJECTS_TITLE, state.selection());

    if let Some(message) = state.empty_message() {
        let _ = writeln!(out, "\n{}", message);
        return out;
    }

    for project in state.visible() {
        out.push('\n');
        write_project(&mut out, project);
    }
    out
}

fn write_project(out: &mut String, project: &Project) {
    let tags: Vec<&str> = project.tech_stack.iter().map(|tech| tech.label()).collect();
    let _ = writeln!(out, "{}", project.title);
    let _ = writeln!(out, "  {}", project.meta());
    let _ = writeln!(out, "  {}", project.description);
    let _ = writeln!(out, "  Tech: {}", tags.join(", "));
    for highlight in project.highlights {
        let _ = writeln!(out, "  - {}", highlight);
    }
    if let Some(url) = project.github_url {
        let _ = writeln!(out, "  {}: {}", copy::VIEW_CODE, url);
    }
    if let Some(url) = project.live_url {
        let _ = writeln!(out, "  {}: {}", copy::LIVE_DEMO, url);
    }
}

/// The visible projects as a pretty-printed JSON array.
pub fn render_json(state: &FilterState<'_>) -> anyhow::Result<String> {
    serde_json::to_string_pretty(&state.visible()).context("Failed to serialize projects")
}
