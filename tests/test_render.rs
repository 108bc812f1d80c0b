//! Tests for the HTML page export and the terminal listing.
//!
//! Fixture projects avoid characters the HTML escaper rewrites, so field
//! values can be searched for verbatim in the output.

mod common;

use common::*;
use portfolio::catalog::{CONTACT, PROFILE, PROJECTS, SKILLS_PRIMARY, SKILLS_SECONDARY};
use portfolio::render::{render_json, render_list, render_page, write_page};

/// Text of the `<article>` card whose heading is `title`.
fn card_for<'a>(html: &'a str, title: &str) -> &'a str {
    let heading = format!("<h3>{}</h3>", title);
    let at = html.find(&heading).expect("card heading present");
    let start = html[..at].rfind("<article").expect("card start");
    let end = at + html[at..].find("</article>").expect("card end");
    &html[start..end]
}

#[test]
fn test_every_project_field_appears_in_its_card() -> anyhow::Result<()> {
    let state = FilterState::new(FIXTURE_CATALOG);
    let html = render_page(&state, 2025)?;

    for project in FIXTURE_CATALOG.iter() {
        let card = card_for(&html, project.title);
        assert!(card.contains(project.role));
        assert!(card.contains(project.period));
        assert!(card.contains(project.description));
        for tech in project.tech_stack {
            assert!(card.contains(&format!(">{}</span>", tech)), "{} tag missing", tech);
        }
        for highlight in project.highlights {
            assert!(card.contains(&format!("<li>{}</li>", highlight)));
        }
    }
    Ok(())
}

#[test]
fn test_optional_links_render_only_when_present() -> anyhow::Result<()> {
    let state = FilterState::new(FIXTURE_CATALOG);
    let html = render_page(&state, 2025)?;

    let renderer = card_for(&html, "Report Renderer");
    assert!(renderer.contains("href=\"https://example.com/report-renderer\""));
    assert!(renderer.contains("View Code"));
    assert!(!renderer.contains("Live Demo"));

    let widget = card_for(&html, "Reporting Widget");
    assert!(widget.contains("href=\"https://example.com/widget-demo\""));
    assert!(widget.contains("Live Demo"));
    assert!(!widget.contains("View Code"));

    let drills = card_for(&html, "Data Drills");
    assert!(!drills.contains("card-footer"));
    Ok(())
}

#[test]
fn test_page_contains_only_visible_projects() -> anyhow::Result<()> {
    let state = FilterState::new(FIXTURE_CATALOG).with_selection(Selection::Tech(Tech::Testing));
    let html = render_page(&state, 2025)?;

    assert!(html.contains("<h3>Data Drills</h3>"));
    assert!(!html.contains("<h3>Report Renderer</h3>"));
    assert!(!html.contains("<h3>Reporting Widget</h3>"));
    assert!(!html.contains(EMPTY_MESSAGE));
    assert!(html.contains("filter-chip filter-chip--active\" data-tech=\"Testing\""));
    assert_eq!(html.matches("filter-chip--active").count(), 1);
    Ok(())
}

#[test]
fn test_empty_selection_renders_fallback() -> anyhow::Result<()> {
    let state = FilterState::new(FIXTURE_CATALOG).with_selection(Selection::Tech(Tech::Aws));
    let html = render_page(&state, 2025)?;

    assert!(!html.contains("<article"));
    assert!(html.contains(EMPTY_MESSAGE));
    Ok(())
}

#[test]
fn test_static_sections_and_links_are_verbatim() -> anyhow::Result<()> {
    let html = render_page(&FilterState::default(), 2031)?;

    assert!(html.contains(&format!("<h1>{}</h1>", PROFILE.name)));
    assert!(html.contains(&format!("href=\"{}\"", PROFILE.github_url)));
    assert!(html.contains(&format!("href=\"{}\"", CONTACT.mailto)));
    assert!(html.contains(&format!("href=\"{}\"", CONTACT.linkedin_url)));
    for project in PROJECTS.iter() {
        assert!(html.contains(&format!("<h3>{}</h3>", project.title)));
        if let Some(url) = project.github_url {
            assert!(html.contains(&format!("href=\"{}\"", url)));
        }
    }
    for skill in ["React 18", "HTML5", "Vite"] {
        assert!(html.contains(&format!(">{}</span>", skill)));
    }
    assert!(html.contains(&format!("<h3>{}</h3>", SKILLS_PRIMARY.heading)));
    assert!(html.contains(&format!("<h3>{}</h3>", SKILLS_SECONDARY.heading)));
    assert!(html.contains("© 2031 Bhupinderjeet Kaur"));
    Ok(())
}

#[test]
fn test_write_page_creates_file() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let path = dir.path().join("portfolio.html");
    let state = FilterState::default().with_selection(Selection::Tech(Tech::NextJs));

    write_page(&path, &state, 2025)?;

    let written = std::fs::read_to_string(&path)?;
    assert_eq!(written, render_page(&state, 2025)?);
    assert!(written.starts_with("<!doctype html>"));
    Ok(())
}

#[test]
fn test_write_page_reports_missing_directory() {
    let dir = tempfile::TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("missing").join("portfolio.html");

    let result = write_page(&path, &FilterState::default(), 2025);

    assert!(result.is_err(), "Should fail to write into a missing directory");
    let error_msg = format!("{:#}", result.unwrap_err());
    assert!(error_msg.contains("Failed to write page"), "got: {}", error_msg);
}

#[test]
fn test_list_prints_visible_projects() {
    let state = FilterState::new(FIXTURE_CATALOG).with_selection(Selection::Tech(Tech::React));
    let listing = render_list(&state);

    assert!(listing.starts_with("Featured Projects [React]"));
    assert!(listing.contains("Report Renderer"));
    assert!(listing.contains("Front-End Engineer • 2024"));
    assert!(listing.contains("Live Demo: https://example.com/widget-demo"));
    assert!(!listing.contains("Data Drills"));
}

#[test]
fn test_json_lists_visible_projects() -> anyhow::Result<()> {
    let state = FilterState::new(FIXTURE_CATALOG).with_selection(Selection::Tech(Tech::NextJs));
    let value: serde_json::Value = serde_json::from_str(&render_json(&state)?)?;

    let projects = value.as_array().expect("array of projects");
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0]["title"], "Report Renderer");
    assert_eq!(projects[0]["tech_stack"][2], "Next.js");
    assert!(projects[0].get("live_url").is_none());
    Ok(())
}
