#![allow(dead_code)]

use portfolio::{Project, Selection, Tech};

/// Three projects tagged {React, TypeScript, Next.js}, {React, TypeScript}
/// and {TypeScript, Testing}. Only the second one has a live demo.
pub static FIXTURE_CATALOG: &[Project] = &[
    Project {
        title: "Report Renderer",
        role: "Front-End Developer",
        period: "2024 – 2025",
        description: "Renders report definitions into printable layouts.",
        tech_stack: &[Tech::React, Tech::TypeScript, Tech::NextJs],
        highlights: &["Dynamic component rendering", "Build-time transforms"],
        github_url: Some("https://example.com/report-renderer"),
        live_url: None,
    },
    Project {
        title: "Reporting Widget",
        role: "Front-End Engineer",
        period: "2024",
        description: "Embeddable microfrontend for interactive reports.",
        tech_stack: &[Tech::React, Tech::TypeScript],
        highlights: &["Minimal public API", "Host callbacks"],
        github_url: None,
        live_url: Some("https://example.com/widget-demo"),
    },
    Project {
        title: "Data Drills",
        role: "Developer",
        period: "2025",
        description: "Array and object manipulation exercises.",
        tech_stack: &[Tech::TypeScript, Tech::Testing],
        highlights: &["Unit tests for every exercise"],
        github_url: None,
        live_url: None,
    },
];

/// Every value the filter can take.
pub fn all_selections() -> Vec<Selection> {
    Selection::CHIPS.to_vec()
}

pub fn titles(projects: &[&Project]) -> Vec<&'static str> {
    projects.iter().map(|project| project.title).collect()
}

/// Whether `visible` appears in `catalog` in the same relative order.
pub fn is_subsequence_of(visible: &[&Project], catalog: &[Project]) -> bool {
    let mut remaining = catalog.iter();
    visible
        .iter()
        .all(|wanted| remaining.any(|project| std::ptr::eq(project, *wanted)))
}
