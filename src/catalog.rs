//! The static content of the page.
//!
//! Everything here is fixed at compile time. [`PROJECTS`] is the catalog the
//! technology filter runs over; its order is the display order.

use crate::models::{Contact, Profile, Project, SkillGroup, Tech, TimelineEntry};

pub const PROFILE: Profile = Profile {
    eyebrow: "Front-End Developer",
    name: "Bhupinderjeet Kaur",
    subtitle_lead: "I build clean, performant UIs using ",
    subtitle_stack: "React, TypeScript, and Next.js",
    subtitle_tail: ". I care about code quality, predictable architecture, and making complex data easy to understand.",
    github_url: "https://github.com/your-username",
};

pub static PROJECTS: &[Project] = &[
    Project {
        title: "Report Rendering Platform (React + Next.js)",
        role: "Front-End Developer",
        period: "2024 – 2025",
        description: "Built a dynamic reporting UI that renders complex JSON/Jasper report definitions into pixel-perfect, printable layouts using React and Next.js.",
        tech_stack: &[Tech::React, Tech::TypeScript, Tech::NextJs],
        highlights: &[
            "Implemented dynamic component rendering (tables, images, text fields) driven by JSON schemas.",
            "Optimized performance by moving heavy transformations to build-time Node scripts.",
            "Improved DX with TypeScript types for report schemas and rendering components.",
        ],
        github_url: Some("https://github.com/your-username/report-rendering-platform"),
        live_url: None,
    },
    Project {
        title: "Microfrontend Reporting Widget",
        role: "Front-End Engineer",
        period: "2024",
        description: "Self-contained microfrontend that can be embedded into other applications to display interactive reports.",
        tech_stack: &[Tech::React, Tech::TypeScript],
        highlights: &[
            "Designed a minimal public API (`init`, `build`, `destroy`) to integrate with host apps.",
            "Used React + TypeScript to build configurable UI components.",
            "Exposed events and callbacks so host apps can react to user interactions.",
        ],
        github_url: Some("https://github.com/your-username/microfrontend-report-widget"),
        live_url: None,
    },
    Project {
        title: "Data Manipulation Practice (LeetCode-style)",
        role: "Developer",
        period: "2025",
        description: "Collection of JavaScript/TypeScript solutions focused on arrays, objects, and real-world data manipulation problems.",
        tech_stack: &[Tech::TypeScript, Tech::Testing],
        highlights: &[
            "Implemented solutions using `map`, `filter`, `reduce`, `Set`, and `Map`.",
            "Added unit tests for each problem using Jest/Vitest.",
            "Documented time/space complexity and alternative solutions.",
        ],
        github_url: Some("https://github.com/your-username/data-manipulation-challenges"),
        live_url: None,
    },
];

pub const SKILLS_PRIMARY: SkillGroup = SkillGroup {
    heading: "Core Front-End",
    skills: &[
        "React 18",
        "Next.js",
        "TypeScript",
        "JavaScript (ES6+)",
        "HTML5",
        "CSS3 / Tailwind / Sass",
    ],
};

pub const SKILLS_SECONDARY: SkillGroup = SkillGroup {
    heading: "Supporting Skills",
    skills: &[
        "Node.js",
        "REST APIs",
        "Git & GitHub",
        "Jest / Vitest",
        "Vite",
        "Figma (basic)",
    ],
};

pub const TIMELINE: &[TimelineEntry] = &[
    TimelineEntry {
        heading: "Data Manipulation & Algorithms",
        body: "Solving array/object problems in JavaScript and TypeScript, with focus on clean, readable solutions and test coverage.",
    },
    TimelineEntry {
        heading: "Next.js & Performance",
        body: "Building SSR/SSG pages, optimizing payload size, and improving TTFB & Lighthouse scores.",
    },
    TimelineEntry {
        heading: "UI/UX & Accessibility",
        body: "Following semantic HTML, keyboard navigation, aria-* attributes, and responsive layout best practices.",
    },
];

pub const CONTACT: Contact = Contact {
    headline: "Open to Front-End / ReactJS / Next.js roles (onsite or hybrid).",
    email: "kbhupinderjeet48@gmail.com",
    mailto: "mailto:kbhupinderjeet48@gmail.com",
    linkedin_url: "https://www.linkedin.com/in/bhupinderjeet-kaur/",
};

/// Section headings and subtitles, shared by every front-end.
pub mod copy {
    pub const SKILLS_TITLE: &str = "Tech Stack";
    pub const SKILLS_SUBTITLE: &str = "Primary tools I use to build production-ready front-ends.";
    pub const PROJECTS_TITLE: &str = "Featured Projects";
    pub const PROJECTS_SUBTITLE: &str =
        "Real projects that show how I use React, TypeScript, and Next.js in practice.";
    pub const FILTER_LABEL: &str = "Filter by tech:";
    pub const LEARNING_TITLE: &str = "How I’m Improving";
    pub const LEARNING_SUBTITLE: &str =
        "I’m actively practicing data structures, algorithms, and front-end architecture.";
    pub const CONTACT_TITLE: &str = "Contact";
    pub const VIEW_PROJECTS: &str = "View Projects";
    pub const GITHUB_PROFILE: &str = "GitHub Profile";
    pub const VIEW_CODE: &str = "View Code";
    pub const LIVE_DEMO: &str = "Live Demo";
}

/// Footer line: "© {year} {name}".
pub fn footer(year: i32) -> String {
    format!("© {} {}", year, PROFILE.name)
}

/// Year for the footer, from the local clock when its offset is known.
pub fn current_year() -> i32 {
    time::OffsetDateTime::now_local()
        .unwrap_or_else(|_| time::OffsetDateTime::now_utc())
        .year()
}
