use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Technology label attached to a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Tech {
    React,
    TypeScript,
    #[serde(rename = "Next.js")]
    NextJs,
    #[serde(rename = "Node.js")]
    NodeJs,
    #[serde(rename = "AWS")]
    Aws,
    Testing,
}

impl Tech {
    pub const ALL: [Tech; 6] = [
        Tech::React,
        Tech::TypeScript,
        Tech::NextJs,
        Tech::NodeJs,
        Tech::Aws,
        Tech::Testing,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tech::React => "React",
            Tech::TypeScript => "TypeScript",
            Tech::NextJs => "Next.js",
            Tech::NodeJs => "Node.js",
            Tech::Aws => "AWS",
            Tech::Testing => "Testing",
        }
    }
}

impl fmt::Display for Tech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The value of the technology filter: everything, or a single tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Selection {
    #[default]
    All,
    Tech(Tech),
}

impl Selection {
    /// Chip order of the filter row.
    pub const CHIPS: [Selection; 7] = [
        Selection::All,
        Selection::Tech(Tech::React),
        Selection::Tech(Tech::TypeScript),
        Selection::Tech(Tech::NextJs),
        Selection::Tech(Tech::NodeJs),
        Selection::Tech(Tech::Aws),
        Selection::Tech(Tech::Testing),
    ];

    pub fn label(self) -> &'static str {
        match self {
            Selection::All => "All",
            Selection::Tech(tech) => tech.label(),
        }
    }

    pub fn matches(self, project: &Project) -> bool {
        match self {
            Selection::All => true,
            Selection::Tech(tech) => project.tech_stack.contains(&tech),
        }
    }
}

impl From<Tech> for Selection {
    fn from(tech: Tech) -> Self {
        Selection::Tech(tech)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Folds case and drops separators so "next.js", "Next JS" and "nextjs" compare equal.
fn normalize(label: &str) -> String {
    label
        .chars()
        .filter(|c| !matches!(c, '.' | '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for Selection {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s.trim());
        Selection::CHIPS
            .into_iter()
            .find(|chip| normalize(chip.label()) == wanted)
            .ok_or_else(|| {
                let valid: Vec<&str> = Selection::CHIPS.iter().map(|chip| chip.label()).collect();
                anyhow::anyhow!("Unknown technology {:?}, expected one of: {}", s, valid.join(", "))
            })
    }
}

impl FromStr for Tech {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<Selection>()? {
            Selection::Tech(tech) => Ok(tech),
            Selection::All => Err(anyhow::anyhow!("\"All\" is not a technology")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    pub title: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub tech_stack: &'static [Tech],
    pub highlights: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<&'static str>,
}

impl Project {
    /// "role • period" line shown under the card title.
    pub fn meta(&self) -> String {
        format!("{} • {}", self.role, self.period)
    }

    pub fn has_links(&self) -> bool {
        self.github_url.is_some() || self.live_url.is_some()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub eyebrow: &'static str,
    pub name: &'static str,
    /// Subtitle split around the highlighted stack phrase.
    pub subtitle_lead: &'static str,
    pub subtitle_stack: &'static str,
    pub subtitle_tail: &'static str,
    pub github_url: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillGroup {
    pub heading: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct TimelineEntry {
    pub heading: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Contact {
    pub headline: &'static str,
    pub email: &'static str,
    /// `mailto:` link for `email`.
    pub mailto: &'static str,
    pub linkedin_url: &'static str,
}
