//! Content model: blog posts, projects, and the capability set the list
//! view is generic over.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::format::optional_date;

/// Stable key for an item (used for rendering keys and de-duplication)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What the list view needs from an item.
///
/// Posts and projects are the two concrete shapes; anything with a title,
/// description, optional tags and a stable identity can be listed.
pub trait Listable: Clone + Send + Sync + 'static {
    /// Stable key
    fn identity(&self) -> Identity;

    /// Display title
    fn title(&self) -> &str;

    /// Summary or description text
    fn description(&self) -> &str;

    /// Publication date, if known
    fn date(&self) -> Option<NaiveDateTime>;

    /// Tags in display order (may be empty)
    fn tags(&self) -> &[String];

    /// Link target: a site route like `blog/<slug>` or an external URL
    fn target(&self) -> String;

    /// Project type facet
    fn project_type(&self) -> Option<ProjectType> {
        None
    }

    /// Project status facet
    fn status(&self) -> Option<ProjectStatus> {
        None
    }

    /// Render-ready projection of this item
    fn card(&self) -> ItemCard {
        ItemCard {
            identity: self.identity(),
            title: self.title().to_string(),
            description: self.description().to_string(),
            date: self.date(),
            tags: self.tags().to_vec(),
            target: self.target(),
        }
    }
}

/// Fields needed to render one card or list row.
///
/// Raw values only: date formatting and link building happen in
/// [`crate::format`] and [`crate::links`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemCard {
    pub identity: Identity,
    pub title: String,
    pub description: String,
    #[serde(with = "optional_date")]
    pub date: Option<NaiveDateTime>,
    pub tags: Vec<String>,
    pub target: String,
}

/// A blog post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub slug: String,
    pub title: String,
    #[serde(default, alias = "description")]
    pub summary: String,
    #[serde(default, with = "optional_date")]
    pub date: Option<NaiveDateTime>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub draft: bool,
}

impl Listable for Post {
    fn identity(&self) -> Identity {
        Identity::new(self.target())
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.summary
    }

    fn date(&self) -> Option<NaiveDateTime> {
        self.date
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn target(&self) -> String {
        format!("blog/{}", self.slug)
    }
}

/// Project type facet values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectType {
    Personal,
    Work,
    Client,
}

/// Project status facet values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    Active,
    Completed,
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProjectType::Personal => "Personal",
            ProjectType::Work => "Work",
            ProjectType::Client => "Client",
        };
        f.write_str(s)
    }
}

impl FromStr for ProjectType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "personal" => Ok(ProjectType::Personal),
            "work" => Ok(ProjectType::Work),
            "client" => Ok(ProjectType::Client),
            other => Err(format!("unknown project type '{}' (personal, work, client)", other)),
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProjectStatus::Active => "Active",
            ProjectStatus::Completed => "Completed",
        };
        f.write_str(s)
    }
}

impl FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(ProjectStatus::Active),
            "completed" => Ok(ProjectStatus::Completed),
            other => Err(format!("unknown project status '{}' (active, completed)", other)),
        }
    }
}

/// A portfolio project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub description: String,
    pub href: String,
    #[serde(default, with = "optional_date")]
    pub date: Option<NaiveDateTime>,
    #[serde(default, alias = "techStack")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub status: Option<ProjectStatus>,
    #[serde(default, rename = "type")]
    pub project_type: Option<ProjectType>,
}

impl Listable for Project {
    fn identity(&self) -> Identity {
        Identity::new(self.href.clone())
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn date(&self) -> Option<NaiveDateTime> {
        self.date
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn target(&self) -> String {
        self.href.clone()
    }

    fn project_type(&self) -> Option<ProjectType> {
        self.project_type
    }

    fn status(&self) -> Option<ProjectStatus> {
        self.status
    }
}

/// Sort newest first. Undated items go last; ties keep source order.
pub fn sort_newest_first<T: Listable>(items: &mut [T]) {
    items.sort_by(|a, b| b.date().cmp(&a.date()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::parse_date;

    fn post(slug: &str, date: Option<&str>) -> Post {
        Post {
            slug: slug.to_string(),
            title: slug.to_uppercase(),
            summary: String::new(),
            date: date.map(|d| parse_date(d).unwrap()),
            tags: vec![],
            draft: false,
        }
    }

    #[test]
    fn post_identity_is_route() {
        let p = post("hello-world", None);
        assert_eq!(p.identity().as_str(), "blog/hello-world");
        assert_eq!(p.target(), "blog/hello-world");
    }

    #[test]
    fn project_reads_tech_stack_as_tags() {
        let json = r#"{
            "title": "Weather Project",
            "description": "Current conditions for any city",
            "href": "https://github.com/example/weather",
            "date": "2024-11-11T14:15:00",
            "techStack": ["Python", "OpenWeather API"],
            "status": "Completed",
            "type": "Personal"
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.tags, vec!["Python", "OpenWeather API"]);
        assert_eq!(project.status(), Some(ProjectStatus::Completed));
        assert_eq!(project.project_type(), Some(ProjectType::Personal));
        assert!(project.date.is_some());
    }

    #[test]
    fn card_carries_raw_fields() {
        let p = post("rust-tips", Some("2025-01-05"));
        let card = p.card();
        assert_eq!(card.title, "RUST-TIPS");
        assert_eq!(card.target, "blog/rust-tips");
        assert_eq!(card.date, p.date);
    }

    #[test]
    fn sorts_newest_first_with_undated_last() {
        let mut items = vec![
            post("old", Some("2023-01-01")),
            post("undated", None),
            post("new", Some("2025-06-01")),
            post("mid", Some("2024-03-01")),
        ];
        sort_newest_first(&mut items);
        let slugs: Vec<_> = items.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["new", "mid", "old", "undated"]);
    }

    #[test]
    fn facet_values_parse_case_insensitively() {
        assert_eq!("work".parse::<ProjectType>().unwrap(), ProjectType::Work);
        assert_eq!("ACTIVE".parse::<ProjectStatus>().unwrap(), ProjectStatus::Active);
        assert!("archived".parse::<ProjectStatus>().is_err());
    }
}
