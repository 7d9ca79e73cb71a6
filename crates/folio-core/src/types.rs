//! Core types for the project showcase

use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Unique identifier for a project record
///
/// Uses ULID so identifiers generated at load time are unique and sort by
/// creation. The gallery keys its cards by this id, never by display fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectId(pub Ulid);

impl ProjectId {
    /// Create a new ProjectId with current timestamp
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    /// Get the underlying ULID
    pub fn as_ulid(&self) -> &Ulid {
        &self.0
    }
}

impl Default for ProjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "project_{}", self.0)
    }
}

/// One portfolio item
///
/// Records are read-only input: the showcase never mutates them. Field names
/// on disk are camelCase (`imageUrl`, `githubUrl`, `demoUrl`). A record
/// without an `id` gets a fresh one when it is deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Stable identity used as the gallery key
    #[serde(default)]
    pub id: ProjectId,
    /// Display name, non-empty
    pub name: String,
    /// Technologies in display order
    #[serde(default)]
    pub technologies: Vec<String>,
    /// Free text shown in the detail overlay
    #[serde(default)]
    pub description: String,
    /// Thumbnail and detail image
    pub image_url: String,
    /// Source repository link, always rendered
    pub github_url: String,
    /// Live demo link, rendered only when present and non-empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
}

impl Project {
    /// Create a project with a fresh id and no technologies, description or demo
    pub fn new(
        name: impl Into<String>,
        image_url: impl Into<String>,
        github_url: impl Into<String>,
    ) -> Self {
        Self {
            id: ProjectId::new(),
            name: name.into(),
            technologies: Vec::new(),
            description: String::new(),
            image_url: image_url.into(),
            github_url: github_url.into(),
            demo_url: None,
        }
    }

    pub fn with_technologies<I, S>(mut self, technologies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.technologies = technologies.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_demo_url(mut self, demo_url: impl Into<String>) -> Self {
        self.demo_url = Some(demo_url.into());
        self
    }

    /// Alternate text for the project's image
    pub fn image_alt(&self) -> String {
        format!("Proyecto {}", self.name)
    }

    /// Demo link, treating an empty or whitespace-only value as absent
    pub fn demo_link(&self) -> Option<&str> {
        self.demo_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Project {
        Project::new("Portfolio", "/img/portfolio.png", "https://github.com/me/portfolio")
    }

    #[test]
    fn project_id_display_has_prefix() {
        let id = ProjectId::new();
        assert!(id.to_string().starts_with("project_"));
    }

    #[test]
    fn image_alt_embeds_name() {
        assert_eq!(sample().image_alt(), "Proyecto Portfolio");
    }

    #[test]
    fn demo_link_absent_by_default() {
        assert_eq!(sample().demo_link(), None);
    }

    #[test]
    fn blank_demo_link_is_absent() {
        assert_eq!(sample().with_demo_url("").demo_link(), None);
        assert_eq!(sample().with_demo_url("   ").demo_link(), None);
    }

    #[test]
    fn demo_link_present() {
        let project = sample().with_demo_url("https://me.dev/portfolio");
        assert_eq!(project.demo_link(), Some("https://me.dev/portfolio"));
    }

    #[test]
    fn deserializes_camel_case_and_generates_missing_id() {
        let json = r#"{
            "name": "Weather",
            "technologies": ["TS", "React"],
            "description": "Forecasts",
            "imageUrl": "/img/weather.png",
            "githubUrl": "https://github.com/me/weather"
        }"#;
        let a: Project = serde_json::from_str(json).unwrap();
        let b: Project = serde_json::from_str(json).unwrap();

        assert_eq!(a.name, "Weather");
        assert_eq!(a.technologies, vec!["TS", "React"]);
        assert_eq!(a.image_url, "/img/weather.png");
        assert_eq!(a.demo_url, None);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn explicit_id_is_kept() {
        let id = ProjectId::new();
        let json = format!(
            r#"{{"id": "{}", "name": "X", "imageUrl": "", "githubUrl": ""}}"#,
            id.as_ulid()
        );
        let project: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(project.id, id);
    }
}
