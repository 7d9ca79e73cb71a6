//! Project catalog loading and validation
//!
//! The catalog is the data-model boundary: it is where missing ids are
//! generated and where records that would break the gallery are rejected.

use std::collections::HashSet;
use std::path::Path;

use crate::error::{FolioError, Result};
use crate::types::{Project, ProjectId};

/// Ordered, validated list of projects
///
/// Order is the file order and is never changed. Every project has a
/// non-empty name and an id unique within the catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectCatalog {
    projects: Vec<Project>,
}

impl ProjectCatalog {
    /// Validate an in-memory list of projects
    pub fn from_projects(projects: Vec<Project>) -> Result<Self> {
        let mut ids = HashSet::with_capacity(projects.len());
        let mut names = HashSet::with_capacity(projects.len());

        for (index, project) in projects.iter().enumerate() {
            if project.name.trim().is_empty() {
                return Err(FolioError::EmptyName { index });
            }
            if !ids.insert(project.id) {
                return Err(FolioError::DuplicateId(project.id));
            }
            // Names are display fields, not keys; callers own their uniqueness.
            if !names.insert(project.name.as_str()) {
                tracing::warn!(name = %project.name, index, "duplicate project name in catalog");
            }
        }

        Ok(Self { projects })
    }

    /// Parse a JSON array of project records
    pub fn from_json(json: &str) -> Result<Self> {
        let projects: Vec<Project> = serde_json::from_str(json)?;
        Self::from_projects(projects)
    }

    /// Read and parse a catalog file
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = tokio::fs::read_to_string(path).await?;
        let catalog = Self::from_json(&contents)?;
        tracing::info!(path = %path.display(), count = catalog.len(), "loaded project catalog");
        Ok(catalog)
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn into_projects(self) -> Vec<Project> {
        self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
