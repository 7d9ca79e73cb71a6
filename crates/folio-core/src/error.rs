//! Error types for Folio

use thiserror::Error;

use crate::types::ProjectId;

/// Errors raised while loading a project catalog.
///
/// Rendering itself never fails: broken images and dead links degrade in the
/// renderer, and a missing demo link is modeled rather than reported.
#[derive(Error, Debug)]
pub enum FolioError {
    /// Catalog file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog file is not a valid JSON array of project records
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A record has an empty or whitespace-only name
    #[error("Project at index {index} has an empty name")]
    EmptyName { index: usize },

    /// Two records share the same identifier
    #[error("Duplicate project id: {0}")]
    DuplicateId(ProjectId),
}

/// Result type alias for Folio operations
pub type Result<T> = std::result::Result<T, FolioError>;
