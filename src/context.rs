//! Catalog context provider for Folio.
//!
//! The app root loads the project catalog once and shares its state with
//! every component via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let catalog = use_catalog();
//! if let CatalogState::Ready(catalog) = &*catalog.read() {
//!     // render projects
//! }
//! ```

use std::path::PathBuf;

use dioxus::prelude::*;
use folio_core::ProjectCatalog;

/// Loading state of the project catalog
#[derive(Clone, Debug, Default, PartialEq)]
pub enum CatalogState {
    /// Load still in flight
    #[default]
    Loading,
    /// Catalog loaded and validated
    Ready(ProjectCatalog),
    /// Load failed; holds the error message
    Failed(String),
}

/// Get the catalog file path for the application.
/// Uses the global path set from command line args.
pub fn get_projects_path() -> PathBuf {
    crate::get_projects_path()
}

/// Get the section heading override (if set via --heading).
pub fn get_heading() -> Option<String> {
    crate::get_heading()
}

/// Hook to access the catalog state from context.
pub fn use_catalog() -> Signal<CatalogState> {
    use_context::<Signal<CatalogState>>()
}
