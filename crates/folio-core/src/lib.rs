//! Folio Core Library
//!
//! Data model and view state behind the portfolio project showcase.
//!
//! ## Overview
//!
//! The showcase renders a grid of project cards and opens a detail overlay
//! when a card is clicked. Everything that can be decided without a renderer
//! lives here:
//!
//! - [`Project`] records and the [`ProjectCatalog`] that loads and validates them
//! - [`Selection`], the `Closed | Open(project)` overlay state
//! - [`Reveal`], the two-state entrance presentation driven by viewport visibility
//! - [`DetailView`], the overlay's view model (technologies line, links)
//!
//! ## Quick Start
//!
//! ```ignore
//! use folio_core::{ProjectCatalog, Selection};
//!
//! #[tokio::main]
//! async fn main() -> folio_core::Result<()> {
//!     let catalog = ProjectCatalog::load("projects.json").await?;
//!
//!     let mut selection = Selection::default();
//!     if let Some(first) = catalog.projects().first() {
//!         selection.select(first.clone());
//!     }
//!     selection.dismiss();
//!
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod detail;
pub mod error;
pub mod reveal;
pub mod selection;
pub mod types;

// Re-exports
pub use catalog::ProjectCatalog;
pub use detail::{DetailView, ExternalLink, LinkKind};
pub use error::{FolioError, Result};
pub use reveal::Reveal;
pub use selection::Selection;
pub use types::{Project, ProjectId};
