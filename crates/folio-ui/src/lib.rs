//! Folio UI Components
//!
//! Dioxus components for the portfolio project showcase: a grid of project
//! cards that fades in when scrolled into view, and a detail overlay opened
//! by clicking a card.
//!
//! ## Composition
//!
//! - [`ProjectsSection`]: owns the selection state and wires everything together
//! - [`ProjectGallery`] / [`ProjectCard`]: one card per project, in input order
//! - [`Modal`]: generic overlay, renders any children and reports dismissal
//! - [`ProjectDetail`]: the overlay content for one project
//! - [`use_on_screen`]: viewport visibility for the entrance animation

pub mod components;
pub mod hooks;

pub use components::*;
pub use hooks::*;
