//! Project Gallery Component
//!
//! Grid of project cards. One card per project, in input order; an empty
//! list renders an empty grid.

use dioxus::prelude::*;
use folio_core::{Project, Reveal};

use super::project_card::ProjectCard;

/// Grid of project cards
///
/// `reveal` only styles the grid. Every card is rendered and clickable in
/// both states.
#[component]
pub fn ProjectGallery(
    /// Projects to display
    projects: Vec<Project>,
    /// Entrance presentation
    #[props(default)]
    reveal: Reveal,
    /// Click handler (receives the clicked project)
    on_select: EventHandler<Project>,
    /// Viewport intersection events for the grid container
    #[props(default)]
    on_visible: Option<EventHandler<Event<VisibleData>>>,
) -> Element {
    rsx! {
        div {
            class: "project-grid",
            style: reveal.grid_style(),
            onvisible: move |evt| {
                if let Some(handler) = &on_visible {
                    handler.call(evt);
                }
            },

            for project in projects.iter() {
                ProjectCard {
                    key: "{project.id}",
                    project: project.clone(),
                    on_select: on_select,
                }
            }
        }
    }
}
