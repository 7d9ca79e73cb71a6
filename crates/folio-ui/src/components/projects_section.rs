//! Projects Section Component
//!
//! The showcase itself: heading, card grid, and the detail overlay for the
//! selected project.

use dioxus::prelude::*;
use folio_core::{Project, Reveal, Selection};

use super::modal::Modal;
use super::project_detail::ProjectDetail;
use super::project_gallery::ProjectGallery;
use crate::hooks::{resolve_visibility, use_on_screen};

/// Anchor id of the section
pub const SECTION_ID: &str = "proyects";

/// Heading shown above the grid unless overridden
pub const DEFAULT_HEADING: &str = "Explore my Proyects";

/// Project showcase section
///
/// Owns the [`Selection`]: clicking a card opens the overlay on that project
/// (replacing any open one), dismissing the overlay closes it.
///
/// The entrance animation follows `visible` when supplied; otherwise the grid
/// container's own viewport intersection drives it.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ProjectsSection {
///         projects: catalog.projects().to_vec(),
///     }
/// }
/// ```
#[component]
pub fn ProjectsSection(
    /// Projects in display order
    projects: Vec<Project>,
    /// Section heading
    #[props(default = DEFAULT_HEADING.to_string())]
    heading: String,
    /// Externally supplied visibility signal
    #[props(default)]
    visible: Option<ReadOnlySignal<bool>>,
) -> Element {
    let mut on_screen = use_on_screen();
    let mut selection = use_signal(Selection::default);

    let injected = visible.map(|signal| *signal.read());
    let reveal = Reveal::from_visible(resolve_visibility(injected, on_screen.is_visible()));
    let selected = selection.read().project().cloned();

    rsx! {
        section { id: SECTION_ID, class: "projects-section",
            div { class: "projects-section__container",
                h2 {
                    class: "projects-section__heading",
                    style: reveal.heading_style(),
                    "{heading}"
                }

                ProjectGallery {
                    projects: projects,
                    reveal: reveal,
                    on_select: move |project: Project| selection.write().select(project),
                    on_visible: move |evt: Event<VisibleData>| on_screen.observe(evt),
                }
            }

            if let Some(project) = selected {
                Modal {
                    class: "project-modal".to_string(),
                    on_close: move |_| {
                        selection.write().dismiss();
                    },
                    ProjectDetail { project: project }
                }
            }
        }
    }
}
