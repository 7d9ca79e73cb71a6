//! Project Card Component
//!
//! Thumbnail card for one project. The whole card is the click target.

use dioxus::prelude::*;
use folio_core::Project;

/// Project thumbnail card
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ProjectCard {
///         project: project.clone(),
///         on_select: move |p| selection.write().select(p),
///     }
/// }
/// ```
#[component]
pub fn ProjectCard(
    /// Project to show
    project: Project,
    /// Click handler, receives the card's project
    on_select: EventHandler<Project>,
) -> Element {
    let selected = project.clone();

    rsx! {
        div {
            class: "project-card",
            onclick: move |_| on_select.call(selected.clone()),

            div { class: "project-card__media",
                img {
                    src: "{project.image_url}",
                    alt: project.image_alt(),
                    class: "project-card__img",
                }
            }

            div { class: "project-card__body",
                h3 { class: "project-card__title", "{project.name}" }
            }
        }
    }
}
