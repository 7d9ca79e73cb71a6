//! Project Detail Component
//!
//! Overlay content for a selected project. Layout only; the text and links
//! come from [`DetailView`].

use dioxus::prelude::*;
use folio_core::{DetailView, Project};

use super::icons::LinkIcon;

/// Full detail of one project
///
/// Renders name, image, description, technologies line, and icon links:
/// GitHub always, demo only when the project has one.
#[component]
pub fn ProjectDetail(project: Project) -> Element {
    let view = DetailView::new(&project);

    rsx! {
        article { class: "project-detail",
            h2 { class: "project-detail__title", "{view.title}" }

            img {
                src: "{view.image_url}",
                alt: "{view.image_alt}",
                class: "project-detail__img",
            }

            p { class: "project-detail__description", "{view.description}" }
            p { class: "project-detail__technologies", "{view.technologies}" }

            div { class: "project-detail__links",
                for link in view.links.iter() {
                    a {
                        key: "{link.kind.aria_label()}",
                        href: "{link.href}",
                        target: link.target(),
                        rel: link.rel(),
                        class: link.kind.class(),
                        "aria-label": link.kind.aria_label(),
                        LinkIcon { kind: link.kind }
                    }
                }
            }
        }
    }
}
