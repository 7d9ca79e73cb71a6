use dioxus::prelude::*;
use folio_core::ProjectCatalog;
use folio_ui::{ProjectsSection, DEFAULT_HEADING};

use crate::context::{get_heading, get_projects_path, use_catalog, CatalogState};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the catalog context, and loads the catalog
/// on mount.
#[component]
pub fn App() -> Element {
    let mut catalog: Signal<CatalogState> = use_signal(CatalogState::default);

    // Provide catalog context to all child components
    use_context_provider(|| catalog);

    // Load catalog on mount
    use_effect(move || {
        spawn(async move {
            let path = get_projects_path();
            match ProjectCatalog::load(&path).await {
                Ok(loaded) => {
                    catalog.set(CatalogState::Ready(loaded));
                }
                Err(e) => {
                    tracing::error!("Failed to load catalog {:?}: {}", path, e);
                    catalog.set(CatalogState::Failed(e.to_string()));
                }
            }
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Showcase {}
    }
}

/// Projects section fed from the catalog context.
#[component]
fn Showcase() -> Element {
    let catalog = use_catalog();
    let heading = get_heading().unwrap_or_else(|| DEFAULT_HEADING.to_string());

    let state = catalog.read().clone();
    match state {
        // Render an empty grid until the catalog arrives
        CatalogState::Loading => rsx! {
            ProjectsSection { projects: Vec::new(), heading: heading }
        },
        CatalogState::Ready(loaded) => rsx! {
            ProjectsSection { projects: loaded.into_projects(), heading: heading }
        },
        CatalogState::Failed(message) => rsx! {
            p { class: "projects-status", "Could not load projects: {message}" }
        },
    }
}
