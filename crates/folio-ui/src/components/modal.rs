//! Modal Overlay Component
//!
//! Generic dialog surface: renders whatever children it is given over a
//! dimmed backdrop and reports user-initiated dismissal.

use dioxus::prelude::*;

use super::button::CloseButton;

/// Modal overlay
///
/// `on_close` fires on a backdrop click or on the close control, and on no
/// other event. Clicks inside the panel stay inside it.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     if show() {
///         Modal {
///             on_close: move |_| show.set(false),
///             h2 { "Hello" }
///         }
///     }
/// }
/// ```
#[component]
pub fn Modal(
    /// Callback when the user dismisses the overlay
    on_close: EventHandler<()>,
    /// Optional additional CSS classes for the panel
    #[props(default)]
    class: Option<String>,
    /// Panel content
    children: Element,
) -> Element {
    let panel_class = match class.as_deref() {
        Some(extra) if !extra.is_empty() => format!("modal-content {}", extra),
        _ => "modal-content".to_string(),
    };

    rsx! {
        div {
            class: "modal-overlay",
            role: "presentation",
            onclick: move |_| on_close.call(()),

            div {
                class: "{panel_class}",
                role: "dialog",
                "aria-modal": "true",
                onclick: move |e| e.stop_propagation(),

                div { class: "modal-header",
                    CloseButton { onclick: move |_| on_close.call(()) }
                }

                {children}
            }
        }
    }
}
