//! Hooks for the showcase components

use dioxus::prelude::*;

/// Viewport visibility of one container
///
/// Bind [`OnScreen::observe`] to the container's `onvisible` event. The flag
/// follows the latest intersection report, so scrolling away hides again.
#[derive(Clone, Copy, PartialEq)]
pub struct OnScreen {
    visible: Signal<bool>,
}

impl OnScreen {
    pub fn is_visible(&self) -> bool {
        *self.visible.read()
    }

    /// Record an intersection report
    pub fn observe(&mut self, evt: Event<VisibleData>) {
        match evt.data().is_intersecting() {
            Ok(intersecting) => {
                if *self.visible.peek() != intersecting {
                    tracing::trace!(intersecting, "container visibility changed");
                    self.visible.set(intersecting);
                }
            }
            Err(e) => tracing::debug!("visibility report unavailable: {:?}", e),
        }
    }
}

/// Track whether a container intersects the viewport
///
/// # Example
///
/// ```rust,ignore
/// let mut on_screen = use_on_screen();
///
/// rsx! {
///     div {
///         onvisible: move |evt| on_screen.observe(evt),
///         style: if on_screen.is_visible() { "opacity: 1;" } else { "opacity: 0;" },
///     }
/// }
/// ```
pub fn use_on_screen() -> OnScreen {
    OnScreen {
        visible: use_signal(|| false),
    }
}

/// Pick the visibility source: an injected signal wins over the built-in observer
pub fn resolve_visibility(injected: Option<bool>, observed: bool) -> bool {
    injected.unwrap_or(observed)
}
