//! Selection state for the detail overlay
//!
//! The overlay is visible exactly when a project is selected, so both facts
//! live in one enum and cannot disagree.

use crate::types::Project;

/// Which project, if any, is being inspected
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Selection {
    /// No overlay
    #[default]
    Closed,
    /// Overlay showing this project
    Open(Project),
}

impl Selection {
    /// Open the overlay on `project`, replacing any current selection
    pub fn select(&mut self, project: Project) {
        tracing::debug!(project = %project.id, name = %project.name, "project selected");
        *self = Selection::Open(project);
    }

    /// Close the overlay
    ///
    /// Returns `false` when the overlay was already closed.
    pub fn dismiss(&mut self) -> bool {
        match std::mem::take(self) {
            Selection::Open(project) => {
                tracing::debug!(project = %project.id, "overlay dismissed");
                true
            }
            Selection::Closed => false,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Selection::Open(_))
    }

    pub fn project(&self) -> Option<&Project> {
        match self {
            Selection::Open(project) => Some(project),
            Selection::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(name: &str) -> Project {
        Project::new(name, "", "")
    }

    #[test]
    fn starts_closed() {
        let selection = Selection::default();
        assert!(!selection.is_open());
        assert!(selection.project().is_none());
    }

    #[test]
    fn select_opens_with_project() {
        let mut selection = Selection::default();
        let p = project("a");
        selection.select(p.clone());
        assert!(selection.is_open());
        assert_eq!(selection.project(), Some(&p));
    }

    #[test]
    fn select_while_open_replaces() {
        let mut selection = Selection::default();
        selection.select(project("a"));
        let b = project("b");
        selection.select(b.clone());
        assert_eq!(selection, Selection::Open(b));
    }

    #[test]
    fn dismiss_returns_to_closed() {
        let mut selection = Selection::default();
        selection.select(project("a"));
        assert!(selection.dismiss());
        assert_eq!(selection, Selection::Closed);
    }

    #[test]
    fn dismiss_when_closed_is_noop() {
        let mut selection = Selection::default();
        assert!(!selection.dismiss());
        assert!(!selection.dismiss());
        assert_eq!(selection, Selection::Closed);
    }

    #[test]
    fn reopens_after_dismiss() {
        let mut selection = Selection::default();
        selection.select(project("a"));
        selection.dismiss();
        let b = project("b");
        selection.select(b.clone());
        assert_eq!(selection.project(), Some(&b));
    }
}
