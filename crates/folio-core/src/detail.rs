//! Detail overlay view model
//!
//! Computes everything the overlay shows for a project so the markup layer
//! only has to lay it out.

use crate::types::Project;

/// Fixed prefix of the technologies line
pub const TECHNOLOGIES_LABEL: &str = "Tecnologías: ";

/// External links open in a new browsing context
pub const LINK_TARGET: &str = "_blank";

/// The opened context gets no handle back to the opener
pub const LINK_REL: &str = "noopener noreferrer";

/// What an external link points at
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LinkKind {
    /// Source repository
    Source,
    /// Live demo
    Demo,
}

impl LinkKind {
    /// Accessible label; links render as icons only
    pub fn aria_label(&self) -> &'static str {
        match self {
            LinkKind::Source => "GitHub",
            LinkKind::Demo => "Demo",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            LinkKind::Source => "project-link project-link--source",
            LinkKind::Demo => "project-link project-link--demo",
        }
    }
}

/// An icon link rendered in the overlay
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ExternalLink {
    pub kind: LinkKind,
    pub href: String,
}

impl ExternalLink {
    pub fn target(&self) -> &'static str {
        LINK_TARGET
    }

    pub fn rel(&self) -> &'static str {
        LINK_REL
    }
}

/// Overlay content for one project
#[derive(Clone, PartialEq, Debug)]
pub struct DetailView {
    pub title: String,
    pub image_url: String,
    pub image_alt: String,
    pub description: String,
    pub technologies: String,
    pub links: Vec<ExternalLink>,
}

impl DetailView {
    pub fn new(project: &Project) -> Self {
        Self {
            title: project.name.clone(),
            image_url: project.image_url.clone(),
            image_alt: project.image_alt(),
            description: project.description.clone(),
            technologies: technologies_line(&project.technologies),
            links: links(project),
        }
    }
}

impl From<&Project> for DetailView {
    fn from(project: &Project) -> Self {
        Self::new(project)
    }
}

/// `Tecnologías: ` followed by the technologies joined with `", "`
pub fn technologies_line(technologies: &[String]) -> String {
    format!("{}{}", TECHNOLOGIES_LABEL, technologies.join(", "))
}

/// Source link always, demo link only when present and non-empty
pub fn links(project: &Project) -> Vec<ExternalLink> {
    let mut links = vec![ExternalLink {
        kind: LinkKind::Source,
        href: project.github_url.clone(),
    }];
    if let Some(demo) = project.demo_link() {
        links.push(ExternalLink {
            kind: LinkKind::Demo,
            href: demo.to_string(),
        });
    }
    links
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project() -> Project {
        Project::new("Shop", "/img/shop.png", "https://github.com/me/shop")
            .with_description("A storefront")
            .with_technologies(["TS", "React", "CSS"])
    }

    #[test]
    fn technologies_joined_with_label() {
        let view = DetailView::new(&project());
        assert_eq!(view.technologies, "Tecnologías: TS, React, CSS");
    }

    #[test]
    fn empty_technologies_leave_bare_label() {
        assert_eq!(technologies_line(&[]), "Tecnologías: ");
    }

    #[test]
    fn single_link_without_demo() {
        let view = DetailView::new(&project());
        assert_eq!(
            view.links,
            vec![ExternalLink {
                kind: LinkKind::Source,
                href: "https://github.com/me/shop".to_string(),
            }]
        );
    }

    #[test]
    fn two_links_with_demo() {
        let view = DetailView::new(&project().with_demo_url("https://shop.dev"));
        let kinds: Vec<_> = view.links.iter().map(|l| l.kind).collect();
        assert_eq!(kinds, [LinkKind::Source, LinkKind::Demo]);
        assert_eq!(view.links[1].href, "https://shop.dev");
    }

    #[test]
    fn empty_demo_url_renders_one_link() {
        let view = DetailView::new(&project().with_demo_url(""));
        assert_eq!(view.links.len(), 1);
    }

    #[test]
    fn links_do_not_expose_opener() {
        let view = DetailView::new(&project().with_demo_url("https://shop.dev"));
        for link in &view.links {
            assert_eq!(link.target(), "_blank");
            assert_eq!(link.rel(), "noopener noreferrer");
        }
    }

    #[test]
    fn carries_text_fields() {
        let view = DetailView::from(&project());
        assert_eq!(view.title, "Shop");
        assert_eq!(view.image_alt, "Proyecto Shop");
        assert_eq!(view.image_url, "/img/shop.png");
        assert_eq!(view.description, "A storefront");
    }
}
