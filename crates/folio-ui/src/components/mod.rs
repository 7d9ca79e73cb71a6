//! Showcase components
//!
//! Class names are styled by the host application's global stylesheet.

mod button;
mod icons;
mod modal;
mod project_card;
mod project_detail;
mod project_gallery;
mod projects_section;

pub use button::*;
pub use icons::*;
pub use modal::*;
pub use project_card::*;
pub use project_detail::*;
pub use project_gallery::*;
pub use projects_section::*;
