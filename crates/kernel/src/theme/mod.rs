//! Theme engine and sidebar rendering.
//!
//! Turns a [`NavigationModel`](crate::menu::NavigationModel) into HTML:
//! icons are resolved to glyph classes, external links open in a new tab,
//! and the entry matching the current path is highlighted.

mod engine;
mod render;

pub use engine::{NAVIGATION_TEMPLATE, ThemeEngine};
pub use render::{SidebarLink, SidebarSection, sidebar_sections};
