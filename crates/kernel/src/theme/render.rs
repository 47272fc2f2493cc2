//! View models handed to the sidebar template.

use serde::Serialize;

use crate::menu::{NavigationEntry, NavigationModel};

/// One rendered sidebar link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarLink {
    pub key: String,
    pub label: String,
    pub href: String,
    pub glyph: &'static str,
    pub new_tab: bool,
    pub active: bool,
    pub badge: Option<&'static str>,
}

impl SidebarLink {
    /// Resolve an entry against the path being viewed.
    pub fn from_entry(entry: &NavigationEntry, current_path: &str) -> Self {
        Self {
            key: entry.key.clone(),
            label: entry.label.clone(),
            href: entry.target.href(),
            glyph: entry.icon.glyph(),
            new_tab: entry.opens_new_tab(),
            active: entry.is_active(current_path),
            badge: entry.badge.map(|b| b.label()),
        }
    }
}

/// A named list of links (`top` or `bottom`).
#[derive(Debug, Clone, Serialize)]
pub struct SidebarSection {
    pub name: &'static str,
    pub links: Vec<SidebarLink>,
}

/// Turn a model into template sections.
///
/// At most one link is marked active: the first match wins, so a nested
/// route never lights up two entries.
pub fn sidebar_sections(model: &NavigationModel, current_path: &str) -> Vec<SidebarSection> {
    let active = model.active_key(current_path);
    let links = |entries: &[NavigationEntry]| -> Vec<SidebarLink> {
        entries
            .iter()
            .map(|entry| {
                let mut link = SidebarLink::from_entry(entry, current_path);
                link.active = active == Some(entry.key.as_str());
                link
            })
            .collect()
    };

    vec![
        SidebarSection {
            name: "top",
            links: links(&model.menu_items_top),
        },
        SidebarSection {
            name: "bottom",
            links: links(&model.menu_items_bottom),
        },
    ]
}
