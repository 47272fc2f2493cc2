//! Sidebar navigation for the signed-in user.
//!
//! The menu is derived fresh for every request:
//! - [`NavigationCatalog`] holds the static entry definitions
//! - [`RoleRestrictions`] maps roles to hidden entry keys
//! - [`build_navigation`] combines both into a [`NavigationModel`]

mod catalog;
mod entry;
mod restriction;

pub use catalog::{
    CatalogSettings, DEFAULT_ASSET_LABELS_URL, NavigationCatalog, asset_labels_url,
};
pub use entry::{Badge, IconRef, LinkBehavior, LinkTarget, NavigationEntry};
pub use restriction::{RoleRestrictions, SELF_SERVICE_EXCLUDED};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{OrganizationRole, UserProfile};

/// The menu handed to the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationModel {
    pub menu_items_top: Vec<NavigationEntry>,
    pub menu_items_bottom: Vec<NavigationEntry>,
}

impl NavigationModel {
    /// All entries, top list first.
    pub fn entries(&self) -> impl Iterator<Item = &NavigationEntry> {
        self.menu_items_top.iter().chain(&self.menu_items_bottom)
    }

    /// The entry active for `current_path`, if any.
    pub fn active_key(&self, current_path: &str) -> Option<&str> {
        self.entries()
            .find(|entry| entry.is_active(current_path))
            .map(|entry| entry.key.as_str())
    }
}

/// Build the sidebar for a user.
///
/// Pure and infallible. Both lists are filtered independently with the
/// role's exclusion set; `None` means no restriction.
pub fn build_navigation(
    profile: Option<&UserProfile>,
    role: Option<OrganizationRole>,
    settings: &CatalogSettings,
    restrictions: &RoleRestrictions,
) -> NavigationModel {
    let catalog = NavigationCatalog::build(profile, settings);

    let menu_items_top = restrictions.filter(role, &catalog.primary);
    let menu_items_bottom = restrictions.filter(role, &catalog.secondary);

    debug!(
        role = role.map(OrganizationRole::as_str).unwrap_or("none"),
        hidden_top = catalog.primary.len() - menu_items_top.len(),
        hidden_bottom = catalog.secondary.len() - menu_items_bottom.len(),
        "built navigation"
    );

    NavigationModel {
        menu_items_top,
        menu_items_bottom,
    }
}
