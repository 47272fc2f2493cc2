//! The static sidebar catalog.
//!
//! Order within each list is the on-screen order.

use serde::{Deserialize, Serialize};

use crate::models::UserProfile;

use super::entry::{Badge, IconRef, NavigationEntry};

/// Default page where users order printed asset labels.
pub const DEFAULT_ASSET_LABELS_URL: &str = "https://www.shelf.nu/order-tags";

/// Settings that feed the templated entries of the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSettings {
    /// Base URL of the asset label order page.
    pub asset_labels_url: String,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            asset_labels_url: DEFAULT_ASSET_LABELS_URL.to_string(),
        }
    }
}

/// The two ordered entry lists making up the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationCatalog {
    pub primary: Vec<NavigationEntry>,
    pub secondary: Vec<NavigationEntry>,
}

impl NavigationCatalog {
    /// Build the catalog for `profile`.
    ///
    /// A missing profile degrades to an empty email parameter.
    pub fn build(profile: Option<&UserProfile>, settings: &CatalogSettings) -> Self {
        let primary = vec![
            NavigationEntry::route("dashboard", "Dashboard", IconRef::Graph),
            NavigationEntry::route("assets", "Assets", IconRef::Asset),
            NavigationEntry::route("kits", "Kits", IconRef::Kit),
            NavigationEntry::route("categories", "Categories", IconRef::Category),
            NavigationEntry::route("tags", "Tags", IconRef::Tag),
            NavigationEntry::route("locations", "Locations", IconRef::Location),
            NavigationEntry::route("calendar", "Calendar", IconRef::Calendar),
            NavigationEntry::route("bookings", "Bookings", IconRef::Bookings),
        ];

        let secondary = vec![
            NavigationEntry::external(
                "asset-labels",
                "Asset labels",
                IconRef::AssetLabel,
                asset_labels_url(&settings.asset_labels_url, profile),
            )
            .in_new_tab()
            .with_badge(Badge::New),
            NavigationEntry::route("scanner", "QR scanner", IconRef::ScanQr).exact(),
            NavigationEntry::route("settings", "Workspace settings", IconRef::Settings).exact(),
        ];

        Self { primary, secondary }
    }
}

/// Interpolate the user's attributes into the label order URL.
///
/// `email` is always present (possibly empty); names are appended only when
/// the profile has them. Values go in verbatim.
pub fn asset_labels_url(base: &str, profile: Option<&UserProfile>) -> String {
    let email = profile.map(UserProfile::email_or_empty).unwrap_or_default();
    let mut url = format!("{base}?email={email}");

    if let Some(first_name) = profile.and_then(UserProfile::first_name) {
        url.push_str("&firstName=");
        url.push_str(first_name);
    }
    if let Some(last_name) = profile.and_then(UserProfile::last_name) {
        url.push_str("&lastName=");
        url.push_str(last_name);
    }

    url
}
