//! Navigation entry types.

use serde::{Deserialize, Serialize};

/// Symbolic reference to a sidebar glyph.
///
/// The theme layer resolves this to markup; the menu model never carries
/// rendered icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconRef {
    Graph,
    Asset,
    Kit,
    Category,
    Tag,
    Location,
    Calendar,
    Bookings,
    AssetLabel,
    ScanQr,
    Settings,
}

impl IconRef {
    /// CSS class naming the glyph in the icon font.
    pub fn glyph(self) -> &'static str {
        match self {
            IconRef::Graph => "icon-graph",
            IconRef::Asset => "icon-asset",
            IconRef::Kit => "icon-kit",
            IconRef::Category => "icon-category",
            IconRef::Tag => "icon-tag",
            IconRef::Location => "icon-location",
            IconRef::Calendar => "icon-calendar",
            IconRef::Bookings => "icon-bookings",
            IconRef::AssetLabel => "icon-asset-label",
            IconRef::ScanQr => "icon-scan-qr",
            IconRef::Settings => "icon-settings",
        }
    }
}

/// Where an entry points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum LinkTarget {
    /// Internal route, relative to the app root (e.g. "assets").
    Route(String),
    /// Absolute external URL.
    External(String),
}

impl LinkTarget {
    /// The href to put on the rendered link.
    pub fn href(&self) -> String {
        match self {
            LinkTarget::Route(route) => format!("/{}", route.trim_start_matches('/')),
            LinkTarget::External(url) => url.clone(),
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self, LinkTarget::External(_))
    }
}

/// Flags controlling how the rendered link behaves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkBehavior {
    /// Open in a new browsing context.
    #[serde(default)]
    pub new_tab: bool,
    /// Highlight only on an exact path match.
    #[serde(default)]
    pub end: bool,
}

/// Marker shown next to an entry's label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Badge {
    New,
}

impl Badge {
    pub fn label(self) -> &'static str {
        match self {
            Badge::New => "New",
        }
    }
}

/// A single sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationEntry {
    /// Stable identifier, unique within its list.
    pub key: String,
    pub label: String,
    pub icon: IconRef,
    pub target: LinkTarget,
    #[serde(default)]
    pub behavior: LinkBehavior,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<Badge>,
}

impl NavigationEntry {
    /// Entry pointing at an internal route named after its key.
    pub fn route(key: &str, label: &str, icon: IconRef) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            icon,
            target: LinkTarget::Route(key.to_string()),
            behavior: LinkBehavior::default(),
            badge: None,
        }
    }

    /// Entry pointing at an external URL.
    pub fn external(key: &str, label: &str, icon: IconRef, url: String) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            icon,
            target: LinkTarget::External(url),
            behavior: LinkBehavior::default(),
            badge: None,
        }
    }

    /// Only highlight on an exact match.
    pub fn exact(mut self) -> Self {
        self.behavior.end = true;
        self
    }

    /// Open in a new tab.
    pub fn in_new_tab(mut self) -> Self {
        self.behavior.new_tab = true;
        self
    }

    pub fn with_badge(mut self, badge: Badge) -> Self {
        self.badge = Some(badge);
        self
    }

    /// Whether the link should open in a new browsing context.
    pub fn opens_new_tab(&self) -> bool {
        self.behavior.new_tab
    }

    /// Whether this entry is the active one for `current_path`.
    ///
    /// With `end` set only an exact match counts; otherwise any path below the
    /// entry's route matches too. External links are never active.
    pub fn is_active(&self, current_path: &str) -> bool {
        if self.target.is_external() {
            return false;
        }

        let href = self.target.href();
        let current = normalize_path(current_path);
        let own = normalize_path(&href);

        if current == own {
            return true;
        }
        !self.behavior.end
            && current
                .strip_prefix(own)
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

/// Strip the query string and a trailing slash (except for the root).
fn normalize_path(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    }
}
