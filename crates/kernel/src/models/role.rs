//! Organization role classification.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Role a user holds within the current workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrganizationRole {
    Owner,
    Admin,
    Base,
    SelfService,
}

impl OrganizationRole {
    /// All known roles, in privilege order.
    pub const ALL: [OrganizationRole; 4] = [
        OrganizationRole::Owner,
        OrganizationRole::Admin,
        OrganizationRole::Base,
        OrganizationRole::SelfService,
    ];

    /// Canonical kebab-case name.
    pub fn as_str(self) -> &'static str {
        match self {
            OrganizationRole::Owner => "owner",
            OrganizationRole::Admin => "admin",
            OrganizationRole::Base => "base",
            OrganizationRole::SelfService => "self-service",
        }
    }

    /// Parse a role leniently, returning `None` for anything unrecognised.
    ///
    /// Callers treat `None` as "no restriction".
    pub fn parse_lenient(value: &str) -> Option<Self> {
        value.parse().ok()
    }
}

impl fmt::Display for OrganizationRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a role name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown organization role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for OrganizationRole {
    type Err = UnknownRole;

    /// Accepts `self-service`, `self_service`, and `SELF_SERVICE` spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "owner" => Ok(OrganizationRole::Owner),
            "admin" => Ok(OrganizationRole::Admin),
            "base" => Ok(OrganizationRole::Base),
            "self-service" => Ok(OrganizationRole::SelfService),
            _ => Err(UnknownRole(s.to_string())),
        }
    }
}
