//! Role-based menu restrictions.
//!
//! Each role maps to a set of entry keys hidden from users holding it.
//! Restrictions are kept apart from the catalog: a key that names no entry
//! simply removes nothing.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::models::OrganizationRole;

use super::entry::NavigationEntry;

/// Keys hidden from self-service users.
pub const SELF_SERVICE_EXCLUDED: [&str; 5] =
    ["dashboard", "categories", "tags", "locations", "settings"];

/// Mapping from role to excluded entry keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleRestrictions {
    excluded: HashMap<OrganizationRole, BTreeSet<String>>,
}

/// On-disk shape of a restrictions file.
#[derive(Debug, Deserialize)]
struct RestrictionFile {
    #[serde(default)]
    roles: BTreeMap<String, Vec<String>>,
}

impl RoleRestrictions {
    /// No role is restricted.
    pub fn none() -> Self {
        Self {
            excluded: HashMap::new(),
        }
    }

    /// Built-in restrictions.
    pub fn builtin() -> Self {
        let mut restrictions = Self::none();
        restrictions.set(OrganizationRole::SelfService, SELF_SERVICE_EXCLUDED);
        restrictions
    }

    /// Replace the exclusion set for `role`.
    pub fn set<I, S>(&mut self, role: OrganizationRole, keys: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded
            .insert(role, keys.into_iter().map(Into::into).collect());
    }

    /// Whether `key` is hidden for `role`. An absent role hides nothing.
    pub fn is_excluded(&self, role: Option<OrganizationRole>, key: &str) -> bool {
        role.and_then(|r| self.excluded.get(&r))
            .is_some_and(|keys| keys.contains(key))
    }

    /// Return the entries of `entries` visible to `role`, preserving order.
    pub fn filter(
        &self,
        role: Option<OrganizationRole>,
        entries: &[NavigationEntry],
    ) -> Vec<NavigationEntry> {
        entries
            .iter()
            .filter(|entry| !self.is_excluded(role, &entry.key))
            .cloned()
            .collect()
    }

    /// Parse overrides from TOML and layer them over the built-in set.
    ///
    /// A role listed in the file replaces its built-in exclusions entirely;
    /// unknown role names are skipped. Two spellings of the same role
    /// (`self-service` and `self_service`) are rejected.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let file: RestrictionFile =
            toml::from_str(source).context("failed to parse menu restrictions")?;

        let mut restrictions = Self::builtin();
        let mut seen: HashMap<OrganizationRole, String> = HashMap::new();
        for (name, keys) in file.roles {
            let Some(role) = OrganizationRole::parse_lenient(&name) else {
                warn!(
                    role = %name,
                    expected = %OrganizationRole::ALL.map(OrganizationRole::as_str).join(", "),
                    "ignoring restriction for unknown role"
                );
                continue;
            };

            if let Some(previous) = seen.insert(role, name.clone()) {
                bail!("menu restrictions list role {role} twice (as {previous:?} and {name:?})");
            }

            debug!(role = %role, keys = keys.len(), "loaded menu restriction");
            restrictions.set(role, keys);
        }

        Ok(restrictions)
    }

    /// Load overrides from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml_str(&source)
    }
}

impl Default for RoleRestrictions {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::menu::entry::IconRef;

    fn entries(keys: &[&str]) -> Vec<NavigationEntry> {
        keys.iter()
            .map(|k| NavigationEntry::route(k, k, IconRef::Asset))
            .collect()
    }

    #[test]
    fn builtin_restricts_self_service_only() {
        let restrictions = RoleRestrictions::builtin();
        for key in SELF_SERVICE_EXCLUDED {
            assert!(restrictions.is_excluded(Some(OrganizationRole::SelfService), key));
            assert!(!restrictions.is_excluded(Some(OrganizationRole::Admin), key));
            assert!(!restrictions.is_excluded(None, key));
        }
    }

    #[test]
    fn matching_is_exact() {
        let restrictions = RoleRestrictions::builtin();
        let role = Some(OrganizationRole::SelfService);
        assert!(!restrictions.is_excluded(role, "tag"));
        assert!(!restrictions.is_excluded(role, "tags-archive"));
        assert!(!restrictions.is_excluded(role, "Dashboard"));
    }

    #[test]
    fn dangling_keys_are_noops() {
        let mut restrictions = RoleRestrictions::none();
        restrictions.set(OrganizationRole::Base, ["missing", "b"]);
        let filtered = restrictions.filter(Some(OrganizationRole::Base), &entries(&["a", "b", "c"]));
        let keys: Vec<_> = filtered.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, ["a", "c"]);
    }

    #[test]
    fn toml_overrides_layer_over_builtin() {
        let restrictions = RoleRestrictions::from_toml_str(
            r#"
            [roles]
            base = ["settings"]
            superuser = ["assets"]
            "#,
        )
        .unwrap();

        assert!(restrictions.is_excluded(Some(OrganizationRole::Base), "settings"));
        assert!(restrictions.is_excluded(Some(OrganizationRole::SelfService), "dashboard"));
        assert!(!restrictions.is_excluded(Some(OrganizationRole::Owner), "assets"));
    }

    #[test]
    fn toml_can_lift_builtin_restriction() {
        let restrictions = RoleRestrictions::from_toml_str(
            r#"
            [roles]
            self_service = []
            "#,
        )
        .unwrap();
        assert!(!restrictions.is_excluded(Some(OrganizationRole::SelfService), "dashboard"));
    }

    #[test]
    fn toml_rejects_two_spellings_of_one_role() {
        let result = RoleRestrictions::from_toml_str(
            r#"
            [roles]
            "self-service" = ["dashboard", "settings"]
            self_service = []
            "#,
        );
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("self-service"), "{message}");
        assert!(message.contains("twice"), "{message}");
    }

    #[test]
    fn empty_toml_is_builtin() {
        assert_eq!(
            RoleRestrictions::from_toml_str("").unwrap(),
            RoleRestrictions::builtin()
        );
    }

    #[test]
    fn malformed_toml_is_error() {
        assert!(RoleRestrictions::from_toml_str("[roles]\nbase = 3").is_err());
    }
}
