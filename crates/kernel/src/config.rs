//! Configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use tracing::{info, warn};

use crate::menu::{CatalogSettings, DEFAULT_ASSET_LABELS_URL, RoleRestrictions};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port (default: 3000).
    pub port: u16,

    /// Base URL of the asset label order page (default: the Shelf store).
    pub asset_labels_url: String,

    /// Optional TOML file with per-role menu restrictions.
    pub nav_restrictions_path: Option<PathBuf>,

    /// Optional directory of template overrides.
    pub templates_dir: Option<PathBuf>,

    /// CORS allowed origins (comma-separated, default: "*").
    pub cors_allowed_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            asset_labels_url: DEFAULT_ASSET_LABELS_URL.to_string(),
            nav_restrictions_path: None,
            templates_dir: None,
            cors_allowed_origins: vec!["*".to_string()],
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw.parse().context("PORT must be a valid u16")?,
            None => defaults.port,
        };

        let asset_labels_url = lookup("ASSET_LABELS_URL")
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.asset_labels_url);

        let nav_restrictions_path = lookup("NAV_RESTRICTIONS_PATH")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        let templates_dir = lookup("TEMPLATES_DIR")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|v| {
                v.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|origins| !origins.is_empty())
            .unwrap_or(defaults.cors_allowed_origins);

        Ok(Self {
            port,
            asset_labels_url,
            nav_restrictions_path,
            templates_dir,
            cors_allowed_origins,
        })
    }

    /// Settings for building the navigation catalog.
    pub fn catalog_settings(&self) -> CatalogSettings {
        CatalogSettings {
            asset_labels_url: self.asset_labels_url.clone(),
        }
    }

    /// Explicit CORS origins, or `None` when any origin is allowed.
    ///
    /// Origins that are not valid header values are dropped with a warning.
    pub fn cors_origins(&self) -> Option<Vec<HeaderValue>> {
        if self.cors_allowed_origins.iter().any(|o| o == "*") {
            return None;
        }

        let origins = self
            .cors_allowed_origins
            .iter()
            .filter_map(|origin| {
                HeaderValue::from_str(origin)
                    .inspect_err(|_| warn!(origin = %origin, "ignoring unparseable CORS origin"))
                    .ok()
            })
            .collect();
        Some(origins)
    }

    /// Menu restrictions: the configured file layered over the built-ins,
    /// or the built-ins alone.
    pub fn restrictions(&self) -> Result<RoleRestrictions> {
        match &self.nav_restrictions_path {
            Some(path) => {
                let restrictions = RoleRestrictions::load(path)
                    .with_context(|| format!("failed to load {}", path.display()))?;
                info!(path = %path.display(), "menu restrictions loaded");
                Ok(restrictions)
            }
            None => Ok(RoleRestrictions::builtin()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn from_vars(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = from_vars(&[]).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.asset_labels_url, DEFAULT_ASSET_LABELS_URL);
        assert!(config.nav_restrictions_path.is_none());
        assert_eq!(config.cors_allowed_origins, ["*"]);
    }

    #[test]
    fn reads_overrides() {
        let config = from_vars(&[
            ("PORT", "8080"),
            ("ASSET_LABELS_URL", "https://labels.test/order"),
            ("NAV_RESTRICTIONS_PATH", "/etc/shelf/menu.toml"),
            ("CORS_ALLOWED_ORIGINS", "https://a.test, https://b.test,"),
        ])
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(
            config.catalog_settings().asset_labels_url,
            "https://labels.test/order"
        );
        assert_eq!(
            config.nav_restrictions_path,
            Some(PathBuf::from("/etc/shelf/menu.toml"))
        );
        assert_eq!(
            config.cors_allowed_origins,
            ["https://a.test", "https://b.test"]
        );
    }

    #[test]
    fn wildcard_origin_allows_any() {
        let config = from_vars(&[("CORS_ALLOWED_ORIGINS", "https://a.test,*")]).unwrap();
        assert!(config.cors_origins().is_none());
        assert!(Config::default().cors_origins().is_none());
    }

    #[test]
    fn explicit_origins_skip_invalid_values() {
        let config = from_vars(&[("CORS_ALLOWED_ORIGINS", "https://a.test,bad\norigin")]).unwrap();
        assert_eq!(
            config.cors_origins().unwrap(),
            [HeaderValue::from_static("https://a.test")]
        );
    }

    #[test]
    fn restrictions_default_to_builtin() {
        assert_eq!(
            Config::default().restrictions().unwrap(),
            RoleRestrictions::builtin()
        );
    }

    #[test]
    fn invalid_port_is_error() {
        assert!(from_vars(&[("PORT", "not-a-port")]).is_err());
    }
}
