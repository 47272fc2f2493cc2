//! Application state shared across all handlers.

use std::sync::Arc;

use anyhow::Result;

use crate::config::Config;
use crate::menu::{CatalogSettings, RoleRestrictions};
use crate::theme::ThemeEngine;

/// Shared application state.
///
/// Wrapped in Arc internally so Clone is cheap. Everything inside is
/// read-only after startup.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,

    /// Catalog settings derived from config.
    catalog: CatalogSettings,

    /// Role to hidden-entry mapping.
    restrictions: RoleRestrictions,

    /// Sidebar renderer.
    theme: ThemeEngine,
}

impl AppState {
    /// Build state from configuration, loading restriction overrides and
    /// templates from disk when configured.
    pub fn new(config: &Config) -> Result<Self> {
        let restrictions = config.restrictions()?;

        let theme = match &config.templates_dir {
            Some(dir) => ThemeEngine::with_overrides(dir)?,
            None => ThemeEngine::new()?,
        };

        Ok(Self::from_parts(config.clone(), restrictions, theme))
    }

    /// Assemble state from already-built parts.
    pub fn from_parts(config: Config, restrictions: RoleRestrictions, theme: ThemeEngine) -> Self {
        let catalog = config.catalog_settings();
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                restrictions,
                theme,
            }),
        }
    }

    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    pub fn catalog(&self) -> &CatalogSettings {
        &self.inner.catalog
    }

    pub fn restrictions(&self) -> &RoleRestrictions {
        &self.inner.restrictions
    }

    pub fn theme(&self) -> &ThemeEngine {
        &self.inner.theme
    }
}
