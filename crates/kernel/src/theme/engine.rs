//! Theme engine backed by Tera.

use std::path::Path;

use anyhow::{Context, Result};
use tera::Tera;
use tracing::debug;

use crate::menu::NavigationModel;

use super::render::sidebar_sections;

/// Template used for the sidebar.
pub const NAVIGATION_TEMPLATE: &str = "navigation.html";

const DEFAULT_NAVIGATION_TEMPLATE: &str = include_str!("../../templates/navigation.html");

/// Renders navigation models to HTML.
pub struct ThemeEngine {
    tera: Tera,
}

impl ThemeEngine {
    /// Create an engine with the built-in templates only.
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(NAVIGATION_TEMPLATE, DEFAULT_NAVIGATION_TEMPLATE)
            .context("failed to register built-in navigation template")?;
        Ok(Self { tera })
    }

    /// Create an engine whose templates in `template_dir` override the
    /// built-in ones.
    pub fn with_overrides(template_dir: &Path) -> Result<Self> {
        let pattern = template_dir.join("**/*.html");
        let pattern_str = pattern
            .to_str()
            .context("invalid template directory path")?;

        let tera = Tera::new(pattern_str).context("failed to load template overrides")?;
        debug!(
            count = tera.get_template_names().count(),
            dir = %template_dir.display(),
            "loaded template overrides"
        );

        let mut engine = Self { tera };
        if !engine.has_template(NAVIGATION_TEMPLATE) {
            engine
                .tera
                .add_raw_template(NAVIGATION_TEMPLATE, DEFAULT_NAVIGATION_TEMPLATE)
                .context("failed to register built-in navigation template")?;
        }

        Ok(engine)
    }

    /// Whether a template with `name` is registered.
    pub fn has_template(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|n| n == name)
    }

    /// Render the sidebar for `model`, highlighting the entry for
    /// `current_path`.
    pub fn render_navigation(
        &self,
        model: &NavigationModel,
        current_path: &str,
    ) -> Result<String, tera::Error> {
        let mut context = tera::Context::new();
        context.insert("sections", &sidebar_sections(model, current_path));
        context.insert("current_path", current_path);
        self.tera.render(NAVIGATION_TEMPLATE, &context)
    }
}

impl std::fmt::Debug for ThemeEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeEngine")
            .field("templates", &self.tera.get_template_names().count())
            .finish()
    }
}
