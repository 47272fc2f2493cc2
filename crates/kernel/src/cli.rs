//! Command-line interface for the `shelf` binary.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::warn;

use crate::config::Config;
use crate::menu::{NavigationModel, build_navigation};
use crate::models::{OrganizationRole, UserProfile};

/// Shelf navigation kernel.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Start the HTTP server (default).
    Serve,

    /// Print the navigation model for a user as JSON.
    Menu(MenuArgs),
}

/// The user to build a menu for.
#[derive(Args, Debug, Default, PartialEq, Eq)]
pub struct MenuArgs {
    /// User email address.
    #[arg(long)]
    pub email: Option<String>,

    /// User first name.
    #[arg(long)]
    pub first_name: Option<String>,

    /// User last name.
    #[arg(long)]
    pub last_name: Option<String>,

    /// Organization role (owner, admin, base, self-service).
    #[arg(long)]
    pub role: Option<String>,
}

impl MenuArgs {
    /// The profile described by the flags; `None` when no flag was given.
    pub fn profile(&self) -> Option<UserProfile> {
        if self.email.is_none() && self.first_name.is_none() && self.last_name.is_none() {
            return None;
        }
        Some(UserProfile {
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        })
    }

    /// The role flag, with unknown values meaning no restriction.
    pub fn role(&self) -> Option<OrganizationRole> {
        let raw = self.role.as_deref()?;
        let role = OrganizationRole::parse_lenient(raw);
        if role.is_none() {
            warn!(role = %raw, "unknown role, printing unrestricted menu");
        }
        role
    }
}

/// Build the menu for `shelf menu`.
///
/// Only the restrictions file is read; templates are not touched.
pub fn menu_model(config: &Config, args: &MenuArgs) -> Result<NavigationModel> {
    let restrictions = config.restrictions()?;
    let profile = args.profile();
    Ok(build_navigation(
        profile.as_ref(),
        args.role(),
        &config.catalog_settings(),
        &restrictions,
    ))
}
