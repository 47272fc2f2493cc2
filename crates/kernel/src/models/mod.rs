//! User-facing models the navigation kernel consumes.

pub mod role;
pub mod user;

pub use role::OrganizationRole;
pub use user::UserProfile;
