//! Current-user extractor.
//!
//! The auth gateway in front of the kernel forwards the signed-in user's
//! attributes as request headers. Missing or non-UTF-8 values are treated as
//! absent; extraction never rejects a request.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::request::Parts;
use tracing::debug;

use crate::models::{OrganizationRole, UserProfile};

pub const HEADER_USER_EMAIL: &str = "x-user-email";
pub const HEADER_USER_FIRST_NAME: &str = "x-user-first-name";
pub const HEADER_USER_LAST_NAME: &str = "x-user-last-name";
pub const HEADER_USER_ROLE: &str = "x-user-role";

/// The signed-in user as seen by the navigation kernel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrentUser {
    /// `None` when the gateway forwarded no profile attributes at all.
    pub profile: Option<UserProfile>,
    /// `None` for missing or unrecognised roles.
    pub role: Option<OrganizationRole>,
}

impl CurrentUser {
    /// Read the user from forwarded headers.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let email = header_str(headers, HEADER_USER_EMAIL);
        let first_name = header_str(headers, HEADER_USER_FIRST_NAME);
        let last_name = header_str(headers, HEADER_USER_LAST_NAME);

        let profile = if email.is_none() && first_name.is_none() && last_name.is_none() {
            None
        } else {
            Some(UserProfile {
                email,
                first_name,
                last_name,
            })
        };

        let role = header_str(headers, HEADER_USER_ROLE).and_then(|raw| {
            let role = OrganizationRole::parse_lenient(&raw);
            if role.is_none() {
                debug!(role = %raw, "unrecognised role header, applying no restriction");
            }
            role
        });

        Self { profile, role }
    }
}

fn header_str(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}
