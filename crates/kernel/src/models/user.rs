//! Profile of the signed-in user.

use serde::{Deserialize, Serialize};

/// The attributes of the current user the sidebar cares about.
///
/// Every field is nullable: the profile may not be loaded yet, and the
/// upstream identity provider is not required to supply names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl UserProfile {
    /// Build a profile with only an email address.
    pub fn with_email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..Self::default()
        }
    }

    /// Set the first and last name.
    pub fn named(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self.last_name = Some(last_name.into());
        self
    }

    /// Email address, or the empty string when unknown.
    pub fn email_or_empty(&self) -> &str {
        self.email.as_deref().unwrap_or_default()
    }

    /// First name, if present and non-empty.
    pub fn first_name(&self) -> Option<&str> {
        non_empty(self.first_name.as_deref())
    }

    /// Last name, if present and non-empty.
    pub fn last_name(&self) -> Option<&str> {
        non_empty(self.last_name.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_names_are_absent() {
        let profile = UserProfile {
            email: Some("a@b.com".to_string()),
            first_name: Some(String::new()),
            last_name: None,
        };
        assert_eq!(profile.first_name(), None);
        assert_eq!(profile.last_name(), None);
    }

    #[test]
    fn missing_email_is_empty() {
        assert_eq!(UserProfile::default().email_or_empty(), "");
    }

    #[test]
    fn deserializes_camel_case() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"email":"a@b.com","firstName":"Jo"}"#).unwrap();
        assert_eq!(profile.first_name(), Some("Jo"));
        assert!(profile.last_name.is_none());
    }
}
