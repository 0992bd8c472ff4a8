//! Third-party credentials.

use crowdgate_types::UserId;
use serde::{Deserialize, Serialize};

/// Name of an external identity provider (e.g. `twitter`).
///
/// Normalized on construction (trimmed, ASCII lower-cased), so
/// `"Twitter "` and `"twitter"` name the same provider.
///
/// # Example
///
/// ```
/// use crowdgate_auth::Provider;
///
/// assert_eq!(Provider::new(" Twitter"), Provider::new("twitter"));
/// assert_eq!(Provider::new("GOOGLE").as_str(), "google");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Provider(String);

impl Provider {
    /// Creates a normalized provider name.
    #[must_use]
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().trim().to_ascii_lowercase())
    }

    /// Returns the provider name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Provider {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Provider {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl From<Provider> for String {
    fn from(provider: Provider) -> Self {
        provider.0
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A third-party identity token linked to one user.
///
/// Only the (owner, provider) link matters to authorization; the token
/// material itself never reaches this crate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Credential {
    /// The issuing provider.
    pub provider: Provider,
    /// The user the credential belongs to.
    pub owner_id: UserId,
}

impl Credential {
    /// Creates a credential link.
    #[must_use]
    pub fn new(owner_id: UserId, provider: impl Into<Provider>) -> Self {
        Self {
            provider: provider.into(),
            owner_id,
        }
    }

    /// Returns `true` if `user` owns this credential.
    #[must_use]
    pub fn is_owned_by(&self, user: UserId) -> bool {
        self.owner_id == user
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_normalization() {
        assert_eq!(Provider::new("  FaceBook "), Provider::from("facebook"));
        assert_eq!(Provider::from(String::from("Google")).as_str(), "google");
    }

    #[test]
    fn provider_serde_normalizes() {
        let provider: Provider =
            serde_json::from_str("\"Twitter\"").expect("provider should deserialize");
        assert_eq!(provider, Provider::new("twitter"));
        assert_eq!(
            serde_json::to_string(&provider).expect("provider should serialize"),
            "\"twitter\""
        );
    }

    #[test]
    fn credential_ownership() {
        let cred = Credential::new(UserId::new(7), "twitter");
        assert!(cred.is_owned_by(UserId::new(7)));
        assert!(!cred.is_owned_by(UserId::new(9)));
        assert_eq!(cred.provider.to_string(), "twitter");
    }
}
