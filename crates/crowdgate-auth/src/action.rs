//! Actions and entity domains.
//!
//! Both are closed enums. The registry matches on them exhaustively, so an
//! "unknown action" can only exist at the parsing boundary
//! ([`ParseActionError`]), never inside a decision.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// A requested operation on an entity.
///
/// # Example
///
/// ```
/// use crowdgate_auth::Action;
///
/// let action: Action = "delete".parse().expect("known action");
/// assert_eq!(action, Action::Delete);
/// assert!(action.is_mutation());
/// assert!(!Action::Read.is_mutation());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Create a new entity.
    Create,
    /// Read an existing entity.
    Read,
    /// Modify an existing entity.
    Update,
    /// Remove an existing entity.
    Delete,
}

impl Action {
    /// All actions, in CRUD order.
    pub const ALL: [Action; 4] = [Self::Create, Self::Read, Self::Update, Self::Delete];

    /// Returns the lower-case action name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Read => "read",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }

    /// Returns `true` for every action except [`Action::Read`].
    #[must_use]
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Self::Read)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown action name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown action '{0}': expected one of create, read, update, delete")]
pub struct ParseActionError(pub String);

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "create" => Ok(Self::Create),
            "read" => Ok(Self::Read),
            "update" => Ok(Self::Update),
            "delete" => Ok(Self::Delete),
            _ => Err(ParseActionError(s.to_string())),
        }
    }
}

/// Entity domain a rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    /// A worker's answer to a work unit.
    Submission,
    /// A third-party identity token held by a user.
    Credential,
}

impl Domain {
    /// All domains.
    pub const ALL: [Domain; 2] = [Self::Submission, Self::Credential];

    /// Returns the lower-case domain name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Submission => "submission",
            Self::Credential => "credential",
        }
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_actions() {
        for action in Action::ALL {
            let parsed: Action = action.as_str().parse().expect("round trip should parse");
            assert_eq!(parsed, action);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("DELETE".parse::<Action>(), Ok(Action::Delete));
        assert_eq!(" Read ".parse::<Action>(), Ok(Action::Read));
    }

    #[test]
    fn parse_unknown_action() {
        let err = "purge".parse::<Action>().expect_err("purge is not an action");
        assert_eq!(err, ParseActionError("purge".to_string()));
        assert!(err.to_string().contains("purge"), "got: {err}");
    }

    #[test]
    fn mutation_flag() {
        assert!(Action::Create.is_mutation());
        assert!(!Action::Read.is_mutation());
        assert!(Action::Update.is_mutation());
        assert!(Action::Delete.is_mutation());
    }

    #[test]
    fn domain_display() {
        assert_eq!(Domain::Submission.to_string(), "submission");
        assert_eq!(Domain::Credential.to_string(), "credential");
    }
}
