//! Decision types.
//!
//! [`Decision`] is the single internal outcome of every rule, whichever
//! shape the rule has:
//!
//! ```text
//! Decision ─┬─ Allow
//!           └─ Deny(Denial) ─┬─ Unauthorized   (401, authenticate and retry)
//!                            └─ Forbidden      (403, retrying won't help)
//! ```
//!
//! The two external call shapes (`require_action` and `is_allowed`) are
//! adapters over this type.

use crowdgate_types::ErrorCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reason a request was denied.
///
/// # Example
///
/// ```
/// use crowdgate_auth::Denial;
/// use crowdgate_types::ErrorCode;
///
/// let denial = Denial::Unauthorized;
/// assert_eq!(denial.http_status(), 401);
/// assert!(denial.is_recoverable());
///
/// assert_eq!(Denial::Forbidden.http_status(), 403);
/// assert_eq!(Denial::Forbidden.code(), "AUTH_FORBIDDEN");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Error)]
#[serde(rename_all = "snake_case")]
pub enum Denial {
    /// The action requires an authenticated identity and the actor has none.
    #[error("unauthorized: authentication required")]
    Unauthorized,

    /// The actor is known (or need not be) but lacks ownership or privilege
    /// for this entity, or the entity would violate a uniqueness rule.
    #[error("forbidden: insufficient privilege for this entity")]
    Forbidden,
}

impl Denial {
    /// Returns the HTTP status a request handler should render.
    #[must_use]
    pub fn http_status(&self) -> u16 {
        match self {
            Self::Unauthorized => 401,
            Self::Forbidden => 403,
        }
    }
}

impl ErrorCode for Denial {
    fn code(&self) -> &'static str {
        match self {
            Self::Unauthorized => "AUTH_UNAUTHORIZED",
            Self::Forbidden => "AUTH_FORBIDDEN",
        }
    }

    fn is_recoverable(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

/// Outcome of an authorization rule.
///
/// # Example
///
/// ```
/// use crowdgate_auth::{Decision, Denial};
///
/// let allow = Decision::Allow;
/// assert!(allow.is_allowed());
/// assert!(allow.into_result().is_ok());
///
/// let deny = Decision::Deny(Denial::Forbidden);
/// assert_eq!(deny.denial(), Some(Denial::Forbidden));
/// assert_eq!(deny.into_result(), Err(Denial::Forbidden));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "reason", rename_all = "snake_case")]
pub enum Decision {
    /// Proceed.
    Allow,
    /// Do not proceed, for the given reason.
    Deny(Denial),
}

impl Decision {
    /// Shorthand for `Decision::Deny(Denial::Unauthorized)`.
    pub const UNAUTHORIZED: Decision = Decision::Deny(Denial::Unauthorized);

    /// Shorthand for `Decision::Deny(Denial::Forbidden)`.
    pub const FORBIDDEN: Decision = Decision::Deny(Denial::Forbidden);

    /// Maps a boolean predicate result onto a decision.
    ///
    /// Predicates never distinguish reasons, so `false` becomes
    /// [`Denial::Forbidden`].
    #[must_use]
    pub fn from_predicate(allowed: bool) -> Self {
        if allowed {
            Self::Allow
        } else {
            Self::FORBIDDEN
        }
    }

    /// Returns `true` for [`Decision::Allow`].
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Returns `true` for any [`Decision::Deny`].
    #[must_use]
    pub fn is_denied(&self) -> bool {
        !self.is_allowed()
    }

    /// Returns the denial reason, if any.
    #[must_use]
    pub fn denial(&self) -> Option<Denial> {
        match self {
            Self::Allow => None,
            Self::Deny(denial) => Some(*denial),
        }
    }

    /// Converts into `Ok(())` or `Err(denial)`.
    pub fn into_result(self) -> Result<(), Denial> {
        match self {
            Self::Allow => Ok(()),
            Self::Deny(denial) => Err(denial),
        }
    }

    /// Returns the status as a string ("allow", "unauthorized", "forbidden").
    #[must_use]
    pub fn status_str(&self) -> &'static str {
        match self {
            Self::Allow => "allow",
            Self::Deny(Denial::Unauthorized) => "unauthorized",
            Self::Deny(Denial::Forbidden) => "forbidden",
        }
    }
}

impl From<Denial> for Decision {
    fn from(denial: Denial) -> Self {
        Self::Deny(denial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crowdgate_types::assert_error_codes;

    #[test]
    fn allow_helpers() {
        let d = Decision::Allow;
        assert!(d.is_allowed());
        assert!(!d.is_denied());
        assert_eq!(d.denial(), None);
        assert_eq!(d.status_str(), "allow");
    }

    #[test]
    fn deny_helpers() {
        let d = Decision::UNAUTHORIZED;
        assert!(!d.is_allowed());
        assert!(d.is_denied());
        assert_eq!(d.denial(), Some(Denial::Unauthorized));
        assert_eq!(d.status_str(), "unauthorized");
        assert_eq!(Decision::FORBIDDEN.status_str(), "forbidden");
    }

    #[test]
    fn from_predicate_collapses_to_forbidden() {
        assert_eq!(Decision::from_predicate(true), Decision::Allow);
        assert_eq!(Decision::from_predicate(false), Decision::FORBIDDEN);
    }

    #[test]
    fn denial_codes() {
        assert_error_codes(&[Denial::Unauthorized, Denial::Forbidden], "AUTH_");
        assert!(Denial::Unauthorized.is_recoverable());
        assert!(!Denial::Forbidden.is_recoverable());
    }

    #[test]
    fn denial_display() {
        assert!(Denial::Unauthorized.to_string().contains("authentication required"));
        assert!(Denial::Forbidden.to_string().starts_with("forbidden"));
    }

    #[test]
    fn decision_serde_shape() {
        let json = serde_json::to_string(&Decision::FORBIDDEN).expect("decision should serialize");
        assert_eq!(json, r#"{"outcome":"deny","reason":"forbidden"}"#);

        let allow = serde_json::to_string(&Decision::Allow).expect("decision should serialize");
        assert_eq!(allow, r#"{"outcome":"allow"}"#);
    }
}
