//! Error types for authorization calls.
//!
//! ```text
//! AuthError ─┬─ Denied(Denial)       rule said no (401 / 403)
//!            └─ Lookup(LookupError)  persistence collaborator failed
//! ```
//!
//! A lookup failure is not a denial: the engine could not reach a verdict.
//! Callers on the raising path decide whether to retry; the boolean
//! credential path collapses it to `false`.

use crate::Denial;
use crowdgate_types::ErrorCode;
use thiserror::Error;

/// Failure of a persistence lookup consulted by a rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The backing store could not answer (outage, poisoned lock, timeout).
    #[error("lookup unavailable: {reason}")]
    Unavailable {
        /// Human-readable cause.
        reason: String,
    },
}

impl LookupError {
    /// Creates an [`LookupError::Unavailable`].
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }
}

impl ErrorCode for LookupError {
    fn code(&self) -> &'static str {
        match self {
            Self::Unavailable { .. } => "LOOKUP_UNAVAILABLE",
        }
    }

    fn is_recoverable(&self) -> bool {
        true
    }
}

/// Error returned by the raising (`require_action`) call shape.
///
/// # Example
///
/// ```
/// use crowdgate_auth::{AuthError, Denial};
///
/// let err = AuthError::from(Denial::Unauthorized);
/// assert_eq!(err.denial(), Some(Denial::Unauthorized));
/// assert_eq!(err.http_status(), 401);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// A rule denied the request.
    #[error(transparent)]
    Denied(#[from] Denial),

    /// A lookup needed by the rule failed.
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

impl AuthError {
    /// Returns the denial reason if this is a rule denial.
    #[must_use]
    pub fn denial(&self) -> Option<Denial> {
        match self {
            Self::Denied(denial) => Some(*denial),
            Self::Lookup(_) => None,
        }
    }

    /// Returns the HTTP status a request handler should render.
    ///
    /// Lookup failures map to 503 so clients retry later.
    #[must_use]
    pub fn http_status(&self) -> u16 {
        match self {
            Self::Denied(denial) => denial.http_status(),
            Self::Lookup(_) => 503,
        }
    }
}

impl ErrorCode for AuthError {
    fn code(&self) -> &'static str {
        match self {
            Self::Denied(denial) => denial.code(),
            Self::Lookup(err) => err.code(),
        }
    }

    fn is_recoverable(&self) -> bool {
        match self {
            Self::Denied(denial) => denial.is_recoverable(),
            Self::Lookup(err) => err.is_recoverable(),
        }
    }
}
