//! Store errors.

use crowdgate_auth::{AuthError, Denial, LookupError, Submitter};
use crowdgate_types::{ErrorCode, SubmissionId, WorkUnitId};
use thiserror::Error;

/// Error raised by the in-memory stores.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A record for this (work unit, submitter) already exists.
    #[error("{submitter} already answered {work_unit}")]
    DuplicateSubmission {
        work_unit: WorkUnitId,
        submitter: Submitter,
    },

    /// The record's submitter marker does not resolve to one identity.
    #[error("submission {id} has no consistent submitter")]
    MalformedSubmitter { id: SubmissionId },

    /// A store lock was poisoned by a panicking writer.
    #[error("store lock poisoned during {context}")]
    LockPoisoned { context: &'static str },
}

impl StoreError {
    /// Creates a lock poisoned error.
    pub fn poisoned(context: &'static str) -> Self {
        Self::LockPoisoned { context }
    }
}

impl ErrorCode for StoreError {
    fn code(&self) -> &'static str {
        match self {
            Self::DuplicateSubmission { .. } => "STORE_DUPLICATE_SUBMISSION",
            Self::MalformedSubmitter { .. } => "STORE_MALFORMED_SUBMITTER",
            Self::LockPoisoned { .. } => "STORE_LOCK_POISONED",
        }
    }

    fn is_recoverable(&self) -> bool {
        matches!(self, Self::LockPoisoned { .. })
    }
}

impl From<StoreError> for LookupError {
    fn from(err: StoreError) -> Self {
        LookupError::unavailable(err.to_string())
    }
}

/// Write-side failures seen by a request handler.
///
/// A duplicate that slipped past the create check, or a record nobody can
/// own, is a Forbidden answer. A poisoned lock means no answer at all.
impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateSubmission { .. } | StoreError::MalformedSubmitter { .. } => {
                AuthError::Denied(Denial::Forbidden)
            }
            StoreError::LockPoisoned { .. } => AuthError::Lookup(err.into()),
        }
    }
}
