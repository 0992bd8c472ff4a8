//! Persistence lookups consumed by the rules.
//!
//! The engine does not define how entities are stored. It asks exactly two
//! questions of the persistence collaborator:
//!
//! | Trait | Question |
//! |-------|----------|
//! | [`SubmissionLookup`] | Does a submission exist for (work unit, submitter)? |
//! | [`CredentialLookup`] | Does this user hold a credential for this provider? |
//!
//! # Architecture
//!
//! ```text
//! SubmissionLookup / CredentialLookup (crowdgate-auth)   <- traits, no storage deps
//!          │
//!          ├── InMemorySubmissionStore / InMemoryCredentialStore (crowdgate-runtime)
//!          └── (embedder) SQL-backed implementations
//! ```

use crate::{LookupError, Provider, Submitter};
use crowdgate_types::{UserId, WorkUnitId};

/// Existence lookup for the create-uniqueness rule.
///
/// # Example
///
/// ```
/// use crowdgate_auth::{LookupError, SubmissionLookup, Submitter};
/// use crowdgate_types::WorkUnitId;
///
/// struct NeverAnswered;
///
/// impl SubmissionLookup for NeverAnswered {
///     fn exists_by_work_unit_and_submitter(
///         &self,
///         _work_unit: WorkUnitId,
///         _submitter: &Submitter,
///     ) -> Result<bool, LookupError> {
///         Ok(false)
///     }
/// }
///
/// let lookup = NeverAnswered;
/// let submitter = Submitter::Anonymous("127.0.0.1".into());
/// assert_eq!(lookup.exists_by_work_unit_and_submitter(WorkUnitId::new(1), &submitter), Ok(false));
/// ```
pub trait SubmissionLookup: Send + Sync {
    /// Returns `true` if a submission already exists for `work_unit` by
    /// `submitter`.
    fn exists_by_work_unit_and_submitter(
        &self,
        work_unit: WorkUnitId,
        submitter: &Submitter,
    ) -> Result<bool, LookupError>;
}

/// Ownership lookup for the credential read rule.
pub trait CredentialLookup: Send + Sync {
    /// Returns `true` if `owner` holds a credential for `provider`.
    fn has_credential(&self, owner: UserId, provider: &Provider) -> Result<bool, LookupError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    struct Fixed(HashSet<(WorkUnitId, Submitter)>);

    impl SubmissionLookup for Fixed {
        fn exists_by_work_unit_and_submitter(
            &self,
            work_unit: WorkUnitId,
            submitter: &Submitter,
        ) -> Result<bool, LookupError> {
            Ok(self.0.contains(&(work_unit, submitter.clone())))
        }
    }

    struct Unreachable;

    impl CredentialLookup for Unreachable {
        fn has_credential(&self, _owner: UserId, _provider: &Provider) -> Result<bool, LookupError> {
            Err(LookupError::unavailable("offline"))
        }
    }

    #[test]
    fn trait_objects_work() {
        let submitter = Submitter::User(UserId::new(1));
        let mut seen = HashSet::new();
        seen.insert((WorkUnitId::new(1), submitter.clone()));

        let lookup: Box<dyn SubmissionLookup> = Box::new(Fixed(seen));
        assert_eq!(
            lookup.exists_by_work_unit_and_submitter(WorkUnitId::new(1), &submitter),
            Ok(true)
        );
        assert_eq!(
            lookup.exists_by_work_unit_and_submitter(WorkUnitId::new(2), &submitter),
            Ok(false)
        );

        let creds: Box<dyn CredentialLookup> = Box::new(Unreachable);
        assert!(creds
            .has_credential(UserId::new(1), &Provider::new("twitter"))
            .is_err());
    }
}
