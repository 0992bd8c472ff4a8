//! Create-time uniqueness check.
//!
//! One submission per (work unit, submitter). The check is advisory: two
//! concurrent creates can both see [`Uniqueness::Vacant`]. Storage must
//! enforce the same constraint and the caller must surface a violating
//! write as `Denial::Forbidden`.

use crate::{LookupError, OwnershipResolver, SubmissionLookup, SubmissionRecord};

/// Result of a uniqueness check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Uniqueness {
    /// No submission exists yet for this (work unit, submitter).
    Vacant,
    /// The submitter already answered this work unit.
    Taken,
    /// The candidate's submitter marker is inconsistent.
    Unresolved,
}

/// Answers "does a submission already exist for this candidate's
/// (work unit, submitter)?" through a [`SubmissionLookup`].
///
/// # Example
///
/// ```
/// use crowdgate_auth::{
///     LookupError, SubmissionLookup, SubmissionRecord, Submitter, Uniqueness, UniquenessChecker,
/// };
/// use crowdgate_types::{Actor, JobId, WorkUnitId};
///
/// struct Empty;
///
/// impl SubmissionLookup for Empty {
///     fn exists_by_work_unit_and_submitter(
///         &self,
///         _work_unit: WorkUnitId,
///         _submitter: &Submitter,
///     ) -> Result<bool, LookupError> {
///         Ok(false)
///     }
/// }
///
/// let actor = Actor::anonymous("127.0.0.1");
/// let candidate =
///     SubmissionRecord::draft_for(&actor, WorkUnitId::new(1), JobId::new(1), serde_json::Value::Null);
///
/// let checker = UniquenessChecker::new(&Empty);
/// assert_eq!(checker.check(&candidate), Ok(Uniqueness::Vacant));
/// ```
#[derive(Clone, Copy)]
pub struct UniquenessChecker<'a> {
    lookup: &'a dyn SubmissionLookup,
}

impl<'a> UniquenessChecker<'a> {
    /// Creates a checker over `lookup`.
    #[must_use]
    pub fn new(lookup: &'a dyn SubmissionLookup) -> Self {
        Self { lookup }
    }

    /// Checks whether `candidate` would duplicate an existing submission.
    ///
    /// # Errors
    ///
    /// Propagates [`LookupError`] from the underlying lookup.
    pub fn check(&self, candidate: &SubmissionRecord) -> Result<Uniqueness, LookupError> {
        let Some(submitter) = OwnershipResolver::submitter(candidate) else {
            return Ok(Uniqueness::Unresolved);
        };

        let exists = self
            .lookup
            .exists_by_work_unit_and_submitter(candidate.work_unit_id(), &submitter)?;

        Ok(if exists {
            Uniqueness::Taken
        } else {
            Uniqueness::Vacant
        })
    }
}

impl std::fmt::Debug for UniquenessChecker<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UniquenessChecker").finish_non_exhaustive()
    }
}
