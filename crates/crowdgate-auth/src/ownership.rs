//! Submitter resolution and ownership comparison.

use crate::{SubmissionRecord, Submitter, SubmitterMarker};
use crowdgate_types::Actor;

/// Relationship between an actor and a record's submitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
    /// The actor is the authenticated submitter of the record.
    Owner,
    /// The record was submitted by someone else, or anonymously.
    Other,
    /// The record's submitter marker is inconsistent.
    Unresolved,
}

/// Extracts a record's submitter identity and compares it to an actor.
///
/// Stateless; all methods are associated functions.
///
/// # Ownership
///
/// Only an authenticated submitter can be owned. An anonymous actor never
/// owns anything, even a record carrying its own origin: origins identify a
/// submitter for uniqueness, they do not prove who is asking.
///
/// # Example
///
/// ```
/// use crowdgate_auth::{Ownership, OwnershipResolver, SubmissionRecord, SubmitterMarker};
/// use crowdgate_types::{Actor, JobId, SubmissionId, UserId, WorkUnitId};
///
/// let record = SubmissionRecord::new(
///     SubmissionId::new(),
///     WorkUnitId::new(1),
///     JobId::new(1),
///     SubmitterMarker::user(UserId::new(7)),
///     serde_json::Value::Null,
/// );
///
/// let owner = Actor::authenticated(UserId::new(7));
/// let other = Actor::authenticated(UserId::new(9));
/// assert_eq!(OwnershipResolver::ownership(&owner, &record), Ownership::Owner);
/// assert_eq!(OwnershipResolver::ownership(&other, &record), Ownership::Other);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct OwnershipResolver;

impl OwnershipResolver {
    /// Resolves a persisted marker into a submitter identity.
    ///
    /// Returns `None` unless exactly one of user id and origin is set.
    #[must_use]
    pub fn resolve_marker(marker: &SubmitterMarker) -> Option<Submitter> {
        match (&marker.user_id, &marker.origin) {
            (Some(id), None) => Some(Submitter::User(*id)),
            (None, Some(origin)) => Some(Submitter::Anonymous(origin.clone())),
            _ => None,
        }
    }

    /// Resolves the submitter recorded on `record`.
    #[must_use]
    pub fn submitter(record: &SubmissionRecord) -> Option<Submitter> {
        Self::resolve_marker(record.marker())
    }

    /// Compares `actor` against the submitter of `record`.
    #[must_use]
    pub fn ownership(actor: &Actor, record: &SubmissionRecord) -> Ownership {
        let Some(submitter) = Self::submitter(record) else {
            return Ownership::Unresolved;
        };

        match (actor.user_id(), submitter) {
            (Some(actor_id), Submitter::User(owner_id)) if actor_id == owner_id => {
                Ownership::Owner
            }
            _ => Ownership::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crowdgate_types::{JobId, OriginMarker, SubmissionId, UserId, WorkUnitId};

    fn record(marker: SubmitterMarker) -> SubmissionRecord {
        SubmissionRecord::new(
            SubmissionId::new(),
            WorkUnitId::new(1),
            JobId::new(1),
            marker,
            serde_json::Value::Null,
        )
    }

    #[test]
    fn resolve_consistent_markers() {
        assert_eq!(
            OwnershipResolver::resolve_marker(&SubmitterMarker::user(UserId::new(2))),
            Some(Submitter::User(UserId::new(2)))
        );
        assert_eq!(
            OwnershipResolver::resolve_marker(&SubmitterMarker::anonymous("127.0.0.1")),
            Some(Submitter::Anonymous(OriginMarker::new("127.0.0.1")))
        );
    }

    #[test]
    fn resolve_inconsistent_markers() {
        assert_eq!(
            OwnershipResolver::resolve_marker(&SubmitterMarker::default()),
            None
        );

        let both = SubmitterMarker {
            user_id: Some(UserId::new(2)),
            origin: Some(OriginMarker::new("127.0.0.1")),
        };
        assert_eq!(OwnershipResolver::resolve_marker(&both), None);
    }

    #[test]
    fn anonymous_actor_never_owns() {
        let rec = record(SubmitterMarker::anonymous("127.0.0.1"));
        let actor = Actor::anonymous("127.0.0.1");
        assert_eq!(OwnershipResolver::ownership(&actor, &rec), Ownership::Other);
    }

    #[test]
    fn authenticated_actor_does_not_own_anonymous_record() {
        let rec = record(SubmitterMarker::anonymous("127.0.0.1"));
        let actor = Actor::authenticated(UserId::new(1));
        assert_eq!(OwnershipResolver::ownership(&actor, &rec), Ownership::Other);
    }

    #[test]
    fn privilege_does_not_imply_ownership() {
        let rec = record(SubmitterMarker::user(UserId::new(2)));
        let admin = Actor::privileged(UserId::new(1));
        assert_eq!(OwnershipResolver::ownership(&admin, &rec), Ownership::Other);
    }

    #[test]
    fn unresolved_marker() {
        let rec = record(SubmitterMarker::default());
        let actor = Actor::authenticated(UserId::new(1));
        assert_eq!(
            OwnershipResolver::ownership(&actor, &rec),
            Ownership::Unresolved
        );
    }
}
