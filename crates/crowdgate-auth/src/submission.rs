//! Submission records.
//!
//! A [`SubmissionRecord`] is one actor's answer to one work unit. The
//! submitter is recorded at creation time as a [`SubmitterMarker`] (the
//! persisted, nullable pair of user id and origin) and never reassigned.

use crowdgate_types::{Actor, JobId, OriginMarker, SubmissionId, UserId, WorkUnitId};
use serde::{Deserialize, Serialize};

/// Resolved identity of whoever created a submission.
///
/// Compared by kind: user ids by equality, anonymous submitters by origin
/// equality. A `User` never equals an `Anonymous`, even if some external
/// mapping would relate them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Submitter {
    /// Registered user.
    User(UserId),
    /// Anonymous origin.
    Anonymous(OriginMarker),
}

impl Submitter {
    /// Returns the submitter identity an actor would be recorded under.
    #[must_use]
    pub fn of(actor: &Actor) -> Self {
        match actor {
            Actor::Authenticated { id, .. } => Self::User(*id),
            Actor::Anonymous { origin } => Self::Anonymous(origin.clone()),
        }
    }

    /// Returns the user id for a registered submitter.
    #[must_use]
    pub fn user_id(&self) -> Option<UserId> {
        match self {
            Self::User(id) => Some(*id),
            Self::Anonymous(_) => None,
        }
    }
}

impl std::fmt::Display for Submitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User(id) => write!(f, "{id}"),
            Self::Anonymous(origin) => write!(f, "anonymous@{origin}"),
        }
    }
}

/// Persisted submitter columns.
///
/// Storage keeps the submitter as two nullable columns. A consistent row has
/// exactly one of them set; anything else is resolved as "no identity" and
/// denied wherever ownership matters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubmitterMarker {
    /// Registered submitter, if any.
    pub user_id: Option<UserId>,
    /// Anonymous submitter origin, if any.
    pub origin: Option<OriginMarker>,
}

impl SubmitterMarker {
    /// Marker for a registered submitter.
    #[must_use]
    pub fn user(id: UserId) -> Self {
        Self {
            user_id: Some(id),
            origin: None,
        }
    }

    /// Marker for an anonymous submitter.
    #[must_use]
    pub fn anonymous(origin: impl Into<OriginMarker>) -> Self {
        Self {
            user_id: None,
            origin: Some(origin.into()),
        }
    }
}

impl From<Submitter> for SubmitterMarker {
    fn from(submitter: Submitter) -> Self {
        match submitter {
            Submitter::User(id) => Self::user(id),
            Submitter::Anonymous(origin) => Self::anonymous(origin),
        }
    }
}

/// A worker's single answer to a work unit.
///
/// # Example
///
/// ```
/// use crowdgate_auth::{SubmissionRecord, Submitter};
/// use crowdgate_types::{Actor, JobId, UserId, WorkUnitId};
///
/// let worker = Actor::authenticated(UserId::new(7));
/// let record = SubmissionRecord::draft_for(
///     &worker,
///     WorkUnitId::new(1),
///     JobId::new(1),
///     serde_json::json!({"answer": "yes"}),
/// );
///
/// assert_eq!(record.work_unit_id(), WorkUnitId::new(1));
/// assert_eq!(record.marker().user_id, Some(UserId::new(7)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    id: SubmissionId,
    work_unit_id: WorkUnitId,
    job_id: JobId,
    submitter: SubmitterMarker,
    #[serde(default)]
    payload: serde_json::Value,
}

impl SubmissionRecord {
    /// Builds a record from its persisted parts.
    #[must_use]
    pub fn new(
        id: SubmissionId,
        work_unit_id: WorkUnitId,
        job_id: JobId,
        submitter: impl Into<SubmitterMarker>,
        payload: serde_json::Value,
    ) -> Self {
        Self {
            id,
            work_unit_id,
            job_id,
            submitter: submitter.into(),
            payload,
        }
    }

    /// Builds a candidate record stamped with the actor's identity.
    #[must_use]
    pub fn draft_for(
        actor: &Actor,
        work_unit_id: WorkUnitId,
        job_id: JobId,
        payload: serde_json::Value,
    ) -> Self {
        Self::new(
            SubmissionId::new(),
            work_unit_id,
            job_id,
            Submitter::of(actor),
            payload,
        )
    }

    /// Returns the record id.
    #[must_use]
    pub fn id(&self) -> SubmissionId {
        self.id
    }

    /// Returns the answered work unit.
    #[must_use]
    pub fn work_unit_id(&self) -> WorkUnitId {
        self.work_unit_id
    }

    /// Returns the work unit's parent job.
    #[must_use]
    pub fn job_id(&self) -> JobId {
        self.job_id
    }

    /// Returns the persisted submitter marker.
    #[must_use]
    pub fn marker(&self) -> &SubmitterMarker {
        &self.submitter
    }

    /// Returns the opaque payload.
    #[must_use]
    pub fn payload(&self) -> &serde_json::Value {
        &self.payload
    }
}
