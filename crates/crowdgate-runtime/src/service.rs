//! Authorized submission operations.
//!
//! [`SubmissionService`] is what a request handler would sit on: every call
//! asks the [`DecisionEngine`] first and touches the store only on Allow.
//!
//! # Create Race
//!
//! ```text
//! thread A: require_action(Create) ── Allow ──► insert ── Ok
//! thread B: require_action(Create) ── Allow ──► insert ── DuplicateSubmission
//!                                                              │
//!                                                              ▼
//!                                                  AuthError::Denied(Forbidden)
//! ```
//!
//! The engine's uniqueness check can pass for two racing requests; the
//! store's write-side constraint decides, and the loser sees the same
//! Forbidden a sequential duplicate would.

use crate::engine::DecisionEngine;
use crate::store::{InMemorySubmissionStore, StoreError};
use crowdgate_auth::{Action, AuthError, SubmissionRecord};
use crowdgate_types::{Actor, JobId, SubmissionId, WorkUnitId};
use std::sync::Arc;

/// Submission operations guarded by the decision engine.
///
/// # Example
///
/// ```
/// use crowdgate_auth::{AuthError, Denial};
/// use crowdgate_runtime::SubmissionService;
/// use crowdgate_types::{Actor, JobId, WorkUnitId};
///
/// let service = SubmissionService::in_memory();
/// let visitor = Actor::anonymous("127.0.0.1");
///
/// let id = service.create(&visitor, WorkUnitId::new(1), JobId::new(1), serde_json::json!("yes"))?;
/// assert!(service.read(&visitor, id)?.is_some());
///
/// let again = service.create(&visitor, WorkUnitId::new(1), JobId::new(1), serde_json::json!("no"));
/// assert_eq!(again, Err(AuthError::Denied(Denial::Forbidden)));
/// # Ok::<(), AuthError>(())
/// ```
#[derive(Debug)]
pub struct SubmissionService {
    engine: DecisionEngine,
    store: Arc<InMemorySubmissionStore>,
}

impl SubmissionService {
    /// Creates a service over an engine and the store it reads from.
    ///
    /// The engine should have been built with `store` as its submission
    /// lookup, otherwise create checks consult a different data set.
    #[must_use]
    pub fn new(engine: DecisionEngine, store: Arc<InMemorySubmissionStore>) -> Self {
        Self { engine, store }
    }

    /// Creates a service with fresh in-memory stores and default config.
    #[must_use]
    pub fn in_memory() -> Self {
        let store = Arc::new(InMemorySubmissionStore::new());
        let engine = DecisionEngine::new(
            store.clone(),
            Arc::new(crate::store::InMemoryCredentialStore::new()),
        );
        Self::new(engine, store)
    }

    /// Returns the engine.
    #[must_use]
    pub fn engine(&self) -> &DecisionEngine {
        &self.engine
    }

    /// Returns the backing store.
    #[must_use]
    pub fn store(&self) -> &Arc<InMemorySubmissionStore> {
        &self.store
    }

    /// Records `actor`'s answer to a work unit.
    ///
    /// # Errors
    ///
    /// - [`AuthError::Denied`] (Forbidden) if `actor` already answered the
    ///   unit, including when a concurrent create won the race.
    /// - [`AuthError::Lookup`] if the store could not be consulted.
    pub fn create(
        &self,
        actor: &Actor,
        work_unit: WorkUnitId,
        job: JobId,
        payload: serde_json::Value,
    ) -> Result<SubmissionId, AuthError> {
        let draft = SubmissionRecord::draft_for(actor, work_unit, job, payload);
        self.engine.require_action(actor, Action::Create, &draft)?;

        self.store.insert(draft).map_err(|e| {
            if let StoreError::DuplicateSubmission { .. } = e {
                tracing::warn!(
                    actor = %actor,
                    work_unit = %work_unit,
                    "concurrent create rejected by store"
                );
            }
            AuthError::from(e)
        })
    }

    /// Fetches a record. `Ok(None)` if no record has `id`.
    ///
    /// # Errors
    ///
    /// [`AuthError`] if the engine denies the read or the store fails.
    pub fn read(
        &self,
        actor: &Actor,
        id: SubmissionId,
    ) -> Result<Option<SubmissionRecord>, AuthError> {
        let Some(record) = self.store.get(id)? else {
            return Ok(None);
        };
        self.engine.require_action(actor, Action::Read, &record)?;
        Ok(Some(record))
    }

    /// Replaces a record's payload.
    ///
    /// Submissions are immutable once recorded, so this always fails for an
    /// existing record: Unauthorized for anonymous actors, Forbidden for
    /// everyone else.
    ///
    /// # Errors
    ///
    /// [`AuthError`] from the engine, or from the store on lookup failure.
    pub fn update(
        &self,
        actor: &Actor,
        id: SubmissionId,
        payload: serde_json::Value,
    ) -> Result<Option<SubmissionRecord>, AuthError> {
        let Some(record) = self.store.get(id)? else {
            return Ok(None);
        };
        self.engine.require_action(actor, Action::Update, &record)?;

        let updated = SubmissionRecord::new(
            record.id(),
            record.work_unit_id(),
            record.job_id(),
            record.marker().clone(),
            payload,
        );
        self.store.remove(id)?;
        self.store.insert(updated.clone())?;
        Ok(Some(updated))
    }

    /// Deletes a record and returns it. `Ok(None)` if no record has `id`.
    ///
    /// # Errors
    ///
    /// [`AuthError`] if the engine denies the delete or the store fails.
    pub fn delete(
        &self,
        actor: &Actor,
        id: SubmissionId,
    ) -> Result<Option<SubmissionRecord>, AuthError> {
        let Some(record) = self.store.get(id)? else {
            return Ok(None);
        };
        self.engine.require_action(actor, Action::Delete, &record)?;
        Ok(self.store.remove(id)?)
    }
}
