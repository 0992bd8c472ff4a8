//! In-memory submission store.

use super::StoreError;
use crowdgate_auth::{
    LookupError, OwnershipResolver, SubmissionLookup, SubmissionRecord, Submitter,
};
use crowdgate_types::{SubmissionId, WorkUnitId};
use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

#[derive(Debug, Default)]
struct Inner {
    records: HashMap<SubmissionId, SubmissionRecord>,
    /// (work unit, submitter) of every stored record.
    index: HashSet<(WorkUnitId, Submitter)>,
}

/// Thread-safe, in-memory submission store.
///
/// Implements [`SubmissionLookup`] for the engine and owns the
/// (work unit, submitter) uniqueness constraint on the write side.
///
/// # Thread Safety
///
/// Records and the uniqueness index sit behind one `RwLock`, so the
/// duplicate check and the insert happen under the same write guard.
/// Lookups take the read lock and run concurrently.
///
/// # Example
///
/// ```
/// use crowdgate_auth::{SubmissionLookup, SubmissionRecord, Submitter};
/// use crowdgate_runtime::{InMemorySubmissionStore, StoreError};
/// use crowdgate_types::{Actor, JobId, UserId, WorkUnitId};
///
/// let store = InMemorySubmissionStore::new();
/// let worker = Actor::authenticated(UserId::new(7));
/// let draft = |unit| {
///     SubmissionRecord::draft_for(&worker, WorkUnitId::new(unit), JobId::new(1), serde_json::Value::Null)
/// };
///
/// store.insert(draft(1))?;
/// assert!(store.exists_by_work_unit_and_submitter(WorkUnitId::new(1), &Submitter::of(&worker))?);
/// assert!(matches!(store.insert(draft(1)), Err(StoreError::DuplicateSubmission { .. })));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Default)]
pub struct InMemorySubmissionStore {
    inner: RwLock<Inner>,
}

impl InMemorySubmissionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a record, enforcing one record per (work unit, submitter).
    ///
    /// # Errors
    ///
    /// - [`StoreError::MalformedSubmitter`] if the marker does not resolve.
    /// - [`StoreError::DuplicateSubmission`] if the pair is already taken.
    /// - [`StoreError::LockPoisoned`] if a writer panicked earlier.
    pub fn insert(&self, record: SubmissionRecord) -> Result<SubmissionId, StoreError> {
        let id = record.id();
        let submitter =
            OwnershipResolver::submitter(&record).ok_or(StoreError::MalformedSubmitter { id })?;
        let key = (record.work_unit_id(), submitter);

        let mut inner = self.inner.write().map_err(|e| {
            tracing::error!("submission_store: lock poisoned on insert: {e}");
            StoreError::poisoned("insert")
        })?;

        if inner.index.contains(&key) {
            let (work_unit, submitter) = key;
            return Err(StoreError::DuplicateSubmission {
                work_unit,
                submitter,
            });
        }

        inner.index.insert(key);
        inner.records.insert(id, record);
        Ok(id)
    }

    /// Returns a copy of the record with `id`.
    ///
    /// # Errors
    ///
    /// [`StoreError::LockPoisoned`] if a writer panicked earlier.
    pub fn get(&self, id: SubmissionId) -> Result<Option<SubmissionRecord>, StoreError> {
        let inner = self.inner.read().map_err(|e| {
            tracing::error!("submission_store: lock poisoned on get: {e}");
            StoreError::poisoned("get")
        })?;
        Ok(inner.records.get(&id).cloned())
    }

    /// Removes and returns the record with `id`, freeing its
    /// (work unit, submitter) slot.
    ///
    /// # Errors
    ///
    /// [`StoreError::LockPoisoned`] if a writer panicked earlier.
    pub fn remove(&self, id: SubmissionId) -> Result<Option<SubmissionRecord>, StoreError> {
        let mut inner = self.inner.write().map_err(|e| {
            tracing::error!("submission_store: lock poisoned on remove: {e}");
            StoreError::poisoned("remove")
        })?;

        let Some(record) = inner.records.remove(&id) else {
            return Ok(None);
        };
        if let Some(submitter) = OwnershipResolver::submitter(&record) {
            inner.index.remove(&(record.work_unit_id(), submitter));
        }
        Ok(Some(record))
    }

    /// Returns the number of stored records (0 if the lock is poisoned).
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.records.len()).unwrap_or(0)
    }

    /// Returns `true` if the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SubmissionLookup for InMemorySubmissionStore {
    fn exists_by_work_unit_and_submitter(
        &self,
        work_unit: WorkUnitId,
        submitter: &Submitter,
    ) -> Result<bool, LookupError> {
        let inner = self.inner.read().map_err(|e| {
            tracing::error!("submission_store: lock poisoned on lookup: {e}");
            LookupError::from(StoreError::poisoned("lookup"))
        })?;
        Ok(inner.index.contains(&(work_unit, submitter.clone())))
    }
}
