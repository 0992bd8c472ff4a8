//! In-memory credential store.

use super::StoreError;
use crowdgate_auth::{Credential, CredentialLookup, LookupError, Provider};
use crowdgate_types::UserId;
use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

/// Thread-safe, in-memory credential store.
///
/// Maps each user to the set of providers they have linked. Linking and
/// unlinking are the identity system's job; the authorization engine only
/// reads through [`CredentialLookup`].
///
/// # Example
///
/// ```
/// use crowdgate_auth::{Credential, CredentialLookup, Provider};
/// use crowdgate_runtime::InMemoryCredentialStore;
/// use crowdgate_types::UserId;
///
/// let store = InMemoryCredentialStore::new();
/// store.link(Credential::new(UserId::new(1), "Twitter"))?;
///
/// assert!(store.has_credential(UserId::new(1), &Provider::new("twitter"))?);
/// assert!(!store.has_credential(UserId::new(2), &Provider::new("twitter"))?);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Default)]
pub struct InMemoryCredentialStore {
    linked: RwLock<HashMap<UserId, HashSet<Provider>>>,
}

impl InMemoryCredentialStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Links a credential. Returns `false` if it was already linked.
    ///
    /// # Errors
    ///
    /// [`StoreError::LockPoisoned`] if a writer panicked earlier.
    pub fn link(&self, credential: Credential) -> Result<bool, StoreError> {
        let mut linked = self.linked.write().map_err(|e| {
            tracing::error!("credential_store: lock poisoned on link: {e}");
            StoreError::poisoned("link")
        })?;
        Ok(linked
            .entry(credential.owner_id)
            .or_default()
            .insert(credential.provider))
    }

    /// Unlinks a credential. Returns `false` if it was not linked.
    ///
    /// # Errors
    ///
    /// [`StoreError::LockPoisoned`] if a writer panicked earlier.
    pub fn unlink(&self, owner: UserId, provider: &Provider) -> Result<bool, StoreError> {
        let mut linked = self.linked.write().map_err(|e| {
            tracing::error!("credential_store: lock poisoned on unlink: {e}");
            StoreError::poisoned("unlink")
        })?;

        let Some(providers) = linked.get_mut(&owner) else {
            return Ok(false);
        };
        let removed = providers.remove(provider);
        if providers.is_empty() {
            linked.remove(&owner);
        }
        Ok(removed)
    }

    /// Returns the providers linked by `owner`, sorted by name.
    ///
    /// # Errors
    ///
    /// [`StoreError::LockPoisoned`] if a writer panicked earlier.
    pub fn providers_of(&self, owner: UserId) -> Result<Vec<Provider>, StoreError> {
        let linked = self.linked.read().map_err(|e| {
            tracing::error!("credential_store: lock poisoned on providers_of: {e}");
            StoreError::poisoned("providers_of")
        })?;

        let mut providers: Vec<Provider> = linked
            .get(&owner)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default();
        providers.sort();
        Ok(providers)
    }
}

impl CredentialLookup for InMemoryCredentialStore {
    fn has_credential(&self, owner: UserId, provider: &Provider) -> Result<bool, LookupError> {
        let linked = self.linked.read().map_err(|e| {
            tracing::error!("credential_store: lock poisoned on lookup: {e}");
            LookupError::from(StoreError::poisoned("lookup"))
        })?;
        Ok(linked
            .get(&owner)
            .is_some_and(|providers| providers.contains(provider)))
    }
}
