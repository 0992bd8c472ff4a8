//! Decision engine.
//!
//! [`DecisionEngine`] is the single entry point request handlers call. It
//! builds a [`RuleContext`] from the caller's actor and the shared lookups,
//! fetches the rule from [`PermissionRegistry`], applies it, and writes one
//! audit event per evaluation.
//!
//! # Call Shapes
//!
//! | Method | Returns | Lookup failure |
//! |--------|---------|----------------|
//! | [`evaluate_submission`](DecisionEngine::evaluate_submission) | `Result<Decision, LookupError>` | `Err` |
//! | [`evaluate_credential`](DecisionEngine::evaluate_credential) | `Result<Decision, LookupError>` | `Err` |
//! | [`require_action`](DecisionEngine::require_action) | `Result<(), AuthError>` | `AuthError::Lookup` |
//! | [`is_allowed`](DecisionEngine::is_allowed) | `bool` | `false` (logged) |
//!
//! # Audit Logging
//!
//! - Allowed decisions: debug level
//! - Denied decisions: warn level
//! - Lookup failures: error level
//!
//! Allowed and denied events are gated by [`AuditConfig`].

use crate::config::{AuditConfig, EngineConfig};
use crowdgate_auth::{
    Action, AuthError, CredentialLookup, Decision, Domain, LookupError, PermissionRegistry,
    Provider, RuleContext, SubmissionLookup, SubmissionRecord,
};
use crowdgate_types::Actor;
use std::collections::HashSet;
use std::sync::Arc;

/// Authorization decision engine.
///
/// Holds no per-request state: the actor is passed into every call, and the
/// lookups are shared behind `Arc` so one engine can serve many threads.
///
/// # Example
///
/// ```
/// use crowdgate_auth::{Action, Decision, SubmissionRecord};
/// use crowdgate_runtime::{DecisionEngine, InMemoryCredentialStore, InMemorySubmissionStore};
/// use crowdgate_types::{Actor, JobId, UserId, WorkUnitId};
/// use std::sync::Arc;
///
/// let engine = DecisionEngine::new(
///     Arc::new(InMemorySubmissionStore::new()),
///     Arc::new(InMemoryCredentialStore::new()),
/// );
///
/// let worker = Actor::authenticated(UserId::new(7));
/// let draft = SubmissionRecord::draft_for(
///     &worker,
///     WorkUnitId::new(1),
///     JobId::new(1),
///     serde_json::Value::Null,
/// );
///
/// assert_eq!(
///     engine.evaluate_submission(&worker, Action::Create, &draft)?,
///     Decision::Allow
/// );
/// assert_eq!(
///     engine.evaluate_submission(&worker, Action::Update, &draft)?,
///     Decision::FORBIDDEN
/// );
/// # Ok::<(), crowdgate_auth::LookupError>(())
/// ```
pub struct DecisionEngine {
    submissions: Arc<dyn SubmissionLookup>,
    credentials: Arc<dyn CredentialLookup>,
    audit: AuditConfig,
    /// `None` accepts every provider name.
    known_providers: Option<HashSet<Provider>>,
}

impl DecisionEngine {
    /// Creates an engine with default configuration.
    #[must_use]
    pub fn new(
        submissions: Arc<dyn SubmissionLookup>,
        credentials: Arc<dyn CredentialLookup>,
    ) -> Self {
        Self {
            submissions,
            credentials,
            audit: AuditConfig::default(),
            known_providers: None,
        }
    }

    /// Applies audit and provider settings from a loaded config.
    #[must_use]
    pub fn with_config(mut self, config: &EngineConfig) -> Self {
        self.audit = config.audit.clone();
        self.known_providers = config.credentials.known_providers();
        self
    }

    /// Returns the active audit settings.
    #[must_use]
    pub fn audit_config(&self) -> &AuditConfig {
        &self.audit
    }

    /// Returns `true` if the engine recognizes the provider name.
    #[must_use]
    pub fn is_known_provider(&self, provider: &Provider) -> bool {
        self.known_providers
            .as_ref()
            .map_or(true, |known| known.contains(provider))
    }

    /// Decides whether `actor` may perform `action` on a submission.
    ///
    /// For [`Action::Create`] the record is the candidate about to be
    /// stored, already stamped with its submitter.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError`] if the uniqueness lookup fails.
    pub fn evaluate_submission(
        &self,
        actor: &Actor,
        action: Action,
        record: &SubmissionRecord,
    ) -> Result<Decision, LookupError> {
        let ctx = self.context(actor);
        let outcome = PermissionRegistry::submission(action).apply(&ctx, record);

        match &outcome {
            Ok(Decision::Allow) => {
                if self.audit.log_allowed {
                    tracing::debug!(
                        domain = %Domain::Submission,
                        action = %action,
                        actor = %actor,
                        work_unit = %record.work_unit_id(),
                        "submission access allowed"
                    );
                }
            }
            Ok(Decision::Deny(denial)) => {
                if self.audit.log_denied {
                    tracing::warn!(
                        domain = %Domain::Submission,
                        action = %action,
                        actor = %actor,
                        work_unit = %record.work_unit_id(),
                        "submission access denied: {denial}"
                    );
                }
            }
            Err(e) => {
                tracing::error!(
                    domain = %Domain::Submission,
                    action = %action,
                    actor = %actor,
                    work_unit = %record.work_unit_id(),
                    "submission decision failed: {e}"
                );
            }
        }

        outcome
    }

    /// Decides whether `actor` may perform `action` on the credential for
    /// `provider`.
    ///
    /// A provider outside the configured list is refused before any lookup.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError`] if the credential lookup fails.
    pub fn evaluate_credential(
        &self,
        actor: &Actor,
        action: Action,
        provider: &Provider,
    ) -> Result<Decision, LookupError> {
        let outcome = if self.is_known_provider(provider) {
            let ctx = self.context(actor);
            PermissionRegistry::credential(action).apply(&ctx, provider)
        } else {
            Ok(Decision::FORBIDDEN)
        };

        match &outcome {
            Ok(Decision::Allow) => {
                if self.audit.log_allowed {
                    tracing::debug!(
                        domain = %Domain::Credential,
                        action = %action,
                        actor = %actor,
                        provider = %provider,
                        "credential access allowed"
                    );
                }
            }
            Ok(Decision::Deny(_)) => {
                if self.audit.log_denied {
                    tracing::warn!(
                        domain = %Domain::Credential,
                        action = %action,
                        actor = %actor,
                        provider = %provider,
                        known = self.is_known_provider(provider),
                        "credential access denied"
                    );
                }
            }
            Err(e) => {
                tracing::error!(
                    domain = %Domain::Credential,
                    action = %action,
                    actor = %actor,
                    provider = %provider,
                    "credential decision failed: {e}"
                );
            }
        }

        outcome
    }

    /// Raising adapter for submission handlers.
    ///
    /// # Errors
    ///
    /// - [`AuthError::Denied`] with the rule's reason.
    /// - [`AuthError::Lookup`] if the decision could not be reached.
    pub fn require_action(
        &self,
        actor: &Actor,
        action: Action,
        record: &SubmissionRecord,
    ) -> Result<(), AuthError> {
        self.evaluate_submission(actor, action, record)?
            .into_result()
            .map_err(AuthError::from)
    }

    /// Boolean adapter for credential checks.
    ///
    /// Both denial kinds and lookup failures collapse to `false`.
    #[must_use]
    pub fn is_allowed(&self, actor: &Actor, action: Action, provider: &Provider) -> bool {
        self.evaluate_credential(actor, action, provider)
            .map(|decision| decision.is_allowed())
            .unwrap_or(false)
    }

    fn context<'a>(&'a self, actor: &'a Actor) -> RuleContext<'a> {
        RuleContext::new(actor, self.submissions.as_ref(), self.credentials.as_ref())
    }
}

impl std::fmt::Debug for DecisionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecisionEngine")
            .field("audit", &self.audit)
            .field("known_providers", &self.known_providers)
            .finish_non_exhaustive()
    }
}
