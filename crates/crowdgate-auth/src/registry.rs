//! Permission registry.
//!
//! Static table from (domain, action) to rule:
//!
//! | Domain | create | read | update | delete |
//! |--------|--------|------|--------|--------|
//! | submission | guard: unique | guard: open | guard: immutable | guard: owner or privileged |
//! | credential | predicate: never | predicate: own provider | predicate: never | predicate: never |
//!
//! Lookups are exhaustive matches over closed enums; adding an [`Action`]
//! fails to compile until every domain says what to do with it.

use crate::rules::{credential, submission, Rule, RuleShape};
use crate::{Action, Domain, Provider, SubmissionRecord};

/// Static rule table.
///
/// # Example
///
/// ```
/// use crowdgate_auth::{Action, Domain, PermissionRegistry, RuleShape};
///
/// assert_eq!(PermissionRegistry::shape(Domain::Submission, Action::Delete), RuleShape::Guard);
/// assert_eq!(PermissionRegistry::shape(Domain::Credential, Action::Read), RuleShape::Predicate);
/// assert_eq!(PermissionRegistry::entries().count(), 8);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissionRegistry;

impl PermissionRegistry {
    /// Returns the rule for a submission action.
    #[must_use]
    pub fn submission(action: Action) -> Rule<SubmissionRecord> {
        match action {
            Action::Create => Rule::Guard(submission::create),
            Action::Read => Rule::Guard(submission::read),
            Action::Update => Rule::Guard(submission::update),
            Action::Delete => Rule::Guard(submission::delete),
        }
    }

    /// Returns the rule for a credential action.
    #[must_use]
    pub fn credential(action: Action) -> Rule<Provider> {
        match action {
            Action::Read => Rule::Predicate(credential::read),
            Action::Create | Action::Update | Action::Delete => {
                Rule::Predicate(credential::deny_mutation)
            }
        }
    }

    /// Returns the shape of the rule registered for (domain, action).
    #[must_use]
    pub fn shape(domain: Domain, action: Action) -> RuleShape {
        match domain {
            Domain::Submission => Self::submission(action).shape(),
            Domain::Credential => Self::credential(action).shape(),
        }
    }

    /// Iterates over every (domain, action, shape) entry in the table.
    pub fn entries() -> impl Iterator<Item = (Domain, Action, RuleShape)> {
        Domain::ALL.into_iter().flat_map(|domain| {
            Action::ALL
                .into_iter()
                .map(move |action| (domain, action, Self::shape(domain, action)))
        })
    }
}
