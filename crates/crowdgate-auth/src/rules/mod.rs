//! Rule shapes and the per-domain rule functions.
//!
//! # Rule Shapes
//!
//! | Shape | Returns | Used by |
//! |-------|---------|---------|
//! | [`Rule::Guard`] | [`Decision`] (Allow / Unauthorized / Forbidden) | submissions |
//! | [`Rule::Predicate`] | `bool` | credentials |
//!
//! Both shapes are applied through [`Rule::apply`], which always yields a
//! [`Decision`]. A predicate's `false` becomes [`Denial::Forbidden`](crate::Denial::Forbidden);
//! callers of the boolean adapter never see the reason anyway.

pub mod credential;
pub mod submission;

use crate::{CredentialLookup, Decision, LookupError, SubmissionLookup};
use crowdgate_types::Actor;
use serde::Serialize;

/// Everything a rule may consult besides the target entity.
///
/// Built fresh per evaluation; holds only borrows.
#[derive(Clone, Copy)]
pub struct RuleContext<'a> {
    /// The acting identity.
    pub actor: &'a Actor,
    /// Submission existence lookup.
    pub submissions: &'a dyn SubmissionLookup,
    /// Credential ownership lookup.
    pub credentials: &'a dyn CredentialLookup,
}

impl<'a> RuleContext<'a> {
    /// Creates a context for one evaluation.
    #[must_use]
    pub fn new(
        actor: &'a Actor,
        submissions: &'a dyn SubmissionLookup,
        credentials: &'a dyn CredentialLookup,
    ) -> Self {
        Self {
            actor,
            submissions,
            credentials,
        }
    }
}

impl std::fmt::Debug for RuleContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleContext")
            .field("actor", self.actor)
            .finish_non_exhaustive()
    }
}

/// Guard rule: decides with a reason.
pub type GuardFn<E> = fn(&RuleContext<'_>, &E) -> Result<Decision, LookupError>;

/// Predicate rule: decides yes or no.
pub type PredicateFn<E> = fn(&RuleContext<'_>, &E) -> Result<bool, LookupError>;

/// Shape of a registered rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleShape {
    /// Allow or deny with a reason.
    Guard,
    /// Plain boolean.
    Predicate,
}

/// A rule evaluator over entities of type `E`.
pub enum Rule<E> {
    /// Rule that distinguishes denial reasons.
    Guard(GuardFn<E>),
    /// Rule that only answers allowed or not.
    Predicate(PredicateFn<E>),
}

impl<E> Rule<E> {
    /// Evaluates the rule.
    ///
    /// # Errors
    ///
    /// Propagates [`LookupError`] from any lookup the rule consults.
    pub fn apply(&self, ctx: &RuleContext<'_>, entity: &E) -> Result<Decision, LookupError> {
        match self {
            Self::Guard(guard) => guard(ctx, entity),
            Self::Predicate(predicate) => predicate(ctx, entity).map(Decision::from_predicate),
        }
    }

    /// Returns the rule's shape.
    #[must_use]
    pub fn shape(&self) -> RuleShape {
        match self {
            Self::Guard(_) => RuleShape::Guard,
            Self::Predicate(_) => RuleShape::Predicate,
        }
    }
}

impl<E> Clone for Rule<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for Rule<E> {}

impl<E> std::fmt::Debug for Rule<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Rule").field(&self.shape()).finish()
    }
}
