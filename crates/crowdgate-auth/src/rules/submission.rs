//! Submission rules.
//!
//! | Action | Anonymous | Authenticated | Privileged |
//! |--------|-----------|---------------|------------|
//! | create | Allow unless duplicate | Allow unless duplicate | Allow unless duplicate |
//! | read | Allow | Allow | Allow |
//! | update | Unauthorized | Forbidden | Forbidden |
//! | delete | Unauthorized | Allow if owner, else Forbidden | Allow |
//!
//! A duplicate is a second submission by the same submitter on the same
//! work unit; it is Forbidden. Wherever both apply, the authentication
//! check runs first, so an anonymous actor sees Unauthorized rather than
//! Forbidden.

use super::RuleContext;
use crate::{
    Decision, LookupError, Ownership, OwnershipResolver, SubmissionRecord, Uniqueness,
    UniquenessChecker,
};

/// Allows a create unless the submitter already answered this work unit.
pub fn create(ctx: &RuleContext<'_>, candidate: &SubmissionRecord) -> Result<Decision, LookupError> {
    let checker = UniquenessChecker::new(ctx.submissions);
    Ok(match checker.check(candidate)? {
        Uniqueness::Vacant => Decision::Allow,
        Uniqueness::Taken | Uniqueness::Unresolved => Decision::FORBIDDEN,
    })
}

/// Reads are open to everyone.
pub fn read(_ctx: &RuleContext<'_>, _record: &SubmissionRecord) -> Result<Decision, LookupError> {
    Ok(Decision::Allow)
}

/// Submissions are immutable once created; updates are never granted.
pub fn update(ctx: &RuleContext<'_>, _record: &SubmissionRecord) -> Result<Decision, LookupError> {
    if ctx.actor.is_anonymous() {
        return Ok(Decision::UNAUTHORIZED);
    }
    Ok(Decision::FORBIDDEN)
}

/// Allows privileged actors and authenticated owners to delete.
pub fn delete(ctx: &RuleContext<'_>, record: &SubmissionRecord) -> Result<Decision, LookupError> {
    if ctx.actor.is_anonymous() {
        return Ok(Decision::UNAUTHORIZED);
    }
    if ctx.actor.is_privileged() {
        return Ok(Decision::Allow);
    }

    Ok(match OwnershipResolver::ownership(ctx.actor, record) {
        Ownership::Owner => Decision::Allow,
        Ownership::Other | Ownership::Unresolved => Decision::FORBIDDEN,
    })
}
