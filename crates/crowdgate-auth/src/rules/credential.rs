//! Credential rules.
//!
//! Credentials are issued and revoked outside this engine, so every
//! mutation is refused for every actor. Reads are scoped to the actor's own
//! linked providers.

use super::RuleContext;
use crate::{LookupError, Provider};

/// Refuses create, update and delete for every actor.
pub fn deny_mutation(_ctx: &RuleContext<'_>, _provider: &Provider) -> Result<bool, LookupError> {
    Ok(false)
}

/// Allows an authenticated actor to read a provider it holds a credential for.
pub fn read(ctx: &RuleContext<'_>, provider: &Provider) -> Result<bool, LookupError> {
    match ctx.actor.user_id() {
        Some(owner) => ctx.credentials.has_credential(owner, provider),
        None => Ok(false),
    }
}
