//! Authorization primitives for crowdgate.
//!
//! This crate holds the decision vocabulary and the rules themselves. It
//! knows nothing about storage: rules ask the persistence collaborator
//! through the [`SubmissionLookup`] and [`CredentialLookup`] traits.
//!
//! # Decision Flow
//!
//! ```text
//! (Actor, Action, entity)
//!        │
//!        ▼
//! PermissionRegistry ── (domain, action) ──► Rule
//!        │                                     │
//!        │        OwnershipResolver ◄──────────┤ delete
//!        │        UniquenessChecker ◄──────────┤ create
//!        │        CredentialLookup  ◄──────────┘ credential read
//!        ▼
//! Decision { Allow | Deny(Unauthorized | Forbidden) }
//! ```
//!
//! # Crate Architecture
//!
//! ```text
//! crowdgate-types   (ids, Actor)
//!        ↑
//! crowdgate-auth    (Decision, rules, registry, lookup traits)  ◄── THIS CRATE
//!        ↑
//! crowdgate-runtime (DecisionEngine, in-memory stores, config)
//! ```
//!
//! # Design Principles
//!
//! - **Traits here, implementations in consumers**: the runtime crate
//!   provides in-memory lookups; embedders plug in their database.
//! - **Authentication before ownership**: an anonymous actor is told to
//!   authenticate before any Forbidden reasoning happens.
//! - **Deny by default**: inconsistent records are denied, never a panic.

pub mod action;
pub mod credential;
pub mod decision;
pub mod error;
pub mod lookup;
pub mod ownership;
pub mod registry;
pub mod rules;
pub mod submission;
pub mod uniqueness;

pub use action::{Action, Domain, ParseActionError};
pub use credential::{Credential, Provider};
pub use decision::{Decision, Denial};
pub use error::{AuthError, LookupError};
pub use lookup::{CredentialLookup, SubmissionLookup};
pub use ownership::{Ownership, OwnershipResolver};
pub use registry::PermissionRegistry;
pub use rules::{Rule, RuleContext, RuleShape};
pub use submission::{SubmissionRecord, Submitter, SubmitterMarker};
pub use uniqueness::{Uniqueness, UniquenessChecker};

// Re-export the identity types for convenience
pub use crowdgate_types::{Actor, Privilege};
