//! In-memory persistence collaborators.
//!
//! # Architecture
//!
//! ```text
//! SubmissionLookup / CredentialLookup (crowdgate-auth)   ← abstract
//!          │
//!          ├── InMemorySubmissionStore (THIS MODULE)
//!          └── InMemoryCredentialStore (THIS MODULE)
//! ```
//!
//! Production deployments implement the lookup traits over their database.
//! These stores back tests, demos, and single-process embedders.

mod credentials;
mod error;
mod submissions;

pub use credentials::InMemoryCredentialStore;
pub use error::StoreError;
pub use submissions::InMemorySubmissionStore;
