//! Runtime layer for crowdgate.
//!
//! Concrete pieces built on the `crowdgate-auth` primitives:
//!
//! - [`DecisionEngine`]: evaluates (actor, action, entity) against the rule
//!   table and writes audit events
//! - [`InMemorySubmissionStore`] / [`InMemoryCredentialStore`]: lookup
//!   implementations for tests and single-process use
//! - [`SubmissionService`]: create/read/update/delete guarded by the engine
//! - [`config`]: layered TOML + environment configuration
//!
//! # Crate Architecture
//!
//! ```text
//! crowdgate-types   (ids, Actor)
//!        ↑
//! crowdgate-auth    (Decision, rules, registry, lookup traits)
//!        ↑
//! crowdgate-runtime (DecisionEngine, in-memory stores, config)  ◄── THIS CRATE
//! ```
//!
//! # Example
//!
//! ```
//! use crowdgate_auth::{Action, Credential, Provider};
//! use crowdgate_runtime::config::ConfigLoader;
//! use crowdgate_runtime::{DecisionEngine, InMemoryCredentialStore, InMemorySubmissionStore};
//! use crowdgate_types::{Actor, UserId};
//! use std::sync::Arc;
//!
//! let config = ConfigLoader::new()
//!     .skip_global_config()
//!     .skip_env_vars()
//!     .load()?;
//!
//! let credentials = Arc::new(InMemoryCredentialStore::new());
//! credentials.link(Credential::new(UserId::new(1), "twitter"))?;
//!
//! let engine = DecisionEngine::new(Arc::new(InMemorySubmissionStore::new()), credentials)
//!     .with_config(&config);
//!
//! let user = Actor::authenticated(UserId::new(1));
//! assert!(engine.is_allowed(&user, Action::Read, &Provider::new("twitter")));
//! assert!(!engine.is_allowed(&user, Action::Delete, &Provider::new("twitter")));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod engine;
pub mod service;
pub mod store;

pub use config::{ConfigError, ConfigLoader, EngineConfig};
pub use engine::DecisionEngine;
pub use service::SubmissionService;
pub use store::{InMemoryCredentialStore, InMemorySubmissionStore, StoreError};
