//! Core types for crowdgate.
//!
//! This crate holds the identity vocabulary shared by the authorization
//! engine and its callers: identifiers, the acting [`Actor`], and the
//! [`ErrorCode`] convention.
//!
//! # Crate Architecture
//!
//! ```text
//! crowdgate-types    (ids, Actor, ErrorCode)   ◄── HERE
//!        ↑
//! crowdgate-auth     (Action, Decision, records, rules, registry)
//!        ↑
//! crowdgate-runtime  (DecisionEngine, in-memory stores, config)
//! ```
//!
//! # Example
//!
//! ```
//! use crowdgate_types::{Actor, UserId, WorkUnitId};
//!
//! let worker = Actor::authenticated(UserId::new(7));
//! let unit = WorkUnitId::new(1);
//!
//! assert_eq!(worker.user_id(), Some(UserId::new(7)));
//! assert_eq!(unit.to_string(), "unit:1");
//! ```

mod actor;
mod error;
mod id;

pub use actor::{Actor, Privilege};
pub use error::{assert_error_code, assert_error_codes, ErrorCode};
pub use id::{JobId, OriginMarker, SubmissionId, UserId, WorkUnitId};
