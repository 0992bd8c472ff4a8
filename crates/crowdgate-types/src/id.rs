//! Identifier types for crowdgate.
//!
//! Registered users, work units and jobs are keyed by the integer ids the
//! persistence layer hands out. Submissions created in memory get a UUID v4
//! so they never collide across stores.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a registered (authenticated) user.
///
/// Stable and unique per registered user. Anonymous actors never carry one.
///
/// # Example
///
/// ```
/// use crowdgate_types::UserId;
///
/// let id = UserId::new(7);
/// assert_eq!(id.get(), 7);
/// assert_eq!(id.to_string(), "user:7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub u64);

impl UserId {
    /// Wraps a raw user id.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw id.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "user:{}", self.0)
    }
}

/// Identifier of a work unit (the task a submission answers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WorkUnitId(pub u64);

impl WorkUnitId {
    /// Wraps a raw work unit id.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw id.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for WorkUnitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unit:{}", self.0)
    }
}

/// Identifier of a job (the parent of a work unit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct JobId(pub u64);

impl JobId {
    /// Wraps a raw job id.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw id.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "job:{}", self.0)
    }
}

/// Identifier of a submission record.
///
/// # Example
///
/// ```
/// use crowdgate_types::SubmissionId;
///
/// let a = SubmissionId::new();
/// let b = SubmissionId::new();
/// assert_ne!(a, b);
/// assert!(a.to_string().starts_with("sub:"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubmissionId(pub Uuid);

impl SubmissionId {
    /// Creates a new [`SubmissionId`] with a random UUID v4.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID.
    #[must_use]
    pub fn uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for SubmissionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sub:{}", self.0)
    }
}

/// Network origin of an anonymous actor (typically the client IP).
///
/// Used only as a surrogate submitter identity so that one anonymous origin
/// answers a work unit once. It is never a security credential: nothing is
/// ever *granted* on the strength of an origin match.
///
/// # Example
///
/// ```
/// use crowdgate_types::OriginMarker;
///
/// let origin = OriginMarker::new("127.0.0.1");
/// assert_eq!(origin.as_str(), "127.0.0.1");
/// assert_eq!(origin, OriginMarker::from("127.0.0.1"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OriginMarker(String);

impl OriginMarker {
    /// Wraps an origin string as-is.
    #[must_use]
    pub fn new(origin: impl Into<String>) -> Self {
        Self(origin.into())
    }

    /// Returns the origin as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for OriginMarker {
    fn from(origin: &str) -> Self {
        Self::new(origin)
    }
}

impl From<String> for OriginMarker {
    fn from(origin: String) -> Self {
        Self(origin)
    }
}

impl std::fmt::Display for OriginMarker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
