//! Actor (acting identity) types.
//!
//! An [`Actor`] is the identity evaluated for one authorization decision.
//! It is resolved once per request by the identity layer and passed by
//! value into every check. There is no ambient "current actor".

use crate::{OriginMarker, UserId};
use serde::{Deserialize, Serialize};

/// Privilege level of an authenticated actor.
///
/// Only meaningful for [`Actor::Authenticated`]. Anonymous actors have no
/// privilege level at all, so the type cannot express a privileged anonymous
/// actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Privilege {
    /// Regular registered user.
    #[default]
    Standard,
    /// Administrative user.
    Privileged,
}

impl Privilege {
    /// Returns `true` for [`Privilege::Privileged`].
    #[must_use]
    pub fn is_privileged(&self) -> bool {
        matches!(self, Self::Privileged)
    }
}

/// The identity acting in a decision.
///
/// # Variants
///
/// | Variant | Keyed by | Typical source |
/// |---------|----------|----------------|
/// | `Anonymous` | [`OriginMarker`] | Request without a login session |
/// | `Authenticated` | [`UserId`] + [`Privilege`] | Logged-in user |
///
/// Exactly one of {id, origin} exists for any actor; the enum makes the
/// other combination unrepresentable.
///
/// # Why No Default?
///
/// There is no sensible default identity. Construct actors explicitly,
/// including in tests.
///
/// # Example
///
/// ```
/// use crowdgate_types::{Actor, UserId};
///
/// let anon = Actor::anonymous("127.0.0.1");
/// assert!(anon.is_anonymous());
/// assert!(anon.user_id().is_none());
///
/// let user = Actor::authenticated(UserId::new(7));
/// assert!(user.is_authenticated());
/// assert!(!user.is_privileged());
///
/// let admin = Actor::privileged(UserId::new(1));
/// assert!(admin.is_privileged());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Actor {
    /// Actor without an authenticated identity.
    Anonymous {
        /// Network origin used as a submitter surrogate.
        origin: OriginMarker,
    },
    /// Actor with a registered identity.
    Authenticated {
        /// Stable user id.
        id: UserId,
        /// Privilege level.
        #[serde(default)]
        privilege: Privilege,
    },
}

impl Actor {
    /// Creates an anonymous actor keyed by its network origin.
    #[must_use]
    pub fn anonymous(origin: impl Into<OriginMarker>) -> Self {
        Self::Anonymous {
            origin: origin.into(),
        }
    }

    /// Creates a standard authenticated actor.
    #[must_use]
    pub fn authenticated(id: UserId) -> Self {
        Self::Authenticated {
            id,
            privilege: Privilege::Standard,
        }
    }

    /// Creates a privileged (administrative) authenticated actor.
    #[must_use]
    pub fn privileged(id: UserId) -> Self {
        Self::Authenticated {
            id,
            privilege: Privilege::Privileged,
        }
    }

    /// Returns `true` if the actor has no authenticated identity.
    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        matches!(self, Self::Anonymous { .. })
    }

    /// Returns `true` if the actor is authenticated.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    /// Returns `true` only for authenticated actors with elevated rights.
    #[must_use]
    pub fn is_privileged(&self) -> bool {
        match self {
            Self::Anonymous { .. } => false,
            Self::Authenticated { privilege, .. } => privilege.is_privileged(),
        }
    }

    /// Returns the [`UserId`] if authenticated, otherwise `None`.
    #[must_use]
    pub fn user_id(&self) -> Option<UserId> {
        match self {
            Self::Authenticated { id, .. } => Some(*id),
            Self::Anonymous { .. } => None,
        }
    }

    /// Returns the [`OriginMarker`] if anonymous, otherwise `None`.
    #[must_use]
    pub fn origin(&self) -> Option<&OriginMarker> {
        match self {
            Self::Anonymous { origin } => Some(origin),
            Self::Authenticated { .. } => None,
        }
    }
}

impl std::fmt::Display for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Anonymous { origin } => write!(f, "anonymous@{origin}"),
            Self::Authenticated {
                id,
                privilege: Privilege::Standard,
            } => write!(f, "{id}"),
            Self::Authenticated {
                id,
                privilege: Privilege::Privileged,
            } => write!(f, "{id}@privileged"),
        }
    }
}
