//! The route-gate evaluator.
//!
//! A gate is a pure decision function run before rendering a protected route:
//! given the current authentication state and the roles a route accepts, it
//! decides whether to render, redirect to login (preserving the requested
//! path), or redirect to the unauthorized page. The inverted variant for
//! public-only routes (login, landing page) sends already-authenticated users
//! to their role dashboard instead.
//!
//! The evaluator performs no I/O and never suspends; side effects (the actual
//! navigation) belong to the caller.

use serde::{Deserialize, Serialize};

use crate::types::{Role, UserId};

/// The authenticated user's id and role.
///
/// No identity exists without a role once authenticated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// The user's ID.
    pub id: UserId,
    /// The user's role.
    pub role: Role,
}

impl Identity {
    /// Create an identity from an id and role.
    #[must_use]
    pub const fn new(id: UserId, role: Role) -> Self {
        Self { id, role }
    }
}

/// A snapshot of session resolution as seen by the gates.
///
/// While `is_loading` is true the identity must be treated as unknown:
/// neither an "authenticated" nor an "anonymous" decision may be made.
/// The session subsystem owns this state; gates only read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthState {
    /// The resolved identity, if any.
    pub identity: Option<Identity>,
    /// Whether session resolution is still in flight.
    pub is_loading: bool,
}

impl AuthState {
    /// Session resolution has not completed yet.
    #[must_use]
    pub const fn resolving() -> Self {
        Self {
            identity: None,
            is_loading: true,
        }
    }

    /// Resolution completed with no logged-in user.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self {
            identity: None,
            is_loading: false,
        }
    }

    /// Resolution completed with a logged-in user.
    #[must_use]
    pub const fn authenticated(identity: Identity) -> Self {
        Self {
            identity: Some(identity),
            is_loading: false,
        }
    }
}

/// The set of roles a protected route accepts.
///
/// Configured per route at setup time and immutable afterwards. A single
/// role-set parameter replaces the per-role guard variants of earlier
/// designs without changing any decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateRequirement {
    allowed: Vec<Role>,
}

impl GateRequirement {
    /// A gate accepting exactly one role.
    #[must_use]
    pub fn only(role: Role) -> Self {
        Self {
            allowed: vec![role],
        }
    }

    /// A gate accepting any of the given roles.
    #[must_use]
    pub fn any_of(roles: &[Role]) -> Self {
        Self {
            allowed: roles.to_vec(),
        }
    }

    /// Whether the given role satisfies this gate.
    #[must_use]
    pub fn allows(&self, role: Role) -> bool {
        self.allowed.contains(&role)
    }
}

/// Outcome of evaluating a protected route's gate.
///
/// Produced fresh on every evaluation; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// Session resolution is still in flight: render a loading state,
    /// no redirect, no content.
    Pending,
    /// Render the guarded content.
    Allow,
    /// Not logged in: redirect to login, carrying the requested path so the
    /// login flow can return the user there afterwards.
    RedirectToLogin {
        /// The originally requested path.
        return_to: String,
    },
    /// Logged in, but the role does not satisfy the gate.
    RedirectToUnauthorized,
}

/// Outcome of evaluating a public-only route (login page, landing page).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublicDecision {
    /// Session resolution is still in flight.
    Pending,
    /// Not logged in: render the public content.
    Allow,
    /// Already logged in: bounce to the role's dashboard.
    RedirectToDashboard(&'static str),
}

/// Evaluate a protected route's gate.
///
/// Pure function of the current state: no I/O, no retries, no caching.
/// Every branch terminates in a defined, non-panicking outcome.
#[must_use]
pub fn evaluate(
    auth: &AuthState,
    requirement: &GateRequirement,
    current_path: &str,
) -> GateDecision {
    if auth.is_loading {
        return GateDecision::Pending;
    }
    let Some(identity) = auth.identity else {
        return GateDecision::RedirectToLogin {
            return_to: current_path.to_string(),
        };
    };
    if requirement.allows(identity.role) {
        GateDecision::Allow
    } else {
        GateDecision::RedirectToUnauthorized
    }
}

/// Evaluate a public-only route.
///
/// Inverted logic: authenticated users are redirected away to their role's
/// dashboard; anonymous users (once resolution finishes) see the content.
#[must_use]
pub fn evaluate_public(auth: &AuthState) -> PublicDecision {
    if auth.is_loading {
        return PublicDecision::Pending;
    }
    match auth.identity {
        Some(identity) => PublicDecision::RedirectToDashboard(identity.role.landing_path()),
        None => PublicDecision::Allow,
    }
}
