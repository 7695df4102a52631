//! Authentication middleware and extractors.
//!
//! Provides the route guards: extractors that resolve the session into an
//! [`AuthState`] and run the core gate evaluator against the roles a route
//! accepts. The evaluator decides; these types only translate its decision
//! into HTTP responses (redirects for page requests, status codes for
//! `/api/*` requests).

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use workboard_core::{
    AuthState, GateDecision, GateRequirement, PublicDecision, Role, evaluate, evaluate_public,
};

use crate::models::{CurrentUser, session_keys};

/// Extractor that requires an authenticated admin.
///
/// # Example
///
/// ```rust,ignore
/// async fn admin_handler(
///     RequireAdmin(user): RequireAdmin,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", user.email)
/// }
/// ```
pub struct RequireAdmin(pub CurrentUser);

/// Extractor that requires an authenticated employer.
pub struct RequireEmployer(pub CurrentUser);

/// Extractor that requires an authenticated ITIan (graduate account).
pub struct RequireItian(pub CurrentUser);

/// Error returned when a route gate does not allow rendering.
pub enum GateRejection {
    /// Session resolution failed; the request cannot be decided right now.
    Pending,
    /// Redirect to the login page, preserving the requested path.
    RedirectToLogin {
        /// The originally requested path (including query).
        return_to: String,
    },
    /// Logged in with the wrong role.
    RedirectToUnauthorized,
    /// Unauthorized response (for API requests).
    Unauthorized,
}

impl IntoResponse for GateRejection {
    fn into_response(self) -> Response {
        match self {
            Self::Pending => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Session temporarily unavailable, please retry",
            )
                .into_response(),
            Self::RedirectToLogin { return_to } => {
                let target = format!("/login?next={}", urlencoding::encode(&return_to));
                Redirect::to(&target).into_response()
            }
            Self::RedirectToUnauthorized => Redirect::to("/unauthorized").into_response(),
            Self::Unauthorized => StatusCode::UNAUTHORIZED.into_response(),
        }
    }
}

/// Resolve the session into the gate evaluator's view of authentication.
///
/// A successful session read (hit or miss) is a resolved state. A store
/// error, or a missing session layer, leaves the state unresolved: the gate
/// must not treat the user as either authenticated or anonymous.
async fn resolve_auth_state(parts: &Parts) -> (AuthState, Option<CurrentUser>) {
    let Some(session) = parts.extensions.get::<Session>() else {
        tracing::warn!("session layer missing; treating auth state as unresolved");
        return (AuthState::resolving(), None);
    };

    match session.get::<CurrentUser>(session_keys::CURRENT_USER).await {
        Ok(Some(user)) => (AuthState::authenticated(user.identity()), Some(user)),
        Ok(None) => (AuthState::anonymous(), None),
        Err(error) => {
            tracing::error!(%error, "session store read failed");
            (AuthState::resolving(), None)
        }
    }
}

/// The requested path including query string, for post-login return.
fn requested_path(parts: &Parts) -> String {
    parts
        .uri
        .path_and_query()
        .map_or_else(|| parts.uri.path().to_string(), |pq| pq.as_str().to_string())
}

/// Run the gate for the given role set against the request's session.
///
/// Shared by the per-role extractors; also usable directly from a handler
/// that accepts more than one role.
///
/// # Errors
///
/// Returns a [`GateRejection`] translating the gate's redirect/pending
/// decision; API requests (`/api/*`) get a 401 instead of a login redirect.
pub async fn require_any(
    parts: &Parts,
    requirement: &GateRequirement,
) -> Result<CurrentUser, GateRejection> {
    let (auth, user) = resolve_auth_state(parts).await;
    let path = requested_path(parts);

    match evaluate(&auth, requirement, &path) {
        GateDecision::Allow => user.ok_or(GateRejection::Unauthorized),
        GateDecision::Pending => Err(GateRejection::Pending),
        GateDecision::RedirectToLogin { return_to } => {
            let is_api = parts.uri.path().starts_with("/api/");
            if is_api {
                Err(GateRejection::Unauthorized)
            } else {
                Err(GateRejection::RedirectToLogin { return_to })
            }
        }
        GateDecision::RedirectToUnauthorized => Err(GateRejection::RedirectToUnauthorized),
    }
}

macro_rules! impl_role_guard {
    ($name:ident, $role:expr) => {
        impl<S> FromRequestParts<S> for $name
        where
            S: Send + Sync,
        {
            type Rejection = GateRejection;

            async fn from_request_parts(
                parts: &mut Parts,
                _state: &S,
            ) -> Result<Self, Self::Rejection> {
                let requirement = GateRequirement::only($role);
                let user = require_any(parts, &requirement).await?;
                Ok(Self(user))
            }
        }
    };
}

impl_role_guard!(RequireAdmin, Role::Admin);
impl_role_guard!(RequireEmployer, Role::Employer);
impl_role_guard!(RequireItian, Role::Itian);

/// Extractor that optionally gets the current user.
///
/// Unlike the `Require*` guards, this does not reject the request if nobody
/// is logged in.
pub struct OptionalAuth(pub Option<CurrentUser>);

impl<S> FromRequestParts<S> for OptionalAuth
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let (_, user) = resolve_auth_state(parts).await;
        Ok(Self(user))
    }
}

/// Extractor for public-only routes (login page, landing page).
///
/// Inverted gate: an already-authenticated user is redirected away to their
/// role's dashboard instead of seeing the public content.
pub struct PublicOnly;

/// Error returned when a public-only route should not render.
pub enum PublicRejection {
    /// Session resolution failed.
    Pending,
    /// Already logged in; bounce to the role's dashboard.
    RedirectToDashboard(&'static str),
}

impl IntoResponse for PublicRejection {
    fn into_response(self) -> Response {
        match self {
            Self::Pending => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Session temporarily unavailable, please retry",
            )
                .into_response(),
            Self::RedirectToDashboard(path) => Redirect::to(path).into_response(),
        }
    }
}

impl<S> FromRequestParts<S> for PublicOnly
where
    S: Send + Sync,
{
    type Rejection = PublicRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let (auth, _) = resolve_auth_state(parts).await;
        match evaluate_public(&auth) {
            PublicDecision::Allow => Ok(Self),
            PublicDecision::Pending => Err(PublicRejection::Pending),
            PublicDecision::RedirectToDashboard(path) => {
                Err(PublicRejection::RedirectToDashboard(path))
            }
        }
    }
}

/// Helper to set the current user in the session.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_user(
    session: &Session,
    user: &CurrentUser,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::CURRENT_USER, user).await
}

/// Helper to clear the current user from the session (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_current_user(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session
        .remove::<CurrentUser>(session_keys::CURRENT_USER)
        .await?;
    Ok(())
}
