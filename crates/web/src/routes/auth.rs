//! Authentication route handlers.
//!
//! Login delegates credential verification to the external identity service;
//! on success the verified identity is stored in the session and the user is
//! sent back to the path they originally requested (or their role's
//! dashboard). Failures are surfaced as a static message on the login page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use chrono::Utc;
use secrecy::SecretString;
use serde::Deserialize;
use tower_sessions::Session;

use workboard_core::Role;

use crate::error::{self, clear_sentry_user, set_sentry_user};
use crate::middleware::{PublicOnly, clear_current_user, set_current_user};
use crate::models::CurrentUser;
use crate::services::IdentityError;
use crate::state::AppState;

// =============================================================================
// Form & Query Types
// =============================================================================

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    /// Path to return to after login (carried through as a hidden field).
    pub next: Option<String>,
}

/// Query parameters for the login page.
#[derive(Debug, Deserialize)]
pub struct LoginQuery {
    /// Path to return to after login.
    pub next: Option<String>,
    /// Error message to display.
    pub error: Option<String>,
}

// =============================================================================
// Templates
// =============================================================================

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
    pub next: Option<String>,
}

// =============================================================================
// Handlers
// =============================================================================

/// Render the login page.
///
/// Public-only: an authenticated user is bounced to their dashboard.
pub async fn login_page(PublicOnly: PublicOnly, Query(query): Query<LoginQuery>) -> LoginTemplate {
    LoginTemplate {
        error: query.error,
        next: query.next.filter(|next| is_safe_return_path(next)),
    }
}

/// Handle a login submission.
///
/// Identity-service failures are rendered as a message on the login page;
/// session-store failures surface as `AppError`.
///
/// # Errors
///
/// Returns `AppError::Session` if the verified identity cannot be stored.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> error::Result<Response> {
    let password = SecretString::from(form.password);

    let verified = match state.identity().authenticate(&form.email, &password).await {
        Ok(verified) => verified,
        Err(IdentityError::InvalidCredentials) => {
            return Ok(login_retry(form.next.as_deref(), "Invalid email or password"));
        }
        Err(error) => {
            tracing::error!(%error, "identity service login failed");
            return Ok(login_retry(
                form.next.as_deref(),
                "Could not verify your credentials right now, please try again",
            ));
        }
    };

    let user = CurrentUser {
        id: verified.id,
        role: verified.role,
        email: verified.email,
        authenticated_at: Utc::now(),
    };

    set_current_user(&session, &user).await?;

    set_sentry_user(&user.id, Some(&user.email));
    tracing::info!(user_id = %user.id, role = %user.role, "user logged in");

    Ok(Redirect::to(&redirect_target(form.next.as_deref(), user.role)).into_response())
}

/// Handle logout: clear the session and return to the landing page.
///
/// # Errors
///
/// Returns `AppError::Session` if the session cannot be cleared.
pub async fn logout(session: Session) -> error::Result<Response> {
    clear_current_user(&session).await?;
    clear_sentry_user();
    Ok(Redirect::to("/").into_response())
}

// =============================================================================
// Helpers
// =============================================================================

/// Redirect back to the login page with an error message, keeping `next`.
fn login_retry(next: Option<&str>, message: &str) -> Response {
    let mut target = format!("/login?error={}", urlencoding::encode(message));
    if let Some(next) = next.filter(|next| is_safe_return_path(next)) {
        target.push_str("&next=");
        target.push_str(&urlencoding::encode(next));
    }
    Redirect::to(&target).into_response()
}

/// Where to send the user after a successful login.
///
/// Honors `next` only when it is a local absolute path; otherwise falls back
/// to the role's dashboard.
fn redirect_target(next: Option<&str>, role: Role) -> String {
    match next.filter(|next| is_safe_return_path(next)) {
        Some(next) => next.to_string(),
        None => role.landing_path().to_string(),
    }
}

/// Whether a return path is local to this application.
///
/// Rejects absolute URLs and scheme-relative (`//host`) URLs so the login
/// flow cannot be used as an open redirect.
fn is_safe_return_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_return_path() {
        assert!(is_safe_return_path("/employer/post-job"));
        assert!(is_safe_return_path("/admin?tab=users"));
        assert!(!is_safe_return_path("https://evil.test/phish"));
        assert!(!is_safe_return_path("//evil.test/phish"));
        assert!(!is_safe_return_path("relative/path"));
    }

    #[test]
    fn test_redirect_target_falls_back_to_landing() {
        assert_eq!(redirect_target(None, Role::Admin), "/admin");
        assert_eq!(redirect_target(Some("//evil.test"), Role::Itian), "/itian");
        assert_eq!(
            redirect_target(Some("/employer/post-job"), Role::Employer),
            "/employer/post-job"
        );
    }
}
