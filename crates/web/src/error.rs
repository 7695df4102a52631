//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures errors to Sentry before
//! responding to the client. Handlers doing fallible session work return
//! `Result<T, AppError>`; gate and login failures have their own dedicated
//! responses (`GateRejection`, the login-page error message) and never pass
//! through here.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Application-level error type for the web crate.
#[derive(Debug, Error)]
pub enum AppError {
    /// Session backend failure.
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Server-side failure: capture to Sentry before answering
        let event_id = sentry::capture_error(&self);
        tracing::error!(
            error = %self,
            sentry_event_id = %event_id,
            "Request error"
        );

        // Don't expose internal error details to clients
        match self {
            Self::Session(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Session temporarily unavailable, please retry",
            )
                .into_response(),
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Set the Sentry user context from a user ID.
///
/// Call this after successful authentication to associate errors with users.
pub fn set_sentry_user(user_id: &impl ToString, email: Option<&str>) {
    sentry::configure_scope(|scope| {
        scope.set_user(Some(sentry::User {
            id: Some(user_id.to_string()),
            email: email.map(String::from),
            ..Default::default()
        }));
    });
}

/// Clear the Sentry user context.
///
/// Call this on logout to stop associating errors with the user.
pub fn clear_sentry_user() {
    sentry::configure_scope(|scope| {
        scope.set_user(None);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_error(message: &str) -> AppError {
        AppError::from(tower_sessions::session::Error::Store(
            tower_sessions::session_store::Error::Backend(message.to_string()),
        ))
    }

    #[test]
    fn test_app_error_display() {
        let err = store_error("store down");
        assert!(err.to_string().starts_with("Session error:"));
    }

    #[test]
    fn test_session_error_maps_to_503() {
        let response = store_error("store down").into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
