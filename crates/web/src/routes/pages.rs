//! Static status pages (403 unauthorized, 404 not found).

use askama::Template;
use askama_web::WebTemplate;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::middleware::OptionalAuth;

/// Unauthorized page template.
#[derive(Template, WebTemplate)]
#[template(path = "unauthorized.html")]
pub struct UnauthorizedTemplate {
    /// Email of the signed-in user, if any.
    pub email: Option<String>,
}

/// Not-found page template.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate;

/// The page a role-gate redirect lands on.
pub async fn unauthorized(OptionalAuth(user): OptionalAuth) -> Response {
    let template = UnauthorizedTemplate {
        email: user.map(|user| user.email),
    };
    (StatusCode::FORBIDDEN, template).into_response()
}

/// Fallback handler for unknown paths.
pub async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, NotFoundTemplate).into_response()
}
