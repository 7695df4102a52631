//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                - Public landing page (authenticated users bounce to
//!                         their dashboard)
//! GET  /health          - Health check
//!
//! # Auth
//! GET  /login           - Login page (public-only; accepts ?next= and ?error=)
//! POST /login           - Login action (verifies against the identity service)
//! POST /logout          - Logout action
//!
//! # Dashboards (role-gated)
//! GET  /admin           - Admin dashboard
//! GET  /employer        - Employer dashboard
//! GET  /itian           - ITIan dashboard
//!
//! # Status pages
//! GET  /unauthorized    - 403 page role-gate redirects land on
//! *                     - 404 page (fallback)
//! ```

pub mod auth;
pub mod dashboard;
pub mod home;
pub mod pages;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create all application routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/admin", get(dashboard::admin))
        .route("/employer", get(dashboard::employer))
        .route("/itian", get(dashboard::itian))
        .route("/unauthorized", get(pages::unauthorized))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::str::FromStr;

    use axum::Router;
    use axum::body::Body;
    use axum::extract::Path;
    use axum::http::{Request, StatusCode, header};
    use axum::response::{IntoResponse, Response};
    use chrono::Utc;
    use secrecy::SecretString;
    use tower::ServiceExt;
    use tower_sessions::Session;

    use workboard_core::{Role, UserId};

    use super::routes;
    use crate::config::{IdentityConfig, WebConfig};
    use crate::middleware::{create_session_layer, set_current_user};
    use crate::models::CurrentUser;
    use crate::state::AppState;

    fn test_state() -> AppState {
        AppState::new(WebConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 0,
            base_url: "http://localhost:3000".to_string(),
            session_secret: SecretString::from("x".repeat(32)),
            identity: IdentityConfig {
                api_url: "http://localhost:4000".to_string(),
            },
            sentry_dsn: None,
            sentry_environment: None,
        })
    }

    /// Test-only login that bypasses the identity service and stores a
    /// session for the given role.
    async fn test_login(session: Session, Path(role): Path<String>) -> impl IntoResponse {
        let role = Role::from_str(&role).unwrap();
        let user = CurrentUser {
            id: UserId::new(1),
            role,
            email: format!("{role}@workboard.test"),
            authenticated_at: Utc::now(),
        };
        set_current_user(&session, &user).await.unwrap();
        "logged in"
    }

    fn test_app() -> Router {
        let state = test_state();
        let session_layer = create_session_layer(state.config());
        Router::new()
            .merge(routes())
            .route("/test-login/{role}", axum::routing::get(test_login))
            .fallback(super::pages::not_found)
            .layer(session_layer)
            .with_state(state)
    }

    async fn send(app: &Router, method: &str, uri: &str, cookie: Option<&str>) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        let request = builder.body(Body::empty()).unwrap();
        app.clone().oneshot(request).await.unwrap()
    }

    fn location(response: &Response) -> &str {
        response
            .headers()
            .get(header::LOCATION)
            .expect("redirect should carry a Location header")
            .to_str()
            .unwrap()
    }

    /// Log in as the given role and return the session cookie.
    async fn login_as(app: &Router, role: Role) -> String {
        let response = send(app, "GET", &format!("/test-login/{role}"), None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .expect("login should set a session cookie")
            .to_str()
            .unwrap();
        set_cookie
            .split(';')
            .next()
            .unwrap()
            .to_string()
    }

    #[tokio::test]
    async fn test_guard_redirects_anonymous_to_login_with_return_path() {
        let app = test_app();
        for path in ["/admin", "/employer", "/itian"] {
            let response = send(&app, "GET", path, None).await;
            assert_eq!(response.status(), StatusCode::SEE_OTHER);
            assert_eq!(
                location(&response),
                format!("/login?next={}", urlencoding::encode(path))
            );
        }
    }

    #[tokio::test]
    async fn test_public_routes_render_for_anonymous() {
        let app = test_app();
        for path in ["/", "/login"] {
            let response = send(&app, "GET", path, None).await;
            assert_eq!(response.status(), StatusCode::OK, "GET {path}");
        }
    }

    #[tokio::test]
    async fn test_matching_role_sees_dashboard() {
        let app = test_app();
        let cookie = login_as(&app, Role::Admin).await;
        let response = send(&app, "GET", "/admin", Some(&cookie)).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_wrong_role_redirects_to_unauthorized() {
        let app = test_app();
        let cookie = login_as(&app, Role::Employer).await;
        for path in ["/admin", "/itian"] {
            let response = send(&app, "GET", path, Some(&cookie)).await;
            assert_eq!(response.status(), StatusCode::SEE_OTHER);
            assert_eq!(location(&response), "/unauthorized");
        }
    }

    #[tokio::test]
    async fn test_authenticated_user_bounced_from_public_routes() {
        let app = test_app();
        let cases = [
            (Role::Admin, "/admin"),
            (Role::Employer, "/employer"),
            (Role::Itian, "/itian"),
        ];
        for (role, dashboard) in cases {
            let cookie = login_as(&app, role).await;
            for path in ["/", "/login"] {
                let response = send(&app, "GET", path, Some(&cookie)).await;
                assert_eq!(response.status(), StatusCode::SEE_OTHER, "GET {path} as {role}");
                assert_eq!(location(&response), dashboard);
            }
        }
    }

    #[tokio::test]
    async fn test_logout_clears_the_session() {
        let app = test_app();
        let cookie = login_as(&app, Role::Admin).await;

        let response = send(&app, "POST", "/logout", Some(&cookie)).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/");

        // The old cookie no longer authenticates
        let response = send(&app, "GET", "/admin", Some(&cookie)).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/login?next=%2Fadmin");
    }

    #[tokio::test]
    async fn test_unauthorized_page_is_403() {
        let app = test_app();
        let response = send(&app, "GET", "/unauthorized", None).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_unknown_path_is_404() {
        let app = test_app();
        let response = send(&app, "GET", "/no-such-page", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
