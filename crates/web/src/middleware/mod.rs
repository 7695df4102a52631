//! HTTP middleware stack.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, added in `main`)
//! 2. `TraceLayer` (request tracing)
//! 3. Request ID (add unique ID to each request)
//! 4. Session layer (tower-sessions with in-memory store)
//!
//! The route guards in [`auth`] are extractors, not layers: they run per
//! route when a handler declares them.

pub mod auth;
pub mod request_id;
pub mod session;

pub use auth::{
    GateRejection, OptionalAuth, PublicOnly, PublicRejection, RequireAdmin, RequireEmployer,
    RequireItian, clear_current_user, require_any, set_current_user,
};
pub use request_id::request_id_middleware;
pub use session::create_session_layer;
