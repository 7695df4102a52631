//! Domain models for the web application.

pub mod session;

pub use session::{CurrentUser, keys as session_keys};
