//! Integration tests for Workboard.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the web server (needs an identity service configured via
//! # IDENTITY_API_URL; see crates/web/src/config.rs)
//! cargo run -p workboard-web
//!
//! # Run integration tests
//! cargo test -p workboard-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `gate_access` - Route-gate behavior against a running server
//!
//! Tests are `#[ignore]`d by default because they need a running server;
//! the in-process router tests in `workboard-web` cover the same gate
//! behavior without one.
