//! External service clients for the web application.
//!
//! # Services
//!
//! - `identity` - Credential verification against the hosted identity service

pub mod identity;

pub use identity::{IdentityClient, IdentityError, VerifiedIdentity};
