//! Workboard Core - Shared types and the route-gate evaluator.
//!
//! This crate provides the common types used across all Workboard components:
//! - `web` - The job-board web application
//! - `integration-tests` - End-to-end tests against a running server
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no database
//! access, no HTTP clients. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs and the closed [`types::Role`] enum
//! - [`gate`] - The pure gate evaluator deciding allow/redirect per route

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod gate;
pub mod types;

pub use gate::*;
pub use types::*;
