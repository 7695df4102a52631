//! Identity service client.
//!
//! Workboard does not store credentials itself; login is a single
//! best-effort call to the hosted identity service, which responds with the
//! user's id, role, and email on success. There is no retry or backoff -
//! a failed call surfaces as a human-readable message on the login page.

use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use workboard_core::{Role, UserId};

use crate::config::IdentityConfig;

/// Errors that can occur when talking to the identity service.
#[derive(Debug, Error)]
pub enum IdentityError {
    /// The service rejected the credentials.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// HTTP request failed (network, TLS, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a status we do not understand.
    #[error("unexpected status from identity service: {0}")]
    UnexpectedStatus(u16),
}

/// A successfully verified identity, as returned by the service.
#[derive(Debug, Clone, Deserialize)]
pub struct VerifiedIdentity {
    /// The user's ID.
    pub id: UserId,
    /// The user's role.
    pub role: Role,
    /// The user's email address.
    pub email: String,
}

/// Request body for the login endpoint.
#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Client for the hosted identity service.
#[derive(Debug, Clone)]
pub struct IdentityClient {
    http: reqwest::Client,
    api_url: String,
}

impl IdentityClient {
    /// Create a new client from configuration.
    #[must_use]
    pub fn new(config: &IdentityConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: config.api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Verify credentials against the identity service.
    ///
    /// # Errors
    ///
    /// Returns `IdentityError::InvalidCredentials` when the service rejects
    /// the email/password pair, `IdentityError::Http` on transport failures,
    /// and `IdentityError::UnexpectedStatus` for any other response.
    pub async fn authenticate(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<VerifiedIdentity, IdentityError> {
        let response = self
            .http
            .post(format!("{}/auth/login", self.api_url))
            .json(&LoginRequest {
                email,
                password: password.expose_secret(),
            })
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => Ok(response.json::<VerifiedIdentity>().await?),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(IdentityError::InvalidCredentials)
            }
            status => Err(IdentityError::UnexpectedStatus(status.as_u16())),
        }
    }
}
