//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::WebConfig;
use crate::services::IdentityClient;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like configuration and the identity service client.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: WebConfig,
    identity: IdentityClient,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: WebConfig) -> Self {
        let identity = IdentityClient::new(&config.identity);

        Self {
            inner: Arc::new(AppStateInner { config, identity }),
        }
    }

    /// Get a reference to the application configuration.
    #[must_use]
    pub fn config(&self) -> &WebConfig {
        &self.inner.config
    }

    /// Get a reference to the identity service client.
    #[must_use]
    pub fn identity(&self) -> &IdentityClient {
        &self.inner.identity
    }
}
