//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the pooled HTTP client used by the API proxy and the upstream base
//! URL it forwards to. Both are cheap to clone.

use std::sync::Arc;
use std::time::Duration;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    /// Backend base URL without a trailing slash.
    pub upstream: Arc<str>,
}

impl AppState {
    /// Build state from config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed (TLS
    /// backend initialisation failure).
    pub fn new(config: &ServerConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()?;
        Ok(Self { http, upstream: Arc::from(config.upstream.as_str()) })
    }
}
