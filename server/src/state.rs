//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the parsed host config and one pooled HTTP client for the backend.

use std::sync::Arc;

use crate::config::HostConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<HostConfig>,
    pub backend: reqwest::Client,
}

impl AppState {
    /// # Errors
    ///
    /// Returns the `reqwest` builder error if the TLS backend cannot start.
    pub fn new(config: HostConfig) -> Result<Self, reqwest::Error> {
        let backend = reqwest::Client::builder()
            .timeout(config.backend_timeout)
            .connect_timeout(config.backend_connect_timeout)
            .build()?;
        Ok(Self { config: Arc::new(config), backend })
    }
}
