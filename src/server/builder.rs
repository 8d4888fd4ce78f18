//! Server builder and run_server function

use crate::config::Config;
use crate::redirect::RedirectListener;
use crate::server::server::HttpServer;
use crate::server::state::AppState;
use crate::utils::error::{AccessError, Result};
use std::sync::Arc;
use tracing::info;

/// Server builder for easier configuration
#[derive(Default)]
pub struct ServerBuilder {
    config: Option<Config>,
    listeners: Vec<Arc<dyn RedirectListener>>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Add a redirect listener
    pub fn with_redirect_listener(mut self, listener: Arc<dyn RedirectListener>) -> Self {
        self.listeners.push(listener);
        self
    }

    /// Build the HTTP server
    pub fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| AccessError::Config("Configuration is required".to_string()))?;

        let mut state = AppState::new(config)?;
        for listener in self.listeners {
            state = state.with_redirect_listener(listener);
        }
        Ok(HttpServer::from_state(state))
    }
}

/// Build and run the server for a loaded configuration
pub async fn run_server(config: Config) -> Result<()> {
    info!("Starting access gateway");

    let server = ServerBuilder::new().with_config(config).build()?;
    let server_config = server.config();
    info!("Server starting at: http://{}", server_config.address());
    info!("Public base URL: {}", server_config.base_url);
    info!("API Endpoints:");
    info!("   GET  /health - Health check");
    info!("   GET  /node/{{id}}, /media/{{id}} - Content views");
    info!("   GET  /menu/{{name}} - Filtered menu");
    info!("   POST /node/{{id}}/access - Item restriction");
    info!("   POST /admin/bundles/{{kind}}/{{bundle}} - Bundle settings");
    info!("   POST /admin/settings - Redirect settings");

    server.start().await
}
