//! Server builder and run_server function
//!
//! This module provides the ServerBuilder for easier server configuration
//! and the run_server entry point used by the binary.

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::{Result, TrackerError};
use tracing::info;

/// Server builder for easier configuration
pub struct ServerBuilder {
    config: Option<Config>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the HTTP server
    pub async fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| TrackerError::Config("Configuration is required".to_string()))?;

        HttpServer::new(&config).await
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build and run the server until it stops
pub async fn run_server(config: Config) -> Result<()> {
    info!("Starting campus tracker v{}", crate::VERSION);

    let server = ServerBuilder::new().with_config(config).build().await?;
    let address = server.config().address();

    info!("Server starting at: http://{}", address);
    info!("API endpoints:");
    info!("   GET  /health");
    info!("   POST /auth/login, /auth/logout   GET /auth/state");
    info!("   GET  /events?scope=all|upcoming|past, /events/{{id}}, /events/stats");
    info!("   POST /events, /events/{{id}}/register, /events/{{id}}/attendance");
    info!("   GET  /dashboard, /leaderboard");

    server.start().await
}
