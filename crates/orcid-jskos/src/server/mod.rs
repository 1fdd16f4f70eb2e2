//! Server implementation.
//!
//! Provides both stdio (line-delimited JSON) and HTTP transports for the JSKOS API.

pub mod stdio;
pub mod transport;

use std::net::SocketAddr;

use crate::client::OrcidClient;
use crate::config::Config;
use crate::service::OrcidService;

/// JSKOS server for ORCID.
pub struct JskosServer {
    /// Query dispatcher.
    service: OrcidService,

    /// Answer 502 on upstream faults.
    surface_upstream_errors: bool,

    /// Whether access tokens are cached.
    caches_tokens: bool,
}

impl JskosServer {
    /// Create a new server.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let surface_upstream_errors = config.surface_upstream_errors;
        let client = OrcidClient::new(config)?;
        let caches_tokens = client.caches_tokens();

        Ok(Self {
            service: OrcidService::new(client),
            surface_upstream_errors,
            caches_tokens,
        })
    }

    /// Run the server in stdio mode.
    ///
    /// # Errors
    ///
    /// Returns error on I/O failure.
    pub async fn run_stdio(self) -> anyhow::Result<()> {
        tracing::info!(
            credentials = self.service.has_credentials(),
            "Starting JSKOS server in stdio mode"
        );

        stdio::run_stdio(self.service).await
    }

    /// Run the server in HTTP mode.
    ///
    /// # Errors
    ///
    /// Returns error on server failure.
    pub async fn run_http(self, port: u16) -> anyhow::Result<()> {
        tracing::info!(
            credentials = self.service.has_credentials(),
            "Starting JSKOS server in HTTP mode on port {}",
            port
        );

        let router = transport::create_router(
            self.service,
            self.surface_upstream_errors,
            self.caches_tokens,
        );
        let addr = SocketAddr::from(([0, 0, 0, 0], port));

        tracing::info!("HTTP server listening on http://{}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server shut down");
        Ok(())
    }

    /// Get the query dispatcher.
    #[must_use]
    pub const fn service(&self) -> &OrcidService {
        &self.service
    }
}

impl std::fmt::Debug for JskosServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JskosServer")
            .field("service", &self.service)
            .field("surface_upstream_errors", &self.surface_upstream_errors)
            .finish()
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install CTRL+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Received shutdown signal");
}
