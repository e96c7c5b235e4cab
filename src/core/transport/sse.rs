//! SSE transport implementation.
//!
//! Serves the MCP server over rmcp's streamable HTTP service, which answers
//! requests with server-sent event streams. The service is mounted into an
//! axum router next to a couple of plain JSON endpoints:
//!
//! - `{mcp_path}` (default `/mcp`): MCP over streamable HTTP
//! - `/health`: liveness check
//! - `/`: server summary

use axum::{Json, Router, response::IntoResponse, routing::get};
use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

use super::{TransportError, TransportResult, config::SseConfig};
use crate::core::McpServer;

/// SSE transport handler.
pub struct SseTransport {
    config: SseConfig,
}

impl SseTransport {
    /// Create a new SSE transport with the given config.
    pub fn new(config: SseConfig) -> Self {
        Self { config }
    }

    /// Build the HTTP router serving `server`.
    pub fn router(&self, server: McpServer) -> Router {
        let summary = serde_json::json!({
            "name": server.name(),
            "version": server.version(),
            "transport": "SSE",
            "endpoints": {
                "mcp": self.config.mcp_path,
                "health": "/health"
            },
            "protocol": "MCP streamable HTTP"
        });

        let mcp_service = StreamableHttpService::new(
            move || Ok(server.clone()),
            LocalSessionManager::default().into(),
            StreamableHttpServerConfig::default(),
        );

        let mut app = Router::new()
            .nest_service(&self.config.mcp_path, mcp_service)
            .route("/health", get(health_check))
            .route("/", get(move || async move { Json(summary) }))
            .layer(TraceLayer::new_for_http());

        if self.config.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            app = app.layer(cors);
        }

        app
    }

    /// Run the SSE transport until Ctrl-C or a server error.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.config.address();
        let app = self.router(server);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!("SSE server listening on {}", addr);
        info!("  → MCP:    {}{}", self.config.base_url(), self.config.mcp_path);
        info!("  → Health: {}/health", self.config.base_url());

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        info!("SSE transport finished");
        Ok(())
    }
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Resolve when the process receives Ctrl-C.
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
