//! MCP server runner.
//!
//! `McpServerBuilder` takes any `rmcp::ServerHandler` and serves it on the
//! configured transport until the client disconnects, a shutdown signal
//! arrives, or the programmatic shutdown channel fires.
//!
//! # Example
//!
//! ```ignore
//! use ark_mcp_common::server::McpServerBuilder;
//! use ark_mcp_common::transport::Transport;
//!
//! McpServerBuilder::new(handler)
//!     .with_transport(Transport::stdio())
//!     .run()
//!     .await?;
//! ```

use crate::transport::Transport;
use rmcp::{ServerHandler, ServiceExt};
use std::net::SocketAddr;
use thiserror::Error;
use tokio::sync::oneshot;

/// Errors that can occur when running an MCP server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Failed to bind the listen address
    #[error("Failed to bind to {addr}: {message}")]
    BindFailed { addr: SocketAddr, message: String },

    /// Transport error during communication
    #[error("Transport error: {0}")]
    Transport(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Builder for configuring and running MCP servers.
pub struct McpServerBuilder<H> {
    handler: H,
    transport: Transport,
    shutdown_rx: Option<oneshot::Receiver<()>>,
}

impl<H> McpServerBuilder<H>
where
    H: ServerHandler + Clone + Send + Sync + 'static,
{
    /// Create a new server builder with the given handler.
    pub fn new(handler: H) -> Self {
        Self {
            handler,
            transport: Transport::default(),
            shutdown_rx: None,
        }
    }

    /// Set the transport for the server.
    pub fn with_transport(mut self, transport: Transport) -> Self {
        self.transport = transport;
        self
    }

    /// Stop the server when `shutdown_rx` resolves (message sent or sender dropped)
    /// instead of waiting for an OS signal.
    pub fn with_shutdown(mut self, shutdown_rx: oneshot::Receiver<()>) -> Self {
        self.shutdown_rx = Some(shutdown_rx);
        self
    }

    /// Run the server until shutdown.
    pub async fn run(self) -> Result<(), ServerError> {
        tracing::info!(transport = %self.transport, "Starting MCP server");

        let Self {
            handler,
            transport,
            shutdown_rx,
        } = self;
        let shutdown = shutdown_future(shutdown_rx);

        match transport {
            Transport::Stdio => run_stdio(handler, shutdown).await,
            Transport::Http { addr } => run_http(handler, addr, shutdown).await,
        }
    }
}

async fn shutdown_future(shutdown_rx: Option<oneshot::Receiver<()>>) {
    match shutdown_rx {
        Some(rx) => {
            let _ = rx.await;
        }
        None => wait_for_shutdown_signal().await,
    }
}

async fn run_stdio<H>(
    handler: H,
    shutdown: impl std::future::Future<Output = ()>,
) -> Result<(), ServerError>
where
    H: ServerHandler + Clone + Send + Sync + 'static,
{
    let service = handler
        .serve(rmcp::transport::io::stdio())
        .await
        .map_err(|e| ServerError::Transport(e.to_string()))?;

    tokio::select! {
        result = service.waiting() => {
            result.map_err(|e| ServerError::Transport(e.to_string()))?;
            tracing::info!("Client disconnected");
        }
        _ = shutdown => {
            tracing::info!("Received shutdown signal, stopping server");
        }
    }
    Ok(())
}

async fn run_http<H>(
    handler: H,
    addr: SocketAddr,
    shutdown: impl std::future::Future<Output = ()> + Send + 'static,
) -> Result<(), ServerError>
where
    H: ServerHandler + Clone + Send + Sync + 'static,
{
    use rmcp::transport::streamable_http_server::{
        StreamableHttpService, session::local::LocalSessionManager,
    };

    let service = StreamableHttpService::new(
        move || Ok(handler.clone()),
        LocalSessionManager::default().into(),
        Default::default(),
    );
    let router = axum::Router::new().nest_service("/mcp", service);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::BindFailed {
            addr,
            message: e.to_string(),
        })?;

    tracing::info!(%addr, "HTTP server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

/// Wait for SIGTERM or SIGINT (Ctrl+C on non-unix platforms).
async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        match (signal(SignalKind::terminate()), signal(SignalKind::interrupt())) {
            (Ok(mut sigterm), Ok(mut sigint)) => {
                tokio::select! {
                    _ = sigterm.recv() => tracing::info!("Received SIGTERM"),
                    _ = sigint.recv() => tracing::info!("Received SIGINT"),
                }
            }
            (Err(e), _) | (_, Err(e)) => {
                tracing::warn!(error = %e, "Failed to register signal handlers, falling back to Ctrl+C");
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
        tracing::info!("Received Ctrl+C");
    }
}

/// Create a channel for triggering shutdown programmatically.
///
/// Pass the receiver to [`McpServerBuilder::with_shutdown`].
pub fn shutdown_channel() -> (oneshot::Sender<()>, oneshot::Receiver<()>) {
    oneshot::channel()
}
