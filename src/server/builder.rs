//! EchoServer for fluent construction of the local echo service

use super::exposure::RestExposure;
use anyhow::Result;
use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// Builder for the echo HTTP server
///
/// # Example
///
/// ```ignore
/// EchoServer::new().serve("127.0.0.1:3000").await?;
/// ```
pub struct EchoServer {
    custom_routes: Vec<Router>,
}

impl EchoServer {
    pub fn new() -> Self {
        Self {
            custom_routes: Vec::new(),
        }
    }

    /// Add routes next to the echo and health routes
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the router without binding
    pub fn build(self) -> Router {
        RestExposure::build_router(self.custom_routes)
    }

    /// Serve with graceful shutdown on SIGTERM / Ctrl+C
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build();
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Echo server listening on {}", listener.local_addr()?);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Echo server shutdown complete");
        Ok(())
    }

    /// Bind `addr` and serve on a background task
    ///
    /// Returns the bound address, so `127.0.0.1:0` picks a free port.
    pub async fn spawn(self, addr: &str) -> Result<SocketAddr> {
        let app = self.build();
        let listener = TcpListener::bind(addr).await?;
        let local = listener.local_addr()?;

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(error = %e, "Echo server stopped");
            }
        });

        tracing::info!("Echo server listening on {}", local);
        Ok(local)
    }
}

impl Default for EchoServer {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;

    #[test]
    fn test_build_default() {
        let _router = EchoServer::new().build();
    }

    #[test]
    fn test_build_with_custom_routes() {
        let routes = Router::new().route("/version", get(|| async { "0.1.0" }));
        let _router = EchoServer::default().with_custom_routes(routes).build();
    }

    #[tokio::test]
    async fn test_spawn_picks_free_port() {
        let addr = EchoServer::new().spawn("127.0.0.1:0").await.unwrap();
        assert_ne!(addr.port(), 0);
    }
}
