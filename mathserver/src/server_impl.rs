//! Main server implementation
//!
//! The MathServer struct wires the result store into an Axum router using
//! dependency injection, so tests can substitute store implementations.

use std::net::SocketAddr;
use axum::{
    Router,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::error::{MathServerError, MathServerResult};
use crate::traits::ResultStore;
use crate::web::handlers;

/// Statistics server with an injected result store
#[derive(Clone)]
pub struct MathServer<S>
where
    S: ResultStore + Clone + Send + Sync + 'static,
{
    store: S,
    bind_address: SocketAddr,
}

impl<S> MathServer<S>
where
    S: ResultStore + Clone + Send + Sync + 'static,
{
    pub fn new(bind_address: SocketAddr, store: S) -> Self {
        Self {
            store,
            bind_address,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        Router::new()
            // Statistics API
            .route("/math/", post(handlers::perform_operation::<S>))
            .route("/math/:operation", get(handlers::get_result::<S>))
            // Health check
            .route("/health", get(handlers::health_check))
            .layer(
                ServiceBuilder::new()
                    .layer(CorsLayer::permissive())
                    .into_inner(),
            )
            .with_state(self.clone())
    }

    /// Start the server and run until shutdown
    pub async fn run(&self) -> MathServerResult<()> {
        let router = self.build_router();

        let listener = tokio::net::TcpListener::bind(self.bind_address)
            .await
            .map_err(|e| {
                MathServerError::ServerStartup(format!(
                    "Failed to bind to {}: {}",
                    self.bind_address, e
                ))
            })?;

        info!("Math server listening on http://{}", self.bind_address);

        tokio::select! {
            result = async { axum::serve(listener, router).await } => {
                result.map_err(|e| MathServerError::ServerStartup(format!("Server error: {}", e)))?;
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Received shutdown signal");
            }
        }

        Ok(())
    }
}
