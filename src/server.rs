// ABOUTME: Dashboard server assembly and serve loop
// ABOUTME: Merges the route groups, applies HTTP middleware, and runs axum over a TCP listener
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dashboard server
//!
//! Single-threaded request/response semantics from the caller's point of
//! view: every handler is synchronous pure computation over the shared
//! read-only resources, so no coordination beyond `Arc` sharing is needed.

use crate::resources::ServerResources;
use crate::routes::{
    health::HealthRoutes, insights::InsightRoutes, pages::PageRoutes, predict::PredictRoutes,
};
use anyhow::{Context, Result};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// The Run With It dashboard server
pub struct DashboardServer {
    resources: Arc<ServerResources>,
}

impl DashboardServer {
    /// Create a server over the shared resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Build the application router with all route groups and middleware
    #[must_use]
    pub fn router(&self) -> Router {
        Router::new()
            .merge(HealthRoutes::routes())
            .merge(PredictRoutes::routes(self.resources.clone()))
            .merge(InsightRoutes::routes(self.resources.clone()))
            .merge(PageRoutes::routes(self.resources.clone()))
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
    }

    /// Bind the listener and serve until shutdown
    ///
    /// # Errors
    ///
    /// Fails when the port cannot be bound or the server loop errors.
    pub async fn run(self, port: u16) -> Result<()> {
        let addr = format!("{}:{}", self.resources.config.host, port);
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;

        info!("dashboard server listening on http://{addr}");

        axum::serve(listener, self.router())
            .await
            .context("server loop failed")?;

        Ok(())
    }
}
