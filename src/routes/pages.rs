// ABOUTME: Server-rendered page routes for the three dashboard views
// ABOUTME: Maps request paths through the view routing table, defaulting unknown paths to home
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Page routes
//!
//! Every path resolves through [`View::from_path`], so unknown paths render
//! the home view instead of a 404, matching the dashboard's navigation
//! contract.

use crate::resources::ServerResources;
use crate::views::{self, View};
use axum::{
    extract::State,
    http::Uri,
    response::Html,
    routing::get,
    Router,
};
use std::sync::Arc;

/// Page routes
pub struct PageRoutes;

impl PageRoutes {
    /// Create the page routes, including the catch-all fallback to home
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/", get(Self::handle_page))
            .route("/page-2", get(Self::handle_page))
            .route("/page-3", get(Self::handle_page))
            .fallback(get(Self::handle_page))
            .with_state(resources)
    }

    /// Render the view selected by the request path
    async fn handle_page(
        State(resources): State<Arc<ServerResources>>,
        uri: Uri,
    ) -> Html<String> {
        let view = View::from_path(uri.path());
        Html(views::render(view, &resources))
    }
}
