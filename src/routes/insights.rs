// ABOUTME: Insight table and chart catalog API endpoints
// ABOUTME: Serves the pre-computed table (capped at 30 rows) and fixed embed URL lookups
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Insights routes
//!
//! All data served here is pre-computed elsewhere; these handlers only
//! retrieve and shape it.

use crate::errors::AppError;
use crate::insights::ChartPeriod;
use crate::resources::ServerResources;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

/// Insight table payload, capped at the display row limit
#[derive(Debug, Serialize)]
pub struct InsightTableResponse {
    /// Column headers
    pub columns: Vec<String>,
    /// Rows shown on the page
    pub rows: Vec<Vec<serde_json::Value>>,
    /// Total rows in the underlying artifact
    pub total_rows: usize,
}

/// One chart catalog entry
#[derive(Debug, Serialize)]
pub struct ChartEntry {
    /// Summary period
    pub period: ChartPeriod,
    /// Display label
    pub label: &'static str,
    /// Embed URL, substituted verbatim into the page iframe
    pub url: String,
}

/// Insights routes
pub struct InsightRoutes;

impl InsightRoutes {
    /// Create all insights routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/insights/table", get(Self::handle_table))
            .route("/api/insights/charts", get(Self::handle_charts))
            .route("/api/insights/charts/:period", get(Self::handle_chart))
            .with_state(resources)
    }

    /// Serve the pre-computed insight table
    async fn handle_table(
        State(resources): State<Arc<ServerResources>>,
    ) -> Json<InsightTableResponse> {
        let table = &resources.insights;
        Json(InsightTableResponse {
            columns: table.columns.clone(),
            rows: table.display_rows().to_vec(),
            total_rows: table.rows.len(),
        })
    }

    /// Serve the full chart catalog
    async fn handle_charts(State(resources): State<Arc<ServerResources>>) -> Json<Vec<ChartEntry>> {
        let entries = resources
            .charts
            .entries()
            .map(|(period, url)| ChartEntry {
                period,
                label: period.label(),
                url: url.to_owned(),
            })
            .collect();
        Json(entries)
    }

    /// Serve a single chart URL by period
    async fn handle_chart(
        State(resources): State<Arc<ServerResources>>,
        Path(period): Path<String>,
    ) -> Result<Json<ChartEntry>, AppError> {
        let period = ChartPeriod::from_str_opt(&period)
            .ok_or_else(|| AppError::not_found(format!("chart period '{period}'")))?;

        Ok(Json(ChartEntry {
            period,
            label: period.label(),
            url: resources.charts.url_for(period).to_owned(),
        }))
    }
}
