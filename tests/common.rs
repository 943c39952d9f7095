// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, in-memory artifacts, and router construction helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
#![allow(dead_code)]

//! Shared test utilities for `runwithit`

use runwithit::{
    assets::StaticAssets,
    config::ServerConfig,
    insights::InsightTable,
    model::RidgeModel,
    resources::ServerResources,
    server::DashboardServer,
};
use serde_json::json;
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// A model whose raw output is a fixed value regardless of input
/// (all-zero coefficients, intercept = raw)
pub fn fixed_model(raw: f64) -> RidgeModel {
    RidgeModel::new([0.0; 6], raw)
}

/// Small in-memory insight table
pub fn sample_insight_table() -> InsightTable {
    InsightTable {
        columns: vec!["Metric Pair".into(), "Correlation".into()],
        rows: vec![
            vec![json!("Steps vs. Run Duration"), json!(0.82)],
            vec![json!("Sleep vs. Run Duration"), json!(0.41)],
        ],
    }
}

/// Resources over a fixed-output model and the sample table
pub fn test_resources(raw_model_output: f64) -> Arc<ServerResources> {
    init_test_logging();
    let config = ServerConfig::from_env().expect("default config");
    Arc::new(ServerResources::new(
        fixed_model(raw_model_output),
        sample_insight_table(),
        StaticAssets::default(),
        config,
    ))
}

/// Application router over test resources
pub fn test_router(raw_model_output: f64) -> axum::Router {
    DashboardServer::new(test_resources(raw_model_output)).router()
}
