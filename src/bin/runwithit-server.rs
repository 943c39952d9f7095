// ABOUTME: Server binary for the Run With It prediction dashboard
// ABOUTME: Loads configuration and artifacts, then serves the dashboard over HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Run With It Server Binary
//!
//! Starts the dashboard server: loads the pre-trained model and insight
//! table (fatal when unavailable), then serves the three views and the
//! prediction API.

use anyhow::Result;
use clap::Parser;
use runwithit::{
    config::ServerConfig, logging, resources::ServerResources, server::DashboardServer,
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "runwithit-server")]
#[command(about = "Run With It - running time prediction dashboard")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override path to the serialized model artifact
    #[arg(long)]
    model: Option<String>,

    /// Override path to the insight table artifact
    #[arg(long)]
    insight_table: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Fall back to defaults when argument parsing fails in containerized
    // environments
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Argument parsing failed: {e}");
            eprintln!("Using default configuration");
            Args {
                http_port: None,
                model: None,
                insight_table: None,
            }
        }
    };

    // Load configuration from environment, then apply CLI overrides
    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(model) = args.model {
        config.artifacts.model_path = model.into();
    }
    if let Some(insight_table) = args.insight_table {
        config.artifacts.insight_table_path = insight_table.into();
    }

    logging::init_from_env()?;

    info!("Starting Run With It dashboard");
    info!("{}", config.summary());

    // All artifacts load once here; a missing model is fatal before the
    // listener binds
    let http_port = config.http_port;
    let resources = Arc::new(ServerResources::load(config)?);
    info!("Artifacts loaded; resources initialized");

    display_available_endpoints(&resources);

    let server = DashboardServer::new(resources);
    if let Err(e) = server.run(http_port).await {
        error!("Server error: {}", e);
        return Err(e);
    }

    Ok(())
}

/// Display all available endpoints with their ports
fn display_available_endpoints(resources: &ServerResources) {
    let host = &resources.config.host;
    let port = resources.config.http_port;

    info!("=== Available Endpoints ===");
    info!("Pages:");
    info!("   Run Predictor:     GET  http://{host}:{port}/");
    info!("   About:             GET  http://{host}:{port}/page-2");
    info!("   Health Insights:   GET  http://{host}:{port}/page-3");
    info!("Prediction API:");
    info!("   Predict:           POST http://{host}:{port}/api/predict");
    info!("Insights API:");
    info!("   Insight Table:     GET  http://{host}:{port}/api/insights/table");
    info!("   Chart Catalog:     GET  http://{host}:{port}/api/insights/charts");
    info!("   Chart by Period:   GET  http://{host}:{port}/api/insights/charts/{{period}}");
    info!("Monitoring:");
    info!("   Health Check:      GET  http://{host}:{port}/health");
    info!("   Readiness:         GET  http://{host}:{port}/ready");
    info!("=== End of Endpoint List ===");
}
