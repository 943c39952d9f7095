// ABOUTME: Centralized resource container for dependency injection across route handlers
// ABOUTME: Holds the model, insight table, assets, and config loaded once at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Server Resources
//!
//! Explicit process-wide initialization performed once at startup, producing
//! immutable handles passed into the handlers. Replaces the anti-pattern of
//! module-global state loaded at import time.

use crate::assets::StaticAssets;
use crate::config::ServerConfig;
use crate::insights::{ChartCatalog, InsightTable};
use crate::model::RidgeModel;
use anyhow::{Context, Result};
use std::sync::Arc;

/// Centralized resource container shared by all requests
///
/// Everything here is read-only after startup; recomputations are pure
/// functions over these handles and the current request.
#[derive(Clone, Debug)]
pub struct ServerResources {
    /// Pre-trained duration model
    pub model: Arc<RidgeModel>,
    /// Pre-computed insight table
    pub insights: Arc<InsightTable>,
    /// Fixed chart catalog
    pub charts: Arc<ChartCatalog>,
    /// Inline image assets
    pub assets: Arc<StaticAssets>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Load every artifact and assemble the container
    ///
    /// # Errors
    ///
    /// Fails fast when the model or insight table artifact is unavailable;
    /// the process cannot serve predictions without them.
    pub fn load(config: ServerConfig) -> Result<Self> {
        let model = RidgeModel::load(&config.artifacts.model_path)
            .context("model artifact unavailable; cannot serve predictions")?;

        let insights = InsightTable::load(&config.artifacts.insight_table_path)
            .context("insight table artifact unavailable")?;

        let assets = StaticAssets::load(&config.artifacts);
        let charts = ChartCatalog::new(&config.charts);

        Ok(Self {
            model: Arc::new(model),
            insights: Arc::new(insights),
            charts: Arc::new(charts),
            assets: Arc::new(assets),
            config: Arc::new(config),
        })
    }

    /// Assemble a container from already-constructed parts
    ///
    /// Used by tests that build artifacts in memory.
    #[must_use]
    pub fn new(
        model: RidgeModel,
        insights: InsightTable,
        assets: StaticAssets,
        config: ServerConfig,
    ) -> Self {
        let charts = ChartCatalog::new(&config.charts);
        Self {
            model: Arc::new(model),
            insights: Arc::new(insights),
            charts: Arc::new(charts),
            assets: Arc::new(assets),
            config: Arc::new(config),
        }
    }
}
