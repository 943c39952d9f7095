// ABOUTME: Prediction endpoint mapping raw form values to a running time estimate
// ABOUTME: Thin HTTP wrapper over the pure predictor; all validation errors surface as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prediction route
//!
//! `POST /api/predict` accepts the raw form values exactly as entered and
//! returns the formatted duration and distance messages alongside the
//! numeric breakdown. One request, one recomputation, no state.

use crate::errors::AppError;
use crate::predictor::{predict_run, GoalInput};
use crate::resources::ServerResources;
use axum::{extract::State, routing::post, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Response payload for a successful prediction
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    /// Formatted duration message ("59 minutes", "2 hours and 0 minutes")
    pub duration: String,
    /// Formatted distance message
    pub distance: String,
    /// Adjusted duration in whole minutes
    pub total_minutes: i64,
    /// Whole hours component
    pub hours: i64,
    /// Remaining minutes component
    pub minutes: i64,
    /// Implied distance in miles, one decimal
    pub distance_miles: f64,
}

/// Prediction routes
pub struct PredictRoutes;

impl PredictRoutes {
    /// Create the prediction route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/predict", post(Self::handle_predict))
            .with_state(resources)
    }

    /// Handle a prediction request
    async fn handle_predict(
        State(resources): State<Arc<ServerResources>>,
        Json(input): Json<GoalInput>,
    ) -> Result<Json<PredictResponse>, AppError> {
        let (features, pace) = input.parse()?;
        let prediction = predict_run(resources.model.as_ref(), &features, pace)?;

        debug!(
            total_minutes = prediction.total_minutes,
            distance_miles = prediction.distance_miles,
            "prediction computed"
        );

        Ok(Json(PredictResponse {
            duration: prediction.duration_message(),
            distance: prediction.distance_message(),
            total_minutes: prediction.total_minutes,
            hours: prediction.hours,
            minutes: prediction.minutes,
            distance_miles: prediction.distance_miles,
        }))
    }
}
