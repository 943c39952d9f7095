// ABOUTME: Pre-trained ridge regression model artifact loading and evaluation
// ABOUTME: Exposes the DurationModel trait so the predictor can run against mock models
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pre-trained duration model
//!
//! The model is an immutable artifact produced by an external training
//! pipeline. This module only deserializes it and evaluates the linear form
//! `intercept + coefficients . features`; training is out of scope.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

/// Number of features the model was trained on: step goal, heart rate,
/// weight, body fat percentage, sleep goal, run distance
pub const FEATURE_COUNT: usize = 6;

/// A model mapping the ordered feature vector to a raw duration in minutes
///
/// Trait seam so the pure predictor can be unit tested against a mock
/// returning a fixed value.
pub trait DurationModel: Send + Sync {
    /// Predicted duration in minutes, before calibration adjustment
    fn predict(&self, features: &[f64; FEATURE_COUNT]) -> f64;
}

/// Serialized form of the trained ridge regression model
#[derive(Debug, Deserialize)]
struct RidgeModelArtifact {
    coefficients: Vec<f64>,
    intercept: f64,
}

/// Pre-fit ridge regression over the six daily health metrics
#[derive(Debug, Clone)]
pub struct RidgeModel {
    coefficients: [f64; FEATURE_COUNT],
    intercept: f64,
}

impl RidgeModel {
    /// Build a model from explicit parameters
    ///
    /// Primarily for tests; production models come from [`RidgeModel::load`].
    #[must_use]
    pub const fn new(coefficients: [f64; FEATURE_COUNT], intercept: f64) -> Self {
        Self {
            coefficients,
            intercept,
        }
    }

    /// Load the model artifact from a JSON file
    ///
    /// # Errors
    ///
    /// Fails when the file is missing, is not valid JSON, or carries a
    /// coefficient vector of the wrong length. The caller treats any of
    /// these as fatal at startup.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read model artifact at {}", path.display()))?;

        let artifact: RidgeModelArtifact = serde_json::from_str(&raw)
            .with_context(|| format!("invalid model artifact at {}", path.display()))?;

        if artifact.coefficients.len() != FEATURE_COUNT {
            bail!(
                "model artifact at {} has {} coefficients, expected {}",
                path.display(),
                artifact.coefficients.len(),
                FEATURE_COUNT
            );
        }

        let mut coefficients = [0.0; FEATURE_COUNT];
        coefficients.copy_from_slice(&artifact.coefficients);

        info!(path = %path.display(), "ridge model loaded");

        Ok(Self {
            coefficients,
            intercept: artifact.intercept,
        })
    }
}

impl DurationModel for RidgeModel {
    fn predict(&self, features: &[f64; FEATURE_COUNT]) -> f64 {
        self.coefficients
            .iter()
            .zip(features.iter())
            .map(|(c, x)| c * x)
            .sum::<f64>()
            + self.intercept
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_artifact(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_predict_is_linear_form() {
        let model = RidgeModel::new([1.0, 0.0, 0.0, 0.0, 0.0, 2.0], 10.0);
        let prediction = model.predict(&[3.0, 99.0, 99.0, 99.0, 99.0, 4.0]);
        assert!((prediction - 21.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_load_valid_artifact() {
        let file = write_artifact(
            r#"{"coefficients": [0.001, 0.1, 0.05, -0.2, 1.5, 0.0], "intercept": 12.5}"#,
        );
        let model = RidgeModel::load(file.path()).unwrap();
        let prediction = model.predict(&[0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert!((prediction - 12.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_load_rejects_wrong_coefficient_count() {
        let file = write_artifact(r#"{"coefficients": [1.0, 2.0], "intercept": 0.0}"#);
        let err = RidgeModel::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("expected 6"));
    }

    #[test]
    fn test_load_missing_file_fails() {
        assert!(RidgeModel::load(Path::new("/nonexistent/model.json")).is_err());
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let file = write_artifact("not json at all");
        assert!(RidgeModel::load(file.path()).is_err());
    }
}
