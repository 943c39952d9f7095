// ABOUTME: Pure prediction core mapping daily health metrics to a running time estimate
// ABOUTME: Parses raw form values, applies the trained model, and derives pace-based distance
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Running time prediction
//!
//! Pure computation with no side effects: the trained model maps the ordered
//! feature vector to a raw duration in minutes, a fixed calibration offset is
//! subtracted, and the pace input converts the adjusted duration into an
//! implied distance. Every recomputation starts from the current inputs; no
//! state carries over between calls.

use crate::errors::AppError;
use crate::model::{DurationModel, FEATURE_COUNT};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Calibration offset baked in by the training process, in minutes.
/// Subtracted from every raw model output; must be preserved exactly for
/// compatibility with the trained artifact.
pub const CALIBRATION_OFFSET_MINUTES: i64 = 15;

/// Errors produced by the prediction core
#[derive(Debug, Error)]
pub enum PredictionError {
    /// A field value could not be parsed as a number
    #[error("field '{field}': '{value}' is not a valid number")]
    InputFormat {
        /// Name of the offending field
        field: &'static str,
        /// Raw value as received
        value: String,
    },

    /// A required field was empty
    #[error("field '{field}' is required")]
    MissingField {
        /// Name of the missing field
        field: &'static str,
    },

    /// A numeric field was outside its acceptable range
    #[error("field '{field}': {reason}")]
    OutOfRange {
        /// Name of the offending field
        field: &'static str,
        /// Why the value was rejected
        reason: &'static str,
    },

    /// Pace per mile is zero, so distance is undefined
    #[error("pace per mile is zero; implied distance is undefined")]
    DivisionUndefined,
}

impl From<PredictionError> for AppError {
    fn from(error: PredictionError) -> Self {
        match &error {
            PredictionError::InputFormat { field, value } => {
                AppError::invalid_format(*field, value.clone())
            }
            PredictionError::MissingField { field } => AppError::missing_field(*field),
            PredictionError::OutOfRange { field, reason } => {
                AppError::out_of_range(*field, format!("field '{field}': {reason}"))
            }
            PredictionError::DivisionUndefined => AppError::division_undefined(error.to_string()),
        }
    }
}

/// The five user-supplied daily health metrics
///
/// Run distance is not part of the input: the model was trained to predict a
/// duration given a target, so that feature is always zero at prediction time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Daily step goal
    pub step_goal: f64,
    /// Projected average heart rate (bpm)
    pub heart_rate_bpm: f64,
    /// Body weight (lbs)
    pub weight_lbs: f64,
    /// Body fat percentage
    pub body_fat_pct: f64,
    /// Sleep goal (hours)
    pub sleep_hours: f64,
}

impl FeatureVector {
    /// Ordered model input with the run-distance feature fixed at zero
    #[must_use]
    pub const fn to_model_input(&self) -> [f64; FEATURE_COUNT] {
        [
            self.step_goal,
            self.heart_rate_bpm,
            self.weight_lbs,
            self.body_fat_pct,
            self.sleep_hours,
            0.0,
        ]
    }
}

/// Per-mile running pace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pace {
    /// Whole minutes per mile
    pub minutes: u32,
    /// Seconds within the minute (0-59)
    pub seconds: u32,
}

impl Pace {
    /// Build a pace, validating the seconds component
    ///
    /// # Errors
    ///
    /// Rejects seconds outside 0-59.
    pub fn new(minutes: u32, seconds: u32) -> Result<Self, PredictionError> {
        if seconds > 59 {
            return Err(PredictionError::OutOfRange {
                field: "pace_sec",
                reason: "seconds must be between 0 and 59",
            });
        }
        Ok(Self { minutes, seconds })
    }

    /// Minutes required to cover one mile
    #[must_use]
    pub fn per_mile_minutes(&self) -> f64 {
        f64::from(self.minutes) + f64::from(self.seconds) / 60.0
    }
}

/// Raw form values as submitted by the user, prior to validation
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GoalInput {
    /// Daily step goal
    pub steps: String,
    /// Projected average heart rate (bpm)
    pub heart_rate: String,
    /// Body weight (lbs)
    pub weight: String,
    /// Body fat percentage
    pub body_fat: String,
    /// Sleep goal (hours)
    pub sleep: String,
    /// Pace minutes per mile
    pub pace_min: String,
    /// Pace seconds within the minute
    pub pace_sec: String,
}

impl GoalInput {
    /// Validate and convert the raw form values
    ///
    /// # Errors
    ///
    /// Fails with an input-format error on any non-numeric or empty field,
    /// reported to the caller rather than silently defaulted.
    pub fn parse(&self) -> Result<(FeatureVector, Pace), PredictionError> {
        let features = FeatureVector {
            step_goal: parse_metric("steps", &self.steps)?,
            heart_rate_bpm: parse_metric("heart_rate", &self.heart_rate)?,
            weight_lbs: parse_metric("weight", &self.weight)?,
            body_fat_pct: parse_metric("body_fat", &self.body_fat)?,
            sleep_hours: parse_metric("sleep", &self.sleep)?,
        };

        let pace = Pace::new(
            parse_whole("pace_min", &self.pace_min)?,
            parse_whole("pace_sec", &self.pace_sec)?,
        )?;

        Ok((features, pace))
    }
}

/// Parse a non-negative metric field
fn parse_metric(field: &'static str, raw: &str) -> Result<f64, PredictionError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PredictionError::MissingField { field });
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| PredictionError::InputFormat {
            field,
            value: raw.to_owned(),
        })?;
    if !value.is_finite() || value < 0.0 {
        return Err(PredictionError::OutOfRange {
            field,
            reason: "value must be a non-negative number",
        });
    }
    Ok(value)
}

/// Parse a whole-number field (pace components)
fn parse_whole(field: &'static str, raw: &str) -> Result<u32, PredictionError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PredictionError::MissingField { field });
    }
    trimmed.parse().map_err(|_| PredictionError::InputFormat {
        field,
        value: raw.to_owned(),
    })
}

/// Result of one prediction, recomputed fresh on every call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunPrediction {
    /// Adjusted duration in whole minutes
    pub total_minutes: i64,
    /// Whole hours component of the adjusted duration
    pub hours: i64,
    /// Remaining minutes component of the adjusted duration
    pub minutes: i64,
    /// Implied distance in miles, rounded to one decimal
    pub distance_miles: f64,
}

impl RunPrediction {
    /// Human-readable duration, in the minutes form under one hour and the
    /// hour(s)-and-minutes form from 60 minutes on
    #[must_use]
    pub fn duration_message(&self) -> String {
        if self.total_minutes < 60 {
            format!("{} minutes", self.total_minutes)
        } else if self.hours == 1 {
            format!("1 hour and {} minutes", self.minutes)
        } else {
            format!("{} hours and {} minutes", self.hours, self.minutes)
        }
    }

    /// Human-readable implied distance at the submitted pace
    #[must_use]
    pub fn distance_message(&self) -> String {
        format!("At your pace, that will be: {:.1} miles", self.distance_miles)
    }
}

/// Predict the running time for the given metrics and derive the implied
/// distance at the given pace
///
/// # Errors
///
/// Fails with [`PredictionError::DivisionUndefined`] when the pace is zero,
/// rather than propagating an infinite or NaN distance.
pub fn predict_run(
    model: &dyn DurationModel,
    features: &FeatureVector,
    pace: Pace,
) -> Result<RunPrediction, PredictionError> {
    let raw = model.predict(&features.to_model_input());

    // Truncate, then apply the fixed calibration offset
    #[allow(clippy::cast_possible_truncation)] // Safe: trained durations are small minute counts
    let total_minutes = raw.trunc() as i64 - CALIBRATION_OFFSET_MINUTES;

    let hours = total_minutes.div_euclid(60);
    let minutes = total_minutes.rem_euclid(60);

    let per_mile = pace.per_mile_minutes();
    if per_mile <= 0.0 {
        return Err(PredictionError::DivisionUndefined);
    }

    #[allow(clippy::cast_precision_loss)] // Safe: minute counts are far below 2^52
    let distance_miles = round_to_tenth(total_minutes as f64 / per_mile);

    Ok(RunPrediction {
        total_minutes,
        hours,
        minutes,
        distance_miles,
    })
}

/// Round to one decimal place
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
