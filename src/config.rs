// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles server port, artifact paths, chart URLs, and runtime environment parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment-based configuration management for deployment

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Default HTTP port for the dashboard server
const DEFAULT_HTTP_PORT: u16 = 8080;

/// Default artifact locations relative to the working directory
const DEFAULT_MODEL_PATH: &str = "data/ridge_model.json";
const DEFAULT_INSIGHT_TABLE_PATH: &str = "data/insight_table.json";
const DEFAULT_HEADSHOT_PATH: &str = "assets/headshot.png";
const DEFAULT_ANIMATION_PATH: &str = "assets/running.gif";

/// Default embed URLs for the pre-rendered summary charts
const DEFAULT_DAILY_CHART_URL: &str = "https://plot.ly/~dalfego/84.embed";
const DEFAULT_WEEKLY_CHART_URL: &str = "https://plot.ly/~dalfego/28.embed";
const DEFAULT_MONTHLY_CHART_URL: &str = "https://plot.ly/~dalfego/30.embed";

/// Environment type for deployment-specific behavior
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Environment::Production,
            "testing" | "test" => Environment::Testing,
            _ => Environment::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    /// Check if this is a development environment
    #[must_use]
    pub const fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Production => write!(f, "production"),
            Environment::Testing => write!(f, "testing"),
        }
    }
}

/// Filesystem locations of the pre-computed artifacts served by the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactConfig {
    /// Serialized ridge regression model
    pub model_path: PathBuf,
    /// Pre-computed insight table
    pub insight_table_path: PathBuf,
    /// Headshot image shown on the about page
    pub headshot_path: PathBuf,
    /// Looping run animation shown on the predictor and insights pages
    pub animation_path: PathBuf,
}

/// External embed URLs for the three pre-rendered summary charts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    pub daily_url: String,
    pub weekly_url: String,
    pub monthly_url: String,
}

/// Complete server configuration, loaded once at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP port the dashboard listens on
    pub http_port: u16,
    /// Bind host
    pub host: String,
    /// Deployment environment
    pub environment: Environment,
    /// Artifact locations
    pub artifacts: ArtifactConfig,
    /// Chart embed URLs
    pub charts: ChartConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error when a set variable fails to parse (for example a
    /// non-numeric `HTTP_PORT`).
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            http_port: env_var_or("HTTP_PORT", &DEFAULT_HTTP_PORT.to_string())?
                .parse()
                .context("HTTP_PORT must be a valid port number")?,
            host: env_var_or("HOST", "127.0.0.1")?,
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )?),
            artifacts: ArtifactConfig {
                model_path: PathBuf::from(env_var_or("MODEL_PATH", DEFAULT_MODEL_PATH)?),
                insight_table_path: PathBuf::from(env_var_or(
                    "INSIGHT_TABLE_PATH",
                    DEFAULT_INSIGHT_TABLE_PATH,
                )?),
                headshot_path: PathBuf::from(env_var_or("HEADSHOT_PATH", DEFAULT_HEADSHOT_PATH)?),
                animation_path: PathBuf::from(env_var_or(
                    "ANIMATION_PATH",
                    DEFAULT_ANIMATION_PATH,
                )?),
            },
            charts: ChartConfig {
                daily_url: env_var_or("DAILY_CHART_URL", DEFAULT_DAILY_CHART_URL)?,
                weekly_url: env_var_or("WEEKLY_CHART_URL", DEFAULT_WEEKLY_CHART_URL)?,
                monthly_url: env_var_or("MONTHLY_CHART_URL", DEFAULT_MONTHLY_CHART_URL)?,
            },
        })
    }

    /// One-line startup summary for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "environment={} host={} port={} model={} insight_table={}",
            self.environment,
            self.host,
            self.http_port,
            self.artifacts.model_path.display(),
            self.artifacts.insight_table_path.display(),
        )
    }
}

/// Read an environment variable with a default fallback
fn env_var_or(name: &str, default: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Ok(default.to_owned()),
    }
}
