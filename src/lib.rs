// ABOUTME: Main library entry point for the Run With It prediction dashboard
// ABOUTME: Serves a pre-trained running time model and static health insight views
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # Run With It
//!
//! A small analytics dashboard server around a pre-trained ridge regression
//! model that predicts a user's running time from daily health metrics, with
//! pre-rendered health insight charts and a correlation table.
//!
//! ## Architecture
//!
//! - **Predictor**: the pure metric-to-duration computation and pace-based
//!   distance derivation
//! - **Model**: deserialization of the immutable trained artifact
//! - **Insights**: pre-computed table and fixed chart catalog
//! - **Views/Routes**: three static views plus a small JSON API
//! - **Resources**: all artifacts loaded once at startup into immutable
//!   handles shared by every request
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use runwithit::config::ServerConfig;
//!
//! let config = ServerConfig::from_env().expect("configuration");
//! println!("dashboard configured for port {}", config.http_port);
//! ```

/// Inline static image assets
pub mod assets;

/// Environment-based configuration
pub mod config;

/// Unified error handling
pub mod errors;

/// Insight table artifact and chart catalog
pub mod insights;

/// Structured logging setup
pub mod logging;

/// Pre-trained duration model
pub mod model;

/// Pure prediction core
pub mod predictor;

/// Shared resource container
pub mod resources;

/// HTTP routes
pub mod routes;

/// Router assembly and serve loop
pub mod server;

/// View routing table and page rendering
pub mod views;
