// ABOUTME: HTTP route modules for the dashboard server
// ABOUTME: Each concern exposes a unit struct with a routes() constructor returning an axum Router
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP routes
//!
//! One module per concern; `crate::server` assembles them into the
//! application router.

/// Service monitoring endpoints
pub mod health;

/// Insight table and chart catalog endpoints
pub mod insights;

/// Server-rendered dashboard pages
pub mod pages;

/// Prediction endpoint
pub mod predict;
