// ABOUTME: Pre-computed insight table artifact and the fixed chart catalog
// ABOUTME: Loads tabular correlation data and maps summary periods to embed URLs
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Health insights data
//!
//! Both pieces here are retrieved, never computed: the insight table is a
//! pre-computed dataset rendered verbatim, and the charts are externally
//! hosted embeds selected by a pure lookup.

use crate::config::ChartConfig;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// Maximum number of table rows rendered on the insights page
pub const MAX_TABLE_ROWS: usize = 30;

/// Pre-computed table of metric correlations, loaded once at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightTable {
    /// Column headers
    pub columns: Vec<String>,
    /// Row data; cells are mixed-type (strings and numbers)
    pub rows: Vec<Vec<serde_json::Value>>,
}

impl InsightTable {
    /// Load the insight table artifact from a JSON file
    ///
    /// # Errors
    ///
    /// Fails when the file is missing, is not valid JSON, or has rows whose
    /// width does not match the header. Fatal at startup.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).with_context(|| {
            format!("failed to read insight table artifact at {}", path.display())
        })?;

        let table: Self = serde_json::from_str(&raw)
            .with_context(|| format!("invalid insight table artifact at {}", path.display()))?;

        for (index, row) in table.rows.iter().enumerate() {
            if row.len() != table.columns.len() {
                bail!(
                    "insight table row {} has {} cells, expected {}",
                    index,
                    row.len(),
                    table.columns.len()
                );
            }
        }

        info!(
            path = %path.display(),
            rows = table.rows.len(),
            "insight table loaded"
        );

        Ok(table)
    }

    /// Rows shown on the page, capped at [`MAX_TABLE_ROWS`]
    #[must_use]
    pub fn display_rows(&self) -> &[Vec<serde_json::Value>] {
        &self.rows[..self.rows.len().min(MAX_TABLE_ROWS)]
    }

    /// Render the table as an HTML fragment with escaped cell content
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut html = String::from("<table class=\"insight-table\">\n<tr>");
        for column in &self.columns {
            html.push_str("<th>");
            html.push_str(&html_escape::encode_text(column));
            html.push_str("</th>");
        }
        html.push_str("</tr>\n");

        for row in self.display_rows() {
            html.push_str("<tr>");
            for cell in row {
                html.push_str("<td>");
                html.push_str(&html_escape::encode_text(&render_cell(cell)));
                html.push_str("</td>");
            }
            html.push_str("</tr>\n");
        }

        html.push_str("</table>");
        html
    }
}

/// Render a mixed-type cell for display
fn render_cell(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Summary period for the pre-rendered charts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartPeriod {
    Daily,
    Weekly,
    Monthly,
}

impl ChartPeriod {
    /// All periods in display order
    pub const ALL: [Self; 3] = [Self::Daily, Self::Weekly, Self::Monthly];

    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
        }
    }

    /// Parse from a path segment or query value
    #[must_use]
    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "daily" => Some(Self::Daily),
            "weekly" => Some(Self::Weekly),
            "monthly" => Some(Self::Monthly),
            _ => None,
        }
    }
}

/// Fixed mapping from summary period to externally hosted embed URL
#[derive(Debug, Clone)]
pub struct ChartCatalog {
    daily_url: String,
    weekly_url: String,
    monthly_url: String,
}

impl ChartCatalog {
    /// Build the catalog from configuration
    #[must_use]
    pub fn new(config: &ChartConfig) -> Self {
        Self {
            daily_url: config.daily_url.clone(),
            weekly_url: config.weekly_url.clone(),
            monthly_url: config.monthly_url.clone(),
        }
    }

    /// Embed URL for the given period; pure lookup, no transformation
    #[must_use]
    pub fn url_for(&self, period: ChartPeriod) -> &str {
        match period {
            ChartPeriod::Daily => &self.daily_url,
            ChartPeriod::Weekly => &self.weekly_url,
            ChartPeriod::Monthly => &self.monthly_url,
        }
    }

    /// All (period, url) pairs in display order
    pub fn entries(&self) -> impl Iterator<Item = (ChartPeriod, &str)> {
        ChartPeriod::ALL
            .into_iter()
            .map(move |period| (period, self.url_for(period)))
    }
}
