// ABOUTME: Static image assets read wholesale at startup and inlined as data URIs
// ABOUTME: Missing assets degrade to pages without the image rather than failing startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Inline static assets
//!
//! The headshot and run animation are presentation-only. They are read once,
//! base64-encoded, and embedded directly into the rendered pages; the core
//! never processes them.

use crate::config::ArtifactConfig;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Base64-encoded images ready for inline display
#[derive(Debug, Clone, Default)]
pub struct StaticAssets {
    /// Headshot shown on the about page (`data:image/png` URI)
    pub headshot: Option<String>,
    /// Looping run animation (`data:image/gif` URI)
    pub animation: Option<String>,
}

impl StaticAssets {
    /// Load and encode both images from the configured paths
    #[must_use]
    pub fn load(config: &ArtifactConfig) -> Self {
        Self {
            headshot: load_data_uri(&config.headshot_path, "image/png"),
            animation: load_data_uri(&config.animation_path, "image/gif"),
        }
    }
}

/// Read a file and encode it as a data URI, or log and skip when unavailable
fn load_data_uri(path: &Path, mime: &str) -> Option<String> {
    match fs::read(path) {
        Ok(bytes) => {
            debug!(path = %path.display(), size = bytes.len(), "asset loaded");
            Some(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "asset unavailable, page renders without it");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    #[test]
    fn test_load_encodes_existing_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"GIF89a").unwrap();

        let uri = load_data_uri(file.path(), "image/gif").unwrap();
        assert!(uri.starts_with("data:image/gif;base64,"));
        assert!(uri.ends_with(&STANDARD.encode(b"GIF89a")));
    }

    #[test]
    fn test_missing_file_yields_none() {
        assert!(load_data_uri(&PathBuf::from("/nonexistent/x.png"), "image/png").is_none());
    }
}
