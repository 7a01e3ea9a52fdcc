//! `[site]` section configuration.
//!
//! Global site identity and the deployment base path.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "Go Mod Parser"
//! description = "A comprehensive Go module parser library"
//! base_path = "/go-mod-parser/"
//! ```

use crate::types::{ConfigDiagnostics, FieldPath, Violation};
use serde::{Deserialize, Serialize};

/// Site metadata shared across locales.
///
/// `title` and `description` double as fallbacks for locales that omit
/// their own; `base_path` is handed verbatim to the deployment layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Site title.
    pub title: String,

    /// Site description.
    pub description: String,

    /// URL path prefix the site is deployed under (e.g. for sub-path
    /// hosting on GitHub Pages). Must start and end with `/`.
    pub base_path: String,
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            base_path: "/".to_string(),
        }
    }
}

impl SiteSectionConfig {
    /// Validate site configuration.
    ///
    /// # Checks
    /// - `title` must be non-empty (it is the fallback for locale titles)
    /// - `base_path` must start and end with `/`
    pub(crate) fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.is_empty() {
            diag.error_with_hint(
                Violation::MissingRequiredField,
                FieldPath::new("site.title"),
                "site title must not be empty",
                "locales without their own title fall back to it",
            );
        }

        if !self.base_path.starts_with('/') || !self.base_path.ends_with('/') {
            diag.error_with_hint(
                Violation::MalformedBasePath,
                FieldPath::new("site.base_path"),
                format!(
                    "base path {:?} must start and end with `/`",
                    self.base_path
                ),
                "use a /-delimited prefix such as \"/go-mod-parser/\"",
            );
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
