//! Search provider declaration.
//!
//! # Example
//!
//! ```toml
//! [theme.search]
//! provider = "local"
//!
//! # or, hosted:
//! [theme.search]
//! provider = "algolia"
//! options = { index_name = "acme-docs", api_key = "..." }
//! ```
//!
//! The config only declares which provider the build engine should
//! instantiate and with what options; indexing happens elsewhere and
//! `options` is handed to the provider verbatim.

use crate::types::{ConfigDiagnostics, FieldPath, Violation};
use serde::{Deserialize, Serialize};

// ============================================================================
// SearchProvider
// ============================================================================

/// Recognized search backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchProvider {
    /// In-process index built at deploy time; needs no network-backed options.
    Local,
    /// Hosted index; requires `index_name` and `api_key` options.
    Algolia,
}

impl SearchProvider {
    /// Recognized provider identifiers, for hints.
    pub const RECOGNIZED: &'static [&'static str] = &["local", "algolia"];

    pub fn parse(identifier: &str) -> Option<Self> {
        match identifier {
            "local" => Some(Self::Local),
            "algolia" => Some(Self::Algolia),
            _ => None,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Algolia => "algolia",
        }
    }

    /// Option keys the provider cannot work without.
    pub const fn required_options(&self) -> &'static [&'static str] {
        match self {
            Self::Local => &[],
            Self::Algolia => &["index_name", "api_key"],
        }
    }
}

// ============================================================================
// SearchConfig
// ============================================================================

/// Search settings handed to the search backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Provider identifier, e.g. "local".
    pub provider: String,

    /// Provider-specific options, passed through verbatim.
    #[serde(default)]
    pub options: toml::value::Table,
}

impl SearchConfig {
    /// The local in-process provider with no options.
    pub fn local() -> Self {
        Self {
            provider: SearchProvider::Local.as_str().to_string(),
            options: toml::value::Table::new(),
        }
    }

    /// The recognized provider this config names, if any.
    pub fn kind(&self) -> Option<SearchProvider> {
        SearchProvider::parse(&self.provider)
    }

    pub(crate) fn validate(&self, path: &FieldPath, diag: &mut ConfigDiagnostics) {
        let Some(provider) = self.kind() else {
            diag.error_with_hint(
                Violation::UnknownSearchProvider,
                path.join("provider"),
                format!("unrecognized search provider {:?}", self.provider),
                format!(
                    "recognized providers: {}",
                    SearchProvider::RECOGNIZED.join(", ")
                ),
            );
            return;
        };

        for key in provider.required_options() {
            let missing = match self.options.get(*key) {
                Some(toml::Value::String(value)) => value.is_empty(),
                Some(_) => false,
                None => true,
            };
            if missing {
                diag.error(
                    Violation::MissingRequiredField,
                    path.join("options").join(key),
                    format!(
                        "the `{}` provider requires the `{key}` option",
                        provider.as_str()
                    ),
                );
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(config: &SearchConfig) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        config.validate(&FieldPath::new("theme.search"), &mut diag);
        diag
    }

    #[test]
    fn test_local_provider_needs_no_options() {
        let config = SearchConfig::local();
        assert_eq!(config.kind(), Some(SearchProvider::Local));
        assert!(validate(&config).is_empty());
    }

    #[test]
    fn test_unknown_provider_rejected() {
        let config: SearchConfig = toml::from_str(r#"provider = "elastic""#).unwrap();
        assert_eq!(config.kind(), None);

        let diag = validate(&config);
        assert!(diag.has(Violation::UnknownSearchProvider));
        assert_eq!(diag.errors()[0].field.as_str(), "theme.search.provider");
    }

    #[test]
    fn test_hosted_provider_requires_index_and_key() {
        let config: SearchConfig = toml::from_str(r#"provider = "algolia""#).unwrap();
        let diag = validate(&config);
        assert_eq!(diag.len(), 2);
        assert!(diag.has(Violation::MissingRequiredField));

        // Empty strings don't count as provided
        let config: SearchConfig = toml::from_str(
            r#"
provider = "algolia"
options = { index_name = "acme-docs", api_key = "" }
"#,
        )
        .unwrap();
        let diag = validate(&config);
        assert_eq!(diag.len(), 1);
        assert_eq!(
            diag.errors()[0].field.as_str(),
            "theme.search.options.api_key"
        );
    }

    #[test]
    fn test_hosted_provider_complete() {
        let config: SearchConfig = toml::from_str(
            r#"
provider = "algolia"
options = { index_name = "acme-docs", api_key = "k3y", app_id = "XY" }
"#,
        )
        .unwrap();
        assert!(validate(&config).is_empty());
        // Extra options pass through untouched
        assert_eq!(
            config.options.get("app_id").and_then(|v| v.as_str()),
            Some("XY")
        );
    }
}
