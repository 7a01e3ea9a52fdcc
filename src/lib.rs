//! Locale-aware configuration model for multi-locale documentation sites.
//!
//! Declares, for each supported locale, the navigation bar, sidebar tree,
//! footer text and search behavior, plus site-wide settings (title,
//! description, deployment base path). The model is built once at process
//! start — from `doclocale.toml` or a literal declaration — validated
//! eagerly, then treated as read-only for the rest of the build.
//!
//! # Module Structure
//!
//! ```text
//! src/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site]
//! │   ├── theme      # [theme] + per-locale theme
//! │   ├── locale     # [locales.*] registry
//! │   ├── nav        # nav items and sidebar tree
//! │   └── search     # search provider declaration
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, diagnostics
//! │   ├── field      # FieldPath
//! │   └── handle     # Global config handle
//! ├── resolve        # EffectiveConfig derivation
//! └── lib.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section       | Purpose                                      |
//! |---------------|----------------------------------------------|
//! | `[site]`      | Title, description, deployment base path     |
//! | `[theme]`     | Site-wide theme defaults (search)            |
//! | `[locales.*]` | Per-locale label, lang, title and theme      |

pub mod logger;
mod resolve;
pub mod section;
pub mod types;
mod util;

use util::find_config_file;

// Re-export from section/
pub use section::{
    FooterConfig, LocaleEntry, LocaleRegistry, MAX_SIDEBAR_DEPTH, NavItem, ROOT_KEY, SearchConfig,
    SearchProvider, SidebarGroup, SidebarNode, SiteSectionConfig, ThemeConfig, ThemeDefaults,
};

// Re-export from types/
pub use types::{
    ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath, ResolveError, Violation, cfg,
    init_config,
};

pub use resolve::EffectiveConfig;

use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "doclocale.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing doclocale.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site metadata (title, description, base path)
    pub site: SiteSectionConfig,

    /// Site-wide theme defaults shared across locales
    pub theme: ThemeDefaults,

    /// Locale registry; the reserved `root` key is mandatory
    pub locales: LocaleRegistry,
}

impl SiteConfig {
    /// Load configuration from an explicit path, or search upward from the
    /// current directory for `doclocale.toml`.
    ///
    /// Parses, reports unknown fields, and validates; a config that does
    /// not validate completely is rejected as a whole.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config_path = match path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path.to_path_buf()));
                }
                path.to_path_buf()
            }
            None => find_config_file(Path::new(CONFIG_FILENAME))
                .ok_or_else(|| ConfigError::NotFound(PathBuf::from(CONFIG_FILENAME)))?,
        };

        let config = Self::from_path(&config_path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        crate::log!("warning"; "unknown fields in {}:", display_path);
        for field in fields {
            eprintln!("- {field}");
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the configuration.
    ///
    /// Collects every violation and returns them at once: root-locale
    /// presence, locale-code uniqueness, required fields, nav/sidebar
    /// well-formedness, the locale-prefix invariant for every link
    /// (recursively through nested sidebar groups), and search-provider
    /// validity. A config either validates completely or is rejected.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();

        self.locales.validate(&mut diag);
        self.site.validate(&mut diag);
        self.theme.validate(&mut diag);

        diag.into_result().map_err(ConfigError::Diagnostics)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::test_parse_config`)
// ============================================================================

/// Parse config with the minimal required `[site]` and `[locales.root]`
/// fields. Panics if there are unknown fields (to catch config typos in
/// tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!(
        "[site]\ntitle = \"Test\"\ndescription = \"Test\"\n\n[locales.root]\nlabel = \"English\"\nlang = \"en\"\n{extra}"
    );
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    /// The original two-locale site, GitHub links included.
    const TWO_LOCALE_SITE: &str = r#"
[site]
title = "Go Mod Parser"
description = "A comprehensive Go module parser library"
base_path = "/go-mod-parser/"

[theme.search]
provider = "local"

[locales.root]
label = "English"
lang = "en"

[[locales.root.theme.nav]]
text = "Home"
link = "/"

[[locales.root.theme.nav]]
text = "API Reference"
link = "/api/"

[[locales.root.theme.nav]]
text = "GitHub"
link = "https://github.com/scagogogo/go-mod-parser"

[[locales.root.theme.sidebar]]
text = "Getting Started"
items = [
    { text = "Introduction", link = "/" },
    { text = "Installation", link = "/installation" },
    { text = "Quick Start", link = "/quick-start" },
]

[locales.root.theme.footer]
message = "Released under the MIT License."
copyright = "Copyright © 2023 Software Composition Analysis"

[locales.zh]
label = "简体中文"
lang = "zh-CN"
description = "全面的 Go 模块解析库"

[[locales.zh.theme.nav]]
text = "首页"
link = "/zh/"

[[locales.zh.theme.sidebar]]
text = "开始使用"
items = [
    { text = "介绍", link = "/zh/" },
    { text = "安装", link = "/zh/installation" },
]
"#;

    fn expect_diagnostics(config: &SiteConfig) -> ConfigDiagnostics {
        match config.validate() {
            Err(ConfigError::Diagnostics(diag)) => diag,
            other => panic!("expected diagnostics, got {other:?}"),
        }
    }

    #[test]
    fn test_two_locale_site_validates_and_resolves() {
        let config = SiteConfig::from_str(TWO_LOCALE_SITE).unwrap();
        config.validate().unwrap();

        let zh = config.resolve("zh").unwrap();
        assert_eq!(zh.nav[0].link, "/zh/");
        assert_eq!(zh.title, "Go Mod Parser");
        assert_eq!(zh.base_path, "/go-mod-parser/");
    }

    #[test]
    fn test_missing_locale_prefix_rejected() {
        // Same site, but the zh nav link forgets its prefix
        let content = TWO_LOCALE_SITE.replace("link = \"/zh/\"", "link = \"/\"");
        let config = SiteConfig::from_str(&content).unwrap();

        let diag = expect_diagnostics(&config);
        assert!(diag.has(Violation::LocalePrefixMismatch));

        let err = diag
            .errors()
            .iter()
            .find(|e| e.rule == Violation::LocalePrefixMismatch)
            .unwrap();
        assert!(err.field.as_str().starts_with("locales.zh."));
        assert!(err.message.contains("\"/\""));
    }

    #[test]
    fn test_duplicate_locale_code_rejected() {
        let config = SiteConfig {
            site: SiteSectionConfig {
                title: "Test".to_string(),
                ..SiteSectionConfig::default()
            },
            theme: ThemeDefaults::default(),
            locales: LocaleRegistry::from_entries(vec![
                LocaleEntry::new("", "English", "en"),
                LocaleEntry::new("zh", "简体中文", "zh-CN"),
                LocaleEntry::new("zh", "简体中文", "zh-CN"),
            ]),
        };

        let diag = expect_diagnostics(&config);
        assert!(diag.has(Violation::DuplicateLocaleCode));
    }

    #[test]
    fn test_resolve_unknown_locale() {
        let config = SiteConfig::from_str(TWO_LOCALE_SITE).unwrap();
        assert_eq!(
            config.resolve("fr"),
            Err(ResolveError::LocaleNotFound { code: "fr".into() })
        );
    }

    #[test]
    fn test_empty_config_is_rejected() {
        let config = SiteConfig::default();
        let diag = expect_diagnostics(&config);
        assert!(diag.has(Violation::MissingRootLocale));
        assert!(diag.has(Violation::MissingRequiredField)); // site.title
    }

    #[test]
    fn test_from_str_invalid_toml() {
        // Invalid TOML syntax - unclosed bracket
        let result = SiteConfig::from_str("[site\ntitle = \"Docs\"");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\ntitle = \"Test\"\n[locales.root]\nlabel = \"English\"\nlang = \"en\"\nfavicon = \"icon.png\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.site.title, "Test");
        assert!(ignored.iter().any(|f| f.contains("favicon")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let (_, ignored) = SiteConfig::parse_with_ignored(TWO_LOCALE_SITE).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_load_from_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TWO_LOCALE_SITE.as_bytes()).unwrap();

        let config = SiteConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.locales.len(), 2);
    }

    #[test]
    fn test_load_missing_path() {
        let result = SiteConfig::load(Some(Path::new("/nonexistent/doclocale.toml")));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_rejects_invalid_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let content = TWO_LOCALE_SITE.replace("base_path = \"/go-mod-parser/\"", "base_path = \"go-mod-parser\"");
        file.write_all(content.as_bytes()).unwrap();

        let result = SiteConfig::load(Some(file.path()));
        assert!(matches!(result, Err(ConfigError::Diagnostics(_))));
    }
}
