//! Theme configuration: per-locale nav/sidebar/footer/search, plus the
//! `[theme]` section holding site-wide defaults.
//!
//! # Example
//!
//! ```toml
//! [theme]
//! search = { provider = "local" }
//!
//! [locales.root.theme.footer]
//! message = "Released under the MIT License."
//! copyright = "Copyright © 2023 Software Composition Analysis"
//! ```

use crate::section::nav::LinkScope;
use crate::section::{NavItem, SearchConfig, SidebarGroup};
use crate::types::{ConfigDiagnostics, FieldPath, Violation};
use serde::{Deserialize, Serialize};

// ============================================================================
// ThemeDefaults ([theme])
// ============================================================================

/// Site-wide theme defaults shared across locales.
///
/// Only settings that make sense for every locale live here; nav, sidebar
/// and footer are always locale-owned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeDefaults {
    /// Search settings inherited by locales without their own.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<SearchConfig>,
}

impl ThemeDefaults {
    pub(crate) fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(search) = &self.search {
            search.validate(&FieldPath::new("theme.search"), diag);
        }
    }
}

// ============================================================================
// ThemeConfig (per locale)
// ============================================================================

/// One locale's theme: nav bar, sidebar tree, footer, search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Top-level navigation bar, in rendering order.
    pub nav: Vec<NavItem>,

    /// Sidebar groups, in rendering order.
    pub sidebar: Vec<SidebarGroup>,

    /// Footer text block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<FooterConfig>,

    /// Locale-specific search override. Absent means the site-wide
    /// `[theme].search` applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<SearchConfig>,
}

impl ThemeConfig {
    pub(crate) fn validate(
        &self,
        scope: &LinkScope<'_>,
        path: &FieldPath,
        diag: &mut ConfigDiagnostics,
    ) {
        for (i, item) in self.nav.iter().enumerate() {
            item.validate(scope, &path.join("nav").index(i), diag);
        }
        for (i, group) in self.sidebar.iter().enumerate() {
            group.validate(scope, 1, &path.join("sidebar").index(i), diag);
        }
        if let Some(footer) = &self.footer {
            footer.validate(&path.join("footer"), diag);
        }
        if let Some(search) = &self.search {
            search.validate(&path.join("search"), diag);
        }
    }
}

// ============================================================================
// FooterConfig
// ============================================================================

/// Footer text block. Both fields are optional, but an empty string is
/// treated as a mistake rather than a way to blank the footer out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}

impl FooterConfig {
    pub(crate) fn validate(&self, path: &FieldPath, diag: &mut ConfigDiagnostics) {
        for (field, value) in [("message", &self.message), ("copyright", &self.copyright)] {
            if let Some(value) = value
                && value.is_empty()
            {
                diag.error(
                    Violation::MissingRequiredField,
                    path.join(field),
                    format!("footer {field} is declared but empty; omit it instead"),
                );
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
