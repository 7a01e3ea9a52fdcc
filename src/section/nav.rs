//! Navigation bar entries and the sidebar tree.
//!
//! # Example
//!
//! ```toml
//! [[locales.root.theme.nav]]
//! text = "Home"
//! link = "/"
//!
//! [[locales.root.theme.sidebar]]
//! text = "Getting Started"
//! items = [
//!     { text = "Introduction", link = "/" },
//!     { text = "Installation", link = "/installation" },
//! ]
//! ```
//!
//! Sidebar groups may nest further groups; declared order is rendering
//! order and is preserved throughout.

use crate::types::{ConfigDiagnostics, FieldPath, Violation};
use crate::util::is_external_link;
use serde::{Deserialize, Serialize};

/// Maximum sidebar nesting depth accepted by validation.
pub const MAX_SIDEBAR_DEPTH: usize = 8;

// ============================================================================
// NavItem
// ============================================================================

/// A single navigation link: display text plus target path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    pub text: String,
    pub link: String,
}

impl NavItem {
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }

    pub(crate) fn validate(
        &self,
        scope: &LinkScope<'_>,
        path: &FieldPath,
        diag: &mut ConfigDiagnostics,
    ) {
        if self.text.is_empty() {
            diag.error(
                Violation::MissingRequiredField,
                path.join("text"),
                "display text must not be empty",
            );
        }
        scope.check_link(&self.link, &path.join("link"), diag);
    }
}

// ============================================================================
// Sidebar tree
// ============================================================================

/// A titled, ordered collection of sidebar entries, possibly nested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SidebarGroup {
    pub text: String,
    #[serde(default)]
    pub items: Vec<SidebarNode>,
}

impl SidebarGroup {
    pub fn new(text: impl Into<String>, items: Vec<SidebarNode>) -> Self {
        Self {
            text: text.into(),
            items,
        }
    }

    /// Walk the group recursively. `depth` is the group's own nesting level,
    /// starting at 1 for top-level sidebar groups.
    pub(crate) fn validate(
        &self,
        scope: &LinkScope<'_>,
        depth: usize,
        path: &FieldPath,
        diag: &mut ConfigDiagnostics,
    ) {
        if self.text.is_empty() {
            diag.error(
                Violation::MissingRequiredField,
                path.join("text"),
                "group title must not be empty",
            );
        }

        if depth > MAX_SIDEBAR_DEPTH {
            diag.error_with_hint(
                Violation::SidebarDepthExceeded,
                path.clone(),
                format!("sidebar groups nest deeper than {MAX_SIDEBAR_DEPTH} levels"),
                "flatten the group structure",
            );
            // Contents of an over-deep group are not worth reporting on
            return;
        }

        for (i, node) in self.items.iter().enumerate() {
            let node_path = path.join("items").index(i);
            match node {
                SidebarNode::Item(item) => item.validate(scope, &node_path, diag),
                SidebarNode::Group(group) => group.validate(scope, depth + 1, &node_path, diag),
            }
        }
    }
}

/// One sidebar entry: a leaf link or a nested group.
///
/// Untagged: an entry carrying `link` is an item, one carrying `items` is a
/// nested group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SidebarNode {
    Item(NavItem),
    Group(SidebarGroup),
}

// ============================================================================
// LinkScope
// ============================================================================

/// Link-prefix rules for one locale's theme.
///
/// Non-root locales own the `/{code}/` namespace; the root locale owns
/// everything else and must not reach into a non-root prefix.
pub(crate) struct LinkScope<'a> {
    /// Owning locale code; empty for the root locale.
    pub code: &'a str,
    /// All non-root codes, used for the root locale's foreign-prefix rule.
    pub foreign_codes: &'a [&'a str],
}

impl LinkScope<'_> {
    pub(crate) fn check_link(&self, link: &str, path: &FieldPath, diag: &mut ConfigDiagnostics) {
        // External URLs are resolved outside the site, no prefix rules apply
        if is_external_link(link) {
            return;
        }

        if link.is_empty() || !link.starts_with('/') {
            diag.error(
                Violation::MalformedLink,
                path.clone(),
                format!("link {link:?} must be a non-empty path starting with `/`"),
            );
            return;
        }

        if self.code.is_empty() {
            if let Some(code) = self
                .foreign_codes
                .iter()
                .find(|code| has_locale_prefix(link, code))
            {
                diag.error_with_hint(
                    Violation::LocalePrefixMismatch,
                    path.clone(),
                    format!("root locale link {link:?} must not use the `/{code}/` prefix"),
                    format!("move this entry to the `{code}` locale"),
                );
            }
        } else if !has_locale_prefix(link, self.code) {
            diag.error_with_hint(
                Violation::LocalePrefixMismatch,
                path.clone(),
                format!("link {link:?} must start with `/{}/`", self.code),
                format!("locale `{}` only serves pages under its prefix", self.code),
            );
        }
    }
}

/// `/{code}` exactly, or `/{code}/...`.
fn has_locale_prefix(link: &str, code: &str) -> bool {
    link.strip_prefix('/')
        .and_then(|rest| rest.strip_prefix(code))
        .is_some_and(|tail| tail.is_empty() || tail.starts_with('/'))
}

// ============================================================================
// Tests
// ============================================================================
