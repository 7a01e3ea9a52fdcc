//! `[locales.*]` configuration: the locale registry.
//!
//! # Example
//!
//! ```toml
//! [locales.root]
//! label = "English"
//! lang = "en"
//! title = "Go Mod Parser"
//!
//! [locales.zh]
//! label = "简体中文"
//! lang = "zh-CN"
//! ```
//!
//! The reserved `root` key declares the default, unprefixed locale; its
//! `code` is the empty string everywhere else in the crate. Declared order
//! is preserved.

use crate::section::ThemeConfig;
use crate::section::nav::LinkScope;
use crate::types::{ConfigDiagnostics, FieldPath, Violation};
use regex::Regex;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;

/// Registry key reserved for the root locale.
pub const ROOT_KEY: &str = "root";

/// BCP-47-like token: a primary language subtag plus optional subtags,
/// e.g. `en`, `zh-CN`, `sr-Latn-RS`.
static LANG_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{2,8}(-[A-Za-z0-9]{1,8})*$").expect("valid pattern"));

// ============================================================================
// LocaleEntry
// ============================================================================

/// Settings for one language variant of the site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleEntry {
    /// Locale code; empty for the root locale. Set from the registry key
    /// (or by `LocaleEntry::new`), never from the entry body.
    #[serde(skip)]
    pub code: String,

    /// Display label for the language switcher.
    pub label: String,

    /// Language tag (e.g. `en`, `zh-CN`).
    pub lang: String,

    /// Locale title; falls back to `site.title` when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Locale description; falls back to `site.description` when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The locale's own nav/sidebar/footer/search.
    pub theme: ThemeConfig,
}

impl LocaleEntry {
    pub fn new(code: impl Into<String>, label: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
            lang: lang.into(),
            ..Self::default()
        }
    }

    /// Registry key: `root` for the root locale, the code otherwise.
    pub fn key(&self) -> &str {
        if self.code.is_empty() { ROOT_KEY } else { &self.code }
    }

    pub fn is_root(&self) -> bool {
        self.code.is_empty()
    }

    fn validate(&self, foreign_codes: &[&str], diag: &mut ConfigDiagnostics) {
        let path = FieldPath::new("locales").join(self.key());

        if self.label.is_empty() {
            diag.error(
                Violation::MissingRequiredField,
                path.join("label"),
                "locale label must not be empty",
            );
        }

        if self.lang.is_empty() {
            diag.error(
                Violation::MissingRequiredField,
                path.join("lang"),
                "locale language tag must not be empty",
            );
        } else if !LANG_TAG.is_match(&self.lang) {
            diag.error_with_hint(
                Violation::MalformedLanguageTag,
                path.join("lang"),
                format!("{:?} is not a BCP-47-like language tag", self.lang),
                "use a tag such as \"en\" or \"zh-CN\"",
            );
        }

        if let Some(title) = &self.title
            && title.is_empty()
        {
            diag.error_with_hint(
                Violation::MissingRequiredField,
                path.join("title"),
                "locale title is declared but empty",
                "omit it to fall back to site.title",
            );
        }

        let scope = LinkScope {
            code: &self.code,
            foreign_codes,
        };
        self.theme.validate(&scope, &path.join("theme"), diag);
    }
}

// ============================================================================
// LocaleRegistry
// ============================================================================

/// Ordered mapping from locale code to [`LocaleEntry`].
///
/// Construction performs no validation; `validate` enforces root presence
/// and code uniqueness along with the per-entry rules.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocaleRegistry {
    entries: Vec<LocaleEntry>,
}

impl LocaleRegistry {
    /// Assemble a registry from entries, preserving their order.
    pub fn from_entries(entries: Vec<LocaleEntry>) -> Self {
        Self { entries }
    }

    /// Look up an entry by code (empty string for the root locale).
    pub fn get(&self, code: &str) -> Option<&LocaleEntry> {
        self.entries.iter().find(|entry| entry.code == code)
    }

    /// The root locale entry, if declared.
    pub fn root(&self) -> Option<&LocaleEntry> {
        self.get("")
    }

    /// Locale codes in declared order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.code.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LocaleEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn validate(&self, diag: &mut ConfigDiagnostics) {
        // Root locale presence
        if self.root().is_none() {
            diag.error_with_hint(
                Violation::MissingRootLocale,
                FieldPath::new("locales"),
                format!("no entry under the reserved `{ROOT_KEY}` key"),
                format!("declare a [locales.{ROOT_KEY}] entry"),
            );
        }

        // Code uniqueness, including accidental reuse of the root key
        for (i, entry) in self.entries.iter().enumerate() {
            if self.entries[..i].iter().any(|prior| prior.code == entry.code) {
                let what = if entry.is_root() {
                    format!("the reserved `{ROOT_KEY}` entry")
                } else {
                    format!("locale code {:?}", entry.code)
                };
                diag.error(
                    Violation::DuplicateLocaleCode,
                    FieldPath::new("locales").join(entry.key()),
                    format!("{what} is declared more than once"),
                );
            }
        }

        // Per-entry rules, with the non-root codes for the root locale's
        // foreign-prefix check
        let foreign_codes: Vec<&str> = self
            .entries
            .iter()
            .filter(|entry| !entry.is_root())
            .map(|entry| entry.code.as_str())
            .collect();
        for entry in &self.entries {
            entry.validate(&foreign_codes, diag);
        }
    }
}

impl<'a> IntoIterator for &'a LocaleRegistry {
    type Item = &'a LocaleEntry;
    type IntoIter = std::slice::Iter<'a, LocaleEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// Serde goes through the registry key so that `root` maps to the empty
// code and declared order survives the round trip.

impl<'de> Deserialize<'de> for LocaleRegistry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RegistryVisitor;

        impl<'de> Visitor<'de> for RegistryVisitor {
            type Value = LocaleRegistry;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of locale code to locale entry")
            }

            fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(key) = map.next_key::<String>()? {
                    let mut entry: LocaleEntry = map.next_value()?;
                    entry.code = if key == ROOT_KEY { String::new() } else { key };
                    entries.push(entry);
                }
                Ok(LocaleRegistry { entries })
            }
        }

        deserializer.deserialize_map(RegistryVisitor)
    }
}

impl Serialize for LocaleRegistry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(entry.key(), entry)?;
        }
        map.end()
    }
}

// ============================================================================
// Tests
// ============================================================================
