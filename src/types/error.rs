//! Configuration error types.

use super::FieldPath;
use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file `{}` not found", .0.display())]
    NotFound(PathBuf),

    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    // NOTE: No #[from] here - we don't want source() which causes duplicate output
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

// ============================================================================
// ResolveError
// ============================================================================

/// Errors from the default-merge resolver.
///
/// `LocaleNotFound` is a call-site usage error: the build engine must only
/// request codes present in the registry, and the root locale is never
/// silently substituted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("locale `{code}` is not present in the registry")]
    LocaleNotFound { code: String },
}

// ============================================================================
// Violation
// ============================================================================

/// The rule a configuration diagnostic violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// No entry under the reserved `root` key.
    MissingRootLocale,
    /// Two registry entries share a code (including the reserved root key).
    DuplicateLocaleCode,
    /// A required string field is empty or absent.
    MissingRequiredField,
    /// A locale's language tag is not a BCP-47-like token.
    MalformedLanguageTag,
    /// `site.base_path` does not start and end with `/`.
    MalformedBasePath,
    /// A nav/sidebar link is empty or does not start with `/`.
    MalformedLink,
    /// A link's prefix does not match its owning locale.
    LocalePrefixMismatch,
    /// Sidebar groups nested beyond the supported depth.
    SidebarDepthExceeded,
    /// `search.provider` is not in the recognized set.
    UnknownSearchProvider,
}

impl Violation {
    /// Get rule label for display.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::MissingRootLocale => "missing root locale",
            Self::DuplicateLocaleCode => "duplicate locale code",
            Self::MissingRequiredField => "missing required field",
            Self::MalformedLanguageTag => "malformed language tag",
            Self::MalformedBasePath => "malformed base path",
            Self::MalformedLink => "malformed link",
            Self::LocalePrefixMismatch => "locale prefix mismatch",
            Self::SidebarDepthExceeded => "sidebar depth exceeded",
            Self::UnknownSearchProvider => "unknown search provider",
        }
    }
}

// ============================================================================
// ConfigDiagnostic
// ============================================================================

/// A single configuration diagnostic
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    /// Violated rule
    pub rule: Violation,
    /// Config field path (e.g., "locales.zh.theme.nav[0].link")
    pub field: FieldPath,
    /// Error description
    pub message: String,
    /// Fix hint (optional)
    pub hint: Option<String>,
}

impl ConfigDiagnostic {
    pub fn new(rule: Violation, field: FieldPath, message: impl Into<String>) -> Self {
        Self {
            rule,
            field,
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Field path in cyan brackets, rule label dimmed
        writeln!(
            f,
            "{}{}{} {}",
            "[".dimmed(),
            self.field.as_str().cyan(),
            "]".dimmed(),
            self.rule.label().dimmed()
        )?;
        // Error message with red bullet
        write!(f, "{} {}", "→".red(), self.message)?;
        // Hint in yellow
        if let Some(hint) = &self.hint {
            write!(f, "\n  {} {}", "hint:".yellow(), hint)?;
        }
        Ok(())
    }
}

// ============================================================================
// ConfigDiagnostics
// ============================================================================

/// Accumulated validation diagnostics.
///
/// Validation never stops at the first violation; every check records its
/// findings here and the config is rejected as a whole if anything was
/// collected.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, rule: Violation, field: FieldPath, message: impl Into<String>) {
        self.errors.push(ConfigDiagnostic::new(rule, field, message));
    }

    /// Add an error with a hint.
    pub fn error_with_hint(
        &mut self,
        rule: Violation,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.errors
            .push(ConfigDiagnostic::new(rule, field, message).with_hint(hint));
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check whether any collected diagnostic violated `rule`.
    pub fn has(&self, rule: Violation) -> bool {
        self.errors.iter().any(|e| e.rule == rule)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    /// Convert to Result (returns Err if there are errors).
    pub fn into_result(self) -> Result<(), Self> {
        if self.errors.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}\n", "config validation failed:".red().bold())?;
        for (i, err) in self.errors.iter().enumerate() {
            write!(f, "{err}")?;
            if i + 1 < self.errors.len() {
                writeln!(f, "\n")?;
            }
        }
        if self.errors.len() > 1 {
            write!(
                f,
                "\n\n{} {} {}",
                "found".dimmed(),
                self.errors.len().to_string().red().bold(),
                "errors".dimmed()
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("doclocale.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("doclocale.toml"));

        let not_found = ConfigError::NotFound(PathBuf::from("missing.toml"));
        assert!(format!("{not_found}").contains("missing.toml"));
    }

    #[test]
    fn test_resolve_error_display() {
        let err = ResolveError::LocaleNotFound { code: "fr".into() };
        assert!(format!("{err}").contains("`fr`"));
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = ConfigDiagnostic::new(
            Violation::LocalePrefixMismatch,
            FieldPath::new("locales.zh.theme.nav[0].link"),
            "link \"/\" must start with `/zh/`",
        )
        .with_hint("prefix the link or move it to the root locale");

        let display = format!("{diag}");
        assert!(display.contains("locales.zh.theme.nav[0].link"));
        assert!(display.contains("locale prefix mismatch"));
        assert!(display.contains("hint:"));
    }

    #[test]
    fn test_diagnostics_accumulate() {
        let mut diag = ConfigDiagnostics::new();
        assert!(diag.is_empty());

        diag.error(
            Violation::MissingRootLocale,
            FieldPath::new("locales"),
            "no root entry",
        );
        diag.error(
            Violation::MalformedLink,
            FieldPath::new("locales.zh.theme.nav[1].link"),
            "empty link",
        );

        assert_eq!(diag.len(), 2);
        assert!(diag.has(Violation::MissingRootLocale));
        assert!(!diag.has(Violation::DuplicateLocaleCode));
        assert!(diag.into_result().is_err());
    }
}
