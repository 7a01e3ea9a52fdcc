//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::fmt;

/// A dotted path into the configuration, e.g. `locales.zh.theme.nav[0].link`.
///
/// Paths are built at runtime because most of them pass through a locale
/// key that is only known once the registry is loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(String);

impl FieldPath {
    #[inline]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Append a dotted segment: `locales.zh` + `theme` -> `locales.zh.theme`.
    pub fn join(&self, segment: &str) -> Self {
        Self(format!("{}.{segment}", self.0))
    }

    /// Append an index to the last segment: `nav` + `0` -> `nav[0]`.
    pub fn index(&self, index: usize) -> Self {
        Self(format!("{}[{index}]", self.0))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_and_index() {
        let path = FieldPath::new("locales").join("zh").join("theme");
        assert_eq!(path.as_str(), "locales.zh.theme");

        let link = path.join("nav").index(2).join("link");
        assert_eq!(link.as_str(), "locales.zh.theme.nav[2].link");
    }
}
