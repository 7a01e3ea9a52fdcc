//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Check whether a link is an absolute URL handled outside the site.
///
/// External links (e.g. `https://github.com/...`) appear in nav bars next
/// to locale-prefixed paths and are exempt from the locale-prefix rules.
/// Anything that does not parse as an absolute URL is an internal path.
///
/// # Examples
/// ```ignore
/// is_external_link("https://github.com/acme/repo") -> true
/// is_external_link("mailto:docs@acme.dev")         -> true
/// is_external_link("/zh/api/")                     -> false
/// is_external_link("installation")                 -> false
/// ```
pub fn is_external_link(link: &str) -> bool {
    url::Url::parse(link).is_ok()
}

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/site/docs/guide/     ← cwd
/// /home/user/site/doclocale.toml  ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;

    // First check if config_name is an absolute path or exists in cwd
    if config_name.is_absolute() && config_name.exists() {
        return Some(config_name.to_path_buf());
    }

    // Walk up from cwd looking for config file
    let mut current = cwd.as_path();
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        // Move to parent directory
        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_external_link() {
        // Absolute URLs are external
        assert!(is_external_link("https://github.com/acme/repo"));
        assert!(is_external_link("http://localhost:8080/docs"));
        assert!(is_external_link("mailto:docs@acme.dev"));

        // Site-internal paths are not
        assert!(!is_external_link("/"));
        assert!(!is_external_link("/zh/api/"));
        assert!(!is_external_link("/installation"));

        // Neither are malformed fragments
        assert!(!is_external_link(""));
        assert!(!is_external_link("installation"));
    }
}
