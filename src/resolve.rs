//! Default-merge resolution of site-wide settings into per-locale views.
//!
//! Only `title`, `description` and `search` may fall back to site-wide
//! values; nav, sidebar and footer are locale-owned verbatim and are never
//! merged or defaulted.

use crate::section::{FooterConfig, LocaleEntry, NavItem, SearchConfig, SidebarGroup};
use crate::types::ResolveError;
use crate::SiteConfig;
use serde::Serialize;

/// Read-only view of one locale with site-wide defaults applied.
///
/// This is the shape handed to the build engine for the rest of the run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EffectiveConfig {
    /// Locale code; empty for the root locale.
    pub code: String,
    pub label: String,
    pub lang: String,
    pub title: String,
    pub description: String,
    /// Deployment base path, carried verbatim from `[site]`.
    pub base_path: String,
    pub nav: Vec<NavItem>,
    pub sidebar: Vec<SidebarGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<FooterConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<SearchConfig>,
}

impl SiteConfig {
    /// Resolve the effective configuration for `code`.
    ///
    /// A pure function of the config: repeated calls with the same code
    /// yield structurally equal results. Unknown codes are a call-site
    /// error; the root locale is never silently substituted.
    pub fn resolve(&self, code: &str) -> Result<EffectiveConfig, ResolveError> {
        let entry = self
            .locales
            .get(code)
            .ok_or_else(|| ResolveError::LocaleNotFound { code: code.into() })?;
        Ok(self.resolve_entry(entry))
    }

    /// Effective configuration for every locale, in declared order.
    pub fn resolve_all(&self) -> Vec<EffectiveConfig> {
        self.locales
            .iter()
            .map(|entry| self.resolve_entry(entry))
            .collect()
    }

    fn resolve_entry(&self, entry: &LocaleEntry) -> EffectiveConfig {
        EffectiveConfig {
            code: entry.code.clone(),
            label: entry.label.clone(),
            lang: entry.lang.clone(),
            title: entry
                .title
                .clone()
                .unwrap_or_else(|| self.site.title.clone()),
            description: entry
                .description
                .clone()
                .unwrap_or_else(|| self.site.description.clone()),
            base_path: self.site.base_path.clone(),
            nav: entry.theme.nav.clone(),
            sidebar: entry.theme.sidebar.clone(),
            footer: entry.theme.footer.clone(),
            search: entry.theme.search.clone().or_else(|| self.theme.search.clone()),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_parse_config;

    fn two_locale_config() -> SiteConfig {
        test_parse_config(
            r#"
[theme.search]
provider = "local"

[[locales.root.theme.nav]]
text = "Home"
link = "/"

[locales.zh]
label = "简体中文"
lang = "zh-CN"
description = "全面的 Go 模块解析库"

[[locales.zh.theme.nav]]
text = "首页"
link = "/zh/"

[locales.zh.theme.search]
provider = "algolia"
options = { index_name = "acme-zh", api_key = "k3y" }
"#,
        )
    }

    #[test]
    fn test_resolve_known_codes() {
        let config = two_locale_config();
        config.validate().unwrap();

        let root = config.resolve("").unwrap();
        assert_eq!(root.nav[0].link, "/");

        let zh = config.resolve("zh").unwrap();
        assert_eq!(zh.nav[0].link, "/zh/");
        assert_eq!(zh.lang, "zh-CN");
    }

    #[test]
    fn test_resolve_unknown_code() {
        let config = two_locale_config();
        assert_eq!(
            config.resolve("fr"),
            Err(ResolveError::LocaleNotFound { code: "fr".into() })
        );
    }

    #[test]
    fn test_title_and_description_fall_back_to_site() {
        let config = two_locale_config();

        // root declares neither; both come from [site]
        let root = config.resolve("").unwrap();
        assert_eq!(root.title, config.site.title);
        assert_eq!(root.description, config.site.description);

        // zh declares its own description, which wins
        let zh = config.resolve("zh").unwrap();
        assert_eq!(zh.title, config.site.title);
        assert_eq!(zh.description, "全面的 Go 模块解析库");
    }

    #[test]
    fn test_search_fallback_and_override() {
        let config = two_locale_config();

        // root inherits the site-wide search unchanged
        let root = config.resolve("").unwrap();
        assert_eq!(root.search, config.theme.search);

        // zh supplies its own and is never overridden
        let zh = config.resolve("zh").unwrap();
        assert_eq!(zh.search.as_ref().unwrap().provider, "algolia");
    }

    #[test]
    fn test_base_path_carried_verbatim() {
        let config = two_locale_config();
        let zh = config.resolve("zh").unwrap();
        assert_eq!(zh.base_path, config.site.base_path);
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let config = two_locale_config();
        assert_eq!(config.resolve("zh").unwrap(), config.resolve("zh").unwrap());
        assert_eq!(config.resolve("").unwrap(), config.resolve("").unwrap());
    }

    #[test]
    fn test_resolve_all_in_declared_order() {
        let config = two_locale_config();
        let all = config.resolve_all();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].code, "");
        assert_eq!(all[1].code, "zh");
        assert_eq!(all[1], config.resolve("zh").unwrap());
    }
}
