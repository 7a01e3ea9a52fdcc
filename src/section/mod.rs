//! Configuration section definitions.
//!
//! Each module corresponds to a part of `doclocale.toml`:
//!
//! | Module   | TOML Section      | Purpose                              |
//! |----------|-------------------|--------------------------------------|
//! | `site`   | `[site]`          | Title, description, base path        |
//! | `theme`  | `[theme]`         | Site-wide theme defaults (search)    |
//! | `locale` | `[locales.*]`     | Locale registry and entries          |
//! | `nav`    | nav/sidebar items | Navigation bar and sidebar tree      |
//! | `search` | search tables     | Search provider declaration          |

mod locale;
pub mod nav;
mod search;
mod site;
mod theme;

// Re-export section configs
pub use locale::{LocaleEntry, LocaleRegistry, ROOT_KEY};
pub use nav::{MAX_SIDEBAR_DEPTH, NavItem, SidebarGroup, SidebarNode};
pub use search::{SearchConfig, SearchProvider};
pub use site::SiteSectionConfig;
pub use theme::{FooterConfig, ThemeConfig, ThemeDefaults};
