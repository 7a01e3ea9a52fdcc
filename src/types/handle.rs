//! Global config handle.
//!
//! Uses `arc-swap` for lock-free reads. The validated config is installed
//! once at startup and shared read-only across any number of reader
//! threads (e.g., parallel per-locale page renders) for the rest of the
//! process lifetime.

use crate::SiteConfig;
use arc_swap::ArcSwap;
use std::sync::{Arc, LazyLock};

/// Global config storage.
static CONFIG: LazyLock<ArcSwap<SiteConfig>> =
    LazyLock::new(|| ArcSwap::from_pointee(SiteConfig::default()));

/// Get the process-wide config. Returns the (invalid) default until
/// `init_config` has run.
#[inline]
pub fn cfg() -> Arc<SiteConfig> {
    CONFIG.load_full()
}

/// Install the validated config as the process-wide instance.
#[inline]
pub fn init_config(config: SiteConfig) -> Arc<SiteConfig> {
    let arc = Arc::new(config);
    CONFIG.store(Arc::clone(&arc));
    arc
}
