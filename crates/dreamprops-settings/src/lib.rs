//! # dreamprops-settings
//!
//! Configuration management with layered sources for DreamProps.
//!
//! Settings are loaded from three layers (in priority order):
//! 1. **Compiled defaults**: [`DreamPropsSettings::default()`]
//! 2. **User file**: `~/.dreamprops/settings.json` (deep-merged over defaults)
//! 3. **Environment variables**: `DREAMPROPS_*` overrides (highest priority)
//!
//! Unlike a process-wide singleton, the loaded value is handed to the
//! application state object, which owns it for its lifetime.
//!
//! # Usage
//!
//! ```no_run
//! use dreamprops_settings::load_settings;
//!
//! let settings = load_settings().unwrap_or_default();
//! println!("endpoint: {}", settings.api.endpoint);
//! ```

#![deny(unsafe_code)]

pub mod errors;
pub mod loader;
pub mod types;

pub use errors::{Result, SettingsError};
pub use loader::{deep_merge, load_settings, load_settings_from_path, settings_path};
pub use types::*;

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn re_exports_work() {
        let _settings = DreamPropsSettings::default();
        let _path = settings_path();
    }

    #[test]
    fn default_settings_are_valid() {
        let settings = DreamPropsSettings::default();
        assert_eq!(settings.name, "dreamprops");
        assert_eq!(settings.listing.page_size, 12);
        assert_eq!(settings.listing.featured_count, 6);
        assert_eq!(settings.listing.by_type_count, 8);
        assert_eq!(settings.auth.storage_key, "dreamproperties_user");
        assert_eq!(settings.auth.simulated_delay_ms, 0);
        assert!(settings.api.request_timeout_ms.is_none());
        assert!(settings.validate().is_ok());
    }
}
