//! Settings type definitions.
//!
//! All types use `#[serde(rename_all = "camelCase", default)]` so a user
//! file may contain any subset of fields; missing fields keep their compiled
//! default.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SettingsError};

/// Default listing endpoint.
pub const DEFAULT_ENDPOINT: &str =
    "https://68b826bcb715405043274639.mockapi.io/api/properties/PropertyListing";

/// Accepted `api.requestTimeoutMs` bounds, in milliseconds.
pub const REQUEST_TIMEOUT_MIN_MS: u64 = 100;
/// Upper bound for `api.requestTimeoutMs`.
pub const REQUEST_TIMEOUT_MAX_MS: u64 = 600_000;

/// Resolve `~/.dreamprops`.
pub fn default_data_dir() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
    PathBuf::from(home).join(".dreamprops")
}

/// Root settings type.
///
/// ```json
/// {
///   "api": { "endpoint": "https://example.test/properties" },
///   "listing": { "pageSize": 24 }
/// }
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DreamPropsSettings {
    /// Settings schema version.
    pub version: String,
    /// Application name.
    pub name: String,
    /// Listing endpoint settings.
    pub api: ApiSettings,
    /// Listing view sizes.
    pub listing: ListingSettings,
    /// Mock authentication settings.
    pub auth: AuthSettings,
    /// Router settings.
    pub routing: RoutingSettings,
    /// Local storage location.
    pub storage: StorageSettings,
    /// Logging configuration.
    pub logging: LoggingSettings,
}

impl Default for DreamPropsSettings {
    fn default() -> Self {
        Self {
            version: "0.1.0".to_string(),
            name: "dreamprops".to_string(),
            api: ApiSettings::default(),
            listing: ListingSettings::default(),
            auth: AuthSettings::default(),
            routing: RoutingSettings::default(),
            storage: StorageSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl DreamPropsSettings {
    /// Reject values the rest of the system cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.api.endpoint.trim().is_empty() {
            return Err(SettingsError::InvalidValue(
                "api.endpoint must not be empty".to_string(),
            ));
        }
        if let Some(ms) = self.api.request_timeout_ms {
            if !(REQUEST_TIMEOUT_MIN_MS..=REQUEST_TIMEOUT_MAX_MS).contains(&ms) {
                return Err(SettingsError::InvalidValue(format!(
                    "api.requestTimeoutMs must be between {REQUEST_TIMEOUT_MIN_MS} and {REQUEST_TIMEOUT_MAX_MS}, got {ms}"
                )));
            }
        }
        if self.listing.page_size == 0 {
            return Err(SettingsError::InvalidValue(
                "listing.pageSize must be at least 1".to_string(),
            ));
        }
        if self.auth.storage_key.is_empty() {
            return Err(SettingsError::InvalidValue(
                "auth.storageKey must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Listing endpoint settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiSettings {
    /// Absolute URL returning the JSON array of property records.
    pub endpoint: String,
    /// Request timeout. `None` waits indefinitely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout_ms: Option<u64>,
    /// `User-Agent` header sent with the fetch.
    pub user_agent: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout_ms: None,
            user_agent: "dreamprops/0.1".to_string(),
        }
    }
}

/// Listing view sizes.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListingSettings {
    /// Records per page on the full listing.
    pub page_size: usize,
    /// Records in the featured strip.
    pub featured_count: usize,
    /// Records per sale/rent tab.
    pub by_type_count: usize,
}

impl Default for ListingSettings {
    fn default() -> Self {
        Self {
            page_size: 12,
            featured_count: 6,
            by_type_count: 8,
        }
    }
}

/// Mock authentication settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthSettings {
    /// Local storage key holding the serialized session.
    pub storage_key: String,
    /// Artificial latency applied to sign-in, sign-up and newsletter calls.
    pub simulated_delay_ms: u64,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            storage_key: "dreamproperties_user".to_string(),
            simulated_delay_ms: 0,
        }
    }
}

/// Router settings.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoutingSettings {
    /// Page identifiers declared in addition to the built-in pages.
    pub extra_pages: Vec<String>,
}

/// Local storage location.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StorageSettings {
    /// Directory holding `storage.json`.
    pub data_dir: PathBuf,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Logging configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoggingSettings {
    /// Minimum level (`trace`..`error`).
    pub level: String,
    /// Emit JSON lines instead of compact text.
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json: false,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
