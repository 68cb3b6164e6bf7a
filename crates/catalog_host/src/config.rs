//! Runtime configuration for the catalog table.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::DEFAULT_PAGE_SIZE;

/// Public Art Institute of Chicago API root.
pub const DEFAULT_API_BASE_URL: &str = "https://api.artic.edu/api/v1";
/// Upstream ceiling on page size, which also caps bulk selection.
pub const DEFAULT_MAX_BULK_SELECTION: u32 = 100;
/// Quiet period before a bulk-selector keystroke fires.
pub const DEFAULT_BULK_DEBOUNCE_MS: u64 = 500;
/// Lifetime of a toast notification.
pub const DEFAULT_TOAST_LIFE_MS: u64 = 3_000;
/// Number of numbered page links shown by the paginator.
pub const DEFAULT_PAGE_LINK_WINDOW: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Tunables shared by the fetcher, reducer, and presentation layer.
pub struct CatalogConfig {
    /// Catalog API root; `/artworks` is appended per request.
    pub api_base_url: String,
    /// Page size used for table page loads.
    pub page_size: u32,
    /// Largest count the bulk selector will fetch.
    pub max_bulk_selection: u32,
    /// Bulk-selector debounce in milliseconds.
    pub bulk_debounce_ms: u64,
    /// Toast lifetime in milliseconds.
    pub toast_life_ms: u64,
    /// Numbered page links rendered around the current page.
    pub page_link_window: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            max_bulk_selection: DEFAULT_MAX_BULK_SELECTION,
            bulk_debounce_ms: DEFAULT_BULK_DEBOUNCE_MS,
            toast_life_ms: DEFAULT_TOAST_LIFE_MS,
            page_link_window: DEFAULT_PAGE_LINK_WINDOW,
        }
    }
}

impl CatalogConfig {
    /// Bulk-selector debounce as a [`Duration`].
    pub fn bulk_debounce(&self) -> Duration {
        Duration::from_millis(self.bulk_debounce_ms)
    }

    /// Toast lifetime as a [`Duration`].
    pub fn toast_life(&self) -> Duration {
        Duration::from_millis(self.toast_life_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_fills_remaining_fields_with_defaults() {
        let config: CatalogConfig =
            serde_json::from_str(r#"{"api_base_url":"http://localhost:8080/api/v1"}"#)
                .expect("config");
        assert_eq!(config.api_base_url, "http://localhost:8080/api/v1");
        assert_eq!(config.page_size, 12);
        assert_eq!(config.max_bulk_selection, 100);
        assert_eq!(config.bulk_debounce(), Duration::from_millis(500));
        assert_eq!(config.toast_life(), Duration::from_secs(3));
    }
}
