//! Page-request resolution and endpoint URL construction.

use serde::{Deserialize, Serialize};

/// Page size used whenever a caller leaves the limit unset or passes zero.
pub const DEFAULT_PAGE_SIZE: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// One paginated query against the catalog endpoint.
pub struct PageRequest {
    /// One-based page number.
    pub page: u32,
    /// Requested page size; `None` and `Some(0)` resolve to [`DEFAULT_PAGE_SIZE`].
    pub limit: Option<u32>,
}

impl PageRequest {
    /// Creates a request for `page` with an optional page size.
    pub const fn new(page: u32, limit: Option<u32>) -> Self {
        Self { page, limit }
    }

    /// Returns the page size actually sent upstream.
    pub fn effective_limit(&self) -> u32 {
        match self.limit {
            Some(limit) if limit > 0 => limit,
            _ => DEFAULT_PAGE_SIZE,
        }
    }

    /// Builds the `GET /artworks` URL under `base_url`.
    pub fn url(&self, base_url: &str) -> String {
        format!(
            "{}/artworks?page={}&limit={}",
            base_url.trim_end_matches('/'),
            self.page,
            self.effective_limit()
        )
    }
}
