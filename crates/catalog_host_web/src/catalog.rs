//! `window.fetch`-backed catalog service.

use catalog_host::{
    decode_catalog_page, CatalogConfig, CatalogFuture, CatalogPage, CatalogService, FetchError,
    PageRequest, DEFAULT_API_BASE_URL,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Browser catalog service issuing `GET {base}/artworks?page=&limit=` through `window.fetch`.
pub struct WebCatalogService {
    base_url: String,
}

impl Default for WebCatalogService {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl WebCatalogService {
    /// Creates a service rooted at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Creates a service rooted at the configured API base URL.
    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }

    /// Returns the URL a request resolves to.
    pub fn request_url(&self, request: &PageRequest) -> String {
        request.url(&self.base_url)
    }
}

impl CatalogService for WebCatalogService {
    fn fetch_page<'a>(
        &'a self,
        request: &'a PageRequest,
    ) -> CatalogFuture<'a, Result<CatalogPage, FetchError>> {
        Box::pin(async move {
            let body = crate::bridge::http_get_text(&self.request_url(request)).await?;
            decode_catalog_page(&body)
        })
    }
}
