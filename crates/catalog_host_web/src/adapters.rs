use catalog_host::{
    CatalogConfig, CatalogFuture, CatalogPage, CatalogService, FetchError, MemoryCatalogService,
    PageRequest,
};

use crate::WebCatalogService;

/// Size of the synthetic dataset served by the stub strategy.
pub const STUB_CATALOG_SIZE: u64 = 240;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Compile-time selected host strategy for catalog requests.
pub enum HostStrategy {
    /// Live catalog API through `window.fetch`.
    Browser,
    /// Synthetic in-memory catalog for offline development.
    Stub,
}

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "catalog-host-stub")]
    {
        HostStrategy::Stub
    }

    #[cfg(not(feature = "catalog-host-stub"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    match selected_host_strategy() {
        HostStrategy::Browser => "browser",
        HostStrategy::Stub => "stub",
    }
}

/// Adapter enum that erases the concrete catalog backend behind [`CatalogService`].
#[derive(Debug, Clone)]
pub enum CatalogServiceAdapter {
    /// Live `window.fetch` transport.
    Browser(WebCatalogService),
    /// In-memory synthetic catalog.
    Stub(MemoryCatalogService),
}

impl CatalogService for CatalogServiceAdapter {
    fn fetch_page<'a>(
        &'a self,
        request: &'a PageRequest,
    ) -> CatalogFuture<'a, Result<CatalogPage, FetchError>> {
        match self {
            Self::Browser(service) => service.fetch_page(request),
            Self::Stub(service) => service.fetch_page(request),
        }
    }
}

/// Builds the catalog service for the selected host strategy.
pub fn catalog_service(config: &CatalogConfig) -> CatalogServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => {
            CatalogServiceAdapter::Browser(WebCatalogService::from_config(config))
        }
        HostStrategy::Stub => {
            CatalogServiceAdapter::Stub(MemoryCatalogService::sample(STUB_CATALOG_SIZE))
        }
    }
}
