//! Browser (`wasm32`) implementation of the [`catalog_host`] service contract.
//!
//! The `bridge` module owns the `window.fetch` interop and a non-wasm fallback; `adapters` picks
//! the concrete service for the active build.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and the concrete catalog adapter.
pub mod adapters;
mod bridge;
pub mod catalog;

pub use adapters::{
    catalog_service, host_strategy_name, selected_host_strategy, CatalogServiceAdapter,
    HostStrategy, STUB_CATALOG_SIZE,
};
pub use catalog::WebCatalogService;
