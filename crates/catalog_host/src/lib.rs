//! Typed catalog-host contracts and shared models used by the table runtime and browser adapters.
//!
//! This crate is the API-first boundary for the remote artwork catalog. It owns the record and
//! pagination models, page-request resolution, response decoding, the [`CatalogService`] trait,
//! and an in-memory service, while the concrete `window.fetch` adapter lives in
//! `catalog_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod decode;
pub mod error;
pub mod model;
pub mod request;
pub mod service;

pub use config::{
    CatalogConfig, DEFAULT_API_BASE_URL, DEFAULT_BULK_DEBOUNCE_MS, DEFAULT_MAX_BULK_SELECTION,
    DEFAULT_PAGE_LINK_WINDOW, DEFAULT_TOAST_LIFE_MS,
};
pub use decode::decode_catalog_page;
pub use error::{FetchError, GENERIC_FETCH_ERROR_MESSAGE};
pub use model::{CatalogField, CatalogPage, CatalogRecord, PageMetadata};
pub use request::{PageRequest, DEFAULT_PAGE_SIZE};
pub use service::{
    fetch_catalog_page_with, CatalogFuture, CatalogService, MemoryCatalogService,
    NoopCatalogService,
};
