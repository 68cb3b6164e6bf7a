//! Paginated, selectable artwork catalog table.
//!
//! State lives in a single reducer ([`reduce_table`]) that emits [`TableEffect`] intents. The
//! Leptos provider drains those intents against a [`catalog_host::CatalogService`] and browser
//! timers, and the components in [`components`] render the result with `system_ui` primitives.

pub mod bulk_selector;
pub mod columns;
pub mod components;
mod effect_executor;
pub mod host;
pub mod model;
pub mod pagination;
pub mod reducer;
mod runtime_context;

pub use bulk_selector::{
    over_limit_message, parse_bulk_count, plan_bulk_selection, BulkSelectionPlan,
    NEGATIVE_COUNT_MESSAGE,
};
pub use columns::{catalog_columns, header_for_key, row_cells, CatalogColumn};
pub use components::CatalogTableView;
pub use host::CatalogHostContext;
pub use model::*;
pub use pagination::{page_at_offset, page_count, visible_page_links, PagerModel};
pub use reducer::{reduce_table, TableAction, TableEffect, TableReducerError};
pub use runtime_context::{use_catalog_table, CatalogTableContext, CatalogTableProvider};
