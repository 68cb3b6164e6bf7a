//! Host-side helpers that execute reducer effects against the catalog service and browser timers.

mod fetch_effects;
mod timer_effects;

use std::rc::Rc;

use catalog_host::{CatalogConfig, CatalogService};
use catalog_host_web::{catalog_service, host_strategy_name};

use crate::{reducer::TableEffect, runtime_context::CatalogTableContext};

#[derive(Clone)]
/// Catalog service plus the configuration the runtime was started with.
pub struct CatalogHostContext {
    catalog: Rc<dyn CatalogService>,
    config: CatalogConfig,
    host_strategy_name: &'static str,
}

impl Default for CatalogHostContext {
    fn default() -> Self {
        let config = CatalogConfig::default();
        Self {
            catalog: Rc::new(catalog_service(&config)),
            config,
            host_strategy_name: host_strategy_name(),
        }
    }
}

impl CatalogHostContext {
    /// Builds a host context around an injected service, e.g. an in-memory catalog.
    pub fn new(catalog: Rc<dyn CatalogService>, config: CatalogConfig) -> Self {
        Self {
            catalog,
            config,
            host_strategy_name: "injected",
        }
    }

    /// Builds the compile-time selected service for `config`.
    pub fn from_config(config: CatalogConfig) -> Self {
        Self {
            catalog: Rc::new(catalog_service(&config)),
            config,
            host_strategy_name: host_strategy_name(),
        }
    }

    pub fn catalog_service(&self) -> Rc<dyn CatalogService> {
        self.catalog.clone()
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn host_strategy_name(&self) -> &'static str {
        self.host_strategy_name
    }

    /// Executes a single [`TableEffect`] emitted by the reducer.
    pub fn run_table_effect(&self, runtime: CatalogTableContext, effect: TableEffect) {
        match effect {
            TableEffect::FetchPage {
                request_id,
                request,
            } => fetch_effects::fetch_page(self.clone(), runtime, request_id, request),
            TableEffect::ScheduleBulkDebounce { generation, delay } => {
                timer_effects::schedule_bulk_debounce(runtime, generation, delay)
            }
            TableEffect::FetchBulkSelection {
                request_id,
                request,
            } => fetch_effects::fetch_bulk_selection(self.clone(), runtime, request_id, request),
            TableEffect::Notify(notice) => {
                timer_effects::show_toast(runtime, notice, self.config.toast_life())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use catalog_host::{MemoryCatalogService, PageRequest};
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn injected_service_is_used_for_fetches() {
        let memory = MemoryCatalogService::sample(30);
        let config = CatalogConfig {
            page_size: 10,
            ..CatalogConfig::default()
        };
        let host = CatalogHostContext::new(Rc::new(memory.clone()), config);

        let page = block_on(
            host.catalog_service()
                .fetch_page(&PageRequest::new(3, Some(host.config().page_size))),
        )
        .expect("page 3");

        assert_eq!(host.host_strategy_name(), "injected");
        assert_eq!(page.records.len(), 10);
        assert_eq!(memory.requests(), vec![PageRequest::new(3, Some(10))]);
    }
}
