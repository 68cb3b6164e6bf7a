use catalog_host::PageRequest;
use leptos::{logging, spawn_local};

use crate::{
    host::CatalogHostContext, model::RequestId, reducer::TableAction,
    runtime_context::CatalogTableContext,
};

pub(super) fn fetch_page(
    host: CatalogHostContext,
    runtime: CatalogTableContext,
    request_id: RequestId,
    request: PageRequest,
) {
    spawn_local(async move {
        logging::log!(
            "catalog page {} requested (limit {}, request {})",
            request.page,
            request.effective_limit(),
            request_id.0
        );
        let catalog = host.catalog_service();
        let result = catalog.fetch_page(&request).await;
        if let Err(err) = &result {
            logging::warn!("catalog page {} fetch failed: {err}", request.page);
        }
        runtime.dispatch_action(TableAction::PageLoaded { request_id, result });
    });
}

pub(super) fn fetch_bulk_selection(
    host: CatalogHostContext,
    runtime: CatalogTableContext,
    request_id: RequestId,
    request: PageRequest,
) {
    spawn_local(async move {
        logging::log!(
            "bulk selection of {} records requested (request {})",
            request.effective_limit(),
            request_id.0
        );
        let catalog = host.catalog_service();
        let result = catalog.fetch_page(&request).await;
        if let Err(err) = &result {
            logging::warn!("bulk selection fetch failed: {err}");
        }
        runtime.dispatch_action(TableAction::BulkSelectionLoaded { request_id, result });
    });
}
