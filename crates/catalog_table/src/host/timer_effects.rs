use std::time::Duration;

use leptos::{logging, set_timeout, set_timeout_with_handle};

use crate::{model::Notice, reducer::TableAction, runtime_context::CatalogTableContext};

/// Replaces any armed debounce timer with one that fires `generation` after `delay`.
pub(super) fn schedule_bulk_debounce(
    runtime: CatalogTableContext,
    generation: u64,
    delay: Duration,
) {
    runtime.cancel_bulk_debounce();
    match set_timeout_with_handle(
        move || runtime.dispatch_action(TableAction::BulkDebounceElapsed { generation }),
        delay,
    ) {
        Ok(handle) => runtime.debounce_timer.set_value(Some(handle)),
        Err(err) => logging::warn!("bulk selector debounce timer failed: {err:?}"),
    }
}

pub(super) fn show_toast(runtime: CatalogTableContext, notice: Notice, life: Duration) {
    let id = runtime.push_toast(notice);
    set_timeout(move || runtime.dismiss_toast(id), life);
}
