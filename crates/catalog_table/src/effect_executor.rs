//! Drains reducer-emitted table effects (fetches, debounce timers, toasts) in emission order.

use leptos::*;

use crate::runtime_context::CatalogTableContext;

/// Installs the reactive drain for [`CatalogTableContext::effects`].
pub fn install(runtime: CatalogTableContext) {
    create_effect(move |_| {
        let batch = runtime.effects.get();
        if batch.is_empty() {
            return;
        }

        // A fetch answered synchronously (the in-memory catalog) dispatches again before this
        // loop ends, so the queue must already be empty to receive that follow-up batch.
        runtime.effects.set(Vec::new());

        let host = runtime.host.get_value();
        for effect in batch {
            host.run_table_effect(runtime, effect);
        }
    });
}
