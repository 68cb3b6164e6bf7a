//! Runtime provider and context wiring for the catalog table.
//!
//! This module owns the long-lived reducer container, the effect queue, the toast stack, and the
//! bulk selector's debounce timer handle. UI composition stays in [`crate::components`].
#![allow(clippy::clone_on_copy)]

use leptos::{leptos_dom::helpers::TimeoutHandle, *};

use crate::{
    effect_executor,
    host::CatalogHostContext,
    model::{BulkSelectorState, Notice, TableState, ToastMessage},
    reducer::{reduce_table, TableAction, TableEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading table state and dispatching [`TableAction`] values.
pub struct CatalogTableContext {
    /// Catalog service and configuration used to execute effects.
    pub host: StoredValue<CatalogHostContext>,
    /// Reactive table state signal.
    pub state: RwSignal<TableState>,
    /// Reactive bulk selector state signal.
    pub bulk: RwSignal<BulkSelectorState>,
    /// Queue of effects emitted by the reducer and drained by the executor.
    pub effects: RwSignal<Vec<TableEffect>>,
    /// Toasts currently on screen, oldest first.
    pub toasts: RwSignal<Vec<ToastMessage>>,
    /// Handle of the armed bulk selector debounce timer, if any.
    pub debounce_timer: StoredValue<Option<TimeoutHandle>>,
    next_toast_id: StoredValue<u64>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<TableAction>,
}

impl CatalogTableContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: TableAction) {
        self.dispatch.call(action);
    }

    /// Adds a toast and returns its id.
    pub fn push_toast(&self, notice: Notice) -> u64 {
        let id = self.next_toast_id.get_value();
        self.next_toast_id.set_value(id + 1);
        self.toasts
            .update(|toasts| toasts.push(ToastMessage { id, notice }));
        id
    }

    pub fn dismiss_toast(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }

    /// Clears the armed debounce timer without firing it.
    pub fn cancel_bulk_debounce(&self) {
        self.debounce_timer.update_value(|timer| {
            if let Some(handle) = timer.take() {
                handle.clear();
            }
        });
    }
}

#[component]
/// Provides [`CatalogTableContext`] to descendant components and loads the first page.
pub fn CatalogTableProvider(
    /// Catalog service and configuration; defaults to the compile-time selected host.
    #[prop(optional)]
    host: Option<CatalogHostContext>,
    children: Children,
) -> impl IntoView {
    let host = store_value(host.unwrap_or_default());
    let state = create_rw_signal(TableState::default());
    let bulk = create_rw_signal(BulkSelectorState::default());
    let effects = create_rw_signal(Vec::<TableEffect>::new());
    let toasts = create_rw_signal(Vec::<ToastMessage>::new());
    let debounce_timer = store_value(None::<TimeoutHandle>);
    let next_toast_id = store_value(1_u64);

    let dispatch = Callback::new(move |action: TableAction| {
        let mut table = state.get_untracked();
        let mut selector = bulk.get_untracked();
        let previous_table = table.clone();
        let previous_selector = selector.clone();
        let config = host.with_value(|host| host.config().clone());

        match reduce_table(&mut table, &mut selector, &config, action) {
            Ok(new_effects) => {
                if table != previous_table {
                    state.set(table);
                }
                if selector != previous_selector {
                    bulk.set(selector);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) if err.is_stale() => logging::log!("catalog table: {err}"),
            Err(err) => logging::warn!("catalog table reducer error: {err}"),
        }
    });

    let runtime = CatalogTableContext {
        host,
        state,
        bulk,
        effects,
        toasts,
        debounce_timer,
        next_toast_id,
        dispatch,
    };

    provide_context(runtime.clone());
    logging::log!(
        "catalog table using {} host",
        host.with_value(|host| host.host_strategy_name())
    );

    effect_executor::install(runtime);
    on_cleanup(move || runtime.cancel_bulk_debounce());
    runtime.dispatch_action(TableAction::LoadPage { page: 1 });

    children().into_view()
}

/// Returns the current [`CatalogTableContext`].
///
/// # Panics
///
/// Panics if called outside [`CatalogTableProvider`].
pub fn use_catalog_table() -> CatalogTableContext {
    use_context::<CatalogTableContext>().expect("CatalogTableContext not provided")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn detached_context() -> CatalogTableContext {
        CatalogTableContext {
            host: store_value(CatalogHostContext::default()),
            state: create_rw_signal(TableState::default()),
            bulk: create_rw_signal(BulkSelectorState::default()),
            effects: create_rw_signal(Vec::new()),
            toasts: create_rw_signal(Vec::new()),
            debounce_timer: store_value(None::<TimeoutHandle>),
            next_toast_id: store_value(1),
            dispatch: Callback::new(|_: TableAction| {}),
        }
    }

    #[test]
    fn toasts_get_increasing_ids_and_dismiss_individually() {
        let owner = create_runtime();
        let runtime = detached_context();

        let first = runtime.push_toast(Notice::error("Input can not be negative"));
        let second = runtime.push_toast(Notice::error("later"));
        runtime.dismiss_toast(first);

        let remaining: Vec<_> = runtime
            .toasts
            .get_untracked()
            .into_iter()
            .map(|toast| toast.id)
            .collect();
        assert_eq!(remaining, vec![second]);

        runtime.cancel_bulk_debounce();
        assert!(runtime.debounce_timer.with_value(Option::is_none));
        owner.dispose();
    }
}
