use leptos::*;
use system_ui::prelude::*;

use crate::{reducer::TableAction, runtime_context::use_catalog_table};

const POPOVER_ID: &str = "catalog-bulk-selector";

#[component]
/// Header button that opens the "select first N rows" popover.
pub(super) fn BulkSelectorToggle(open: RwSignal<bool>) -> impl IntoView {
    view! {
        <Button
            variant=ButtonVariant::Quiet
            size=ButtonSize::Sm
            ui_slot="bulk-selector-toggle"
            aria_label="Select rows across pages"
            aria_controls=POPOVER_ID.to_string()
            aria_haspopup="dialog".to_string()
            aria_expanded=Signal::derive(move || open.get())
            on_click=Callback::new(move |_| open.update(|open| *open = !*open))
        >
            "v"
        </Button>
    }
}

#[component]
pub(super) fn BulkSelectorPopover(open: RwSignal<bool>) -> impl IntoView {
    let runtime = use_catalog_table();
    let input = Signal::derive(move || runtime.bulk.with(|bulk| bulk.input.clone()));

    view! {
        <Popover
            id=POPOVER_ID
            layout_class="catalog-bulk-selector"
            aria_label="Select rows"
            open=Signal::derive(move || open.get())
            on_close=Callback::new(move |()| open.set(false))
        >
            <Stack gap=LayoutGap::Sm padding=LayoutPadding::Sm>
                <NumberField
                    min=0
                    placeholder="Enter number of rows"
                    aria_label="Number of rows to select"
                    autofocus=true
                    value=input
                    on_input=Callback::new(move |raw| {
                        runtime.dispatch_action(TableAction::BulkInputChanged { raw })
                    })
                />
                <Cluster justify=LayoutJustify::End>
                    <Button
                        size=ButtonSize::Sm
                        on_click=Callback::new(move |_| open.set(false))
                    >
                        "Close"
                    </Button>
                </Cluster>
            </Stack>
        </Popover>
    }
}
