use catalog_host::{CatalogField, CatalogRecord};
use leptos::*;
use system_ui::prelude::*;

use super::bulk_popover::{BulkSelectorPopover, BulkSelectorToggle};
use crate::{
    columns::{catalog_columns, row_cells},
    model::TableState,
    reducer::TableAction,
    runtime_context::use_catalog_table,
};

const EMPTY_MESSAGE: &str = "No records found";

#[component]
pub(super) fn CatalogTable() -> impl IntoView {
    let runtime = use_catalog_table();
    let records = create_memo(move |_| runtime.state.with(|state| state.records.clone()));
    let page_selected = create_memo(move |_| runtime.state.with(TableState::page_fully_selected));
    let loading = Signal::derive(move || runtime.state.with(|state| state.loading));
    let popover_open = create_rw_signal(false);
    // Selection column plus one per field.
    let column_count = CatalogField::ALL.len() as u32 + 1;

    view! {
        <DataTable layout_class="catalog-table" aria_label="Artworks" aria_busy=loading>
            <TableHead>
                <TableHeaderCell ui_slot="selection" width="4rem">
                    <Cluster gap=LayoutGap::Sm>
                        <CheckboxField
                            aria_label="Select all rows on this page"
                            checked=page_selected
                            on_change=Callback::new(move |selected| {
                                runtime.dispatch_action(TableAction::SetPageSelection { selected })
                            })
                        />
                        <BulkSelectorToggle open=popover_open/>
                    </Cluster>
                </TableHeaderCell>
                {catalog_columns()
                    .into_iter()
                    .map(|column| view! { <TableHeaderCell>{column.header}</TableHeaderCell> })
                    .collect_view()}
            </TableHead>
            <TableBody
                empty=Signal::derive(move || records.with(Vec::is_empty))
                column_count=column_count
                empty_message=EMPTY_MESSAGE
            >
                <For
                    each=move || records.get()
                    key=|record| record.id
                    children=move |record| view! { <CatalogRow record=record/> }
                />
            </TableBody>
        </DataTable>
        <BulkSelectorPopover open=popover_open/>
    }
}

#[component]
fn CatalogRow(record: CatalogRecord) -> impl IntoView {
    let runtime = use_catalog_table();
    let record_id = record.id;
    let selected =
        create_memo(move |_| runtime.state.with(|state| state.selection.contains(record_id)));
    let row_label = format!("Select {}", record.display_value(CatalogField::Title));
    let cells = row_cells(&record);

    view! {
        <TableRow row_key=record_id.to_string() selected=selected>
            <TableCell ui_slot="selection">
                <CheckboxField
                    aria_label=row_label
                    checked=selected
                    on_change=Callback::new(move |_| {
                        runtime.dispatch_action(TableAction::ToggleRowSelection { record_id })
                    })
                />
            </TableCell>
            {cells
                .into_iter()
                .map(|text| view! { <TableCell>{text}</TableCell> })
                .collect_view()}
        </TableRow>
    }
}
