use leptos::*;
use system_ui::prelude::*;

use crate::{pagination::PagerModel, reducer::TableAction, runtime_context::use_catalog_table};

#[component]
pub(super) fn CatalogPager() -> impl IntoView {
    let runtime = use_catalog_table();
    let window = runtime
        .host
        .with_value(|host| host.config().page_link_window);
    let pager = create_memo(move |_| {
        runtime.state.with(|state| {
            state
                .pagination
                .as_ref()
                .map(|pagination| PagerModel::from_metadata(pagination, window))
                .unwrap_or_default()
        })
    });
    let selected_count = Signal::derive(move || runtime.state.with(|s| s.selection.len()));

    view! {
        <ToolBar layout_class="catalog-pager-bar" aria_label="Pagination">
            <Pager
                aria_label="Catalog pages"
                current=Signal::derive(move || pager.with(|p| p.current_page))
                page_count=Signal::derive(move || pager.with(|p| p.page_count))
                links=Signal::derive(move || pager.with(|p| p.links.clone()))
                on_select=Callback::new(move |page| {
                    runtime.dispatch_action(TableAction::LoadPage { page })
                })
            />
        </ToolBar>
        <StatusBar layout_class="catalog-status">
            <StatusBarItem>
                <Caption>{move || pager.with(PagerModel::summary)}</Caption>
            </StatusBarItem>
            <StatusBarItem>
                <Caption tone=TextTone::Secondary>
                    {move || format!("{} records", pager.with(|p| p.total_records))}
                </Caption>
            </StatusBarItem>
            <StatusBarItem>
                <Badge>{move || format!("{} selected", selected_count.get())}</Badge>
            </StatusBarItem>
        </StatusBar>
    }
}
