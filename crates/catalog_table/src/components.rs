//! Catalog table UI composition.

mod bulk_popover;
mod pager;
mod table;
mod toasts;

use leptos::*;
use system_ui::prelude::*;

use self::{pager::CatalogPager, table::CatalogTable, toasts::ToastStack};

use crate::{
    model::{TableState, TableView},
    reducer::TableAction,
    runtime_context::use_catalog_table,
};

#[component]
/// Root view: a loading heading, an error panel, or the table with its paginator.
///
/// Must be rendered inside [`crate::CatalogTableProvider`].
pub fn CatalogTableView() -> impl IntoView {
    let runtime = use_catalog_table();
    let screen = create_memo(move |_| runtime.state.with(TableState::view));

    view! {
        <Stack layout_class="catalog-app" ui_slot="catalog-app" padding=LayoutPadding::Md>
            {move || match screen.get() {
                TableView::Loading => view! {
                    <Heading aria_live="polite">"Loading..."</Heading>
                }
                .into_view(),
                TableView::Error(message) => view! { <ErrorPanel message=message/> }.into_view(),
                TableView::Ready => view! {
                    <CatalogTable/>
                    <CatalogPager/>
                }
                .into_view(),
            }}
            <ToastStack/>
        </Stack>
    }
}

#[component]
fn ErrorPanel(message: String) -> impl IntoView {
    let runtime = use_catalog_table();

    view! {
        <Panel tone=TextTone::Danger layout_class="catalog-error" ui_slot="error">
            <Stack gap=LayoutGap::Sm>
                <Heading tone=TextTone::Danger aria_live="assertive">
                    {format!("Error: {message}")}
                </Heading>
                <Cluster>
                    <Button
                        variant=ButtonVariant::Primary
                        on_click=Callback::new(move |_| {
                            runtime.dispatch_action(TableAction::RetryLastPage)
                        })
                    >
                        "Retry"
                    </Button>
                </Cluster>
            </Stack>
        </Panel>
    }
}
