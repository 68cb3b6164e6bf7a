use catalog_host::CatalogConfig;
use catalog_table::{CatalogHostContext, CatalogTableProvider, CatalogTableView};
use leptos::*;
use leptos_meta::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Artwork Catalog" />
        <Meta name="description" content="Browse and select artworks from the museum catalog." />

        <main class="site-root">
            <CatalogEntry />
        </main>
    }
}

#[component]
pub fn CatalogEntry(
    /// Overrides the default API root, page size, and timing tunables.
    #[prop(optional)]
    config: Option<CatalogConfig>,
) -> impl IntoView {
    let host = CatalogHostContext::from_config(config.unwrap_or_default());

    view! {
        <CatalogTableProvider host=host>
            <CatalogTableView />
        </CatalogTableProvider>
    }
}
