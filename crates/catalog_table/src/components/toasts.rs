use leptos::*;
use system_ui::prelude::*;

use crate::runtime_context::use_catalog_table;

#[component]
pub(super) fn ToastStack() -> impl IntoView {
    let runtime = use_catalog_table();

    view! {
        <ToastRegion layout_class="catalog-toasts">
            <For
                each=move || runtime.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <Toast
                            tone=TextTone::Danger
                            summary=toast.notice.summary
                            detail=toast.notice.detail
                            on_dismiss=Callback::new(move |()| runtime.dismiss_toast(id))
                        />
                    }
                }
            />
        </ToastRegion>
    }
}
