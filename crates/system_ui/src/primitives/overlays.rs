use super::*;

#[component]
/// Floating dialog rendered while `open` holds. Escape inside it calls `on_close`.
pub fn Popover(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(into)] open: MaybeSignal<bool>,
    #[prop(optional)] on_close: Option<Callback<()>>,
    children: ChildrenFn,
) -> impl IntoView {
    let id = store_value(id);
    let aria_label = store_value(aria_label);

    view! {
        <Show when=move || open.get() fallback=|| ()>
            <div
                class=merge_layout_class("ui-popover", layout_class)
                id=id.get_value()
                role="dialog"
                aria-label=aria_label.get_value()
                data-ui-primitive="true"
                data-ui-kind="popover"
                data-ui-elevation="overlay"
                on:keydown=move |ev| {
                    if ev.key() == "Escape" {
                        if let Some(on_close) = on_close.as_ref() {
                            on_close.call(());
                        }
                    }
                }
            >
                {children()}
            </div>
        </Show>
    }
}

#[component]
/// Corner region toasts stack in; announced politely to assistive tech.
pub fn ToastRegion(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-toast-region", layout_class)
            role="region"
            aria-live="polite"
            data-ui-primitive="true"
            data-ui-kind="toast-region"
        >
            {children()}
        </div>
    }
}

#[component]
/// Notification card: bold summary, detail line, and an `x` that calls `on_dismiss`.
pub fn Toast(
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(into)] summary: String,
    #[prop(into)] detail: String,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div
            class="ui-toast"
            role="alert"
            data-ui-primitive="true"
            data-ui-kind="toast"
            data-ui-tone=tone.token()
            data-ui-elevation="overlay"
        >
            <div data-ui-slot="copy">
                <strong data-ui-slot="summary">{summary}</strong>
                <span data-ui-slot="detail">{detail}</span>
            </div>
            <Button
                ui_slot="dismiss"
                variant=ButtonVariant::Quiet
                size=ButtonSize::Sm
                aria_label="Dismiss notification"
                on_click=Callback::new(move |_| {
                    if let Some(on_dismiss) = on_dismiss.as_ref() {
                        on_dismiss.call(());
                    }
                })
            >
                "x"
            </Button>
        </div>
    }
}
