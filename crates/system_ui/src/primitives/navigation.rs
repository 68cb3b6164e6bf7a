use super::*;

#[component]
/// Labelled row of controls.
pub fn ToolBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-toolbar", layout_class)
            data-ui-primitive="true"
            data-ui-kind="toolbar"
            role="toolbar"
            aria-label=aria_label
        >
            {children()}
        </div>
    }
}

#[component]
/// Live status strip below the table.
pub fn StatusBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-statusbar", layout_class)
            data-ui-primitive="true"
            data-ui-kind="statusbar"
            role="status"
        >
            {children()}
        </div>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Relative moves offered around the numbered page links.
pub enum PagerStep {
    /// Jump to page 1.
    First,
    /// One page back.
    Previous,
    /// One page forward.
    Next,
    /// Jump to the last page.
    Last,
}

impl PagerStep {
    const ALL_BEFORE: [Self; 2] = [Self::First, Self::Previous];
    const ALL_AFTER: [Self; 2] = [Self::Next, Self::Last];

    /// Page this step lands on, or `None` when the move is unavailable from `current`.
    pub fn target(self, current: u32, page_count: u32) -> Option<u32> {
        match self {
            Self::First => (current > 1).then_some(1),
            Self::Previous => (current > 1).then(|| current - 1),
            Self::Next => (current < page_count).then(|| current + 1),
            Self::Last => (current < page_count).then_some(page_count),
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            Self::First => "<<",
            Self::Previous => "<",
            Self::Next => ">",
            Self::Last => ">>",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::First => "First page",
            Self::Previous => "Previous page",
            Self::Next => "Next page",
            Self::Last => "Last page",
        }
    }
}

#[component]
/// Paginator over `1..=page_count`: first/previous steppers, the numbered `links`, then
/// next/last steppers. Every control reports the page it targets through `on_select`.
pub fn Pager(
    #[prop(into)] current: Signal<u32>,
    #[prop(into)] page_count: Signal<u32>,
    #[prop(into)] links: Signal<Vec<u32>>,
    on_select: Callback<u32>,
    #[prop(optional, into)] aria_label: Option<String>,
) -> impl IntoView {
    let stepper = move |step: PagerStep| {
        let target = Signal::derive(move || step.target(current.get(), page_count.get()));
        view! {
            <PageButton
                label=step.label().to_string()
                disabled=Signal::derive(move || target.get().is_none())
                on_click=Callback::new(move |_| {
                    if let Some(page) = target.get_untracked() {
                        on_select.call(page);
                    }
                })
            >
                {step.glyph()}
            </PageButton>
        }
    };

    view! {
        <nav
            class="ui-pager"
            data-ui-primitive="true"
            data-ui-kind="pager"
            aria-label=aria_label
        >
            {PagerStep::ALL_BEFORE.into_iter().map(stepper).collect_view()}
            <For
                each=move || links.get()
                key=|page| *page
                children=move |page| {
                    view! {
                        <PageButton
                            label=format!("Page {page}")
                            current=Signal::derive(move || current.get() == page)
                            on_click=Callback::new(move |_| on_select.call(page))
                        >
                            {page}
                        </PageButton>
                    }
                }
            />
            {PagerStep::ALL_AFTER.into_iter().map(stepper).collect_view()}
        </nav>
    }
}

#[component]
fn PageButton(
    label: String,
    #[prop(optional, into)] current: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    on_click: Callback<leptos::ev::MouseEvent>,
    children: Children,
) -> impl IntoView {
    view! {
        <Button
            layout_class="ui-page-link"
            ui_slot="page-link"
            variant=ButtonVariant::Quiet
            size=ButtonSize::Sm
            aria_label=label
            aria_current=Signal::derive(move || {
                if current.get() { "page".to_string() } else { String::new() }
            })
            selected=current
            disabled=disabled
            on_click=on_click
        >
            {children()}
        </Button>
    }
}
