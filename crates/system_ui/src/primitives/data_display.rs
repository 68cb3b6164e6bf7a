use super::*;

#[component]
/// Bordered section, toned to match what it reports.
pub fn Panel(
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            class=merge_layout_class("ui-panel", layout_class)
            data-ui-primitive="true"
            data-ui-kind="panel"
            data-ui-slot=ui_slot
            data-ui-tone=tone.token()
        >
            {children()}
        </section>
    }
}

#[component]
/// Small inline text for status lines.
pub fn Caption(
    #[prop(default = TextTone::Primary)] tone: TextTone,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class="ui-caption"
            data-ui-primitive="true"
            data-ui-kind="caption"
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Screen-level heading; `aria_live` announces loading and error text as it changes.
pub fn Heading(
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] aria_live: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <h1
            class="ui-heading"
            data-ui-primitive="true"
            data-ui-kind="heading"
            data-ui-tone=tone.token()
            aria-live=aria_live
        >
            {children()}
        </h1>
    }
}

#[component]
/// Counter pill.
pub fn Badge(children: Children) -> impl IntoView {
    view! {
        <span class="ui-badge" data-ui-primitive="true" data-ui-kind="badge">
            {children()}
        </span>
    }
}

#[component]
/// Placeholder shown where a collection has nothing to render.
pub fn EmptyState(children: Children) -> impl IntoView {
    view! {
        <div class="ui-empty-state" data-ui-primitive="true" data-ui-kind="empty-state">
            {children()}
        </div>
    }
}

#[component]
/// One entry in a [`crate::StatusBar`].
pub fn StatusBarItem(children: Children) -> impl IntoView {
    view! {
        <span class="ui-statusbar-item" data-ui-primitive="true" data-ui-kind="statusbar-item">
            {children()}
        </span>
    }
}

#[component]
/// Grid of records. Compose with [`TableHead`] and [`TableBody`].
///
/// `aria_busy` stays raised while a page request is in flight.
pub fn DataTable(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] aria_busy: MaybeSignal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <table
            class=merge_layout_class("ui-data-table", layout_class)
            data-ui-primitive="true"
            data-ui-kind="data-table"
            role="grid"
            aria-label=aria_label
            aria-busy=move || bool_token(aria_busy.get())
        >
            {children()}
        </table>
    }
}

#[component]
/// Single header row of [`TableHeaderCell`]s.
pub fn TableHead(children: Children) -> impl IntoView {
    view! {
        <thead data-ui-primitive="true" data-ui-kind="table-head">
            <tr>{children()}</tr>
        </thead>
    }
}

#[component]
/// Table body that swaps its rows for a full-width [`EmptyState`] row while `empty` holds.
///
/// `column_count` must match the header so the placeholder spans every column.
pub fn TableBody(
    #[prop(into)] empty: Signal<bool>,
    column_count: u32,
    #[prop(into)] empty_message: String,
    children: ChildrenFn,
) -> impl IntoView {
    let empty_message = store_value(empty_message);

    view! {
        <tbody data-ui-primitive="true" data-ui-kind="table-body">
            <Show when=move || empty.get() fallback=move || children()>
                <TableRow>
                    <TableCell colspan=column_count>
                        <EmptyState>{empty_message.get_value()}</EmptyState>
                    </TableCell>
                </TableRow>
            </Show>
        </tbody>
    }
}

#[component]
/// Body row; `row_key` is the record id.
pub fn TableRow(
    #[prop(optional, into)] row_key: Option<String>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <tr
            class="ui-table-row"
            data-ui-primitive="true"
            data-ui-kind="table-row"
            data-row-key=row_key
            aria-selected=move || bool_token(selected.get())
            data-ui-selected=move || bool_token(selected.get())
        >
            {children()}
        </tr>
    }
}

#[component]
/// Column header. `width` is any CSS length, e.g. `"4rem"` for the selection column.
pub fn TableHeaderCell(
    #[prop(optional)] width: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <th
            class="ui-table-header-cell"
            scope="col"
            style=width.map(width_style)
            data-ui-primitive="true"
            data-ui-kind="table-header-cell"
            data-ui-slot=ui_slot
        >
            {children()}
        </th>
    }
}

#[component]
/// Body cell.
pub fn TableCell(
    #[prop(optional)] colspan: Option<u32>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <td
            class="ui-table-cell"
            colspan=colspan
            data-ui-primitive="true"
            data-ui-kind="table-cell"
            data-ui-slot=ui_slot
        >
            {children()}
        </td>
    }
}

fn width_style(width: &str) -> String {
    format!("width: {width}; min-width: {width}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_width_pins_both_width_and_min_width() {
        assert_eq!(width_style("4rem"), "width: 4rem; min-width: 4rem");
    }
}
