use super::*;

#[component]
/// Column of children; the catalog root and the popover body.
pub fn Stack(
    #[prop(default = LayoutGap::Md)] gap: LayoutGap,
    #[prop(optional)] padding: Option<LayoutPadding>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-stack", layout_class)
            data-ui-primitive="true"
            data-ui-kind="stack"
            data-ui-slot=ui_slot
            data-ui-gap=gap.token()
            data-ui-padding=padding.map(LayoutPadding::token)
        >
            {children()}
        </div>
    }
}

#[component]
/// Row of inline controls, vertically centred.
pub fn Cluster(
    #[prop(default = LayoutGap::Md)] gap: LayoutGap,
    #[prop(default = LayoutJustify::Start)] justify: LayoutJustify,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="ui-cluster"
            data-ui-primitive="true"
            data-ui-kind="cluster"
            data-ui-gap=gap.token()
            data-ui-justify=justify.token()
        >
            {children()}
        </div>
    }
}
