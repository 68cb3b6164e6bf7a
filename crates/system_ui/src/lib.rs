//! Shared UI primitive library for the catalog table application.
//!
//! The crate owns reusable Leptos primitives and the stable `data-ui-*` DOM contract consumed by
//! the site stylesheet. Feature crates compose these primitives instead of emitting ad hoc
//! control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;

pub use primitives::{
    Badge, Button, ButtonSize, ButtonVariant, Caption, CheckboxField, Cluster, DataTable,
    EmptyState, Heading, LayoutGap, LayoutJustify, LayoutPadding, NumberField, Pager, PagerStep,
    Panel, Popover, Stack, StatusBar, StatusBarItem, TableBody, TableCell, TableHead,
    TableHeaderCell, TableRow, TextTone, Toast, ToastRegion, ToolBar,
};

/// Convenience imports for feature crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        Badge, Button, ButtonSize, ButtonVariant, Caption, CheckboxField, Cluster, DataTable,
        EmptyState, Heading, LayoutGap, LayoutJustify, LayoutPadding, NumberField, Pager,
        PagerStep, Panel, Popover, Stack, StatusBar, StatusBarItem, TableBody, TableCell,
        TableHead, TableHeaderCell, TableRow, TextTone, Toast, ToastRegion, ToolBar,
    };
}
