//! Table, form, paging, overlay, and layout primitives for the catalog screen.

use leptos::*;

mod controls;
mod data_display;
mod layout;
mod navigation;
mod overlays;

pub use controls::{Button, CheckboxField, NumberField};
pub use data_display::{
    Badge, Caption, DataTable, EmptyState, Heading, Panel, StatusBarItem, TableBody, TableCell,
    TableHead, TableHeaderCell, TableRow,
};
pub use layout::{Cluster, Stack};
pub use navigation::{Pager, PagerStep, StatusBar, ToolBar};
pub use overlays::{Popover, Toast, ToastRegion};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Button emphasis.
pub enum ButtonVariant {
    /// Plain action.
    #[default]
    Standard,
    /// The screen's main action, such as retrying a failed load.
    Primary,
    /// Borderless control used for paging and toggles.
    Quiet,
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Primary => "primary",
            Self::Quiet => "quiet",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Button density.
pub enum ButtonSize {
    /// Fits inside table headers and pagers.
    Sm,
    /// Regular density.
    #[default]
    Md,
}

impl ButtonSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Foreground tone for headings, captions, panels, and toasts.
pub enum TextTone {
    /// Regular body tone.
    #[default]
    Primary,
    /// De-emphasized supporting text.
    Secondary,
    /// Failures and error notifications.
    Danger,
}

impl TextTone {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Spacing between children of a [`Stack`] or [`Cluster`].
pub enum LayoutGap {
    /// Tight spacing for controls that belong together.
    Sm,
    /// Regular spacing.
    #[default]
    Md,
}

impl LayoutGap {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Inner padding of a [`Stack`]; stacks without one are flush.
pub enum LayoutPadding {
    /// Overlay content padding.
    Sm,
    /// Page-level padding.
    Md,
}

impl LayoutPadding {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Main-axis placement of [`Cluster`] children.
pub enum LayoutJustify {
    /// Leading edge.
    #[default]
    Start,
    /// Trailing edge, used for dialog action rows.
    End,
}

impl LayoutJustify {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_class_merge_skips_empty_overrides() {
        assert_eq!(merge_layout_class("ui-table", None), "ui-table");
        assert_eq!(merge_layout_class("ui-table", Some("")), "ui-table");
        assert_eq!(
            merge_layout_class("ui-table", Some("catalog-table")),
            "ui-table catalog-table"
        );
    }

    #[test]
    fn tokens_match_stylesheet_attributes() {
        assert_eq!(ButtonVariant::default().token(), "standard");
        assert_eq!(ButtonVariant::Quiet.token(), "quiet");
        assert_eq!(ButtonSize::default().token(), "md");
        assert_eq!(TextTone::Danger.token(), "danger");
        assert_eq!(LayoutGap::default().token(), "md");
        assert_eq!(LayoutPadding::Sm.token(), "sm");
        assert_eq!(LayoutJustify::End.token(), "end");
        assert_eq!(bool_token(false), "false");
    }
}
