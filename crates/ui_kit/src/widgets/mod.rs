//! Widget components and their pure class/state helpers.

use std::cell::Cell;

use leptos::ev::MouseEvent;
use leptos::*;

use crate::classes::{class_if, compose_classes};
use crate::{use_ui_config, Icon, IconName, IconSize};

mod badge;
mod button;
mod card;
mod dialog;
mod field;
mod input;
mod select;
mod skeleton;
mod tabs;
mod toast;

pub use badge::{badge_classes, Badge, BadgeSize, BadgeVariant};
pub use button::{button_classes, Button, ButtonSize, ButtonType, ButtonVariant};
pub use card::{
    card_classes, Card, CardContent, CardDescription, CardFooter, CardHeader, CardPadding,
    CardTitle, CardVariant,
};
pub use dialog::{
    dialog_panel_classes, Dialog, DialogDescription, DialogFooter, DialogHeader, DialogSize,
    DialogTitle, DismissPolicy, DismissTrigger,
};
pub use field::{field_control_classes, FieldIds, FieldMessage};
pub use input::{input_classes, Input};
pub use select::{resolve_committed_value, select_classes, Select, SelectOption};
pub use skeleton::{skeleton_classes, skeleton_style, Dimension, Skeleton, SkeletonAnimation, SkeletonVariant};
pub use tabs::{
    active_item, tabs_trigger_classes, TabItem, TabSet, Tabs, TabsContent, TabsList,
    TabsSelection, TabsTrigger,
};
pub use toast::{
    provide_toast_queue, toast_classes, use_toast_queue, Toast, ToastContainer, ToastDuration,
    ToastPosition, ToastQueue, ToastRecord, ToastVariant, ToastViewport,
};

thread_local! {
    static NEXT_WIDGET_ID: Cell<u64> = const { Cell::new(0) };
}

/// Allocates a page-unique element id such as `ui-3`.
///
/// Components call this once in their body, which Leptos runs once per
/// mounted instance, so the id stays fixed across reactive updates.
pub fn next_widget_id(prefix: &str) -> String {
    let id = NEXT_WIDGET_ID.with(|next| {
        let id = next.get();
        next.set(id + 1);
        id
    });
    format!("{prefix}-{id}")
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

pub(crate) fn extra_class(class: &Option<String>) -> &str {
    class.as_deref().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widget_ids_are_unique_and_prefixed() {
        let first = next_widget_id("ui");
        let second = next_widget_id("ui");
        assert_ne!(first, second);
        assert!(first.starts_with("ui-"));
        assert!(next_widget_id("shop").starts_with("shop-"));
    }
}
