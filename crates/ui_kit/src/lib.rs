//! Accessible Leptos widget primitives.
//!
//! Every widget composes Tailwind utility classes through
//! [`compose_classes`], exposes its class builder as a pure function, and
//! stamps a stable `data-ui-kind` attribute on its root element. Overlay
//! widgets take page-level resources (body scroll, window key listeners,
//! timers) only through the scoped guards in [`dom`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod classes;
mod config;
pub mod dom;
mod error;
mod icon;
mod widgets;

pub use classes::{class_if, compose_classes};
pub use config::{provide_ui_config, use_ui_config, DialogDefaults, ToastDefaults, UiConfig};
pub use error::{js_message, UiError};
pub use icon::{Icon, IconName, IconSize};
pub use widgets::*;

/// Convenience imports for applications composing widgets.
pub mod prelude {
    pub use crate::{
        compose_classes, provide_toast_queue, provide_ui_config, use_toast_queue, use_ui_config,
        Badge, BadgeSize, BadgeVariant, Button, ButtonSize, ButtonType, ButtonVariant, Card,
        CardContent, CardDescription, CardFooter, CardHeader, CardPadding, CardTitle,
        CardVariant, Dialog, DialogDescription, DialogFooter, DialogHeader, DialogSize,
        DialogTitle, Icon, IconName, IconSize, Input, SelectOption, Select, Skeleton,
        SkeletonAnimation, SkeletonVariant, TabItem, TabSet, Tabs, TabsContent, TabsList,
        TabsSelection, TabsTrigger, Toast, ToastContainer, ToastDuration, ToastPosition,
        ToastQueue, ToastRecord, ToastVariant, ToastViewport, UiConfig, UiError,
    };
}
