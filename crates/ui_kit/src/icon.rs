//! Inline SVG icons used inside widgets.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Icons the widget set renders.
pub enum IconName {
    /// Diagonal cross for dismiss buttons.
    Close,
    /// Downward chevron for select affordances.
    ChevronDown,
    /// Progress spinner for busy buttons.
    Spinner,
    /// Check mark.
    Check,
    /// Circled "i".
    Info,
    /// Warning triangle.
    Warning,
    /// Circled cross.
    Error,
}

impl IconName {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Close => "close",
            Self::ChevronDown => "chevron-down",
            Self::Spinner => "spinner",
            Self::Check => "check",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    fn path(self) -> &'static str {
        match self {
            Self::Close => "M6 18L18 6M6 6l12 12",
            Self::ChevronDown => "M19 9l-7 7-7-7",
            Self::Spinner => "M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z",
            Self::Check => "M5 13l4 4L19 7",
            Self::Info => "M13 16h-1v-4h-1m1-4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
            Self::Warning => "M12 9v2m0 4h.01M10.29 3.86L1.82 18a2 2 0 001.71 3h16.94a2 2 0 001.71-3L13.71 3.86a2 2 0 00-3.42 0z",
            Self::Error => "M10 14l2-2m0 0l2-2m-2 2l-2-2m2 2l2 2m7-2a9 9 0 11-18 0 9 9 0 0118 0z",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Icon box sizes.
pub enum IconSize {
    /// 16px box.
    #[default]
    Sm,
    /// 20px box.
    Md,
}

impl IconSize {
    fn classes(self) -> &'static str {
        match self {
            Self::Sm => "h-4 w-4",
            Self::Md => "h-5 w-5",
        }
    }
}

#[component]
/// Decorative inline icon; hidden from assistive technology.
pub fn Icon(
    icon: IconName,
    #[prop(default = IconSize::Sm)] size: IconSize,
    #[prop(optional)] class: Option<&'static str>,
) -> impl IntoView {
    let class = crate::compose_classes([size.classes(), class.unwrap_or("")]);
    if icon == IconName::Spinner {
        return view! {
            <svg
                class=crate::compose_classes(["animate-spin", class.as_str()])
                xmlns="http://www.w3.org/2000/svg"
                fill="none"
                viewBox="0 0 24 24"
                aria-hidden="true"
                data-ui-icon=icon.token()
            >
                <circle class="opacity-25" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"></circle>
                <path class="opacity-75" fill="currentColor" d=icon.path()></path>
            </svg>
        }
        .into_view();
    }

    view! {
        <svg
            class=class
            xmlns="http://www.w3.org/2000/svg"
            fill="none"
            stroke="currentColor"
            viewBox="0 0 24 24"
            aria-hidden="true"
            data-ui-icon=icon.token()
        >
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=icon.path()></path>
        </svg>
    }
    .into_view()
}
