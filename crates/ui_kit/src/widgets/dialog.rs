use std::rc::Rc;

use super::*;
use crate::config::DialogDefaults;
use crate::dom::{use_scroll_lock, KeyListener, ScrollHost, ScrollLock, ScrollLockGuard};

const ESCAPE_KEY: &str = "Escape";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Maximum panel width.
pub enum DialogSize {
    /// Small panel.
    Sm,
    /// Default panel.
    #[default]
    Md,
    /// Large panel.
    Lg,
    /// Extra-large panel.
    Xl,
    /// Full width with side gutters.
    Full,
}

impl DialogSize {
    fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Full => "full",
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Self::Sm => "max-w-sm",
            Self::Md => "max-w-md",
            Self::Lg => "max-w-lg",
            Self::Xl => "max-w-xl",
            Self::Full => "max-w-full mx-4",
        }
    }
}

/// Class list for the dialog panel.
pub fn dialog_panel_classes(size: DialogSize, extra: Option<&str>) -> String {
    compose_classes([
        "relative z-50 w-full",
        size.classes(),
        "bg-white rounded-lg shadow-xl",
        extra.unwrap_or(""),
    ])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// User gestures that may close an open dialog.
pub enum DismissTrigger {
    /// Click on the backdrop outside the panel.
    OverlayClick,
    /// Escape key while open.
    Escape,
    /// The panel's close button.
    CloseButton,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Which gestures close the dialog. The close button always does.
pub struct DismissPolicy {
    /// Backdrop clicks close the dialog.
    pub close_on_overlay_click: bool,
    /// Escape closes the dialog.
    pub close_on_escape: bool,
}

impl Default for DismissPolicy {
    fn default() -> Self {
        DialogDefaults::default().into()
    }
}

impl From<DialogDefaults> for DismissPolicy {
    fn from(defaults: DialogDefaults) -> Self {
        Self {
            close_on_overlay_click: defaults.close_on_overlay_click,
            close_on_escape: defaults.close_on_escape,
        }
    }
}

impl DismissPolicy {
    /// Applies explicit per-dialog overrides on top of configured defaults.
    pub fn resolve(
        defaults: DialogDefaults,
        close_on_overlay_click: Option<bool>,
        close_on_escape: Option<bool>,
    ) -> Self {
        let base = Self::from(defaults);
        Self {
            close_on_overlay_click: close_on_overlay_click.unwrap_or(base.close_on_overlay_click),
            close_on_escape: close_on_escape.unwrap_or(base.close_on_escape),
        }
    }

    /// Whether `trigger` should close an open dialog.
    pub fn permits(self, trigger: DismissTrigger) -> bool {
        match trigger {
            DismissTrigger::OverlayClick => self.close_on_overlay_click,
            DismissTrigger::Escape => self.close_on_escape,
            DismissTrigger::CloseButton => true,
        }
    }
}

/// Holds the scroll lock for exactly as long as the dialog is open.
struct ScrollSession<H: ScrollHost> {
    lock: Rc<ScrollLock<H>>,
    guard: Option<ScrollLockGuard<H>>,
}

impl<H: ScrollHost> ScrollSession<H> {
    fn new(lock: Rc<ScrollLock<H>>) -> Self {
        Self { lock, guard: None }
    }

    fn sync(&mut self, open: bool) {
        match (open, self.guard.is_some()) {
            (true, false) => match self.lock.acquire() {
                Ok(guard) => self.guard = Some(guard),
                Err(err) => logging::warn!("dialog opened without scroll lock: {err}"),
            },
            (false, true) => self.guard = None,
            _ => {}
        }
    }
}

#[component]
/// Modal dialog rendered only while `open` is true.
///
/// The caller owns visibility: the dialog reports dismiss gestures through
/// `on_close` and expects the caller to flip `open`. While open it suppresses
/// page scroll and, if enabled, listens for Escape; both are released when it
/// closes or unmounts.
pub fn Dialog(
    #[prop(into)] open: MaybeSignal<bool>,
    on_close: Callback<()>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] description: Option<String>,
    #[prop(default = DialogSize::Md)] size: DialogSize,
    /// Overrides [`crate::UiConfig`]'s `dialog.close_on_overlay_click`.
    #[prop(optional)]
    close_on_overlay_click: Option<bool>,
    /// Overrides [`crate::UiConfig`]'s `dialog.close_on_escape`.
    #[prop(optional)]
    close_on_escape: Option<bool>,
    #[prop(optional, into)] class: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let config = use_ui_config();
    let policy = DismissPolicy::resolve(config.dialog, close_on_overlay_click, close_on_escape);
    let dialog_id = next_widget_id(&config.id_prefix);
    let title_id = title.as_ref().map(|_| format!("{dialog_id}-title"));
    let description_id = description.as_ref().map(|_| format!("{dialog_id}-description"));

    let dismiss = move |trigger: DismissTrigger| {
        if open.get_untracked() && policy.permits(trigger) {
            on_close.call(());
        }
    };

    let scroll = store_value(ScrollSession::new(use_scroll_lock()));
    let escape = store_value(None::<KeyListener>);

    create_effect(move |_| {
        let is_open = open.get();
        scroll.update_value(|session| session.sync(is_open));
        escape.update_value(|listener| {
            if !(is_open && policy.close_on_escape) {
                *listener = None;
            } else if listener.is_none() {
                *listener = Some(KeyListener::on_key(ESCAPE_KEY, move |_| {
                    dismiss(DismissTrigger::Escape)
                }));
            }
        });
    });

    on_cleanup(move || {
        scroll.try_update_value(|session| session.sync(false));
        escape.try_update_value(|listener| *listener = None);
    });

    let panel_class = dialog_panel_classes(size, class.as_deref());
    let header = store_value((title, description));

    view! {
        <Show when=move || open.get() fallback=|| ()>
            <div
                class="fixed inset-0 z-50 flex items-center justify-center"
                data-ui-kind="dialog"
                data-ui-size=size.token()
                on:click=move |_| dismiss(DismissTrigger::OverlayClick)
            >
                <div class="fixed inset-0 bg-black/50 backdrop-blur-sm" aria-hidden="true"></div>
                <div
                    id=dialog_id.clone()
                    class=panel_class.clone()
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby=title_id.clone()
                    aria-describedby=description_id.clone()
                    data-ui-slot="panel"
                    on:click=|ev: MouseEvent| ev.stop_propagation()
                >
                    <button
                        type="button"
                        class="absolute right-4 top-4 rounded-sm opacity-70 hover:opacity-100 focus:outline-none focus:ring-2 focus:ring-offset-2"
                        aria-label="Close dialog"
                        on:click=move |_| dismiss(DismissTrigger::CloseButton)
                    >
                        <Icon icon=IconName::Close />
                    </button>
                    {header.with_value(|(title, description)| {
                        dialog_header_view(title.clone(), description.clone(), title_id.clone(), description_id.clone())
                    })}
                    <div class="px-6 py-4" data-ui-slot="body">{children()}</div>
                </div>
            </div>
        </Show>
    }
}

fn dialog_header_view(
    title: Option<String>,
    description: Option<String>,
    title_id: Option<String>,
    description_id: Option<String>,
) -> Option<View> {
    if title.is_none() && description.is_none() {
        return None;
    }
    Some(
        view! {
            <div class="px-6 pt-6 pb-4" data-ui-slot="header">
                {title.map(|title| view! { <h2 id=title_id class="text-2xl font-semibold mb-2">{title}</h2> })}
                {description.map(|description| view! {
                    <p id=description_id class="text-sm text-gray-500">{description}</p>
                })}
            </div>
        }
        .into_view(),
    )
}

#[component]
/// Title/description stack for custom dialog bodies.
pub fn DialogHeader(#[prop(optional, into)] class: Option<String>, children: Children) -> impl IntoView {
    view! {
        <div class=compose_classes(["flex flex-col space-y-1.5", extra_class(&class)])>{children()}</div>
    }
}

#[component]
/// Dialog heading (`h2`).
pub fn DialogTitle(#[prop(optional, into)] class: Option<String>, children: Children) -> impl IntoView {
    view! {
        <h2 class=compose_classes(["text-2xl font-semibold leading-none tracking-tight", extra_class(&class)])>
            {children()}
        </h2>
    }
}

#[component]
/// Muted copy under a dialog title.
pub fn DialogDescription(
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <p class=compose_classes(["text-sm text-gray-500", extra_class(&class)])>{children()}</p>
    }
}

#[component]
/// Action row; stacks on small screens and right-aligns from `sm` up.
pub fn DialogFooter(#[prop(optional, into)] class: Option<String>, children: Children) -> impl IntoView {
    view! {
        <div class=compose_classes([
            "flex flex-col-reverse sm:flex-row sm:justify-end sm:space-x-2 pt-4",
            extra_class(&class),
        ])>
            {children()}
        </div>
    }
}
