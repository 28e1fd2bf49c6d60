use std::time::Duration;

use leptos::leptos_dom::helpers::TimeoutHandle;
use serde::{Deserialize, Serialize};

use super::*;

const TOAST_BASE: &str = "pointer-events-auto relative flex w-full items-start gap-3 overflow-hidden rounded-lg border p-4 pr-8 shadow-lg";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Toast tone.
pub enum ToastVariant {
    /// Neutral notice.
    #[default]
    Default,
    /// Completed action.
    Success,
    /// Failure; announced assertively.
    Error,
    /// Needs attention.
    Warning,
    /// Informational.
    Info,
}

impl ToastVariant {
    fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Self::Default => "bg-white border-gray-200 text-gray-900",
            Self::Success => "bg-green-50 border-green-200 text-green-900",
            Self::Error => "bg-red-50 border-red-200 text-red-900",
            Self::Warning => "bg-yellow-50 border-yellow-200 text-yellow-900",
            Self::Info => "bg-blue-50 border-blue-200 text-blue-900",
        }
    }

    fn icon(self) -> Option<IconName> {
        match self {
            Self::Default => None,
            Self::Success => Some(IconName::Check),
            Self::Error => Some(IconName::Error),
            Self::Warning => Some(IconName::Warning),
            Self::Info => Some(IconName::Info),
        }
    }

    /// ARIA role: errors interrupt, everything else is polite.
    pub fn role(self) -> &'static str {
        match self {
            Self::Error => "alert",
            _ => "status",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Viewport anchor on screen.
pub enum ToastPosition {
    /// Top-right corner.
    #[default]
    TopRight,
    /// Top-left corner.
    TopLeft,
    /// Top edge, centered.
    TopCenter,
    /// Bottom-right corner.
    BottomRight,
    /// Bottom-left corner.
    BottomLeft,
    /// Bottom edge, centered.
    BottomCenter,
}

impl ToastPosition {
    fn token(self) -> &'static str {
        match self {
            Self::TopRight => "top-right",
            Self::TopLeft => "top-left",
            Self::TopCenter => "top-center",
            Self::BottomRight => "bottom-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomCenter => "bottom-center",
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Self::TopRight => "top-0 right-0",
            Self::TopLeft => "top-0 left-0",
            Self::TopCenter => "top-0 left-1/2 -translate-x-1/2",
            Self::BottomRight => "bottom-0 right-0",
            Self::BottomLeft => "bottom-0 left-0",
            Self::BottomCenter => "bottom-0 left-1/2 -translate-x-1/2",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// How long a toast stays up before dismissing itself.
pub enum ToastDuration {
    /// Use [`crate::UiConfig`]'s `toast.duration_ms`.
    #[default]
    Configured,
    /// Dismiss after this many milliseconds.
    Millis(u64),
    /// Stay until dismissed.
    Sticky,
}

impl ToastDuration {
    /// Effective delay given the configured default.
    pub fn resolve(self, configured: Option<u64>) -> Option<Duration> {
        let millis = match self {
            Self::Configured => configured,
            Self::Millis(millis) => Some(millis),
            Self::Sticky => None,
        };
        millis.map(Duration::from_millis)
    }
}

/// Class list for one toast.
pub fn toast_classes(variant: ToastVariant, extra: Option<&str>) -> String {
    compose_classes([TOAST_BASE, variant.classes(), extra.unwrap_or("")])
}

/// Pending auto-dismiss; cleared on drop.
struct DismissTimer(Option<TimeoutHandle>);

impl DismissTimer {
    fn start(delay: Option<Duration>, on_elapsed: impl FnOnce() + 'static) -> Self {
        let Some(delay) = delay else {
            return Self(None);
        };
        match set_timeout_with_handle(on_elapsed, delay) {
            Ok(handle) => Self(Some(handle)),
            Err(err) => {
                logging::warn!("toast timer not started: {}", crate::js_message(&err));
                Self(None)
            }
        }
    }
}

impl Drop for DismissTimer {
    fn drop(&mut self) {
        if let Some(handle) = self.0.take() {
            handle.clear();
        }
    }
}

#[component]
/// Single notification.
///
/// Empty `title`/`description` are not rendered. With `on_dismiss` set, a
/// close button is shown and the toast dismisses itself after `duration`.
pub fn Toast(
    #[prop(optional, into)] title: String,
    #[prop(optional, into)] description: String,
    #[prop(optional)] variant: ToastVariant,
    #[prop(optional)] duration: ToastDuration,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
    #[prop(optional, into)] class: Option<String>,
    /// Extra content such as an action button.
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let config = use_ui_config();
    if let Some(on_dismiss) = on_dismiss {
        let delay = duration.resolve(config.toast.duration_ms);
        let timer = store_value(DismissTimer::start(delay, move || on_dismiss.call(())));
        on_cleanup(move || {
            timer.try_update_value(|timer| *timer = DismissTimer(None));
        });
    }

    let title = (!title.is_empty()).then(|| view! { <div class="text-sm font-semibold">{title}</div> });
    let description =
        (!description.is_empty()).then(|| view! { <div class="text-sm opacity-90">{description}</div> });

    view! {
        <div
            class=toast_classes(variant, class.as_deref())
            role=variant.role()
            data-ui-kind="toast"
            data-ui-variant=variant.token()
        >
            {variant.icon().map(|icon| view! { <Icon icon=icon size=IconSize::Md /> })}
            <div class="grid gap-1">
                {title}
                {description}
                {children.map(|children| children())}
            </div>
            {on_dismiss.map(|on_dismiss| view! {
                <button
                    type="button"
                    class="absolute right-2 top-2 rounded-md p-1 opacity-60 hover:opacity-100 focus:outline-none focus:ring-2"
                    aria-label="Dismiss notification"
                    on:click=move |_| on_dismiss.call(())
                >
                    <Icon icon=IconName::Close />
                </button>
            })}
        </div>
    }
}

#[component]
/// Fixed live region that stacks toasts at `position`.
pub fn ToastContainer(
    /// Defaults to [`crate::UiConfig`]'s `toast.position`.
    #[prop(optional, into)]
    position: Option<MaybeSignal<ToastPosition>>,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let position = position.unwrap_or_else(|| use_ui_config().toast.position.into());
    view! {
        <div
            class=move || {
                compose_classes([
                    "fixed z-[100] flex max-h-screen w-full flex-col gap-2 p-4 sm:max-w-[420px] pointer-events-none",
                    position.get().classes(),
                    extra_class(&class),
                ])
            }
            aria-live="polite"
            data-ui-kind="toast-container"
            data-ui-position=move || position.get().token()
        >
            {children()}
        </div>
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One queued notification.
pub struct ToastRecord {
    /// Queue-assigned id; zero until pushed.
    pub id: u64,
    /// Heading; empty to omit.
    pub title: String,
    /// Body copy; empty to omit.
    pub description: String,
    /// Tone.
    pub variant: ToastVariant,
    /// Auto-dismiss behavior.
    pub duration: ToastDuration,
}

impl ToastRecord {
    /// Toast with a title and default tone and duration.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: 0,
            title: title.into(),
            description: String::new(),
            variant: ToastVariant::default(),
            duration: ToastDuration::default(),
        }
    }

    /// Sets the body copy.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the tone.
    pub fn variant(mut self, variant: ToastVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Sets the auto-dismiss behavior.
    pub fn duration(mut self, duration: ToastDuration) -> Self {
        self.duration = duration;
        self
    }
}

/// Reactive list of live toasts, oldest first.
#[derive(Clone, Copy)]
pub struct ToastQueue {
    records: RwSignal<Vec<ToastRecord>>,
    next_id: StoredValue<u64>,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastQueue {
    /// Empty queue owned by the current reactive scope.
    pub fn new() -> Self {
        Self {
            records: create_rw_signal(Vec::new()),
            next_id: store_value(1),
        }
    }

    /// Appends `record` and returns its assigned id.
    pub fn push(&self, mut record: ToastRecord) -> u64 {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        record.id = id;
        self.records.update(|records| records.push(record));
        id
    }

    /// Removes the toast with `id`. Returns whether it was present.
    pub fn dismiss(&self, id: u64) -> bool {
        let present = self
            .records
            .with_untracked(|records| records.iter().any(|record| record.id == id));
        if present {
            self.records.update(|records| records.retain(|record| record.id != id));
        }
        present
    }

    /// Removes every toast.
    pub fn clear(&self) {
        self.records.update(Vec::clear);
    }

    /// Live records, tracked.
    pub fn records(&self) -> Vec<ToastRecord> {
        self.records.get()
    }

    /// Number of live toasts, tracked.
    pub fn len(&self) -> usize {
        self.records.with(Vec::len)
    }

    /// Whether no toast is live, tracked.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Creates a queue and provides it to descendants.
pub fn provide_toast_queue() -> ToastQueue {
    let queue = ToastQueue::new();
    provide_context(queue);
    queue
}

/// The nearest provided queue, if any.
pub fn use_toast_queue() -> Option<ToastQueue> {
    use_context::<ToastQueue>()
}

#[component]
/// Renders a [`ToastQueue`] inside a [`ToastContainer`].
///
/// Uses `queue` when given, otherwise the queue from context.
pub fn ToastViewport(
    #[prop(optional)] queue: Option<ToastQueue>,
    /// Follows a signal without remounting the viewport.
    #[prop(optional, into)]
    position: Option<MaybeSignal<ToastPosition>>,
) -> impl IntoView {
    let Some(queue) = queue.or_else(use_toast_queue) else {
        logging::warn!("ToastViewport has no queue; call provide_toast_queue() above it");
        return ().into_view();
    };

    view! {
        <ToastContainer position=position.unwrap_or_else(|| use_ui_config().toast.position.into())>
            <For each=move || queue.records() key=|record| record.id let:record>
                <Toast
                    title=record.title
                    description=record.description
                    variant=record.variant
                    duration=record.duration
                    on_dismiss=Callback::new(move |_| {
                        queue.dismiss(record.id);
                    })
                />
            </For>
        </ToastContainer>
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn queue_assigns_increasing_ids() {
        let _ = leptos::create_runtime();
        let queue = ToastQueue::new();
        let first = queue.push(ToastRecord::new("Saved"));
        let second = queue.push(ToastRecord::new("Synced").variant(ToastVariant::Success));

        assert!(second > first);
        let records = queue.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].id, second);
        assert_eq!(records[1].variant, ToastVariant::Success);
    }

    #[test]
    fn dismiss_removes_only_the_target() {
        let _ = leptos::create_runtime();
        let queue = ToastQueue::new();
        let keep = queue.push(ToastRecord::new("keep"));
        let drop_id = queue.push(ToastRecord::new("drop"));

        assert!(queue.dismiss(drop_id));
        assert!(!queue.dismiss(drop_id));
        assert_eq!(
            queue.records().iter().map(|record| record.id).collect::<Vec<_>>(),
            vec![keep]
        );
    }

    #[test]
    fn clear_empties_queue_and_ids_keep_growing() {
        let _ = leptos::create_runtime();
        let queue = ToastQueue::new();
        let before = queue.push(ToastRecord::new("one"));
        queue.clear();
        assert!(queue.is_empty());
        assert!(queue.push(ToastRecord::new("two")) > before);
    }

    #[test]
    fn duration_resolution_uses_config_only_when_asked() {
        let configured = Some(5_000);
        assert_eq!(
            ToastDuration::Configured.resolve(configured),
            Some(Duration::from_millis(5_000))
        );
        assert_eq!(ToastDuration::Configured.resolve(None), None);
        assert_eq!(
            ToastDuration::Millis(250).resolve(configured),
            Some(Duration::from_millis(250))
        );
        assert_eq!(ToastDuration::Sticky.resolve(configured), None);
    }

    #[test]
    fn error_toasts_are_alerts() {
        assert_eq!(ToastVariant::Error.role(), "alert");
        assert_eq!(ToastVariant::Success.role(), "status");
    }

    #[test]
    fn position_serializes_kebab_case() {
        let json = serde_json::to_string(&ToastPosition::BottomCenter).expect("serialize");
        assert_eq!(json, "\"bottom-center\"");
        assert_eq!(ToastPosition::default(), ToastPosition::TopRight);
    }

    #[test]
    fn classes_follow_variant() {
        let classes = toast_classes(ToastVariant::Warning, Some("w-80"));
        assert!(classes.contains("bg-yellow-50"));
        assert!(classes.ends_with("w-80"));
    }

    #[test]
    fn container_follows_position_signal() {
        let html = leptos::ssr::render_to_string(|| {
            let position = create_rw_signal(ToastPosition::TopLeft);
            position.set(ToastPosition::BottomCenter);
            view! {
                <ToastContainer position=Signal::derive(move || position.get())>
                    <span>"slot"</span>
                </ToastContainer>
            }
        })
        .to_string();

        assert!(html.contains(r#"data-ui-position="bottom-center""#));
        assert!(html.contains("bottom-0 left-1/2 -translate-x-1/2"));
        assert!(!html.contains("top-0 left-0"));
    }

    #[test]
    fn container_without_position_uses_configured_default() {
        let html = leptos::ssr::render_to_string(|| {
            view! { <ToastContainer><span>"slot"</span></ToastContainer> }
        })
        .to_string();

        assert!(html.contains(r#"data-ui-position="top-right""#));
    }

    #[test]
    fn viewport_renders_queued_records_at_signal_position() {
        let html = leptos::ssr::render_to_string(|| {
            let queue = ToastQueue::new();
            queue.push(ToastRecord::new("Saved").duration(ToastDuration::Sticky));
            queue.push(
                ToastRecord::new("Sync failed")
                    .variant(ToastVariant::Error)
                    .duration(ToastDuration::Sticky),
            );
            let position = create_rw_signal(ToastPosition::BottomLeft);
            view! { <ToastViewport queue=queue position=Signal::derive(move || position.get()) /> }
        })
        .to_string();

        assert_eq!(html.matches(r#"data-ui-kind="toast-container""#).count(), 1);
        assert!(html.contains(r#"data-ui-position="bottom-left""#));
        assert!(html.contains("Saved"));
        assert!(html.contains("Sync failed"));
    }
}
