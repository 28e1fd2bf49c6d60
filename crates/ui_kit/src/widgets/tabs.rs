use super::*;

const TRIGGER_BASE: &str = "inline-flex items-center justify-center whitespace-nowrap rounded-md px-3 py-1.5 text-sm font-medium transition-all focus:outline-none focus:ring-2 focus:ring-blue-500 focus:ring-offset-2 disabled:pointer-events-none disabled:opacity-50";
const TRIGGER_ACTIVE: &str = "bg-white text-gray-900 shadow-sm";
const TRIGGER_INACTIVE: &str = "text-gray-600 hover:text-gray-900";

/// Class list for a tab trigger.
pub fn tabs_trigger_classes(active: bool, extra: Option<&str>) -> String {
    let state = if active { TRIGGER_ACTIVE } else { TRIGGER_INACTIVE };
    compose_classes([TRIGGER_BASE, state, extra.unwrap_or("")])
}

#[derive(Clone, Copy)]
enum SelectionSource {
    Controlled(Signal<String>),
    Uncontrolled(RwSignal<String>),
}

/// Selected-tab handle shared by a tabs instance and its parts.
///
/// Whether the caller or the widget owns the selection is decided once, at
/// construction, and never changes afterwards.
#[derive(Clone, Copy)]
pub struct TabsSelection {
    source: SelectionSource,
    on_change: Option<Callback<String>>,
    id: StoredValue<String>,
}

impl TabsSelection {
    /// Controlled when `value` is supplied; otherwise owns a signal seeded
    /// from `default_value` (empty when absent).
    pub fn resolve(
        id: impl Into<String>,
        value: Option<MaybeSignal<String>>,
        default_value: Option<String>,
        on_change: Option<Callback<String>>,
    ) -> Self {
        let source = match value {
            Some(value) => SelectionSource::Controlled(Signal::derive(move || value.get())),
            None => SelectionSource::Uncontrolled(create_rw_signal(default_value.unwrap_or_default())),
        };
        Self {
            source,
            on_change,
            id: store_value(id.into()),
        }
    }

    /// Whether the caller owns the selection.
    pub fn is_controlled(&self) -> bool {
        matches!(self.source, SelectionSource::Controlled(_))
    }

    /// Current tag, tracked.
    pub fn current(&self) -> String {
        match self.source {
            SelectionSource::Controlled(value) => value.get(),
            SelectionSource::Uncontrolled(value) => value.get(),
        }
    }

    /// Current tag, untracked.
    pub fn current_untracked(&self) -> String {
        match self.source {
            SelectionSource::Controlled(value) => value.get_untracked(),
            SelectionSource::Uncontrolled(value) => value.get_untracked(),
        }
    }

    /// Whether `tag` is selected, tracked.
    pub fn is_active(&self, tag: &str) -> bool {
        match self.source {
            SelectionSource::Controlled(value) => value.with(|current| current == tag),
            SelectionSource::Uncontrolled(value) => value.with(|current| current == tag),
        }
    }

    /// Requests `tag`. Uncontrolled selections switch immediately; both modes
    /// notify `on_change`.
    pub fn select(&self, tag: impl Into<String>) {
        let tag = tag.into();
        if let SelectionSource::Uncontrolled(value) = self.source {
            value.set(tag.clone());
        }
        if let Some(on_change) = self.on_change {
            on_change.call(tag);
        }
    }

    /// Selects `tag` unless its trigger is disabled. Returns whether a
    /// request was made.
    pub fn activate(&self, tag: &str, disabled: bool) -> bool {
        if disabled {
            return false;
        }
        self.select(tag);
        true
    }

    /// Id of the trigger for `tag`.
    pub fn trigger_id(&self, tag: &str) -> String {
        self.id.with_value(|id| format!("{id}-trigger-{tag}"))
    }

    /// Id of the panel for `tag`.
    pub fn panel_id(&self, tag: &str) -> String {
        self.id.with_value(|id| format!("{id}-content-{tag}"))
    }
}

fn tabs_id(id: Option<String>) -> String {
    id.filter(|id| !id.is_empty())
        .unwrap_or_else(|| next_widget_id(&use_ui_config().id_prefix))
}

#[component]
/// Tabs root for hand-assembled layouts.
///
/// Children receive the selection (`let:tabs`) and any [`TabsList`],
/// [`TabsTrigger`] or [`TabsContent`] beneath it reads the same selection
/// from context.
pub fn Tabs<F, IV>(
    /// Caller-owned selection. Supplying it makes the tabs controlled.
    #[prop(optional, into)]
    value: Option<MaybeSignal<String>>,
    /// Initial tag for uncontrolled tabs.
    #[prop(optional, into)]
    default_value: Option<String>,
    #[prop(optional)] on_value_change: Option<Callback<String>>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] class: Option<String>,
    children: F,
) -> impl IntoView
where
    F: Fn(TabsSelection) -> IV + 'static,
    IV: IntoView,
{
    let selection = TabsSelection::resolve(tabs_id(id), value, default_value, on_value_change);
    provide_context(selection);

    view! {
        <div class=compose_classes(["w-full", extra_class(&class)]) data-ui-kind="tabs">
            {children(selection)}
        </div>
    }
}

#[component]
/// Row of tab triggers.
pub fn TabsList(#[prop(optional, into)] class: Option<String>, children: Children) -> impl IntoView {
    view! {
        <div
            role="tablist"
            class=compose_classes([
                "inline-flex h-10 items-center justify-center rounded-md bg-gray-100 p-1 text-gray-500",
                extra_class(&class),
            ])
        >
            {children()}
        </div>
    }
}

fn trigger_view(
    tabs: TabsSelection,
    tag: String,
    disabled: bool,
    class: Option<String>,
    label: View,
) -> View {
    let trigger_id = tabs.trigger_id(&tag);
    let panel_id = tabs.panel_id(&tag);
    let tag = store_value(tag);
    let active = move || tag.with_value(|tag| tabs.is_active(tag));

    view! {
        <button
            type="button"
            role="tab"
            id=trigger_id
            aria-controls=panel_id
            aria-selected=move || bool_token(active())
            data-state=move || if active() { "active" } else { "inactive" }
            disabled=disabled
            class=move || tabs_trigger_classes(active(), class.as_deref())
            on:click=move |_| {
                tag.with_value(|tag| tabs.activate(tag, disabled));
            }
        >
            {label}
        </button>
    }
    .into_view()
}

fn panel_view(tabs: TabsSelection, tag: &str, class: Option<&str>, content: View) -> View {
    view! {
        <div
            role="tabpanel"
            id=tabs.panel_id(tag)
            aria-labelledby=tabs.trigger_id(tag)
            tabindex="0"
            class=compose_classes([
                "mt-2 focus:outline-none focus:ring-2 focus:ring-blue-500 focus:ring-offset-2",
                class.unwrap_or(""),
            ])
        >
            {content}
        </div>
    }
    .into_view()
}

fn missing_tabs(part: &str) -> View {
    logging::warn!("{part} rendered outside <Tabs>; nothing to select");
    ().into_view()
}

#[component]
/// Trigger that selects `value`. Must sit under [`Tabs`].
pub fn TabsTrigger(
    #[prop(into)] value: String,
    #[prop(optional)] disabled: bool,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let Some(tabs) = use_context::<TabsSelection>() else {
        return missing_tabs("TabsTrigger");
    };
    trigger_view(tabs, value, disabled, class, children().into_view())
}

#[component]
/// Panel shown only while `value` is selected. Must sit under [`Tabs`].
pub fn TabsContent(
    #[prop(into)] value: String,
    #[prop(optional, into)] class: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let Some(tabs) = use_context::<TabsSelection>() else {
        return missing_tabs("TabsContent");
    };
    let tag = store_value(value);
    let class = store_value(class);

    view! {
        <Show when=move || tag.with_value(|tag| tabs.is_active(tag)) fallback=|| ()>
            {tag.with_value(|tag| {
                class.with_value(|class| panel_view(tabs, tag, class.as_deref(), children().into_view()))
            })}
        </Show>
    }
    .into_view()
}

/// One entry of a [`TabSet`].
#[derive(Clone)]
pub struct TabItem {
    /// Selection tag.
    pub value: String,
    /// Trigger text.
    pub label: String,
    /// Trigger cannot be selected.
    pub disabled: bool,
    /// Panel body, built each time the tab becomes active.
    pub content: ViewFn,
}

impl TabItem {
    /// Enabled tab.
    pub fn new(value: impl Into<String>, label: impl Into<String>, content: impl Into<ViewFn>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
            content: content.into(),
        }
    }

    /// Marks the trigger disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// Index of the item whose tag equals `current`.
pub fn active_item(items: &[TabItem], current: &str) -> Option<usize> {
    items.iter().position(|item| item.value == current)
}

fn first_enabled(items: &[TabItem]) -> Option<String> {
    items.iter().find(|item| !item.disabled).map(|item| item.value.clone())
}

#[component]
/// Tabs built from a list of [`TabItem`]s.
///
/// Renders one trigger per item and the single panel matching the current
/// selection; a selection that matches no item renders no panel. Uncontrolled
/// sets without a `default_value` start on the first enabled item.
pub fn TabSet(
    items: Vec<TabItem>,
    #[prop(optional, into)] value: Option<MaybeSignal<String>>,
    #[prop(optional, into)] default_value: Option<String>,
    #[prop(optional)] on_value_change: Option<Callback<String>>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let default_value = default_value.or_else(|| first_enabled(&items));
    let tabs = TabsSelection::resolve(tabs_id(id), value, default_value, on_value_change);
    provide_context(tabs);

    let triggers = items
        .iter()
        .map(|item| {
            trigger_view(
                tabs,
                item.value.clone(),
                item.disabled,
                None,
                item.label.clone().into_view(),
            )
        })
        .collect_view();
    let items = store_value(items);

    view! {
        <div class=compose_classes(["w-full", extra_class(&class)]) data-ui-kind="tabs">
            <TabsList>{triggers}</TabsList>
            {move || {
                let current = tabs.current();
                items.with_value(|items| {
                    active_item(items, &current).map(|index| {
                        let item = &items[index];
                        panel_view(tabs, &item.value, None, item.content.run())
                    })
                })
            }}
        </div>
    }
}
