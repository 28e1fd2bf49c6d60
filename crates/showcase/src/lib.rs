//! Browser showcase for the `ui_kit` widget set.
//!
//! Renders every widget family with its variants so visual and accessibility
//! changes can be reviewed in one page. A few demo choices persist to
//! `localStorage` between reloads.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod prefs;

use leptos::*;
use leptos_meta::*;
use ui_kit::prelude::*;

pub use prefs::{LocalPrefs, ShowcaseState, STATE_KEY};

const SHOWCASE_CONFIG: &str = r#"{
    "id_prefix": "showcase",
    "toast": { "duration_ms": 4000 }
}"#;

fn showcase_config() -> UiConfig {
    UiConfig::from_json(SHOWCASE_CONFIG).unwrap_or_else(|err| {
        logging::warn!("showcase config rejected, using defaults: {err}");
        UiConfig::default()
    })
}

fn plan_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("starter", "Starter"),
        SelectOption::new("team", "Team"),
        SelectOption::disabled("enterprise", "Enterprise (contact sales)"),
    ]
}

fn email_error(email: &str) -> Option<String> {
    if email.is_empty() || email.contains('@') {
        None
    } else {
        Some("Enter a valid email address".to_string())
    }
}

#[component]
/// Showcase page root.
pub fn ShowcaseApp() -> impl IntoView {
    provide_meta_context();
    provide_ui_config(showcase_config());
    let toasts = provide_toast_queue();

    let prefs = LocalPrefs;
    let state = create_rw_signal(prefs.load_typed::<ShowcaseState>(STATE_KEY).unwrap_or_default());
    let last_saved = create_rw_signal::<Option<String>>(None);

    create_effect(move |_| {
        let snapshot = state.get();
        let serialized = match serde_json::to_string(&snapshot) {
            Ok(serialized) => serialized,
            Err(err) => {
                logging::warn!("showcase serialize failed: {err}");
                return;
            }
        };

        if last_saved.get_untracked().as_deref() == Some(serialized.as_str()) {
            return;
        }
        if let Err(err) = prefs.save_json(STATE_KEY, &serialized) {
            logging::warn!("showcase state not saved: {err}");
        }
        last_saved.set(Some(serialized));
    });

    let toast_position = create_memo(move |_| state.with(|state| state.toast_position));

    view! {
        <Title text="ui_kit showcase" />
        <main class="mx-auto max-w-4xl space-y-8 p-8">
            <header class="space-y-2">
                <h1 class="text-3xl font-bold">"ui_kit"</h1>
                <p class="text-gray-500">"Accessible Leptos primitives."</p>
            </header>
            <ButtonsSection />
            <BadgesSection />
            <FormSection state=state />
            <DialogSection state=state />
            <TabsSection state=state />
            <SkeletonSection />
            <ToastSection state=state toasts=toasts />
        </main>
        <ToastViewport queue=toasts position=toast_position />
    }
}

#[component]
fn Section(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <Card variant=CardVariant::Outlined>
            <CardHeader>
                <CardTitle>{title}</CardTitle>
            </CardHeader>
            <CardContent class="space-y-4">{children()}</CardContent>
        </Card>
    }
}

#[component]
fn ButtonsSection() -> impl IntoView {
    let saving = create_rw_signal(false);

    view! {
        <Section title="Buttons">
            <div class="flex flex-wrap items-center gap-2">
                <Button>"Primary"</Button>
                <Button variant=ButtonVariant::Secondary>"Secondary"</Button>
                <Button variant=ButtonVariant::Outline>"Outline"</Button>
                <Button variant=ButtonVariant::Ghost>"Ghost"</Button>
                <Button variant=ButtonVariant::Link>"Link"</Button>
            </div>
            <div class="flex flex-wrap items-center gap-2">
                <Button size=ButtonSize::Sm>"Small"</Button>
                <Button size=ButtonSize::Lg>"Large"</Button>
                <Button disabled=true>"Disabled"</Button>
                <Button
                    loading=Signal::derive(move || saving.get())
                    on_click=Callback::new(move |_| saving.update(|saving| *saving = !*saving))
                >
                    {move || if saving.get() { "Saving" } else { "Toggle loading" }}
                </Button>
                <Button aria_label="Close" variant=ButtonVariant::Ghost>
                    <Icon icon=IconName::Close />
                </Button>
            </div>
        </Section>
    }
}

#[component]
fn BadgesSection() -> impl IntoView {
    view! {
        <Section title="Badges and cards">
            <div class="flex flex-wrap gap-2">
                <Badge>"Default"</Badge>
                <Badge variant=BadgeVariant::Primary>"Primary"</Badge>
                <Badge variant=BadgeVariant::Secondary>"Secondary"</Badge>
                <Badge variant=BadgeVariant::Success>"Success"</Badge>
                <Badge variant=BadgeVariant::Warning>"Warning"</Badge>
                <Badge variant=BadgeVariant::Danger>"Danger"</Badge>
                <Badge variant=BadgeVariant::Outline size=BadgeSize::Sm>"Outline"</Badge>
            </div>
            <div class="grid gap-4 sm:grid-cols-3">
                <Card>
                    <CardTitle>"Default"</CardTitle>
                    <CardDescription>"Bordered container."</CardDescription>
                </Card>
                <Card variant=CardVariant::Elevated padding=CardPadding::Lg>
                    <CardTitle>"Elevated"</CardTitle>
                    <CardDescription>"Shadow instead of a border."</CardDescription>
                </Card>
                <Card variant=CardVariant::Outlined padding=CardPadding::None>
                    <CardContent class="p-4">"No padding; content sets its own."</CardContent>
                    <CardFooter class="px-4 pb-4">
                        <Button size=ButtonSize::Sm variant=ButtonVariant::Outline>"Action"</Button>
                    </CardFooter>
                </Card>
            </div>
        </Section>
    }
}

#[component]
fn FormSection(state: RwSignal<ShowcaseState>) -> impl IntoView {
    let email = create_rw_signal(String::new());

    view! {
        <Section title="Form controls">
            <Input
                label="Email"
                input_type="email"
                placeholder="you@example.com"
                autocomplete="email"
                leading_icon=IconName::Info
                full_width=true
                value=Signal::derive(move || email.get())
                error=Signal::derive(move || email.with(|email| email_error(email)))
                helper_text=Some("We only use this for receipts.".to_string())
                on_input=Callback::new(move |value: String| email.set(value))
            />
            <Input label="Disabled" disabled=true value="read only".to_string() />
            <Select
                label="Plan"
                required=true
                placeholder="Choose a plan"
                options=plan_options()
                full_width=true
                value=Signal::derive(move || state.with(|state| state.plan.clone()))
                helper_text=Some("Enterprise is not self-serve.".to_string())
                on_change=Callback::new(move |plan: String| state.update(|state| state.plan = plan))
            />
            <Select label="Empty" options=Vec::new() placeholder="Nothing to pick" />
        </Section>
    }
}

#[component]
fn DialogSection(state: RwSignal<ShowcaseState>) -> impl IntoView {
    let open = create_rw_signal(false);
    let policy = create_memo(move |_| {
        state.with(|state| (state.dialog_overlay_dismiss, state.dialog_escape_dismiss))
    });

    view! {
        <Section title="Dialog">
            <label class="flex items-center gap-2 text-sm">
                <input
                    type="checkbox"
                    prop:checked=move || policy.get().0
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        state.update(|state| state.dialog_overlay_dismiss = checked);
                    }
                />
                "Close on overlay click"
            </label>
            <label class="flex items-center gap-2 text-sm">
                <input
                    type="checkbox"
                    prop:checked=move || policy.get().1
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        state.update(|state| state.dialog_escape_dismiss = checked);
                    }
                />
                "Close on Escape"
            </label>
            <Button on_click=Callback::new(move |_| open.set(true))>"Open dialog"</Button>
            {move || {
                let (overlay, escape) = policy.get();
                view! {
                    <Dialog
                        open=Signal::derive(move || open.get())
                        on_close=Callback::new(move |_| open.set(false))
                        title="Delete project"
                        description="This removes every deployment. It cannot be undone."
                        size=DialogSize::Lg
                        close_on_overlay_click=overlay
                        close_on_escape=escape
                    >
                        <p class="text-sm">"Type the project name to confirm."</p>
                        <DialogFooter>
                            <Button
                                variant=ButtonVariant::Outline
                                on_click=Callback::new(move |_| open.set(false))
                            >
                                "Cancel"
                            </Button>
                            <Button on_click=Callback::new(move |_| open.set(false))>"Delete"</Button>
                        </DialogFooter>
                    </Dialog>
                }
            }}
        </Section>
    }
}

#[component]
fn TabsSection(state: RwSignal<ShowcaseState>) -> impl IntoView {
    let items = vec![
        TabItem::new("preview", "Preview", || view! { <p>"Rendered output."</p> }),
        TabItem::new("code", "Code", || view! { <pre class="text-xs">"<TabSet items=... />"</pre> }),
        TabItem::new("history", "History", || view! { <p>"No revisions yet."</p> }).disabled(),
    ];

    view! {
        <Section title="Tabs">
            <Tabs
                value=Signal::derive(move || state.with(|state| state.controlled_tab.clone()))
                on_value_change=Callback::new(move |tab: String| {
                    state.update(|state| state.controlled_tab = tab);
                })
                let:tabs
            >
                <TabsList>
                    <TabsTrigger value="overview">"Overview"</TabsTrigger>
                    <TabsTrigger value="usage">"Usage"</TabsTrigger>
                    <TabsTrigger value="billing" disabled=true>"Billing"</TabsTrigger>
                </TabsList>
                <TabsContent value="overview">"Controlled: the page state owns the selection."</TabsContent>
                <TabsContent value="usage">"Usage numbers would go here."</TabsContent>
                <p class="mt-2 text-xs text-gray-500">{move || format!("Selected: {}", tabs.current())}</p>
            </Tabs>
            <Tabs default_value="one" let:_tabs>
                <TabsList>
                    <TabsTrigger value="one">"One"</TabsTrigger>
                    <TabsTrigger value="two">"Two"</TabsTrigger>
                </TabsList>
                <TabsContent value="one">"Uncontrolled: the widget owns the selection."</TabsContent>
                <TabsContent value="two">"Second panel."</TabsContent>
            </Tabs>
            <TabSet items=items />
        </Section>
    }
}

#[component]
fn SkeletonSection() -> impl IntoView {
    view! {
        <Section title="Skeletons">
            <div class="flex items-center gap-4">
                <Skeleton variant=SkeletonVariant::Circular width=48 />
                <div class="flex-1 space-y-2">
                    <Skeleton />
                    <Skeleton width="60%" animation=SkeletonAnimation::Wave />
                </div>
            </div>
            <Skeleton variant=SkeletonVariant::Rectangular height=120 animation=SkeletonAnimation::None />
        </Section>
    }
}

#[component]
fn ToastSection(state: RwSignal<ShowcaseState>, toasts: ToastQueue) -> impl IntoView {
    let push = move |variant: ToastVariant, title: &str| {
        toasts.push(
            ToastRecord::new(title)
                .description("Queued from the showcase.")
                .variant(variant),
        );
    };
    let positions = [
        ToastPosition::TopRight,
        ToastPosition::TopLeft,
        ToastPosition::TopCenter,
        ToastPosition::BottomRight,
        ToastPosition::BottomLeft,
        ToastPosition::BottomCenter,
    ];

    view! {
        <Section title="Toasts">
            <div class="flex flex-wrap gap-2">
                <Button on_click=Callback::new(move |_| push(ToastVariant::Default, "Saved"))>"Default"</Button>
                <Button
                    variant=ButtonVariant::Secondary
                    on_click=Callback::new(move |_| push(ToastVariant::Success, "Deployed"))
                >
                    "Success"
                </Button>
                <Button
                    variant=ButtonVariant::Outline
                    on_click=Callback::new(move |_| push(ToastVariant::Error, "Build failed"))
                >
                    "Error"
                </Button>
                <Button
                    variant=ButtonVariant::Ghost
                    on_click=Callback::new(move |_| {
                        toasts.push(
                            ToastRecord::new("Sticky notice")
                                .variant(ToastVariant::Info)
                                .duration(ToastDuration::Sticky),
                        );
                    })
                >
                    "Sticky"
                </Button>
                <Button variant=ButtonVariant::Link on_click=Callback::new(move |_| toasts.clear())>
                    "Clear all"
                </Button>
            </div>
            <div class="flex flex-wrap gap-2">
                {positions
                    .into_iter()
                    .map(|position| {
                        let label = format!("{position:?}");
                        view! {
                            <Button
                                size=ButtonSize::Sm
                                variant=ButtonVariant::Outline
                                on_click=Callback::new(move |_| state.update(|state| state.toast_position = position))
                            >
                                {label}
                            </Button>
                        }
                    })
                    .collect_view()}
            </div>
            <Toast
                title="Inline toast"
                description="Static, without a dismiss handler."
                variant=ToastVariant::Warning
            />
        </Section>
    }
}

/// Mounts [`ShowcaseApp`] to the document body.
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <ShowcaseApp /> })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn embedded_config_parses() {
        let config = showcase_config();
        assert_eq!(config.id_prefix, "showcase");
        assert_eq!(config.toast.duration_ms, Some(4000));
        assert!(config.dialog.close_on_escape);
    }

    #[test]
    fn email_error_only_for_non_empty_invalid_input() {
        assert_eq!(email_error(""), None);
        assert_eq!(email_error("a@b.c"), None);
        assert!(email_error("nope").is_some());
    }

    #[test]
    fn enterprise_plan_never_commits() {
        assert_eq!(ui_kit::resolve_committed_value(&plan_options(), "enterprise"), None);
        assert_eq!(
            ui_kit::resolve_committed_value(&plan_options(), "team").as_deref(),
            Some("team")
        );
    }
}
