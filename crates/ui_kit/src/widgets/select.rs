use super::field::{aria_invalid, field_label_view, field_message_signal, field_message_view};
use super::*;

const SELECT_BASE: &str = "block w-full rounded-lg border px-3 py-2 text-sm transition-colors focus:outline-none focus:ring-2 focus:ring-offset-0 disabled:cursor-not-allowed disabled:opacity-50 appearance-none bg-white";

#[derive(Debug, Clone, PartialEq, Eq)]
/// One `<option>` of a [`Select`]. Values are assumed unique within a list.
pub struct SelectOption {
    /// Submitted value.
    pub value: String,
    /// Visible label.
    pub label: String,
    /// Rendered but not choosable.
    pub disabled: bool,
}

impl SelectOption {
    /// Enabled option.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    /// Disabled option.
    pub fn disabled(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            disabled: true,
            ..Self::new(value, label)
        }
    }
}

/// Class list for a select control.
pub fn select_classes(invalid: bool, extra: Option<&str>) -> String {
    field_control_classes(SELECT_BASE, invalid, extra)
}

/// Maps a raw `<select>` value to a committed value.
///
/// Only values of enabled options commit; the placeholder's empty value and
/// disabled options yield `None`.
pub fn resolve_committed_value(options: &[SelectOption], raw: &str) -> Option<String> {
    options
        .iter()
        .find(|option| option.value == raw && !option.disabled)
        .map(|option| option.value.clone())
}

#[component]
/// Labelled native select with placeholder, disabled options, and messaging.
pub fn Select(
    /// Options in display order; may be empty.
    #[prop(optional)]
    options: Vec<SelectOption>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] error: MaybeSignal<Option<String>>,
    #[prop(optional, into)] helper_text: MaybeSignal<Option<String>>,
    /// Rendered as a disabled first option shown while no value is chosen.
    #[prop(optional, into)]
    placeholder: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional)] required: bool,
    #[prop(optional)] full_width: bool,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    /// Receives the newly committed option value.
    #[prop(optional)]
    on_change: Option<Callback<String>>,
) -> impl IntoView {
    let config = use_ui_config();
    let ids = FieldIds::new(id, &config.id_prefix);
    let message = field_message_signal(error, helper_text);
    let control_id = ids.control().to_string();
    let described_ids = ids.clone();
    let label = field_label_view(label, ids.control(), required);
    let options = store_value(options);
    let value = Signal::derive(move || value.get());

    let placeholder = placeholder.map(|placeholder| {
        view! {
            <option value="" disabled=true selected=move || value.get().is_empty()>
                {placeholder}
            </option>
        }
    });
    let option_views = options.with_value(|options| {
        options
            .iter()
            .map(|option| {
                let option_value = option.value.clone();
                view! {
                    <option
                        value=option.value.clone()
                        disabled=option.disabled
                        selected=move || value.get() == option_value
                    >
                        {option.label.clone()}
                    </option>
                }
            })
            .collect_view()
    });

    view! {
        <div class=class_if(full_width, "w-full") data-ui-kind="select">
            {label}
            <div class="relative">
                <select
                    id=control_id
                    name=name
                    required=required
                    class=move || {
                        let invalid = message.with(|message| message.as_ref().is_some_and(FieldMessage::is_error));
                        select_classes(invalid, class.as_deref())
                    }
                    aria-invalid=move || message.with(|message| aria_invalid(message.as_ref()))
                    aria-describedby=move || message.with(|message| described_ids.described_by(message.as_ref()))
                    prop:value=move || value.get()
                    disabled=move || disabled.get()
                    on:change=move |ev| {
                        let raw = event_target_value(&ev);
                        let Some(committed) = options.with_value(|options| resolve_committed_value(options, &raw)) else {
                            logging::debug_warn!("select ignored non-committable value `{raw}`");
                            return;
                        };
                        if let Some(on_change) = on_change.as_ref() {
                            on_change.call(committed);
                        }
                    }
                >
                    {placeholder}
                    {option_views}
                </select>
                <div class="absolute right-3 top-1/2 -translate-y-1/2 pointer-events-none text-gray-400">
                    <Icon icon=IconName::ChevronDown size=IconSize::Md />
                </div>
            </div>
            {field_message_view(ids, message)}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn fruit() -> Vec<SelectOption> {
        vec![
            SelectOption::new("apple", "Apple"),
            SelectOption::disabled("durian", "Durian"),
            SelectOption::new("pear", "Pear"),
        ]
    }

    #[test]
    fn enabled_options_commit() {
        assert_eq!(resolve_committed_value(&fruit(), "pear"), Some("pear".to_string()));
    }

    #[test]
    fn disabled_option_never_commits() {
        assert_eq!(resolve_committed_value(&fruit(), "durian"), None);
    }

    #[test]
    fn placeholder_value_never_commits() {
        assert_eq!(resolve_committed_value(&fruit(), ""), None);
    }

    #[test]
    fn empty_option_list_commits_nothing() {
        assert_eq!(resolve_committed_value(&[], "apple"), None);
    }

    #[test]
    fn disabled_constructor_keeps_label() {
        let option = SelectOption::disabled("x", "Ex");
        assert!(option.disabled);
        assert_eq!(option.label, "Ex");
    }

    #[test]
    fn classes_include_appearance_reset() {
        assert!(select_classes(false, None).contains("appearance-none bg-white"));
    }

    #[test]
    fn rendered_error_replaces_helper_and_placeholder_stays_unselectable() {
        let html = leptos::ssr::render_to_string(|| {
            view! {
                <Select
                    id="plan"
                    options=fruit()
                    error=Some("Pick a plan".to_string())
                    helper_text=Some("Billed monthly".to_string())
                    placeholder="Choose one"
                />
            }
        })
        .to_string();

        assert!(html.contains(r#"aria-describedby="plan-error""#));
        assert!(html.contains(r#"aria-invalid="true""#));
        assert_eq!(html.matches(r#"role="alert""#).count(), 1);
        assert!(html.contains(r#"id="plan-error""#));
        assert!(html.contains("Pick a plan"));
        assert!(!html.contains("plan-helper"));
        assert!(!html.contains("Billed monthly"));

        let placeholder = html
            .split("<option")
            .find(|option| option.contains("Choose one"))
            .expect("placeholder option");
        let open_tag = &placeholder[..placeholder.find('>').expect("tag end")];
        assert!(open_tag.contains(r#"value="""#));
        assert!(open_tag.contains("disabled"));
    }

    #[test]
    fn rendered_helper_is_described_when_no_error() {
        let html = leptos::ssr::render_to_string(|| {
            view! {
                <Select id="plan" options=fruit() helper_text=Some("Billed monthly".to_string()) />
            }
        })
        .to_string();

        assert!(html.contains(r#"aria-describedby="plan-helper""#));
        assert!(html.contains(r#"aria-invalid="false""#));
        assert!(!html.contains(r#"role="alert""#));
    }
}
