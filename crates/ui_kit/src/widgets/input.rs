use super::field::{aria_invalid, field_label_view, field_message_signal, field_message_view};
use super::*;

const INPUT_BASE: &str = "block w-full rounded-lg border px-3 py-2 text-sm transition-colors focus:outline-none focus:ring-2 focus:ring-offset-0 disabled:cursor-not-allowed disabled:opacity-50";

/// Class list for a text input, reserving room for icon slots.
pub fn input_classes(
    invalid: bool,
    leading_icon: bool,
    trailing_icon: bool,
    extra: Option<&str>,
) -> String {
    let extra = compose_classes([
        class_if(leading_icon, "pl-10"),
        class_if(trailing_icon, "pr-10"),
        extra.unwrap_or(""),
    ]);
    field_control_classes(INPUT_BASE, invalid, Some(&extra))
}

#[component]
/// Labelled text input with error/helper messaging.
pub fn Input(
    #[prop(optional, into)] label: Option<String>,
    /// Validation error; wins over `helper_text` and marks the input invalid.
    #[prop(optional, into)]
    error: MaybeSignal<Option<String>>,
    #[prop(optional, into)] helper_text: MaybeSignal<Option<String>>,
    /// Caller-supplied id; generated once per instance when omitted.
    #[prop(optional, into)]
    id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional)] required: bool,
    #[prop(optional)] full_width: bool,
    #[prop(optional)] leading_icon: Option<IconName>,
    #[prop(optional)] trailing_icon: Option<IconName>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] node_ref: NodeRef<html::Input>,
    /// Receives the input's value on every keystroke.
    #[prop(optional)]
    on_input: Option<Callback<String>>,
) -> impl IntoView {
    let config = use_ui_config();
    let ids = FieldIds::new(id, &config.id_prefix);
    let message = field_message_signal(error, helper_text);
    let control_id = ids.control().to_string();
    let described_ids = ids.clone();
    let has_leading = leading_icon.is_some();
    let has_trailing = trailing_icon.is_some();
    let label = field_label_view(label, ids.control(), required);

    view! {
        <div class=class_if(full_width, "w-full") data-ui-kind="input">
            {label}
            <div class="relative">
                {leading_icon.map(|icon| view! {
                    <div class="absolute left-3 top-1/2 -translate-y-1/2 text-gray-400">
                        <Icon icon=icon size=IconSize::Md />
                    </div>
                })}
                <input
                    id=control_id
                    name=name
                    type=input_type.unwrap_or("text")
                    placeholder=placeholder
                    autocomplete=autocomplete
                    required=required
                    node_ref=node_ref
                    class=move || {
                        let invalid = message.with(|message| message.as_ref().is_some_and(FieldMessage::is_error));
                        input_classes(invalid, has_leading, has_trailing, class.as_deref())
                    }
                    aria-invalid=move || message.with(|message| aria_invalid(message.as_ref()))
                    aria-describedby=move || message.with(|message| described_ids.described_by(message.as_ref()))
                    prop:value=move || value.get()
                    disabled=move || disabled.get()
                    on:input=move |ev| {
                        if let Some(on_input) = on_input.as_ref() {
                            on_input.call(event_target_value(&ev));
                        }
                    }
                />
                {trailing_icon.map(|icon| view! {
                    <div class="absolute right-3 top-1/2 -translate-y-1/2 text-gray-400">
                        <Icon icon=icon size=IconSize::Md />
                    </div>
                })}
            </div>
            {field_message_view(ids, message)}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn icon_slots_add_padding_before_extra() {
        let classes = input_classes(false, true, true, Some("font-mono"));
        assert!(classes.starts_with(INPUT_BASE));
        assert!(classes.ends_with("pl-10 pr-10 font-mono"));
    }

    #[test]
    fn plain_input_has_no_stray_separators() {
        let classes = input_classes(true, false, false, None);
        assert!(!classes.contains("  "));
        assert_eq!(classes.trim(), classes);
        assert!(classes.contains("border-red-500"));
    }

    #[test]
    fn rendered_error_wins_over_helper() {
        let html = leptos::ssr::render_to_string(|| {
            view! {
                <Input
                    id="email"
                    error=Some("Required".to_string())
                    helper_text=Some("We never share it".to_string())
                />
            }
        })
        .to_string();

        assert!(html.contains(r#"aria-invalid="true""#));
        assert!(html.contains(r#"aria-describedby="email-error""#));
        assert!(html.contains(r#"id="email-error""#));
        assert_eq!(html.matches(r#"role="alert""#).count(), 1);
        assert!(!html.contains("email-helper"));
        assert!(!html.contains("We never share it"));
    }
}
