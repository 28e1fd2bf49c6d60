//! Label, id, and validation-message plumbing shared by form controls.

use super::*;

const ERROR_STATE: &str = "border-red-500 focus:border-red-500 focus:ring-red-500";
const NORMAL_STATE: &str = "border-gray-300 focus:border-blue-500 focus:ring-blue-500";

/// Class list for a form control: base, validity state, then extra.
pub fn field_control_classes(base: &str, invalid: bool, extra: Option<&str>) -> String {
    let state = if invalid { ERROR_STATE } else { NORMAL_STATE };
    compose_classes([base, state, extra.unwrap_or("")])
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Element ids for one mounted form control.
pub struct FieldIds {
    control: String,
}

impl FieldIds {
    /// Uses `supplied` when non-empty, otherwise allocates `{prefix}-{n}`.
    pub fn new(supplied: Option<String>, prefix: &str) -> Self {
        let control = supplied
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| next_widget_id(prefix));
        Self { control }
    }

    /// Id of the control element; the label's `for` target.
    pub fn control(&self) -> &str {
        &self.control
    }

    /// Id of the rendered error message.
    pub fn error(&self) -> String {
        format!("{}-error", self.control)
    }

    /// Id of the rendered helper message.
    pub fn helper(&self) -> String {
        format!("{}-helper", self.control)
    }

    /// `aria-describedby` value for the message currently shown, if any.
    pub fn described_by(&self, message: Option<&FieldMessage>) -> Option<String> {
        message.map(|message| message.element_id(self))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// The single message rendered under a control.
pub enum FieldMessage {
    /// Validation failure; marks the control invalid.
    Error(String),
    /// Neutral guidance.
    Helper(String),
}

impl FieldMessage {
    /// Picks the message to show. A non-empty error always wins over helper text.
    pub fn resolve(error: Option<&str>, helper: Option<&str>) -> Option<Self> {
        let present = |text: Option<&str>| text.filter(|text| !text.is_empty()).map(str::to_string);
        present(error)
            .map(Self::Error)
            .or_else(|| present(helper).map(Self::Helper))
    }

    /// Whether this is a validation error.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Message copy.
    pub fn text(&self) -> &str {
        match self {
            Self::Error(text) | Self::Helper(text) => text,
        }
    }

    /// Id of the element rendering this message.
    pub fn element_id(&self, ids: &FieldIds) -> String {
        match self {
            Self::Error(_) => ids.error(),
            Self::Helper(_) => ids.helper(),
        }
    }
}

/// `aria-invalid` token for the resolved message.
pub(crate) fn aria_invalid(message: Option<&FieldMessage>) -> &'static str {
    bool_token(message.is_some_and(FieldMessage::is_error))
}

/// Resolves the shown message reactively from the error/helper props.
pub(crate) fn field_message_signal(
    error: MaybeSignal<Option<String>>,
    helper_text: MaybeSignal<Option<String>>,
) -> Signal<Option<FieldMessage>> {
    Signal::derive(move || {
        let error = error.get();
        let helper_text = helper_text.get();
        FieldMessage::resolve(error.as_deref(), helper_text.as_deref())
    })
}

pub(crate) fn field_label_view(label: Option<String>, control_id: &str, required: bool) -> impl IntoView {
    let control_id = control_id.to_string();
    label.map(move |label| {
        view! {
            <label for=control_id class="block text-sm font-medium text-gray-700 mb-1" data-ui-slot="label">
                {label}
                {required.then(|| view! { <span class="text-red-500 ml-1" aria-hidden="true">"*"</span> })}
            </label>
        }
    })
}

pub(crate) fn field_message_view(ids: FieldIds, message: Signal<Option<FieldMessage>>) -> impl IntoView {
    move || {
        message.get().map(|message| {
            let id = message.element_id(&ids);
            if message.is_error() {
                view! {
                    <p id=id class="mt-1 text-sm text-red-600" role="alert" data-ui-slot="error">
                        {message.text().to_string()}
                    </p>
                }
            } else {
                view! {
                    <p id=id class="mt-1 text-sm text-gray-500" data-ui-slot="helper">
                        {message.text().to_string()}
                    </p>
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn supplied_id_is_used_verbatim() {
        let ids = FieldIds::new(Some("email".to_string()), "ui");
        assert_eq!(ids.control(), "email");
        assert_eq!(ids.error(), "email-error");
        assert_eq!(ids.helper(), "email-helper");
    }

    #[test]
    fn missing_or_empty_id_is_generated_once() {
        let generated = FieldIds::new(None, "form");
        let from_empty = FieldIds::new(Some(String::new()), "form");
        assert!(generated.control().starts_with("form-"));
        assert!(from_empty.control().starts_with("form-"));
        assert_ne!(generated.control(), from_empty.control());

        let cloned = generated.clone();
        assert_eq!(cloned.control(), generated.control());
    }

    #[test]
    fn error_wins_over_helper_and_takes_describedby_slot() {
        let ids = FieldIds::new(Some("name".to_string()), "ui");
        let message = FieldMessage::resolve(Some("Required"), Some("Your full name"));

        assert_eq!(message, Some(FieldMessage::Error("Required".to_string())));
        assert_eq!(ids.described_by(message.as_ref()).as_deref(), Some("name-error"));
        assert_eq!(aria_invalid(message.as_ref()), "true");
    }

    #[test]
    fn helper_shows_when_no_error() {
        let ids = FieldIds::new(Some("name".to_string()), "ui");
        let message = FieldMessage::resolve(Some(""), Some("Your full name"));

        assert_eq!(message, Some(FieldMessage::Helper("Your full name".to_string())));
        assert_eq!(ids.described_by(message.as_ref()).as_deref(), Some("name-helper"));
        assert_eq!(aria_invalid(message.as_ref()), "false");
    }

    #[test]
    fn no_message_means_no_describedby() {
        let ids = FieldIds::new(Some("name".to_string()), "ui");
        let message = FieldMessage::resolve(None, None);
        assert_eq!(message, None);
        assert_eq!(ids.described_by(message.as_ref()), None);
        assert_eq!(aria_invalid(None), "false");
    }

    #[test]
    fn message_signal_tracks_prop_changes() {
        let _ = leptos::create_runtime();
        let error = create_rw_signal(None::<String>);
        let message = field_message_signal(
            MaybeSignal::derive(move || error.get()),
            MaybeSignal::Static(Some("hint".to_string())),
        );

        assert_eq!(message.get_untracked(), Some(FieldMessage::Helper("hint".to_string())));
        error.set(Some("bad".to_string()));
        assert_eq!(message.get_untracked(), Some(FieldMessage::Error("bad".to_string())));
    }

    #[test]
    fn control_classes_switch_on_validity() {
        assert_eq!(field_control_classes("block", true, None), format!("block {ERROR_STATE}"));
        assert_eq!(
            field_control_classes("block", false, Some("pl-10")),
            format!("block {NORMAL_STATE} pl-10")
        );
    }
}
