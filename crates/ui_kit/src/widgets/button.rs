use super::*;

const BUTTON_BASE: &str = "inline-flex items-center justify-center font-medium rounded-lg transition-colors focus:outline-none focus:ring-2 focus:ring-offset-2 disabled:opacity-50 disabled:cursor-not-allowed";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Button visual treatments.
pub enum ButtonVariant {
    /// Filled brand action.
    #[default]
    Primary,
    /// Neutral filled action.
    Secondary,
    /// Bordered action.
    Outline,
    /// Background-free action.
    Ghost,
    /// Inline text link; ignores size padding.
    Link,
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Outline => "outline",
            Self::Ghost => "ghost",
            Self::Link => "link",
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Self::Primary => "bg-blue-600 text-white hover:bg-blue-700 focus:ring-blue-500",
            Self::Secondary => "bg-gray-200 text-gray-900 hover:bg-gray-300 focus:ring-gray-500",
            Self::Outline => {
                "border-2 border-blue-600 text-blue-600 hover:bg-blue-50 focus:ring-blue-500"
            }
            Self::Ghost => "text-gray-700 hover:bg-gray-100 focus:ring-gray-500",
            Self::Link => {
                "text-blue-600 hover:text-blue-700 underline-offset-4 hover:underline focus:ring-blue-500 p-0"
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Button sizing tokens.
pub enum ButtonSize {
    /// Dense button.
    Sm,
    /// Default button.
    #[default]
    Md,
    /// Large button.
    Lg,
}

impl ButtonSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Self::Sm => "px-3 py-1.5 text-sm",
            Self::Md => "px-4 py-2 text-base",
            Self::Lg => "px-6 py-3 text-lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Native `type` attribute of the rendered `<button>`.
pub enum ButtonType {
    /// Plain button; never submits a form.
    #[default]
    Button,
    /// Form submit button.
    Submit,
    /// Form reset button.
    Reset,
}

impl ButtonType {
    fn token(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Submit => "submit",
            Self::Reset => "reset",
        }
    }
}

/// Class list for a button. `busy` is true while disabled or loading.
pub fn button_classes(
    variant: ButtonVariant,
    size: ButtonSize,
    busy: bool,
    extra: Option<&str>,
) -> String {
    let size_classes = if variant == ButtonVariant::Link {
        ""
    } else {
        size.classes()
    };
    compose_classes([
        BUTTON_BASE,
        variant.classes(),
        size_classes,
        class_if(busy, "cursor-not-allowed"),
        extra.unwrap_or(""),
    ])
}

#[component]
/// Action button with variant, size, and a loading state.
pub fn Button(
    #[prop(default = ButtonVariant::Primary)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    #[prop(default = ButtonType::Button)] button_type: ButtonType,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    /// Shows a spinner and disables the button.
    #[prop(optional, into)]
    loading: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let busy = move || disabled.get() || loading.get();
    view! {
        <button
            type=button_type.token()
            class=move || button_classes(variant, size, busy(), class.as_deref())
            id=id
            aria-label=aria_label
            aria-busy=move || loading.get().then_some("true")
            disabled=busy
            data-ui-kind="button"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            <Show when=move || loading.get() fallback=|| ()>
                <Icon icon=IconName::Spinner class="-ml-1 mr-2" />
            </Show>
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const VARIANTS: [ButtonVariant; 5] = [
        ButtonVariant::Primary,
        ButtonVariant::Secondary,
        ButtonVariant::Outline,
        ButtonVariant::Ghost,
        ButtonVariant::Link,
    ];
    const SIZES: [ButtonSize; 3] = [ButtonSize::Sm, ButtonSize::Md, ButtonSize::Lg];

    #[test]
    fn defaults_match_contract() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
        assert_eq!(ButtonSize::default(), ButtonSize::Md);
        assert_eq!(ButtonType::default(), ButtonType::Button);
    }

    #[test]
    fn every_pair_composes_base_variant_and_size() {
        for variant in VARIANTS {
            for size in SIZES {
                let classes = button_classes(variant, size, false, None);
                assert!(classes.starts_with(BUTTON_BASE));
                assert!(classes.contains(variant.classes()));
                assert_eq!(
                    classes.contains(size.classes()),
                    variant != ButtonVariant::Link,
                    "{variant:?}/{size:?}"
                );
                assert!(!classes.contains("  "));
                assert_eq!(classes.trim(), classes);
            }
        }
    }

    #[test]
    fn link_variant_drops_size_padding() {
        assert_eq!(
            button_classes(ButtonVariant::Link, ButtonSize::Lg, false, None),
            format!("{BUTTON_BASE} {}", ButtonVariant::Link.classes())
        );
    }

    #[test]
    fn busy_and_extra_classes_append_in_order() {
        let classes = button_classes(ButtonVariant::Ghost, ButtonSize::Sm, true, Some("w-full"));
        assert!(classes.ends_with("px-3 py-1.5 text-sm cursor-not-allowed w-full"));
    }
}
