use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Card surface treatments.
pub enum CardVariant {
    /// White surface with a hairline border.
    #[default]
    Default,
    /// Transparent surface with a heavy border.
    Outlined,
    /// White surface with a drop shadow.
    Elevated,
}

impl CardVariant {
    fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Outlined => "outlined",
            Self::Elevated => "elevated",
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Self::Default => "bg-white border border-gray-200",
            Self::Outlined => "bg-transparent border-2 border-gray-300",
            Self::Elevated => "bg-white shadow-lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Card inner padding tokens.
pub enum CardPadding {
    /// No padding.
    None,
    /// Compact padding.
    Sm,
    /// Default padding.
    #[default]
    Md,
    /// Spacious padding.
    Lg,
}

impl CardPadding {
    fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Sm => "p-3",
            Self::Md => "p-4",
            Self::Lg => "p-6",
        }
    }
}

/// Class list for a card root.
pub fn card_classes(variant: CardVariant, padding: CardPadding, extra: Option<&str>) -> String {
    compose_classes([
        "rounded-lg",
        variant.classes(),
        extra.unwrap_or(""),
        padding.classes(),
    ])
}

#[component]
/// Bordered or elevated content container.
pub fn Card(
    #[prop(default = CardVariant::Default)] variant: CardVariant,
    #[prop(default = CardPadding::Md)] padding: CardPadding,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=card_classes(variant, padding, class.as_deref())
            data-ui-kind="card"
            data-ui-variant=variant.token()
            data-ui-padding=padding.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Vertical stack for a card's title and description.
pub fn CardHeader(#[prop(optional, into)] class: Option<String>, children: Children) -> impl IntoView {
    view! {
        <div class=compose_classes(["flex flex-col space-y-1.5", extra_class(&class)]) data-ui-slot="header">
            {children()}
        </div>
    }
}

#[component]
/// Card heading (`h3`).
pub fn CardTitle(#[prop(optional, into)] class: Option<String>, children: Children) -> impl IntoView {
    view! {
        <h3
            class=compose_classes(["text-2xl font-semibold leading-none tracking-tight", extra_class(&class)])
            data-ui-slot="title"
        >
            {children()}
        </h3>
    }
}

#[component]
/// Muted supporting copy under a card title.
pub fn CardDescription(
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <p class=compose_classes(["text-sm text-gray-500", extra_class(&class)]) data-ui-slot="description">
            {children()}
        </p>
    }
}

#[component]
/// Card body.
pub fn CardContent(#[prop(optional, into)] class: Option<String>, children: Children) -> impl IntoView {
    view! {
        <div class=compose_classes(["pt-0", extra_class(&class)]) data-ui-slot="content">
            {children()}
        </div>
    }
}

#[component]
/// Horizontal action row at the bottom of a card.
pub fn CardFooter(#[prop(optional, into)] class: Option<String>, children: Children) -> impl IntoView {
    view! {
        <div class=compose_classes(["flex items-center pt-0", extra_class(&class)]) data-ui-slot="footer">
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn no_padding_leaves_no_trailing_separator() {
        assert_eq!(
            card_classes(CardVariant::Outlined, CardPadding::None, None),
            "rounded-lg bg-transparent border-2 border-gray-300"
        );
    }

    #[test]
    fn default_card_has_border_and_medium_padding() {
        assert_eq!(
            card_classes(CardVariant::default(), CardPadding::default(), Some("max-w-sm")),
            "rounded-lg bg-white border border-gray-200 max-w-sm p-4"
        );
    }
}
