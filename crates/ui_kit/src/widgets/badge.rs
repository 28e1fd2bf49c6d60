use super::*;

const BADGE_BASE: &str = "inline-flex items-center font-medium rounded-full";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Badge color treatments.
pub enum BadgeVariant {
    /// Neutral gray.
    #[default]
    Default,
    /// Brand blue.
    Primary,
    /// Darker neutral.
    Secondary,
    /// Green status.
    Success,
    /// Yellow status.
    Warning,
    /// Red status.
    Danger,
    /// Bordered, no fill.
    Outline,
}

impl BadgeVariant {
    fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Outline => "outline",
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Self::Default => "bg-gray-100 text-gray-800",
            Self::Primary => "bg-blue-100 text-blue-800",
            Self::Secondary => "bg-gray-200 text-gray-900",
            Self::Success => "bg-green-100 text-green-800",
            Self::Warning => "bg-yellow-100 text-yellow-800",
            Self::Danger => "bg-red-100 text-red-800",
            Self::Outline => "border border-gray-300 text-gray-700",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Badge sizing tokens.
pub enum BadgeSize {
    /// Extra-small text.
    Sm,
    /// Default size.
    #[default]
    Md,
    /// Base-size text.
    Lg,
}

impl BadgeSize {
    fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Self::Sm => "px-2 py-0.5 text-xs",
            Self::Md => "px-2.5 py-0.5 text-sm",
            Self::Lg => "px-3 py-1 text-base",
        }
    }
}

/// Class list for a badge.
pub fn badge_classes(variant: BadgeVariant, size: BadgeSize, extra: Option<&str>) -> String {
    compose_classes([
        BADGE_BASE,
        variant.classes(),
        size.classes(),
        extra.unwrap_or(""),
    ])
}

#[component]
/// Inline status pill.
pub fn Badge(
    #[prop(default = BadgeVariant::Default)] variant: BadgeVariant,
    #[prop(default = BadgeSize::Md)] size: BadgeSize,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=badge_classes(variant, size, class.as_deref())
            data-ui-kind="badge"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
        >
            {children()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_badge_is_neutral_medium() {
        assert_eq!(
            badge_classes(BadgeVariant::default(), BadgeSize::default(), None),
            "inline-flex items-center font-medium rounded-full bg-gray-100 text-gray-800 px-2.5 py-0.5 text-sm"
        );
    }

    #[test]
    fn every_pair_keeps_fragments_without_stray_spaces() {
        let variants = [
            BadgeVariant::Default,
            BadgeVariant::Primary,
            BadgeVariant::Secondary,
            BadgeVariant::Success,
            BadgeVariant::Warning,
            BadgeVariant::Danger,
            BadgeVariant::Outline,
        ];
        for variant in variants {
            for size in [BadgeSize::Sm, BadgeSize::Md, BadgeSize::Lg] {
                let classes = badge_classes(variant, size, Some(""));
                assert!(classes.contains(variant.classes()));
                assert!(classes.ends_with(size.classes()));
                assert!(!classes.contains("  "));
            }
        }
    }
}
