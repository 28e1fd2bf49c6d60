use std::fmt;

use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Placeholder shapes.
pub enum SkeletonVariant {
    /// Full-width text line.
    #[default]
    Text,
    /// Circle (avatar); height follows width.
    Circular,
    /// Rounded block.
    Rectangular,
}

impl SkeletonVariant {
    fn token(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Circular => "circular",
            Self::Rectangular => "rectangular",
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Self::Text => "rounded",
            Self::Circular => "rounded-full",
            Self::Rectangular => "rounded-lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Loading animation.
pub enum SkeletonAnimation {
    /// Opacity pulse.
    #[default]
    Pulse,
    /// Currently rendered as [`SkeletonAnimation::Pulse`].
    Wave,
    /// Static placeholder.
    None,
}

impl SkeletonAnimation {
    fn token(self) -> &'static str {
        match self {
            Self::Pulse => "pulse",
            Self::Wave => "wave",
            Self::None => "none",
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Self::Pulse | Self::Wave => "animate-pulse",
            Self::None => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A CSS length; bare numbers are pixels.
pub enum Dimension {
    /// Pixel length.
    Px(u32),
    /// Any CSS length (`"50%"`, `"2rem"`).
    Css(String),
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(px) => write!(f, "{px}px"),
            Self::Css(value) => f.write_str(value),
        }
    }
}

impl From<u32> for Dimension {
    fn from(px: u32) -> Self {
        Self::Px(px)
    }
}

// Untyped integer literals in `view!` props land here.
impl From<i32> for Dimension {
    fn from(px: i32) -> Self {
        Self::Px(u32::try_from(px).unwrap_or(0))
    }
}

impl From<&str> for Dimension {
    fn from(value: &str) -> Self {
        Self::Css(value.to_string())
    }
}

impl From<String> for Dimension {
    fn from(value: String) -> Self {
        Self::Css(value)
    }
}

/// Class list for a skeleton block.
pub fn skeleton_classes(
    variant: SkeletonVariant,
    animation: SkeletonAnimation,
    extra: Option<&str>,
) -> String {
    compose_classes([
        "bg-gray-200",
        variant.classes(),
        animation.classes(),
        extra.unwrap_or(""),
    ])
}

/// Inline `style` for a skeleton, or `None` when no dimension applies.
///
/// Text defaults to full width; circles default their height to the width.
pub fn skeleton_style(
    variant: SkeletonVariant,
    width: Option<&Dimension>,
    height: Option<&Dimension>,
) -> Option<String> {
    let width = match (width, variant) {
        (Some(width), _) => Some(width.to_string()),
        (None, SkeletonVariant::Text) => Some("100%".to_string()),
        (None, _) => None,
    };
    let height = match (height, variant) {
        (Some(height), _) => Some(height.to_string()),
        (None, SkeletonVariant::Circular) => width.clone(),
        (None, _) => None,
    };

    let mut rules = Vec::new();
    if let Some(width) = width {
        rules.push(format!("width: {width};"));
    }
    if let Some(height) = height {
        rules.push(format!("height: {height};"));
    }
    (!rules.is_empty()).then(|| rules.join(" "))
}

#[component]
/// Loading placeholder block.
pub fn Skeleton(
    #[prop(default = SkeletonVariant::Text)] variant: SkeletonVariant,
    #[prop(default = SkeletonAnimation::Pulse)] animation: SkeletonAnimation,
    #[prop(optional, into)] width: Option<Dimension>,
    #[prop(optional, into)] height: Option<Dimension>,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    view! {
        <div
            class=skeleton_classes(variant, animation, class.as_deref())
            style=skeleton_style(variant, width.as_ref(), height.as_ref())
            aria-hidden="true"
            data-ui-kind="skeleton"
            data-ui-variant=variant.token()
            data-ui-animation=animation.token()
        ></div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn text_defaults_to_full_width() {
        assert_eq!(
            skeleton_style(SkeletonVariant::Text, None, Some(&Dimension::Px(12))),
            Some("width: 100%; height: 12px;".to_string())
        );
    }

    #[test]
    fn circle_height_follows_width() {
        let width = Dimension::from(40);
        assert_eq!(
            skeleton_style(SkeletonVariant::Circular, Some(&width), None),
            Some("width: 40px; height: 40px;".to_string())
        );
    }

    #[test]
    fn negative_pixel_literals_clamp_to_zero() {
        assert_eq!(Dimension::from(-8), Dimension::Px(0));
    }

    #[test]
    fn explicit_height_wins_for_circles() {
        let width = Dimension::from("3rem");
        let height = Dimension::from("2rem");
        assert_eq!(
            skeleton_style(SkeletonVariant::Circular, Some(&width), Some(&height)),
            Some("width: 3rem; height: 2rem;".to_string())
        );
    }

    #[test]
    fn rectangle_without_dimensions_has_no_style() {
        assert_eq!(skeleton_style(SkeletonVariant::Rectangular, None, None), None);
    }

    #[test]
    fn wave_renders_like_pulse_and_none_adds_nothing() {
        assert_eq!(
            skeleton_classes(SkeletonVariant::Text, SkeletonAnimation::Wave, None),
            skeleton_classes(SkeletonVariant::Text, SkeletonAnimation::Pulse, None)
        );
        assert_eq!(
            skeleton_classes(SkeletonVariant::Circular, SkeletonAnimation::None, None),
            "bg-gray-200 rounded-full"
        );
    }
}
