//! Utility-class composition shared by every widget.

/// Joins class fragments with single spaces, dropping empty fragments.
///
/// Fragments are trimmed first, so callers can pass optional pieces as `""`
/// without producing stray separators.
pub fn compose_classes<'a>(segments: impl IntoIterator<Item = &'a str>) -> String {
    let mut out = String::new();
    for segment in segments {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(segment);
    }
    out
}

/// Returns `classes` when `condition` holds, otherwise an empty fragment.
pub fn class_if(condition: bool, classes: &str) -> &str {
    if condition {
        classes
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn skips_empty_and_whitespace_fragments() {
        assert_eq!(
            compose_classes(["base", "", "  ", " variant ", "size"]),
            "base variant size"
        );
    }

    #[test]
    fn empty_input_composes_to_empty_string() {
        assert_eq!(compose_classes(Vec::<&str>::new()), "");
        assert_eq!(compose_classes(["", ""]), "");
    }

    #[test]
    fn class_if_gates_fragment() {
        assert_eq!(class_if(true, "w-full"), "w-full");
        assert_eq!(class_if(false, "w-full"), "");
    }
}
