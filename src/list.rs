//! Selector list splitting.
//!
//! [§ 4.1 Selector Lists](https://www.w3.org/TR/selectors-4/#grouping)

/// [§ 4.1 Selector Lists](https://www.w3.org/TR/selectors-4/#grouping)
/// "A comma-separated list of selectors represents the union of all elements
/// selected by each of the individual selectors in the selector list."
///
/// Split a selector list on top-level commas only. A comma nested inside
/// parentheses or brackets (e.g. inside `:is(a, b)` or `[data-x="1,2"]`) is
/// part of that argument, not a list separator.
///
/// Segments are trimmed; empty segments (stray or trailing commas) are
/// dropped. Any input, however malformed, yields a best-effort split.
#[must_use]
pub fn split_selector_list(input: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut depth = 0_usize;
    let mut start = 0_usize;

    for (i, c) in input.char_indices() {
        match c {
            '(' | '[' => depth += 1,
            // Saturate so a stray closer can never turn a later top-level
            // comma into a nested one.
            ')' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                let segment = input[start..i].trim();
                if !segment.is_empty() {
                    segments.push(segment);
                }
                start = i + 1;
            }
            _ => {}
        }
    }

    let tail = input[start..].trim();
    if !tail.is_empty() {
        segments.push(tail);
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::split_selector_list;

    #[test]
    fn test_nested_commas_are_not_separators() {
        assert_eq!(
            split_selector_list(":is(a, b), c"),
            vec![":is(a, b)", "c"]
        );
        assert_eq!(
            split_selector_list("[data-x=\"1,2\"], d"),
            vec!["[data-x=\"1,2\"]", "d"]
        );
    }

    #[test]
    fn test_unbalanced_closers_do_not_swallow_separators() {
        assert_eq!(split_selector_list("a), b"), vec!["a)", "b"]);
    }

    #[test]
    fn test_empty_segments_are_dropped() {
        assert_eq!(split_selector_list("a,,b,"), vec!["a", "b"]);
        assert_eq!(split_selector_list("  ,  "), Vec::<&str>::new());
        assert_eq!(split_selector_list(""), Vec::<&str>::new());
    }
}
