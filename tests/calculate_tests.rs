//! Integration tests for selector specificity calculation.

use css_specificity::{
    MAX_NESTING_DEPTH, Specificity, SpecificityError, SpecificityObject, calculate,
};

/// Helper: specificity of the first selector in the list.
fn spec(selector: &str) -> Specificity {
    calculate(selector).unwrap()[0].specificity
}

#[test]
fn test_universal_selector() {
    assert_eq!(spec("*"), Specificity(0, 0, 0));
}

#[test]
fn test_type_selectors() {
    assert_eq!(spec("li"), Specificity(0, 0, 1));
    assert_eq!(spec("ul li"), Specificity(0, 0, 2));
}

#[test]
fn test_type_selectors_case_and_whitespace() {
    // Case-insensitive type matching; trailing/embedded whitespace ignored
    assert_eq!(spec("UL OL+LI "), Specificity(0, 0, 3));
}

#[test]
fn test_universal_with_attribute() {
    assert_eq!(spec("H1 + *[REL=up]"), Specificity(0, 1, 1));
}

#[test]
fn test_classes_and_types() {
    assert_eq!(spec("UL OL LI.red"), Specificity(0, 1, 3));
    assert_eq!(spec("LI.red.level"), Specificity(0, 2, 1));
}

#[test]
fn test_id_selector() {
    assert_eq!(spec("#x34y"), Specificity(1, 0, 0));
}

#[test]
fn test_id_with_not() {
    assert_eq!(spec("#s12:not(FOO)"), Specificity(1, 0, 1));
}

#[test]
fn test_is_picks_most_specific_argument() {
    assert_eq!(spec(".foo :is(.bar, #baz)"), Specificity(1, 1, 0));
}

#[test]
fn test_complex_selectors() {
    assert_eq!(spec("header h1#sitetitle > .logo"), Specificity(1, 1, 2));
    assert_eq!(
        spec("ul > li:is(.highlighted, .active)"),
        Specificity(0, 1, 2)
    );
    assert_eq!(
        spec("header:where(#top) nav li:nth-child(2n + 1)"),
        Specificity(0, 1, 3)
    );
}

#[test]
fn test_has_and_nth_child_of() {
    assert_eq!(
        spec("header:has(#top) nav li:nth-child(2n + 1)"),
        Specificity(1, 1, 3)
    );
    assert_eq!(
        spec("header:has(#top) nav li:nth-child(2n + 1 of .foo)"),
        Specificity(1, 2, 3)
    );
    assert_eq!(
        spec("header:has(#top) nav li:nth-child(2n + 1 of .foo, #bar)"),
        Specificity(2, 1, 3)
    );
}

#[test]
fn test_pseudo_elements() {
    for selector in ["::after", "::cue", "::before", "::first-line", "::first-letter"] {
        assert_eq!(spec(selector), Specificity(0, 0, 1), "{selector}");
    }
}

#[test]
fn test_legacy_single_colon_pseudo_elements() {
    for selector in [":before", ":after", ":first-line", ":first-letter"] {
        assert_eq!(spec(selector), Specificity(0, 0, 1), "{selector}");
    }
}

#[test]
fn test_pseudo_classes() {
    assert_eq!(spec(":hover"), Specificity(0, 1, 0));
    assert_eq!(spec(":focus"), Specificity(0, 1, 0));
}

#[test]
fn test_is_aliases() {
    for selector in [
        ":is(#foo, .bar, baz)",
        ":matches(#foo, .bar, baz)",
        ":any(#foo, .bar, baz)",
        ":-moz-any(#foo, .bar, baz)",
        ":-webkit-any(#foo, .bar, baz)",
    ] {
        assert_eq!(spec(selector), Specificity(1, 0, 0), "{selector}");
    }
}

#[test]
fn test_has_most_specific_argument() {
    assert_eq!(spec(":has(#foo, .bar, baz)"), Specificity(1, 0, 0));
}

#[test]
fn test_not_most_specific_argument() {
    assert_eq!(spec(":not(#foo, .bar, baz)"), Specificity(1, 0, 0));
}

#[test]
fn test_where_is_always_zero() {
    assert_eq!(spec(":where(#foo, .bar, baz)"), Specificity(0, 0, 0));
}

#[test]
fn test_namespaced_selectors() {
    assert_eq!(spec("ns|*"), Specificity(0, 0, 0));
    assert_eq!(spec("ns|a"), Specificity(0, 0, 1));
    assert_eq!(spec("*|a"), Specificity(0, 0, 1));
}

#[test]
fn test_functional_pseudo_classes_are_case_insensitive() {
    assert_eq!(spec(":NOT(#a)"), Specificity(1, 0, 0));
    assert_eq!(spec(":WHERE(#a)"), Specificity(0, 0, 0));
    assert_eq!(spec("li:NTH-CHILD(2N+1 OF #a)"), Specificity(1, 1, 1));
}

#[test]
fn test_ordinary_functional_pseudo_classes_weigh_one() {
    assert_eq!(spec(":lang(en)"), Specificity(0, 1, 0));
    assert_eq!(spec("p:nth-of-type(2n)"), Specificity(0, 1, 1));
    assert_eq!(spec("li:nth-last-child(odd)"), Specificity(0, 1, 1));
}

#[test]
fn test_empty_functional_argument_adds_nothing() {
    assert_eq!(spec(":is()"), Specificity(0, 0, 0));
    assert_eq!(spec("div:not()"), Specificity(0, 0, 1));
}

#[test]
fn test_selector_list_yields_one_entry_per_selector() {
    let entries = calculate("a, .b, #c").unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].selector, "a");
    assert_eq!(entries[0].specificity, Specificity(0, 0, 1));
    assert_eq!(entries[1].selector, ".b");
    assert_eq!(entries[1].specificity, Specificity(0, 1, 0));
    assert_eq!(entries[2].selector, "#c");
    assert_eq!(entries[2].specificity, Specificity(1, 0, 0));
}

#[test]
fn test_empty_input_yields_no_entries() {
    assert!(calculate("").unwrap().is_empty());
    assert!(calculate("  ,  ").unwrap().is_empty());
}

#[test]
fn test_malformed_input_is_best_effort() {
    assert_eq!(spec("!!%"), Specificity(0, 0, 0));
    assert_eq!(spec("div !! p"), Specificity(0, 0, 2));
    assert_eq!(spec(":is(.a"), Specificity(0, 1, 0)); // unterminated argument
    assert_eq!(spec("[foo"), Specificity(0, 1, 0)); // unterminated attribute
}

#[test]
fn test_nesting_within_limit_is_fine() {
    let mut selector = String::from("#a");
    for _ in 0..5 {
        selector = format!(":is({selector})");
    }
    assert_eq!(spec(&selector), Specificity(1, 0, 0));
}

#[test]
fn test_pathological_nesting_is_an_error() {
    let mut selector = String::from("#a");
    for _ in 0..=MAX_NESTING_DEPTH {
        selector = format!(":is({selector})");
    }
    assert_eq!(
        calculate(&selector),
        Err(SpecificityError::NestingTooDeep {
            limit: MAX_NESTING_DEPTH
        })
    );
}

#[test]
fn test_to_object() {
    let entries = calculate("li.red#x").unwrap();
    assert_eq!(
        entries[0].specificity.to_object(),
        SpecificityObject { a: 1, b: 1, c: 1 }
    );
    assert_eq!(
        Specificity::from(SpecificityObject { a: 1, b: 1, c: 1 }),
        entries[0].specificity
    );
}
