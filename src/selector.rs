//! Selector tokenization and specificity calculation.
//!
//! This module implements specificity calculation per
//! [Selectors Level 4 § 17](https://www.w3.org/TR/selectors-4/#specificity-rules),
//! including the functional pseudo-class rules of
//! [§ 4.5](https://www.w3.org/TR/selectors-4/#logical-combination) and the
//! `of S` clause of
//! [§ 14.3.1](https://www.w3.org/TR/selectors-4/#the-nth-child-pseudo).
//!
//! Parsing is deliberately permissive: fragments the tokenizer does not
//! recognize contribute nothing to the result instead of failing the whole
//! selector, matching how real-world CSS tooling treats partially-typed or
//! vendor-specific selectors.

use crate::error::SpecificityError;
use crate::list::split_selector_list;
use crate::specificity::{SelectorSpecificity, Specificity};

/// Maximum nesting depth of functional pseudo-class arguments.
///
/// Arguments recurse through the splitter and calculator
/// (`:is(:is(:is(...)))`), so adversarial input could otherwise grow the
/// stack without bound. Exceeding this limit surfaces
/// [`SpecificityError::NestingTooDeep`] instead of a stack fault.
pub const MAX_NESTING_DEPTH: usize = 32;

/// [Pseudo-elements § Index](https://developer.mozilla.org/en-US/docs/Web/CSS/Pseudo-elements#index)
///
/// CSS2 pseudo-elements that may be written with a single colon. These are
/// recognized by this explicit allow-list, never by generic single-colon
/// parsing, and weigh as pseudo-elements (C), not pseudo-classes (B).
const LEGACY_PSEUDO_ELEMENTS: [&str; 4] = ["before", "after", "first-line", "first-letter"];

/// [§ 4.5 Logical Combinations](https://www.w3.org/TR/selectors-4/#logical-combination)
///
/// Functional pseudo-classes whose specificity is "the specificity of the
/// most specific complex selector in its selector list argument". Includes
/// the legacy `:matches()` / `:any()` spellings of `:is()` and their vendor
/// prefixes.
const SELECTOR_LIST_ARGUMENT_PSEUDO_CLASSES: [&str; 7] =
    ["not", "has", "is", "matches", "any", "-moz-any", "-webkit-any"];

/// [§ 14.3.1 :nth-child()](https://www.w3.org/TR/selectors-4/#the-nth-child-pseudo)
///
/// Pseudo-classes taking an `An+B [of S]` argument. The `An+B` part weighs
/// like an ordinary pseudo-class; an `of S` clause additionally contributes
/// the most specific selector in `S`.
const NTH_CHILD_PSEUDO_CLASSES: [&str; 2] = ["nth-child", "nth-last-child"];

/// A single classified fragment of a complex selector.
///
/// [§ 3 Simple selectors](https://www.w3.org/TR/selectors-4/#simple)
///
/// The set of kinds is fixed and closed; atoms exist only for the duration
/// of one calculation. Combinators (whitespace, `>`, `+`, `~`) and namespace
/// separators contribute no weight and are consumed without producing an
/// atom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleSelector {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Examples: `div`, `ns|a`
    Type(String),

    /// [§ 5.2 Universal selector](https://www.w3.org/TR/selectors-4/#universal-selector)
    /// "Unless an element is featureless, the presence of a universal
    /// selector has no effect on whether the element matches the selector."
    /// It also has no effect on specificity.
    ///
    /// Examples: `*`, `ns|*`
    Universal,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Example: `#main`
    Id(String),

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Example: `.highlight`
    Class(String),

    /// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    /// Carries the raw bracket contents; the contents never affect weight.
    ///
    /// Examples: `[href]`, `[rel=up]`
    Attribute(String),

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    /// A non-functional pseudo-class.
    ///
    /// Examples: `:hover`, `:focus`
    PseudoClass(String),

    /// [§ 11 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    /// Double-colon pseudo-elements (any name) and the single-colon legacy
    /// names of [`LEGACY_PSEUDO_ELEMENTS`].
    ///
    /// Examples: `::before`, `::cue`, `:after`
    PseudoElement(String),

    /// A pseudo-class with a parenthesized argument. The argument is kept as
    /// raw text; classification of the name (`:where`, `:is`, `:nth-child`,
    /// ordinary) happens during accumulation, where selector-list arguments
    /// recurse through the splitter and calculator.
    ///
    /// Examples: `:is(.a, #b)`, `:nth-child(2n+1 of .foo)`, `:lang(en)`
    FunctionalPseudoClass {
        /// The pseudo-class name, without colons or parentheses.
        name: String,
        /// The raw text between the balanced parentheses.
        argument: String,
    },

    /// An unrecognized fragment. Carries zero weight: malformed input
    /// degrades to a best-effort result instead of an error.
    Unknown,
}

/// Calculate the specificity of every complex selector in a selector list.
///
/// The input is split on top-level commas ([§ 4.1
/// Selector Lists](https://www.w3.org/TR/selectors-4/#grouping)) and each
/// member is calculated independently; the result preserves input order and
/// tags each triple with the trimmed selector text it came from.
///
/// Malformed selectors are never rejected; unrecognized fragments simply
/// contribute nothing.
///
/// # Errors
///
/// Returns [`SpecificityError::NestingTooDeep`] when functional
/// pseudo-class arguments nest deeper than [`MAX_NESTING_DEPTH`].
pub fn calculate(selector_list: &str) -> Result<Vec<SelectorSpecificity>, SpecificityError> {
    split_selector_list(selector_list)
        .into_iter()
        .map(|selector| {
            Ok(SelectorSpecificity {
                specificity: complex_specificity(selector, 0)?,
                selector: selector.to_string(),
            })
        })
        .collect()
}

/// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
///
/// Calculate the specificity of one complex selector by classifying its
/// atoms and accumulating:
/// - count the number of ID selectors in the selector (= A)
/// - count the number of class selectors, attributes selectors, and
///   pseudo-classes in the selector (= B)
/// - count the number of type selectors and pseudo-elements in the
///   selector (= C)
///
/// with the functional pseudo-class special cases of
/// [§ 4.5](https://www.w3.org/TR/selectors-4/#specificity-rules):
/// - `:where()` contributes zero; its argument is never descended into
/// - `:is()`, `:not()`, `:has()` (and the `:matches()`/`:any()` spellings)
///   contribute the specificity of the most specific complex selector in
///   their argument
/// - `:nth-child()`/`:nth-last-child()` contribute pseudo-class weight for
///   the `An+B` part, plus the most specific selector of an `of S` clause
fn complex_specificity(selector: &str, depth: usize) -> Result<Specificity, SpecificityError> {
    if depth > MAX_NESTING_DEPTH {
        return Err(SpecificityError::NestingTooDeep {
            limit: MAX_NESTING_DEPTH,
        });
    }

    let mut spec = Specificity::default();

    for atom in tokenize(selector) {
        match atom {
            SimpleSelector::Id(_) => spec.0 = spec.0.saturating_add(1),

            SimpleSelector::Class(_)
            | SimpleSelector::Attribute(_)
            | SimpleSelector::PseudoClass(_) => spec.1 = spec.1.saturating_add(1),

            SimpleSelector::Type(_) | SimpleSelector::PseudoElement(_) => {
                spec.2 = spec.2.saturating_add(1);
            }

            // "ignore the universal selector"
            SimpleSelector::Universal | SimpleSelector::Unknown => {}

            SimpleSelector::FunctionalPseudoClass { name, argument } => {
                let lower = name.to_ascii_lowercase();

                if lower == "where" {
                    // [§ 17] "The specificity of a :where() pseudo-class is
                    // replaced by zero."
                } else if SELECTOR_LIST_ARGUMENT_PSEUDO_CLASSES.contains(&lower.as_str()) {
                    // [§ 17] "The specificity of an :is(), :not(), or :has()
                    // pseudo-class is replaced by the specificity of the most
                    // specific complex selector in its selector list argument."
                    if let Some(max) = most_specific_in_list(&argument, depth)? {
                        spec.add(max);
                    }
                } else if NTH_CHILD_PSEUDO_CLASSES.contains(&lower.as_str()) {
                    // [§ 17] "The specificity of an :nth-child() or
                    // :nth-last-child() selector is the specificity of the
                    // pseudo class itself (counting as one pseudo-class
                    // selector) plus the specificity of the most specific
                    // complex selector in S."
                    spec.1 = spec.1.saturating_add(1);
                    if let Some(of_list) = nth_of_clause(&argument) {
                        if let Some(max) = most_specific_in_list(of_list, depth)? {
                            spec.add(max);
                        }
                    }
                } else {
                    // Any other functional pseudo-class (`:lang()`, `:dir()`,
                    // `:nth-of-type()`, ...) weighs like an ordinary
                    // pseudo-class; its argument is not a selector list.
                    spec.1 = spec.1.saturating_add(1);
                }
            }
        }
    }

    Ok(spec)
}

/// Specificity of the most specific complex selector in a comma-separated
/// argument list, or `None` for an empty argument (`:is()` adds nothing).
///
/// Recurses through the splitter and calculator with an incremented depth.
fn most_specific_in_list(
    argument: &str,
    depth: usize,
) -> Result<Option<Specificity>, SpecificityError> {
    let mut max: Option<Specificity> = None;
    for selector in split_selector_list(argument) {
        let candidate = complex_specificity(selector, depth + 1)?;
        if max.is_none_or(|current| candidate > current) {
            max = Some(candidate);
        }
    }
    Ok(max)
}

/// Extract the `S` of an `An+B of S` argument, if present.
///
/// [§ 14.3.1](https://www.w3.org/TR/selectors-4/#the-nth-child-pseudo)
/// `:nth-child(An+B [of S])`
///
/// The `of` keyword is matched case-insensitively, at nesting depth 0 only,
/// and only on identifier boundaries so that a class like `.office` inside
/// the clause can never be mistaken for the keyword.
fn nth_of_clause(argument: &str) -> Option<&str> {
    let chars: Vec<(usize, char)> = argument.char_indices().collect();
    let mut depth = 0_usize;

    for (i, &(offset, c)) in chars.iter().enumerate() {
        match c {
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            'o' | 'O' if depth == 0 => {
                let boundary_before = i == 0 || !is_ident_char(chars[i - 1].1);
                let f_follows = chars.get(i + 1).is_some_and(|&(_, c)| c == 'f' || c == 'F');
                let boundary_after = chars.get(i + 2).is_none_or(|&(_, c)| !is_ident_char(c));
                if boundary_before && f_follows && boundary_after {
                    // "of" is two ASCII bytes
                    return Some(&argument[offset + 2..]);
                }
            }
            _ => {}
        }
    }

    None
}

/// Tokenize one complex selector into its simple-selector atoms.
///
/// [§ 4 Selector syntax](https://www.w3.org/TR/selectors-4/#syntax)
///
/// Combinators and namespace separators are consumed without producing
/// atoms. Characters that fit no production become [`SimpleSelector::Unknown`]
/// (zero weight) rather than failing the tokenization.
#[must_use]
pub fn tokenize(selector: &str) -> Vec<SimpleSelector> {
    let mut atoms = Vec::new();
    let mut chars = selector.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            // [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
            // "An ID selector is a hash (#, U+0023) immediately followed by
            // the ID value, which is an identifier."
            '#' => {
                let name = collect_ident(&mut chars);
                if name.is_empty() {
                    atoms.push(SimpleSelector::Unknown);
                } else {
                    atoms.push(SimpleSelector::Id(name));
                }
            }

            // [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
            // "The class selector is given as a full stop (. U+002E)
            // immediately followed by an identifier."
            '.' => {
                let name = collect_ident(&mut chars);
                if name.is_empty() {
                    atoms.push(SimpleSelector::Unknown);
                } else {
                    atoms.push(SimpleSelector::Class(name));
                }
            }

            // [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
            // The contents are bracket-balanced and quote-aware but otherwise
            // opaque; an attribute selector weighs B regardless of operator.
            '[' => {
                atoms.push(SimpleSelector::Attribute(consume_attribute(&mut chars)));
            }

            // [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
            // [§ 11 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
            ':' => {
                let is_double = chars.peek() == Some(&':');
                if is_double {
                    let _ = chars.next();
                }

                let name = collect_ident(&mut chars);
                if name.is_empty() {
                    atoms.push(SimpleSelector::Unknown);
                    continue;
                }

                if chars.peek() == Some(&'(') {
                    let _ = chars.next();
                    let argument = consume_balanced_parens(&mut chars);
                    if is_double {
                        // e.g. ::highlight(name) — a pseudo-element either way
                        atoms.push(SimpleSelector::PseudoElement(name));
                    } else {
                        atoms.push(SimpleSelector::FunctionalPseudoClass { name, argument });
                    }
                } else if is_double || LEGACY_PSEUDO_ELEMENTS.contains(&name.to_ascii_lowercase().as_str()) {
                    atoms.push(SimpleSelector::PseudoElement(name));
                } else {
                    atoms.push(SimpleSelector::PseudoClass(name));
                }
            }

            // [§ 5.2 Universal selector](https://www.w3.org/TR/selectors-4/#universal-selector)
            // A `*` may also be the namespace half of `*|a`, in which case it
            // contributes nothing and the element name that follows decides
            // the weight.
            '*' => {
                if chars.peek() == Some(&'|') {
                    let _ = chars.next();
                    if chars.peek() == Some(&'|') {
                        // `* || b`: column combinator after a universal
                        let _ = chars.next();
                        atoms.push(SimpleSelector::Universal);
                    }
                    // `*|a` / `*|*`: any-namespace prefix, no weight; the
                    // next iteration handles the element name.
                } else {
                    atoms.push(SimpleSelector::Universal);
                }
            }

            // [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
            // "A combinator is punctuation that represents a particular kind
            // of relationship between the selectors on either side." No
            // weight is contributed.
            ' ' | '\t' | '\n' | '\r' | '>' | '+' | '~' => {}

            // Stray namespace separator with no preceding ident (`|div`);
            // a following `|` would be the column combinator.
            '|' => {
                if chars.peek() == Some(&'|') {
                    let _ = chars.next();
                }
            }

            // [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
            // An identifier is a type selector, unless a `|` follows, in
            // which case it was a namespace prefix (`ns|a`) and carries no
            // weight itself.
            _ if is_ident_start_char(c) || c == '-' => {
                let mut name = String::new();
                name.push(c);
                name.push_str(&collect_ident(&mut chars));

                if chars.peek() == Some(&'|') {
                    let _ = chars.next();
                    if chars.peek() == Some(&'|') {
                        // `a || b`: column combinator, so `a` was an element
                        let _ = chars.next();
                        atoms.push(SimpleSelector::Type(name));
                    }
                    // `ns|a`: the prefix weighs nothing; next iteration
                    // handles the element name or `*`.
                } else {
                    atoms.push(SimpleSelector::Type(name));
                }
            }

            // Anything else: unsupported syntax degrades to zero weight.
            _ => atoms.push(SimpleSelector::Unknown),
        }
    }

    atoms
}

/// Check if a character can start an identifier.
/// [§ 4.3.10 ident-start code point](https://www.w3.org/TR/css-syntax-3/#ident-start-code-point)
const fn is_ident_start_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || !c.is_ascii()
}

/// Check if a character can continue an identifier.
/// [§ 4.3.9 ident code point](https://www.w3.org/TR/css-syntax-3/#ident-code-point)
const fn is_ident_char(c: char) -> bool {
    is_ident_start_char(c) || c.is_ascii_digit() || c == '-'
}

/// Collect identifier characters from the stream.
fn collect_ident(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut ident = String::new();
    while let Some(&c) = chars.peek() {
        if !is_ident_char(c) {
            break;
        }
        ident.push(c);
        let _ = chars.next();
    }
    ident
}

/// Consume a balanced parenthesized argument (the opening `(` has already
/// been consumed) and return its raw contents. An unterminated argument
/// consumes the rest of the input, best effort.
fn consume_balanced_parens(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut argument = String::new();
    let mut depth = 1_u32;

    for c in chars.by_ref() {
        match c {
            '(' => {
                depth += 1;
                argument.push(c);
            }
            ')' => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
                argument.push(c);
            }
            _ => argument.push(c),
        }
    }

    argument
}

/// Consume an attribute selector body (the opening `[` has already been
/// consumed) up to its matching `]`, skipping over quoted strings so a `]`
/// inside a value cannot end the selector early. An unterminated selector
/// consumes the rest of the input, best effort.
fn consume_attribute(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut content = String::new();
    let mut depth = 1_u32;

    while let Some(c) = chars.next() {
        match c {
            '[' => {
                depth += 1;
                content.push(c);
            }
            ']' => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
                content.push(c);
            }
            '"' | '\'' => {
                content.push(c);
                for inner in chars.by_ref() {
                    content.push(inner);
                    if inner == c {
                        break;
                    }
                }
            }
            _ => content.push(c),
        }
    }

    content
}
