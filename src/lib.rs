//! CSS selector specificity calculation, comparison, and sorting.
//!
//! # Scope
//!
//! This crate implements:
//! - **Selector list splitting** ([§ 4.1 Selector Lists](https://www.w3.org/TR/selectors-4/#grouping))
//!   - Top-level commas only; commas inside functional pseudo-class
//!     arguments or attribute selectors never split
//!
//! - **Specificity calculation** ([§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules))
//!   - Type, universal, ID, class, attribute, namespaced selectors
//!   - Pseudo-classes, pseudo-elements, and the legacy single-colon
//!     pseudo-element names
//!   - Functional pseudo-classes with selector-list arguments:
//!     `:is()`, `:not()`, `:has()`, `:where()`, the `:matches()`/`:any()`
//!     spellings and their vendor prefixes, and
//!     `:nth-child(An+B of S)`/`:nth-last-child(An+B of S)`
//!
//! - **Comparison and sorting** ([§ 17](https://www.w3.org/TR/selectors-4/#specificity-rules))
//!   - Lexicographic total order over (A, B, C) triples
//!   - Stable ascending/descending sort, highest/lowest selection
//!
//! Parsing is permissive by design: malformed or unsupported fragments
//! contribute zero weight instead of failing, matching the posture of
//! real-world CSS tooling. The one hard limit is the nesting depth of
//! functional pseudo-class arguments ([`MAX_NESTING_DEPTH`]).
//!
//! # Not Implemented
//!
//! - Selector matching against a document tree
//! - Validation against the full selector grammar
//! - At-rule and declaration-level cascade logic (`!important`, layers)
//!
//! # Example
//!
//! ```
//! use css_specificity::{Specificity, calculate};
//!
//! let entries = calculate(".foo :is(.bar, #baz)").unwrap();
//! assert_eq!(entries[0].specificity, Specificity(1, 1, 0));
//! ```

/// Error type for specificity calculation.
pub mod error;
/// Selector list splitting per [§ 4.1 Selector Lists](https://www.w3.org/TR/selectors-4/#grouping).
pub mod list;
/// Comparison, sorting, and selection over specificity triples.
pub mod ordering;
/// Selector tokenization and specificity calculation per [§ 17](https://www.w3.org/TR/selectors-4/#specificity-rules).
pub mod selector;
/// The specificity triple and its interop representations.
pub mod specificity;

// Re-exports for convenience
pub use error::SpecificityError;
pub use list::split_selector_list;
pub use ordering::{
    SortOrder, ascending, compare, descending, equals, highest, less_specific_than, lowest,
    more_specific_than, sort,
};
pub use selector::{MAX_NESTING_DEPTH, SimpleSelector, calculate, tokenize};
pub use specificity::{SelectorSpecificity, Specificity, SpecificityObject};
