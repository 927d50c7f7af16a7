//! The specificity triple and its interop representations.
//!
//! [§ 17 Calculating a selector's specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)

use serde::{Deserialize, Serialize};

/// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
/// "A selector's specificity is calculated for a given element as follows:
///  - count the number of ID selectors in the selector (= A)
///  - count the number of class selectors, attributes selectors, and pseudo-classes in the selector (= B)
///  - count the number of type selectors and pseudo-elements in the selector (= C)
///
/// Specificities are compared by comparing the three components in order."
///
/// The derived `Ord` implements exactly that component-wise lexicographic
/// comparison; no component ever carries into another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
pub struct Specificity(pub u32, pub u32, pub u32);

impl Specificity {
    /// Create a new specificity with (A, B, C) components.
    #[must_use]
    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        Self(a, b, c)
    }

    /// The A component: the number of ID selectors.
    #[must_use]
    pub const fn a(self) -> u32 {
        self.0
    }

    /// The B component: the number of class selectors, attribute selectors,
    /// and pseudo-classes.
    #[must_use]
    pub const fn b(self) -> u32 {
        self.1
    }

    /// The C component: the number of type selectors and pseudo-elements.
    #[must_use]
    pub const fn c(self) -> u32 {
        self.2
    }

    /// Convert to the plain `{a, b, c}` record used for interop and testing.
    #[must_use]
    pub const fn to_object(self) -> SpecificityObject {
        SpecificityObject {
            a: self.0,
            b: self.1,
            c: self.2,
        }
    }

    /// Add another specificity component-wise, saturating on overflow.
    pub(crate) const fn add(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
        self.1 = self.1.saturating_add(other.1);
        self.2 = self.2.saturating_add(other.2);
    }
}

impl std::fmt::Display for Specificity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{},{})", self.0, self.1, self.2)
    }
}

/// Plain-record view of a [`Specificity`] with named `a`/`b`/`c` fields.
///
/// Serializes to `{"a": .., "b": .., "c": ..}` for consumers that exchange
/// specificities as JSON (linters, editor tooling).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecificityObject {
    /// ID selector count.
    pub a: u32,
    /// Class, attribute, and pseudo-class count.
    pub b: u32,
    /// Type selector and pseudo-element count.
    pub c: u32,
}

impl From<SpecificityObject> for Specificity {
    fn from(object: SpecificityObject) -> Self {
        Self(object.a, object.b, object.c)
    }
}

/// One entry of a [`calculate`](crate::calculate) result: the specificity of
/// a single complex selector, tagged with the selector text it was computed
/// from.
///
/// The selector text is diagnostic only; equality and ordering of
/// specificities never consult it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorSpecificity {
    /// The computed (A, B, C) triple.
    pub specificity: Specificity,
    /// The trimmed complex-selector text this entry was computed from.
    pub selector: String,
}
