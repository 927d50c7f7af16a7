//! Error type for specificity calculation.

use thiserror::Error;

/// Error type for specificity calculation.
///
/// Malformed selector text is never an error: unrecognized fragments simply
/// contribute nothing (matching the permissive posture of CSS itself). The
/// only failure class is resource exhaustion from pathologically nested
/// functional pseudo-class arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SpecificityError {
    /// Functional pseudo-class arguments nested deeper than the supported
    /// limit, e.g. `:is(:is(:is(...)))` stacked past
    /// [`MAX_NESTING_DEPTH`](crate::MAX_NESTING_DEPTH).
    #[error("selector nesting exceeds the supported depth of {limit}")]
    NestingTooDeep {
        /// The depth limit that was exceeded.
        limit: usize,
    },
}
