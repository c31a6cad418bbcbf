//! Automaton construction errors.

use thiserror::Error;

/// Errors that can occur while constructing an automaton or its rule table.
///
/// Once construction succeeds every operation on the automaton is total.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutomatonError {
    /// Width or height was zero or negative.
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    /// A rule table was built from a slice that does not hold one entry per
    /// neighbor count.
    #[error("{table} table must have 9 entries, got {len}")]
    RuleTableLength { table: &'static str, len: usize },
}
