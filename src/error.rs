//! Standard errors that may occur when working with polynomial literals.
//!
//! Parsing is the only recoverable failure surface in the crate. Everything
//! else that can go wrong (a missing witness inside the
//! Berlekamp-Massey-Sakata update, inverting a zero field element) is a
//! broken internal invariant and panics instead of returning an error.

use thiserror::Error;

/// Errors raised while reading the bracketed polynomial literal format.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ParseError {
    /// A `[` without its matching `]`, or a stray closing bracket.
    #[error("unbalanced brackets in polynomial literal")]
    UnbalancedBracket,
    /// A coefficient token the scalar type refused to parse.
    #[error("malformed coefficient literal `{0}`")]
    Coefficient(String),
    /// Sibling sub-polynomials of different nesting depth that cannot be
    /// reconciled (only the zero polynomial may be written shallower).
    #[error("inconsistent nesting in polynomial literal")]
    RaggedNesting,
    /// Leftover input after the outermost closing bracket.
    #[error("trailing input after polynomial literal")]
    TrailingInput,
}

/// Standard result using `ParseError`.
pub type Result<T> = std::result::Result<T, ParseError>;
