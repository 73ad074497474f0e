//! Evaluation error taxonomy
//!
//! The `Display` strings are a compatibility surface; callers compare them
//! against the constants in [`messages`].

use thiserror::Error;

/// Result type for evaluation steps
pub type EvalResult<T> = std::result::Result<T, EvalError>;

/// Error message catalogue
pub mod messages {
    pub const INVALID_CELL: &str = "invalidCell";
    pub const EMPTY_FORMULA: &str = "emptyFormula";
    pub const INVALID_NUMBER: &str = "invalidNumber";
    pub const INVALID_FORMULA: &str = "invalidFormula";
    pub const MISSING_PARENTHESES: &str = "missingParentheses";
    pub const DIVIDE_BY_ZERO: &str = "divideByZero";
}

/// Errors that can occur while resolving references or reducing a formula
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// Referenced cell is missing, has an empty formula, or the lookup failed
    #[error("invalidCell")]
    InvalidCell,

    /// The resolved token sequence came out empty
    #[error("emptyFormula")]
    EmptyFormula,

    /// A numeric literal's canonical form does not match its source text
    #[error("invalidNumber")]
    InvalidNumber,

    /// Operand/operator count mismatch. Carries the leftover operand, if
    /// any, as a best-effort partial value for diagnostics.
    #[error("invalidFormula")]
    InvalidFormula { partial: Option<f64> },

    /// Operand stack empty after full reduction
    #[error("missingParentheses")]
    MissingParentheses,

    /// A division produced a non-finite value
    #[error("divideByZero")]
    DivideByZero,

    /// A referenced cell already carries an error; forwarded verbatim
    #[error("{0}")]
    Cell(String),
}
