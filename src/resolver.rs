//! Reference resolution pass
//!
//! Walks the token sequence once, left to right, substituting every cell
//! reference with the referenced cell's current value and inserting an
//! implicit multiplication operator before parentheses. The output feeds
//! directly into the evaluator; there is no retry or backtracking.

use crate::error::{EvalError, EvalResult};
use crate::memory::CellLookup;
use crate::token;

/// Resolve cell references in a formula against the given sheet.
///
/// Fails with [`EvalError::InvalidCell`] when a referenced cell is missing
/// or has an empty formula, forwards a referenced cell's own error
/// verbatim as [`EvalError::Cell`], and fails with
/// [`EvalError::EmptyFormula`] when the output comes out empty.
pub fn resolve(formula: &[String], memory: &dyn CellLookup) -> EvalResult<Vec<String>> {
    let mut resolved = Vec::with_capacity(formula.len());

    for (i, tok) in formula.iter().enumerate() {
        if token::is_reference(tok) {
            let cell = memory
                .get_cell_by_label(tok)
                .ok_or(EvalError::InvalidCell)?;
            if cell.formula().is_empty() {
                return Err(EvalError::InvalidCell);
            }
            if !cell.error().is_empty() {
                return Err(EvalError::Cell(cell.error().to_string()));
            }
            resolved.push(cell.value().to_string());
        } else if tok == "(" && i > 0 && formula[i - 1] != "*" {
            // Implicit multiplication: `2(3)` becomes `2*(3)`. The trigger
            // checks only that the *original* preceding token is not `*`,
            // so it also fires after `+`, `-` and `/`, producing sequences
            // like `2 + * ( 3 )` that the evaluator then rejects. Kept
            // as-is for compatibility with the reference system.
            resolved.push("*".to_string());
            resolved.push(tok.clone());
        } else {
            resolved.push(tok.clone());
        }
    }

    if resolved.is_empty() {
        return Err(EvalError::EmptyFormula);
    }
    Ok(resolved)
}
