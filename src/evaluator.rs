//! Expression evaluation
//!
//! A combined infix-to-postfix conversion and immediate reduction: instead
//! of emitting postfix tokens and evaluating them in a second pass, every
//! operator popped off the operator stack is applied to the top two
//! operands right away. Numbers arrive as single-character fragments and
//! are assembled in a buffer until a non-numeric token flushes them.

use crate::cell::Cell;
use crate::error::{messages, EvalError, EvalResult};
use crate::memory::CellLookup;
use crate::resolver;
use crate::token::{self, Operator};

/// Symbols that may sit on the operator stack
#[derive(Debug, Clone, Copy, PartialEq)]
enum StackSymbol {
    Op(Operator),
    OpenParen,
}

/// Outcome of one [`evaluate`] call: a numeric result paired with an error
/// message.
///
/// A non-empty message means the result is not a computed value; it is
/// then the positive-infinity sentinel, the best-effort partial left over
/// by a failing reduction, or the fixed value the error kind dictates
/// (`0` for `missingParentheses`, positive infinity for `divideByZero`).
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    result: f64,
    error: String,
}

impl Evaluation {
    /// The computed value; meaningful only when [`error`](Self::error) is empty
    pub fn result(&self) -> f64 {
        self.result
    }

    /// Empty on success, otherwise a catalogue message or a forwarded
    /// cell error
    pub fn error(&self) -> &str {
        &self.error
    }

    /// True when evaluation produced a clean value
    pub fn is_ok(&self) -> bool {
        self.error.is_empty()
    }

    fn success(result: f64) -> Self {
        Self {
            result,
            error: String::new(),
        }
    }

    fn failure(err: EvalError) -> Self {
        let result = match err {
            EvalError::InvalidFormula { partial } => partial.unwrap_or(f64::INFINITY),
            EvalError::MissingParentheses => 0.0,
            _ => f64::INFINITY,
        };
        Self {
            result,
            error: err.to_string(),
        }
    }
}

/// Evaluate a formula against a sheet: resolve references, then reduce.
///
/// Never panics; every failure path ends in a non-empty
/// [`Evaluation::error`].
pub fn evaluate(formula: &[String], memory: &dyn CellLookup) -> Evaluation {
    let outcome = resolver::resolve(formula, memory)
        .and_then(|resolved| evaluate_tokens(&resolved));
    match outcome {
        Ok(value) => Evaluation::success(value),
        Err(err) => Evaluation::failure(err),
    }
}

/// Reduce a resolved token sequence to a single number.
pub fn evaluate_tokens(tokens: &[String]) -> EvalResult<f64> {
    let mut operands: Vec<f64> = Vec::new();
    let mut operators: Vec<StackSymbol> = Vec::new();
    let mut buffer = String::new();

    for tok in tokens.iter().map(String::as_str) {
        if token::is_number_fragment(tok) {
            buffer.push_str(tok);
            continue;
        }
        flush_number(&mut buffer, &mut operands)?;

        if let Some(op) = Operator::parse(tok) {
            // Left-associativity: drain every stacked operator of equal or
            // higher precedence before pushing the new one.
            while let Some(StackSymbol::Op(top)) = operators.last().copied() {
                if top.precedence() < op.precedence() {
                    break;
                }
                operators.pop();
                reduce(&mut operands, top)?;
            }
            operators.push(StackSymbol::Op(op));
        } else if tok == "(" {
            operators.push(StackSymbol::OpenParen);
        } else if tok == ")" {
            loop {
                match operators.pop() {
                    Some(StackSymbol::Op(top)) => reduce(&mut operands, top)?,
                    // The matching open parenthesis is discarded, not reduced.
                    Some(StackSymbol::OpenParen) => break,
                    None => {
                        // Excess closing parenthesis, nothing to match
                        return Err(EvalError::InvalidFormula {
                            partial: operands.first().copied(),
                        });
                    }
                }
            }
        }
        // Anything else is ignored, matching the reference behavior.
    }

    flush_number(&mut buffer, &mut operands)?;

    while let Some(sym) = operators.pop() {
        match sym {
            StackSymbol::Op(op) => reduce(&mut operands, op)?,
            StackSymbol::OpenParen => {
                // Unmatched open parenthesis left on the stack
                return Err(EvalError::InvalidFormula {
                    partial: operands.first().copied(),
                });
            }
        }
    }

    match operands.as_slice() {
        [] => Err(EvalError::MissingParentheses),
        [value] if !value.is_finite() => Err(EvalError::DivideByZero),
        [value] => Ok(*value),
        _ => Err(EvalError::InvalidFormula { partial: None }),
    }
}

/// Parse the number buffer, if non-empty, and push it onto the operand
/// stack. The parsed value must reproduce the buffer exactly when
/// re-displayed; forms like `.1`, `1.` or `01` are rejected.
fn flush_number(buffer: &mut String, operands: &mut Vec<f64>) -> EvalResult<()> {
    if buffer.is_empty() {
        return Ok(());
    }
    let parsed: f64 = buffer.parse().map_err(|_| EvalError::InvalidNumber)?;
    if parsed.to_string() != *buffer {
        return Err(EvalError::InvalidNumber);
    }
    operands.push(parsed);
    buffer.clear();
    Ok(())
}

/// Pop two operands (right first), apply the operator, push the result.
///
/// With fewer than two operands available, fails with `invalidFormula`
/// carrying whatever single operand remains as a partial value.
fn reduce(operands: &mut Vec<f64>, op: Operator) -> EvalResult<()> {
    match (operands.pop(), operands.pop()) {
        (Some(rhs), Some(lhs)) => {
            operands.push(op.apply(lhs, rhs));
            Ok(())
        }
        (leftover, _) => Err(EvalError::InvalidFormula { partial: leftover }),
    }
}

/// Stateless evaluation handle bound to a sheet.
///
/// Each call returns its own [`Evaluation`]; the handle keeps no
/// per-call state, so one instance can be shared freely.
pub struct FormulaEvaluator<'a> {
    memory: &'a dyn CellLookup,
}

impl<'a> FormulaEvaluator<'a> {
    pub fn new(memory: &'a dyn CellLookup) -> Self {
        Self { memory }
    }

    /// Evaluate one formula against the bound sheet
    pub fn evaluate(&self, formula: &[String]) -> Evaluation {
        evaluate(formula, self.memory)
    }

    /// True if the token parses as a number
    pub fn is_number(&self, token: &str) -> bool {
        token.parse::<f64>().is_ok()
    }

    /// True if the token is a well-formed cell label
    pub fn is_cell_reference(&self, token: &str) -> bool {
        Cell::is_valid_cell_label(token)
    }

    /// Look up a referenced cell's value without evaluating anything.
    ///
    /// Returns `(0.0, error)` when the cell carries an error other than
    /// the empty-formula marker, `(0.0, invalidCell)` when the cell is
    /// absent or its formula is empty, and `(value, "")` otherwise.
    pub fn cell_value(&self, token: &str) -> (f64, String) {
        let cell = match self.memory.get_cell_by_label(token) {
            Some(cell) => cell,
            None => return (0.0, messages::INVALID_CELL.to_string()),
        };

        let error = cell.error();
        if !error.is_empty() && error != messages::EMPTY_FORMULA {
            return (0.0, error.to_string());
        }
        if cell.formula().is_empty() {
            return (0.0, messages::INVALID_CELL.to_string());
        }
        (cell.value(), String::new())
    }
}
