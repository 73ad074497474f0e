//! # cellcalc
//!
//! Evaluates a single spreadsheet-cell formula: a pre-tokenized infix
//! arithmetic expression that may reference other cells by label.
//!
//! This crate provides:
//! - Reference resolution (cell labels → current values, with error
//!   propagation from referenced cells)
//! - Infix evaluation over two interacting stacks (operands + operators)
//! - A fine-grained error taxonomy whose message strings are a
//!   compatibility surface
//!
//! Tokenizing raw formula text, cell storage beyond the [`CellLookup`]
//! seam, and dependency-cycle detection belong to collaborators, not to
//! this crate.
//!
//! ## Example
//!
//! ```rust
//! use cellcalc::{evaluate, SheetMemory};
//!
//! let memory = SheetMemory::new();
//! let formula: Vec<String> = "2+3*4".chars().map(String::from).collect();
//! let outcome = evaluate(&formula, &memory);
//! assert_eq!(outcome.result(), 14.0);
//! assert_eq!(outcome.error(), "");
//! ```

pub mod cell;
pub mod error;
pub mod evaluator;
pub mod memory;
pub mod resolver;
pub mod token;

pub use cell::Cell;
pub use error::{messages, EvalError, EvalResult};
pub use evaluator::{evaluate, evaluate_tokens, Evaluation, FormulaEvaluator};
pub use memory::{CellLookup, SheetMemory};
pub use resolver::resolve;
pub use token::{Formula, Operator};
