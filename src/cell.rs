//! The cell entity referenced by formulas

use crate::token::{Formula, REFERENCE_PREFIXES};

/// A spreadsheet cell as the evaluator sees it: its own formula tokens,
/// the value its last evaluation computed, and any error that evaluation
/// produced.
///
/// An empty formula means the cell has no value; a non-empty error marks
/// the cell as errored for reference purposes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cell {
    formula: Formula,
    value: f64,
    error: String,
}

impl Cell {
    /// Create an empty cell (no formula, no value, no error)
    pub fn new() -> Self {
        Self::default()
    }

    /// Cell holding an already-evaluated value
    pub fn with_value(formula: Formula, value: f64) -> Self {
        Self {
            formula,
            value,
            error: String::new(),
        }
    }

    /// Cell whose own prior evaluation failed
    pub fn with_error(formula: Formula, error: impl Into<String>) -> Self {
        Self {
            formula,
            value: 0.0,
            error: error.into(),
        }
    }

    /// The cell's formula tokens; empty means the cell has no value
    pub fn formula(&self) -> &[String] {
        &self.formula
    }

    /// Last-computed numeric value
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Error from the cell's own prior evaluation; empty means none
    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn set_formula(&mut self, formula: Formula) {
        self.formula = formula;
    }

    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }

    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error = error.into();
    }

    /// Check whether a token is a well-formed cell label: one recognized
    /// column letter followed by a 1-based row number.
    pub fn is_valid_cell_label(label: &str) -> bool {
        let mut chars = label.chars();
        let col = match chars.next() {
            Some(c) => c,
            None => return false,
        };
        if !REFERENCE_PREFIXES.contains(&col) {
            return false;
        }
        let row = chars.as_str();
        !row.is_empty() && !row.starts_with('0') && row.bytes().all(|b| b.is_ascii_digit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_accessors() {
        let cell = Cell::with_value(vec!["5".into()], 5.0);
        assert_eq!(cell.formula(), ["5".to_string()]);
        assert_eq!(cell.value(), 5.0);
        assert_eq!(cell.error(), "");
    }

    #[test]
    fn test_errored_cell() {
        let cell = Cell::with_error(vec!["1".into(), "/".into(), "0".into()], "#DIV/0");
        assert_eq!(cell.error(), "#DIV/0");
        assert_eq!(cell.value(), 0.0);
    }

    #[test]
    fn test_valid_cell_labels() {
        assert!(Cell::is_valid_cell_label("A1"));
        assert!(Cell::is_valid_cell_label("K99"));
        assert!(Cell::is_valid_cell_label("B10"));
    }

    #[test]
    fn test_invalid_cell_labels() {
        // F is outside the recognized column set
        assert!(!Cell::is_valid_cell_label("F1"));
        assert!(!Cell::is_valid_cell_label("A0"));
        assert!(!Cell::is_valid_cell_label("A"));
        assert!(!Cell::is_valid_cell_label("1A"));
        assert!(!Cell::is_valid_cell_label("AA1"));
        assert!(!Cell::is_valid_cell_label(""));
    }
}
