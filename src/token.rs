//! Formula tokens and operator classification
//!
//! Formulas arrive pre-split: numbers come in as single digit or decimal
//! point characters, operators and parentheses as one-character tokens,
//! and cell references as whole labels. This module only classifies
//! tokens; it never splits text.

/// A formula is an ordered sequence of pre-split tokens.
pub type Formula = Vec<String>;

/// Column letters whose presence as a token's first character marks the
/// token as a cell reference.
///
/// Fixed allow-list for compatibility with the reference system; `F` and
/// `G` are absent, so a token like `F1` is not treated as a reference.
pub const REFERENCE_PREFIXES: [char; 9] = ['A', 'B', 'C', 'D', 'E', 'H', 'I', 'J', 'K'];

/// True if the token's first character puts it in the reference allow-list.
pub fn is_reference(token: &str) -> bool {
    token
        .chars()
        .next()
        .map_or(false, |c| REFERENCE_PREFIXES.contains(&c))
}

/// True if the token belongs in the number-accumulation buffer.
///
/// Any token containing a digit or a decimal point counts, so resolved
/// multi-character literals (including negative ones such as `-2.5`)
/// route to the buffer whole.
pub fn is_number_fragment(token: &str) -> bool {
    token.chars().any(|c| c.is_ascii_digit() || c == '.')
}

/// Binary arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Parse an operator token
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Sub),
            "*" => Some(Operator::Mul),
            "/" => Some(Operator::Div),
            _ => None,
        }
    }

    /// Binding strength: `*` and `/` bind tighter than `+` and `-`
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Mul | Operator::Div => 2,
            Operator::Add | Operator::Sub => 1,
        }
    }

    /// Apply the operator to two operands
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Sub => lhs - rhs,
            Operator::Mul => lhs * rhs,
            Operator::Div => lhs / rhs,
        }
    }
}
