use thiserror::Error;

/// Violation of the expression grammar.
///
/// Positions are character offsets in the original input, spaces included.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum SyntaxError {
    /// The input ended where an operand was expected
    #[error("Unexpected end of expression")]
    UnexpectedEnd,

    /// An operand was expected but the token is not a variable
    #[error("Expected literal at position {pos}, found '{found}'")]
    ExpectedLiteral { pos: usize, found: char },

    /// A group was not closed
    #[error("Expected ')' at position {pos}{}", found_suffix(.found))]
    MissingClose { pos: usize, found: Option<char> },

    /// Some input remains after a complete expression
    #[error("Unexpected '{found}' at position {pos} after the end of the expression")]
    TrailingInput { pos: usize, found: char },

    /// Too many nested groups or negations
    #[error("Expression nested too deeply at position {pos} (limit is {limit})")]
    NestingTooDeep { pos: usize, limit: usize },
}

fn found_suffix(found: &Option<char>) -> String {
    match found {
        Some(c) => format!(", found '{}'", c),
        None => String::new(),
    }
}

/// Error raised while evaluating an expression.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum TruthsetError {
    /// The expression could not be parsed
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    /// The expression uses a variable which is not in the list of operands
    #[error("Variable '{0}' is not part of the operand list")]
    UndefinedVariable(char),

    /// The universe would be too large
    #[error("Too many operands: {count} (limit is {limit})")]
    TooManyOperands { count: usize, limit: usize },

    /// The name is not a valid operand
    #[error("The operand '{0}' is invalid")]
    InvalidOperand(String),

    /// The operand is declared twice
    #[error("The operand '{0}' is declared twice")]
    DuplicateOperand(char),
}
