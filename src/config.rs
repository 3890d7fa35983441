//! Limits and parsing options for the evaluation of expressions

/// Default ceiling on the number of operands: 2^24 rows per universe
pub const MAX_OPERANDS: usize = 24;

/// Default ceiling on the depth of expression trees: nested groups, negations and chained operators
pub const MAX_DEPTH: usize = 512;

/// Handling of input remaining after a complete expression
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Trailing {
    /// Fail with [SyntaxError::TrailingInput](crate::SyntaxError::TrailingInput)
    #[default]
    Reject,
    /// Keep the leading expression and drop the rest with a warning
    Ignore,
}

/// Settings shared by the parser and the evaluator.
///
/// ```
/// use truthset::{Config, Trailing};
///
/// let config = Config::default().max_operands(8).trailing(Trailing::Ignore);
/// assert_eq!(config.get_max_operands(), 8);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    max_operands: usize,
    max_depth: usize,
    trailing: Trailing,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_operands: MAX_OPERANDS,
            max_depth: MAX_DEPTH,
            trailing: Trailing::default(),
        }
    }
}

impl Config {
    pub fn max_operands(mut self, limit: usize) -> Self {
        self.max_operands = limit;
        self
    }

    pub fn max_depth(mut self, limit: usize) -> Self {
        self.max_depth = limit;
        self
    }

    pub fn trailing(mut self, trailing: Trailing) -> Self {
        self.trailing = trailing;
        self
    }

    pub fn get_max_operands(&self) -> usize {
        self.max_operands
    }

    pub fn get_max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn get_trailing(&self) -> Trailing {
        self.trailing
    }
}
