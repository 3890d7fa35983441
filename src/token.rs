//! Split raw text into single-character tokens

use crate::Operator;

/// A single character of the input, with its position.
///
/// Tokens carry no type tag: the parser decides what each symbol means.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    pub pos: usize,
    pub symbol: char,
}

impl Token {
    /// The binary operator denoted by this token, if any
    pub fn operator(&self) -> Option<Operator> {
        Operator::from_symbol(self.symbol)
    }

    /// Test if this token names a variable
    pub fn is_literal(&self) -> bool {
        self.symbol.is_ascii_uppercase()
    }
}

/// Split the input into tokens, dropping plain spaces.
///
/// Every other character becomes exactly one token, including characters which can not
/// appear in a valid expression: they are rejected later by the parser.
///
/// ```
/// use truthset::tokenize;
///
/// let tokens = tokenize("A & !b");
/// let symbols: String = tokens.iter().map(|t| t.symbol).collect();
/// assert_eq!(symbols, "A&!b");
/// assert_eq!(tokens[1].pos, 2);
/// ```
pub fn tokenize(input: &str) -> Vec<Token> {
    input
        .chars()
        .enumerate()
        .filter(|(_, c)| *c != ' ')
        .map(|(pos, symbol)| Token { pos, symbol })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::token::*;

    #[test]
    fn skip_spaces_only() {
        let tokens = tokenize(" (A |\tB) ");
        let symbols: Vec<char> = tokens.iter().map(|t| t.symbol).collect();
        assert_eq!(symbols, vec!['(', 'A', '|', '\t', 'B', ')']);
        assert_eq!(tokens[0].pos, 1);
        assert_eq!(tokens[5].pos, 7);
    }

    #[test]
    fn pass_through_unknown() {
        let tokens = tokenize("a1#\\");
        assert_eq!(tokens.len(), 4);
        assert!(tokens.iter().all(|t| !t.is_literal()));
        assert_eq!(tokens[3].operator(), Some(Operator::Diff));
        assert_eq!(tokens[2].operator(), None);
    }

    #[test]
    fn empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("    ").is_empty());
    }
}
