//! Recursive-descent parser for propositional expressions
//!
//! ```text
//! expr    = primary { ( "&" | "|" | "\" ) primary }
//! primary = "(" expr ")" | "!" primary | literal
//! literal = "A" .. "Z"
//! ```
//!
//! All binary operators share the same priority and associate to the left:
//! ```A&B|C``` is read as ```(A&B)|C```. Negation applies to the next primary only.

use crate::token::{tokenize, Token};
use crate::*;
use log::{trace, warn};

/// Cursor over the tokens of a single input.
pub struct Parser {
    tokens: Vec<Token>,
    cursor: usize,
    depth: usize,
    max_depth: usize,
    end: usize,
}

impl Parser {
    pub fn new(input: &str, config: &Config) -> Self {
        Self {
            tokens: tokenize(input),
            cursor: 0,
            depth: 0,
            max_depth: config.get_max_depth(),
            end: input.chars().count(),
        }
    }

    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.cursor).copied()
    }

    fn consume(&mut self) -> Option<Token> {
        let token = self.peek();
        if token.is_some() {
            self.cursor += 1;
        }
        token
    }

    /// Parse a chain of primary expressions joined by binary operators.
    ///
    /// Each operator of the chain adds a level to the left-deep tree and counts against the depth limit.
    pub fn parse_expr(&mut self) -> Result<Expr, SyntaxError> {
        let base = self.depth;
        let result = self.parse_chain();
        self.depth = base;
        result
    }

    fn parse_chain(&mut self) -> Result<Expr, SyntaxError> {
        let mut expr = self.parse_primary()?;
        while let Some((pos, op)) = self.peek().and_then(|t| t.operator().map(|op| (t.pos, op))) {
            self.enter(pos)?;
            self.cursor += 1;
            let right = self.parse_primary()?;
            expr = Expr::Binary(op, Box::new(expr), Box::new(right));
        }
        Ok(expr)
    }

    fn parse_primary(&mut self) -> Result<Expr, SyntaxError> {
        match self.peek() {
            Some(Token { pos, symbol: '(' }) => {
                self.cursor += 1;
                let expr = self.nested(pos, Self::parse_expr)?;
                match self.consume() {
                    Some(Token { symbol: ')', .. }) => Ok(expr),
                    Some(t) => Err(SyntaxError::MissingClose {
                        pos: t.pos,
                        found: Some(t.symbol),
                    }),
                    None => Err(SyntaxError::MissingClose {
                        pos: self.end,
                        found: None,
                    }),
                }
            }
            Some(Token { pos, symbol: '!' }) => {
                self.cursor += 1;
                let operand = self.nested(pos, Self::parse_primary)?;
                Ok(Expr::Not(Box::new(operand)))
            }
            _ => self.parse_literal(),
        }
    }

    fn parse_literal(&mut self) -> Result<Expr, SyntaxError> {
        match self.consume() {
            Some(t) if t.is_literal() => Ok(Expr::Literal(t.symbol)),
            Some(t) => Err(SyntaxError::ExpectedLiteral {
                pos: t.pos,
                found: t.symbol,
            }),
            None => Err(SyntaxError::UnexpectedEnd),
        }
    }

    fn enter(&mut self, pos: usize) -> Result<(), SyntaxError> {
        if self.depth >= self.max_depth {
            return Err(SyntaxError::NestingTooDeep {
                pos,
                limit: self.max_depth,
            });
        }
        self.depth += 1;
        Ok(())
    }

    fn nested(
        &mut self,
        pos: usize,
        inner: fn(&mut Self) -> Result<Expr, SyntaxError>,
    ) -> Result<Expr, SyntaxError> {
        self.enter(pos)?;
        let result = inner(self);
        self.depth -= 1;
        result
    }

    /// Check that all tokens have been consumed
    pub fn finish(&self, trailing: Trailing) -> Result<(), SyntaxError> {
        match (self.peek(), trailing) {
            (None, _) => Ok(()),
            (Some(t), Trailing::Reject) => Err(SyntaxError::TrailingInput {
                pos: t.pos,
                found: t.symbol,
            }),
            (Some(t), Trailing::Ignore) => {
                warn!("Ignoring trailing input from position {}", t.pos);
                Ok(())
            }
        }
    }
}

/// Parse an expression, rejecting any trailing input.
///
/// ```
/// use truthset::{parse, Expr, Operator, SyntaxError};
///
/// let e = parse("!A&B").unwrap();
/// assert_eq!(e, Expr::binary(Operator::And, !Expr::literal('A'), 'B'));
///
/// assert_eq!(parse("A&"), Err(SyntaxError::UnexpectedEnd));
/// ```
pub fn parse(input: &str) -> Result<Expr, SyntaxError> {
    parse_with(input, &Config::default())
}

/// Parse an expression with custom limits and handling of trailing input
pub fn parse_with(input: &str, config: &Config) -> Result<Expr, SyntaxError> {
    let mut parser = Parser::new(input, config);
    let expr = parser.parse_expr()?;
    parser.finish(config.get_trailing())?;
    trace!("Parsed '{}' as {}", input, expr);
    Ok(expr)
}

#[cfg(test)]
mod tests {
    use crate::*;

    fn lit(c: char) -> Expr {
        Expr::literal(c)
    }

    #[test]
    fn uniform_priority() -> Result<(), SyntaxError> {
        assert_eq!(parse("A&B|C")?, (lit('A') & 'B') | 'C');
        assert_eq!(parse("A|B&C")?, (lit('A') | 'B') & 'C');
        assert_eq!(parse("A\\B\\C")?, (lit('A') - 'B') - 'C');
        assert_eq!(parse("A&(B|C)")?, lit('A') & (lit('B') | 'C'));
        assert_eq!(parse("A&B|C")?, parse("(A&B)|C")?);
        assert_ne!(parse("A&B|C")?, parse("A&(B|C)")?);
        Ok(())
    }

    #[test]
    fn negation_binds_tightly() -> Result<(), SyntaxError> {
        assert_eq!(parse("!A&B")?, !lit('A') & 'B');
        assert_eq!(parse("!(A&B)")?, !(lit('A') & 'B'));
        assert_eq!(parse("!!A")?, !!lit('A'));
        assert_eq!(parse(" ! ( A ) ")?, !lit('A'));
        Ok(())
    }

    #[test]
    fn syntax_errors() {
        assert_eq!(parse(""), Err(SyntaxError::UnexpectedEnd));
        assert_eq!(parse("A&"), Err(SyntaxError::UnexpectedEnd));
        assert_eq!(parse("!"), Err(SyntaxError::UnexpectedEnd));
        assert_eq!(
            parse("(A"),
            Err(SyntaxError::MissingClose {
                pos: 2,
                found: None
            })
        );
        assert_eq!(
            parse("(A&B]"),
            Err(SyntaxError::MissingClose {
                pos: 4,
                found: Some(']')
            })
        );
        assert_eq!(
            parse("a"),
            Err(SyntaxError::ExpectedLiteral { pos: 0, found: 'a' })
        );
        assert_eq!(
            parse("A & 1"),
            Err(SyntaxError::ExpectedLiteral { pos: 4, found: '1' })
        );
        assert_eq!(
            parse("&A"),
            Err(SyntaxError::ExpectedLiteral { pos: 0, found: '&' })
        );
        assert_eq!(
            parse("A|)"),
            Err(SyntaxError::ExpectedLiteral { pos: 2, found: ')' })
        );
    }

    #[test]
    fn trailing_input() -> Result<(), SyntaxError> {
        assert_eq!(
            parse("A)"),
            Err(SyntaxError::TrailingInput { pos: 1, found: ')' })
        );
        assert_eq!(
            parse("A B"),
            Err(SyntaxError::TrailingInput { pos: 2, found: 'B' })
        );

        let lenient = Config::default().trailing(Trailing::Ignore);
        assert_eq!(parse_with("A)", &lenient)?, lit('A'));
        assert_eq!(parse_with("A&B C|D", &lenient)?, lit('A') & 'B');
        Ok(())
    }

    #[test]
    fn nesting_limit() -> Result<(), SyntaxError> {
        let config = Config::default().max_depth(3);
        assert_eq!(parse_with("((A))&!!B", &config)?, lit('A') & !!lit('B'));
        assert_eq!(
            parse_with("((A))&!!!B", &config),
            Err(SyntaxError::NestingTooDeep { pos: 8, limit: 3 })
        );
        assert_eq!(
            parse_with("!!!!A", &config),
            Err(SyntaxError::NestingTooDeep { pos: 3, limit: 3 })
        );
        assert_eq!(
            parse_with("(((!A)))", &config),
            Err(SyntaxError::NestingTooDeep { pos: 3, limit: 3 })
        );

        assert_eq!(parse_with("A&B|C\\D", &config)?, ((lit('A') & 'B') | 'C') - 'D');
        assert_eq!(
            parse_with("A&B|C\\D&E", &config),
            Err(SyntaxError::NestingTooDeep { pos: 7, limit: 3 })
        );

        let deep = format!("{}A{}", "(".repeat(2000), ")".repeat(2000));
        assert!(matches!(
            parse(&deep),
            Err(SyntaxError::NestingTooDeep { .. })
        ));
        Ok(())
    }

    #[test]
    fn long_chains_are_bounded() -> Result<(), SyntaxError> {
        let chain = format!("{}A", "A&".repeat(100_000));
        assert_eq!(
            parse(&chain),
            Err(SyntaxError::NestingTooDeep {
                pos: 2 * MAX_DEPTH + 1,
                limit: MAX_DEPTH
            })
        );

        let chain = format!("{}B", "A|".repeat(MAX_DEPTH));
        assert_eq!(parse(&chain)?.size(), 2 * MAX_DEPTH + 1);
        Ok(())
    }
}
