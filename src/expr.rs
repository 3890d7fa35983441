//! Propositional expressions as owned syntax trees

use core::ops::{BitAnd, BitOr, Not, Sub};
use std::fmt;
use std::str::FromStr;

use crate::*;

/// A propositional expression tree.
///
/// Leaves are single-letter variables, internal nodes are negations or binary operations.
/// Each node owns its children: trees are never shared.
///
/// Expressions overload the ```&```, ```|```, ```!``` and ```-``` (difference) operators
/// to facilitate their definition in rust code. Unlike parsed text, these operators follow
/// the rust precedence rules.
///
/// ```
/// use truthset::Expr;
/// # use truthset::TruthsetError;
/// # fn main() -> Result<(), TruthsetError> {
///
/// let a = Expr::literal('A');
/// let built = (a & 'B') | 'C';
///
/// let parsed: Expr = "A&B|C".parse()?;
/// assert_eq!(parsed, built);
/// assert_eq!(parsed.to_string(), "A&B|C");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Expr {
    /// A single variable
    Literal(char),

    /// Negation of a sub-expression
    Not(Box<Expr>),

    /// Two sub-expressions joined by a binary operator
    Binary(Operator, Box<Expr>, Box<Expr>),
}

/// The binary operators, all sharing the same priority.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Operator {
    /// AND operator: both children need to be true
    And,
    /// OR operator: at least one child needs to be true
    Or,
    /// Difference: the first child is true and the second is false
    Diff,
}

impl Operator {
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '&' => Some(Operator::And),
            '|' => Some(Operator::Or),
            '\\' => Some(Operator::Diff),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::And => '&',
            Operator::Or => '|',
            Operator::Diff => '\\',
        }
    }

    /// Combine the values of both children
    pub fn apply(self, left: bool, right: bool) -> bool {
        match self {
            Operator::And => left && right,
            Operator::Or => left || right,
            Operator::Diff => left && !right,
        }
    }
}

impl Expr {
    pub fn literal(var: char) -> Self {
        Expr::Literal(var)
    }

    pub fn negate(e: impl Into<Expr>) -> Self {
        Expr::Not(Box::new(e.into()))
    }

    pub fn binary(op: Operator, left: impl Into<Expr>, right: impl Into<Expr>) -> Self {
        Expr::Binary(op, Box::new(left.into()), Box::new(right.into()))
    }

    /// Collect the variables of the tree, in order of first occurrence
    pub fn operands(&self) -> Operands {
        let mut operands = Operands::default();
        self.collect_operands(&mut operands);
        operands
    }

    fn collect_operands(&self, operands: &mut Operands) {
        match self {
            Expr::Literal(var) => operands.push_unique(*var),
            Expr::Not(e) => e.collect_operands(operands),
            Expr::Binary(_, left, right) => {
                left.collect_operands(operands);
                right.collect_operands(operands);
            }
        }
    }

    /// Evaluate the expression on a single assignment.
    ///
    /// Both children of binary operations are always evaluated, so that an undefined
    /// variable is reported even when the other side decides the result.
    pub fn eval(&self, assignment: &Assignment) -> Result<bool, TruthsetError> {
        match self {
            Expr::Literal(var) => assignment.value(*var),
            Expr::Not(e) => e.eval(assignment).map(|b| !b),
            Expr::Binary(op, left, right) => {
                let l = left.eval(assignment)?;
                let r = right.eval(assignment)?;
                Ok(op.apply(l, r))
            }
        }
    }

    /// Number of nodes in the tree
    pub fn size(&self) -> usize {
        match self {
            Expr::Literal(_) => 1,
            Expr::Not(e) => 1 + e.size(),
            Expr::Binary(_, left, right) => 1 + left.size() + right.size(),
        }
    }

    fn fmt_grouped(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Binary(..) => write!(f, "({})", self),
            _ => write!(f, "{}", self),
        }
    }
}

impl FromStr for Expr {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse::parse(s)
    }
}

impl From<char> for Expr {
    fn from(var: char) -> Self {
        Expr::Literal(var)
    }
}

impl From<&Expr> for Expr {
    fn from(e: &Expr) -> Self {
        e.clone()
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// Binary chains are left-associative: only right operands need parenthesis
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(var) => write!(f, "{}", var),
            Expr::Not(e) => {
                write!(f, "!")?;
                e.fmt_grouped(f)
            }
            Expr::Binary(op, left, right) => {
                write!(f, "{}{}", left, op)?;
                right.fmt_grouped(f)
            }
        }
    }
}

/* ************************************************************************************* */
/* ******************************   Operator overloading  ****************************** */
/* ************************************************************************************* */

impl Not for Expr {
    type Output = Self;
    fn not(self) -> Self::Output {
        Expr::negate(self)
    }
}

impl Not for &Expr {
    type Output = Expr;
    fn not(self) -> Self::Output {
        Expr::negate(self.clone())
    }
}

impl<T: Into<Expr>> BitAnd<T> for Expr {
    type Output = Expr;
    fn bitand(self, rhs: T) -> Self::Output {
        Expr::binary(Operator::And, self, rhs)
    }
}

impl<T: Into<Expr>> BitOr<T> for Expr {
    type Output = Expr;
    fn bitor(self, rhs: T) -> Self::Output {
        Expr::binary(Operator::Or, self, rhs)
    }
}

impl<T: Into<Expr>> Sub<T> for Expr {
    type Output = Expr;
    fn sub(self, rhs: T) -> Self::Output {
        Expr::binary(Operator::Diff, self, rhs)
    }
}
