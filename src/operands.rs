//! Ordered lists of distinct variables

use crate::*;

use delegate::delegate;
use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

static RE_OPERAND: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]").unwrap());
static RE_OPERAND_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]$").unwrap());

static NAME_SEPARATORS: [char; 3] = [' ', ',', ';'];

/// The ordered list of variables defining a universe.
///
/// The position of a variable in this list gives its bit in the ID of each
/// [assignment](Assignment): the first variable is the least significant bit.
/// Variables are unique in the list.
///
/// ```
/// use truthset::{find_all_operands, Operands};
/// # use truthset::TruthsetError;
/// # fn main() -> Result<(), TruthsetError> {
///
/// let found = find_all_operands("B&A&B");
/// assert_eq!(found.to_string(), "B A");
///
/// let declared: Operands = "A, B; C".parse()?;
/// assert_eq!(declared.position('C'), Some(2));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct Operands {
    variables: Vec<char>,
}

impl Operands {
    /// Build an explicit list of operands, used verbatim.
    ///
    /// Duplicate variables are rejected, other characters are accepted as they are.
    pub fn new(variables: impl IntoIterator<Item = char>) -> Result<Self, TruthsetError> {
        let mut operands = Self::default();
        for var in variables {
            if operands.contains(&var) {
                return Err(TruthsetError::DuplicateOperand(var));
            }
            operands.variables.push(var);
        }
        Ok(operands)
    }

    pub(crate) fn push_unique(&mut self, var: char) {
        if !self.contains(&var) {
            self.variables.push(var);
        }
    }

    /// Bit index of a variable
    pub fn position(&self, var: char) -> Option<usize> {
        self.variables.iter().position(|v| *v == var)
    }

    pub fn as_slice(&self) -> &[char] {
        &self.variables
    }

    delegate! {
        to self.variables {
            pub fn len(&self) -> usize;
            pub fn is_empty(&self) -> bool;
            pub fn contains(&self, var: &char) -> bool;
            pub fn iter(&self) -> std::slice::Iter<'_, char>;
            pub fn get(&self, index: usize) -> Option<&char>;
        }
    }
}

/// Collect all variables in the input, in order of first occurrence.
///
/// This scans the raw characters and does not require the input to be a valid expression.
pub fn find_all_operands(input: &str) -> Operands {
    let mut operands = Operands::default();
    RE_OPERAND
        .find_iter(input)
        .filter_map(|m| m.as_str().chars().next())
        .for_each(|var| operands.push_unique(var));
    operands
}

impl FromStr for Operands {
    type Err = TruthsetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let variables: Vec<char> = s
            .split(&NAME_SEPARATORS[..])
            .filter(|n| !n.is_empty())
            .map(|n| match (RE_OPERAND_NAME.is_match(n), n.chars().next()) {
                (true, Some(var)) => Ok(var),
                _ => Err(TruthsetError::InvalidOperand(n.to_string())),
            })
            .collect::<Result<_, _>>()?;
        Self::new(variables)
    }
}

impl<'a> IntoIterator for &'a Operands {
    type Item = &'a char;
    type IntoIter = std::slice::Iter<'a, char>;

    fn into_iter(self) -> Self::IntoIter {
        self.variables.iter()
    }
}

impl fmt::Display for Operands {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.variables.iter().join(" "))
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn discover_operands() {
        let found = find_all_operands("B&A&B");
        assert_eq!(found.as_slice(), &['B', 'A']);

        // malformed input is scanned as well
        let found = find_all_operands("(C & a) ||| Z 1 C");
        assert_eq!(found.as_slice(), &['C', 'Z']);

        assert!(find_all_operands("").is_empty());
        assert!(find_all_operands("abc & !x").is_empty());
    }

    #[test]
    fn declared_operands() -> Result<(), TruthsetError> {
        let operands: Operands = " A,B ;C  D".parse()?;
        assert_eq!(operands.len(), 4);
        assert_eq!(operands.position('A'), Some(0));
        assert_eq!(operands.position('D'), Some(3));
        assert_eq!(operands.position('E'), None);
        assert_eq!(operands.to_string(), "A B C D");

        assert_eq!(
            "A B A".parse::<Operands>(),
            Err(TruthsetError::DuplicateOperand('A'))
        );
        assert_eq!(
            "A BC".parse::<Operands>(),
            Err(TruthsetError::InvalidOperand("BC".to_string()))
        );
        assert_eq!(
            "a".parse::<Operands>(),
            Err(TruthsetError::InvalidOperand("a".to_string()))
        );

        let empty: Operands = "".parse()?;
        assert!(empty.is_empty());

        let verbatim = Operands::new(['Q', 'A', 'x'])?;
        assert_eq!(verbatim.as_slice(), &['Q', 'A', 'x']);

        Ok(())
    }
}
