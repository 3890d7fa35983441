//! Enumerate all truth assignments of a list of operands

use crate::*;

use itertools::Itertools;
use std::fmt;

/// All truth assignments of an ordered list of operands.
///
/// The universe over ```n``` operands contains ```2^n``` assignments. The assignment with ID ```i```
/// gives to the ```j```-th operand the value of the bit ```j``` of ```i``` (least significant bit first).
/// Assignments are not stored: they are lightweight views derived from their ID.
///
/// ```
/// use truthset::Universe;
/// # use truthset::TruthsetError;
/// # fn main() -> Result<(), TruthsetError> {
///
/// let universe = Universe::new("A B".parse()?)?;
/// assert_eq!(universe.len(), 4);
///
/// let row = universe.get(2).unwrap();
/// assert_eq!(row.value('A')?, false);
/// assert_eq!(row.value('B')?, true);
/// assert_eq!(row.to_string(), "A=0 B=1");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Universe {
    operands: Operands,
    size: usize,
}

/// A single row of the truth table: a value for each operand of the universe.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Assignment<'a> {
    id: usize,
    operands: &'a Operands,
}

impl Universe {
    /// Create the universe of a list of operands.
    ///
    /// Fails if the number of assignments can not be represented.
    pub fn new(operands: Operands) -> Result<Self, TruthsetError> {
        let count = operands.len();
        if count >= usize::BITS as usize {
            return Err(TruthsetError::TooManyOperands {
                count,
                limit: usize::BITS as usize - 1,
            });
        }
        let size = 1usize << count;
        Ok(Self { operands, size })
    }

    pub fn operands(&self) -> &Operands {
        &self.operands
    }

    /// Number of assignments: 2 to the power of the number of operands
    pub fn len(&self) -> usize {
        self.size
    }

    /// A universe always contains at least the empty assignment
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Retrieve an assignment from its ID
    pub fn get(&self, id: usize) -> Option<Assignment<'_>> {
        match id < self.size {
            true => Some(Assignment {
                id,
                operands: &self.operands,
            }),
            false => None,
        }
    }

    /// Iterate over all assignments, by increasing ID
    pub fn iter(&self) -> impl Iterator<Item = Assignment<'_>> + '_ {
        (0..self.size).map(move |id| Assignment {
            id,
            operands: &self.operands,
        })
    }

    /// The set of all assignments
    pub fn full(&self) -> SatSet {
        SatSet::full(self.size)
    }

    /// The set of assignments where a variable is true
    pub fn literal(&self, var: char) -> Result<SatSet, TruthsetError> {
        let bit = self
            .operands
            .position(var)
            .ok_or(TruthsetError::UndefinedVariable(var))?;
        Ok((0..self.size).filter(|id| (id >> bit) & 1 == 1).collect())
    }

    /// Iterate over the assignments of a subset of this universe
    pub fn select<'a>(&'a self, set: &'a SatSet) -> impl Iterator<Item = Assignment<'a>> + 'a {
        set.iter().filter_map(move |id| self.get(id))
    }
}

impl<'a> Assignment<'a> {
    pub fn id(&self) -> usize {
        self.id
    }

    /// The value of a variable in this assignment
    pub fn value(&self, var: char) -> Result<bool, TruthsetError> {
        self.operands
            .position(var)
            .map(|bit| (self.id >> bit) & 1 == 1)
            .ok_or(TruthsetError::UndefinedVariable(var))
    }

    /// Iterate over the values of all operands, in operand order
    pub fn iter(&self) -> impl Iterator<Item = (char, bool)> + 'a {
        let (id, operands) = (self.id, self.operands);
        operands
            .iter()
            .enumerate()
            .map(move |(bit, var)| (*var, (id >> bit) & 1 == 1))
    }

    /// Number of operands
    pub fn len(&self) -> usize {
        self.operands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operands.is_empty()
    }
}

impl fmt::Display for Assignment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            self.iter()
                .map(|(var, value)| format!("{}={}", var, value as u8))
                .join(" ")
        )
    }
}
