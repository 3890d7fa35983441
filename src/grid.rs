//! Lay out the universe of an evaluation as a square-ish grid
//!
//! The grid is mirrored to alternating sides with each new operand: ```n``` operands give
//! ```2^ceil(n/2)``` columns and ```2^ceil((n-1)/2)``` rows. The cell ```(x, y)``` shows the assignment
//! with ID ```x + y * width```.

use crate::*;
use std::fmt;

/// Grid layout of an [Evaluation].
///
/// ```
/// use truthset::evaluate;
/// # use truthset::TruthsetError;
/// # fn main() -> Result<(), TruthsetError> {
///
/// let evaluation = evaluate("A|C&!B", None)?;
/// let grid = evaluation.grid();
/// assert_eq!((grid.width(), grid.height()), (4, 2));
/// assert_eq!(grid.to_string(), ".###\n....\n");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Grid<'a> {
    evaluation: &'a Evaluation,
    width: usize,
    height: usize,
}

/// A single cell of the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell<'a> {
    pub x: usize,
    pub y: usize,
    pub assignment: Assignment<'a>,
    pub selected: bool,
}

impl<'a> Grid<'a> {
    pub fn new(evaluation: &'a Evaluation) -> Self {
        let n = evaluation.operands().len();
        // ceil(n/2) bits for the columns, the remaining bits for the rows
        let width = 1 << ((n + 1) / 2);
        let height = 1 << (n / 2);
        Self {
            evaluation,
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The assignment ID displayed at a position
    pub fn index(&self, x: usize, y: usize) -> Option<usize> {
        match x < self.width && y < self.height {
            true => Some(x + y * self.width),
            false => None,
        }
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<Cell<'a>> {
        let evaluation = self.evaluation;
        let assignment = evaluation.universe().get(self.index(x, y)?)?;
        Some(Cell {
            x,
            y,
            assignment,
            selected: evaluation.contains(&assignment),
        })
    }

    /// Iterate over the cells of a row
    pub fn row(&self, y: usize) -> impl Iterator<Item = Cell<'a>> + '_ {
        (0..self.width).filter_map(move |x| self.cell(x, y))
    }
}

impl fmt::Display for Grid<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height {
            for cell in self.row(y) {
                write!(f, "{}", if cell.selected { '#' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn dimensions() -> Result<(), TruthsetError> {
        let expected = [(1, 2, 1), (2, 2, 2), (3, 4, 2), (4, 4, 4), (5, 8, 4)];
        let names = "A B C D E".parse::<Operands>()?;
        for (n, w, h) in expected {
            let operands = Operands::new(names.iter().take(n).copied())?;
            let evaluation = Evaluator::default().evaluate_expr(&Expr::literal('A'), operands)?;
            let grid = evaluation.grid();
            assert_eq!((grid.width(), grid.height()), (w, h));
            assert_eq!(grid.width() * grid.height(), evaluation.universe().len());
        }
        Ok(())
    }

    #[test]
    fn cells() -> Result<(), TruthsetError> {
        let evaluation = evaluate("A&B", None)?;
        let grid = evaluation.grid();
        assert_eq!(grid.to_string(), "..\n.#\n");

        let cell = grid.cell(1, 1).ok_or(TruthsetError::UndefinedVariable('?'))?;
        assert_eq!(cell.assignment.id(), 3);
        assert!(cell.selected);
        assert_eq!(grid.index(0, 1), Some(2));
        assert!(grid.cell(2, 0).is_none());
        assert_eq!(grid.row(0).filter(|c| c.selected).count(), 0);
        Ok(())
    }

    #[test]
    fn single_cell_without_operands() -> Result<(), TruthsetError> {
        let evaluation = Evaluator::default().evaluate_expr(&Expr::literal('A'), "A".parse()?)?;
        assert_eq!(evaluation.grid().to_string(), ".#\n");

        let empty = Evaluation::new(Universe::new(Operands::default())?, SatSet::new());
        let grid = empty.grid();
        assert_eq!((grid.width(), grid.height()), (1, 1));
        assert_eq!(grid.to_string(), ".\n");
        Ok(())
    }
}
