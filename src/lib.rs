//! Evaluate propositional expressions as sets of truth assignments.
//!
//! An [expression](Expr) combines single-letter variables (```A``` to ```Z```) with the NOT (```!```),
//! AND (```&```), OR (```|```) and difference (```\```) operators and parentheses.
//! All binary operators share the same priority and associate to the left: ```A&B|C``` is read
//! as ```(A&B)|C``` and mixed operators need parentheses to be grouped differently.
//!
//! ```
//! use truthset::{parse, Expr};
//! # use truthset::SyntaxError;
//! # fn main() -> Result<(), SyntaxError> {
//!
//! let e = parse("!A&(B|C)")?;
//! assert_eq!(e, !Expr::literal('A') & (Expr::literal('B') | 'C'));
//! # Ok(())
//! # }
//! ```
//!
//! # Universe and satisfying sets
//!
//! The [operands](Operands) of an expression are its variables, in order of first occurrence.
//! They define a [universe](Universe) of ```2^n``` [assignments](Assignment), where the assignment with ID ```i```
//! gives to the ```j```-th operand the value of the bit ```j``` of ```i```.
//!
//! Instead of evaluating the expression on each row of the truth table, the [evaluator](Evaluator)
//! computes for each node of the tree the [set](SatSet) of assignments satisfying it, using
//! intersection, union, difference and complement of bit-sets.
//!
//! ```
//! use truthset::evaluate;
//! # use truthset::TruthsetError;
//! # fn main() -> Result<(), TruthsetError> {
//!
//! let evaluation = evaluate("A\\B", None)?;
//! for assignment in evaluation.satisfying() {
//!     println!("{}", assignment);
//! }
//! assert_eq!(evaluation.result().len(), 1);
//!
//! // The list of operands can be forced, for example to compare several expressions
//! let evaluation = evaluate("A\\B", Some("A B C".parse()?))?;
//! assert_eq!(evaluation.result().len(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! # Grid layout
//!
//! A [grid](Grid) arranges the universe in ```2^ceil(n/2)``` columns and ```2^ceil((n-1)/2)``` rows,
//! marking the cells of the satisfying assignments. It can be used directly to display the result.
//!
//! ```
//! use truthset::evaluate;
//! # use truthset::TruthsetError;
//! # fn main() -> Result<(), TruthsetError> {
//!
//! let evaluation = evaluate("A|B", None)?;
//! print!("{}", evaluation.grid());
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod eval;
mod expr;
mod grid;
mod operands;
mod parse;
mod sets;
pub mod token;
mod universe;

// Export public structures and API
pub use config::{Config, Trailing, MAX_DEPTH, MAX_OPERANDS};
pub use error::{SyntaxError, TruthsetError};
pub use eval::{evaluate, satisfying_set, Evaluation, Evaluator};
pub use expr::{Expr, Operator};
pub use grid::{Cell, Grid};
pub use operands::{find_all_operands, Operands};
pub use parse::{parse, parse_with, Parser};
pub use sets::SatSet;
pub use token::{tokenize, Token};
pub use universe::{Assignment, Universe};
