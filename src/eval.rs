//! Compute the satisfying set of an expression in the universe of its operands

use crate::*;
use log::{debug, trace};

/// Parse and evaluate expressions with a fixed configuration.
#[derive(Clone, Debug, Default)]
pub struct Evaluator {
    config: Config,
}

/// The outcome of an evaluation: a universe and the subset satisfying the expression.
#[derive(Clone, Debug)]
pub struct Evaluation {
    universe: Universe,
    result: SatSet,
}

impl Evaluator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parse the input and evaluate it.
    ///
    /// If a list of operands is provided, it is used verbatim to build the universe,
    /// otherwise the operands are the variables found in the input.
    pub fn evaluate(
        &self,
        input: &str,
        operands: Option<Operands>,
    ) -> Result<Evaluation, TruthsetError> {
        let expr = parse_with(input, &self.config)?;
        let operands = operands.unwrap_or_else(|| find_all_operands(input));
        self.evaluate_expr(&expr, operands)
    }

    /// Evaluate an expression tree in the universe of the given operands
    pub fn evaluate_expr(
        &self,
        expr: &Expr,
        operands: Operands,
    ) -> Result<Evaluation, TruthsetError> {
        debug!("Operands: {}", operands);
        let limit = self.config.get_max_operands();
        if operands.len() > limit {
            return Err(TruthsetError::TooManyOperands {
                count: operands.len(),
                limit,
            });
        }

        let universe = Universe::new(operands)?;
        trace!("Universe of {} assignments", universe.len());
        let result = satisfying_set(expr, &universe)?;
        Ok(Evaluation { universe, result })
    }
}

/// Compute the set of assignments of the universe which satisfy an expression.
///
/// Fails if the expression uses a variable which is not an operand of the universe.
pub fn satisfying_set(expr: &Expr, universe: &Universe) -> Result<SatSet, TruthsetError> {
    match expr {
        Expr::Literal(var) => universe.literal(*var),
        Expr::Not(e) => Ok(satisfying_set(e, universe)?.complement(universe.len())),
        Expr::Binary(op, left, right) => {
            let mut result = satisfying_set(left, universe)?;
            let other = satisfying_set(right, universe)?;
            match op {
                Operator::And => result.intersect_with(&other),
                Operator::Or => result.union_with(&other),
                Operator::Diff => result.difference_with(&other),
            }
            Ok(result)
        }
    }
}

/// Parse and evaluate an expression with the default configuration.
///
/// ```
/// use truthset::evaluate;
/// # use truthset::TruthsetError;
/// # fn main() -> Result<(), TruthsetError> {
///
/// let evaluation = evaluate("A&B", None)?;
/// assert_eq!(evaluation.operands().to_string(), "A B");
/// assert_eq!(evaluation.universe().len(), 4);
/// assert_eq!(evaluation.result().to_string(), "{3}");
///
/// // Force a larger universe
/// let evaluation = evaluate("A&B", Some("A B C".parse()?))?;
/// assert_eq!(evaluation.result().to_string(), "{3, 7}");
/// # Ok(())
/// # }
/// ```
pub fn evaluate(input: &str, operands: Option<Operands>) -> Result<Evaluation, TruthsetError> {
    Evaluator::default().evaluate(input, operands)
}

impl Evaluation {
    /// Wrap a set of assignments, ignoring IDs outside of the universe
    pub fn new(universe: Universe, result: SatSet) -> Self {
        let result = result.iter().filter(|id| *id < universe.len()).collect();
        Self { universe, result }
    }

    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    pub fn operands(&self) -> &Operands {
        self.universe.operands()
    }

    /// The IDs of the satisfying assignments
    pub fn result(&self) -> &SatSet {
        &self.result
    }

    /// Iterate over the satisfying assignments, by increasing ID
    pub fn satisfying(&self) -> impl Iterator<Item = Assignment<'_>> + '_ {
        self.universe.select(&self.result)
    }

    /// Test if an assignment satisfies the expression
    pub fn contains(&self, assignment: &Assignment) -> bool {
        self.result.contains(assignment.id())
    }

    /// Lay out the universe as a grid
    pub fn grid(&self) -> Grid<'_> {
        Grid::new(self)
    }
}
