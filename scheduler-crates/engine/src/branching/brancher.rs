use crate::branching::SelectionContext;
use crate::engine::predicates::Predicate;
#[cfg(doc)]
use crate::Solver;

/// A trait for definining a branching strategy (oftentimes utilising a
/// [`VariableSelector`](crate::branching::variable_selection::VariableSelector) and a
/// [`ValueSelector`](crate::branching::value_selection::ValueSelector)).
///
/// The returned decision must shrink the domain of the variable it concerns, otherwise the search
/// of the [`Solver`] does not make progress.
pub trait Brancher {
    /// Returns the next decision, or [`None`] if all variables under consideration are assigned.
    fn next_decision(&mut self, context: &mut SelectionContext) -> Option<Predicate>;

    /// Called after a conflict has been found.
    fn on_conflict(&mut self) {}

    /// Called whenever the [`Solver`] backtracks.
    fn on_backtrack(&mut self) {}

    /// Called when all variables are assigned and the solver reports a solution.
    fn on_solution(&mut self) {}
}
