//! Contains structures related to optimisation.
use crate::branching::Brancher;
use crate::results::OptimisationResult;
use crate::termination::TerminationCondition;
use crate::Solver;

pub mod linear_sat_unsat;

/// A procedure which repeatedly calls the [`Solver`] to find an optimal solution.
pub trait OptimisationProcedure<B: Brancher> {
    fn optimise(
        &mut self,
        brancher: &mut B,
        termination: &mut impl TerminationCondition,
        solver: &mut Solver,
    ) -> OptimisationResult;
}

/// The direction of the optimisation, either maximising or minimising.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptimisationDirection {
    Maximise,
    Minimise,
}
