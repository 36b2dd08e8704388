/// The outcome of a single call to the search of the
/// [`ConstraintSatisfactionSolver`](crate::engine::ConstraintSatisfactionSolver).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CSPSolverExecutionFlag {
    Feasible,
    Infeasible,
    Timeout,
}
