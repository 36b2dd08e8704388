use thiserror::Error;

/// The reasons a constraint cannot be added to a solver.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConstraintOperationError {
    /// Propagating the new constraint at the root emptied a domain.
    #[error("The constraint empties a domain at the root")]
    InfeasiblePropagator,
    /// An earlier constraint already made the root infeasible.
    #[error("The solver was already infeasible before the constraint was added")]
    InfeasibleState,
}
