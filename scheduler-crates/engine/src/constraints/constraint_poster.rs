use super::Constraint;
use crate::ConstraintOperationError;
use crate::Solver;

/// Returned by [`Solver::add_constraint`]; the constraint only takes effect once
/// [`ConstraintPoster::post`] is called.
#[derive(Debug)]
#[must_use = "a constraint is only added to the solver by calling `post`"]
pub struct ConstraintPoster<'solver, ConstraintImpl> {
    solver: &'solver mut Solver,
    constraint: ConstraintImpl,
}

impl<'solver, ConstraintImpl> ConstraintPoster<'solver, ConstraintImpl> {
    pub(crate) fn new(solver: &'solver mut Solver, constraint: ConstraintImpl) -> Self {
        ConstraintPoster { solver, constraint }
    }
}

impl<ConstraintImpl: Constraint> ConstraintPoster<'_, ConstraintImpl> {
    /// Adds the constraint and propagates the root.
    ///
    /// Fails when the root becomes infeasible, after which the solver stays infeasible.
    pub fn post(self) -> Result<(), ConstraintOperationError> {
        self.constraint.post(self.solver)
    }
}
