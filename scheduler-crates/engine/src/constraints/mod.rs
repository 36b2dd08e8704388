//! Linear constraints over [`crate::variables::AffineView`] terms.
//!
//! Constraints are added with [`Solver::add_constraint`], which returns a [`ConstraintPoster`]:
//! ```rust
//! # use scheduler_engine::constraints;
//! # use scheduler_engine::variables::TransformableVariable;
//! # use scheduler_engine::Solver;
//! let mut solver = Solver::default();
//!
//! let a = solver.new_bounded_integer(0, 3);
//! let b = solver.new_bounded_integer(0, 3);
//!
//! // a + 2b >= 7
//! solver
//!     .add_constraint(constraints::greater_than_or_equals(vec![a.scaled(1), b.scaled(2)], 7))
//!     .post()
//!     .expect("the root is consistent");
//!
//! assert_eq!(solver.lower_bound(b), 2);
//! ```
mod arithmetic;
mod constraint_poster;

pub use arithmetic::*;
pub use constraint_poster::*;

use crate::ConstraintOperationError;
use crate::Solver;

/// Something which can be enforced by adding propagators to a [`Solver`].
pub trait Constraint {
    /// Adds the propagators of the constraint; fails when the root becomes infeasible.
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError>;
}

impl<C: Constraint> Constraint for Vec<C> {
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError> {
        self.into_iter().try_for_each(|c| c.post(solver))
    }
}
