use crate::constraints::Constraint;
use crate::propagators::arithmetic::linear_less_or_equal::LinearLessOrEqualPropagator;
use crate::variables::AffineView;
use crate::variables::TransformableVariable;
use crate::ConstraintOperationError;
use crate::Solver;

/// Create the [`Constraint`] `\sum terms_i <= rhs`.
pub fn less_than_or_equals(terms: impl Into<Box<[AffineView]>>, rhs: i32) -> impl Constraint {
    Inequality {
        terms: terms.into(),
        rhs,
    }
}

/// Create the [`Constraint`] `\sum terms_i >= rhs`.
pub fn greater_than_or_equals(terms: impl Into<Box<[AffineView]>>, rhs: i32) -> impl Constraint {
    let terms = terms
        .into()
        .iter()
        .map(|term| term.scaled(-1))
        .collect::<Box<[_]>>();
    less_than_or_equals(terms, -rhs)
}

pub(super) struct Inequality {
    pub(super) terms: Box<[AffineView]>,
    pub(super) rhs: i32,
}

impl Constraint for Inequality {
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError> {
        solver.add_propagator(LinearLessOrEqualPropagator::new(self.terms, self.rhs))
    }
}
