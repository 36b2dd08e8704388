use super::inequality::Inequality;
use crate::constraints::Constraint;
use crate::variables::AffineView;
use crate::variables::TransformableVariable;
use crate::ConstraintOperationError;
use crate::Solver;

/// Creates the [`Constraint`] `\sum terms_i = rhs`.
///
/// The equality is decomposed into `\sum terms_i <= rhs` and `\sum -terms_i <= -rhs`.
pub fn equals(terms: impl Into<Box<[AffineView]>>, rhs: i32) -> impl Constraint {
    EqualConstraint {
        terms: terms.into(),
        rhs,
    }
}

struct EqualConstraint {
    terms: Box<[AffineView]>,
    rhs: i32,
}

impl Constraint for EqualConstraint {
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError> {
        let negated_terms = self.terms.iter().map(|term| term.scaled(-1)).collect();

        Inequality {
            terms: self.terms,
            rhs: self.rhs,
        }
        .post(solver)?;

        Inequality {
            terms: negated_terms,
            rhs: -self.rhs,
        }
        .post(solver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_fixes_the_last_free_variable() {
        let mut solver = Solver::default();
        let x = solver.new_bounded_integer(3, 3);
        let y = solver.new_bounded_integer(0, 10);

        // 2x - y = 1
        solver
            .add_constraint(equals(vec![x.scaled(2), y.scaled(-1)], 1))
            .post()
            .expect("the root is consistent");

        assert_eq!(solver.lower_bound(y), 5);
        assert_eq!(solver.upper_bound(y), 5);
    }

    #[test]
    fn equality_without_integer_solution_fails_at_the_root() {
        let mut solver = Solver::default();
        let x = solver.new_bounded_integer(0, 10);
        let y = solver.new_bounded_integer(0, 10);

        // 2x + 2y = 7
        let result = solver
            .add_constraint(equals(vec![x.scaled(2), y.scaled(2)], 7))
            .post();

        assert_eq!(result, Err(ConstraintOperationError::InfeasiblePropagator));
    }
}
