use log::debug;

use super::OptimisationProcedure;
use crate::branching::Brancher;
use crate::constraints;
use crate::optimisation::OptimisationDirection;
use crate::results::OptimisationResult;
use crate::results::SatisfactionResult;
use crate::results::Solution;
use crate::termination::TerminationCondition;
use crate::variables::DomainId;
use crate::variables::TransformableVariable;
use crate::Solver;

/// Implements the linear SAT-UNSAT (LSU) optimisation procedure.
///
/// After every solution, the constraint `objective > best` (or `objective < best` when
/// minimising) is added permanently and the solver is called again. Once no better solution
/// exists, the last solution is optimal.
#[derive(Debug, Clone, Copy)]
pub struct LinearSatUnsat {
    direction: OptimisationDirection,
    objective: DomainId,
}

impl LinearSatUnsat {
    /// Create a new instance of [`LinearSatUnsat`].
    pub fn new(direction: OptimisationDirection, objective: DomainId) -> Self {
        Self {
            direction,
            objective,
        }
    }
}

impl<B: Brancher> OptimisationProcedure<B> for LinearSatUnsat {
    fn optimise(
        &mut self,
        brancher: &mut B,
        termination: &mut impl TerminationCondition,
        solver: &mut Solver,
    ) -> OptimisationResult {
        // Internally the objective is always minimised.
        let objective = match self.direction {
            OptimisationDirection::Maximise => self.objective.scaled(-1),
            OptimisationDirection::Minimise => self.objective.scaled(1),
        };

        // First we will solve the satisfaction problem without constraining the objective.
        let mut best_solution: Solution = match solver.satisfy(brancher, termination) {
            SatisfactionResult::Satisfiable(solution) => solution,
            SatisfactionResult::Unsatisfiable => return OptimisationResult::Unsatisfiable,
            SatisfactionResult::Unknown => return OptimisationResult::Unknown,
        };

        loop {
            let best_objective_value =
                objective.scale() * best_solution.get_integer_value(self.objective);
            debug!(
                "Found solution with objective {}",
                best_solution.get_integer_value(self.objective)
            );

            // A strictly better solution must exist; if the bound alone empties a domain then the
            // incumbent is optimal.
            let tightened = solver
                .add_constraint(constraints::less_than_or_equals(
                    vec![objective],
                    best_objective_value - 1,
                ))
                .post();
            if tightened.is_err() {
                return OptimisationResult::Optimal(best_solution);
            }

            match solver.satisfy(brancher, termination) {
                SatisfactionResult::Satisfiable(solution) => best_solution = solution,
                SatisfactionResult::Unsatisfiable => {
                    return OptimisationResult::Optimal(best_solution)
                }
                SatisfactionResult::Unknown => {
                    return OptimisationResult::Satisfiable(best_solution)
                }
            }
        }
    }
}
