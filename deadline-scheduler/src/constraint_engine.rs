//! A [`SolvingEngine`] which uses the constraint programming engine of `scheduler-engine`.
use std::time::Duration;

use log::debug;
use scheduler_engine::branching::independent_variable_value_brancher::IndependentVariableValueBrancher;
use scheduler_engine::branching::value_selection::InDomainMax;
use scheduler_engine::branching::variable_selection::InputOrder;
use scheduler_engine::constraints;
use scheduler_engine::constraints::Constraint;
use scheduler_engine::optimisation::linear_sat_unsat::LinearSatUnsat;
use scheduler_engine::optimisation::OptimisationDirection;
use scheduler_engine::results::OptimisationResult;
use scheduler_engine::results::Solution;
use scheduler_engine::termination::Combinator;
use scheduler_engine::termination::DecisionBudget;
use scheduler_engine::termination::TimeBudget;
use scheduler_engine::variables::AffineView;
use scheduler_engine::variables::DomainId;
use scheduler_engine::variables::TransformableVariable;
use scheduler_engine::Solver;

use crate::problem::LinearExpression;
use crate::problem::LinearProblem;
use crate::problem::Relation;
use crate::schedule::ScheduleStatus;
use crate::solving_engine::EngineError;
use crate::solving_engine::EngineOutcome;
use crate::solving_engine::SolvingEngine;

/// Options which bound the search of the [`ConstraintEngine`] in addition to the time budget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EngineOptions {
    /// Stop after this many decisions.
    pub decision_limit: Option<u64>,
}

/// Solves a [`LinearProblem`] by depth-first search with bounds propagation, improving the
/// objective until no better solution exists.
///
/// The engine branches on the variables of the branching order of the problem first, followed by
/// the remaining variables in the order in which they were added. Every variable is tried at its
/// largest value first.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConstraintEngine {
    options: EngineOptions,
}

impl ConstraintEngine {
    pub fn new(options: EngineOptions) -> Self {
        ConstraintEngine { options }
    }
}

impl SolvingEngine for ConstraintEngine {
    fn solve(
        &mut self,
        problem: &LinearProblem,
        time_budget: Option<Duration>,
    ) -> Result<EngineOutcome, EngineError> {
        let mut solver = Solver::default();

        let variables = problem
            .variables()
            .iter()
            .map(|variable| {
                let (lower, upper) = variable.bounds();
                if lower > upper {
                    return Err(EngineError::EmptyDomain {
                        name: variable.name.clone(),
                        lower,
                        upper,
                    });
                }

                Ok(solver.new_named_bounded_integer(
                    to_engine_integer("lower bound", lower)?,
                    to_engine_integer("upper bound", upper)?,
                    variable.name.clone(),
                ))
            })
            .collect::<Result<Vec<_>, _>>()?;

        for constraint in problem.constraints() {
            let terms = to_terms(&constraint.expression, &variables)?;
            let rhs = to_engine_integer("right-hand side", constraint.rhs)?;

            let posted = match constraint.relation {
                Relation::LessThanOrEqual => {
                    post(&mut solver, constraints::less_than_or_equals(terms, rhs))
                }
                Relation::Equal => post(&mut solver, constraints::equals(terms, rhs)),
                Relation::GreaterThanOrEqual => {
                    post(&mut solver, constraints::greater_than_or_equals(terms, rhs))
                }
            };

            if !posted {
                debug!("The constraints are infeasible at the root");
                return Ok(EngineOutcome::without_values(ScheduleStatus::Infeasible));
            }
        }

        let objective = add_objective(&mut solver, problem, &variables)?;
        if solver.is_infeasible() {
            return Ok(EngineOutcome::without_values(ScheduleStatus::Infeasible));
        }

        let mut brancher = brancher_for(problem, &variables, objective);
        let mut termination = Combinator::new(
            time_budget.map(TimeBudget::starting_now),
            self.options.decision_limit.map(DecisionBudget::new),
        );

        let result = solver.optimise(
            &mut brancher,
            &mut termination,
            LinearSatUnsat::new(OptimisationDirection::Maximise, objective),
        );
        solver.log_statistics();

        let outcome = match result {
            OptimisationResult::Optimal(solution) => EngineOutcome::with_values(
                ScheduleStatus::Optimal,
                values_of(&solution, &variables),
            ),
            OptimisationResult::Satisfiable(solution) => EngineOutcome::with_values(
                ScheduleStatus::OptimalInaccurate,
                values_of(&solution, &variables),
            ),
            OptimisationResult::Unsatisfiable => {
                EngineOutcome::without_values(ScheduleStatus::Infeasible)
            }
            OptimisationResult::Unknown => EngineOutcome::without_values(ScheduleStatus::UserLimit),
        };

        Ok(outcome)
    }
}

fn brancher_for(
    problem: &LinearProblem,
    variables: &[DomainId],
    objective: DomainId,
) -> IndependentVariableValueBrancher<DomainId, InputOrder<DomainId>, InDomainMax> {
    let mut is_ordered = vec![false; variables.len()];
    let mut order = Vec::with_capacity(variables.len() + 1);

    for variable in problem.branching_order() {
        if !is_ordered[variable.index()] {
            is_ordered[variable.index()] = true;
            order.push(variables[variable.index()]);
        }
    }
    order.extend(
        variables
            .iter()
            .zip(is_ordered)
            .filter(|&(_, ordered)| !ordered)
            .map(|(&variable, _)| variable),
    );
    order.push(objective);

    IndependentVariableValueBrancher::new(InputOrder::new(&order), InDomainMax)
}

/// Returns whether posting succeeded; a failure means the root became infeasible.
fn post(solver: &mut Solver, constraint: impl Constraint) -> bool {
    solver.add_constraint(constraint).post().is_ok()
}

/// Adds a variable equal to the objective of `problem`, bounded by the smallest and largest
/// values the objective can take.
fn add_objective(
    solver: &mut Solver,
    problem: &LinearProblem,
    variables: &[DomainId],
) -> Result<DomainId, EngineError> {
    let (lower, upper) = problem.objective().terms().iter().fold(
        (0_i64, 0_i64),
        |(lower, upper), &(coefficient, variable)| {
            let (variable_lower, variable_upper) = problem.variable(variable).bounds();
            let a = coefficient.saturating_mul(variable_lower);
            let b = coefficient.saturating_mul(variable_upper);
            (
                lower.saturating_add(a.min(b)),
                upper.saturating_add(a.max(b)),
            )
        },
    );

    let objective = solver.new_named_bounded_integer(
        to_engine_integer("objective lower bound", lower)?,
        to_engine_integer("objective upper bound", upper)?,
        "objective",
    );

    let mut terms = to_terms(problem.objective(), variables)?;
    terms.push(objective.scaled(-1));
    let _ = post(solver, constraints::equals(terms, 0));

    Ok(objective)
}

fn to_terms(
    expression: &LinearExpression,
    variables: &[DomainId],
) -> Result<Vec<AffineView>, EngineError> {
    expression
        .terms()
        .iter()
        .map(|&(coefficient, variable)| {
            let coefficient = to_engine_integer("coefficient", coefficient)?;
            Ok(variables[variable.index()].scaled(coefficient))
        })
        .collect()
}

fn to_engine_integer(context: &str, value: i64) -> Result<i32, EngineError> {
    i32::try_from(value).map_err(|_| EngineError::ValueOutOfRange {
        context: context.to_owned(),
        value,
    })
}

fn values_of(solution: &Solution, variables: &[DomainId]) -> Vec<f64> {
    variables
        .iter()
        .map(|&variable| f64::from(solution.get_integer_value(variable)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optimal_solutions_come_with_all_values() {
        let mut problem = LinearProblem::new();
        let a = problem.add_binary("a");
        let b = problem.add_binary("b");
        let c = problem.add_integer("c", 0, 5);

        // a + b <= 1, c - 2a <= 1; maximise 3a + 2b + c
        problem.add_constraint(
            LinearExpression::new().with_term(1, a).with_term(1, b),
            Relation::LessThanOrEqual,
            1,
        );
        problem.add_constraint(
            LinearExpression::new().with_term(1, c).with_term(-2, a),
            Relation::LessThanOrEqual,
            1,
        );
        problem.maximise(
            LinearExpression::new()
                .with_term(3, a)
                .with_term(2, b)
                .with_term(1, c),
        );

        let outcome = ConstraintEngine::default()
            .solve(&problem, None)
            .expect("the engine runs");

        assert_eq!(outcome.status, ScheduleStatus::Optimal);
        assert_eq!(outcome.values, Some(vec![1.0, 0.0, 3.0]));
    }

    #[test]
    fn the_branching_order_decides_between_equal_solutions() {
        let mut problem = LinearProblem::new();
        let a = problem.add_binary("a");
        let b = problem.add_binary("b");

        // a + b <= 1; maximise a + b
        problem.add_constraint(
            LinearExpression::new().with_term(1, a).with_term(1, b),
            Relation::LessThanOrEqual,
            1,
        );
        problem.maximise(LinearExpression::new().with_term(1, a).with_term(1, b));

        let outcome = ConstraintEngine::default()
            .solve(&problem, None)
            .expect("the engine runs");
        assert_eq!(outcome.values, Some(vec![1.0, 0.0]));

        problem.set_branching_order(vec![b]);
        let outcome = ConstraintEngine::default()
            .solve(&problem, None)
            .expect("the engine runs");
        assert_eq!(outcome.status, ScheduleStatus::Optimal);
        assert_eq!(outcome.values, Some(vec![0.0, 1.0]));
    }

    #[test]
    fn root_infeasibility_is_reported_as_infeasible() {
        let mut problem = LinearProblem::new();
        let a = problem.add_binary("a");
        problem.add_constraint(
            LinearExpression::new().with_term(1, a),
            Relation::GreaterThanOrEqual,
            2,
        );

        let outcome = ConstraintEngine::default()
            .solve(&problem, None)
            .expect("the engine runs");

        assert_eq!(outcome, EngineOutcome::without_values(ScheduleStatus::Infeasible));
    }

    #[test]
    fn an_exhausted_decision_limit_without_solution_is_a_user_limit() {
        let mut problem = LinearProblem::new();
        let a = problem.add_integer("a", 0, 3);
        problem.maximise(LinearExpression::new().with_term(1, a));

        let mut engine = ConstraintEngine::new(EngineOptions {
            decision_limit: Some(0),
        });
        let outcome = engine.solve(&problem, None).expect("the engine runs");

        assert_eq!(outcome, EngineOutcome::without_values(ScheduleStatus::UserLimit));
    }

    #[test]
    fn coefficients_outside_the_engine_range_are_a_hard_failure() {
        let mut problem = LinearProblem::new();
        let a = problem.add_binary("a");
        problem.add_constraint(
            LinearExpression::new().with_term(i64::from(i32::MAX) + 1, a),
            Relation::LessThanOrEqual,
            1,
        );

        let error = ConstraintEngine::default()
            .solve(&problem, None)
            .expect_err("the coefficient does not fit");

        assert_eq!(
            error,
            EngineError::ValueOutOfRange {
                context: "coefficient".to_owned(),
                value: i64::from(i32::MAX) + 1,
            }
        );
    }

    #[test]
    fn empty_domains_are_a_hard_failure() {
        let mut problem = LinearProblem::new();
        let _ = problem.add_integer("broken", 3, 2);

        let error = ConstraintEngine::default()
            .solve(&problem, None)
            .expect_err("the domain is empty");

        assert!(matches!(error, EngineError::EmptyDomain { .. }));
    }
}
