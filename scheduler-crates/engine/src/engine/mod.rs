pub(crate) mod assignments;
pub(crate) mod constraint_satisfaction_solver;
pub(crate) mod predicates;
mod propagator_queue;
mod solver_statistics;
pub mod termination;
pub mod variables;
mod variable_names;

pub use assignments::Assignments;
pub(crate) use constraint_satisfaction_solver::ConstraintSatisfactionSolver;
pub(crate) use propagator_queue::PropagatorQueue;
pub(crate) use solver_statistics::SolverStatistics;
pub(crate) use variable_names::VariableNames;
