//! # scheduler-engine
//! A small constraint programming engine over bounded integer variables. It is the solving
//! back-end of the `deadline-scheduler` workspace, but it knows nothing about scheduling: it
//! accepts variables, linear constraints and an objective, and returns solutions.
//!
//! The engine performs a depth-first search with chronological backtracking. Every node is
//! propagated to a fixpoint using bounds propagation on the posted linear constraints.
//!
//! # Using the engine
//! The first step is **adding variables** and **constraints**:
//! ```rust
//! # use scheduler_engine::constraints;
//! # use scheduler_engine::variables::TransformableVariable;
//! # use scheduler_engine::Solver;
//! let mut solver = Solver::default();
//!
//! let x = solver.new_bounded_integer(0, 10);
//! let y = solver.new_bounded_integer(0, 10);
//!
//! // x + y == 12
//! solver
//!     .add_constraint(constraints::equals(vec![x.scaled(1), y.scaled(1)], 12))
//!     .post()
//!     .expect("the root is consistent");
//! ```
//!
//! Then a [`branching::Brancher`] and a [`termination::TerminationCondition`] determine how the
//! search proceeds and when it gives up. **Optimising an objective** is done with
//! [`Solver::optimise`]:
//! ```rust
//! # use scheduler_engine::constraints;
//! # use scheduler_engine::optimisation::linear_sat_unsat::LinearSatUnsat;
//! # use scheduler_engine::optimisation::OptimisationDirection;
//! # use scheduler_engine::results::OptimisationResult;
//! # use scheduler_engine::termination::Indefinite;
//! # use scheduler_engine::variables::TransformableVariable;
//! # use scheduler_engine::Solver;
//! let mut solver = Solver::default();
//! let x = solver.new_bounded_integer(0, 10);
//! let y = solver.new_bounded_integer(0, 10);
//! # solver
//! #     .add_constraint(constraints::less_than_or_equals(vec![x.scaled(2), y.scaled(3)], 12))
//! #     .post()
//! #     .expect("the root is consistent");
//! let objective = solver.new_bounded_integer(0, 20);
//! solver
//!     .add_constraint(constraints::equals(
//!         vec![x.scaled(1), y.scaled(1), objective.scaled(-1)],
//!         0,
//!     ))
//!     .post()
//!     .expect("the root is consistent");
//!
//! let mut brancher = solver.default_brancher();
//! let result = solver.optimise(
//!     &mut brancher,
//!     &mut Indefinite,
//!     LinearSatUnsat::new(OptimisationDirection::Maximise, objective),
//! );
//!
//! if let OptimisationResult::Optimal(solution) = result {
//!     // 2x + 3y <= 12 is maximised for x + y by x = 6, y = 0
//!     assert_eq!(solution.get_integer_value(objective), 6);
//! } else {
//!     panic!("This problem should have an optimal solution")
//! }
//! ```
//!
//! ## Feature Flags
//! - `debug-checks`: Enable expensive assertions in the engine.

pub(crate) mod basic_types;
pub mod branching;
pub mod constraints;
pub mod containers;
pub(crate) mod engine;
pub(crate) mod math;
pub mod optimisation;
pub(crate) mod propagators;

#[doc(hidden)]
pub mod asserts;

// We declare a private module with public use, so that all exports from API are exports directly
// from the crate.
//
// Example:
// `use scheduler_engine::Solver;`
// vs.
// `use scheduler_engine::api::Solver;`
mod api;

pub use api::*;

pub use crate::api::solver::DefaultBrancher;
pub use crate::api::solver::Solver;
pub use crate::basic_types::ConstraintOperationError;
