//! Contains structures and traits to define the decision making procedure of the [`Solver`].
//!
//! A [`Brancher`] is a combination of a [`VariableSelector`] which decides which unfixed variable
//! to branch on next, and a [`ValueSelector`] which decides which bound to impose on it. The
//! [`IndependentVariableValueBrancher`] combines the two without further coordination:
//! ```rust
//! # use scheduler_engine::branching::independent_variable_value_brancher::IndependentVariableValueBrancher;
//! # use scheduler_engine::branching::value_selection::InDomainMin;
//! # use scheduler_engine::branching::variable_selection::InputOrder;
//! # use scheduler_engine::results::SatisfactionResult;
//! # use scheduler_engine::termination::Indefinite;
//! # use scheduler_engine::Solver;
//! let mut solver = Solver::default();
//! let variables = vec![solver.new_bounded_integer(2, 10), solver.new_bounded_integer(-3, 3)];
//!
//! let mut brancher =
//!     IndependentVariableValueBrancher::new(InputOrder::new(&variables), InDomainMin);
//!
//! let result = solver.satisfy(&mut brancher, &mut Indefinite);
//! if let SatisfactionResult::Satisfiable(solution) = result {
//!     assert_eq!(solution.get_integer_value(variables[0]), 2);
//!     assert_eq!(solution.get_integer_value(variables[1]), -3);
//! } else {
//!     panic!("There are no constraints, so the problem is satisfiable")
//! }
//! ```
//!
//! [`Solver`]: crate::Solver
mod brancher;
pub mod independent_variable_value_brancher;
mod selection_context;
pub mod value_selection;
pub mod variable_selection;

pub use brancher::Brancher;
pub use selection_context::SelectionContext;

#[cfg(doc)]
use crate::branching::independent_variable_value_brancher::IndependentVariableValueBrancher;
#[cfg(doc)]
use crate::branching::value_selection::ValueSelector;
#[cfg(doc)]
use crate::branching::variable_selection::VariableSelector;
