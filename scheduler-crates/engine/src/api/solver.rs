use log::debug;

use super::results::OptimisationResult;
use super::results::SatisfactionResult;
use crate::basic_types::CSPSolverExecutionFlag;
use crate::basic_types::ConstraintOperationError;
use crate::basic_types::Solution;
use crate::branching::independent_variable_value_brancher::IndependentVariableValueBrancher;
use crate::branching::value_selection::InDomainMax;
use crate::branching::variable_selection::InputOrder;
use crate::branching::Brancher;
use crate::constraints::ConstraintPoster;
use crate::engine::termination::TerminationCondition;
use crate::engine::variables::DomainId;
use crate::engine::ConstraintSatisfactionSolver;
use crate::optimisation::OptimisationProcedure;
#[cfg(doc)]
use crate::optimisation::linear_sat_unsat::LinearSatUnsat;
use crate::propagators::Propagator;

/// The main interaction point which allows the creation of variables, the addition of constraints,
/// and solving problems.
///
/// # Creating Variables
/// ```rust
/// # use scheduler_engine::Solver;
/// # use scheduler_engine::variables::TransformableVariable;
/// let mut solver = Solver::default();
///
/// // We can create an integer variable with a domain in the range [0, 10]
/// let integer_between_bounds = solver.new_bounded_integer(0, 10);
///
/// // We can also create such a variable with a name
/// let named_integer_between_bounds = solver.new_named_bounded_integer(0, 10, "x");
/// assert_eq!(solver.get_variable_name(named_integer_between_bounds), Some("x"));
///
/// // Additionally, we can create a view over a variable which scales its domain
/// let view_over_integer = integer_between_bounds.scaled(-1);
/// ```
///
/// # Using the Solver
/// For examples on how to use the solver, see the [root-level crate documentation](crate).
#[derive(Debug, Default)]
pub struct Solver {
    /// The internal [`ConstraintSatisfactionSolver`] which is used to solve the problems.
    satisfaction_solver: ConstraintSatisfactionSolver,
}

impl Solver {
    /// Logs the statistics currently present in the solver.
    pub fn log_statistics(&self) {
        debug!(
            "engine.numberOfPropagators={}",
            self.satisfaction_solver.num_propagators()
        );
        self.satisfaction_solver.log_statistics();
    }
}

/// Methods to retrieve information about variables
impl Solver {
    /// Get the lower-bound of the given [`DomainId`] at the root level (after propagation).
    pub fn lower_bound(&self, variable: DomainId) -> i32 {
        self.satisfaction_solver
            .assignments
            .get_lower_bound(variable)
    }

    /// Get the upper-bound of the given [`DomainId`] at the root level (after propagation).
    pub fn upper_bound(&self, variable: DomainId) -> i32 {
        self.satisfaction_solver
            .assignments
            .get_upper_bound(variable)
    }

    /// Get the name which was given to the variable on creation, if any.
    pub fn get_variable_name(&self, variable: DomainId) -> Option<&str> {
        self.satisfaction_solver
            .get_variable_name(variable)
            .map(String::as_str)
    }
}

/// Functions to create and retrieve integer variables.
impl Solver {
    /// Create a new integer variable with the given bounds.
    ///
    /// # Panics
    /// If `lower_bound > upper_bound`.
    pub fn new_bounded_integer(&mut self, lower_bound: i32, upper_bound: i32) -> DomainId {
        self.satisfaction_solver
            .create_new_integer_variable(lower_bound, upper_bound, None)
    }

    /// Create a new named integer variable with the given bounds.
    ///
    /// # Panics
    /// If `lower_bound > upper_bound`.
    pub fn new_named_bounded_integer(
        &mut self,
        lower_bound: i32,
        upper_bound: i32,
        name: impl Into<String>,
    ) -> DomainId {
        self.satisfaction_solver.create_new_integer_variable(
            lower_bound,
            upper_bound,
            Some(name.into()),
        )
    }
}

/// Functions for solving with the constraints that have been added to the [`Solver`].
impl Solver {
    /// Solves the current model in the [`Solver`] until it finds a solution (or is indicated to
    /// terminate by the provided [`TerminationCondition`]) and returns a [`SatisfactionResult`]
    /// which can be used to obtain the found solution or find other solutions.
    pub fn satisfy<B: Brancher, T: TerminationCondition>(
        &mut self,
        brancher: &mut B,
        termination: &mut T,
    ) -> SatisfactionResult {
        let result = match self.satisfaction_solver.solve(termination, brancher) {
            CSPSolverExecutionFlag::Feasible => {
                let solution = Solution::new(&self.satisfaction_solver.assignments);
                SatisfactionResult::Satisfiable(solution)
            }
            CSPSolverExecutionFlag::Infeasible => SatisfactionResult::Unsatisfiable,
            CSPSolverExecutionFlag::Timeout => SatisfactionResult::Unknown,
        };

        self.satisfaction_solver.restore_state_at_root();
        result
    }

    /// Optimise a given objective with the provided [`OptimisationProcedure`] (for example
    /// [`LinearSatUnsat`]).
    ///
    /// The procedure may add constraints on the objective to the solver; the solver should not be
    /// reused for a different objective afterwards.
    pub fn optimise<B, O>(
        &mut self,
        brancher: &mut B,
        termination: &mut impl TerminationCondition,
        mut optimisation_procedure: O,
    ) -> OptimisationResult
    where
        B: Brancher,
        O: OptimisationProcedure<B>,
    {
        optimisation_procedure.optimise(brancher, termination, self)
    }
}

/// Functions for adding new constraints to the solver.
impl Solver {
    /// Add a constraint to the solver. This returns a [`ConstraintPoster`]; the constraint is
    /// added once [`ConstraintPoster::post`] is called.
    ///
    /// If none of the methods on [`ConstraintPoster`] are used, the constraint _is not_ actually
    /// added to the solver. In this case, a warning is emitted.
    ///
    /// # Example
    /// ```
    /// # use scheduler_engine::constraints;
    /// # use scheduler_engine::Solver;
    /// # use scheduler_engine::variables::TransformableVariable;
    /// let mut solver = Solver::default();
    ///
    /// let a = solver.new_bounded_integer(0, 3);
    /// let b = solver.new_bounded_integer(0, 3);
    ///
    /// solver
    ///     .add_constraint(constraints::equals(vec![a.scaled(1), b.scaled(-1)], 2))
    ///     .post()
    ///     .expect("the root is consistent");
    ///
    /// assert_eq!(solver.lower_bound(a), 2);
    /// assert_eq!(solver.upper_bound(b), 1);
    /// ```
    pub fn add_constraint<Constraint>(
        &mut self,
        constraint: Constraint,
    ) -> ConstraintPoster<'_, Constraint> {
        ConstraintPoster::new(self, constraint)
    }

    pub(crate) fn add_propagator(
        &mut self,
        propagator: impl Propagator + 'static,
    ) -> Result<(), ConstraintOperationError> {
        self.satisfaction_solver.add_propagator(propagator)
    }

    /// Whether a root-level conflict was found, either while posting a constraint or by a search
    /// which exhausted the search space.
    pub fn is_infeasible(&self) -> bool {
        self.satisfaction_solver.is_infeasible()
    }
}

/// Default brancher implementation
impl Solver {
    /// Creates an instance of the [`DefaultBrancher`]: it branches on all variables in the order in
    /// which they were created, assigning each to the largest value in its domain.
    pub fn default_brancher(&self) -> DefaultBrancher {
        IndependentVariableValueBrancher::default_over_all_variables(
            &self.satisfaction_solver.assignments,
        )
    }
}

/// The type of [`Brancher`] which is created by [`Solver::default_brancher`].
pub type DefaultBrancher =
    IndependentVariableValueBrancher<DomainId, InputOrder<DomainId>, InDomainMax>;
