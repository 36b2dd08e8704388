//! Houses the depth-first search of the engine.
use log::debug;
use log::trace;

use crate::basic_types::CSPSolverExecutionFlag;
use crate::basic_types::ConstraintOperationError;
use crate::basic_types::Inconsistency;
use crate::basic_types::PropagationStatusCP;
use crate::branching::Brancher;
use crate::branching::SelectionContext;
use crate::containers::KeyedVec;
use crate::engine::predicates::Predicate;
use crate::engine::propagator_queue::PropagatorId;
use crate::engine::termination::TerminationCondition;
use crate::engine::variables::DomainId;
use crate::engine::Assignments;
use crate::engine::PropagatorQueue;
use crate::engine::SolverStatistics;
use crate::engine::VariableNames;
use crate::engine_assert_moderate;
use crate::engine_assert_simple;
use crate::propagators::Propagator;

/// A solver which attempts to find a solution to a Constraint Satisfaction Problem (CSP) using
/// a depth-first search with chronological backtracking.
///
/// Every node of the search tree is propagated to a fixpoint. Each decision `p` splits the search
/// space into `p` and `!p`: when the subtree below `p` is exhausted, the solver backtracks one
/// level and imposes `!p` on the parent node. The problem is infeasible when a conflict remains
/// after all decisions have been undone.
///
/// After [`ConstraintSatisfactionSolver::solve`] reports [`CSPSolverExecutionFlag::Feasible`],
/// the assignment remains available until [`ConstraintSatisfactionSolver::restore_state_at_root`]
/// is called.
#[derive(Debug, Default)]
pub(crate) struct ConstraintSatisfactionSolver {
    /// The solver continuously changes states during the search.
    state: CSPSolverState,
    /// Tracks the bounds of the integer variables.
    pub(crate) assignments: Assignments,
    /// Holds the propagators of all posted constraints.
    propagators: KeyedVec<PropagatorId, Box<dyn Propagator>>,
    /// For every domain, the propagators which are notified when its bounds change.
    watch_lists: KeyedVec<DomainId, Vec<PropagatorId>>,
    propagator_queue: PropagatorQueue,
    /// The decisions of the current search path; the decision at index `i` was made at decision
    /// level `i + 1`.
    decisions: Vec<Predicate>,
    variable_names: VariableNames,
    counters: SolverStatistics,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum CSPSolverState {
    #[default]
    Ready,
    Solving,
    ContainsSolution,
    Infeasible,
    Timeout,
}

// methods that offer basic functionality
impl ConstraintSatisfactionSolver {
    pub(crate) fn create_new_integer_variable(
        &mut self,
        lower_bound: i32,
        upper_bound: i32,
        name: Option<String>,
    ) -> DomainId {
        engine_assert_simple!(
            self.assignments.get_decision_level() == 0,
            "variables can only be created at the root"
        );
        assert!(
            lower_bound <= upper_bound,
            "the lower bound {lower_bound} exceeds the upper bound {upper_bound}"
        );

        let domain_id = self.assignments.grow(lower_bound, upper_bound);
        let _ = self.watch_lists.push(vec![]);

        if let Some(name) = name {
            self.variable_names.add_integer(domain_id, name);
        }

        domain_id
    }

    pub(crate) fn get_variable_name(&self, domain_id: DomainId) -> Option<&String> {
        self.variable_names.get_int_name(domain_id)
    }

    pub(crate) fn num_propagators(&self) -> usize {
        self.propagators.len()
    }

    pub(crate) fn is_infeasible(&self) -> bool {
        self.state == CSPSolverState::Infeasible
    }

    pub(crate) fn log_statistics(&self) {
        self.counters.log();
    }

    #[cfg(test)]
    pub(crate) fn statistics(&self) -> SolverStatistics {
        self.counters
    }

    /// Adds a propagator to the solver and propagates the root to a fixpoint.
    ///
    /// Returns an error if the solver was already infeasible or if the new propagator makes the
    /// root infeasible; in both cases the solver is infeasible afterwards.
    pub(crate) fn add_propagator(
        &mut self,
        propagator: impl Propagator + 'static,
    ) -> Result<(), ConstraintOperationError> {
        if self.state == CSPSolverState::Infeasible {
            return Err(ConstraintOperationError::InfeasibleState);
        }
        self.restore_state_at_root();

        let watched_domains = propagator.watched_domains();
        let propagator_id = self.propagators.push(Box::new(propagator));
        for domain_id in watched_domains {
            let watchers = &mut self.watch_lists[domain_id];
            if !watchers.contains(&propagator_id) {
                watchers.push(propagator_id);
            }
        }

        self.propagator_queue.enqueue(propagator_id);
        if self.propagate().is_err() {
            debug!(
                "Propagator {} is infeasible at the root",
                self.propagators[propagator_id].name()
            );
            self.state = CSPSolverState::Infeasible;
            return Err(ConstraintOperationError::InfeasiblePropagator);
        }

        Ok(())
    }
}

// methods that serve as the main building blocks
impl ConstraintSatisfactionSolver {
    /// Search for an assignment of all variables which satisfies every propagator.
    pub(crate) fn solve(
        &mut self,
        termination: &mut impl TerminationCondition,
        brancher: &mut impl Brancher,
    ) -> CSPSolverExecutionFlag {
        if self.state == CSPSolverState::Infeasible {
            return CSPSolverExecutionFlag::Infeasible;
        }

        self.restore_state_at_root();
        self.state = CSPSolverState::Solving;

        if self.propagate().is_err() {
            self.state = CSPSolverState::Infeasible;
            return CSPSolverExecutionFlag::Infeasible;
        }

        loop {
            let decision = brancher.next_decision(&mut SelectionContext::new(&self.assignments));

            let Some(decision) = decision else {
                engine_assert_moderate!(self
                    .assignments
                    .get_domains()
                    .all(|domain_id| self.assignments.is_domain_assigned(domain_id)));

                self.counters.num_solutions += 1;
                self.state = CSPSolverState::ContainsSolution;
                brancher.on_solution();
                return CSPSolverExecutionFlag::Feasible;
            };

            // A complete assignment is reported even when the budget is exhausted.
            if termination.should_stop() {
                self.state = CSPSolverState::Timeout;
                self.restore_state_at_root();
                return CSPSolverExecutionFlag::Timeout;
            }

            engine_assert_simple!(
                !decision.is_satisfied(&self.assignments),
                "decision {decision} does not shrink the domain"
            );

            self.counters.num_decisions += 1;
            termination.decision_has_been_made();
            self.assignments.increase_decision_level();
            self.decisions.push(decision);
            trace!("Decision {decision} at level {}", self.decisions.len());

            let mut status = self.apply_and_propagate(decision);

            while status.is_err() {
                self.counters.num_conflicts += 1;
                brancher.on_conflict();

                let Some(exhausted_decision) = self.decisions.pop() else {
                    debug!("Conflict at the root, the problem is infeasible");
                    self.state = CSPSolverState::Infeasible;
                    return CSPSolverExecutionFlag::Infeasible;
                };

                let parent_level = self.assignments.get_decision_level() - 1;
                self.backtrack(parent_level, brancher);

                status = self.apply_and_propagate(exhausted_decision.negate());
            }
        }
    }

    /// Undo all decisions and clear any pending propagation.
    pub(crate) fn restore_state_at_root(&mut self) {
        if self.assignments.get_decision_level() > 0 {
            self.assignments.synchronise(0);
        }
        self.decisions.clear();
        self.propagator_queue.clear();

        if self.state != CSPSolverState::Infeasible {
            self.state = CSPSolverState::Ready;
        }
    }

    fn backtrack(&mut self, backtrack_level: usize, brancher: &mut impl Brancher) {
        engine_assert_simple!(backtrack_level < self.assignments.get_decision_level());

        self.assignments.synchronise(backtrack_level);
        self.propagator_queue.clear();
        brancher.on_backtrack();
    }

    fn apply_and_propagate(&mut self, predicate: Predicate) -> PropagationStatusCP {
        let _ = predicate.apply(&mut self.assignments)?;
        self.propagate()
    }

    /// Runs the propagators until no propagator can tighten a bound or a propagator reports an
    /// inconsistency.
    fn propagate(&mut self) -> PropagationStatusCP {
        self.enqueue_watchers_of_changed_domains();

        while let Some(propagator_id) = self.propagator_queue.pop() {
            self.counters.num_propagations += 1;

            let result = self.propagators[propagator_id].propagate(&mut self.assignments);
            if result.is_err() {
                self.propagator_queue.clear();
                let _ = self.assignments.drain_domain_events().count();
                return Err(Inconsistency);
            }

            self.enqueue_watchers_of_changed_domains();
        }

        Ok(())
    }

    fn enqueue_watchers_of_changed_domains(&mut self) {
        for domain_id in self.assignments.drain_domain_events() {
            for &propagator_id in self.watch_lists[domain_id].iter() {
                self.propagator_queue.enqueue(propagator_id);
            }
        }
    }
}
