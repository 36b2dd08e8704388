use log::debug;

/// Core statistics of the solver engine (e.g. the number of decisions).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SolverStatistics {
    /// The number of decisions taken by the solver
    pub(crate) num_decisions: u64,
    /// The number of conflicts encountered by the solver
    pub(crate) num_conflicts: u64,
    /// The number of times a propagator was run
    pub(crate) num_propagations: u64,
    /// The number of solutions reported by the solver
    pub(crate) num_solutions: u64,
}

impl SolverStatistics {
    pub(crate) fn log(&self) {
        debug!("engine.numberOfDecisions={}", self.num_decisions);
        debug!("engine.numberOfConflicts={}", self.num_conflicts);
        debug!("engine.numberOfPropagations={}", self.num_propagations);
        debug!("engine.numberOfSolutions={}", self.num_solutions);
    }
}
