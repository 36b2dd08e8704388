use std::fmt::Display;

use crate::solving_engine::EngineError;

/// The outcome of one optimisation run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScheduleStatus {
    /// A schedule was found and proven to be optimal.
    Optimal,
    /// A schedule was found, but the search stopped before proving that it is optimal.
    OptimalInaccurate,
    /// The engine proved that no schedule exists.
    Infeasible,
    /// The objective can be improved without limit.
    Unbounded,
    /// The time budget ran out before the engine reached a conclusion.
    UserLimit,
    /// The engine could not be run.
    SolverError,
    /// No optimisation was attempted because there were no tasks.
    NotAttempted,
}

impl ScheduleStatus {
    /// Whether the status comes with a usable schedule.
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            ScheduleStatus::Optimal | ScheduleStatus::OptimalInaccurate
        )
    }
}

impl Display for ScheduleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScheduleStatus::Optimal => write!(f, "optimal"),
            ScheduleStatus::OptimalInaccurate => write!(f, "optimal_inaccurate"),
            ScheduleStatus::Infeasible => write!(f, "infeasible"),
            ScheduleStatus::Unbounded => write!(f, "unbounded"),
            ScheduleStatus::UserLimit => write!(f, "user_limit"),
            ScheduleStatus::SolverError => write!(f, "solver_error"),
            ScheduleStatus::NotAttempted => write!(f, "none"),
        }
    }
}

/// One task in the run order of the machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Placement {
    /// Index of the task in the task set which was scheduled.
    pub task_index: usize,
    pub start_time: u64,
    /// Whether `start_time + duration <= deadline` for the task.
    pub is_on_time: bool,
}

/// The result of scheduling a task set.
///
/// The placements are ordered by start time. A schedule is created once at the end of a run and
/// never changes afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schedule {
    placements: Vec<Placement>,
    total_reward: Option<i64>,
    status: ScheduleStatus,
    failure: Option<EngineError>,
}

impl Schedule {
    pub(crate) fn new(placements: Vec<Placement>, total_reward: i64, status: ScheduleStatus) -> Self {
        Schedule {
            placements,
            total_reward: Some(total_reward),
            status,
            failure: None,
        }
    }

    /// The schedule of an empty task set.
    pub(crate) fn not_attempted() -> Self {
        Schedule::new(vec![], 0, ScheduleStatus::NotAttempted)
    }

    /// A schedule without placements for an engine which concluded without a solution.
    pub(crate) fn unsolved(status: ScheduleStatus) -> Self {
        Schedule {
            placements: vec![],
            total_reward: None,
            status,
            failure: None,
        }
    }

    /// A schedule without placements for an engine which could not be run.
    pub(crate) fn solver_error(failure: EngineError) -> Self {
        Schedule {
            placements: vec![],
            total_reward: None,
            status: ScheduleStatus::SolverError,
            failure: Some(failure),
        }
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// The sum of the rewards of the on-time placements; [`None`] when no schedule was decoded.
    pub fn total_reward(&self) -> Option<i64> {
        self.total_reward
    }

    pub fn status(&self) -> ScheduleStatus {
        self.status
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// The reason the engine could not be run, if it failed outright.
    pub fn failure(&self) -> Option<&EngineError> {
        self.failure.as_ref()
    }

    /// The task indices in the order in which they are executed.
    pub fn execution_order(&self) -> Vec<usize> {
        self.placements
            .iter()
            .map(|placement| placement.task_index)
            .collect()
    }
}
