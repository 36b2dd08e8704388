//! The seam between the scheduling model and the engine which solves it.
use std::time::Duration;

use thiserror::Error;

use crate::problem::LinearProblem;
use crate::schedule::ScheduleStatus;

/// Solves a [`LinearProblem`], maximising its objective.
pub trait SolvingEngine {
    /// Solve `problem`, giving up after `time_budget` if one is provided.
    ///
    /// An `Err` means the engine could not be run at all. Every conclusion the engine does reach,
    /// including infeasibility and running out of time, is an [`EngineOutcome`].
    fn solve(
        &mut self,
        problem: &LinearProblem,
        time_budget: Option<Duration>,
    ) -> Result<EngineOutcome, EngineError>;
}

/// The conclusion of an engine.
#[derive(Clone, Debug, PartialEq)]
pub struct EngineOutcome {
    pub status: ScheduleStatus,
    /// One value per variable of the problem, present when the engine found a solution.
    pub values: Option<Vec<f64>>,
}

impl EngineOutcome {
    pub fn with_values(status: ScheduleStatus, values: Vec<f64>) -> Self {
        EngineOutcome {
            status,
            values: Some(values),
        }
    }

    pub fn without_values(status: ScheduleStatus) -> Self {
        EngineOutcome {
            status,
            values: None,
        }
    }
}

/// The reasons for an engine to fail outright.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("The {context} value {value} does not fit in the integer range of the engine")]
    ValueOutOfRange { context: String, value: i64 },
    #[error("The variable {name} has an empty domain [{lower}, {upper}]")]
    EmptyDomain {
        name: String,
        lower: i64,
        upper: i64,
    },
    #[error("The engine reported a solution but provided no values")]
    MissingValues,
    #[error("The engine provided {actual} values for {expected} variables")]
    WrongNumberOfValues { expected: usize, actual: usize },
    #[error("No task is assigned to slot {slot} in the solution of the engine")]
    UnassignedSlot { slot: usize },
    #[error("Task {task} is assigned to slot {slot} and to an earlier slot")]
    DuplicateTask { task: usize, slot: usize },
}
