//! Turns the variable values of an engine back into a [`Schedule`].
use crate::model_builder::SequencingModel;
use crate::schedule::Placement;
use crate::schedule::Schedule;
use crate::solving_engine::EngineError;
use crate::solving_engine::EngineOutcome;
use crate::task::Task;

/// Assignment variables with a value above this threshold are read as one.
pub const ASSIGNMENT_THRESHOLD: f64 = 0.5;

/// Decodes the outcome of an engine for the model of `tasks`.
///
/// The status of the outcome is carried over unchanged. Placements are only decoded for a
/// successful outcome, or for an unsuccessful one which still carries the best solution the engine
/// found. Start times and on-time flags are recomputed from the assignment; the start time and
/// indicator values of the engine are not used.
///
/// An error is returned when the values contradict the model, which means the engine failed.
pub fn decode(
    tasks: &[Task],
    model: &SequencingModel,
    outcome: &EngineOutcome,
) -> Result<Schedule, EngineError> {
    let values = match (&outcome.values, outcome.status.is_success()) {
        (Some(values), _) => values,
        (None, true) => return Err(EngineError::MissingValues),
        (None, false) => return Ok(Schedule::unsolved(outcome.status)),
    };

    let expected = model.problem().num_variables();
    if values.len() != expected {
        return Err(EngineError::WrongNumberOfValues {
            expected,
            actual: values.len(),
        });
    }

    let mut placements = Vec::with_capacity(tasks.len());
    let mut is_placed = vec![false; model.num_tasks()];
    let mut start_time = 0_u64;
    let mut total_reward = 0_i64;

    for slot in 0..model.num_tasks() {
        let task_index = (0..model.num_tasks())
            .find(|&task| values[model.assignment(task, slot).index()] > ASSIGNMENT_THRESHOLD)
            .ok_or(EngineError::UnassignedSlot { slot })?;
        if is_placed[task_index] {
            return Err(EngineError::DuplicateTask {
                task: task_index,
                slot,
            });
        }
        is_placed[task_index] = true;

        let task = &tasks[task_index];

        let is_on_time = task.is_on_time_when_started_at(start_time);
        if is_on_time {
            total_reward += task.reward;
        }

        placements.push(Placement {
            task_index,
            start_time,
            is_on_time,
        });
        start_time += u64::from(task.duration);
    }

    Ok(Schedule::new(placements, total_reward, outcome.status))
}
