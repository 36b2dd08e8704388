use std::time::Duration;

use log::debug;
use log::warn;

use crate::constraint_engine::ConstraintEngine;
use crate::decoder;
use crate::model_builder::SequencingModel;
use crate::schedule::Schedule;
use crate::solving_engine::EngineOutcome;
use crate::solving_engine::SolvingEngine;
use crate::task::Task;

/// Computes the execution order of `tasks` which maximises the reward of the on-time tasks.
///
/// The search gives up after `time_budget`, if provided, in which case the best schedule found so
/// far is returned with status `optimal_inaccurate`.
///
/// ```rust
/// # use deadline_scheduler::create_optimal_schedule;
/// # use deadline_scheduler::ScheduleStatus;
/// # use deadline_scheduler::Task;
/// let tasks = [Task::new(5, 3, 100), Task::new(6, 3, 200), Task::new(4, 2, 150)];
///
/// let schedule = create_optimal_schedule(&tasks, None);
///
/// assert_eq!(schedule.status(), ScheduleStatus::Optimal);
/// assert_eq!(schedule.total_reward(), Some(350));
/// assert_eq!(schedule.execution_order(), vec![2, 1, 0]);
/// ```
pub fn create_optimal_schedule(tasks: &[Task], time_budget: Option<Duration>) -> Schedule {
    create_optimal_schedule_with_engine(tasks, time_budget, &mut ConstraintEngine::default())
}

/// Like [`create_optimal_schedule`], but solves the model with the provided engine.
///
/// A failure of the engine results in a schedule with status `solver_error` which carries the
/// reason in [`Schedule::failure`].
pub fn create_optimal_schedule_with_engine(
    tasks: &[Task],
    time_budget: Option<Duration>,
    engine: &mut impl SolvingEngine,
) -> Schedule {
    let Some(model) = SequencingModel::build(tasks) else {
        debug!("No tasks to schedule");
        return Schedule::not_attempted();
    };
    debug!(
        "Built a model with {} variables and {} constraints",
        model.problem().num_variables(),
        model.problem().constraints().len()
    );

    let decoded = engine
        .solve(model.problem(), time_budget)
        .and_then(|outcome| {
            log_values(&model, &outcome);
            decoder::decode(tasks, &model, &outcome)
        });

    match decoded {
        Ok(schedule) => schedule,
        Err(error) => {
            warn!("Failed to solve the scheduling model: {error}");
            Schedule::solver_error(error)
        }
    }
}

fn log_values(model: &SequencingModel, outcome: &EngineOutcome) {
    debug!("Engine status: {}", outcome.status);

    let Some(values) = outcome.values.as_ref() else {
        return;
    };
    if values.len() != model.problem().num_variables() {
        return;
    }

    let num_tasks = model.num_tasks();
    for task in 0..num_tasks {
        let row = (0..num_tasks)
            .map(|slot| values[model.assignment(task, slot).index()])
            .collect::<Vec<_>>();
        debug!("x[{task}] = {row:?}");
    }

    let start_times = (0..num_tasks)
        .map(|slot| values[model.start_time(slot).index()])
        .collect::<Vec<_>>();
    debug!("s = {start_times:?}");

    let on_time = (0..num_tasks)
        .map(|task| values[model.on_time(task).index()])
        .collect::<Vec<_>>();
    debug!("z = {on_time:?}");
}
