#![cfg(test)]

use std::time::Duration;

use deadline_scheduler::create_optimal_schedule;
use deadline_scheduler::create_optimal_schedule_with_engine;
use deadline_scheduler::generator::TaskGenerator;
use deadline_scheduler::problem::LinearProblem;
use deadline_scheduler::solving_engine::EngineError;
use deadline_scheduler::solving_engine::EngineOutcome;
use deadline_scheduler::ConstraintEngine;
use deadline_scheduler::EngineOptions;
use deadline_scheduler::Schedule;
use deadline_scheduler::ScheduleStatus;
use deadline_scheduler::SolvingEngine;
use deadline_scheduler::Task;

/// Checks the properties every successful schedule of `tasks` has, independently of the engine.
fn assert_valid_schedule(tasks: &[Task], schedule: &Schedule) {
    assert!(schedule.is_success(), "status is {}", schedule.status());

    let mut order = schedule.execution_order();
    order.sort_unstable();
    assert_eq!(order, (0..tasks.len()).collect::<Vec<_>>());

    let mut expected_start = 0;
    let mut expected_reward = 0;
    for placement in schedule.placements() {
        let task = &tasks[placement.task_index];
        assert_eq!(placement.start_time, expected_start);
        assert_eq!(
            placement.is_on_time,
            placement.start_time + u64::from(task.duration) <= u64::from(task.deadline)
        );

        if placement.is_on_time {
            expected_reward += task.reward;
        }
        expected_start += u64::from(task.duration);
    }

    assert_eq!(schedule.total_reward(), Some(expected_reward));
}

/// The best reward over all orders of `tasks`.
fn best_reward_by_enumeration(tasks: &[Task]) -> i64 {
    fn visit(tasks: &[Task], used: &mut [bool], time: u64, reward: i64, best: &mut i64) {
        if used.iter().all(|&is_used| is_used) {
            *best = (*best).max(reward);
            return;
        }

        for index in 0..tasks.len() {
            if used[index] {
                continue;
            }
            let task = &tasks[index];
            let gained = if task.is_on_time_when_started_at(time) {
                task.reward
            } else {
                0
            };

            used[index] = true;
            visit(
                tasks,
                used,
                time + u64::from(task.duration),
                reward + gained,
                best,
            );
            used[index] = false;
        }
    }

    let mut best = i64::MIN;
    visit(tasks, &mut vec![false; tasks.len()], 0, 0, &mut best);
    best
}

#[test]
fn mixed_deadlines_earn_the_two_reachable_rewards() {
    let tasks = [Task::new(10, 2, 50), Task::new(1, 3, 30), Task::new(7, 3, 40)];

    let schedule = create_optimal_schedule(&tasks, None);

    assert_eq!(schedule.status(), ScheduleStatus::Optimal);
    assert_eq!(schedule.total_reward(), Some(90));
    assert_eq!(schedule.execution_order(), vec![0, 2, 1]);
    assert_valid_schedule(&tasks, &schedule);

    let late = schedule
        .placements()
        .iter()
        .find(|placement| placement.task_index == 1)
        .expect("every task is placed");
    assert!(!late.is_on_time);
}

#[test]
fn tight_deadlines_have_a_unique_best_order() {
    let tasks = [Task::new(5, 3, 100), Task::new(6, 3, 200), Task::new(4, 2, 150)];

    let schedule = create_optimal_schedule(&tasks, None);

    assert_eq!(schedule.status(), ScheduleStatus::Optimal);
    assert_eq!(schedule.total_reward(), Some(350));
    assert_eq!(schedule.execution_order(), vec![2, 1, 0]);
    assert_valid_schedule(&tasks, &schedule);
}

#[test]
fn zero_duration_tasks_are_always_on_time() {
    let tasks = [Task::new(5, 0, 100), Task::new(6, 0, 200), Task::new(4, 0, 150)];

    let schedule = create_optimal_schedule(&tasks, None);

    assert_eq!(schedule.status(), ScheduleStatus::Optimal);
    assert_eq!(schedule.total_reward(), Some(450));
    assert!(schedule
        .placements()
        .iter()
        .all(|placement| placement.is_on_time && placement.start_time == 0));
}

#[test]
fn zero_deadlines_place_every_task_without_reward() {
    let tasks = [Task::new(0, 1, 100), Task::new(0, 2, 200), Task::new(0, 3, 150)];

    let schedule = create_optimal_schedule(&tasks, None);

    assert_eq!(schedule.status(), ScheduleStatus::Optimal);
    assert_eq!(schedule.total_reward(), Some(0));
    assert_eq!(schedule.placements().len(), 3);
    assert_valid_schedule(&tasks, &schedule);
}

#[test]
fn empty_task_sets_are_not_optimised() {
    let schedule = create_optimal_schedule(&[], None);

    assert_eq!(schedule.status(), ScheduleStatus::NotAttempted);
    assert!(schedule.placements().is_empty());
    assert_eq!(schedule.total_reward(), Some(0));
}

#[test]
fn single_task_is_scheduled_at_time_zero() {
    let tasks = [Task::new(3, 3, 7)];

    let schedule = create_optimal_schedule(&tasks, None);

    assert_eq!(schedule.status(), ScheduleStatus::Optimal);
    assert_eq!(schedule.total_reward(), Some(7));
    assert_valid_schedule(&tasks, &schedule);
}

#[test]
fn random_task_sets_match_exhaustive_enumeration() {
    for seed in 0..12 {
        let num_tasks = 1 + (seed as usize % 5);
        let tasks = TaskGenerator::default()
            .with_seed(seed)
            .with_durations(1, 6)
            .and_then(|generator| generator.with_deadlines(0, 15))
            .expect("valid ranges")
            .generate(num_tasks);

        let schedule = create_optimal_schedule(&tasks, None);

        assert_eq!(schedule.status(), ScheduleStatus::Optimal, "tasks: {tasks:?}");
        assert_valid_schedule(&tasks, &schedule);
        assert_eq!(
            schedule.total_reward(),
            Some(best_reward_by_enumeration(&tasks)),
            "tasks: {tasks:?}"
        );
    }
}

#[test]
fn adding_a_task_without_reward_never_lowers_the_reward() {
    for seed in 100..106 {
        let mut tasks = TaskGenerator::default()
            .with_seed(seed)
            .with_durations(1, 5)
            .expect("valid range")
            .generate(4);

        let without = create_optimal_schedule(&tasks, None);
        tasks.push(Task::new(3, 2, 0));
        let with = create_optimal_schedule(&tasks, None);

        assert_valid_schedule(&tasks, &with);
        assert!(with.total_reward() >= without.total_reward());
    }
}

#[test]
fn non_empty_task_sets_are_never_infeasible() {
    for seed in 200..208 {
        let tasks = TaskGenerator::default()
            .with_seed(seed)
            .with_deadlines(0, 5)
            .expect("valid range")
            .generate(3);

        let schedule = create_optimal_schedule(&tasks, None);

        assert_ne!(schedule.status(), ScheduleStatus::Infeasible);
        assert_valid_schedule(&tasks, &schedule);
    }
}

#[test]
fn a_generous_time_budget_still_proves_optimality() {
    let tasks = [Task::new(5, 3, 100), Task::new(6, 3, 200), Task::new(4, 2, 150)];

    let schedule = create_optimal_schedule(&tasks, Some(Duration::from_secs(30)));

    assert_eq!(schedule.status(), ScheduleStatus::Optimal);
    assert_eq!(schedule.total_reward(), Some(350));
}

#[test]
fn large_task_sets_return_the_best_schedule_found_within_the_limit() {
    let tasks = TaskGenerator::default().with_seed(7).generate(20);
    let mut engine = ConstraintEngine::new(EngineOptions {
        decision_limit: Some(2_000),
    });

    let schedule = create_optimal_schedule_with_engine(&tasks, None, &mut engine);

    assert!(matches!(
        schedule.status(),
        ScheduleStatus::Optimal | ScheduleStatus::OptimalInaccurate
    ));
    assert_eq!(schedule.placements().len(), 20);
    assert_valid_schedule(&tasks, &schedule);
}

#[test]
fn twelve_tasks_are_solved_to_optimality_within_a_decision_budget() {
    // The best reward of 579 was computed with the Lawler-Moore dynamic program over the tasks
    // sorted by deadline.
    let tasks = [
        Task::new(9, 8, 68),
        Task::new(29, 3, 100),
        Task::new(17, 6, 65),
        Task::new(21, 2, 78),
        Task::new(8, 2, 68),
        Task::new(13, 1, 94),
        Task::new(25, 4, 52),
        Task::new(12, 5, 36),
        Task::new(10, 3, 34),
        Task::new(16, 6, 90),
        Task::new(18, 4, 61),
        Task::new(19, 9, 45),
    ];
    let mut engine = ConstraintEngine::new(EngineOptions {
        decision_limit: Some(20_000),
    });

    let schedule = create_optimal_schedule_with_engine(&tasks, None, &mut engine);

    assert_eq!(schedule.status(), ScheduleStatus::Optimal);
    assert_eq!(schedule.total_reward(), Some(579));
    assert_valid_schedule(&tasks, &schedule);
}

#[test]
fn an_interrupted_search_is_not_reported_as_optimal() {
    // Only three of these tasks fit before the shared deadline. Proving that no three of them earn
    // more than the first schedule takes more decisions than allowed.
    let tasks = (1..=8)
        .map(|index| Task::new(10, 3, 10 * index))
        .collect::<Vec<_>>();
    let mut engine = ConstraintEngine::new(EngineOptions {
        decision_limit: Some(100),
    });

    let schedule = create_optimal_schedule_with_engine(&tasks, None, &mut engine);

    assert_eq!(schedule.status(), ScheduleStatus::OptimalInaccurate);
    assert_valid_schedule(&tasks, &schedule);
}

/// An engine which returns a fixed answer without looking at the problem.
struct FixedEngine(Result<EngineOutcome, EngineError>);

impl SolvingEngine for FixedEngine {
    fn solve(
        &mut self,
        _: &LinearProblem,
        _: Option<Duration>,
    ) -> Result<EngineOutcome, EngineError> {
        self.0.clone()
    }
}

#[test]
fn engine_failures_are_reported_with_their_reason() {
    let tasks = [Task::new(10, 2, 50)];
    let failure = EngineError::ValueOutOfRange {
        context: "coefficient".to_owned(),
        value: i64::MAX,
    };
    let mut engine = FixedEngine(Err(failure.clone()));

    let schedule = create_optimal_schedule_with_engine(&tasks, None, &mut engine);

    assert_eq!(schedule.status(), ScheduleStatus::SolverError);
    assert_eq!(schedule.failure(), Some(&failure));
    assert!(schedule.placements().is_empty());
    assert_eq!(schedule.total_reward(), None);
}

#[test]
fn running_out_of_time_without_a_schedule_is_a_user_limit() {
    let tasks = [Task::new(10, 2, 50), Task::new(1, 3, 30)];
    let mut engine = FixedEngine(Ok(EngineOutcome::without_values(ScheduleStatus::UserLimit)));

    let schedule = create_optimal_schedule_with_engine(&tasks, None, &mut engine);

    assert_eq!(schedule.status(), ScheduleStatus::UserLimit);
    assert!(!schedule.is_success());
    assert!(schedule.placements().is_empty());
    assert_eq!(schedule.failure(), None);
}

#[test]
fn unbounded_outcomes_are_passed_through() {
    let tasks = [Task::new(10, 2, 50)];
    let mut engine = FixedEngine(Ok(EngineOutcome::without_values(ScheduleStatus::Unbounded)));

    let schedule = create_optimal_schedule_with_engine(&tasks, None, &mut engine);

    assert_eq!(schedule.status(), ScheduleStatus::Unbounded);
    assert_eq!(schedule.total_reward(), None);
}

#[test]
fn a_success_without_values_is_an_engine_failure() {
    let tasks = [Task::new(10, 2, 50)];
    let mut engine = FixedEngine(Ok(EngineOutcome::without_values(ScheduleStatus::Optimal)));

    let schedule = create_optimal_schedule_with_engine(&tasks, None, &mut engine);

    assert_eq!(schedule.status(), ScheduleStatus::SolverError);
    assert_eq!(schedule.failure(), Some(&EngineError::MissingValues));
}
