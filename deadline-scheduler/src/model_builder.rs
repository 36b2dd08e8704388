//! Encodes the sequencing of a task set as a [`LinearProblem`].
//!
//! The machine has one slot per task. With `d`, `D` and `r` the durations, deadlines and rewards,
//! the model consists of
//! - binary variables `x[i][j]`, task `i` runs in slot `j`, with every row and every column of `x`
//!   summing to one;
//! - integer start times `s[j]` with `s[0] = 0` and `s[j + 1] = s[j] + \sum_i d_i x[i][j]`;
//! - binary on-time indicators `z[i] <= \sum_j x[i][j]`, which may only be one when
//!   `s[j] + d_i <= D_i` for the slot `j` of task `i`. For every pair `(i, j)` this is the Big-M
//!   constraint `s[j] + d_i <= D_i + M (1 - x[i][j]) + M (1 - z[i])`;
//! - the objective `\sum_i r_i z[i]`, which is maximised.
//!
//! Two additions do not change the solutions but let bounds propagation cut off partial orders
//! early:
//! - for every pair `(i, j)`, `s[j] + d_i <= D_i + M (1 - z[i]) + M \sum_{k < j} x[i][k]`. A task
//!   which is not placed before slot `j` starts no earlier than `s[j]`, so once the earlier slots
//!   are filled, every unplaced task which can no longer meet its deadline loses its reward;
//! - a branching order which fills the slots one after the other, trying the tasks with the
//!   highest reward first.
use std::cmp::Reverse;

use crate::problem::LinearExpression;
use crate::problem::LinearProblem;
use crate::problem::Relation;
use crate::problem::VariableId;
use crate::task::Task;

/// The [`LinearProblem`] of a non-empty task set, together with the variables which the decoder
/// reads back.
#[derive(Clone, Debug)]
pub struct SequencingModel {
    problem: LinearProblem,
    /// `assignment[i][j]` is one when task `i` runs in slot `j`.
    assignment: Vec<Vec<VariableId>>,
    start_times: Vec<VariableId>,
    on_time: Vec<VariableId>,
    big_m: i64,
}

impl SequencingModel {
    /// Builds the model; returns [`None`] for an empty task set, for which there is nothing to
    /// optimise.
    pub fn build(tasks: &[Task]) -> Option<SequencingModel> {
        if tasks.is_empty() {
            return None;
        }

        let num_tasks = tasks.len();
        let total_duration = total_duration(tasks);
        let big_m = big_m(tasks);

        let mut problem = LinearProblem::new();

        let assignment = (0..num_tasks)
            .map(|task| {
                (0..num_tasks)
                    .map(|slot| problem.add_binary(format!("x[{task}][{slot}]")))
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();
        let start_times = (0..num_tasks)
            .map(|slot| problem.add_integer(format!("s[{slot}]"), 0, total_duration))
            .collect::<Vec<_>>();
        let on_time = (0..num_tasks)
            .map(|task| problem.add_binary(format!("z[{task}]")))
            .collect::<Vec<_>>();

        // Every task occupies exactly one slot
        for row in assignment.iter() {
            let expression = row.iter().map(|&x| (1, x)).collect();
            problem.add_constraint(expression, Relation::Equal, 1);
        }

        // Every slot holds exactly one task
        for slot in 0..num_tasks {
            let expression = assignment.iter().map(|row| (1, row[slot])).collect();
            problem.add_constraint(expression, Relation::Equal, 1);
        }

        problem.add_constraint(
            LinearExpression::new().with_term(1, start_times[0]),
            Relation::Equal,
            0,
        );

        // s[j + 1] - s[j] - \sum_i d_i x[i][j] = 0
        for slot in 0..num_tasks - 1 {
            let mut expression = LinearExpression::new()
                .with_term(1, start_times[slot + 1])
                .with_term(-1, start_times[slot]);
            for (task, row) in tasks.iter().zip(assignment.iter()) {
                expression.add_term(-i64::from(task.duration), row[slot]);
            }
            problem.add_constraint(expression, Relation::Equal, 0);
        }

        for (task_index, task) in tasks.iter().enumerate() {
            let z = on_time[task_index];

            // z[i] - \sum_j x[i][j] <= 0
            let mut expression = LinearExpression::new().with_term(1, z);
            for &x in assignment[task_index].iter() {
                expression.add_term(-1, x);
            }
            problem.add_constraint(expression, Relation::LessThanOrEqual, 0);

            // s[j] + M x[i][j] + M z[i] <= D_i - d_i + 2M
            let rhs = i64::from(task.deadline) - i64::from(task.duration) + 2 * big_m;
            for (slot, &x) in assignment[task_index].iter().enumerate() {
                let expression = LinearExpression::new()
                    .with_term(1, start_times[slot])
                    .with_term(big_m, x)
                    .with_term(big_m, z);
                problem.add_constraint(expression, Relation::LessThanOrEqual, rhs);
            }

            // s[j] + M z[i] - M \sum_{k < j} x[i][k] <= D_i - d_i + M
            let rhs = i64::from(task.deadline) - i64::from(task.duration) + big_m;
            for slot in 0..num_tasks {
                let mut expression = LinearExpression::new()
                    .with_term(1, start_times[slot])
                    .with_term(big_m, z);
                for &x in assignment[task_index][..slot].iter() {
                    expression.add_term(-big_m, x);
                }
                problem.add_constraint(expression, Relation::LessThanOrEqual, rhs);
            }
        }

        let mut by_reward = (0..num_tasks).collect::<Vec<_>>();
        by_reward.sort_by_key(|&task| Reverse(tasks[task].reward));
        let mut branching_order = Vec::with_capacity(num_tasks * (num_tasks + 1));
        for slot in 0..num_tasks {
            branching_order.extend(by_reward.iter().map(|&task| assignment[task][slot]));
        }
        branching_order.extend(by_reward.iter().map(|&task| on_time[task]));
        problem.set_branching_order(branching_order);

        problem.maximise(
            tasks
                .iter()
                .zip(on_time.iter())
                .map(|(task, &z)| (task.reward, z))
                .collect(),
        );

        Some(SequencingModel {
            problem,
            assignment,
            start_times,
            on_time,
            big_m,
        })
    }

    pub fn problem(&self) -> &LinearProblem {
        &self.problem
    }

    pub fn num_tasks(&self) -> usize {
        self.assignment.len()
    }

    /// The variable which indicates that `task` runs in `slot`.
    pub fn assignment(&self, task: usize, slot: usize) -> VariableId {
        self.assignment[task][slot]
    }

    pub fn start_time(&self, slot: usize) -> VariableId {
        self.start_times[slot]
    }

    pub fn on_time(&self, task: usize) -> VariableId {
        self.on_time[task]
    }

    /// The constant which disables a deadline constraint when its indicator is zero.
    pub fn big_m(&self) -> i64 {
        self.big_m
    }
}

fn total_duration(tasks: &[Task]) -> i64 {
    tasks.iter().map(|task| i64::from(task.duration)).sum()
}

/// The sum of all durations plus the largest deadline. No start time exceeds the total duration,
/// so this is larger than any `s[j] + d_i - D_i`.
fn big_m(tasks: &[Task]) -> i64 {
    let max_deadline = tasks
        .iter()
        .map(|task| i64::from(task.deadline))
        .max()
        .unwrap_or(0);
    total_duration(tasks) + max_deadline
}
