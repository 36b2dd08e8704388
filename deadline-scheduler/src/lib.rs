//! # deadline-scheduler
//! Computes the execution order of a set of non-preemptible tasks on a single machine which
//! maximises the reward of the tasks that finish by their deadline.
//!
//! Every task has a deadline, a duration and a reward. The machine runs the tasks back-to-back
//! from time zero, and a task earns its reward only when `start_time + duration <= deadline`.
//!
//! The task set is encoded as an integer linear program by [`SequencingModel`], solved by a
//! [`SolvingEngine`] (by default the [`ConstraintEngine`]) and decoded into a [`Schedule`]:
//! ```rust
//! # use deadline_scheduler::create_optimal_schedule;
//! # use deadline_scheduler::Task;
//! let tasks = [Task::new(10, 2, 50), Task::new(1, 3, 30), Task::new(7, 3, 40)];
//!
//! let schedule = create_optimal_schedule(&tasks, None);
//!
//! assert!(schedule.is_success());
//! assert_eq!(schedule.total_reward(), Some(90));
//! assert_eq!(schedule.placements().len(), 3);
//! ```
//!
//! An empty task set is not optimised at all; its schedule has status `none` and reward 0.

pub mod constraint_engine;
pub mod decoder;
pub mod generator;
pub mod io;
pub mod model_builder;
mod optimizer;
pub mod problem;
mod schedule;
pub mod solving_engine;
mod task;

pub use constraint_engine::ConstraintEngine;
pub use constraint_engine::EngineOptions;
pub use model_builder::SequencingModel;
pub use optimizer::create_optimal_schedule;
pub use optimizer::create_optimal_schedule_with_engine;
pub use schedule::Placement;
pub use schedule::Schedule;
pub use schedule::ScheduleStatus;
pub use solving_engine::SolvingEngine;
pub use task::Task;
