//! Random task sets.
use std::ops::RangeInclusive;

use rand::rngs::SmallRng;
use rand::Rng;
use rand::SeedableRng;
use thiserror::Error;

use crate::task::Task;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("The minimum {field} ({min}) exceeds the maximum {field} ({max})")]
    InvertedRange {
        field: &'static str,
        min: i64,
        max: i64,
    },
}

/// Draws tasks whose fields are uniformly distributed over inclusive ranges.
#[derive(Debug, Clone)]
pub struct TaskGenerator {
    duration: RangeInclusive<u32>,
    deadline: RangeInclusive<u32>,
    reward: RangeInclusive<i64>,
    rng: SmallRng,
}

impl Default for TaskGenerator {
    fn default() -> Self {
        TaskGenerator {
            duration: 1..=10,
            deadline: 5..=30,
            reward: 10..=100,
            rng: SmallRng::from_entropy(),
        }
    }
}

impl TaskGenerator {
    /// Use a seeded random generator, so that the same tasks are generated on every run.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = SmallRng::seed_from_u64(seed);
        self
    }

    pub fn with_durations(mut self, min: u32, max: u32) -> Result<Self, GeneratorError> {
        check_range("duration", i64::from(min), i64::from(max))?;
        self.duration = min..=max;
        Ok(self)
    }

    pub fn with_deadlines(mut self, min: u32, max: u32) -> Result<Self, GeneratorError> {
        check_range("deadline", i64::from(min), i64::from(max))?;
        self.deadline = min..=max;
        Ok(self)
    }

    pub fn with_rewards(mut self, min: i64, max: i64) -> Result<Self, GeneratorError> {
        check_range("reward", min, max)?;
        self.reward = min..=max;
        Ok(self)
    }

    pub fn generate(&mut self, num_tasks: usize) -> Vec<Task> {
        (0..num_tasks)
            .map(|_| Task {
                deadline: self.rng.gen_range(self.deadline.clone()),
                duration: self.rng.gen_range(self.duration.clone()),
                reward: self.rng.gen_range(self.reward.clone()),
            })
            .collect()
    }
}

fn check_range(field: &'static str, min: i64, max: i64) -> Result<(), GeneratorError> {
    if min > max {
        return Err(GeneratorError::InvertedRange { field, min, max });
    }
    Ok(())
}
