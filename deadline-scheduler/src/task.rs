/// A single non-preemptible job: it occupies the machine for `duration` time units and earns
/// `reward` only when it finishes at or before `deadline`.
///
/// The fields are not validated against each other; a task whose duration exceeds its deadline
/// is accepted and can never be on time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Task {
    pub deadline: u32,
    pub duration: u32,
    pub reward: i64,
}

impl Task {
    pub fn new(deadline: u32, duration: u32, reward: i64) -> Self {
        Task {
            deadline,
            duration,
            reward,
        }
    }

    /// Whether the task finishes by its deadline when it starts at `start_time`.
    pub fn is_on_time_when_started_at(&self, start_time: u64) -> bool {
        start_time + u64::from(self.duration) <= u64::from(self.deadline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finishing_exactly_at_the_deadline_is_on_time() {
        let task = Task::new(5, 3, 10);

        assert!(task.is_on_time_when_started_at(0));
        assert!(task.is_on_time_when_started_at(2));
        assert!(!task.is_on_time_when_started_at(3));
    }

    #[test]
    fn zero_duration_tasks_only_depend_on_the_start_time() {
        let task = Task::new(0, 0, 10);

        assert!(task.is_on_time_when_started_at(0));
        assert!(!task.is_on_time_when_started_at(1));
    }
}
