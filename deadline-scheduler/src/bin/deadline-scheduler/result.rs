use deadline_scheduler::generator::GeneratorError;
use deadline_scheduler::io::IoError;
use deadline_scheduler::ScheduleStatus;
use thiserror::Error;

pub(crate) type SchedulerResult<T> = Result<T, SchedulerError>;

#[derive(Error, Debug)]
pub(crate) enum SchedulerError {
    #[error("Failed to read or write a CSV file, more details: {0}")]
    Io(#[from] IoError),
    #[error("Invalid generator settings, more details: {0}")]
    Generator(#[from] GeneratorError),
    #[error("Failed to find a schedule (solver status is {0})")]
    NoSchedule(ScheduleStatus),
}
