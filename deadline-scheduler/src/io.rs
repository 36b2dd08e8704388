//! Reading and writing task sets and schedules as CSV.
use std::fs::File;
use std::io::Read;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::schedule::Schedule;
use crate::task::Task;

#[derive(Error, Debug)]
pub enum IoError {
    #[error("IO error, more details: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid CSV, more details: {0}")]
    Csv(#[from] csv::Error),
    #[error("Line {line}: the {field} '{value}' is not a valid integer")]
    InvalidField {
        line: u64,
        field: &'static str,
        value: String,
    },
}

/// The columns of a task file, in order.
#[derive(Serialize)]
struct TaskRecord {
    deadline: u32,
    duration: u32,
    reward: i64,
}

/// Reads tasks from the CSV file at `path`, see [`read_tasks_from`].
pub fn read_tasks(path: impl AsRef<Path>) -> Result<Vec<Task>, IoError> {
    read_tasks_from(File::open(path)?)
}

/// Reads tasks from CSV data.
///
/// The first row is a header and is skipped. The first three fields of every other row are the
/// deadline, duration and reward of a task; rows with fewer than three fields are skipped.
pub fn read_tasks_from(reader: impl Read) -> Result<Vec<Task>, IoError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut tasks = vec![];
    for record in reader.records() {
        let record = record?;
        if record.len() < 3 {
            continue;
        }

        let line = record.position().map_or(0, csv::Position::line);
        tasks.push(Task {
            deadline: parse_field(&record[0], "deadline", line)?,
            duration: parse_field(&record[1], "duration", line)?,
            reward: parse_field(&record[2], "reward", line)?,
        });
    }

    Ok(tasks)
}

fn parse_field<T: std::str::FromStr>(
    value: &str,
    field: &'static str,
    line: u64,
) -> Result<T, IoError> {
    value.trim().parse().map_err(|_| IoError::InvalidField {
        line,
        field,
        value: value.to_owned(),
    })
}

/// Writes `tasks` with the header `deadline,duration,reward`.
pub fn write_tasks(tasks: &[Task], path: impl AsRef<Path>) -> Result<(), IoError> {
    write_tasks_to(tasks, File::create(path)?)
}

pub fn write_tasks_to(tasks: &[Task], writer: impl Write) -> Result<(), IoError> {
    let mut writer = csv::Writer::from_writer(writer);
    if tasks.is_empty() {
        writer.write_record(["deadline", "duration", "reward"])?;
    }

    for task in tasks {
        writer.serialize(TaskRecord {
            deadline: task.deadline,
            duration: task.duration,
            reward: task.reward,
        })?;
    }

    writer.flush()?;
    Ok(())
}

/// Writes the placements of `schedule` followed by a blank line and its total reward.
pub fn write_schedule(schedule: &Schedule, path: impl AsRef<Path>) -> Result<(), IoError> {
    write_schedule_to(schedule, File::create(path)?)
}

pub fn write_schedule_to(schedule: &Schedule, mut writer: impl Write) -> Result<(), IoError> {
    {
        let mut placements = csv::Writer::from_writer(&mut writer);
        placements.write_record(["Task Index", "Start Time", "On Time"])?;
        for placement in schedule.placements() {
            placements.write_record([
                placement.task_index.to_string(),
                placement.start_time.to_string(),
                placement.is_on_time.to_string(),
            ])?;
        }
        placements.flush()?;
    }

    writeln!(writer)?;

    let mut summary = csv::Writer::from_writer(&mut writer);
    summary.write_record([
        "Total Reward".to_owned(),
        schedule
            .total_reward()
            .map(|reward| reward.to_string())
            .unwrap_or_default(),
    ])?;
    summary.flush()?;

    Ok(())
}
