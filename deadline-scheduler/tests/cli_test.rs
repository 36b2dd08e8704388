#![cfg(test)] // workaround for https://github.com/rust-lang/rust-clippy/issues/11024

use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use std::process::Output;
use std::process::Stdio;
use std::time::Duration;

use wait_timeout::ChildExt;

const TEST_TIMEOUT: Duration = Duration::from_secs(60);

/// A file in the temporary directory which is removed when dropped.
struct TempFile(PathBuf);

impl TempFile {
    fn new(name: &str) -> TempFile {
        TempFile(std::env::temp_dir().join(format!(
            "deadline-scheduler-{}-{name}",
            std::process::id()
        )))
    }

    fn with_contents(name: &str, contents: &str) -> TempFile {
        let file = TempFile::new(name);
        std::fs::write(&file.0, contents).expect("Failed to write temporary file.");
        file
    }

    fn path(&self) -> &Path {
        &self.0
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.0);
    }
}

fn run_scheduler<'a>(args: impl IntoIterator<Item = &'a str>) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_deadline-scheduler"))
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to run the scheduler.");

    match child.wait_timeout(TEST_TIMEOUT) {
        Ok(Some(_)) => {}
        Ok(None) => {
            let _ = child.kill();
            panic!(
                "scheduler took more than {} seconds",
                TEST_TIMEOUT.as_secs()
            );
        }
        Err(e) => panic!("error waiting for the scheduler: {e}"),
    }

    child
        .wait_with_output()
        .expect("Failed to collect the output of the scheduler.")
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("temporary paths are valid unicode")
}

#[test]
fn solve_prints_the_optimal_schedule() {
    let instance = TempFile::with_contents(
        "solve.csv",
        "deadline,duration,reward\n5,3,100\n6,3,200\n4,2,150\n",
    );

    let output = run_scheduler(["solve", path_str(instance.path())]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "stdout: {stdout}");
    assert!(stdout.contains("Schedule (optimal):"), "stdout: {stdout}");
    assert!(stdout.contains("Total reward: 350"), "stdout: {stdout}");
}

#[test]
fn solve_writes_the_schedule_csv() {
    let instance = TempFile::with_contents(
        "write.csv",
        "deadline,duration,reward\n5,3,100\n6,3,200\n4,2,150\n",
    );
    let schedule = TempFile::new("write-schedule.csv");

    let output = run_scheduler([
        "solve",
        path_str(instance.path()),
        "--output",
        path_str(schedule.path()),
    ]);
    assert!(output.status.success());

    let written = std::fs::read_to_string(schedule.path()).expect("the schedule is written");
    let mut lines = written.lines();
    assert_eq!(lines.next(), Some("Task Index,Start Time,On Time"));
    assert_eq!(lines.next(), Some("2,0,true"));
    assert_eq!(lines.next(), Some("1,2,true"));
    assert_eq!(lines.next(), Some("0,5,false"));
    assert_eq!(lines.next(), Some(""));
    assert!(written.trim_end().ends_with("Total Reward,350"));
}

#[test]
fn solve_fails_on_an_empty_task_set() {
    let instance = TempFile::with_contents("empty.csv", "deadline,duration,reward\n");

    let output = run_scheduler(["solve", path_str(instance.path())]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(1));
    assert!(
        stdout.contains("Failed to find a schedule (solver status is none)"),
        "stdout: {stdout}"
    );
}

#[test]
fn solve_fails_on_a_missing_file() {
    let missing = TempFile::new("missing.csv");

    let output = run_scheduler(["solve", path_str(missing.path())]);

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn generate_writes_a_readable_task_set() {
    let generated = TempFile::new("generated.csv");

    let output = run_scheduler([
        "generate",
        "-n",
        "4",
        "--seed",
        "3",
        "-o",
        path_str(generated.path()),
    ]);
    assert!(output.status.success());

    let tasks = deadline_scheduler::io::read_tasks(generated.path()).expect("valid task file");
    assert_eq!(tasks.len(), 4);

    let solved = run_scheduler(["solve", path_str(generated.path())]);
    assert!(solved.status.success());
}

#[test]
fn generate_rejects_inverted_ranges() {
    let generated = TempFile::new("inverted.csv");

    let output = run_scheduler([
        "generate",
        "-n",
        "4",
        "--min-duration",
        "9",
        "--max-duration",
        "2",
        "-o",
        path_str(generated.path()),
    ]);

    assert_eq!(output.status.code(), Some(1));
    assert!(!generated.path().exists());
}
