mod result;

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use deadline_scheduler::create_optimal_schedule_with_engine;
use deadline_scheduler::generator::TaskGenerator;
use deadline_scheduler::io;
use deadline_scheduler::ConstraintEngine;
use deadline_scheduler::EngineOptions;
use deadline_scheduler::Schedule;
use deadline_scheduler::Task;
use log::error;
use log::info;
use log::LevelFilter;
use result::SchedulerError;
use result::SchedulerResult;

#[derive(Debug, Parser)]
#[command(author, version, about, arg_required_else_help = true)]
struct Cli {
    /// Enables logging of the model, the engine statistics and the values of the solution.
    #[arg(short = 'v', long = "verbose", global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Computes the reward-maximising order of the tasks in a CSV file.
    Solve(SolveArgs),
    /// Writes a random set of tasks to a CSV file.
    Generate(GenerateArgs),
}

#[derive(Debug, Args)]
struct SolveArgs {
    /// The CSV file with one `deadline,duration,reward` row per task, preceded by a header.
    instance_path: PathBuf,

    /// Writes the schedule as CSV to this file.
    #[arg(short = 'o', long = "output")]
    output_path: Option<PathBuf>,

    /// The time budget of the engine in milliseconds.
    ///
    /// When the budget runs out, the best schedule found so far is reported as
    /// `optimal_inaccurate`.
    #[arg(short = 't', long = "time-limit")]
    time_limit: Option<u64>,

    /// Stops the search after this many decisions.
    #[arg(short = 'd', long = "decision-limit")]
    decision_limit: Option<u64>,
}

#[derive(Debug, Args)]
struct GenerateArgs {
    /// The number of tasks to generate.
    #[arg(short = 'n', long = "num-tasks")]
    num_tasks: usize,

    #[arg(long = "min-duration", default_value_t = 1)]
    min_duration: u32,

    #[arg(long = "max-duration", default_value_t = 10)]
    max_duration: u32,

    #[arg(long = "min-deadline", default_value_t = 5)]
    min_deadline: u32,

    #[arg(long = "max-deadline", default_value_t = 30)]
    max_deadline: u32,

    #[arg(long = "min-reward", default_value_t = 10, allow_negative_numbers = true)]
    min_reward: i64,

    #[arg(long = "max-reward", default_value_t = 100, allow_negative_numbers = true)]
    max_reward: i64,

    /// Seeds the random generator, so that the same tasks are generated on every run.
    #[arg(long = "seed")]
    seed: Option<u64>,

    /// The file the tasks are written to.
    #[arg(short = 'o', long = "output")]
    output_path: PathBuf,
}

fn configure_logging(verbose: bool) {
    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(move |buf, record| writeln!(buf, "{}", record.args()))
        .filter_level(level_filter)
        .target(env_logger::Target::Stdout)
        .init();

    info!("Logging successfully configured");
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    }
}

fn run() -> SchedulerResult<()> {
    let cli = Cli::parse();

    configure_logging(cli.verbose);

    match cli.command {
        Command::Solve(args) => solve(args),
        Command::Generate(args) => generate(args),
    }
}

fn solve(args: SolveArgs) -> SchedulerResult<()> {
    let tasks = io::read_tasks(&args.instance_path)?;
    info!(
        "Read {} tasks from {}",
        tasks.len(),
        args.instance_path.display()
    );

    let mut engine = ConstraintEngine::new(EngineOptions {
        decision_limit: args.decision_limit,
    });
    let time_budget = args.time_limit.map(Duration::from_millis);

    let schedule = create_optimal_schedule_with_engine(&tasks, time_budget, &mut engine);

    if !schedule.is_success() {
        if let Some(failure) = schedule.failure() {
            error!("The engine failed: {failure}");
        }
        return Err(SchedulerError::NoSchedule(schedule.status()));
    }

    print_schedule(&tasks, &schedule);

    if let Some(output_path) = args.output_path {
        io::write_schedule(&schedule, &output_path)?;
        println!("\nSchedule saved to {}", output_path.display());
    }

    Ok(())
}

fn print_schedule(tasks: &[Task], schedule: &Schedule) {
    println!("Schedule ({}):", schedule.status());
    println!(
        "{:<6}{:<6}{:<12}{:<9}{:>8}",
        "Slot", "Task", "Start Time", "On Time", "Reward"
    );

    for (slot, placement) in schedule.placements().iter().enumerate() {
        let reward = if placement.is_on_time {
            tasks[placement.task_index].reward.to_string()
        } else {
            "-".to_owned()
        };
        let on_time = if placement.is_on_time { "yes" } else { "no" };

        println!(
            "{:<6}{:<6}{:<12}{:<9}{:>8}",
            slot, placement.task_index, placement.start_time, on_time, reward
        );
    }

    println!("Total reward: {}", schedule.total_reward().unwrap_or(0));
}

fn generate(args: GenerateArgs) -> SchedulerResult<()> {
    let mut generator = TaskGenerator::default()
        .with_durations(args.min_duration, args.max_duration)?
        .with_deadlines(args.min_deadline, args.max_deadline)?
        .with_rewards(args.min_reward, args.max_reward)?;
    if let Some(seed) = args.seed {
        generator = generator.with_seed(seed);
    }

    let tasks = generator.generate(args.num_tasks);
    io::write_tasks(&tasks, &args.output_path)?;

    println!(
        "Generated {} tasks in {}",
        tasks.len(),
        args.output_path.display()
    );

    Ok(())
}
