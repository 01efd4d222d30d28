use anyhow::Context;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Logger, Root};
use task_cli::{ListOutcome, Status, Task, service};

#[derive(Parser, Debug)]
#[command(name = "task-cli", about = "Track tasks in a local JSON file")]
struct Cli {
    /// File the task list is stored in
    #[arg(long, short = 'f', global = true, default_value = "tasks.json")]
    file: String,

    /// Log what each operation does
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Subcommand)]
enum Commands {
    /// Add a new task
    Add {
        /// Task description; multiple words are joined with spaces
        #[arg(required = true)]
        description: Vec<String>,
    },
    /// List tasks, optionally only those with a given status
    List {
        /// Status to filter by: todo, "in progress" or done
        status: Vec<String>,
    },
    /// Replace the description of an existing task
    Update {
        id: u32,
        /// New description; multiple words are joined with spaces
        #[arg(required = true)]
        description: Vec<String>,
    },
    /// Mark a task as being worked on
    MarkInProgress { id: u32 },
    /// Mark a task as finished
    MarkDone { id: u32 },
    /// Remove a task
    Delete { id: u32 },
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_logging(args.verbose);
    let file = args.file;

    match args.command {
        Commands::Add { description } => {
            let id = service::add_task(&file, &description.join(" "))
                .context("adding task failed")?;
            println!("Task added successfully (ID: {id})");
        }
        Commands::List { status } => {
            let filter = parse_status_filter(&status);
            match service::list_tasks(&file, filter).context("listing tasks failed")? {
                ListOutcome::Empty => println!("No tasks found."),
                ListOutcome::NoMatches(status) => {
                    println!("No tasks with status \"{status}\" found.");
                }
                ListOutcome::Tasks(tasks) => print_table(&tasks),
            }
        }
        Commands::Update { id, description } => {
            service::update_task(&file, id, &description.join(" "))
                .context("updating task failed")?;
            println!("Task updated successfully (ID: {id})");
        }
        Commands::MarkInProgress { id } => {
            service::mark_in_progress(&file, id).context("marking task 'in progress' failed")?;
            println!("Task marked as in progress (ID: {id})");
        }
        Commands::MarkDone { id } => {
            service::mark_done(&file, id).context("marking task 'done' failed")?;
            println!("Task marked as done (ID: {id})");
        }
        Commands::Delete { id } => {
            service::delete_task(&file, id).context("deleting task failed")?;
            println!("Task deleted successfully (ID: {id})");
        }
    }

    Ok(())
}

/// Turns the trailing words of `list` into a status filter, rejecting
/// anything outside todo / in progress / done with a usage error.
fn parse_status_filter(words: &[String]) -> Option<Status> {
    if words.is_empty() {
        return None;
    }
    match words.join(" ").parse() {
        Ok(status) => Some(status),
        Err(_) => Cli::command()
            .error(
                ErrorKind::InvalidValue,
                "invalid task status.\nAllowed statuses: todo, in progress, done.",
            )
            .exit(),
    }
}

fn print_table(tasks: &[Task]) {
    println!("{:<4} {:<12} {:<17} Description", "ID", "Status", "Created");
    for task in tasks {
        let created = task.created_at.format("%Y-%m-%d %H:%M").to_string();
        println!(
            "{:<4} {:<12} {:<17} {}",
            task.id,
            task.status.as_str(),
            created,
            task.description
        );
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .logger(Logger::builder().build("task_cli", level))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))
        .expect("logging config is valid");
    let _log4rs_handle = log4rs::init_config(config).expect("logging initializes once");
}
