//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use priotask::config::AppConfig;
use priotask::core::services::DateOrder;
use priotask::output::OutputMode;

/// priotask - Offline task scheduler ordered by priority and due date
#[derive(Parser, Debug)]
#[command(
    name = "priotask",
    version,
    about = "Offline task scheduler ordered by priority and due date",
    long_about = "Keep a list of tasks with a priority and a due date.\n\n\
                  Pending tasks are listed most urgent first; complete one by\n\
                  its number in that list."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Task file (default: tasks.json, or `tasks_file` from the config)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Due-date order within a priority tier: descending, ascending
    #[arg(long, global = true)]
    pub date_order: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a new task
    Add {
        /// Task title (what needs to be done)
        title: String,

        /// Due date (YYYY-MM-DD)
        #[arg(short = 'D', long)]
        due: String,

        /// Priority: LOW, MEDIUM, HIGH, CRITICAL
        #[arg(short, long)]
        priority: String,

        /// Optional description
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// List pending tasks by priority
    List,

    /// Mark the task at NUMBER in the priority list as complete
    Complete {
        /// Task number as shown by `list`
        number: usize,
    },

    /// Run the interactive menu
    Menu,

    /// Show task counts and the active task file
    Status,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let date_order: Option<DateOrder> = cli.date_order.as_deref().map(str::parse::<DateOrder>).transpose()?;
    let settings = AppConfig::load().resolve(cli.file, date_order);

    match cli.command {
        Some(Command::Add {
            title,
            due,
            priority,
            description,
        }) => commands::add(&settings, &title, &description, &due, &priority, output_mode),
        Some(Command::List) => commands::list(&settings, output_mode),
        Some(Command::Complete { number }) => commands::complete(&settings, number, output_mode),
        Some(Command::Menu) => commands::menu(&settings),
        Some(Command::Status) => commands::status(&settings, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("priotask v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("priotask v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'priotask --help' for usage");
                println!("Run 'priotask menu' for the interactive menu");
            }
            Ok(())
        },
    }
}
