use std::path::PathBuf;

use batchcook_core::{FormatDuration, ValidatePreparation, ValidateSession};
use clap::{Args as ClapArgs, Parser, Subcommand};

/// Batch-cooking session planner
///
/// Packs the steps of a cooking session into parallel groups around the
/// long unattended operations, audits the result for appliance
/// double-booking, checks sessions and preparations, finds moments a
/// toddler can join and splits the plan around a nap. Can also run as an
/// MCP (Model Context Protocol) server over stdio.
///
/// FILE arguments are JSON sessions or bare step lists; `-` reads stdin.
#[derive(Parser)]
#[command(version, about, name = "batchcook")]
pub struct Args {
    /// Path to the kitchen configuration file. Defaults to
    /// $XDG_CONFIG_HOME/batchcook/kitchen.json
    #[arg(long, global = true)]
    pub config_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print results as JSON instead of markdown
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a session, schedule its steps and report the time saved
    #[command(alias = "p")]
    Plan(FileArgs),
    /// Assign parallel groups and sequence positions to steps
    #[command(alias = "o")]
    Optimize(FileArgs),
    /// Audit scheduled steps for single-use appliance collisions
    #[command(alias = "c")]
    Conflicts(FileArgs),
    /// Check a session or a preparation
    #[command(alias = "v")]
    Validate {
        #[command(subcommand)]
        command: ValidateCommands,
    },
    /// List the steps a toddler can help with or watch
    #[command(alias = "j")]
    Jules(FileArgs),
    /// Place the plan on the clock and split it around a nap
    #[command(alias = "n")]
    Nap(NapArgs),
    /// Summarize a session
    #[command(alias = "s")]
    Stats(FileArgs),
    /// Aggregate past sessions
    #[command(alias = "h")]
    History(HistoryArgs),
    /// List the appliance and storage registries
    #[command(alias = "a")]
    Appliances,
    /// Format a number of minutes, optionally with an end time
    #[command(alias = "f")]
    Format(FormatArgs),
    /// Start the MCP server
    Serve,
}

#[derive(Subcommand)]
pub enum ValidateCommands {
    /// Check the date, recipe count and appliances of a proposed session
    Session(ValidateSessionArgs),
    /// Check the name, portions and shelf life of a preparation
    Preparation(ValidatePreparationArgs),
}

/// A JSON input file.
#[derive(ClapArgs)]
pub struct FileArgs {
    /// Session or step list as JSON; `-` reads stdin
    pub file: PathBuf,
}

#[derive(ClapArgs)]
pub struct ValidateSessionArgs {
    /// Session date as YYYY-MM-DD
    #[arg(long)]
    pub date: String,
    /// Selected recipe ids, comma-separated
    #[arg(short, long, value_delimiter = ',')]
    pub recipes: Vec<u64>,
    /// Appliance ids the session will use, comma-separated
    #[arg(short, long, value_delimiter = ',')]
    pub appliances: Vec<String>,
}

impl From<ValidateSessionArgs> for ValidateSession {
    fn from(val: ValidateSessionArgs) -> Self {
        ValidateSession {
            date: val.date,
            recipe_ids: val.recipes.into_iter().collect(),
            appliances: val.appliances,
        }
    }
}

#[derive(ClapArgs)]
pub struct ValidatePreparationArgs {
    /// Name of the dish
    pub name: String,
    /// Number of portions
    #[arg(short, long, allow_negative_numbers = true)]
    pub portions: i64,
    /// Days the dish should keep
    #[arg(short, long, allow_negative_numbers = true)]
    pub days: i64,
    /// Storage location id (refrigerator, freezer, pantry, ...)
    #[arg(short, long)]
    pub location: String,
}

impl From<ValidatePreparationArgs> for ValidatePreparation {
    fn from(val: ValidatePreparationArgs) -> Self {
        ValidatePreparation {
            name: val.name,
            portions: val.portions,
            conservation_days: val.days,
            storage_location: val.location,
        }
    }
}

/// Nap window arguments.
///
/// Unscheduled steps are optimized first, so a raw step list works too.
#[derive(ClapArgs)]
pub struct NapArgs {
    /// Session or step list as JSON; `-` reads stdin
    pub file: PathBuf,
    /// Session start as HH:MM
    #[arg(long)]
    pub start: String,
    /// Nap start as HH:MM
    #[arg(long)]
    pub nap_start: String,
    /// Nap end as HH:MM
    #[arg(long)]
    pub nap_end: String,
}

#[derive(ClapArgs)]
pub struct HistoryArgs {
    /// Session files (each a session or an array of sessions)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

#[derive(ClapArgs)]
pub struct FormatArgs {
    /// Duration in minutes
    pub minutes: u32,
    /// Start as HH:MM, to estimate when it ends
    #[arg(long)]
    pub start: Option<String>,
}

impl From<FormatArgs> for FormatDuration {
    fn from(val: FormatArgs) -> Self {
        FormatDuration {
            minutes: val.minutes,
            start_time: val.start,
        }
    }
}
