use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Tony Kan, Ted Yu",
    version,
    about = "glyconv - predicts glycerol hydrogenolysis conversion from reactor operating parameters and reports each parameter's contribution.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads used for batch evaluation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Predict the conversion for one set of operating parameters.
    Evaluate(EvaluateArgs),
    /// Predict the conversion for every row of a CSV file of parameter sets.
    Batch(BatchArgs),
    /// Inspect, export, or check parameter tables.
    Table(TableArgs),
}

/// Arguments for the `evaluate` subcommand.
#[derive(Args, Debug)]
pub struct EvaluateArgs {
    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Parameter table to use instead of the built-in glycerol table.
    #[arg(short, long, value_name = "PATH")]
    pub table: Option<PathBuf>,

    /// Set one parameter value; unset parameters start at their optimum.
    /// Can be used multiple times. Example: -P t2=203.5
    #[arg(short = 'P', long = "param", value_name = "NAME=VALUE")]
    pub params: Vec<String>,

    /// Print the result as JSON instead of the text report.
    #[arg(long)]
    pub json: bool,

    /// Number of decimal places in the text report.
    #[arg(long, value_name = "DIGITS")]
    pub precision: Option<usize>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S output.format=json
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `batch` subcommand.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// CSV file whose header names the parameters, one parameter set per row.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Where to write the result CSV. Defaults to standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Parameter table to use instead of the built-in glycerol table.
    #[arg(short, long, value_name = "PATH")]
    pub table: Option<PathBuf>,

    /// Fill parameters absent from the CSV with their optimal values.
    #[arg(long)]
    pub fill_optimal: bool,
}

/// Arguments for the `table` subcommand.
#[derive(Args, Debug)]
pub struct TableArgs {
    #[command(subcommand)]
    pub command: TableCommands,
}

/// Available commands for parameter tables.
#[derive(Subcommand, Debug)]
pub enum TableCommands {
    /// Print the parameter table in use.
    Show {
        /// Table file to show instead of the built-in table.
        #[arg(short, long, value_name = "PATH")]
        table: Option<PathBuf>,
    },
    /// Write the built-in table as TOML, as a starting point for custom tables.
    Export {
        /// Destination file.
        #[arg(required = true)]
        path: PathBuf,
        /// Overwrite the destination if it exists.
        #[arg(long)]
        force: bool,
    },
    /// Load and validate a table file.
    Check {
        /// Table file to validate.
        #[arg(required = true)]
        path: PathBuf,
    },
}
