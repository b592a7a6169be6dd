// salesboard CLI - seller performance reports from a JSON dataset

mod analyze;
mod exit_codes;
mod table;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use exit_codes::{EXIT_SUCCESS, EXIT_USAGE};

#[derive(Parser)]
#[command(name = "salesboard")]
#[command(about = "Rank sellers by profit and compute their bonuses")]
#[command(long_version = long_version())]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the seller report from a dataset
    #[command(after_help = "\
Examples:
  salesboard analyze data.json
  salesboard analyze data.json --config q3.policy.toml
  salesboard analyze data.json --json
  salesboard analyze data.json --output report.json --top 5")]
    Analyze {
        /// JSON file with customers, sellers, products and purchase_records
        data: PathBuf,

        /// TOML policy file (discount handling, bonus percentages, top-N)
        #[arg(long, short = 'c', env = "SALESBOARD_POLICY")]
        config: Option<PathBuf>,

        /// Output JSON to stdout instead of a table
        #[arg(long)]
        json: bool,

        /// Write JSON output to file
        #[arg(long)]
        output: Option<PathBuf>,

        /// Number of top products listed per seller (overrides the policy)
        #[arg(long)]
        top: Option<usize>,
    },

    /// Check a dataset and policy file without building the report
    #[command(after_help = "\
Examples:
  salesboard validate data.json
  salesboard validate data.json --config q3.policy.toml")]
    Validate {
        /// JSON dataset to check
        data: PathBuf,

        /// TOML policy file to check
        #[arg(long, short = 'c', env = "SALESBOARD_POLICY")]
        config: Option<PathBuf>,
    },
}

fn long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        " (", env!("GIT_COMMIT_HASH"), ")",
        "\nengine:  salesboard-analytics ", env!("CARGO_PKG_VERSION"),
        "\ntarget:  ", env!("TARGET"),
    )
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze { data, config, json, output, top } => {
            analyze::cmd_analyze(data, config, json, output, top)
        }
        Commands::Validate { data, config } => analyze::cmd_validate(data, config),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn args(msg: impl Into<String>) -> Self {
        Self { code: EXIT_USAGE, message: msg.into(), hint: None }
    }
}
