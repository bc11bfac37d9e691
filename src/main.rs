//! A/B significance CLI - main entry point

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use ab_significance::commands;

#[derive(Parser)]
#[command(name = "ab_significance")]
#[command(about = "A/B test significance calculator", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file with named experiment definitions
    #[arg(long, env = "AB_EXPERIMENTS_FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the significance engine and print a report
    Report {
        /// Experiment name from the config file
        experiment: Option<String>,

        /// Standalone experiment file (.yml, .yaml or .json)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Output format: table | json | csv
        #[arg(long, default_value = "table")]
        format: String,

        /// Optional output file for json/csv formats
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print conversion rates without a significance verdict
    Rates {
        /// Experiment name from the config file
        experiment: Option<String>,

        /// Standalone experiment file (.yml, .yaml or .json)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Write a sample experiment file
    Init {
        /// Destination path
        #[arg(default_value = "experiment.yml")]
        path: PathBuf,
    },
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Report { .. } => "report",
            Commands::Rates { .. } => "rates",
            Commands::Init { .. } => "init",
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Load .env for local development
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("ab_significance=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    let command_name = cli.command.name();
    let start = Instant::now();

    let result = execute_command(cli.command, cli.config);

    debug!(
        command = command_name,
        elapsed_ms = start.elapsed().as_millis() as u64,
        ok = result.is_ok(),
        "command finished"
    );

    result
}

fn execute_command(command: Commands, config: Option<PathBuf>) -> anyhow::Result<()> {
    match command {
        Commands::Report {
            experiment,
            file,
            format,
            output,
        } => {
            commands::report::run(
                experiment.as_deref(),
                file.as_deref(),
                config.as_deref(),
                commands::OutputFormat::parse(&format),
                output,
            )?;
        }
        Commands::Rates { experiment, file } => {
            commands::report::run_rates(
                experiment.as_deref(),
                file.as_deref(),
                config.as_deref(),
            )?;
        }
        Commands::Init { path } => {
            commands::init::run(&path)?;
        }
    }

    Ok(())
}
