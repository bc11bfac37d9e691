//! Standalone significance report CLI.
//!
//! Usage:
//!   cargo run --bin ab_report -- --file experiment.yml

use anyhow::Result;
use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;

use ab_significance::analytics::{evaluate, print_report, to_json};
use ab_significance::load_experiment_file;

#[derive(Parser, Debug)]
#[command(name = "ab_report")]
#[command(about = "Significance report for one experiment file")]
struct Args {
    /// Experiment file (.yml, .yaml or .json)
    #[arg(long, env = "AB_EXPERIMENT_FILE", default_value = "experiment.yml")]
    file: PathBuf,

    /// Print JSON instead of the table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let experiment = load_experiment_file(&args.file)?;
    let outcome = evaluate(&experiment);

    if args.json {
        println!("{}", to_json(&outcome)?);
    } else {
        print_report(&outcome);
    }

    Ok(())
}
