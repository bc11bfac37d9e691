//! Significance report command.
//!
//! Resolves an experiment from a standalone file or from the named
//! definitions in the config, runs the engine and renders the result.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::analytics::{evaluate, print_rates, print_report, to_csv, to_json};
use crate::config::{load_experiment_file, Config};
use crate::{Error, Result};

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            _ => OutputFormat::Table,
        }
    }
}

/// Resolve an experiment from `--file` or a configured name.
pub fn resolve_experiment(
    name: Option<&str>,
    file: Option<&Path>,
    config_path: Option<&Path>,
) -> Result<crate::experiment::Experiment> {
    if let Some(path) = file {
        return load_experiment_file(path);
    }

    let name = name.ok_or_else(|| {
        Error::InvalidArgument("give an experiment name or --file".to_string())
    })?;

    let config = match config_path {
        Some(path) => Config::load(path)?,
        None => Config::new(),
    };

    if config.is_empty() {
        warn!("No experiment definitions found; create an experiments.yml or use --file");
    }

    config.get_experiment(name)
}

/// Run the engine and render a report.
pub fn run(
    name: Option<&str>,
    file: Option<&Path>,
    config_path: Option<&Path>,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> Result<()> {
    let experiment = resolve_experiment(name, file, config_path)?;

    if !experiment.is_ready() {
        warn!(
            experiment = %experiment.name,
            "Some variants have zero visitors and will be excluded from winner selection"
        );
    }

    let outcome = evaluate(&experiment);
    info!(
        experiment = %outcome.experiment,
        winner = outcome.winner.as_ref().map(|w| w.name.as_str()),
        "Evaluated experiment"
    );

    let rendered = match format {
        OutputFormat::Table => {
            print_report(&outcome);
            None
        }
        OutputFormat::Json => Some(to_json(&outcome)?),
        OutputFormat::Csv => Some(to_csv(&outcome)?),
    };

    match (rendered, output) {
        (Some(text), Some(path)) => {
            fs::write(&path, text)?;
            println!("Report written to {}", path.display());
        }
        (Some(text), None) => println!("{}", text),
        (None, Some(_)) => {
            return Err(Error::InvalidArgument(
                "--output requires --format json or csv".to_string(),
            ))
        }
        (None, None) => {}
    }

    Ok(())
}

/// Print conversion rates only.
pub fn run_rates(
    name: Option<&str>,
    file: Option<&Path>,
    config_path: Option<&Path>,
) -> Result<()> {
    let experiment = resolve_experiment(name, file, config_path)?;
    print_rates(&evaluate(&experiment));
    Ok(())
}
