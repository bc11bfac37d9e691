//! Command implementations
//!
//! Each module corresponds to a subcommand in the CLI.

pub mod init;
pub mod report;

pub use init::run as init_run;
pub use report::{run as report_run, run_rates as rates_run, OutputFormat};
