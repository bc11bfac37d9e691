//! A/B Test Significance Engine
//!
//! This library provides tools to:
//! - Model A/B experiments (control plus up to four treatment variants)
//! - Compute conversion rates and two-proportion Z-tests
//! - Convert Z statistics to confidence levels via a normal CDF approximation
//! - Select a statistically significant winner at a fixed 95% threshold
//! - Render reports as tables, JSON or CSV

pub mod analytics;
pub mod commands;
pub mod config;
pub mod error;
pub mod experiment;

// Re-export common types
pub use analytics::{evaluate, TestOutcome, Winner, SIGNIFICANCE_THRESHOLD};
pub use config::{load_experiment_file, Config};
pub use error::{Error, Result};
pub use experiment::{Experiment, Variant, MAX_VARIANTS, MIN_VARIANTS};
