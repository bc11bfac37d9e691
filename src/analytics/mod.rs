//! Significance analytics module
//!
//! Provides:
//! - Normal distribution helpers (erf, CDF, confidence level)
//! - Two-proportion Z-test and winner selection
//! - Report rendering and JSON/CSV export

pub mod normal;
pub mod report;
pub mod significance;

pub use normal::{confidence_level, erf, normal_cdf};
pub use report::{print_rates, print_report, to_csv, to_json};
pub use significance::{evaluate, TestOutcome, VariantAnalysis, Winner, SIGNIFICANCE_THRESHOLD};
