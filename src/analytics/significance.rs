//! Two-proportion Z-test and winner selection.
//!
//! Compares every treatment variant against the control:
//! - standard error: sqrt(p_c*(1-p_c)/n_c + p_v*(1-p_v)/n_v)
//! - Z statistic: |p_v - p_c| / se
//! - confidence: two-tailed normal CDF of Z, in percent
//!
//! A treatment wins when its confidence exceeds the fixed 95% threshold
//! and its relative improvement beats every earlier candidate. At most
//! one winner is declared. Variants with zero visitors are not evaluable
//! and can never win; degenerate comparisons report `None` instead of
//! NaN or infinity.

use serde::Serialize;
use tracing::debug;

use crate::analytics::normal::confidence_level;
use crate::experiment::{Experiment, Variant};

/// Confidence threshold in percent above which a treatment may win.
pub const SIGNIFICANCE_THRESHOLD: f64 = 95.0;

/// Per-variant breakdown of one engine run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariantAnalysis {
    pub name: String,
    pub visitors: u64,
    pub conversions: u64,
    /// Conversion rate in percent.
    pub rate: f64,
    /// Relative lift over the control in percent. `None` for the control
    /// row and for comparisons that cannot be evaluated.
    pub improvement: Option<f64>,
    /// `None` when the comparison is degenerate (zero visitors on either
    /// side, or zero standard error).
    pub z_score: Option<f64>,
    /// Two-tailed confidence in percent, `None` when `z_score` is.
    pub confidence: Option<f64>,
    pub evaluable: bool,
}

/// The winning variant, if any reached significance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Winner {
    pub name: String,
    pub confidence: f64,
    pub improvement: f64,
}

/// Result of one engine run. Derived from the experiment, never cached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestOutcome {
    pub experiment: String,
    pub winner: Option<Winner>,
    pub variants: Vec<VariantAnalysis>,
}

impl TestOutcome {
    pub fn has_winner(&self) -> bool {
        self.winner.is_some()
    }
}

/// Standard error of the difference between two proportions.
pub fn standard_error(p_control: f64, n_control: u64, p_variant: f64, n_variant: u64) -> f64 {
    (p_control * (1.0 - p_control) / n_control as f64
        + p_variant * (1.0 - p_variant) / n_variant as f64)
        .sqrt()
}

/// Compare one treatment variant against the control.
///
/// Returns `(improvement, z, confidence)`; each is `None` when the
/// corresponding quantity is undefined for this pair.
fn compare(control: &Variant, variant: &Variant) -> (Option<f64>, Option<f64>, Option<f64>) {
    if !control.is_evaluable() || !variant.is_evaluable() {
        return (None, None, None);
    }

    let p_c = control.conversion_rate();
    let p_v = variant.conversion_rate();

    // Relative lift over a zero baseline is undefined.
    let improvement = if p_c > 0.0 {
        Some((p_v - p_c) / p_c * 100.0)
    } else {
        None
    };

    let se = standard_error(p_c, control.visitors, p_v, variant.visitors);
    if se == 0.0 {
        return (improvement, None, None);
    }

    let z = (p_v - p_c).abs() / se;
    (improvement, Some(z), Some(confidence_level(z)))
}

/// Run the significance engine over an experiment.
///
/// Pure and deterministic: the experiment is read-only and repeated runs
/// on identical input give identical output.
pub fn evaluate(experiment: &Experiment) -> TestOutcome {
    let control = experiment.control();

    let mut variants = Vec::with_capacity(experiment.len());
    variants.push(VariantAnalysis {
        name: control.name.clone(),
        visitors: control.visitors,
        conversions: control.conversions,
        rate: control.conversion_rate_percent(),
        improvement: None,
        z_score: None,
        confidence: None,
        evaluable: control.is_evaluable(),
    });

    let mut winner: Option<Winner> = None;
    let mut max_improvement = 0.0;

    for variant in experiment.treatments() {
        let (improvement, z, confidence) = compare(control, variant);
        let evaluable = z.is_some();

        if let (Some(imp), Some(conf)) = (improvement, confidence) {
            // Strictly greater improvement required, so the first variant
            // seen keeps the win on ties.
            if conf > SIGNIFICANCE_THRESHOLD && imp > max_improvement {
                debug!(
                    variant = %variant.name,
                    confidence = conf,
                    improvement = imp,
                    "significant variant"
                );
                max_improvement = imp;
                winner = Some(Winner {
                    name: variant.name.clone(),
                    confidence: conf,
                    improvement: imp,
                });
            }
        }

        variants.push(VariantAnalysis {
            name: variant.name.clone(),
            visitors: variant.visitors,
            conversions: variant.conversions,
            rate: variant.conversion_rate_percent(),
            improvement,
            z_score: z,
            confidence,
            evaluable,
        });
    }

    TestOutcome {
        experiment: experiment.name.clone(),
        winner,
        variants,
    }
}
