//! Report rendering for engine results.
//!
//! Prints the per-variant table to stdout and exports outcomes as JSON
//! or CSV for further processing.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::analytics::significance::{TestOutcome, SIGNIFICANCE_THRESHOLD};
use crate::Result;

/// A test outcome with an export timestamp.
#[derive(Debug, Clone, Serialize)]
pub struct ReportEnvelope<'a> {
    pub generated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub outcome: &'a TestOutcome,
}

fn fmt_opt(value: Option<f64>) -> String {
    value.map(|v| format!("{:.2}", v)).unwrap_or_else(|| "-".to_string())
}

/// Truncate a variant name to at most `max` characters for table display.
/// Names are free text, so cutting must land on a char boundary.
fn truncate_name(name: &str, max: usize) -> &str {
    match name.char_indices().nth(max) {
        Some((idx, _)) => &name[..idx],
        None => name,
    }
}

/// Print a significance report to stdout.
pub fn print_report(outcome: &TestOutcome) {
    let header = format!("A/B test report for {}", outcome.experiment);
    println!("{}", header);
    println!("{}", "-".repeat(header.chars().count()));

    println!(
        "{:22} {:>9} {:>11} {:>8} {:>8} {:>7} {:>8}",
        "Variant", "Visitors", "Conversions", "Rate %", "Lift %", "Z", "Conf %"
    );

    for v in &outcome.variants {
        println!(
            "{:22} {:>9} {:>11} {:>8.2} {:>8} {:>7} {:>8}",
            truncate_name(&v.name, 22),
            v.visitors,
            v.conversions,
            v.rate,
            fmt_opt(v.improvement),
            fmt_opt(v.z_score),
            fmt_opt(v.confidence),
        );
        if !v.evaluable {
            println!("  (not evaluable: needs visitors on both sides)");
        }
    }

    println!();
    match &outcome.winner {
        Some(w) => println!(
            "Winner: {} ({:+.2}% lift at {:.2}% confidence)",
            w.name, w.improvement, w.confidence
        ),
        None => println!(
            "No variant reached the {:.0}% significance threshold.",
            SIGNIFICANCE_THRESHOLD
        ),
    }
}

/// Print only conversion rates, no significance verdict.
pub fn print_rates(outcome: &TestOutcome) {
    println!("{:22} {:>9} {:>11} {:>8}", "Variant", "Visitors", "Conversions", "Rate %");
    for v in &outcome.variants {
        println!(
            "{:22} {:>9} {:>11} {:>8.2}",
            truncate_name(&v.name, 22),
            v.visitors,
            v.conversions,
            v.rate,
        );
    }
}

/// Serialize an outcome to pretty JSON with a generation timestamp.
pub fn to_json(outcome: &TestOutcome) -> Result<String> {
    let envelope = ReportEnvelope {
        generated_at: Utc::now(),
        outcome,
    };
    Ok(serde_json::to_string_pretty(&envelope)?)
}

/// Serialize the per-variant breakdown to CSV.
pub fn to_csv(outcome: &TestOutcome) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "variant",
        "visitors",
        "conversions",
        "rate_percent",
        "improvement_percent",
        "z_score",
        "confidence_percent",
        "evaluable",
    ])?;

    for v in &outcome.variants {
        writer.write_record([
            v.name.clone(),
            v.visitors.to_string(),
            v.conversions.to_string(),
            format!("{:.4}", v.rate),
            fmt_opt(v.improvement),
            fmt_opt(v.z_score),
            fmt_opt(v.confidence),
            v.evaluable.to_string(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| crate::Error::SerializationError(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| crate::Error::SerializationError(e.to_string()))
}
