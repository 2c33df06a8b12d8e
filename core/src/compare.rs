//! Builds the comparison table from loaded reports.

use std::fmt;

use tracing::debug;

use crate::classify::classify;
use crate::config::Config;
use crate::render::{ComparisonTable, TableRow, rank_row};
use crate::report::{ReportSet, Source};
use crate::speedup::{CANDIDATES, Candidate, MISSING, evaluate_row};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// The baseline source is absent or has no named entries.
    MissingBaseline,
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::MissingBaseline => write!(f, "{} baseline data not found or empty.", Source::BASELINE),
        }
    }
}

impl std::error::Error for ReportError {}

pub fn format_baseline(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}ms", v),
        None => MISSING.to_string(),
    }
}

/// Build the table with the standard candidate columns.
pub fn build_table(reports: &ReportSet, config: &Config) -> Result<ComparisonTable, ReportError> {
    build_table_with(reports, config, &CANDIDATES)
}

pub fn build_table_with(
    reports: &ReportSet,
    config: &Config,
    candidates: &[Candidate],
) -> Result<ComparisonTable, ReportError> {
    let baseline = reports.baseline().ok_or(ReportError::MissingBaseline)?;

    let names = reports.all_names();
    let classified = classify(names, &config.large_scale);
    debug!(
        regular = classified.regular.len(),
        large_scale = classified.large_scale.len(),
        "classified benchmark names"
    );

    let mut table = ComparisonTable::new(candidates);
    for ordered in classified.ordered() {
        let base = baseline.timing(ordered.name).filter(|v| *v > 0.0);
        let cells = evaluate_row(ordered.name, base, reports, candidates);
        table.push_row(TableRow {
            name: ordered.display_name(),
            baseline: format_baseline(base),
            cells: rank_row(cells),
        });
    }
    Ok(table)
}
