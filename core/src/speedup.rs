//! Speedups against the baseline.
//!
//! `speedup = baseline / candidate`, so values above 1 mean the candidate is
//! faster. Each [`Candidate`] yields a display string and an optional rank
//! value; only rank values take part in ordering.

use crate::report::{ReportSet, Source};

/// Cell text when there is nothing to show.
pub const MISSING: &str = "-";
/// One side of a composite range that could not be computed.
pub const UNRESOLVED: &str = "?";

/// A comparison column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Candidate {
    /// Serial and parallel runs of the same implementation shown as a range.
    /// Only the parallel side is ranked.
    Composite {
        label: &'static str,
        width: usize,
        serial: Source,
        parallel: Source,
    },
    Simple {
        label: &'static str,
        width: usize,
        source: Source,
    },
}

pub const RUST_CPU: Candidate = Candidate::Composite {
    label: "Rust (CPU)*",
    width: 13,
    serial: Source::RustCpuSerial,
    parallel: Source::RustCpuParallel,
};

pub const RUST_GPU: Candidate = Candidate::Simple {
    label: "Rust (GPU)",
    width: 9,
    source: Source::RustGpu,
};

/// Columns in table order.
pub const CANDIDATES: [Candidate; 2] = [RUST_CPU, RUST_GPU];

/// Display text plus the value used for ranking, if the cell is rankable.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateCell {
    pub display: String,
    pub rank: Option<f64>,
}

impl CandidateCell {
    pub fn missing() -> Self {
        Self {
            display: MISSING.to_string(),
            rank: None,
        }
    }
}

/// `baseline / time` for a usable (strictly positive) time.
pub fn speedup(baseline: f64, time: Option<f64>) -> Option<f64> {
    let time = time.filter(|t| *t > 0.0)?;
    Some(baseline / time)
}

/// Range endpoint: one decimal below 10x, none from 10x up.
pub fn format_endpoint(speedup: f64) -> String {
    if speedup < 10.0 {
        format!("{:.1}", speedup)
    } else {
        format!("{:.0}", speedup)
    }
}

impl Candidate {
    pub fn label(&self) -> &'static str {
        match self {
            Candidate::Composite { label, .. } | Candidate::Simple { label, .. } => *label,
        }
    }

    pub fn width(&self) -> usize {
        match self {
            Candidate::Composite { width, .. } | Candidate::Simple { width, .. } => *width,
        }
    }

    /// Evaluate this column for `name`. `baseline` must be positive.
    pub fn evaluate(&self, name: &str, baseline: f64, reports: &ReportSet) -> CandidateCell {
        match *self {
            Candidate::Composite { serial, parallel, .. } => {
                let serial = speedup(baseline, reports.timing(serial, name));
                let parallel = speedup(baseline, reports.timing(parallel, name));
                composite_cell(serial, parallel)
            }
            Candidate::Simple { source, .. } => match speedup(baseline, reports.timing(source, name)) {
                Some(s) => CandidateCell {
                    display: format!("{:.1}x", s),
                    rank: Some(s),
                },
                None => CandidateCell::missing(),
            },
        }
    }
}

/// Combine the two sides of a composite column.
pub fn composite_cell(serial: Option<f64>, parallel: Option<f64>) -> CandidateCell {
    if serial.is_none() && parallel.is_none() {
        return CandidateCell::missing();
    }
    let endpoint = |s: Option<f64>| s.map(format_endpoint).unwrap_or_else(|| UNRESOLVED.to_string());
    CandidateCell {
        display: format!("{}-{}x", endpoint(serial), endpoint(parallel)),
        rank: parallel,
    }
}

/// Evaluate every candidate for one row. Without a positive baseline every
/// cell is missing and nothing is rankable.
pub fn evaluate_row(name: &str, baseline: Option<f64>, reports: &ReportSet, candidates: &[Candidate]) -> Vec<CandidateCell> {
    match baseline.filter(|b| *b > 0.0) {
        Some(base) => candidates.iter().map(|c| c.evaluate(name, base, reports)).collect(),
        None => candidates.iter().map(|_| CandidateCell::missing()).collect(),
    }
}
