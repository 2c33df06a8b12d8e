//! Per-row ranking and the fixed-width text table.

use std::cmp::Ordering;
use std::fmt;

use crate::speedup::{Candidate, CandidateCell};

pub const NAME_WIDTH: usize = 21;
pub const BASELINE_WIDTH: usize = 11;
pub const RULE_WIDTH: usize = 65;
pub const BASELINE_LABEL: &str = "R";

pub const WINNER_MARK: char = '\u{00b9}';
pub const RUNNER_UP_MARK: char = '\u{00b2}';

pub const FOOTNOTES: [&str; 3] = [
    "* Rust (CPU) column shows speedup range: Serial-Parallel vs R (e.g., 12-48x).",
    "\u{00b9} Winner (Fastest implementation)",
    "\u{00b2} Runner-up (Second fastest implementation)",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Winner,
    RunnerUp,
}

impl Placement {
    pub fn mark(self) -> char {
        match self {
            Placement::Winner => WINNER_MARK,
            Placement::RunnerUp => RUNNER_UP_MARK,
        }
    }
}

/// A cell after ranking, ready to print.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCell {
    pub text: String,
    pub placement: Option<Placement>,
}

/// Place each cell of one row.
///
/// Positive rank values are sorted descending; a cell equal to the first is
/// the winner, otherwise a cell equal to the second is the runner-up.
/// Comparison is exact, so equal maxima are all winners and leave no
/// runner-up.
pub fn placements(cells: &[CandidateCell]) -> Vec<Option<Placement>> {
    let mut ranks: Vec<f64> = cells.iter().filter_map(|c| c.rank).filter(|r| *r > 0.0).collect();
    ranks.sort_by(|a, b| b.partial_cmp(a).unwrap_or(Ordering::Equal));

    cells
        .iter()
        .map(|cell| {
            let rank = cell.rank.filter(|r| *r > 0.0)?;
            if ranks.first() == Some(&rank) {
                Some(Placement::Winner)
            } else if ranks.get(1) == Some(&rank) {
                Some(Placement::RunnerUp)
            } else {
                None
            }
        })
        .collect()
}

pub fn annotate(display: &str, placement: Option<Placement>) -> String {
    match placement {
        Some(p) => format!("[{}]{}", display, p.mark()),
        None => display.to_string(),
    }
}

pub fn rank_row(cells: Vec<CandidateCell>) -> Vec<RankedCell> {
    let placed = placements(&cells);
    cells
        .into_iter()
        .zip(placed)
        .map(|(cell, placement)| RankedCell {
            text: annotate(&cell.display, placement),
            placement,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub name: String,
    pub baseline: String,
    pub cells: Vec<RankedCell>,
}

/// The finished comparison, rendered through [`fmt::Display`].
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonTable {
    candidates: Vec<Candidate>,
    rows: Vec<TableRow>,
}

impl ComparisonTable {
    pub fn new(candidates: &[Candidate]) -> Self {
        Self {
            candidates: candidates.to_vec(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    fn write_line<'a>(
        &self,
        f: &mut fmt::Formatter<'_>,
        name: &str,
        baseline: &str,
        cells: impl Iterator<Item = &'a str>,
    ) -> fmt::Result {
        write!(f, "{:<nw$} | {:^bw$} |", name, baseline, nw = NAME_WIDTH, bw = BASELINE_WIDTH)?;
        for (candidate, text) in self.candidates.iter().zip(cells) {
            write!(f, " {:^w$} |", text, w = candidate.width())?;
        }
        writeln!(f)
    }
}

impl fmt::Display for ComparisonTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(RULE_WIDTH);

        self.write_line(f, "Name", BASELINE_LABEL, self.candidates.iter().map(|c| c.label()))?;
        writeln!(f, "{}", rule)?;
        for row in &self.rows {
            self.write_line(f, &row.name, &row.baseline, row.cells.iter().map(|c| c.text.as_str()))?;
        }
        writeln!(f, "{}", rule)?;
        for note in FOOTNOTES {
            writeln!(f, "{}", note)?;
        }
        Ok(())
    }
}
