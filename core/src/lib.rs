//! Cross-runner benchmark comparison.
//!
//! Runner reports are loaded into [`report::ReportSet`], names are ordered by
//! [`classify`], every row gets speedups against the `R` baseline from
//! [`speedup`], and [`render`] ranks the cells and lays out the table.

pub mod classify;
#[cfg(test)]
mod classify_test;
pub mod compare;
#[cfg(test)]
mod compare_test;
pub mod config;
pub mod entry;
pub mod render;
pub mod report;
pub mod speedup;
pub mod util;

pub use compare::{ReportError, build_table};
pub use config::Config;
pub use render::ComparisonTable;
pub use report::{FlatReport, ReportSet, Source, SourceReport};
