//! Timing extraction.
//!
//! A representative timing is the result of the first [`ExtractionRule`] in
//! [`TIMING_RULES`] that yields a value. A rule that finds its key with an
//! unusable value yields nothing and evaluation moves on; absence of a timing
//! is never an error.

use super::{BenchmarkEntry, Field, FieldBag, MAX_TIME_KEY, MEAN_TIME_KEY, MEDIAN_TIME_KEY};

/// Numeric fields the fallback scan must not mistake for a timing.
pub const EXCLUDED_FALLBACK_KEYS: [&str; 3] = ["iterations", "size", "runs"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionRule {
    MeanTime,
    MedianTime,
    MaxTime,
    /// First plain number in the opaque field bag, in document order.
    FirstNumeric,
}

/// Evaluation order: mean > median > max > any other number.
pub const TIMING_RULES: [ExtractionRule; 4] = [
    ExtractionRule::MeanTime,
    ExtractionRule::MedianTime,
    ExtractionRule::MaxTime,
    ExtractionRule::FirstNumeric,
];

impl ExtractionRule {
    pub fn label(self) -> &'static str {
        match self {
            ExtractionRule::MeanTime => "mean",
            ExtractionRule::MedianTime => "median",
            ExtractionRule::MaxTime => "max",
            ExtractionRule::FirstNumeric => "first-numeric",
        }
    }

    /// The entry key a keyed rule reads; `None` for the fallback scan.
    pub fn key(self) -> Option<&'static str> {
        match self {
            ExtractionRule::MeanTime => Some(MEAN_TIME_KEY),
            ExtractionRule::MedianTime => Some(MEDIAN_TIME_KEY),
            ExtractionRule::MaxTime => Some(MAX_TIME_KEY),
            ExtractionRule::FirstNumeric => None,
        }
    }

    pub fn apply(self, entry: &BenchmarkEntry) -> Option<f64> {
        match self {
            ExtractionRule::MeanTime => entry.timings()?.mean.as_ref()?.coerce_f64(),
            ExtractionRule::MedianTime => entry.timings()?.median.as_ref()?.coerce_f64(),
            ExtractionRule::MaxTime => entry.timings()?.max.as_ref()?.coerce_f64(),
            ExtractionRule::FirstNumeric => first_numeric(entry.bag()),
        }
    }
}

fn first_numeric(bag: &FieldBag) -> Option<f64> {
    bag.iter()
        .filter(|(key, _)| !EXCLUDED_FALLBACK_KEYS.contains(key))
        .find_map(|(_, value)| value.as_number())
}

/// Run `rules` in order and report which one produced the value.
pub fn extract_with(entry: &BenchmarkEntry, rules: &[ExtractionRule]) -> Option<(ExtractionRule, f64)> {
    rules.iter().find_map(|rule| rule.apply(entry).map(|value| (*rule, value)))
}

/// Representative timing and size tag of an entry.
pub fn pick_time_value(entry: &BenchmarkEntry) -> (Option<f64>, Option<&Field>) {
    let timing = extract_with(entry, &TIMING_RULES).map(|(_, value)| value);
    (timing, entry.size())
}
