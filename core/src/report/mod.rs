//! Loading runner reports.
//!
//! Every runner writes `{category: [entry, ...]}`. Loading flattens that into
//! a [`FlatReport`] keyed by benchmark name; a source that is missing,
//! unreadable or has no named entries simply does not appear in the
//! [`ReportSet`].

pub mod discover;

use std::collections::BTreeMap;
use std::fmt;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tracing::{debug, warn};

use crate::config::Config;
use crate::entry::{BenchmarkEntry, Field, de, pick_time_value};
use crate::util::fast_map::{FastHashMap, FastHashSet, fast_hash_map_with_capacity, fast_hash_set_new};

pub use discover::find_output_dir;

/// The four fixed logical sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Source {
    /// Serial reference implementation; every speedup is relative to it.
    R,
    RustCpuParallel,
    RustCpuSerial,
    RustGpu,
}

impl Source {
    pub const ALL: [Source; 4] = [Source::R, Source::RustCpuParallel, Source::RustCpuSerial, Source::RustGpu];
    pub const BASELINE: Source = Source::R;

    pub fn label(self) -> &'static str {
        match self {
            Source::R => "R",
            Source::RustCpuParallel => "Rust CPU parallel",
            Source::RustCpuSerial => "Rust CPU serial",
            Source::RustGpu => "Rust GPU",
        }
    }

    pub fn default_file_name(self) -> &'static str {
        match self {
            Source::R => "r_benchmark.json",
            Source::RustCpuParallel => "rust_benchmark_cpu.json",
            Source::RustCpuSerial => "rust_benchmark_cpu_serial.json",
            Source::RustGpu => "rust_benchmark_gpu.json",
        }
    }

    pub fn is_baseline(self) -> bool {
        self == Self::BASELINE
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A runner document: category label to entries, in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceReport {
    categories: Vec<(Arc<str>, Vec<BenchmarkEntry>)>,
}

impl SourceReport {
    /// Build from a decoded document. Returns `None` unless the top level is
    /// an object; categories that are not arrays and array items that are not
    /// objects are dropped.
    pub fn from_field(doc: Field) -> Option<Self> {
        let Field::Map(bag) = doc else {
            return None;
        };

        let mut categories = Vec::with_capacity(bag.len());
        for (label, value) in bag.iter() {
            let Field::List(items) = value else {
                debug!(category = label, kind = value.type_name(), "skipping non-array category");
                continue;
            };
            let entries = items
                .iter()
                .filter_map(|item| match item {
                    Field::Map(fields) => Some(BenchmarkEntry::from_bag(fields.clone())),
                    other => {
                        debug!(category = label, kind = other.type_name(), "skipping non-object entry");
                        None
                    }
                })
                .collect();
            categories.push((Arc::<str>::from(label), entries));
        }
        Some(Self { categories })
    }

    pub fn from_json_str(input: &str) -> anyhow::Result<Self> {
        let doc = de::from_json_str(input)?;
        let kind = doc.type_name();
        Self::from_field(doc).ok_or_else(|| anyhow::anyhow!("expected an object of categories, got {}", kind))
    }

    pub fn categories(&self) -> impl Iterator<Item = (&str, &[BenchmarkEntry])> {
        self.categories.iter().map(|(label, entries)| (label.as_ref(), entries.as_slice()))
    }

    pub fn entry_count(&self) -> usize {
        self.categories.iter().map(|(_, entries)| entries.len()).sum()
    }

    /// Flatten across categories. Unnamed entries are dropped and a repeated
    /// name keeps the last entry seen.
    pub fn flatten(self) -> FlatReport {
        let mut entries = fast_hash_map_with_capacity(self.entry_count());
        for (label, list) in self.categories {
            for entry in list {
                let Some(name) = entry.name().map(Arc::<str>::from) else {
                    debug!(category = %label, "skipping entry without a name");
                    continue;
                };
                entries.insert(name, entry);
            }
        }
        FlatReport { entries }
    }
}

/// Benchmark name to entry for one source. Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct FlatReport {
    entries: FastHashMap<Arc<str>, BenchmarkEntry>,
}

impl FlatReport {
    pub fn get(&self, name: &str) -> Option<&BenchmarkEntry> {
        self.entries.get(name)
    }

    /// Representative timing for `name`, if the entry exists and has one.
    pub fn timing(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(|entry| pick_time_value(entry).0)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<SourceReport> for FlatReport {
    fn from(report: SourceReport) -> Self {
        report.flatten()
    }
}

/// Every source that produced usable data.
#[derive(Debug, Clone, Default)]
pub struct ReportSet {
    reports: BTreeMap<Source, FlatReport>,
}

impl ReportSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty reports are not kept: a source without named entries counts as
    /// absent.
    pub fn insert(&mut self, source: Source, report: FlatReport) {
        if report.is_empty() {
            debug!(source = %source, "source has no named entries; treating as absent");
            return;
        }
        self.reports.insert(source, report);
    }

    /// Build from already decoded documents; `None` marks an absent source.
    pub fn from_documents<I>(documents: I) -> Self
    where
        I: IntoIterator<Item = (Source, Option<Field>)>,
    {
        let mut set = Self::new();
        for (source, doc) in documents {
            let Some(doc) = doc else {
                continue;
            };
            match SourceReport::from_field(doc) {
                Some(report) => set.insert(source, report.flatten()),
                None => warn!(source = %source, "document is not an object of categories; ignoring"),
            }
        }
        set
    }

    /// Load every source from `dir` using the file names in `config`.
    pub fn load_dir(dir: &Path, config: &Config) -> Self {
        let documents = Source::ALL.map(|source| {
            let path = dir.join(config.files.get(source));
            let doc = match read_document(&path) {
                Ok(doc) => doc,
                Err(err) => {
                    warn!(source = %source, "{:#}", err);
                    None
                }
            };
            (source, doc)
        });
        let set = Self::from_documents(documents);
        for (source, report) in &set.reports {
            debug!(source = %source, entries = report.len(), "loaded source");
        }
        set
    }

    pub fn get(&self, source: Source) -> Option<&FlatReport> {
        self.reports.get(&source)
    }

    pub fn baseline(&self) -> Option<&FlatReport> {
        self.get(Source::BASELINE)
    }

    /// Timing of `name` in `source`, absent when either is missing.
    pub fn timing(&self, source: Source, name: &str) -> Option<f64> {
        self.get(source).and_then(|report| report.timing(name))
    }

    pub fn sources(&self) -> impl Iterator<Item = Source> + '_ {
        self.reports.keys().copied()
    }

    /// Union of benchmark names over every loaded source.
    pub fn all_names(&self) -> FastHashSet<&str> {
        let mut names = fast_hash_set_new();
        for report in self.reports.values() {
            names.extend(report.names());
        }
        names
    }
}

/// Read and decode one document. A missing or blank file is `Ok(None)`;
/// unreadable or malformed files are errors for the caller to absorb.
fn read_document(path: &Path) -> anyhow::Result<Option<Field>> {
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "report not found");
            return Ok(None);
        }
        Err(err) => return Err(err).with_context(|| format!("read {}", path.display())),
    };
    if data.trim().is_empty() {
        return Ok(None);
    }
    de::from_json_str(&data)
        .map(Some)
        .with_context(|| format!("parse {}", path.display()))
}
