//! Benchmark entry model.
//!
//! Runners do not agree on a schema for a single measurement, so an entry is
//! decoded into an ordered [`FieldBag`] first and then classified: entries
//! carrying one of the well-known timing keys become
//! [`BenchmarkEntry::Recognized`], everything else stays
//! [`BenchmarkEntry::Opaque`]. Timing extraction lives in [`normalize`].

pub mod de;
#[cfg(test)]
mod de_test;
pub mod normalize;

use std::sync::Arc;

pub use normalize::{EXCLUDED_FALLBACK_KEYS, ExtractionRule, TIMING_RULES, pick_time_value};

pub const NAME_KEY: &str = "name";
pub const SIZE_KEY: &str = "size";
pub const MEAN_TIME_KEY: &str = "mean_time_ms";
pub const MEDIAN_TIME_KEY: &str = "median_time_ms";
pub const MAX_TIME_KEY: &str = "max_time_ms";

/// A decoded JSON value. Objects keep their document order.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Nil,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(Arc<str>),
    List(Arc<[Field]>),
    Map(FieldBag),
}

impl Field {
    /// Numeric view without any coercion. Booleans are not numbers here.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Field::Int(i) => Some(*i as f64),
            Field::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Float coercion used for the named timing keys: numbers pass through,
    /// strings are parsed after trimming.
    pub fn coerce_f64(&self) -> Option<f64> {
        match self {
            Field::Str(s) => s.trim().parse::<f64>().ok(),
            other => other.as_number(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Field::Str(s) => Some(&**s),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Field::Nil => "nil",
            Field::Bool(_) => "bool",
            Field::Int(_) => "int",
            Field::Float(_) => "float",
            Field::Str(_) => "string",
            Field::List(_) => "list",
            Field::Map(_) => "map",
        }
    }
}

/// Ordered key/value pairs of a JSON object.
///
/// Inserting an existing key replaces the value in place, so the key keeps
/// its first position and the last value wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldBag {
    fields: Vec<(Arc<str>, Field)>,
}

impl FieldBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    pub fn insert(&mut self, key: impl Into<Arc<str>>, value: Field) {
        let key = key.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Field> {
        self.fields.iter().find(|(k, _)| k.as_ref() == key).map(|(_, v)| v)
    }

    pub fn remove(&mut self, key: &str) -> Option<Field> {
        let idx = self.fields.iter().position(|(k, _)| k.as_ref() == key)?;
        Some(self.fields.remove(idx).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Field)> {
        self.fields.iter().map(|(k, v)| (k.as_ref(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Raw values of the well-known timing keys, left uncoerced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimingFields {
    pub mean: Option<Field>,
    pub median: Option<Field>,
    pub max: Option<Field>,
}

impl TimingFields {
    fn is_empty(&self) -> bool {
        self.mean.is_none() && self.median.is_none() && self.max.is_none()
    }
}

/// One measured benchmark invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum BenchmarkEntry {
    /// At least one well-known timing key is present. `rest` holds every
    /// other field in document order.
    Recognized {
        name: Option<Arc<str>>,
        size: Option<Field>,
        timings: TimingFields,
        rest: FieldBag,
    },
    /// No well-known timing key; only the field bag is available.
    Opaque {
        name: Option<Arc<str>>,
        size: Option<Field>,
        bag: FieldBag,
    },
}

impl BenchmarkEntry {
    /// Classify a decoded object. `name` and `size` stay visible in the bag
    /// as well, the fallback scan skips them on its own.
    pub fn from_bag(mut bag: FieldBag) -> Self {
        let name = bag
            .get(NAME_KEY)
            .and_then(Field::as_str)
            .filter(|s| !s.is_empty())
            .map(Arc::<str>::from);
        let size = bag.get(SIZE_KEY).cloned();

        let timings = TimingFields {
            mean: bag.remove(MEAN_TIME_KEY),
            median: bag.remove(MEDIAN_TIME_KEY),
            max: bag.remove(MAX_TIME_KEY),
        };

        if timings.is_empty() {
            BenchmarkEntry::Opaque { name, size, bag }
        } else {
            BenchmarkEntry::Recognized {
                name,
                size,
                timings,
                rest: bag,
            }
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            BenchmarkEntry::Recognized { name, .. } | BenchmarkEntry::Opaque { name, .. } => name.as_deref(),
        }
    }

    pub fn size(&self) -> Option<&Field> {
        match self {
            BenchmarkEntry::Recognized { size, .. } | BenchmarkEntry::Opaque { size, .. } => size.as_ref(),
        }
    }

    pub fn timings(&self) -> Option<&TimingFields> {
        match self {
            BenchmarkEntry::Recognized { timings, .. } => Some(timings),
            BenchmarkEntry::Opaque { .. } => None,
        }
    }

    /// The opaque view: every field that is not a well-known timing key.
    pub fn bag(&self) -> &FieldBag {
        match self {
            BenchmarkEntry::Recognized { rest, .. } => rest,
            BenchmarkEntry::Opaque { bag, .. } => bag,
        }
    }

    pub fn is_recognized(&self) -> bool {
        matches!(self, BenchmarkEntry::Recognized { .. })
    }
}
