//! Row ordering.
//!
//! Regular benchmarks come first, large-scale ones after them, each group in
//! ascending name order. Large-scale rows carry a `**` marker in the table.

use std::collections::BTreeSet;

pub const LARGE_SCALE_SUFFIX: &str = "**";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classified {
    pub regular: Vec<String>,
    pub large_scale: Vec<String>,
}

/// A benchmark name in final display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderedName<'a> {
    pub name: &'a str,
    pub large_scale: bool,
}

impl OrderedName<'_> {
    pub fn display_name(&self) -> String {
        if self.large_scale {
            format!("{}{}", self.name, LARGE_SCALE_SUFFIX)
        } else {
            self.name.to_string()
        }
    }
}

impl Classified {
    pub fn ordered(&self) -> impl Iterator<Item = OrderedName<'_>> {
        let regular = self.regular.iter().map(|name| OrderedName {
            name,
            large_scale: false,
        });
        let large = self.large_scale.iter().map(|name| OrderedName {
            name,
            large_scale: true,
        });
        regular.chain(large)
    }

    pub fn len(&self) -> usize {
        self.regular.len() + self.large_scale.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Split `names` by membership in `markers` and sort both groups.
/// Duplicate names collapse to one row.
pub fn classify<'a, I>(names: I, markers: &BTreeSet<String>) -> Classified
where
    I: IntoIterator<Item = &'a str>,
{
    let unique: BTreeSet<&str> = names.into_iter().collect();
    let (large_scale, regular): (Vec<&str>, Vec<&str>) = unique.into_iter().partition(|name| markers.contains(*name));
    Classified {
        regular: regular.into_iter().map(str::to_string).collect(),
        large_scale: large_scale.into_iter().map(str::to_string).collect(),
    }
}
