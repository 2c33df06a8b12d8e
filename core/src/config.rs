//! Run configuration.
//!
//! Defaults reproduce the standard layout: runner reports under an `output`
//! directory found within six levels of the working directory. A TOML or
//! YAML file may override any of it; the set of sources stays fixed.

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::report::Source;

pub const DEFAULT_OUTPUT_DIR_NAME: &str = "output";
pub const DEFAULT_SEARCH_DEPTH: usize = 6;

/// Problem sizes whose baseline comparison carries a caveat.
pub const DEFAULT_LARGE_SCALE: [&str; 6] = [
    "scale_100000",
    "scale_1000000",
    "scale_1e+05",
    "scale_250000",
    "scale_500000",
    "scale_2000000",
];

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub output_dir_name: String,
    pub search_depth: usize,
    pub files: SourceFiles,
    pub large_scale: BTreeSet<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir_name: DEFAULT_OUTPUT_DIR_NAME.to_string(),
            search_depth: DEFAULT_SEARCH_DEPTH,
            files: SourceFiles::default(),
            large_scale: DEFAULT_LARGE_SCALE.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Report file name per source, relative to the output directory.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceFiles {
    pub r: String,
    pub cpu_parallel: String,
    pub cpu_serial: String,
    pub gpu: String,
}

impl Default for SourceFiles {
    fn default() -> Self {
        Self {
            r: Source::R.default_file_name().to_string(),
            cpu_parallel: Source::RustCpuParallel.default_file_name().to_string(),
            cpu_serial: Source::RustCpuSerial.default_file_name().to_string(),
            gpu: Source::RustGpu.default_file_name().to_string(),
        }
    }
}

impl SourceFiles {
    pub fn get(&self, source: Source) -> &str {
        match source {
            Source::R => &self.r,
            Source::RustCpuParallel => &self.cpu_parallel,
            Source::RustCpuSerial => &self.cpu_serial,
            Source::RustGpu => &self.gpu,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigFormat {
    Toml,
    Yaml,
}

impl ConfigFormat {
    /// `.yaml`/`.yml` is YAML, everything else is read as TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => ConfigFormat::Yaml,
            _ => ConfigFormat::Toml,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    output_dir_name: Option<String>,
    #[serde(default)]
    search_depth: Option<usize>,
    #[serde(default)]
    files: FilesSection,
    #[serde(default)]
    large_scale: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct FilesSection {
    #[serde(default)]
    r: Option<String>,
    #[serde(default)]
    cpu_parallel: Option<String>,
    #[serde(default)]
    cpu_serial: Option<String>,
    #[serde(default)]
    gpu: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl Config {
    pub fn from_str_with_format(input: &str, format: ConfigFormat) -> anyhow::Result<Self> {
        let file: ConfigFile = match format {
            ConfigFormat::Toml => toml::from_str(input).context("parse TOML config")?,
            ConfigFormat::Yaml if input.trim().is_empty() => ConfigFile::default(),
            ConfigFormat::Yaml => serde_yaml::from_str(input).context("parse YAML config")?,
        };
        let mut config = Config::default();
        config.apply(file);
        Ok(config)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let data = std::fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
        Self::from_str_with_format(&data, ConfigFormat::from_path(path))
            .with_context(|| format!("load config {}", path.display()))
    }

    fn apply(&mut self, file: ConfigFile) {
        if let Some(v) = non_empty(file.output_dir_name) {
            self.output_dir_name = v;
        }
        if let Some(v) = file.search_depth.filter(|v| *v > 0) {
            self.search_depth = v;
        }
        if let Some(v) = non_empty(file.files.r) {
            self.files.r = v;
        }
        if let Some(v) = non_empty(file.files.cpu_parallel) {
            self.files.cpu_parallel = v;
        }
        if let Some(v) = non_empty(file.files.cpu_serial) {
            self.files.cpu_serial = v;
        }
        if let Some(v) = non_empty(file.files.gpu) {
            self.files.gpu = v;
        }
        if let Some(markers) = file.large_scale {
            self.large_scale = markers.into_iter().filter(|m| !m.is_empty()).collect();
        }
    }
}
