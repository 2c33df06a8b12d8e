use std::path::{Path, PathBuf};
use std::sync::Once;

use anyhow::Context;
use clap::Parser;

use benchcmp_core::{Config, ReportSet, build_table, report::find_output_dir};


static TRACE_INIT: Once = Once::new();
const TRACE_ENV: &str = "BENCHCMP_TRACE";
const DEFAULT_TRACE_FILTER: &str = "benchcmp_core=debug,benchcmp=info";

#[derive(Debug, Parser)]
#[command(
    name = "benchcmp",
    author,
    version,
    about = "Compare benchmark runner reports against the R baseline",
    long_about = None
)]
struct CliArgs {
    /// Directory holding the runner reports (skips the upward search for `output/`)
    #[arg(long, value_name = "DIR")]
    dir: Option<PathBuf>,

    /// TOML or YAML file overriding file names, search depth or large-scale markers
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn env_toggle_enabled(raw: &str) -> bool {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return false;
    }
    !(trimmed.eq_ignore_ascii_case("0") || trimmed.eq_ignore_ascii_case("false") || trimmed.eq_ignore_ascii_case("off"))
}

fn filter_expr_from(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("1")
        || trimmed.eq_ignore_ascii_case("true")
        || trimmed.eq_ignore_ascii_case("on")
    {
        None
    } else {
        Some(trimmed.to_string())
    }
}

// Diagnostics go to stderr and only when asked for; stdout carries the table.
fn maybe_init_tracing() {
    let raw = match std::env::var(TRACE_ENV) {
        Ok(value) => value,
        Err(_) => return,
    };

    if !env_toggle_enabled(&raw) {
        return;
    }

    TRACE_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        use tracing_subscriber::fmt;

        let filter_expr = filter_expr_from(&raw).or_else(|| std::env::var("RUST_LOG").ok());

        let builder = fmt().with_writer(std::io::stderr);

        let builder = match filter_expr.and_then(|expr| EnvFilter::try_new(expr).ok()) {
            Some(filter) => builder.with_env_filter(filter),
            None => builder.with_env_filter(DEFAULT_TRACE_FILTER),
        };

        let _ = builder.try_init();
    });
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None => Ok(Config::default()),
    }
}

/// `--dir` wins; otherwise search upward from `start`.
fn resolve_output_dir(dir: Option<&Path>, start: &Path, config: &Config) -> Option<PathBuf> {
    match dir {
        Some(dir) => Some(dir.to_path_buf()),
        None => find_output_dir(start, &config.output_dir_name, config.search_depth),
    }
}

/// Full stdout text for one run: the table, or the baseline message.
fn render_report(dir: Option<&Path>, config: &Config) -> String {
    let reports = match dir {
        Some(dir) => ReportSet::load_dir(dir, config),
        None => {
            tracing::warn!("no benchmark output directory; every source is absent");
            ReportSet::new()
        }
    };
    match build_table(&reports, config) {
        Ok(table) => table.to_string(),
        Err(err) => format!("{}\n", err),
    }
}

fn main() -> anyhow::Result<()> {
    maybe_init_tracing();

    let CliArgs { dir, config } = CliArgs::parse();
    let config = load_config(config.as_deref())?;

    let cwd = std::env::current_dir().context("determine working directory")?;
    let output_dir = resolve_output_dir(dir.as_deref(), &cwd, &config);

    print!("{}", render_report(output_dir.as_deref(), &config));
    Ok(())
}
