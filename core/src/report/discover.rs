use std::path::{Path, PathBuf};

use tracing::{debug, info};

/// Walk up from `start` looking for a directory named `dir_name`.
///
/// At most `max_levels` directories are checked: `start` itself and then its
/// ancestors. Hitting the filesystem root ends the search early.
pub fn find_output_dir(start: &Path, dir_name: &str, max_levels: usize) -> Option<PathBuf> {
    let mut current = Some(start);
    for _ in 0..max_levels {
        let dir = current?;
        let candidate = dir.join(dir_name);
        if candidate.is_dir() {
            info!(dir = %candidate.display(), "found benchmark output directory");
            return Some(candidate);
        }
        current = dir.parent();
    }
    debug!(
        start = %start.display(),
        dir_name,
        max_levels,
        "benchmark output directory not found"
    );
    None
}
