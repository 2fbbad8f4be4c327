//! Solution number resolution.
//!
//! Vivado HLS keeps each build variant in `<project>/solution<N>`. Commands act
//! on the newest one unless the user picks a number explicitly.

use glob::{glob, Pattern};
use hlsclt_core::error::{HlsError, Result};
use regex::Regex;
use std::path::Path;
use tracing::debug;

/// Solution directory numbers found under `project_dir`, sorted ascending.
pub fn existing_solutions(project_dir: &Path) -> Result<Vec<u32>> {
    let solution_re = Regex::new(r"^solution(\d+)$")
        .map_err(|e| HlsError::Other(anyhow::anyhow!("solution pattern: {e}")))?;

    let pattern = format!(
        "{}/solution*",
        Pattern::escape(&project_dir.to_string_lossy())
    );
    let entries = glob(&pattern)
        .map_err(|e| HlsError::Config(format!("Invalid project path {}: {}", project_dir.display(), e)))?;

    let mut numbers: Vec<u32> = entries
        .filter_map(|entry| entry.ok())
        .filter(|path| path.is_dir())
        .filter_map(|path| {
            let name = path.file_name()?.to_string_lossy().into_owned();
            let captures = solution_re.captures(&name)?;
            captures[1].parse().ok()
        })
        .collect();
    numbers.sort_unstable();
    numbers.dedup();
    Ok(numbers)
}

/// Pick the solution a command should inspect.
///
/// An explicit request wins. Otherwise the highest existing `solution<N>` is
/// used, or 1 when the project has none yet.
pub fn resolve_solution(project_dir: &Path, requested: Option<u32>) -> Result<u32> {
    if let Some(number) = requested {
        if number == 0 {
            return Err(HlsError::Config(
                "solution numbers start at 1".to_string(),
            ));
        }
        return Ok(number);
    }

    let solution = existing_solutions(project_dir)?
        .last()
        .copied()
        .unwrap_or(1);
    debug!("Resolved {} to solution{}", project_dir.display(), solution);
    Ok(solution)
}
