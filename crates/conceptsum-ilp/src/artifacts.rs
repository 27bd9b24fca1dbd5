//! Temporary artifact lifecycle for one solver run

use conceptsum_domain::RunId;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File name prefix shared by every artifact
pub const ARTIFACT_PREFIX: &str = "conceptsum";

/// Model, result and console-log files of one solver run
///
/// Names derive from the [`RunId`], so concurrent runs never collide.
/// Files are removed when the value is dropped, on success and failure
/// alike, unless retention was requested for post-mortem inspection.
#[derive(Debug)]
pub struct RunArtifacts {
    model: PathBuf,
    solution: PathBuf,
    log: PathBuf,
    keep: bool,
}

impl RunArtifacts {
    /// Reserve artifact paths for a run inside `dir`
    pub fn new(dir: &Path, run_id: &RunId, keep: bool) -> Self {
        let stem = format!("{}.{}", ARTIFACT_PREFIX, run_id);
        Self {
            model: dir.join(format!("{}.lp", stem)),
            solution: dir.join(format!("{}.sol", stem)),
            log: dir.join(format!("{}.log", stem)),
            keep,
        }
    }

    /// Path of the serialized model
    pub fn model_path(&self) -> &Path {
        &self.model
    }

    /// Path where the solver writes its result
    pub fn solution_path(&self) -> &Path {
        &self.solution
    }

    /// Path capturing the solver's console output
    pub fn log_path(&self) -> &Path {
        &self.log
    }

    /// All artifact paths
    pub fn paths(&self) -> [&Path; 3] {
        [self.model.as_path(), self.solution.as_path(), self.log.as_path()]
    }

    /// Last `max_lines` lines of the console log, or an empty string
    pub fn log_tail(&self, max_lines: usize) -> String {
        let Ok(contents) = std::fs::read_to_string(&self.log) else {
            return String::new();
        };
        let lines: Vec<&str> = contents.lines().collect();
        let start = lines.len().saturating_sub(max_lines);
        lines[start..].join("\n")
    }
}

impl Drop for RunArtifacts {
    fn drop(&mut self) {
        if self.keep {
            debug!("Keeping solver artifacts at {}", self.model.display());
            return;
        }
        for path in [&self.model, &self.solution, &self.log] {
            match std::fs::remove_file(path) {
                Ok(()) => {}
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => warn!("Failed to remove {}: {}", path.display(), e),
            }
        }
    }
}
