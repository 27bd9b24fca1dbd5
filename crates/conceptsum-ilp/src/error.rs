//! Error types for model construction and solving

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while building a model
#[derive(Error, Debug, PartialEq, Eq)]
pub enum IlpError {
    /// Nothing to optimize: no sentences or no eligible concepts
    #[error("Infeasible input: {0}")]
    InfeasibleInput(String),
}

/// Errors that can occur while running an external solver
#[derive(Error, Debug)]
pub enum SolverError {
    /// The solver executable could not be started
    #[error("Failed to launch solver '{command}': {source}")]
    Spawn {
        /// Command that failed to start
        command: String,
        /// Underlying launch error
        #[source]
        source: std::io::Error,
    },

    /// The solver exited unsuccessfully
    #[error("Solver exited with {status}: {output}")]
    Exit {
        /// Exit status description
        status: String,
        /// Tail of the solver's console output
        output: String,
    },

    /// The solver outlived its hard deadline and was killed
    #[error("Solver killed after exceeding {0:?}")]
    Timeout(Duration),

    /// Model file could not be written or the process could not be awaited
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The solver reported success but left no readable result file
    #[error("Solver result missing: {0}")]
    MissingOutput(String),

    /// The result file could not be parsed
    #[error("Malformed solver output: {0}")]
    MalformedOutput(String),

    /// The solver finished without any feasible incumbent
    #[error("Solver found no solution: {0}")]
    NoSolution(String),
}

impl SolverError {
    /// Whether the failure concerns the solver process itself
    pub fn is_process_failure(&self) -> bool {
        matches!(
            self,
            SolverError::Spawn { .. } | SolverError::Exit { .. } | SolverError::Timeout(_) | SolverError::Io(_)
        )
    }

    /// Whether the process ran but its output was unusable
    pub fn is_output_failure(&self) -> bool {
        !self.is_process_failure()
    }
}
