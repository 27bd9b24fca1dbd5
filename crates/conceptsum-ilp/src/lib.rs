//! Conceptsum ILP layer
//!
//! Formulates concept-coverage sentence selection as a 0/1 integer linear
//! program and solves it with an external command-line LP solver.
//!
//! # Architecture
//!
//! ```text
//! Sentences + ConceptTable + CoverageIndex
//!     → ModelBuilder → IlpModel
//!     → to_lp → <run>.lp → solver process → <run>.sol
//!     → parse → SolutionAssignment
//! ```
//!
//! # Solvers
//!
//! - [`ExternalSolver`]: GLPK (`glpsol`) or Gurobi (`gurobi_cl`) through
//!   temporary files named after a caller-supplied [`RunId`](conceptsum_domain::RunId)
//! - [`MockSolver`]: in-process double for tests
//!
//! The external solver is a blocking call. Parallelism across documents
//! comes from running independent calls, each with its own run id.

#![warn(missing_docs)]

mod artifacts;
mod builder;
mod error;
mod format;
mod mock;
mod model;
mod solution;
mod solver;

pub use artifacts::{RunArtifacts, ARTIFACT_PREFIX};
pub use builder::{ModelBuilder, OBJECTIVE_NAME};
pub use error::{IlpError, SolverError};
pub use format::to_lp;
pub use mock::{MockFailure, MockSolver, MAX_EXHAUSTIVE_VARIABLES};
pub use model::{
    concept_var, parse_sentence_var, sentence_var, Comparison, Constraint, IlpModel, LinearExpr,
    ModelStats, Term,
};
pub use solution::{parse_glpk, parse_gurobi, SolutionAssignment};
pub use solver::{ExternalSolver, Solver, SolverBackend, SolverConfig};
