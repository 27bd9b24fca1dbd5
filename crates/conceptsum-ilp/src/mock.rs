//! In-process solver double for tests

use crate::error::SolverError;
use crate::model::IlpModel;
use crate::solution::SolutionAssignment;
use crate::solver::Solver;
use conceptsum_domain::RunId;
use std::sync::{Arc, Mutex};

/// Largest model [`MockSolver::exhaustive`] will enumerate
pub const MAX_EXHAUSTIVE_VARIABLES: usize = 20;

/// Failure kinds a [`MockSolver`] can inject
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockFailure {
    /// Behave like a solver that exits non-zero
    Process,
    /// Behave like a solver that leaves an unparseable result
    Output,
}

#[derive(Debug, Clone)]
enum Behavior {
    Exhaustive,
    Fixed(SolutionAssignment),
    Fail(MockFailure),
}

/// Deterministic solver for testing
///
/// Never spawns a process. It either enumerates every 0/1 assignment of a
/// small model, returns a canned assignment, or fails on demand. Clones
/// share their call log.
///
/// # Examples
///
/// ```
/// use conceptsum_domain::RunId;
/// use conceptsum_ilp::{IlpModel, LinearExpr, MockSolver, Solver};
///
/// let model = IlpModel::new(
///     "score",
///     LinearExpr::new().with_term(1.0, "c0"),
///     Vec::new(),
///     vec!["c0".to_string()],
///     Vec::new(),
/// );
/// let solver = MockSolver::exhaustive();
/// let solution = solver.solve(&model, &RunId::new(1, "test", "localhost")).unwrap();
/// assert_eq!(solution.get("c0"), Some(1));
/// assert_eq!(solver.call_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MockSolver {
    behavior: Behavior,
    models: Arc<Mutex<Vec<IlpModel>>>,
}

impl MockSolver {
    fn with_behavior(behavior: Behavior) -> Self {
        Self {
            behavior,
            models: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Optimal solutions by brute force over binary variables
    pub fn exhaustive() -> Self {
        Self::with_behavior(Behavior::Exhaustive)
    }

    /// Always return `assignment`
    pub fn fixed(assignment: SolutionAssignment) -> Self {
        Self::with_behavior(Behavior::Fixed(assignment))
    }

    /// Always fail with the given kind
    pub fn failing(kind: MockFailure) -> Self {
        Self::with_behavior(Behavior::Fail(kind))
    }

    /// Number of solve calls so far
    pub fn call_count(&self) -> usize {
        self.log().len()
    }

    /// Most recent model handed to the solver
    pub fn last_model(&self) -> Option<IlpModel> {
        self.log().last().cloned()
    }

    fn log(&self) -> std::sync::MutexGuard<'_, Vec<IlpModel>> {
        self.models.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn enumerate(model: &IlpModel) -> Result<SolutionAssignment, SolverError> {
        let variables: Vec<&str> = model.binaries().collect();
        if variables.len() > MAX_EXHAUSTIVE_VARIABLES || model.integers().next().is_some() {
            return Err(SolverError::MalformedOutput(format!(
                "model with {} variables is too large for exhaustive search",
                model.variable_count()
            )));
        }

        let mut best: Option<(f64, SolutionAssignment)> = None;
        for mask in 0u32..(1u32 << variables.len()) {
            let candidate: SolutionAssignment = variables
                .iter()
                .enumerate()
                .map(|(bit, name)| (name.to_string(), i64::from((mask >> bit) & 1)))
                .collect();
            if !model.is_feasible(&candidate) {
                continue;
            }
            let value = model.objective_value(&candidate);
            if best.as_ref().map_or(true, |(best_value, _)| value > *best_value) {
                best = Some((value, candidate));
            }
        }

        best.map(|(_, assignment)| assignment)
            .ok_or_else(|| SolverError::NoSolution("no feasible assignment".to_string()))
    }
}

impl Default for MockSolver {
    fn default() -> Self {
        Self::exhaustive()
    }
}

impl Solver for MockSolver {
    fn solve(&self, model: &IlpModel, _run_id: &RunId) -> Result<SolutionAssignment, SolverError> {
        self.log().push(model.clone());

        match &self.behavior {
            Behavior::Exhaustive => Self::enumerate(model),
            Behavior::Fixed(assignment) => Ok(assignment.clone()),
            Behavior::Fail(MockFailure::Process) => Err(SolverError::Exit {
                status: "exit status: 1".to_string(),
                output: "mock solver failure".to_string(),
            }),
            Behavior::Fail(MockFailure::Output) => {
                Err(SolverError::MalformedOutput("mock solver output".to_string()))
            }
        }
    }
}
