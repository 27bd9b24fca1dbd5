//! External solver invocation

use crate::artifacts::RunArtifacts;
use crate::error::SolverError;
use crate::format::to_lp;
use crate::model::IlpModel;
use crate::solution::{parse_glpk, parse_gurobi, SolutionAssignment};
use conceptsum_domain::RunId;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io;
use std::path::PathBuf;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// How often a running solver is polled for completion
const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Console lines quoted in failure messages
const LOG_TAIL_LINES: usize = 20;

/// Solves an ILP, returning the value of every declared variable
///
/// Implementations block until a solution is available. A time-limited
/// incumbent is as acceptable as a proven optimum.
pub trait Solver {
    /// Solve `model`, naming any temporary artifacts after `run_id`
    fn solve(&self, model: &IlpModel, run_id: &RunId) -> Result<SolutionAssignment, SolverError>;
}

/// Command-line solver family, selecting LP dialect, arguments and result format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolverBackend {
    /// GNU GLPK `glpsol`
    #[default]
    Glpk,
    /// Gurobi `gurobi_cl`
    Gurobi,
}

impl SolverBackend {
    /// Conventional executable name
    pub fn default_command(&self) -> &'static str {
        match self {
            SolverBackend::Glpk => "glpsol",
            SolverBackend::Gurobi => "gurobi_cl",
        }
    }
}

/// Configuration for an external solver process
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Solver family
    #[serde(default)]
    pub backend: SolverBackend,

    /// Executable name or path (the backend's usual executable when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    /// Advisory time limit passed to the solver (seconds)
    #[serde(default = "default_time_limit_secs")]
    pub time_limit_secs: u64,

    /// Extra wall-clock time before the process is killed (seconds)
    #[serde(default = "default_kill_grace_secs")]
    pub kill_grace_secs: u64,

    /// Directory for model and result files (system temp dir when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_dir: Option<PathBuf>,

    /// Keep model and result files after the run
    #[serde(default)]
    pub keep_artifacts: bool,
}

fn default_time_limit_secs() -> u64 {
    5
}

fn default_kill_grace_secs() -> u64 {
    5
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            backend: SolverBackend::Glpk,
            command: None,
            time_limit_secs: default_time_limit_secs(),
            kill_grace_secs: default_kill_grace_secs(),
            work_dir: None,
            keep_artifacts: false,
        }
    }
}

impl SolverConfig {
    /// Executable to run: the configured command, else the backend default
    pub fn command(&self) -> &str {
        self.command
            .as_deref()
            .unwrap_or_else(|| self.backend.default_command())
    }

    /// Advisory solver time limit
    pub fn time_limit(&self) -> Duration {
        Duration::from_secs(self.time_limit_secs)
    }

    /// Wall-clock deadline after which the process is killed
    pub fn hard_deadline(&self) -> Duration {
        Duration::from_secs(self.time_limit_secs.saturating_add(self.kill_grace_secs))
    }

    /// Directory receiving run artifacts
    pub fn work_dir(&self) -> PathBuf {
        self.work_dir.clone().unwrap_or_else(std::env::temp_dir)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.command().trim().is_empty() {
            return Err("solver command must not be empty".to_string());
        }
        if self.time_limit_secs == 0 {
            return Err("time_limit_secs must be greater than 0".to_string());
        }
        Ok(())
    }
}

/// Solver reached through a command-line executable and two files
///
/// The model is written to a run-specific LP file, the solver writes a
/// run-specific result file, and both are removed on every exit path.
#[derive(Debug, Clone)]
pub struct ExternalSolver {
    config: SolverConfig,
}

impl ExternalSolver {
    /// Create a solver from its configuration
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Solver configuration
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    fn build_command(&self, artifacts: &RunArtifacts) -> Command {
        let mut cmd = Command::new(self.config.command());
        match self.config.backend {
            SolverBackend::Glpk => {
                cmd.arg("--tmlim")
                    .arg(self.config.time_limit_secs.to_string())
                    .arg("--cpxlp")
                    .arg(artifacts.model_path())
                    .arg("-o")
                    .arg(artifacts.solution_path());
            }
            SolverBackend::Gurobi => {
                cmd.arg(format!("TimeLimit={}", self.config.time_limit_secs))
                    .arg(format!("ResultFile={}", artifacts.solution_path().display()))
                    .arg(artifacts.model_path());
            }
        }
        cmd
    }

    /// Wait for the child, killing it once the hard deadline passes
    fn wait_with_deadline<P: SolverProcess>(&self, child: &mut P) -> Result<ExitStatus, SolverError> {
        let deadline = self.config.hard_deadline();
        let started = Instant::now();
        loop {
            match child.try_wait() {
                Ok(Some(status)) => {
                    debug!("Solver finished in {:?} with {}", started.elapsed(), status);
                    return Ok(status);
                }
                Ok(None) => {}
                Err(e) => {
                    warn!("Lost track of solver pid {}: {}", child.id(), e);
                    kill_and_reap(child);
                    return Err(SolverError::Io(e));
                }
            }
            if started.elapsed() >= deadline {
                warn!("Solver exceeded {:?}, killing pid {}", deadline, child.id());
                kill_and_reap(child);
                return Err(SolverError::Timeout(deadline));
            }
            std::thread::sleep(POLL_INTERVAL);
        }
    }
}

/// The parts of a child process the deadline loop needs
trait SolverProcess {
    fn id(&self) -> u32;
    fn try_wait(&mut self) -> io::Result<Option<ExitStatus>>;
    fn kill(&mut self) -> io::Result<()>;
    fn wait(&mut self) -> io::Result<ExitStatus>;
}

impl SolverProcess for Child {
    fn id(&self) -> u32 {
        Child::id(self)
    }

    fn try_wait(&mut self) -> io::Result<Option<ExitStatus>> {
        Child::try_wait(self)
    }

    fn kill(&mut self) -> io::Result<()> {
        Child::kill(self)
    }

    fn wait(&mut self) -> io::Result<ExitStatus> {
        Child::wait(self)
    }
}

/// Kill the process and wait for it so it never outlives its artifacts
fn kill_and_reap<P: SolverProcess>(child: &mut P) {
    if let Err(e) = child.kill() {
        warn!("Failed to kill solver: {}", e);
    }
    if let Err(e) = child.wait() {
        warn!("Failed to reap solver: {}", e);
    }
}

impl Solver for ExternalSolver {
    fn solve(&self, model: &IlpModel, run_id: &RunId) -> Result<SolutionAssignment, SolverError> {
        let artifacts = RunArtifacts::new(&self.config.work_dir(), run_id, self.config.keep_artifacts);

        fs::write(artifacts.model_path(), to_lp(model, self.config.backend))?;

        let log = File::create(artifacts.log_path())?;
        let mut cmd = self.build_command(&artifacts);
        cmd.stdin(Stdio::null())
            .stdout(Stdio::from(log.try_clone()?))
            .stderr(Stdio::from(log));

        info!(
            "Running {} (time limit {}s) on {}",
            self.config.command(),
            self.config.time_limit_secs,
            artifacts.model_path().display()
        );

        let mut child = cmd.spawn().map_err(|source| SolverError::Spawn {
            command: self.config.command().to_string(),
            source,
        })?;
        let status = self.wait_with_deadline(&mut child)?;

        if !status.success() {
            return Err(SolverError::Exit {
                status: status.to_string(),
                output: artifacts.log_tail(LOG_TAIL_LINES),
            });
        }

        let output = fs::read_to_string(artifacts.solution_path()).map_err(|e| {
            SolverError::MissingOutput(format!("{}: {}", artifacts.solution_path().display(), e))
        })?;

        let assignment = match self.config.backend {
            SolverBackend::Glpk => parse_glpk(&output, model)?,
            SolverBackend::Gurobi => parse_gurobi(&output, model)?,
        };
        debug!("Solver reported {} variables", assignment.len());
        Ok(assignment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SolverConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.command(), "glpsol");
        assert_eq!(config.hard_deadline(), Duration::from_secs(10));
    }

    #[test]
    fn test_invalid_config() {
        let mut config = SolverConfig::default();
        config.time_limit_secs = 0;
        assert!(config.validate().is_err());

        let mut config = SolverConfig::default();
        config.command = Some("  ".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_glpk_arguments() {
        let solver = ExternalSolver::new(SolverConfig::default());
        let artifacts = RunArtifacts::new(std::path::Path::new("/work"), &RunId::from_parts(1, "u", "h", 2), false);
        let cmd = solver.build_command(&artifacts);
        let args: Vec<String> = cmd.get_args().map(|a| a.to_string_lossy().to_string()).collect();

        assert_eq!(cmd.get_program(), "glpsol");
        assert_eq!(args[0..3], ["--tmlim", "5", "--cpxlp"]);
        assert!(args[3].ends_with(".lp"));
        assert_eq!(args[4], "-o");
        assert!(args[5].ends_with(".sol"));
    }

    #[test]
    fn test_gurobi_arguments() {
        let config = SolverConfig {
            backend: SolverBackend::Gurobi,
            time_limit_secs: 30,
            ..SolverConfig::default()
        };
        let solver = ExternalSolver::new(config);
        let artifacts = RunArtifacts::new(std::path::Path::new("/work"), &RunId::from_parts(1, "u", "h", 2), false);
        let cmd = solver.build_command(&artifacts);
        let args: Vec<String> = cmd.get_args().map(|a| a.to_string_lossy().to_string()).collect();

        assert_eq!(cmd.get_program(), "gurobi_cl");
        assert_eq!(args[0], "TimeLimit=30");
        assert!(args[1].starts_with("ResultFile=/work/conceptsum."));
        assert!(args[2].ends_with(".lp"));
    }

    #[test]
    fn test_command_follows_backend_unless_set() {
        let mut config = SolverConfig {
            backend: SolverBackend::Gurobi,
            ..SolverConfig::default()
        };
        assert_eq!(config.command(), "gurobi_cl");

        config.command = Some("/opt/gurobi/bin/gurobi_cl".to_string());
        assert_eq!(config.command(), "/opt/gurobi/bin/gurobi_cl");
    }

    /// Process whose status can no longer be queried
    #[derive(Default)]
    struct UnreachableProcess {
        killed: bool,
        reaped: bool,
    }

    impl SolverProcess for UnreachableProcess {
        fn id(&self) -> u32 {
            4242
        }

        fn try_wait(&mut self) -> io::Result<Option<ExitStatus>> {
            Err(io::Error::new(io::ErrorKind::Other, "waitpid failed"))
        }

        fn kill(&mut self) -> io::Result<()> {
            self.killed = true;
            Ok(())
        }

        fn wait(&mut self) -> io::Result<ExitStatus> {
            self.reaped = true;
            Err(io::Error::new(io::ErrorKind::Other, "waitpid failed"))
        }
    }

    #[test]
    fn test_wait_failure_kills_and_reaps_child() {
        let solver = ExternalSolver::new(SolverConfig::default());
        let mut process = UnreachableProcess::default();

        let err = solver.wait_with_deadline(&mut process).unwrap_err();

        assert!(matches!(err, SolverError::Io(_)), "got {:?}", err);
        assert!(process.killed);
        assert!(process.reaped);
    }

    #[test]
    fn test_backend_default_commands() {
        assert_eq!(SolverBackend::Glpk.default_command(), "glpsol");
        assert_eq!(SolverBackend::Gurobi.default_command(), "gurobi_cl");
    }
}
