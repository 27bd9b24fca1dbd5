//! CLI command definitions and argument parsing.

use crate::error::{CliError, Result};
use clap::{Args, Parser, Subcommand};
use conceptsum_decoder::{SummarizationError, SummarizerConfig};
use conceptsum_domain::{ExtractionMode, LengthUnit};
use conceptsum_extractor::ConceptExtractor;
use conceptsum_ilp::SolverBackend;
use std::path::PathBuf;

/// Conceptsum - extractive summarization by concept coverage.
#[derive(Debug, Parser)]
#[command(name = "conceptsum")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "CONCEPTSUM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Summary text only
    Text,
    /// JSON format
    Json,
    /// Table format
    Table,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Summarize one document
    Summarize(SummarizeArgs),

    /// Summarize every document of a JSONL dataset
    Batch(BatchArgs),

    /// Print the optimization model for a document without solving it
    Model(ModelArgs),

    /// Inspect or create the configuration file
    Config(ConfigArgs),
}

/// Summarizer overrides shared by all document commands.
#[derive(Debug, Clone, Default, Args)]
pub struct SummarizerArgs {
    /// Maximum summary length
    #[arg(short, long)]
    pub budget: Option<u64>,

    /// Measure lengths in characters instead of tokens
    #[arg(long)]
    pub characters: bool,

    /// Use unigram concepts
    #[arg(long)]
    pub unigrams: bool,

    /// Use bigram concepts
    #[arg(long)]
    pub bigrams: bool,

    /// Use trigram concepts
    #[arg(long)]
    pub trigrams: bool,

    /// Use four-gram concepts
    #[arg(long)]
    pub fourgrams: bool,

    /// Use skip-bigrams plus unigrams
    #[arg(long)]
    pub su4: bool,

    /// Solver family
    #[arg(long, value_enum)]
    pub solver: Option<SolverArg>,

    /// Solver executable (defaults to the family's usual name)
    #[arg(long)]
    pub solver_command: Option<String>,

    /// Solver time limit in seconds
    #[arg(long)]
    pub time_limit: Option<u64>,

    /// Directory for model and result files
    #[arg(long)]
    pub work_dir: Option<PathBuf>,

    /// Keep model and result files after each run
    #[arg(long)]
    pub keep_artifacts: bool,
}

/// Arguments for the summarize command.
#[derive(Debug, Args)]
pub struct SummarizeArgs {
    /// Document file (reads stdin when omitted)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub summarizer: SummarizerArgs,
}

/// Arguments for the batch command.
#[derive(Debug, Args)]
pub struct BatchArgs {
    /// JSONL file of documents with "id" and "text"
    #[arg(short, long)]
    pub dataset: PathBuf,

    /// JSONL file receiving {"id", "system"} lines
    #[arg(short, long)]
    pub summaries: PathBuf,

    /// What to write when a document fails
    #[arg(long, value_enum, default_value = "original")]
    pub fallback: FallbackArg,

    #[command(flatten)]
    pub summarizer: SummarizerArgs,
}

/// Arguments for the model command.
#[derive(Debug, Args)]
pub struct ModelArgs {
    /// Document file (reads stdin when omitted)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub summarizer: SummarizerArgs,
}

/// Arguments for configuration management.
#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Solver family argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SolverArg {
    /// GNU GLPK
    Glpk,
    /// Gurobi
    Gurobi,
}

/// Per-document fallback when summarization fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum FallbackArg {
    /// Write the document text unchanged
    #[default]
    Original,
    /// Write an empty summary
    Empty,
    /// Write null
    Null,
}

impl SummarizerArgs {
    /// Extraction mode selected on the command line, if any
    pub fn mode(&self) -> Result<Option<ExtractionMode>> {
        let flags = [self.unigrams, self.bigrams, self.trigrams, self.fourgrams, self.su4];
        if !flags.iter().any(|&on| on) {
            return Ok(None);
        }
        let extractor = ConceptExtractor::from_flags(
            self.unigrams,
            self.bigrams,
            self.trigrams,
            self.fourgrams,
            self.su4,
        )
        .map_err(SummarizationError::from)?;
        Ok(Some(extractor.mode()))
    }

    /// Apply the overrides to a configuration and validate the result
    pub fn apply(&self, mut config: SummarizerConfig) -> Result<SummarizerConfig> {
        if let Some(budget) = self.budget {
            config.budget = budget;
        }
        if self.characters {
            config.length_unit = LengthUnit::Characters;
        }
        if let Some(mode) = self.mode()? {
            config.mode = mode;
        }
        if let Some(solver) = self.solver {
            let backend: SolverBackend = solver.into();
            config.solver.backend = backend;
            config.solver.command = None;
        }
        if let Some(command) = &self.solver_command {
            config.solver.command = Some(command.clone());
        }
        if let Some(limit) = self.time_limit {
            config.solver.time_limit_secs = limit;
        }
        if let Some(dir) = &self.work_dir {
            config.solver.work_dir = Some(dir.clone());
        }
        if self.keep_artifacts {
            config.solver.keep_artifacts = true;
        }

        config.validate().map_err(CliError::Config)?;
        Ok(config)
    }
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Text => crate::config::OutputFormat::Text,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Table => crate::config::OutputFormat::Table,
        }
    }
}

impl From<SolverArg> for SolverBackend {
    fn from(solver: SolverArg) -> Self {
        match solver {
            SolverArg::Glpk => SolverBackend::Glpk,
            SolverArg::Gurobi => SolverBackend::Gurobi,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summarizer_args(cli: Cli) -> SummarizerArgs {
        match cli.command {
            Command::Summarize(args) => args.summarizer,
            Command::Batch(args) => args.summarizer,
            Command::Model(args) => args.summarizer,
            Command::Config(_) => panic!("no summarizer arguments"),
        }
    }

    #[test]
    fn test_summarize_command() {
        let cli = Cli::parse_from(["conceptsum", "summarize", "--input", "doc.txt", "-b", "40"]);
        match cli.command {
            Command::Summarize(args) => {
                assert_eq!(args.input, Some(PathBuf::from("doc.txt")));
                assert_eq!(args.summarizer.budget, Some(40));
            }
            _ => panic!("Expected Summarize command"),
        }
    }

    #[test]
    fn test_batch_command_defaults_to_original_fallback() {
        let cli = Cli::parse_from([
            "conceptsum", "batch", "--dataset", "in.jsonl", "--summaries", "out.jsonl",
        ]);
        match cli.command {
            Command::Batch(args) => assert_eq!(args.fallback, FallbackArg::Original),
            _ => panic!("Expected Batch command"),
        }
    }

    #[test]
    fn test_single_mode_flag() {
        let cli = Cli::parse_from(["conceptsum", "model", "--su4"]);
        let args = summarizer_args(cli);
        assert_eq!(args.mode().unwrap(), Some(ExtractionMode::SkipBigrams));
    }

    #[test]
    fn test_no_mode_flag_keeps_configured_mode() {
        let args = SummarizerArgs::default();
        assert_eq!(args.mode().unwrap(), None);

        let config = SummarizerConfig {
            mode: ExtractionMode::Trigrams,
            ..SummarizerConfig::default()
        };
        assert_eq!(args.apply(config).unwrap().mode, ExtractionMode::Trigrams);
    }

    #[test]
    fn test_conflicting_mode_flags_rejected() {
        let cli = Cli::parse_from(["conceptsum", "summarize", "--unigrams", "--bigrams"]);
        let args = summarizer_args(cli);
        match args.mode() {
            Err(CliError::Summarization(e)) => {
                assert!(e.is_config());
                assert!(matches!(e, SummarizationError::Extractor(_)));
            }
            other => panic!("expected a configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_overrides_applied() {
        let cli = Cli::parse_from([
            "conceptsum", "summarize", "--budget", "25", "--characters", "--solver", "gurobi",
            "--time-limit", "30", "--keep-artifacts",
        ]);
        let config = summarizer_args(cli).apply(SummarizerConfig::default()).unwrap();

        assert_eq!(config.budget, 25);
        assert_eq!(config.length_unit, LengthUnit::Characters);
        assert_eq!(config.solver.backend, SolverBackend::Gurobi);
        assert_eq!(config.solver.command(), "gurobi_cl");
        assert_eq!(config.solver.time_limit_secs, 30);
        assert!(config.solver.keep_artifacts);
    }

    #[test]
    fn test_explicit_solver_command_wins() {
        let args = SummarizerArgs {
            solver: Some(SolverArg::Glpk),
            solver_command: Some("/opt/glpk/bin/glpsol".to_string()),
            ..SummarizerArgs::default()
        };
        let config = args.apply(SummarizerConfig::default()).unwrap();
        assert_eq!(config.solver.command(), "/opt/glpk/bin/glpsol");
    }

    #[test]
    fn test_solver_flag_replaces_configured_command() {
        let mut config = SummarizerConfig::default();
        config.solver.command = Some("/opt/glpk/bin/glpsol".to_string());
        let args = SummarizerArgs {
            solver: Some(SolverArg::Gurobi),
            ..SummarizerArgs::default()
        };
        assert_eq!(args.apply(config).unwrap().solver.command(), "gurobi_cl");
    }

    #[test]
    fn test_zero_budget_rejected() {
        let args = SummarizerArgs {
            budget: Some(0),
            ..SummarizerArgs::default()
        };
        assert!(matches!(args.apply(SummarizerConfig::default()), Err(CliError::Config(_))));
    }

    #[test]
    fn test_config_init_command() {
        let cli = Cli::parse_from(["conceptsum", "config", "init", "--force"]);
        match cli.command {
            Command::Config(ConfigArgs { action: ConfigAction::Init { force } }) => assert!(force),
            _ => panic!("Expected Config Init command"),
        }
    }
}
