//! Configuration for the Decoder

use conceptsum_domain::{ExtractionMode, LengthUnit};
use conceptsum_ilp::SolverConfig;
use serde::{Deserialize, Serialize};

/// Configuration for concept-coverage summarization
///
/// # Examples
///
/// ```
/// use conceptsum_decoder::SummarizerConfig;
///
/// let config = SummarizerConfig::from_toml(r#"
///     budget = 50
///     mode = "su4"
///
///     [solver]
///     time_limit_secs = 10
/// "#).unwrap();
/// assert_eq!(config.budget, 50);
/// assert_eq!(config.solver.command(), "glpsol");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizerConfig {
    /// Maximum total length of the selected sentences
    #[serde(default = "default_budget")]
    pub budget: u64,

    /// Unit of sentence lengths and budget
    #[serde(default)]
    pub length_unit: LengthUnit,

    /// Concept class to cover
    #[serde(default)]
    pub mode: ExtractionMode,

    /// Objective scale factor
    #[serde(default = "default_alpha")]
    pub alpha: f64,

    /// External solver settings
    #[serde(default)]
    pub solver: SolverConfig,
}

fn default_budget() -> u64 {
    100
}

fn default_alpha() -> f64 {
    1.0
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            budget: default_budget(),
            length_unit: LengthUnit::Tokens,
            mode: ExtractionMode::Bigrams,
            alpha: default_alpha(),
            solver: SolverConfig::default(),
        }
    }
}

impl SummarizerConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.budget == 0 {
            return Err("budget must be greater than 0".to_string());
        }
        if !self.alpha.is_finite() || self.alpha <= 0.0 {
            return Err(format!("alpha must be a positive number, got {}", self.alpha));
        }
        self.solver.validate()
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conceptsum_ilp::SolverBackend;

    #[test]
    fn test_default_config_is_valid() {
        let config = SummarizerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.length_unit, LengthUnit::Tokens);
        assert_eq!(config.mode, ExtractionMode::Bigrams);
    }

    #[test]
    fn test_zero_budget_invalid() {
        let mut config = SummarizerConfig::default();
        config.budget = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_positive_alpha_invalid() {
        let mut config = SummarizerConfig::default();
        config.alpha = 0.0;
        assert!(config.validate().is_err());
        config.alpha = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_solver_section_validated() {
        let mut config = SummarizerConfig::default();
        config.solver.time_limit_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = SummarizerConfig::default();
        config.length_unit = LengthUnit::Characters;
        config.mode = ExtractionMode::FourGrams;
        config.solver.backend = SolverBackend::Gurobi;

        let toml_str = config.to_toml().unwrap();
        let parsed = SummarizerConfig::from_toml(&toml_str).unwrap();

        assert_eq!(parsed.budget, config.budget);
        assert_eq!(parsed.length_unit, LengthUnit::Characters);
        assert_eq!(parsed.mode, ExtractionMode::FourGrams);
        assert_eq!(parsed.solver.backend, SolverBackend::Gurobi);
    }

    #[test]
    fn test_toml_enum_names() {
        let config = SummarizerConfig::from_toml(
            "length_unit = \"characters\"\nmode = \"unigrams\"\n[solver]\nbackend = \"gurobi\"\ncommand = \"gurobi_cl\"\n",
        )
        .unwrap();
        assert_eq!(config.length_unit, LengthUnit::Characters);
        assert_eq!(config.mode, ExtractionMode::Unigrams);
        assert_eq!(config.solver.command(), "gurobi_cl");
    }

    #[test]
    fn test_backend_alone_selects_its_executable() {
        let config = SummarizerConfig::from_toml("[solver]\nbackend = \"gurobi\"\n").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.solver.backend, SolverBackend::Gurobi);
        assert_eq!(config.solver.command(), "gurobi_cl");

        // An unset command is not written back, so it keeps following the backend
        let toml_str = config.to_toml().unwrap();
        assert!(!toml_str.contains("command"));
    }

    #[test]
    fn test_invalid_toml() {
        assert!(SummarizerConfig::from_toml("mode = \"sixgrams\"").is_err());
    }
}
