//! Reduction of concept-coverage summarization to an ILP

use crate::error::IlpError;
use crate::model::{concept_var, sentence_var, Comparison, Constraint, IlpModel, LinearExpr};
use conceptsum_domain::{ConceptTable, LengthUnit, Sentence};
use conceptsum_extractor::CoverageIndex;
use tracing::debug;

/// Name of the objective row
pub const OBJECTIVE_NAME: &str = "score";

/// Builds the maximum-coverage ILP for one document
///
/// - one binary `s<i>` per sentence that carries concepts
/// - one binary `c<k>` per concept with at least one referencing sentence
/// - objective: maximize `Σ alpha · weight(k) · c<k>`
/// - `index_<n>`: `Σ s<i> - c<k> >= 0` over sentences containing `k`
/// - `length_<n>`: `Σ length(i) · s<i> <= budget`
///
/// Concepts are never forced to be covered. Sentences without concepts
/// cannot raise the objective and get no variable.
#[derive(Debug, Clone, Copy)]
pub struct ModelBuilder {
    length_unit: LengthUnit,
    alpha: f64,
}

impl Default for ModelBuilder {
    fn default() -> Self {
        Self::new(LengthUnit::default())
    }
}

impl ModelBuilder {
    /// Create a builder measuring lengths in `length_unit`
    pub fn new(length_unit: LengthUnit) -> Self {
        Self {
            length_unit,
            alpha: 1.0,
        }
    }

    /// Scale every objective coefficient
    ///
    /// Changes the objective's magnitude, never the optimal selection.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Build the model
    ///
    /// # Errors
    /// Returns [`IlpError::InfeasibleInput`] when there are no sentences or
    /// no eligible concepts; such problems are never sent to a solver.
    pub fn build(
        &self,
        sentences: &[Sentence],
        concepts: &ConceptTable,
        index: &CoverageIndex,
        budget: u64,
    ) -> Result<IlpModel, IlpError> {
        if sentences.is_empty() {
            return Err(IlpError::InfeasibleInput("document has no sentences".to_string()));
        }
        if index.is_empty() {
            return Err(IlpError::InfeasibleInput("document has no eligible concepts".to_string()));
        }

        let mut binaries = Vec::new();
        let mut objective = LinearExpr::new();
        let mut constraints = Vec::new();

        for (concept, referencing) in index.iter() {
            if referencing.is_empty() {
                continue;
            }
            let var = concept_var(concept);
            objective.push(self.alpha * f64::from(concepts.weight(concept)), var.clone());

            let mut coverage = LinearExpr::new();
            for &sentence in referencing {
                coverage.push(1.0, sentence_var(sentence));
            }
            coverage.push(-1.0, var.clone());
            constraints.push(Constraint::new(
                format!("index_{}", constraints.len()),
                coverage,
                Comparison::GreaterEqual,
                0.0,
            ));
            binaries.push(var);
        }

        let mut length = LinearExpr::new();
        for sentence in sentences.iter().filter(|s| s.has_concepts()) {
            let var = sentence_var(sentence.id());
            length.push(sentence.length(self.length_unit) as f64, var.clone());
            binaries.push(var);
        }
        constraints.push(Constraint::new(
            format!("length_{}", constraints.len()),
            length,
            Comparison::LessEqual,
            budget as f64,
        ));

        let model = IlpModel::new(OBJECTIVE_NAME, objective, constraints, binaries, Vec::new());
        let stats = model.stats();
        debug!(
            "Built model: {} sentence vars, {} concept vars, {} constraints, budget {} {}",
            stats.sentence_vars, stats.concept_vars, stats.constraints, budget, self.length_unit
        );
        Ok(model)
    }
}
