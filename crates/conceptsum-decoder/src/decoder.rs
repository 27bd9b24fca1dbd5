//! Core Decoder implementation

use crate::config::SummarizerConfig;
use crate::error::SummarizationError;
use conceptsum_domain::traits::{segment_document, SentenceSplitter, Tokenizer};
use conceptsum_domain::{RunId, Sentence, SentenceId, SummaryResult};
use conceptsum_extractor::{ConceptExtractor, ConceptInventory};
use conceptsum_ilp::{sentence_var, ExternalSolver, IlpModel, ModelBuilder, ModelStats, Solver};
use std::collections::BTreeSet;
use std::time::Instant;
use tracing::{debug, info};

/// Detailed outcome of summarizing one document
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryReport {
    /// Summary text or "no solution"
    pub result: SummaryResult,

    /// Selected sentence ids, ascending
    pub selected: Vec<SentenceId>,

    /// Total length of the selection in the configured unit
    pub total_length: u64,

    /// Objective value of the concepts actually covered by the selection
    pub covered_weight: f64,

    /// Model size, when a model was built
    pub stats: Option<ModelStats>,

    /// Wall-clock time spent, in milliseconds
    pub processing_time_ms: u64,
}

impl SummaryReport {
    fn no_solution(started: Instant) -> Self {
        Self {
            result: SummaryResult::NoSolution,
            selected: Vec::new(),
            total_length: 0,
            covered_weight: 0.0,
            stats: None,
            processing_time_ms: started.elapsed().as_millis() as u64,
        }
    }
}

/// The Decoder selects a budgeted, concept-covering subset of sentences
///
/// One call summarizes one document and keeps no state between calls, so a
/// decoder may be shared across threads when its solver allows it.
pub struct Decoder<S: Solver> {
    solver: S,
    config: SummarizerConfig,
}

impl Decoder<ExternalSolver> {
    /// Create a decoder backed by the configured external solver
    pub fn external(config: SummarizerConfig) -> Result<Self, SummarizationError> {
        let solver = ExternalSolver::new(config.solver.clone());
        Self::new(solver, config)
    }
}

impl<S: Solver> Decoder<S> {
    /// Create a decoder
    ///
    /// # Errors
    /// Returns [`SummarizationError::Config`] for an invalid configuration
    pub fn new(solver: S, config: SummarizerConfig) -> Result<Self, SummarizationError> {
        config.validate().map_err(SummarizationError::Config)?;
        Ok(Self { solver, config })
    }

    /// Active configuration
    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Underlying solver
    pub fn solver(&self) -> &S {
        &self.solver
    }

    fn builder(&self) -> ModelBuilder {
        ModelBuilder::new(self.config.length_unit).with_alpha(self.config.alpha)
    }

    /// Extract concepts and build the model without solving it
    ///
    /// Returns `None` when the document poses no optimization problem.
    pub fn build_model(
        &self,
        sentences: Vec<Sentence>,
        budget: u64,
    ) -> Result<Option<(IlpModel, ConceptInventory)>, SummarizationError> {
        if budget == 0 {
            return Err(SummarizationError::Config("budget must be greater than 0".to_string()));
        }
        let inventory = ConceptExtractor::new(self.config.mode).extract(sentences);
        let index = inventory.coverage_index();
        if inventory.sentences_with_concepts() == 0 || index.is_empty() {
            return Ok(None);
        }
        match self.builder().build(&inventory.sentences, &inventory.concepts, &index, budget) {
            Ok(model) => Ok(Some((model, inventory))),
            Err(e) => {
                debug!("No model built: {}", e);
                Ok(None)
            }
        }
    }

    /// Summarize pre-segmented sentences under `budget`
    pub fn summarize(
        &self,
        sentences: Vec<Sentence>,
        budget: u64,
    ) -> Result<SummaryResult, SummarizationError> {
        let run_id = RunId::for_current_process();
        self.summarize_detailed(sentences, budget, &run_id)
            .map(|report| report.result)
    }

    /// Segment raw text with the given collaborators, then summarize
    pub fn summarize_text<Sp, Tk>(
        &self,
        text: &str,
        splitter: &Sp,
        tokenizer: &Tk,
        budget: u64,
    ) -> Result<SummaryResult, SummarizationError>
    where
        Sp: SentenceSplitter + ?Sized,
        Tk: Tokenizer + ?Sized,
    {
        self.summarize(segment_document(text, splitter, tokenizer), budget)
    }

    /// Summarize and report the selection, naming artifacts after `run_id`
    ///
    /// An all-zero solution yields an empty summary, not an error. Solver
    /// failures are returned as errors; no fallback text is substituted.
    pub fn summarize_detailed(
        &self,
        sentences: Vec<Sentence>,
        budget: u64,
        run_id: &RunId,
    ) -> Result<SummaryReport, SummarizationError> {
        let started = Instant::now();
        let sentence_count = sentences.len();

        let Some((model, inventory)) = self.build_model(sentences, budget)? else {
            info!("No optimization problem for {} sentences, skipping solver", sentence_count);
            return Ok(SummaryReport::no_solution(started));
        };
        let stats = model.stats();

        let assignment = self.solver.solve(&model, run_id)?;

        let selected: BTreeSet<SentenceId> = assignment
            .selected_sentences()
            .into_iter()
            .filter(|id| model.declares(&sentence_var(*id)))
            .collect();
        let mut chosen: Vec<&Sentence> = inventory
            .sentences
            .iter()
            .filter(|s| selected.contains(&s.id()))
            .collect();
        chosen.sort_by_key(|s| s.id());

        let total_length: u64 = chosen.iter().map(|s| s.length(self.config.length_unit)).sum();
        if total_length > budget {
            return Err(SummarizationError::InfeasibleSolution {
                total: total_length,
                budget,
            });
        }

        let covered: BTreeSet<_> = chosen.iter().flat_map(|s| s.concepts().iter().copied()).collect();
        let covered_weight: f64 = covered
            .iter()
            .map(|&c| self.config.alpha * f64::from(inventory.concepts.weight(c)))
            .sum();

        let summary = chosen
            .iter()
            .map(|s| s.normalized())
            .collect::<Vec<_>>()
            .join(" ");

        info!(
            "Selected {} of {} sentences, length {}/{} {}, covered weight {}",
            chosen.len(),
            sentence_count,
            total_length,
            budget,
            self.config.length_unit,
            covered_weight
        );

        Ok(SummaryReport {
            result: SummaryResult::Summary(summary),
            selected: chosen.iter().map(|s| s.id()).collect(),
            total_length,
            covered_weight,
            stats: Some(stats),
            processing_time_ms: started.elapsed().as_millis() as u64,
        })
    }
}
