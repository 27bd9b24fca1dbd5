//! Integer linear program value type

use crate::solution::SolutionAssignment;
use conceptsum_domain::{ConceptId, SentenceId};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Tolerance used when checking constraints against an assignment
const FEASIBILITY_EPSILON: f64 = 1e-6;

/// Name of the decision variable for a sentence
pub fn sentence_var(id: SentenceId) -> String {
    format!("s{}", id.value())
}

/// Name of the indicator variable for a concept
pub fn concept_var(id: ConceptId) -> String {
    format!("c{}", id.value())
}

/// Parse a sentence variable name back into its sentence id
pub fn parse_sentence_var(name: &str) -> Option<SentenceId> {
    name.strip_prefix('s')?.parse().ok().map(SentenceId::new)
}

/// One `coefficient * variable` term
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    /// Coefficient
    pub coefficient: f64,
    /// Variable name
    pub variable: String,
}

/// A sum of terms
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinearExpr {
    terms: Vec<Term>,
}

impl LinearExpr {
    /// Create an empty expression
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a term
    pub fn with_term(mut self, coefficient: f64, variable: impl Into<String>) -> Self {
        self.push(coefficient, variable);
        self
    }

    /// Append a term in place
    pub fn push(&mut self, coefficient: f64, variable: impl Into<String>) {
        self.terms.push(Term {
            coefficient,
            variable: variable.into(),
        });
    }

    /// Terms in insertion order
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Whether the expression has no terms
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Evaluate against an assignment; absent variables count as zero
    pub fn evaluate(&self, assignment: &SolutionAssignment) -> f64 {
        self.terms
            .iter()
            .map(|t| t.coefficient * assignment.value_of(&t.variable) as f64)
            .sum()
    }
}

impl fmt::Display for LinearExpr {
    /// Renders `2 c0 + c1 - c2`: unit coefficients are omitted and the
    /// leading sign only appears when negative.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            let negative = term.coefficient < 0.0;
            let magnitude = term.coefficient.abs();
            match (i, negative) {
                (0, false) => {}
                (0, true) => write!(f, "- ")?,
                (_, false) => write!(f, " + ")?,
                (_, true) => write!(f, " - ")?,
            }
            if magnitude == 1.0 {
                write!(f, "{}", term.variable)?;
            } else {
                write!(f, "{} {}", magnitude, term.variable)?;
            }
        }
        Ok(())
    }
}

/// Constraint sense
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// `expr <= rhs`
    LessEqual,
    /// `expr >= rhs`
    GreaterEqual,
    /// `expr = rhs`
    Equal,
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Comparison::LessEqual => write!(f, "<="),
            Comparison::GreaterEqual => write!(f, ">="),
            Comparison::Equal => write!(f, "="),
        }
    }
}

/// A named linear constraint
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    /// Constraint name, unique within a model
    pub name: String,
    /// Left-hand side
    pub expr: LinearExpr,
    /// Sense
    pub comparison: Comparison,
    /// Right-hand side constant
    pub rhs: f64,
}

impl Constraint {
    /// Create a constraint
    pub fn new(name: impl Into<String>, expr: LinearExpr, comparison: Comparison, rhs: f64) -> Self {
        Self {
            name: name.into(),
            expr,
            comparison,
            rhs,
        }
    }

    /// Whether an assignment satisfies this constraint
    pub fn is_satisfied(&self, assignment: &SolutionAssignment) -> bool {
        let lhs = self.expr.evaluate(assignment);
        match self.comparison {
            Comparison::LessEqual => lhs <= self.rhs + FEASIBILITY_EPSILON,
            Comparison::GreaterEqual => lhs + FEASIBILITY_EPSILON >= self.rhs,
            Comparison::Equal => (lhs - self.rhs).abs() <= FEASIBILITY_EPSILON,
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} {} {}", self.name, self.expr, self.comparison, self.rhs)
    }
}

/// Size summary of a model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModelStats {
    /// Number of sentence decision variables
    pub sentence_vars: usize,
    /// Number of concept indicator variables
    pub concept_vars: usize,
    /// Number of constraints
    pub constraints: usize,
}

/// A maximization ILP over binary and integer variables
///
/// Built once and never mutated. Constraints and variable domains are kept
/// ordered by name so serialization is deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct IlpModel {
    objective_name: String,
    objective: LinearExpr,
    constraints: BTreeMap<String, Constraint>,
    binaries: BTreeSet<String>,
    integers: BTreeSet<String>,
}

impl IlpModel {
    /// Assemble a model
    ///
    /// A constraint whose name repeats an earlier one replaces it.
    pub fn new(
        objective_name: impl Into<String>,
        objective: LinearExpr,
        constraints: impl IntoIterator<Item = Constraint>,
        binaries: impl IntoIterator<Item = String>,
        integers: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            objective_name: objective_name.into(),
            objective,
            constraints: constraints.into_iter().map(|c| (c.name.clone(), c)).collect(),
            binaries: binaries.into_iter().collect(),
            integers: integers.into_iter().collect(),
        }
    }

    /// Name of the objective row
    pub fn objective_name(&self) -> &str {
        &self.objective_name
    }

    /// Objective expression (maximized)
    pub fn objective(&self) -> &LinearExpr {
        &self.objective
    }

    /// Constraints in name order
    pub fn constraints(&self) -> impl Iterator<Item = &Constraint> + '_ {
        self.constraints.values()
    }

    /// Look up a constraint by name
    pub fn constraint(&self, name: &str) -> Option<&Constraint> {
        self.constraints.get(name)
    }

    /// Binary variables in name order
    pub fn binaries(&self) -> impl Iterator<Item = &str> + '_ {
        self.binaries.iter().map(String::as_str)
    }

    /// General integer variables in name order
    pub fn integers(&self) -> impl Iterator<Item = &str> + '_ {
        self.integers.iter().map(String::as_str)
    }

    /// Whether a variable is declared binary or integer
    pub fn declares(&self, variable: &str) -> bool {
        self.binaries.contains(variable) || self.integers.contains(variable)
    }

    /// Total number of declared variables
    pub fn variable_count(&self) -> usize {
        self.binaries.len() + self.integers.len()
    }

    /// Objective value of an assignment
    pub fn objective_value(&self, assignment: &SolutionAssignment) -> f64 {
        self.objective.evaluate(assignment)
    }

    /// Whether an assignment satisfies every constraint and domain
    pub fn is_feasible(&self, assignment: &SolutionAssignment) -> bool {
        let domains_ok = self
            .binaries
            .iter()
            .all(|v| matches!(assignment.value_of(v), 0 | 1));
        domains_ok && self.constraints.values().all(|c| c.is_satisfied(assignment))
    }

    /// Names of constraints violated by an assignment
    pub fn violations(&self, assignment: &SolutionAssignment) -> Vec<&str> {
        self.constraints
            .values()
            .filter(|c| !c.is_satisfied(assignment))
            .map(|c| c.name.as_str())
            .collect()
    }

    /// Count variables and constraints
    pub fn stats(&self) -> ModelStats {
        let sentence_vars = self
            .binaries
            .iter()
            .filter(|v| parse_sentence_var(v).is_some())
            .count();
        ModelStats {
            sentence_vars,
            concept_vars: self.binaries.len() - sentence_vars,
            constraints: self.constraints.len(),
        }
    }
}
