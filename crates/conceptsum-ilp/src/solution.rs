//! Solver solutions and result-file parsing

use crate::error::SolverError;
use crate::model::{parse_sentence_var, IlpModel};
use conceptsum_domain::SentenceId;
use std::collections::BTreeMap;

/// Solved value of every declared variable reported by the solver
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolutionAssignment {
    values: BTreeMap<String, i64>,
}

impl SolutionAssignment {
    /// Create an empty assignment
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable's value
    pub fn insert(&mut self, variable: impl Into<String>, value: i64) {
        self.values.insert(variable.into(), value);
    }

    /// Value of a variable, if reported
    pub fn get(&self, variable: &str) -> Option<i64> {
        self.values.get(variable).copied()
    }

    /// Value of a variable, zero when absent
    pub fn value_of(&self, variable: &str) -> i64 {
        self.get(variable).unwrap_or(0)
    }

    /// Number of reported variables
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing was reported
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate `(variable, value)` in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
        self.values.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Sentences whose decision variable equals 1, ascending by id
    pub fn selected_sentences(&self) -> Vec<SentenceId> {
        let mut selected: Vec<SentenceId> = self
            .values
            .iter()
            .filter(|(_, &value)| value == 1)
            .filter_map(|(name, _)| parse_sentence_var(name))
            .collect();
        selected.sort_unstable();
        selected
    }
}

impl FromIterator<(String, i64)> for SolutionAssignment {
    fn from_iter<I: IntoIterator<Item = (String, i64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Parse a numeric cell, rounding solver output such as `1.0000000001`
fn parse_value(cell: &str) -> Option<i64> {
    if let Ok(value) = cell.parse::<i64>() {
        return Some(value);
    }
    let value: f64 = cell.parse().ok()?;
    if value.is_finite() {
        Some(value.round() as i64)
    } else {
        None
    }
}

/// Fail when the solver reported nothing for a model that has variables
fn ensure_reported(
    assignment: SolutionAssignment,
    model: &IlpModel,
) -> Result<SolutionAssignment, SolverError> {
    if assignment.is_empty() && model.variable_count() > 0 {
        return Err(SolverError::MalformedOutput(
            "no declared variable found in solver output".to_string(),
        ));
    }
    Ok(assignment)
}

/// Parse a GLPK printable solution (`glpsol -o`)
///
/// Column rows read `No. name * activity lower upper`; only rows with at
/// least five fields naming a declared variable are used, so objective
/// and constraint rows are ignored.
pub fn parse_glpk(output: &str, model: &IlpModel) -> Result<SolutionAssignment, SolverError> {
    let mut assignment = SolutionAssignment::new();

    for line in output.lines() {
        let trimmed = line.trim();
        if let Some(status) = trimmed.strip_prefix("Status:") {
            let status = status.trim();
            if status.contains("UNDEFINED") || status.contains("EMPTY") {
                return Err(SolverError::NoSolution(status.to_string()));
            }
            continue;
        }

        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        if fields.len() < 5 || !model.declares(fields[1]) {
            continue;
        }
        let value = parse_value(fields[3]).ok_or_else(|| {
            SolverError::MalformedOutput(format!(
                "unreadable activity '{}' for {}",
                fields[3], fields[1]
            ))
        })?;
        assignment.insert(fields[1], value);
    }

    ensure_reported(assignment, model)
}

/// Parse a Gurobi result file (`ResultFile=*.sol`)
///
/// Rows of exactly two fields `name value` naming a declared variable are
/// used; values are rounded to the nearest integer.
pub fn parse_gurobi(output: &str, model: &IlpModel) -> Result<SolutionAssignment, SolverError> {
    let mut assignment = SolutionAssignment::new();

    for line in output.lines() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 2 || !model.declares(fields[0]) {
            continue;
        }
        let value = parse_value(fields[1]).ok_or_else(|| {
            SolverError::MalformedOutput(format!(
                "unreadable value '{}' for {}",
                fields[1], fields[0]
            ))
        })?;
        assignment.insert(fields[0], value);
    }

    ensure_reported(assignment, model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LinearExpr;

    fn model() -> IlpModel {
        IlpModel::new(
            "score",
            LinearExpr::new().with_term(2.0, "c0"),
            Vec::new(),
            ["c0", "s0", "s1", "s2"].iter().map(|s| s.to_string()),
            Vec::new(),
        )
    }

    const GLPK_OUTPUT: &str = "\
Problem:
Rows:       3
Columns:    4 (4 integer, 4 binary)
Non-zeros:  6
Status:     INTEGER OPTIMAL
Objective:  score = 2 (MAXimum)

   No.   Row name        Activity     Lower bound   Upper bound
------ ------------    ------------- ------------- -------------
     1 score                       2
     2 index_0                     1            -0
     3 length_1                   10                          10

   No. Column name       Activity     Lower bound   Upper bound
------ ------------    ------------- ------------- -------------
     1 c0           *              1             0             1
     2 s0           *              1             0             1
     3 s1           *              1             0             1
     4 s2           *              0             0             1

Integer feasibility conditions:
";

    #[test]
    fn test_parse_glpk_columns() {
        let assignment = parse_glpk(GLPK_OUTPUT, &model()).unwrap();
        assert_eq!(assignment.len(), 4);
        assert_eq!(assignment.get("c0"), Some(1));
        assert_eq!(assignment.get("s2"), Some(0));
        assert_eq!(
            assignment.selected_sentences(),
            vec![SentenceId::new(0), SentenceId::new(1)]
        );
    }

    #[test]
    fn test_parse_glpk_ignores_rows_and_undeclared() {
        let output = "     1 score   2  x  y\n     9 aux7 *  1  0  1\n     2 s0 * 1 0 1\n";
        let assignment = parse_glpk(output, &model()).unwrap();
        assert_eq!(assignment.len(), 1);
        assert_eq!(assignment.get("aux7"), None);
    }

    #[test]
    fn test_parse_glpk_empty_status() {
        let output = "Status:     INTEGER EMPTY\n";
        assert!(matches!(parse_glpk(output, &model()), Err(SolverError::NoSolution(_))));
    }

    #[test]
    fn test_parse_glpk_no_columns_is_malformed() {
        assert!(matches!(
            parse_glpk("garbage\n", &model()),
            Err(SolverError::MalformedOutput(_))
        ));
    }

    #[test]
    fn test_parse_glpk_bad_activity() {
        let output = "     2 s0 * one 0 1\n";
        assert!(matches!(
            parse_glpk(output, &model()),
            Err(SolverError::MalformedOutput(_))
        ));
    }

    #[test]
    fn test_parse_gurobi() {
        let output = "# Solution for model score\n# Objective value = 2\ns0 1\ns1 0.9999999\nc0 1\naux 1\n";
        let assignment = parse_gurobi(output, &model()).unwrap();
        assert_eq!(assignment.get("s1"), Some(1));
        assert_eq!(assignment.get("aux"), None);
        assert_eq!(assignment.len(), 3);
    }

    #[test]
    fn test_all_zero_selects_nothing() {
        let assignment: SolutionAssignment =
            vec![("s0".to_string(), 0), ("s1".to_string(), 0)].into_iter().collect();
        assert!(assignment.selected_sentences().is_empty());
    }

    #[test]
    fn test_selected_sentences_numeric_order() {
        let assignment: SolutionAssignment = vec![
            ("s10".to_string(), 1),
            ("s2".to_string(), 1),
            ("c1".to_string(), 1),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            assignment.selected_sentences(),
            vec![SentenceId::new(2), SentenceId::new(10)]
        );
    }
}
