//! LP text serialization

use crate::model::IlpModel;
use crate::solver::SolverBackend;
use std::fmt::Write;

/// Serialize a model in the LP dialect understood by `backend`
///
/// Sections appear as objective, constraints, binaries, integers, each in
/// name order, so the same model always produces the same bytes.
pub fn to_lp(model: &IlpModel, backend: SolverBackend) -> String {
    let mut out = String::new();

    if !model.objective().is_empty() {
        out.push_str("Maximize\n");
        match backend {
            SolverBackend::Glpk => {
                let _ = writeln!(out, "{}: {}", model.objective_name(), model.objective());
            }
            SolverBackend::Gurobi => {
                let _ = writeln!(out, " {}", model.objective());
            }
        }
    }

    let mut constraints = model.constraints().peekable();
    if constraints.peek().is_some() {
        out.push_str("\nSubject To\n");
        for constraint in constraints {
            let _ = writeln!(out, "{}", constraint);
        }
    }

    let mut binaries = model.binaries().peekable();
    if binaries.peek().is_some() {
        out.push_str(match backend {
            SolverBackend::Glpk => "\nBinary\n",
            SolverBackend::Gurobi => "\nBinaries\n",
        });
        for variable in binaries {
            out.push_str(variable);
            out.push('\n');
        }
    }

    let mut integers = model.integers().peekable();
    if integers.peek().is_some() {
        out.push_str(match backend {
            SolverBackend::Glpk => "\nInteger\n",
            SolverBackend::Gurobi => "\nGeneral\n",
        });
        for variable in integers {
            out.push_str(variable);
            out.push('\n');
        }
    }

    out.push_str("End\n");
    out
}

impl std::fmt::Display for IlpModel {
    /// CPLEX LP text as read by `glpsol --cpxlp`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&to_lp(self, SolverBackend::Glpk))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Comparison, Constraint, LinearExpr};

    fn model() -> IlpModel {
        IlpModel::new(
            "score",
            LinearExpr::new().with_term(2.0, "c0"),
            vec![
                Constraint::new(
                    "length_1",
                    LinearExpr::new().with_term(5.0, "s0"),
                    Comparison::LessEqual,
                    10.0,
                ),
                Constraint::new(
                    "index_0",
                    LinearExpr::new().with_term(1.0, "s0").with_term(-1.0, "c0"),
                    Comparison::GreaterEqual,
                    0.0,
                ),
            ],
            vec!["s0".to_string(), "c0".to_string()],
            vec!["n".to_string()],
        )
    }

    #[test]
    fn test_glpk_text() {
        let expected = "\
Maximize
score: 2 c0

Subject To
index_0: s0 - c0 >= 0
length_1: 5 s0 <= 10

Binary
c0
s0

Integer
n
End
";
        assert_eq!(to_lp(&model(), SolverBackend::Glpk), expected);
        assert_eq!(model().to_string(), expected);
    }

    #[test]
    fn test_gurobi_text() {
        let text = to_lp(&model(), SolverBackend::Gurobi);
        assert!(text.starts_with("Maximize\n 2 c0\n"));
        assert!(text.contains("\nBinaries\nc0\ns0\n"));
        assert!(text.contains("\nGeneral\nn\n"));
        assert!(text.ends_with("End\n"));
    }

    #[test]
    fn test_empty_sections_omitted() {
        let empty = IlpModel::new("score", LinearExpr::new(), Vec::new(), Vec::new(), Vec::new());
        assert_eq!(to_lp(&empty, SolverBackend::Glpk), "End\n");
    }
}
