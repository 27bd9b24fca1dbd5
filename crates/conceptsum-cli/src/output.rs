//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use conceptsum_decoder::SummaryReport;
use conceptsum_domain::SummaryResult;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Counts for one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchStats {
    /// Documents read
    pub documents: usize,
    /// Documents with a summary (possibly empty)
    pub summarized: usize,
    /// Documents without an optimization problem
    pub no_solution: usize,
    /// Documents that failed and received the fallback
    pub failed: usize,
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a single-document summary report.
    pub fn format_report(&self, report: &SummaryReport) -> Result<String> {
        match self.format {
            OutputFormat::Text => Ok(self.format_report_text(report)),
            OutputFormat::Json => self.format_report_json(report),
            OutputFormat::Table => Ok(self.format_report_table(report)),
        }
    }

    fn format_report_text(&self, report: &SummaryReport) -> String {
        match &report.result {
            SummaryResult::Summary(text) => text.clone(),
            SummaryResult::NoSolution => self.warning("No solution: the document has no concepts"),
        }
    }

    fn format_report_json(&self, report: &SummaryReport) -> Result<String> {
        let stats = report.stats.map(|s| {
            serde_json::json!({
                "sentence_vars": s.sentence_vars,
                "concept_vars": s.concept_vars,
                "constraints": s.constraints,
            })
        });
        let value = serde_json::json!({
            "summary": report.result.as_text(),
            "selected": report.selected.iter().map(|id| id.value()).collect::<Vec<_>>(),
            "total_length": report.total_length,
            "covered_weight": report.covered_weight,
            "stats": stats,
            "processing_time_ms": report.processing_time_ms,
        });

        Ok(serde_json::to_string_pretty(&value)?)
    }

    fn format_report_table(&self, report: &SummaryReport) -> String {
        let summary = match &report.result {
            SummaryResult::Summary(text) => text.clone(),
            SummaryResult::NoSolution => "(no solution)".to_string(),
        };
        let selected = report
            .selected
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(", ");

        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        builder.push_record(["Summary".to_string(), summary]);
        builder.push_record(["Selected".to_string(), selected]);
        builder.push_record(["Length".to_string(), report.total_length.to_string()]);
        builder.push_record(["Covered weight".to_string(), format!("{:.2}", report.covered_weight)]);
        if let Some(stats) = report.stats {
            builder.push_record([
                "Model".to_string(),
                format!(
                    "{} sentence vars, {} concept vars, {} constraints",
                    stats.sentence_vars, stats.concept_vars, stats.constraints
                ),
            ]);
        }
        builder.push_record(["Time (ms)".to_string(), report.processing_time_ms.to_string()]);

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format batch counts.
    pub fn format_batch(&self, stats: &BatchStats) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "documents": stats.documents,
                "summarized": stats.summarized,
                "no_solution": stats.no_solution,
                "failed": stats.failed,
            }))?),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Documents", "Summarized", "No solution", "Failed"]);
                builder.push_record([
                    stats.documents.to_string(),
                    stats.summarized.to_string(),
                    stats.no_solution.to_string(),
                    stats.failed.to_string(),
                ]);
                let mut table = builder.build();
                table.with(Style::rounded());
                Ok(table.to_string())
            }
            OutputFormat::Text => {
                let message = format!(
                    "Summarized {} of {} document(s) ({} without solution, {} failed)",
                    stats.summarized, stats.documents, stats.no_solution, stats.failed
                );
                if stats.documents > 0 && stats.failed == stats.documents {
                    Ok(self.error(&message))
                } else if stats.failed > 0 {
                    Ok(self.warning(&message))
                } else {
                    Ok(self.success(&message))
                }
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}
