//! Summary results and document records

/// Outcome of summarizing one document
///
/// Either a summary string or an explicit "no solution" marker, never both.
/// An empty string is a valid summary: it means the solver selected nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryResult {
    /// Selected sentences joined in document order
    Summary(String),
    /// No optimization problem existed for this document
    NoSolution,
}

impl SummaryResult {
    /// Summary text, if any
    pub fn as_text(&self) -> Option<&str> {
        match self {
            SummaryResult::Summary(text) => Some(text),
            SummaryResult::NoSolution => None,
        }
    }

    /// Whether this is the "no solution" marker
    pub fn is_no_solution(&self) -> bool {
        matches!(self, SummaryResult::NoSolution)
    }

    /// Convert into an optional summary string
    pub fn into_option(self) -> Option<String> {
        match self {
            SummaryResult::Summary(text) => Some(text),
            SummaryResult::NoSolution => None,
        }
    }
}

/// A document as exchanged with dataset and evaluation collaborators
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DocumentRecord {
    /// Document identifier
    #[cfg_attr(feature = "serde", serde(default))]
    pub id: String,

    /// Full document text
    pub text: String,

    /// Reference summary, when the dataset carries one
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub summary: Option<String>,
}
