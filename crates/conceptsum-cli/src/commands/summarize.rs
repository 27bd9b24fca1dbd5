//! Summarize command implementation.

use super::{read_document, segment};
use crate::error::Result;
use crate::output::Formatter;
use conceptsum_decoder::Decoder;
use conceptsum_domain::RunId;
use conceptsum_ilp::Solver;
use std::path::Path;

/// Execute the summarize command.
pub fn execute_summarize<S: Solver>(
    input: Option<&Path>,
    decoder: &Decoder<S>,
    formatter: &Formatter,
) -> Result<()> {
    let text = read_document(input)?;
    let sentences = segment(&text);
    let budget = decoder.config().budget;

    let report = decoder.summarize_detailed(sentences, budget, &RunId::for_current_process())?;

    println!("{}", formatter.format_report(&report)?);
    Ok(())
}
