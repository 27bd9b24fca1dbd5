//! Model command implementation.

use super::{read_document, segment};
use crate::error::Result;
use crate::output::Formatter;
use conceptsum_decoder::Decoder;
use conceptsum_ilp::{to_lp, Solver};
use std::path::Path;

/// Execute the model command.
///
/// Prints the LP text in the configured solver's dialect. No solver runs.
pub fn execute_model<S: Solver>(
    input: Option<&Path>,
    decoder: &Decoder<S>,
    formatter: &Formatter,
) -> Result<()> {
    let text = read_document(input)?;
    match render_model(&text, decoder)? {
        Some(lp) => print!("{}", lp),
        None => eprintln!("{}", formatter.warning("No model: the document has no concepts")),
    }
    Ok(())
}

/// Build and serialize the model for `text`, if there is one.
pub fn render_model<S: Solver>(text: &str, decoder: &Decoder<S>) -> Result<Option<String>> {
    let config = decoder.config();
    let model = decoder.build_model(segment(text), config.budget)?;
    Ok(model.map(|(model, _)| to_lp(&model, config.solver.backend)))
}
