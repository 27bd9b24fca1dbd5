//! Batch command implementation.

use super::segment;
use crate::cli::FallbackArg;
use crate::dataset::{open_records, write_record, SummaryWriter, SystemRecord};
use crate::error::Result;
use crate::output::{BatchStats, Formatter};
use conceptsum_decoder::Decoder;
use conceptsum_domain::{DocumentRecord, RunId, SummaryResult};
use conceptsum_ilp::Solver;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info, warn};

/// Execute the batch command.
///
/// Gzipped datasets are read transparently. A summaries path ending in
/// `.gz` is written compressed.
pub fn execute_batch<S: Solver>(
    dataset: &Path,
    summaries: &Path,
    fallback: FallbackArg,
    decoder: &Decoder<S>,
    formatter: &Formatter,
) -> Result<()> {
    let records = open_records(dataset)?;
    info!("Read {} document(s) from {}", records.len(), dataset.display());

    let mut writer = SummaryWriter::create(summaries)?;
    let stats = run_batch(&records, &mut writer, fallback, decoder)?;
    writer.finish()?;

    println!("{}", formatter.format_batch(&stats)?);
    Ok(())
}

/// Summarize `records` one after another, writing one line per record.
///
/// A document that fails gets the fallback text and the run continues.
/// Only write failures end the run early.
pub fn run_batch<S: Solver, W: Write>(
    records: &[DocumentRecord],
    writer: &mut W,
    fallback: FallbackArg,
    decoder: &Decoder<S>,
) -> Result<BatchStats> {
    let budget = decoder.config().budget;
    let mut stats = BatchStats {
        documents: records.len(),
        ..BatchStats::default()
    };

    for record in records {
        let run_id = RunId::for_current_process();
        let system = match decoder.summarize_detailed(segment(&record.text), budget, &run_id) {
            Ok(report) => match report.result {
                SummaryResult::Summary(text) => {
                    stats.summarized += 1;
                    Some(text)
                }
                SummaryResult::NoSolution => {
                    debug!("Document {:?} has no concepts", record.id);
                    stats.no_solution += 1;
                    None
                }
            },
            Err(e) => {
                warn!("Document {:?} failed, writing {:?} fallback: {}", record.id, fallback, e);
                stats.failed += 1;
                fallback_text(fallback, record)
            }
        };

        write_record(
            writer,
            &SystemRecord {
                id: record.id.clone(),
                system,
            },
        )?;
    }

    Ok(stats)
}

fn fallback_text(fallback: FallbackArg, record: &DocumentRecord) -> Option<String> {
    match fallback {
        FallbackArg::Original => Some(record.text.clone()),
        FallbackArg::Empty => Some(String::new()),
        FallbackArg::Null => None,
    }
}
