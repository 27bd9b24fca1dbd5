//! JSONL dataset reading and summary writing.

use crate::error::{CliError, Result};
use conceptsum_domain::DocumentRecord;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// First two bytes of every gzip stream
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// One line of a summaries file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemRecord {
    /// Identifier of the summarized document
    pub id: String,

    /// System summary, `null` when none was produced
    pub system: Option<String>,
}

/// Read one [`DocumentRecord`] per non-blank line.
pub fn read_records<R: BufRead>(reader: R) -> Result<Vec<DocumentRecord>> {
    let mut records = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record: DocumentRecord = serde_json::from_str(&line).map_err(|e| {
            CliError::InvalidInput(format!("line {}: {}", index + 1, e))
        })?;
        records.push(record);
    }

    Ok(records)
}

/// Read a dataset file, decompressing it when it is gzipped.
///
/// Compression is detected from the content, not the file name.
pub fn open_records(path: &Path) -> Result<Vec<DocumentRecord>> {
    let mut reader = BufReader::new(File::open(path)?);
    let gzipped = reader.fill_buf()?.starts_with(&GZIP_MAGIC);

    if gzipped {
        read_records(BufReader::new(GzDecoder::new(reader)))
    } else {
        read_records(reader)
    }
}

/// Output sink for a summaries file, gzipped when the name ends in `.gz`.
pub enum SummaryWriter {
    /// Plain JSONL
    Plain(BufWriter<File>),
    /// Gzip-compressed JSONL
    Gzip(GzEncoder<BufWriter<File>>),
}

impl SummaryWriter {
    /// Create (or truncate) the summaries file at `path`.
    pub fn create(path: &Path) -> Result<Self> {
        let file = BufWriter::new(File::create(path)?);
        if path.extension().is_some_and(|ext| ext == "gz") {
            Ok(SummaryWriter::Gzip(GzEncoder::new(file, Compression::default())))
        } else {
            Ok(SummaryWriter::Plain(file))
        }
    }

    /// Flush everything, writing the gzip trailer when compressing.
    pub fn finish(self) -> Result<()> {
        let mut file = match self {
            SummaryWriter::Plain(file) => file,
            SummaryWriter::Gzip(encoder) => encoder.finish()?,
        };
        file.flush()?;
        Ok(())
    }
}

impl Write for SummaryWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            SummaryWriter::Plain(file) => file.write(buf),
            SummaryWriter::Gzip(encoder) => encoder.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            SummaryWriter::Plain(file) => file.flush(),
            SummaryWriter::Gzip(encoder) => encoder.flush(),
        }
    }
}

/// Write one JSON object per line.
pub fn write_record<W: Write>(writer: &mut W, record: &SystemRecord) -> Result<()> {
    serde_json::to_writer(&mut *writer, record)?;
    writer.write_all(b"\n")?;
    Ok(())
}
