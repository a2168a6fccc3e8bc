//! Transcode logic
//!
//! Reads CSV records, cleans each field and writes TSV records in one pass.

use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use super::cleanup::clean_record;
use super::newline::UniversalNewlines;
use super::types::{Result, TranscodeError, TranscodeStats, EXCEL, EXCEL_TAB};

/// Transcode CSV from `input` into TSV on `output`.
///
/// # Arguments
/// * `input` - CSV source in the excel dialect
/// * `output` - TSV sink; flushed before returning
///
/// # Returns
/// * `TranscodeStats` with the number of rows and fields written
///
/// # Behavior
/// - Field counts may differ between rows
/// - Each blank input line is written as an empty output line
/// - The first read or write failure aborts the run
pub fn transcode<R: Read, W: Write>(input: R, output: W) -> Result<TranscodeStats> {
    let mut reader = EXCEL
        .reader_builder()
        .from_reader(UniversalNewlines::new(input));
    let mut writer = EXCEL_TAB.writer_builder().from_writer(output);
    let mut stats = TranscodeStats::default();

    // Line where the previous record ended. The reader skips blank lines,
    // so any newline not accounted for by a record is one.
    let mut line = reader.position().line();
    let mut record = csv::StringRecord::new();

    while reader.read_record(&mut record).map_err(read_error)? {
        let end = reader.position().line();
        let embedded: u64 = record.iter().map(|f| f.matches('\n').count() as u64).sum();
        let blanks = end.saturating_sub(line).saturating_sub(embedded + 1);
        line = end;

        writer = write_blank_lines(writer, blanks, &mut stats)?;

        let cleaned = clean_record(&record);
        writer
            .write_record(&cleaned)
            .map_err(|e| TranscodeError::WriteError {
                message: e.to_string(),
            })?;

        stats.rows += 1;
        stats.fields += cleaned.len();
    }

    let trailing = reader.position().line().saturating_sub(line);
    writer = write_blank_lines(writer, trailing, &mut stats)?;

    writer.flush().map_err(|e| TranscodeError::WriteError {
        message: e.to_string(),
    })?;

    tracing::debug!(
        "Transcode complete: {} rows, {} fields",
        stats.rows,
        stats.fields
    );

    Ok(stats)
}

/// Write `count` empty lines straight to the sink.
///
/// The csv writer renders an empty record as `""`, so the buffered records
/// are flushed out and the terminators are written to the inner writer.
fn write_blank_lines<W: Write>(
    writer: csv::Writer<W>,
    count: u64,
    stats: &mut TranscodeStats,
) -> Result<csv::Writer<W>> {
    if count == 0 {
        return Ok(writer);
    }

    let mut inner = writer.into_inner().map_err(|e| TranscodeError::WriteError {
        message: e.error().to_string(),
    })?;

    for _ in 0..count {
        inner
            .write_all(EXCEL_TAB.terminator.as_bytes())
            .map_err(|e| TranscodeError::WriteError {
                message: e.to_string(),
            })?;
        stats.rows += 1;
    }

    Ok(EXCEL_TAB.writer_builder().from_writer(inner))
}

/// Open the CSV file at `path` and transcode it into `output`.
pub fn transcode_path<W: Write>(path: &Path, output: W) -> Result<TranscodeStats> {
    let file = File::open(path).map_err(|e| TranscodeError::OpenError {
        path: path.display().to_string(),
        source: e,
    })?;

    tracing::debug!("Reading CSV from {}", path.display());
    transcode(BufReader::new(file), output)
}

/// Describe a reader failure, naming the record where it happened.
fn read_error(e: csv::Error) -> TranscodeError {
    let message = match e.position() {
        Some(pos) => format!("record {} (line {}): {}", pos.record() + 1, pos.line(), e),
        None => e.to_string(),
    };
    TranscodeError::ReadError { message }
}
