//! Output module for the quote record stream
//!
//! Records are written one JSON object per line, no enclosing array and no
//! trailing comma. Whatever buffering the sink applies is the only flush
//! guarantee the stream gets: an aborted run keeps its already-written
//! lines and stops mid-stream.

use crate::record::QuoteRecord;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur while writing records
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Writes one record as a single JSON line to the sink
pub fn write_record<W: Write>(sink: &mut W, record: &QuoteRecord) -> OutputResult<()> {
    serde_json::to_writer(&mut *sink, record)?;
    writeln!(sink)?;
    Ok(())
}
