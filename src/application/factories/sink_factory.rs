use crate::adapters::outbound::filesystem::{FileSink, StdoutSink};
use crate::shared::Result;
use std::io::Write;
use std::path::PathBuf;

/// Sink type enumeration for factory pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkType {
    Stdout,
    File(PathBuf),
}

impl SinkType {
    /// `None` (no `--out-file`) means stdout
    pub fn from_out_file(out_file: Option<PathBuf>) -> Self {
        match out_file {
            Some(path) => SinkType::File(path),
            None => SinkType::Stdout,
        }
    }
}

/// Factory for opening the byte sink a report is written to
pub struct SinkFactory;

impl SinkFactory {
    /// Opens the sink; file sinks are created immediately
    ///
    /// # Errors
    /// `ReportError::SinkOpen` or a security error when the file cannot be
    /// created.
    pub fn open(sink_type: &SinkType) -> Result<Box<dyn Write>> {
        match sink_type {
            SinkType::Stdout => StdoutSink::new().open(),
            SinkType::File(path) => FileSink::new(path.clone()).open(),
        }
    }
}
