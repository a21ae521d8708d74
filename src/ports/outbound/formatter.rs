use crate::dependency_report::domain::Entry;
use crate::shared::Result;
use std::io::Write;

/// ReportFormatter port for encoding report entries
///
/// Implementations buffer entries and serialize them in one go
/// (CSV, JSON, YAML).
pub trait ReportFormatter {
    /// Buffers one entry; may be called any number of times before `write`
    fn add_entry(&mut self, entry: Entry);

    /// Number of buffered entries
    fn entry_count(&self) -> usize;

    /// Short format name used in log messages
    fn format_name(&self) -> &'static str;

    /// Serializes every buffered entry, in accumulation order, to `sink`
    ///
    /// # Errors
    /// Returns an error if encoding fails or the sink rejects a write. The sink
    /// keeps whatever was written before the failure.
    fn write_to(&self, sink: &mut dyn Write) -> Result<()>;

    /// Best-effort variant of `write_to`: failures are logged, never raised
    fn write(&self, sink: &mut dyn Write) {
        if let Err(e) = self.write_to(sink) {
            tracing::error!(
                format = self.format_name(),
                entries = self.entry_count(),
                error = %e,
                "could not write report"
            );
        }
    }
}
