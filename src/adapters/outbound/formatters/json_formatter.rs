use crate::dependency_report::domain::Entry;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use std::io::Write;

/// JsonFormatter adapter producing a pretty-printed array of entry objects
#[derive(Debug, Default)]
pub struct JsonFormatter {
    entries: Vec<Entry>,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReportFormatter for JsonFormatter {
    fn add_entry(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    fn entry_count(&self) -> usize {
        self.entries.len()
    }

    fn format_name(&self) -> &'static str {
        "json"
    }

    fn write_to(&self, sink: &mut dyn Write) -> Result<()> {
        let document = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| anyhow::anyhow!("could not encode report entries to JSON: {}", e))?;

        sink.write_all(document.as_bytes())
            .and_then(|_| sink.write_all(b"\n"))
            .map_err(|e| anyhow::anyhow!("could not write JSON: {}", e))?;
        Ok(())
    }
}
