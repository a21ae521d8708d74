use crate::dependency_report::domain::Entry;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use std::io::Write;

/// YamlFormatter adapter producing a sequence of `parent/package/license` mappings
#[derive(Debug, Default)]
pub struct YamlFormatter {
    entries: Vec<Entry>,
}

impl YamlFormatter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReportFormatter for YamlFormatter {
    fn add_entry(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    fn entry_count(&self) -> usize {
        self.entries.len()
    }

    fn format_name(&self) -> &'static str {
        "yaml"
    }

    fn write_to(&self, sink: &mut dyn Write) -> Result<()> {
        let document = serde_yaml_ng::to_string(&self.entries)
            .map_err(|e| anyhow::anyhow!("could not encode report entries to YAML: {}", e))?;

        sink.write_all(document.as_bytes())
            .map_err(|e| anyhow::anyhow!("could not write YAML: {}", e))?;
        Ok(())
    }
}
