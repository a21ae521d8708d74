use crate::dependency_report::domain::Entry;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use std::io::Write;

const CSV_HEADER: &str = "Parent,Package,License";

/// CsvFormatter adapter producing one comma-joined line per entry
///
/// Fields are written verbatim. A comma inside a package or license name
/// is not escaped and will shift the columns of that line.
#[derive(Debug, Default)]
pub struct CsvFormatter {
    lines: Vec<String>,
}

impl CsvFormatter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReportFormatter for CsvFormatter {
    fn add_entry(&mut self, entry: Entry) {
        self.lines.push(format!(
            "{},{},{}\n",
            entry.parent, entry.package, entry.license
        ));
    }

    fn entry_count(&self) -> usize {
        self.lines.len()
    }

    fn format_name(&self) -> &'static str {
        "csv"
    }

    fn write_to(&self, sink: &mut dyn Write) -> Result<()> {
        writeln!(sink, "{}", CSV_HEADER)
            .map_err(|e| anyhow::anyhow!("could not write CSV header: {}", e))?;

        for line in &self.lines {
            sink.write_all(line.as_bytes())
                .map_err(|e| anyhow::anyhow!("could not write CSV line: {}", e))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::formatters::test_support::{sample_entries, FailingSink};

    fn render(formatter: &CsvFormatter) -> String {
        let mut out = Vec::new();
        formatter.write_to(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_csv_header_and_lines_in_order() {
        let mut formatter = CsvFormatter::new();
        for entry in sample_entries() {
            formatter.add_entry(entry);
        }

        let output = render(&formatter);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Parent,Package,License",
                "root,pkgA,MIT",
                "pkgA,pkgB,Apache-2.0"
            ]
        );
        assert!(output.ends_with('\n'));
    }

    #[test]
    fn test_csv_without_entries_writes_header_only() {
        let formatter = CsvFormatter::new();
        assert_eq!(render(&formatter), "Parent,Package,License\n");
        assert_eq!(formatter.entry_count(), 0);
    }

    #[test]
    fn test_csv_does_not_escape_commas() {
        let mut formatter = CsvFormatter::new();
        formatter.add_entry(Entry::new("root", "pkgA", "MIT, Apache-2.0"));

        assert_eq!(
            render(&formatter),
            "Parent,Package,License\nroot,pkgA,MIT, Apache-2.0\n"
        );
    }

    #[test]
    fn test_csv_write_failure_is_reported_not_panicking() {
        let mut formatter = CsvFormatter::new();
        formatter.add_entry(Entry::new("root", "pkgA", "MIT"));

        let mut sink = FailingSink::after_bytes(0);
        assert!(formatter.write_to(&mut sink).is_err());
        // best-effort path only logs
        formatter.write(&mut FailingSink::after_bytes(0));
    }

    #[test]
    fn test_csv_partial_write_keeps_written_bytes() {
        let mut formatter = CsvFormatter::new();
        formatter.add_entry(Entry::new("root", "pkgA", "MIT"));

        let mut sink = FailingSink::after_bytes(CSV_HEADER.len() + 1);
        let err = formatter.write_to(&mut sink).unwrap_err();
        assert!(err.to_string().contains("could not write CSV line"));
        assert_eq!(sink.written(), "Parent,Package,License\n");
    }
}
