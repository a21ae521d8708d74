use crate::adapters::outbound::formatters::{CsvFormatter, JsonFormatter, YamlFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ReportFormatter;

/// Factory for creating report formatters
///
/// Selects the formatter adapter for an output format. It belongs in the
/// application layer because choosing infrastructure for a request is an
/// application concern.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates an empty formatter for the specified output format
    ///
    /// # Examples
    /// ```
    /// use go_dep_report::application::dto::OutputFormat;
    /// use go_dep_report::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Yaml);
    /// assert_eq!(formatter.format_name(), "yaml");
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn ReportFormatter> {
        match format {
            OutputFormat::Csv => Box::new(CsvFormatter::new()),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Yaml => Box::new(YamlFormatter::new()),
        }
    }

    /// Returns the progress message shown before the report is written
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Csv => "📝 Writing CSV report...",
            OutputFormat::Json => "📝 Writing JSON report...",
            OutputFormat::Yaml => "📝 Writing YAML report...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_matches_format() {
        for (format, name) in [
            (OutputFormat::Csv, "csv"),
            (OutputFormat::Json, "json"),
            (OutputFormat::Yaml, "yaml"),
        ] {
            let formatter = FormatterFactory::create(format);
            assert_eq!(formatter.format_name(), name);
            assert_eq!(formatter.entry_count(), 0);
        }
    }

    #[test]
    fn test_progress_message() {
        assert_eq!(
            FormatterFactory::progress_message(OutputFormat::Csv),
            "📝 Writing CSV report..."
        );
        assert!(FormatterFactory::progress_message(OutputFormat::Yaml).contains("YAML"));
    }
}
