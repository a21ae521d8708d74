/// Formatter adapters for the supported report formats
mod csv_formatter;
mod json_formatter;
mod yaml_formatter;

pub use csv_formatter::CsvFormatter;
pub use json_formatter::JsonFormatter;
pub use yaml_formatter::YamlFormatter;
