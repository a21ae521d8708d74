/// Filesystem adapters for license files and the report sink
mod license_file_repository;
mod output_sink;

pub use license_file_repository::LicenseFileRepository;
pub use output_sink::{FileSink, StdoutSink};
