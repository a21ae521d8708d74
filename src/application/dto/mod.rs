/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod license_source;
mod output_format;
mod report_request;
mod report_summary;

pub use license_source::LicenseSource;
pub use output_format::OutputFormat;
pub use report_request::ReportRequest;
pub use report_summary::ReportSummary;
