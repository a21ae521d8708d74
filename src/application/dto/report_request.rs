use crate::dependency_report::domain::PackageName;
use crate::dependency_report::services::TreeOptions;
use crate::shared::error::ReportError;
use crate::shared::Result;

/// ReportRequest - Request DTO for the report generation use case
#[derive(Debug, Clone)]
pub struct ReportRequest {
    /// Root packages, processed in this order
    pub roots: Vec<PackageName>,
    /// Options applied to every root's tree
    pub options: TreeOptions,
}

impl ReportRequest {
    pub fn new(roots: Vec<PackageName>, options: TreeOptions) -> Result<Self> {
        if roots.is_empty() {
            return Err(ReportError::Validation {
                message: "At least one root package is required".to_string(),
            }
            .into());
        }
        Ok(Self { roots, options })
    }
}
