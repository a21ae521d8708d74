use crate::application::dto::{ReportRequest, ReportSummary};
use crate::dependency_report::services::{DependencyTree, ReportFlattener};
use crate::ports::outbound::{ImportResolver, LicenseRepository, ProgressReporter, ReportFormatter};
use crate::shared::Result;
use std::io::Write;

/// GenerateReportUseCase - Drives one report run over all requested roots
///
/// Each root gets a fresh dependency tree. Entries from every root are fed to
/// a single formatter, which writes to the sink exactly once at the end.
///
/// # Type Parameters
/// * `IR` - ImportResolver implementation
/// * `LR` - LicenseRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateReportUseCase<IR, LR, PR> {
    import_resolver: IR,
    license_repository: LR,
    progress_reporter: PR,
}

impl<IR, LR, PR> GenerateReportUseCase<IR, LR, PR>
where
    IR: ImportResolver,
    LR: LicenseRepository,
    PR: ProgressReporter,
{
    /// Creates a new GenerateReportUseCase with injected dependencies
    pub fn new(import_resolver: IR, license_repository: LR, progress_reporter: PR) -> Self {
        Self {
            import_resolver,
            license_repository,
            progress_reporter,
        }
    }

    /// Executes the report run
    ///
    /// # Arguments
    /// * `request` - Roots (in processing order) and tree options
    /// * `formatter` - Empty formatter that collects the entries
    /// * `sink` - Already opened output
    ///
    /// # Errors
    /// Returns the first root resolution failure. Nothing is written to the
    /// sink in that case. Serialization and flush failures are logged only.
    pub fn execute(
        &self,
        request: &ReportRequest,
        formatter: &mut dyn ReportFormatter,
        sink: &mut dyn Write,
    ) -> Result<ReportSummary> {
        let total = request.roots.len();
        let mut summary = ReportSummary::default();

        self.progress_reporter
            .report(&format!("🔍 Resolving {} root package(s)...", total));

        for (index, root) in request.roots.iter().enumerate() {
            self.progress_reporter
                .report_progress(index + 1, total, Some(root.as_str()));

            let mut tree = DependencyTree::new(
                &self.import_resolver,
                &self.license_repository,
                request.options,
            );
            let node = match tree.resolve(root.as_str()) {
                Ok(node) => node,
                Err(e) => {
                    self.progress_reporter
                        .report_error(&format!("❌ Could not resolve {}", root));
                    return Err(e);
                }
            };
            let entries = ReportFlattener::flatten(node);
            tracing::info!(
                root = %root,
                entries = entries.len(),
                unresolved = node.unresolved_count(),
                "root resolved"
            );

            summary.roots += 1;
            summary.entries += entries.len();
            summary.unresolved += node.unresolved_count();
            for entry in entries {
                formatter.add_entry(entry);
            }
        }

        formatter.write(sink);
        if let Err(e) = sink.flush() {
            tracing::error!(error = %e, "failed to flush report output");
        }

        if summary.unresolved > 0 {
            self.progress_reporter.report_error(&format!(
                "⚠️  {} package(s) could not be resolved and are reported as Unresolved",
                summary.unresolved
            ));
        }
        self.progress_reporter
            .report_completion(&format!("✅ Report complete: {}", summary));
        Ok(summary)
    }
}

#[cfg(test)]
mod tests;
