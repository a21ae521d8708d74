use super::*;
use crate::adapters::outbound::formatters::CsvFormatter;
use crate::dependency_report::domain::{Entry, ModuleInfo, PackageName};
use crate::dependency_report::services::TreeOptions;
use crate::ports::outbound::ResolvedImports;
use crate::shared::error::ReportError;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::io;

// Mock implementations for testing
#[derive(Default)]
struct MockImportResolver {
    packages: HashMap<String, ResolvedImports>,
    calls: RefCell<Vec<String>>,
}

impl MockImportResolver {
    fn with(mut self, name: &str, imports: &[&str], internal: bool) -> Self {
        let imports = imports.iter().map(|s| s.to_string()).collect();
        self.packages
            .insert(name.to_string(), ResolvedImports::new(imports, internal));
        self
    }
}

impl ImportResolver for MockImportResolver {
    fn resolve_imports(&self, identifier: &str, _root: &str) -> Result<ResolvedImports> {
        self.calls.borrow_mut().push(identifier.to_string());
        self.packages
            .get(identifier)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("cannot find package {}", identifier))
    }
}

struct MockLicenseRepository;

impl LicenseRepository for MockLicenseRepository {
    fn lookup_license(
        &self,
        package: &str,
        _module: Option<&ModuleInfo>,
    ) -> Result<Option<String>> {
        Ok(match package {
            "pkgA" => Some("MIT".to_string()),
            "pkgB" => Some("Apache-2.0".to_string()),
            _ => None,
        })
    }
}

#[derive(Default)]
struct MockProgressReporter {
    errors: RefCell<Vec<String>>,
    completions: Cell<usize>,
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, _message: &str) {}

    fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}

    fn report_error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }

    fn report_completion(&self, _message: &str) {
        self.completions.set(self.completions.get() + 1);
    }
}

/// Formatter that records how often it was written
#[derive(Default)]
struct RecordingFormatter {
    entries: Vec<Entry>,
    writes: Cell<usize>,
}

impl ReportFormatter for RecordingFormatter {
    fn add_entry(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    fn entry_count(&self) -> usize {
        self.entries.len()
    }

    fn format_name(&self) -> &'static str {
        "recording"
    }

    fn write_to(&self, sink: &mut dyn Write) -> Result<()> {
        self.writes.set(self.writes.get() + 1);
        writeln!(sink, "{} entries", self.entries.len())?;
        Ok(())
    }
}

struct BrokenSink;

impl Write for BrokenSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }
}

fn request(roots: &[&str]) -> ReportRequest {
    let roots = roots
        .iter()
        .map(|r| PackageName::new(r.to_string()).unwrap())
        .collect();
    ReportRequest::new(roots, TreeOptions::default()).unwrap()
}

fn sample_resolver() -> MockImportResolver {
    MockImportResolver::default()
        .with("root", &["pkgA"], true)
        .with("pkgA", &["pkgB"], false)
        .with("pkgB", &[], false)
}

#[test]
fn test_execute_writes_csv_report() {
    let use_case = GenerateReportUseCase::new(
        sample_resolver(),
        MockLicenseRepository,
        MockProgressReporter::default(),
    );
    let mut formatter = CsvFormatter::new();
    let mut sink = Vec::new();

    let summary = use_case
        .execute(&request(&["root"]), &mut formatter, &mut sink)
        .unwrap();

    assert_eq!(
        String::from_utf8(sink).unwrap(),
        "Parent,Package,License\nroot,pkgA,MIT\npkgA,pkgB,Apache-2.0\n"
    );
    assert_eq!(
        summary,
        ReportSummary {
            roots: 1,
            entries: 2,
            unresolved: 0
        }
    );
    assert_eq!(use_case.progress_reporter.completions.get(), 1);
}

#[test]
fn test_execute_processes_roots_in_order_into_one_report() {
    let resolver = sample_resolver()
        .with("second", &["pkgB"], true);
    let use_case = GenerateReportUseCase::new(
        resolver,
        MockLicenseRepository,
        MockProgressReporter::default(),
    );
    let mut formatter = RecordingFormatter::default();
    let mut sink = Vec::new();

    let summary = use_case
        .execute(&request(&["second", "root"]), &mut formatter, &mut sink)
        .unwrap();

    assert_eq!(summary.roots, 2);
    assert_eq!(formatter.writes.get(), 1);
    assert_eq!(
        formatter.entries,
        vec![
            Entry::new("second", "pkgB", "Apache-2.0"),
            Entry::new("root", "pkgA", "MIT"),
            Entry::new("pkgA", "pkgB", "Apache-2.0"),
        ]
    );
    assert_eq!(String::from_utf8(sink).unwrap(), "3 entries\n");
}

#[test]
fn test_execute_root_failure_writes_nothing() {
    let use_case = GenerateReportUseCase::new(
        sample_resolver(),
        MockLicenseRepository,
        MockProgressReporter::default(),
    );
    let mut formatter = RecordingFormatter::default();
    let mut sink = Vec::new();

    let err = use_case
        .execute(&request(&["root", "missing", "root"]), &mut formatter, &mut sink)
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ReportError>(),
        Some(ReportError::RootResolution { package, .. }) if package == "missing"
    ));
    assert!(sink.is_empty());
    assert_eq!(formatter.writes.get(), 0);
    assert_eq!(use_case.progress_reporter.completions.get(), 0);
    assert_eq!(use_case.progress_reporter.errors.borrow().len(), 1);
    // no root after the failing one is resolved
    assert_eq!(
        use_case.import_resolver.calls.borrow().last().map(String::as_str),
        Some("missing")
    );
}

#[test]
fn test_execute_counts_unresolved_packages() {
    let resolver = MockImportResolver::default()
        .with("root", &["pkgA", "ghost"], true)
        .with("pkgA", &[], false);
    let use_case = GenerateReportUseCase::new(
        resolver,
        MockLicenseRepository,
        MockProgressReporter::default(),
    );
    let mut formatter = RecordingFormatter::default();

    let summary = use_case
        .execute(&request(&["root"]), &mut formatter, &mut Vec::new())
        .unwrap();

    assert_eq!(summary.unresolved, 1);
    assert!(formatter
        .entries
        .contains(&Entry::new("root", "ghost", "Unresolved")));
    assert!(use_case
        .progress_reporter
        .errors
        .borrow()
        .iter()
        .any(|m| m.contains("could not be resolved")));
}

#[test]
fn test_execute_write_failure_is_not_an_error() {
    let use_case = GenerateReportUseCase::new(
        sample_resolver(),
        MockLicenseRepository,
        MockProgressReporter::default(),
    );
    let mut formatter = CsvFormatter::new();

    let summary = use_case
        .execute(&request(&["root"]), &mut formatter, &mut BrokenSink)
        .unwrap();
    assert_eq!(summary.entries, 2);
}

#[test]
fn test_execute_uses_fresh_tree_per_root() {
    let use_case = GenerateReportUseCase::new(
        sample_resolver(),
        MockLicenseRepository,
        MockProgressReporter::default(),
    );
    let mut formatter = RecordingFormatter::default();

    use_case
        .execute(&request(&["root", "root"]), &mut formatter, &mut Vec::new())
        .unwrap();

    assert_eq!(formatter.entries.len(), 4);
    let root_calls = use_case
        .import_resolver
        .calls
        .borrow()
        .iter()
        .filter(|c| c.as_str() == "root")
        .count();
    assert_eq!(root_calls, 2);
}
