mod cli;
mod config;

use cli::{Args, Command, Settings};
use go_dep_report::adapters::outbound::console::StderrProgressReporter;
use go_dep_report::adapters::outbound::go::GoListResolver;
use go_dep_report::application::dto::ReportRequest;
use go_dep_report::application::factories::{
    FormatterFactory, LicenseRepositoryFactory, SinkFactory, SinkType,
};
use go_dep_report::application::use_cases::GenerateReportUseCase;
use go_dep_report::ports::outbound::ProgressReporter;
use go_dep_report::shared::error::{ExitCode, ReportError};
use go_dep_report::shared::logging::init_logging;
use go_dep_report::shared::Result;
use std::path::Path;
use std::process;

fn main() {
    // clap exits with status 2 on invalid arguments
    let args = Args::parse_args();

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::for_error(&e).as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    if let Some(Command::Version) = args.command {
        println!("go-dep-report {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let working_dir = args.working_dir();
    validate_working_dir(&working_dir)?;

    // Load configuration (explicit path or discovery)
    let loaded = match &args.config {
        Some(path) => Some((path.clone(), config::load_config_from_path(path)?)),
        None => config::discover_config(&config::discovery_dirs(&working_dir))?,
    };
    let settings = args.into_settings(loaded.as_ref().map(|(_, config)| config))?;

    init_logging(settings.log_format, settings.verbose)?;
    if let Some((path, config)) = &loaded {
        tracing::debug!(path = %path.display(), "loaded config file");
        for warning in config.unknown_field_warnings() {
            tracing::warn!(path = %path.display(), "{}", warning);
        }
    }
    tracing::debug!(?settings, "effective settings");

    // Open the sink before any resolution work so a bad path fails fast
    let mut sink = SinkFactory::open(&SinkType::from_out_file(settings.out_file.clone()))?;

    generate_report(&settings, &mut *sink)
}

fn generate_report(settings: &Settings, sink: &mut dyn std::io::Write) -> Result<()> {
    // Create adapters (Dependency Injection)
    let import_resolver = GoListResolver::new(settings.working_dir.clone())
        .with_go_binary(settings.go_binary.clone());
    let license_repository = LicenseRepositoryFactory::create(settings.license_source)?;
    let progress_reporter = StderrProgressReporter::new();
    progress_reporter.report(FormatterFactory::progress_message(settings.format));

    let use_case =
        GenerateReportUseCase::new(import_resolver, license_repository, progress_reporter);

    let request = ReportRequest::new(settings.packages.clone(), settings.tree_options)?;
    let mut formatter = FormatterFactory::create(settings.format);

    let summary = use_case.execute(&request, formatter.as_mut(), sink)?;
    tracing::info!(
        roots = summary.roots,
        entries = summary.entries,
        unresolved = summary.unresolved,
        format = formatter.format_name(),
        "report written"
    );
    Ok(())
}

fn validate_working_dir(path: &Path) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| ReportError::InvalidWorkingDir {
        path: path.to_path_buf(),
        reason: format!("Failed to read directory metadata: {}", e),
    })?;

    if !metadata.is_dir() {
        return Err(ReportError::InvalidWorkingDir {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
