use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::ConfigFile;
use go_dep_report::application::dto::{LicenseSource, OutputFormat};
use go_dep_report::dependency_report::domain::PackageName;
use go_dep_report::dependency_report::services::TreeOptions;
use go_dep_report::shared::logging::LogFormat;
use go_dep_report::shared::Result;

const DEFAULT_GO_BINARY: &str = "go";

/// Report the licenses of the third-party packages a Go package imports
#[derive(Parser, Debug)]
#[command(name = "go-dep-report")]
#[command(version)]
#[command(
    about = "Report the licenses of the third-party packages a Go package imports",
    long_about = None
)]
#[command(subcommand_negates_reqs = true, args_conflicts_with_subcommands = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Root packages: import paths, relative directories or patterns such as ./...
    #[arg(required = true, value_name = "PACKAGE", value_parser = parse_package_name)]
    pub packages: Vec<PackageName>,

    /// Configuration file (default: go-dep-report.yml in --dir, then ~/.config)
    #[arg(short, long, env = "GDR_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, env = "GDR_VERBOSE")]
    pub verbose: bool,

    /// Output format: csv, json or yaml [default: csv]
    #[arg(short, long, env = "GDR_FORMAT")]
    pub format: Option<OutputFormat>,

    /// Log format: text or json [default: text]
    #[arg(short, long, env = "GDR_LOG_FORMAT")]
    pub log_format: Option<LogFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, env = "GDR_OUT_FILE", value_name = "FILE")]
    pub out_file: Option<PathBuf>,

    /// Maximum import depth below each root, 0 for unlimited [default: 0]
    #[arg(short, long, env = "GDR_DEPTH")]
    pub depth: Option<usize>,

    /// Also walk the imports of packages from the root's own module
    #[arg(long, env = "GDR_RESOLVE_INTERNAL")]
    pub resolve_internal: bool,

    /// Include imports used only by tests
    #[arg(long, env = "GDR_RESOLVE_TEST")]
    pub resolve_test: bool,

    /// Where licenses come from: local, deps-dev or auto [default: local]
    #[arg(long, env = "GDR_LICENSE_SOURCE")]
    pub license_source: Option<LicenseSource>,

    /// Go toolchain binary [default: go]
    #[arg(long = "go", env = "GDR_GO", value_name = "PATH")]
    pub go_binary: Option<PathBuf>,

    /// Directory `go list` runs in (defaults to current directory)
    #[arg(short = 'C', long = "dir", env = "GDR_DIR", value_name = "DIR")]
    pub dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print version information (same as --version)
    Version,
}

fn parse_package_name(raw: &str) -> std::result::Result<PackageName, String> {
    PackageName::new(raw.to_string()).map_err(|e| e.to_string())
}

/// Effective settings after merging CLI, environment, config file and defaults
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub packages: Vec<PackageName>,
    pub verbose: bool,
    pub format: OutputFormat,
    pub log_format: LogFormat,
    pub out_file: Option<PathBuf>,
    pub tree_options: TreeOptions,
    pub license_source: LicenseSource,
    pub go_binary: PathBuf,
    pub working_dir: PathBuf,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Directory `go list` runs in and where config discovery starts
    pub fn working_dir(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Fills every option not given on the command line (or environment)
    /// from the config file, then from defaults.
    ///
    /// Flags can only switch an option on; a config value of `true` is not
    /// overridden by an absent flag.
    pub fn into_settings(self, config: Option<&ConfigFile>) -> Result<Settings> {
        let working_dir = self.working_dir();
        let from_config = |f: fn(&ConfigFile) -> Option<bool>| config.and_then(f).unwrap_or(false);

        let format = match self.format {
            Some(format) => format,
            None => config
                .map(ConfigFile::output_format)
                .transpose()?
                .flatten()
                .unwrap_or_default(),
        };
        let log_format = match self.log_format {
            Some(log_format) => log_format,
            None => config
                .map(ConfigFile::log_format)
                .transpose()?
                .flatten()
                .unwrap_or_default(),
        };
        let license_source = match self.license_source {
            Some(source) => source,
            None => config
                .map(ConfigFile::license_source)
                .transpose()?
                .flatten()
                .unwrap_or_default(),
        };

        let tree_options = TreeOptions::new(
            self.depth
                .or_else(|| config.and_then(|c| c.depth))
                .unwrap_or(0),
            self.resolve_internal || from_config(|c| c.resolve_internal),
            self.resolve_test || from_config(|c| c.resolve_test),
        );

        Ok(Settings {
            packages: self.packages,
            verbose: self.verbose || from_config(|c| c.verbose),
            format,
            log_format,
            out_file: self
                .out_file
                .or_else(|| config.and_then(|c| c.out_file.clone())),
            tree_options,
            license_source,
            go_binary: self
                .go_binary
                .or_else(|| config.and_then(|c| c.go_binary.clone()))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_GO_BINARY)),
            working_dir,
        })
    }
}
