//! Configuration file support for go-dep-report.
//!
//! Provides YAML-based configuration through `go-dep-report.yml` files,
//! including data structures, file discovery, loading, and validation.

use anyhow::Context;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use go_dep_report::application::dto::{LicenseSource, OutputFormat};
use go_dep_report::shared::error::ReportError;
use go_dep_report::shared::logging::LogFormat;
use go_dep_report::shared::security::{read_regular_file, MAX_CONFIG_FILE_SIZE};
use go_dep_report::shared::Result;

pub const CONFIG_FILENAME: &str = "go-dep-report.yml";

/// Top-level configuration file schema.
///
/// Multi-word keys are also accepted in the kebab-case spelling of the
/// matching command-line flag (`log-format`, `out-file`, ...).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    #[serde(alias = "log-format")]
    pub log_format: Option<String>,
    #[serde(alias = "out-file")]
    pub out_file: Option<PathBuf>,
    pub depth: Option<usize>,
    pub verbose: Option<bool>,
    #[serde(alias = "resolve-internal")]
    pub resolve_internal: Option<bool>,
    #[serde(alias = "resolve-test")]
    pub resolve_test: Option<bool>,
    #[serde(alias = "license-source")]
    pub license_source: Option<String>,
    #[serde(alias = "go-binary")]
    pub go_binary: Option<PathBuf>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: BTreeMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        parse_field(self.format.as_deref(), "format", "Use one of: csv, json, yaml")
    }

    pub fn log_format(&self) -> Result<Option<LogFormat>> {
        parse_field(self.log_format.as_deref(), "log_format", "Use one of: text, json")
    }

    pub fn license_source(&self) -> Result<Option<LicenseSource>> {
        parse_field(
            self.license_source.as_deref(),
            "license_source",
            "Use one of: local, deps-dev, auto",
        )
    }

    /// One message per key that is not part of the schema
    pub fn unknown_field_warnings(&self) -> Vec<String> {
        self.unknown_fields
            .keys()
            .map(|key| format!("Unknown config field '{}' will be ignored", key))
            .collect()
    }
}

fn parse_field<T>(value: Option<&str>, key: &str, hint: &str) -> Result<Option<T>>
where
    T: std::str::FromStr<Err = String>,
{
    value
        .map(|raw| {
            raw.parse::<T>().map_err(|message| {
                anyhow::Error::from(ReportError::InvalidConfig {
                    message: format!("{}: {}", key, message),
                    hint: hint.to_string(),
                })
            })
        })
        .transpose()
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = read_regular_file(path, "config file", MAX_CONFIG_FILE_SIZE).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    Ok(config)
}

/// Looks for `go-dep-report.yml` in each directory in turn.
///
/// Returns the first file found together with its path, or `None` silently.
pub fn discover_config(dirs: &[PathBuf]) -> Result<Option<(PathBuf, ConfigFile)>> {
    for dir in dirs {
        let config_path = dir.join(CONFIG_FILENAME);
        if config_path.is_file() {
            let config = load_config_from_path(&config_path)?;
            return Ok(Some((config_path, config)));
        }
    }
    Ok(None)
}

/// Default discovery order: the working directory, then `$HOME/.config`.
pub fn discovery_dirs(working_dir: &Path) -> Vec<PathBuf> {
    let mut dirs = vec![working_dir.to_path_buf()];
    if let Some(home) = std::env::var_os("HOME") {
        dirs.push(PathBuf::from(home).join(".config"));
    }
    dirs
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    config.output_format()?;
    config.log_format()?;
    config.license_source()?;

    if let Some(go_binary) = &config.go_binary {
        if go_binary.as_os_str().is_empty() {
            return Err(ReportError::InvalidConfig {
                message: "go_binary must not be empty".to_string(),
                hint: "Remove the key to use `go` from PATH".to_string(),
            }
            .into());
        }
    }
    Ok(())
}
