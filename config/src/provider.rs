//! # Configuration Provider
//!
//! Composes the load pipeline: embedded declaration, optional
//! configuration file, environment variables, and CLI overrides, merged by
//! precedence and validated before use.
//!
//! The record is produced once at startup and handed to the external build
//! tool; nothing here performs further I/O or mutation afterwards.

use std::path::{Path, PathBuf};

use errors::ConfigError;

use crate::config::BuildConfig;
use crate::{file_loader, loader, precedence, validator};

/// File names probed, in order, when no explicit path is given.
const CONFIG_FILE_NAMES: [&str; 3] = ["weft.toml", "weft.yaml", "weft.yml"];

/// Load the build configuration.
///
/// # M-CANONICAL-DOCS
///
/// ## Purpose
/// The single entry point the build tool calls at startup. Starts from the
/// embedded declaration, layers a discovered configuration file and
/// environment variables on top, validates, and returns the effective
/// record.
///
/// ## Usage
/// ```rust,no_run
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = config::load_configuration()?;
///     println!("scanning {} glob(s)", config.content.len());
///     Ok(())
/// }
/// ```
///
/// ## Error Handling
/// Every failure is a [`ConfigError`]: unreadable or unparsable file,
/// empty content globs, invalid color literal, malformed plugin
/// reference. All are fatal; the caller should exit.
pub fn load_configuration() -> Result<BuildConfig, ConfigError> {
    load_with_overrides(None, None)
}

/// Load the build configuration with explicit file and CLI overrides.
///
/// `path` skips discovery and loads exactly that file; `cli_config` forms
/// the highest-precedence layer. Validation runs on the merged record.
pub fn load_with_overrides(
    path: Option<&Path>,
    cli_config: Option<BuildConfig>,
) -> Result<BuildConfig, ConfigError> {
    let config = assemble(path, cli_config)?;

    if let Err(errors) = validator::validate(&config) {
        let mut findings = validator::explain(&errors);
        return Err(if findings.is_empty() {
            ConfigError::Malformed {
                reason: errors.to_string(),
            }
        } else {
            findings.remove(0)
        });
    }

    tracing::debug!(
        "Effective configuration: {}",
        serde_json::to_string(&config).unwrap_or_default()
    );

    Ok(config)
}

/// Merge all configuration sources without validating.
///
/// Diagnostics (`weft check`) use this to report every problem in an
/// invalid record instead of stopping at the first.
pub fn assemble(
    path: Option<&Path>,
    cli_config: Option<BuildConfig>,
) -> Result<BuildConfig, ConfigError> {
    let defaults = BuildConfig::default();

    let file_config = match path {
        Some(explicit) => file_loader::load_from_file(explicit)?,
        None => match discover_config_file(Path::new(".")) {
            Some(discovered) => file_loader::load_from_file(&discovered)?,
            None => BuildConfig::default(),
        },
    };

    let env_config = loader::load_from_env()?;

    Ok(precedence::merge_configs(
        defaults,
        file_config,
        "file",
        env_config,
        "env",
        cli_config,
        "cli",
    ))
}

/// Find a configuration file in `dir`, probing the well-known names.
pub fn discover_config_file(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|candidate| candidate.is_file())
}
