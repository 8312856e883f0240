//! Show command - Effective configuration
//!
//! Prints the record the external build tool would receive after merging
//! the embedded declaration, the configuration file, environment
//! variables, and any command-line overrides.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, ValueEnum};
use config::BuildConfig;
use weft_core::types::{ContentGlob, PluginRef};

use crate::ux_error;

#[derive(Args)]
pub struct ShowArgs {
    /// Path to the configuration file (defaults to discovery in the
    /// current directory)
    #[arg(long, value_name = "FILE", env = "WEFT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "toml")]
    pub format: OutputFormat,

    /// Override content globs (repeatable, highest precedence)
    #[arg(long = "content", value_name = "GLOB")]
    pub content: Vec<String>,

    /// Override plugin references (repeatable, highest precedence)
    #[arg(long = "plugin", value_name = "REF")]
    pub plugin: Vec<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Toml,
    Yaml,
    Json,
}

pub fn run(args: ShowArgs) -> Result<()> {
    if let Some(path) = &args.config {
        if !path.exists() {
            ux_error::config_not_found(&path.display().to_string()).display();
            std::process::exit(1);
        }
    }

    for pattern in &args.content {
        if !ContentGlob::is_valid(pattern) {
            ux_error::invalid_override("content", pattern).display();
            std::process::exit(1);
        }
    }
    for reference in &args.plugin {
        if !PluginRef::is_valid(reference) {
            ux_error::invalid_override("plugin", reference).display();
            std::process::exit(1);
        }
    }

    let cli_config = cli_layer(&args);

    let config = match config::load_with_overrides(args.config.as_deref(), cli_config) {
        Ok(config) => config,
        Err(error) => {
            ux_error::config_error(&error.to_string()).display();
            std::process::exit(1);
        }
    };

    let rendered = match args.format {
        OutputFormat::Toml => toml::to_string_pretty(&config)?,
        OutputFormat::Yaml => serde_yaml::to_string(&config)?,
        OutputFormat::Json => serde_json::to_string_pretty(&config)?,
    };

    println!("{rendered}");

    Ok(())
}

/// Build the highest-precedence layer from repeatable flags, or `None`
/// when no override was given.
fn cli_layer(args: &ShowArgs) -> Option<BuildConfig> {
    if args.content.is_empty() && args.plugin.is_empty() {
        return None;
    }

    let mut config = BuildConfig::default();
    if !args.content.is_empty() {
        config.content = args
            .content
            .iter()
            .map(|pattern| ContentGlob::from(pattern.as_str()))
            .collect();
    }
    if !args.plugin.is_empty() {
        config.plugins = args
            .plugin
            .iter()
            .map(|reference| PluginRef::from(reference.as_str()))
            .collect();
    }

    Some(config)
}
