//! # Configuration Precedence
//!
//! Merges configuration from multiple sources with precedence rules.
//!
//! # Precedence Order
//! 1. CLI arguments (highest priority)
//! 2. Environment variables
//! 3. Configuration file
//! 4. Embedded declaration (lowest priority)
//!
//! Content globs and plugins are overridden wholesale by a source that
//! sets them. Theme extensions union-merge: a later source adds or
//! replaces individual tokens but never drops a category.

use weft_core::types::{ContentGlob, PluginRef};

use crate::config::BuildConfig;

/// Merge multiple configuration sources with precedence.
///
/// # M-CANONICAL-DOCS
///
/// ## Purpose
/// Merges configuration from multiple sources following precedence rules:
/// CLI arguments > environment variables > config file > embedded
/// declaration.
///
/// ## Usage
/// ```rust,no_run
/// use std::path::Path;
///
/// use config::{merge_configs, load_from_env, load_from_file, BuildConfig};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let defaults = BuildConfig::default();
///     let from_file = load_from_file(Path::new("weft.toml"))?;
///     let from_env = load_from_env()?;
///
///     let _config = merge_configs(defaults, from_file, "file", from_env, "env", None, "cli");
///     Ok(())
/// }
/// ```
///
/// ## Merge Rules
/// A source only overrides a field it actually changed away from the
/// embedded declaration, so a partial file or a single env var leaves the
/// rest of the record untouched. Every effective override is logged.
pub fn merge_configs(
    defaults: BuildConfig,
    file_config: BuildConfig,
    file_source_name: &str,
    env_config: BuildConfig,
    env_source_name: &str,
    cli_config: Option<BuildConfig>,
    cli_source_name: &str,
) -> BuildConfig {
    let mut config = defaults;

    config = merge_with_logging(config, file_config, file_source_name);
    config = merge_with_logging(config, env_config, env_source_name);

    if let Some(cli) = cli_config {
        config = merge_with_logging(config, cli, cli_source_name);
    }

    config
}

fn merge_with_logging(
    mut base: BuildConfig,
    override_config: BuildConfig,
    source_name: &str,
) -> BuildConfig {
    let mut changes = Vec::new();

    merge_content(&mut base.content, &override_config.content, &mut changes);
    merge_theme(&mut base, &override_config, &mut changes);
    merge_plugins(&mut base.plugins, &override_config.plugins, &mut changes);

    if !changes.is_empty() {
        tracing::info!("Configuration from {}: {:?}", source_name, changes);
    }

    base
}

fn merge_content(
    base: &mut Vec<ContentGlob>,
    override_config: &[ContentGlob],
    changes: &mut Vec<String>,
) {
    let embedded = BuildConfig::default().content;
    if !override_config.is_empty()
        && override_config != embedded.as_slice()
        && override_config != base.as_slice()
    {
        changes.push(format!("content = {}", render_list(override_config.iter())));
        *base = override_config.to_vec();
    }
}

fn merge_theme(base: &mut BuildConfig, override_config: &BuildConfig, changes: &mut Vec<String>) {
    for (category, tokens) in &override_config.theme.extend {
        for (token, value) in tokens {
            let existing = base
                .theme
                .extend
                .get(category)
                .and_then(|t| t.get(token));
            if existing != Some(value) {
                changes.push(format!("theme.extend.{category}.{token} = {value}"));
                base.theme
                    .extend
                    .entry(category.clone())
                    .or_default()
                    .insert(token.clone(), value.clone());
            }
        }
    }
}

fn merge_plugins(
    base: &mut Vec<PluginRef>,
    override_config: &[PluginRef],
    changes: &mut Vec<String>,
) {
    let embedded = BuildConfig::default().plugins;
    if !override_config.is_empty()
        && override_config != embedded.as_slice()
        && override_config != base.as_slice()
    {
        changes.push(format!("plugins = {}", render_list(override_config.iter())));
        *base = override_config.to_vec();
    }
}

fn render_list<T: std::fmt::Display>(items: impl Iterator<Item = T>) -> String {
    let rendered: Vec<String> = items.map(|item| item.to_string()).collect();
    format!("[{}]", rendered.join(", "))
}
