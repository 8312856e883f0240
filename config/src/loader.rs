//! # Environment Variable Loader
//!
//! Loads configuration overrides from environment variables following
//! 12-factor app principles.
//!
//! # Naming Convention
//! - `WEFT_CONTENT`: comma-separated content globs
//! - `WEFT_PLUGINS`: comma-separated plugin references
//! - `WEFT_THEME_COLORS`: comma-separated `token=value` color extensions

use std::env;

use errors::ConfigError;
use weft_core::types::{ContentGlob, PluginRef};

use crate::config::{BuildConfig, COLORS_CATEGORY};

/// Load configuration from environment variables.
///
/// # M-CANONICAL-DOCS
///
/// ## Purpose
/// Loads configuration overrides from environment variables. Variables
/// override file values but can be overridden by CLI arguments; unset
/// variables leave the embedded declaration untouched.
///
/// ## Environment Variables
/// - `WEFT_CONTENT`: content globs, comma-separated
///   (e.g. `./js/**/*.ts,./html/**/*.html`)
/// - `WEFT_PLUGINS`: plugin references, comma-separated
///   (e.g. `@tailwindcss/forms,@tailwindcss/typography`)
/// - `WEFT_THEME_COLORS`: color extensions as `token=value` pairs,
///   comma-separated (e.g. `brand=#FD4F00,accent=teal`); merged under the
///   `colors` category
///
/// ## Error Handling
/// A `WEFT_THEME_COLORS` entry without a `=` separator is a malformed
/// declaration and fails the load.
pub fn load_from_env() -> Result<BuildConfig, ConfigError> {
    let mut config = BuildConfig::default();

    if let Ok(raw) = env::var("WEFT_CONTENT") {
        config.content = split_list(&raw).into_iter().map(ContentGlob::from).collect();
    }

    if let Ok(raw) = env::var("WEFT_PLUGINS") {
        config.plugins = split_list(&raw).into_iter().map(PluginRef::from).collect();
    }

    if let Ok(raw) = env::var("WEFT_THEME_COLORS") {
        for pair in split_list(&raw) {
            let Some((token, value)) = pair.split_once('=') else {
                return Err(ConfigError::Malformed {
                    reason: format!("WEFT_THEME_COLORS entry '{pair}' is not 'token=value'"),
                });
            };
            config
                .theme
                .extend
                .entry(COLORS_CATEGORY.to_string())
                .or_default()
                .insert(token.trim().to_string(), value.trim().to_string());
        }
    }

    Ok(config)
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
