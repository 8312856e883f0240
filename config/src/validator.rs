//! # Configuration Validation
//!
//! Validates the build configuration using the `validator` crate, and maps
//! validation failures onto the [`ConfigError`] taxonomy.
//!
//! Deserialization admits any string; this module is the gate. A record
//! that fails here must never reach the external build tool.

use std::borrow::Cow;
use std::collections::BTreeMap;

use errors::ConfigError;
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};
use weft_core::color;
use weft_core::types::{ContentGlob, PluginRef};

use crate::config::{BuildConfig, COLORS_CATEGORY};

/// Validate a build configuration.
///
/// # M-CANONICAL-DOCS
///
/// ## Purpose
/// Validates every field of the configuration record. Ensures the scanner
/// has input, color literals are well-formed, and plugin references have
/// the package-name shape.
///
/// ## Usage
/// ```rust,no_run
/// use config::BuildConfig;
///
/// let config = BuildConfig::default();
/// match config::validate(&config) {
///     Ok(()) => println!("Configuration is valid"),
///     Err(errors) => println!("Validation errors: {:?}", errors),
/// }
/// ```
///
/// ## Validation Rules
/// - `content`: non-empty; each glob 1-512 bytes, no NUL, balanced braces
/// - `theme.extend.colors.*`: valid hex, `rgb()`/`rgba()`, or named color
/// - `plugins`: each reference an npm-shaped package name, 1-214 characters
pub fn validate(config: &BuildConfig) -> Result<(), ValidationErrors> {
    config.validate()
}

/// Map validation failures onto the [`ConfigError`] taxonomy.
///
/// Returns one error per offending field, in no particular order. Empty
/// input produces an empty vec.
pub fn explain(errors: &ValidationErrors) -> Vec<ConfigError> {
    let mut findings = Vec::new();
    collect(errors, &mut findings);
    findings
}

fn collect(errors: &ValidationErrors, findings: &mut Vec<ConfigError>) {
    for (field, kind) in errors.errors() {
        let field = field.to_string();
        match kind {
            ValidationErrorsKind::Field(list) => {
                for error in list {
                    findings.push(finding(&field, error));
                }
            }
            ValidationErrorsKind::Struct(nested) => collect(nested, findings),
            ValidationErrorsKind::List(map) => {
                for nested in map.values() {
                    collect(nested, findings);
                }
            }
        }
    }
}

fn finding(field: &str, error: &ValidationError) -> ConfigError {
    match error.code.as_ref() {
        "empty_content" => ConfigError::EmptyContent,
        "length" if field == "content" => ConfigError::EmptyContent,
        "invalid_glob" => ConfigError::InvalidGlob {
            pattern: param(error, "pattern"),
            reason: message(error),
        },
        "invalid_color" => ConfigError::InvalidColor {
            category: param(error, "category"),
            token: param(error, "token"),
            value: param(error, "value"),
        },
        "invalid_plugin" => ConfigError::InvalidPlugin {
            reference: param(error, "reference"),
            reason: message(error),
        },
        _ => ConfigError::Malformed {
            reason: format!("{field}: {error}"),
        },
    }
}

fn param(error: &ValidationError, name: &str) -> String {
    error
        .params
        .get(name)
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn message(error: &ValidationError) -> String {
    error
        .message
        .as_ref()
        .map_or_else(|| error.code.to_string(), ToString::to_string)
}

pub(crate) fn validate_content_globs(content: &[ContentGlob]) -> Result<(), ValidationError> {
    for glob in content {
        if let Some(reason) = ContentGlob::violation(glob.as_str()) {
            let mut error = ValidationError::new("invalid_glob");
            error.message = Some(Cow::Borrowed(reason));
            error.add_param(Cow::Borrowed("pattern"), &glob.as_str());
            return Err(error);
        }
    }
    Ok(())
}

pub(crate) fn validate_theme_extensions(
    extend: &BTreeMap<String, BTreeMap<String, String>>,
) -> Result<(), ValidationError> {
    // Only the colors category constrains its values; other categories are
    // opaque to this crate and interpreted by the external build tool.
    if let Some(tokens) = extend.get(COLORS_CATEGORY) {
        for (token, value) in tokens {
            if !color::is_valid(value) {
                let mut error = ValidationError::new("invalid_color");
                error.add_param(Cow::Borrowed("category"), &COLORS_CATEGORY);
                error.add_param(Cow::Borrowed("token"), token);
                error.add_param(Cow::Borrowed("value"), value);
                return Err(error);
            }
        }
    }
    Ok(())
}

pub(crate) fn validate_plugin_refs(plugins: &[PluginRef]) -> Result<(), ValidationError> {
    for plugin in plugins {
        if let Some(reason) = PluginRef::violation(plugin.as_str()) {
            let mut error = ValidationError::new("invalid_plugin");
            error.message = Some(Cow::Borrowed(reason));
            error.add_param(Cow::Borrowed("reference"), &plugin.as_str());
            return Err(error);
        }
    }
    Ok(())
}
