//! Check command - Configuration validation
//!
//! Validates the effective build configuration:
//! - Declaration parse and construction
//! - Content glob syntax and non-emptiness
//! - Color-literal validity in theme extensions
//! - Plugin reference syntax
//!
//! Duplicate globs or plugins are reported as warnings; they are legal but
//! almost always a mistake.

use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use config::{BuildConfig, COLORS_CATEGORY};
use errors::ConfigError;
use weft_core::types::ColorValue;

use crate::{output, ux_error};

#[derive(Args)]
pub struct CheckArgs {
    /// Path to the configuration file (defaults to discovery in the
    /// current directory)
    #[arg(long, value_name = "FILE", env = "WEFT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Fail on warnings (exit code 1)
    #[arg(long)]
    pub strict: bool,

    /// Show only violations (hide informational entries)
    #[arg(long)]
    pub violations_only: bool,
}

#[derive(Debug, Clone)]
enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

#[derive(Debug, Clone)]
struct CheckResult {
    rule: String,
    severity: Severity,
    message: String,
    suggestion: Option<String>,
}

pub fn run(args: CheckArgs) -> Result<()> {
    tracing::debug!(
        "Checking configuration (file: {:?})",
        args.config.as_deref()
    );

    let config = match config::assemble(args.config.as_deref(), None) {
        Ok(config) => config,
        Err(error) => {
            if args.json {
                let output = serde_json::json!({
                    "success": false,
                    "fatal": error.to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                ux_error::config_error(&error.to_string()).display();
            }
            std::process::exit(1);
        }
    };

    let results = run_checks(&config);

    if args.json {
        return run_json(&args, &results);
    }

    output::header("Configuration Validation");
    println!();

    let errors: Vec<_> = results
        .iter()
        .filter(|r| matches!(r.severity, Severity::Error))
        .collect();
    let warnings: Vec<_> = results
        .iter()
        .filter(|r| matches!(r.severity, Severity::Warning))
        .collect();
    let infos: Vec<_> = results
        .iter()
        .filter(|r| matches!(r.severity, Severity::Info))
        .collect();

    if !errors.is_empty() {
        output::subheader("Errors");
        for result in &errors {
            print_result(result);
        }
        println!();
    }

    if !warnings.is_empty() && !args.violations_only {
        output::subheader("Warnings");
        for result in &warnings {
            print_result(result);
        }
        println!();
    }

    if !infos.is_empty() && !args.violations_only {
        output::subheader("Info");
        for result in &infos {
            print_result(result);
        }
        println!();
    }

    output::subheader("Summary");
    println!();
    println!(
        "  {} {} errors",
        if errors.is_empty() {
            "✓".green()
        } else {
            "✗".red()
        },
        errors.len()
    );
    println!(
        "  {} {} warnings",
        if warnings.is_empty() {
            "✓".green()
        } else {
            "⚠".yellow()
        },
        warnings.len()
    );
    println!("  {} {} info", "ℹ".blue(), infos.len());
    println!();

    let has_violations = !errors.is_empty() || (args.strict && !warnings.is_empty());

    if has_violations {
        if errors.is_empty() {
            output::warn("Validation failed (strict mode) with warnings");
        } else {
            output::error("Validation failed with errors");
        }
        std::process::exit(1);
    } else {
        output::success("All checks passed");
    }

    Ok(())
}

fn run_json(args: &CheckArgs, results: &[CheckResult]) -> Result<()> {
    let errors = results
        .iter()
        .filter(|r| matches!(r.severity, Severity::Error))
        .count();
    let warnings = results
        .iter()
        .filter(|r| matches!(r.severity, Severity::Warning))
        .count();

    let has_violations = errors > 0 || (args.strict && warnings > 0);

    let output = serde_json::json!({
        "success": !has_violations,
        "strict": args.strict,
        "results": results.iter().map(|r| serde_json::json!({
            "rule": r.rule,
            "severity": r.severity.as_str(),
            "message": r.message,
            "suggestion": r.suggestion,
        })).collect::<Vec<_>>(),
        "summary": {
            "errors": errors,
            "warnings": warnings,
            "total": results.len(),
        }
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    if has_violations {
        std::process::exit(1);
    }

    Ok(())
}

fn run_checks(config: &BuildConfig) -> Vec<CheckResult> {
    let mut results = Vec::new();

    if let Err(errors) = config::validate(config) {
        for finding in config::explain(&errors) {
            results.push(violation(&finding));
        }
    }

    results.extend(duplicate_warnings(config));
    results.extend(info_entries(config));

    results
}

fn violation(finding: &ConfigError) -> CheckResult {
    let (rule, suggestion) = match finding {
        ConfigError::EmptyContent => (
            "content-non-empty",
            Some("Declare at least one content glob so the scanner has input".to_string()),
        ),
        ConfigError::InvalidGlob { .. } => ("glob-syntax", None),
        ConfigError::InvalidColor { .. } => (
            "color-literal",
            Some("Use hex (#RRGGBB), rgb()/rgba(), or a CSS named color".to_string()),
        ),
        ConfigError::InvalidPlugin { .. } => ("plugin-reference", None),
        _ => ("declaration", None),
    };

    CheckResult {
        rule: rule.to_string(),
        severity: Severity::Error,
        message: finding.to_string(),
        suggestion,
    }
}

fn duplicate_warnings(config: &BuildConfig) -> Vec<CheckResult> {
    let mut results = Vec::new();

    let mut seen = BTreeSet::new();
    for glob in &config.content {
        if !seen.insert(glob.as_str()) {
            results.push(CheckResult {
                rule: "duplicate-glob".to_string(),
                severity: Severity::Warning,
                message: format!("Content glob declared twice: {}", glob),
                suggestion: Some("Remove the duplicate entry".to_string()),
            });
        }
    }

    let mut seen = BTreeSet::new();
    for plugin in &config.plugins {
        if !seen.insert(plugin.as_str()) {
            results.push(CheckResult {
                rule: "duplicate-plugin".to_string(),
                severity: Severity::Warning,
                message: format!("Plugin declared twice: {}", plugin),
                suggestion: Some("Remove the duplicate entry".to_string()),
            });
        }
    }

    results
}

fn info_entries(config: &BuildConfig) -> Vec<CheckResult> {
    let mut results = Vec::new();

    results.push(CheckResult {
        rule: "content".to_string(),
        severity: Severity::Info,
        message: format!("{} content glob(s) declared", config.content.len()),
        suggestion: None,
    });

    if let Some(tokens) = config.theme.extend.get(COLORS_CATEGORY) {
        for (token, value) in tokens {
            // Classification only renders for values that already validated
            let form = ColorValue::new(value.clone())
                .map(|color| format!(" ({})", color.format()))
                .unwrap_or_default();
            results.push(CheckResult {
                rule: "theme-color".to_string(),
                severity: Severity::Info,
                message: format!("theme.extend.colors.{token} = {value}{form}"),
                suggestion: None,
            });
        }
    }

    for plugin in &config.plugins {
        results.push(CheckResult {
            rule: "plugin".to_string(),
            severity: Severity::Info,
            message: format!("plugin {} (resolved at build time)", plugin),
            suggestion: None,
        });
    }

    results
}

fn print_result(result: &CheckResult) {
    let severity_icon = match result.severity {
        Severity::Error => "✗".red(),
        Severity::Warning => "⚠".yellow(),
        Severity::Info => "ℹ".blue(),
    };

    println!(
        "  {} [{}] {}",
        severity_icon,
        result.rule.cyan(),
        result.message
    );

    if let Some(suggestion) = &result.suggestion {
        println!("    {} {}", "→".cyan(), suggestion.dimmed());
    }
}

#[cfg(test)]
mod tests {
    use weft_core::types::{ContentGlob, PluginRef};

    use super::*;

    #[test]
    fn test_severity_as_str() {
        assert_eq!(Severity::Error.as_str(), "error");
        assert_eq!(Severity::Warning.as_str(), "warning");
        assert_eq!(Severity::Info.as_str(), "info");
    }

    #[test]
    fn test_run_checks_default_config_has_no_violations() {
        let results = run_checks(&BuildConfig::default());
        assert!(!results
            .iter()
            .any(|r| matches!(r.severity, Severity::Error | Severity::Warning)));
        assert!(results.iter().any(|r| r.rule == "theme-color"));
    }

    #[test]
    fn test_run_checks_reports_invalid_color() {
        let mut config = BuildConfig::default();
        config
            .theme
            .extend
            .entry(COLORS_CATEGORY.to_string())
            .or_default()
            .insert("accent".to_string(), "#ZZZZZZ".to_string());

        let results = run_checks(&config);
        assert!(results
            .iter()
            .any(|r| r.rule == "color-literal" && matches!(r.severity, Severity::Error)));
    }

    #[test]
    fn test_run_checks_reports_empty_content() {
        let mut config = BuildConfig::default();
        config.content.clear();

        let results = run_checks(&config);
        assert!(results
            .iter()
            .any(|r| r.rule == "content-non-empty" && matches!(r.severity, Severity::Error)));
    }

    #[test]
    fn test_duplicate_glob_is_a_warning() {
        let mut config = BuildConfig::default();
        config.content.push(ContentGlob::from("../lib/*_web.ex"));

        let results = run_checks(&config);
        assert!(results
            .iter()
            .any(|r| r.rule == "duplicate-glob" && matches!(r.severity, Severity::Warning)));
    }

    #[test]
    fn test_duplicate_plugin_is_a_warning() {
        let mut config = BuildConfig::default();
        config.plugins.push(PluginRef::from("@tailwindcss/forms"));

        let results = run_checks(&config);
        assert!(results
            .iter()
            .any(|r| r.rule == "duplicate-plugin" && matches!(r.severity, Severity::Warning)));
    }

    #[test]
    fn test_info_entries_classify_color_form() {
        let results = info_entries(&BuildConfig::default());
        assert!(results
            .iter()
            .any(|r| r.message.contains("brand = #FD4F00 (hex)")));
    }
}
