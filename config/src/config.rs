//! # Build Configuration Structures
//!
//! This module defines the configuration record consumed by the external
//! utility-class CSS build tool.
//!
//! All configuration structures:
//! - Use `serde` for serialization/deserialization
//! - Use `validator` for input validation
//! - Default to the embedded declaration, so a partial file only overrides
//!   what it names

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::Validate;
use weft_core::types::{ContentGlob, PluginRef};

use crate::validator::{validate_content_globs, validate_plugin_refs, validate_theme_extensions};

/// Theme category whose token values must be valid color literals.
pub const COLORS_CATEGORY: &str = "colors";

/// Build configuration for the Weft CSS pipeline.
///
/// This is the record handed to the external build tool, which scans the
/// `content` globs for class usage, merges `theme.extend` into its default
/// design tokens, and loads each entry in `plugins`.
///
/// # M-CANONICAL-DOCS
///
/// ## Purpose
/// Declares everything the external build tool needs for one build: which
/// files to scan, which theme tokens to add, and which plugins to load.
/// Constructed once at startup, read-only afterwards.
///
/// ## Usage
/// ```rust,no_run
/// use config::BuildConfig;
///
/// let config = BuildConfig::default();
/// println!("scanning {} glob(s)", config.content.len());
/// ```
///
/// ## Fields
/// - `content`: ordered path globs the class scanner inspects; must be
///   non-empty or the scanner has no input
/// - `theme`: design-token extensions merged into (never replacing) the
///   build tool's default theme
/// - `plugins`: ordered plugin references resolved by the build tool's
///   plugin loader
///
/// ## Validation
/// `content` must be non-empty with well-formed globs, `colors` theme
/// values must be valid color literals, and plugin references must have
/// the package-name shape. Resolution of plugins to installed packages is
/// the external tool's concern.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct BuildConfig {
    /// Path globs scanned for utility-class usage
    #[serde(default = "default_content")]
    #[validate(
        length(min = 1, code = "empty_content"),
        custom(function = "validate_content_globs")
    )]
    pub content: Vec<ContentGlob>,

    /// Design-token extensions merged into the default theme
    #[serde(default)]
    #[validate(nested)]
    pub theme: ThemeConfig,

    /// Plugin references loaded during stylesheet generation
    #[serde(default = "default_plugins")]
    #[validate(custom(function = "validate_plugin_refs"))]
    pub plugins: Vec<PluginRef>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            content: default_content(),
            theme: ThemeConfig::default(),
            plugins: default_plugins(),
        }
    }
}

/// Theme extension table.
///
/// Tokens live under `extend` so they are merged into the build tool's
/// default theme rather than replacing it.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct ThemeConfig {
    /// category -> token -> value
    #[serde(default = "default_theme_extend")]
    #[validate(custom(function = "validate_theme_extensions"))]
    pub extend: BTreeMap<String, BTreeMap<String, String>>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            extend: default_theme_extend(),
        }
    }
}

impl ThemeConfig {
    /// Look up a token value under the `colors` category.
    pub fn color(&self, token: &str) -> Option<&str> {
        self.extend
            .get(COLORS_CATEGORY)
            .and_then(|tokens| tokens.get(token))
            .map(String::as_str)
    }
}

// The embedded declaration. This is the record `load_configuration()`
// yields when no file, environment, or CLI source overrides it.

fn default_content() -> Vec<ContentGlob> {
    [
        "./js/**/*.{js,jsx,ts,tsx}",
        "../lib/*_web.ex",
        "../lib/*_web/**/*.*ex",
    ]
    .into_iter()
    .map(ContentGlob::from)
    .collect()
}

fn default_theme_extend() -> BTreeMap<String, BTreeMap<String, String>> {
    let mut colors = BTreeMap::new();
    colors.insert("brand".to_string(), "#FD4F00".to_string());

    let mut extend = BTreeMap::new();
    extend.insert(COLORS_CATEGORY.to_string(), colors);
    extend
}

fn default_plugins() -> Vec<PluginRef> {
    vec![PluginRef::from("@tailwindcss/forms")]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_content_globs_in_order() {
        let config = BuildConfig::default();
        let patterns: Vec<&str> = config.content.iter().map(ContentGlob::as_str).collect();
        assert_eq!(
            patterns,
            vec![
                "./js/**/*.{js,jsx,ts,tsx}",
                "../lib/*_web.ex",
                "../lib/*_web/**/*.*ex",
            ]
        );
    }

    #[test]
    fn test_default_brand_color_case_preserved() {
        let config = BuildConfig::default();
        assert_eq!(config.theme.color("brand"), Some("#FD4F00"));
    }

    #[test]
    fn test_default_plugins() {
        let config = BuildConfig::default();
        assert_eq!(config.plugins.len(), 1);
        assert_eq!(config.plugins[0].as_str(), "@tailwindcss/forms");
    }

    #[test]
    fn test_theme_color_lookup_misses() {
        let config = BuildConfig::default();
        assert_eq!(config.theme.color("accent"), None);
    }

    #[test]
    fn test_toml_round_trip_is_identity() {
        let config = BuildConfig::default();
        let rendered = toml::to_string(&config).unwrap();
        let reloaded: BuildConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_yaml_round_trip_is_identity() {
        let config = BuildConfig::default();
        let rendered = serde_yaml::to_string(&config).unwrap();
        let reloaded: BuildConfig = serde_yaml::from_str(&rendered).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_json_round_trip_is_identity() {
        let config = BuildConfig::default();
        let rendered = serde_json::to_string(&config).unwrap();
        let reloaded: BuildConfig = serde_json::from_str(&rendered).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: BuildConfig = toml::from_str(r#"plugins = ["@tailwindcss/typography"]"#).unwrap();
        assert_eq!(config.content, BuildConfig::default().content);
        assert_eq!(config.plugins[0].as_str(), "@tailwindcss/typography");
    }
}
