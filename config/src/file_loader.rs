//! # Configuration File Loading
//!
//! Loads the build configuration from TOML or YAML files.
//!
//! Supports automatic format detection based on file extension. A partial
//! file is fine: omitted fields fall back to the embedded declaration.

use std::path::Path;

use errors::ConfigError;

use crate::config::BuildConfig;

/// Configuration file loading error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    TomlParse(String),

    #[error("Failed to parse YAML: {0}")]
    YamlParse(String),

    #[error("Config file has no extension")]
    NoExtension,

    #[error("Unsupported config file format: {0}")]
    UnsupportedFormat(String),
}

impl From<ConfigFileError> for ConfigError {
    fn from(error: ConfigFileError) -> Self {
        match error {
            ConfigFileError::FileNotFound(path) => ConfigError::Io {
                path,
                reason: "file not found".to_string(),
            },
            ConfigFileError::Io(e) => ConfigError::Io {
                path: String::new(),
                reason: e.to_string(),
            },
            other => ConfigError::Malformed {
                reason: other.to_string(),
            },
        }
    }
}

/// Load the build configuration from a TOML file.
///
/// # M-CANONICAL-DOCS
///
/// ## Purpose
/// Loads the configuration record from a TOML format file. Fields the file
/// omits keep their embedded-declaration values.
///
/// ## Usage
/// ```rust,no_run
/// use std::path::Path;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = config::load_from_toml(Path::new("weft.toml"))?;
///     println!("{} plugin(s)", config.plugins.len());
///     Ok(())
/// }
/// ```
///
/// ## Error Handling
/// Returns `ConfigFileError` for:
/// - File not found
/// - Invalid TOML syntax
pub fn load_from_toml(path: &Path) -> Result<BuildConfig, ConfigFileError> {
    let contents = std::fs::read_to_string(path)
        .map_err(|_e| ConfigFileError::FileNotFound(path.display().to_string()))?;

    let config: BuildConfig =
        toml::from_str(&contents).map_err(|e| ConfigFileError::TomlParse(e.to_string()))?;

    Ok(config)
}

/// Load the build configuration from a YAML file.
///
/// ## Error Handling
/// Returns `ConfigFileError` for:
/// - File not found
/// - Invalid YAML syntax
pub fn load_from_yaml(path: &Path) -> Result<BuildConfig, ConfigFileError> {
    let contents = std::fs::read_to_string(path)
        .map_err(|_e| ConfigFileError::FileNotFound(path.display().to_string()))?;

    let config: BuildConfig =
        serde_yaml::from_str(&contents).map_err(|e| ConfigFileError::YamlParse(e.to_string()))?;

    Ok(config)
}

/// Load the build configuration from file with auto-detection.
///
/// # M-CANONICAL-DOCS
///
/// ## Purpose
/// Loads the configuration from file, detecting the format from the
/// extension.
///
/// ## Supported Formats
/// - `.toml`: TOML format
/// - `.yaml`: YAML format
/// - `.yml`: YAML format
///
/// ## Error Handling
/// Returns `ConfigFileError` for:
/// - File not found
/// - Missing or unsupported file extension
/// - Parse errors for the detected format
pub fn load_from_file(path: &Path) -> Result<BuildConfig, ConfigFileError> {
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .ok_or(ConfigFileError::NoExtension)?;

    match extension.to_lowercase().as_str() {
        "toml" => load_from_toml(path),
        "yaml" | "yml" => load_from_yaml(path),
        other => Err(ConfigFileError::UnsupportedFormat(other.to_string())),
    }
}
