//! # Weft Errors
//!
//! Error handling for the Weft build-configuration system.
//!
//! - Uses `thiserror` for structured error definitions
//! - Provides `Display` and `Error` trait implementations
//! - Includes error context for debugging

use thiserror::Error;

/// Build-configuration errors.
///
/// Every variant is a flavor of the same failure kind: the declaration
/// cannot be parsed or constructed into a valid configuration. All of them
/// are fatal at build-tool startup. There is no recovery or retry path,
/// since the configuration is static and deterministic: a re-attempt
/// without a source change fails identically.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Malformed configuration: {reason}")]
    Malformed { reason: String },

    #[error("Failed to read configuration: {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("Content globs must not be empty: the scanner would have no input")]
    EmptyContent,

    #[error("Invalid content glob: {pattern:?}: {reason}")]
    InvalidGlob { pattern: String, reason: String },

    #[error("Invalid color literal: {category}.{token} = {value:?}")]
    InvalidColor {
        category: String,
        token: String,
        value: String,
    },

    #[error("Invalid plugin reference: {reference:?}: {reason}")]
    InvalidPlugin { reference: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_display() {
        let err = ConfigError::Malformed {
            reason: "unexpected token".to_string(),
        };
        assert_eq!(err.to_string(), "Malformed configuration: unexpected token");
    }

    #[test]
    fn test_empty_content_display() {
        let err = ConfigError::EmptyContent;
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn test_invalid_color_display() {
        let err = ConfigError::InvalidColor {
            category: "colors".to_string(),
            token: "brand".to_string(),
            value: "#ZZZZZZ".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("colors.brand"));
        assert!(rendered.contains("#ZZZZZZ"));
    }

    #[test]
    fn test_invalid_plugin_display() {
        let err = ConfigError::InvalidPlugin {
            reference: "Not Valid".to_string(),
            reason: "reference is not a valid package name".to_string(),
        };
        assert!(err.to_string().contains("Not Valid"));
    }
}
