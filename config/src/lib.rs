//! # Configuration System
//!
//! Build configuration for the Weft utility-class CSS pipeline.
//!
//! This crate provides:
//! - The [`BuildConfig`] record consumed by the external build tool
//! - The embedded default declaration (content globs, theme extensions,
//!   plugins)
//! - Configuration file loading (TOML/YAML)
//! - Environment variable loading (12-factor app principles)
//! - Configuration precedence (CLI > env > file > defaults)
//! - Configuration validation
//!
//! # Best Practices
//!
//! - Uses `validator` crate for input validation
//! - Follows 12-factor app configuration principles
//! - Provides clear error messages for invalid configuration
//!
//! The record is constructed once at build startup, is read-only for the
//! duration of the build, and is discarded afterwards. There is no hot
//! reload; a configuration change requires a new build invocation.

pub mod config;
pub mod file_loader;
pub mod loader;
pub mod precedence;
pub mod provider;
pub mod validator;

pub use self::validator::{explain, validate};
pub use ::validator::Validate;
pub use config::{BuildConfig, ThemeConfig, COLORS_CATEGORY};
pub use file_loader::{load_from_file, load_from_toml, load_from_yaml};
pub use loader::load_from_env;
pub use precedence::merge_configs;
pub use provider::{assemble, discover_config_file, load_configuration, load_with_overrides};
