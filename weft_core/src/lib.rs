//! # Weft Core
//!
//! Shared types and utilities for the Weft build-configuration system.
//!
//! This crate provides:
//! - Domain newtypes for configuration values (`ContentGlob`, `PluginRef`,
//!   `ColorValue`)
//! - Color-literal classification and validation (`color`)
//!
//! Construction through `new()` is checked; deserialization is not. The
//! configuration layer runs full validation after loading, so a value that
//! arrived through serde is only trusted once `config::validate` has passed.

pub mod color;
pub mod types;

// Re-export commonly used types for convenience
pub use types::{ColorFormat, ColorValue, ContentGlob, PluginRef};
