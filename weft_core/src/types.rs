use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::color;

/// The syntactic form of a color literal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ColorFormat {
    Hex,
    Rgb,
    Named,
}

/// A path-glob pattern scanned for utility-class usage.
///
/// Serde-transparent over the raw pattern string; deserialization does not
/// validate. Use [`ContentGlob::new`] for checked construction, or run the
/// configuration validator after loading.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ContentGlob(String);

impl ContentGlob {
    /// Largest accepted pattern, in bytes.
    pub const MAX_LEN: usize = 512;

    pub fn new(pattern: String) -> Option<Self> {
        if Self::violation(&pattern).is_some() {
            None
        } else {
            Some(Self(pattern))
        }
    }

    /// Why a pattern is not a valid content glob, or `None` when it is.
    pub fn violation(pattern: &str) -> Option<&'static str> {
        if pattern.is_empty() {
            Some("pattern is empty")
        } else if pattern.len() > Self::MAX_LEN {
            Some("pattern exceeds 512 bytes")
        } else if pattern.contains('\0') {
            Some("pattern contains a NUL byte")
        } else if pattern.matches('{').count() != pattern.matches('}').count() {
            Some("unbalanced braces in pattern")
        } else {
            None
        }
    }

    pub fn is_valid(pattern: &str) -> bool {
        Self::violation(pattern).is_none()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<&str> for ContentGlob {
    /// Unchecked construction, mirroring what serde admits. The
    /// configuration validator is the gate.
    fn from(pattern: &str) -> Self {
        Self(pattern.to_string())
    }
}

impl From<String> for ContentGlob {
    fn from(pattern: String) -> Self {
        Self(pattern)
    }
}

impl std::fmt::Display for ContentGlob {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ContentGlob {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_string()).ok_or_else(|| anyhow::anyhow!("Invalid content glob"))
    }
}

/// An opaque plugin reference resolved by the external build tool.
///
/// References follow the npm package-name shape, optionally scoped
/// (`@scope/name`). Resolution to an installed package is the external
/// tool's concern; only the syntax is checked here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct PluginRef(String);

impl PluginRef {
    /// npm caps package names at 214 characters.
    pub const MAX_LEN: usize = 214;

    pub fn new(reference: String) -> Option<Self> {
        if Self::violation(&reference).is_some() {
            None
        } else {
            Some(Self(reference))
        }
    }

    /// Why a reference is not a valid plugin reference, or `None` when it is.
    pub fn violation(reference: &str) -> Option<&'static str> {
        fn segment_ok(segment: &str) -> bool {
            let mut chars = segment.chars();
            match chars.next() {
                Some(c) if c.is_ascii_lowercase() || c.is_ascii_digit() => {}
                _ => return false,
            }
            chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || "._-".contains(c))
        }

        if reference.is_empty() {
            return Some("reference is empty");
        }
        if reference.len() > Self::MAX_LEN {
            return Some("reference exceeds 214 characters");
        }

        let ok = match reference.strip_prefix('@') {
            Some(scoped) => match scoped.split_once('/') {
                Some((scope, name)) => segment_ok(scope) && segment_ok(name),
                None => false,
            },
            None => segment_ok(reference),
        };

        if ok {
            None
        } else {
            Some("reference is not a valid package name")
        }
    }

    pub fn is_valid(reference: &str) -> bool {
        Self::violation(reference).is_none()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<&str> for PluginRef {
    /// Unchecked construction, mirroring what serde admits. The
    /// configuration validator is the gate.
    fn from(reference: &str) -> Self {
        Self(reference.to_string())
    }
}

impl From<String> for PluginRef {
    fn from(reference: String) -> Self {
        Self(reference)
    }
}

impl std::fmt::Display for PluginRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PluginRef {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_string()).ok_or_else(|| anyhow::anyhow!("Invalid plugin reference"))
    }
}

/// A validated color literal, case preserved exactly as written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ColorValue(String);

impl ColorValue {
    pub fn new(value: String) -> Option<Self> {
        if color::is_valid(&value) {
            Some(Self(value))
        } else {
            None
        }
    }

    /// The syntactic form of this literal.
    pub fn format(&self) -> ColorFormat {
        // new() only admits classifiable literals
        color::classify(&self.0).unwrap_or(ColorFormat::Named)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for ColorValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ColorValue {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_string()).ok_or_else(|| anyhow::anyhow!("Invalid color literal"))
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_content_glob_new_valid() {
        let glob = ContentGlob::new("./js/**/*.{js,jsx,ts,tsx}".to_string()).unwrap();
        assert_eq!(glob.as_str(), "./js/**/*.{js,jsx,ts,tsx}");
    }

    #[test]
    fn test_content_glob_rejects_empty() {
        assert!(ContentGlob::new(String::new()).is_none());
        assert_eq!(ContentGlob::violation(""), Some("pattern is empty"));
    }

    #[test]
    fn test_content_glob_rejects_oversized() {
        let long = "a".repeat(ContentGlob::MAX_LEN + 1);
        assert!(ContentGlob::new(long).is_none());
    }

    #[test]
    fn test_content_glob_rejects_unbalanced_braces() {
        assert!(ContentGlob::new("./js/**/*.{js,jsx".to_string()).is_none());
        assert_eq!(
            ContentGlob::violation("./js/**/*.{js,jsx"),
            Some("unbalanced braces in pattern")
        );
    }

    #[test]
    fn test_content_glob_display_roundtrip() {
        let glob = ContentGlob::from("../lib/*_web.ex");
        assert_eq!(glob.to_string(), "../lib/*_web.ex");
        assert_eq!(glob.clone().into_inner(), "../lib/*_web.ex");
    }

    #[test]
    fn test_content_glob_from_str() {
        assert!(ContentGlob::from_str("../lib/*_web/**/*.*ex").is_ok());
        assert!(ContentGlob::from_str("").is_err());
    }

    #[test]
    fn test_plugin_ref_scoped() {
        let plugin = PluginRef::new("@tailwindcss/forms".to_string()).unwrap();
        assert_eq!(plugin.as_str(), "@tailwindcss/forms");
    }

    #[test]
    fn test_plugin_ref_unscoped() {
        assert!(PluginRef::new("typography".to_string()).is_some());
        assert!(PluginRef::new("my-plugin.v2".to_string()).is_some());
    }

    #[test]
    fn test_plugin_ref_rejects_bad_shapes() {
        assert!(PluginRef::new(String::new()).is_none());
        assert!(PluginRef::new("@scope-without-name".to_string()).is_none());
        assert!(PluginRef::new("UpperCase".to_string()).is_none());
        assert!(PluginRef::new(".leading-dot".to_string()).is_none());
        assert!(PluginRef::new("has space".to_string()).is_none());
    }

    #[test]
    fn test_plugin_ref_rejects_oversized() {
        let long = "a".repeat(PluginRef::MAX_LEN + 1);
        assert!(PluginRef::new(long).is_none());
    }

    #[test]
    fn test_plugin_ref_from_str() {
        assert!(PluginRef::from_str("@tailwindcss/forms").is_ok());
        assert!(PluginRef::from_str("not valid!").is_err());
    }

    #[test]
    fn test_color_value_preserves_case() {
        let color = ColorValue::new("#FD4F00".to_string()).unwrap();
        assert_eq!(color.as_str(), "#FD4F00");
        assert_eq!(color.to_string(), "#FD4F00");
    }

    #[test]
    fn test_color_value_rejects_invalid() {
        assert!(ColorValue::new("#ZZZZZZ".to_string()).is_none());
        assert!(ColorValue::from_str("blurple").is_err());
    }

    #[test]
    fn test_color_value_format() {
        assert_eq!(
            ColorValue::new("#FD4F00".to_string()).unwrap().format(),
            ColorFormat::Hex
        );
        assert_eq!(
            ColorValue::new("rgb(1, 2, 3)".to_string()).unwrap().format(),
            ColorFormat::Rgb
        );
        assert_eq!(
            ColorValue::new("teal".to_string()).unwrap().format(),
            ColorFormat::Named
        );
    }

    #[test]
    fn test_color_format_display() {
        assert_eq!(ColorFormat::Hex.to_string(), "hex");
        assert_eq!(ColorFormat::Rgb.to_string(), "rgb");
        assert_eq!(ColorFormat::Named.to_string(), "named");
    }
}
