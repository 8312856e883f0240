//! Color-literal classification.
//!
//! Theme tokens under the `colors` category must be valid CSS color
//! literals. Three forms are accepted:
//! - hex: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA` (case preserved as given)
//! - functional: `rgb(r, g, b)` and `rgba(r, g, b, a)` with channels in
//!   0..=255 and alpha in 0.0..=1.0
//! - named: the CSS keyword colors in [`NAMED_COLORS`], matched
//!   case-insensitively

use std::sync::OnceLock;

use regex::Regex;

use crate::types::ColorFormat;

/// CSS keyword colors accepted as theme values.
///
/// The CSS 2.1 keyword set plus `orange` and `transparent`.
pub const NAMED_COLORS: &[&str] = &[
    "aqua",
    "black",
    "blue",
    "fuchsia",
    "gray",
    "green",
    "lime",
    "maroon",
    "navy",
    "olive",
    "orange",
    "purple",
    "red",
    "silver",
    "teal",
    "transparent",
    "white",
    "yellow",
];

fn hex_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap()
    })
}

fn rgb_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^(rgb|rgba)\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*([0-9]*\.?[0-9]+)\s*)?\)$",
        )
        .unwrap()
    })
}

/// Classify a color literal, returning `None` when it is not a valid color.
pub fn classify(value: &str) -> Option<ColorFormat> {
    let value = value.trim();

    if hex_re().is_match(value) {
        return Some(ColorFormat::Hex);
    }

    if let Some(caps) = rgb_re().captures(value) {
        // rgb() takes exactly three channels, rgba() requires the alpha
        let has_alpha = caps.get(5).is_some();
        if (&caps[1] == "rgb") == has_alpha {
            return None;
        }
        for channel in 2..=4 {
            let parsed: u16 = caps[channel].parse().ok()?;
            if parsed > 255 {
                return None;
            }
        }
        if let Some(alpha) = caps.get(5) {
            let parsed: f32 = alpha.as_str().parse().ok()?;
            if parsed > 1.0 {
                return None;
            }
        }
        return Some(ColorFormat::Rgb);
    }

    if NAMED_COLORS.iter().any(|n| n.eq_ignore_ascii_case(value)) {
        return Some(ColorFormat::Named);
    }

    None
}

/// Whether a string is a valid color literal in any accepted form.
pub fn is_valid(value: &str) -> bool {
    classify(value).is_some()
}
