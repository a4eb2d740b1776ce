//! Configuration enum types.

use crate::draw::{BLACK, Color};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Which sessions a cancel event aborts.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum CancelScope {
    /// Only the pointer named by the cancel event
    #[default]
    Pointer,
    /// Every active pointer (the whole gesture)
    Gesture,
}

/// Reaction to a pointer-down for a pointer that already has a live session.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicateSessionPolicy {
    /// `panic` in debug builds, `restart` in release builds
    #[default]
    Auto,
    /// Abort immediately
    Panic,
    /// Cancel the stale stroke and start a fresh one
    Restart,
}

impl DuplicateSessionPolicy {
    /// Resolves `Auto` against the current build profile.
    pub fn resolve(self) -> Self {
        match self {
            DuplicateSessionPolicy::Auto if cfg!(debug_assertions) => DuplicateSessionPolicy::Panic,
            DuplicateSessionPolicy::Auto => DuplicateSessionPolicy::Restart,
            other => other,
        }
    }
}

/// Color specification - a palette name, a hex string, or RGB values.
///
/// # Examples
/// ```toml
/// # Palette name
/// default_color = "blue"
///
/// # Hex string
/// default_color = "#E53935"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Palette name (black, red, green, blue, yellow, white) or `#RRGGBB`
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Unknown names fall back to black with a warning.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => crate::util::parse_color(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using black", name);
                BLACK
            }),
            ColorSpec::Rgb([r, g, b]) => Color::from_argb(
                0xFF00_0000 | (u32::from(*r) << 16) | (u32::from(*g) << 8) | u32::from(*b),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLUE, RED};

    #[test]
    fn color_spec_accepts_names_hex_and_rgb() {
        assert_eq!(ColorSpec::Name("Blue".into()).to_color(), BLUE);
        assert_eq!(ColorSpec::Name("#e53935".into()).to_color(), RED);
        assert_eq!(ColorSpec::Rgb([0xE5, 0x39, 0x35]).to_color(), RED);
        assert_eq!(ColorSpec::Name("mauve".into()).to_color(), BLACK);
    }

    #[test]
    fn auto_policy_resolves_to_concrete_policy() {
        let resolved = DuplicateSessionPolicy::Auto.resolve();
        assert_ne!(resolved, DuplicateSessionPolicy::Auto);
        assert_eq!(
            DuplicateSessionPolicy::Restart.resolve(),
            DuplicateSessionPolicy::Restart
        );
    }
}
