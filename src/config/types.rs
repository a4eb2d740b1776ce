//! Configuration type definitions.

use super::enums::{CancelScope, ColorSpec, DuplicateSessionPolicy};
use crate::draw::BrushFamily;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Brush defaults applied when the canvas opens.
///
/// Users change color and size at runtime through the toolbar; these values
/// only seed the initial [`BrushSettings`](crate::input::BrushSettings).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BrushConfig {
    /// Default ink color - a palette name (black, red, green, blue, yellow, white),
    /// a hex string like `"#1E88E5"`, or an RGB array like `[30, 136, 229]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default stroke size in pixels (valid range: 1.0 - 50.0)
    #[serde(default = "default_size")]
    pub default_size: f64,

    /// Minimum distance between retained samples (valid range: 0.01 - 10.0)
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,

    /// Brush shape family (marker, pen, highlighter)
    #[serde(default)]
    pub family: BrushFamily,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_size: default_size(),
            epsilon: default_epsilon(),
            family: BrushFamily::default(),
        }
    }
}

/// Pointer input handling.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct InputConfig {
    /// Whether a cancel event aborts only its own pointer or the whole gesture
    #[serde(default)]
    pub cancel_scope: CancelScope,

    /// What to do when a pointer goes down while it already has a session
    #[serde(default)]
    pub duplicate_session: DuplicateSessionPolicy,
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_size() -> f64 {
    5.0
}

fn default_epsilon() -> f64 {
    0.1
}
