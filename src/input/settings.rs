//! Current brush settings as edited by the toolbar.

use crate::config::BrushConfig;
use crate::draw::{Brush, BrushError, BrushFamily, Color};
use log::warn;

/// Smallest stroke size the size slider allows.
pub const MIN_BRUSH_SIZE: f64 = 1.0;
/// Largest stroke size the size slider allows.
pub const MAX_BRUSH_SIZE: f64 = 50.0;

/// Mutable brush settings owned by the UI layer.
///
/// Each pointer-down takes a [`Brush`] snapshot from these settings; edits made
/// afterwards only affect strokes that start later.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushSettings {
    pub color: Color,
    pub size: f64,
    pub family: BrushFamily,
    pub epsilon: f64,
}

impl Default for BrushSettings {
    fn default() -> Self {
        Self {
            color: crate::draw::BLACK,
            size: 5.0,
            family: BrushFamily::Marker,
            epsilon: 0.1,
        }
    }
}

impl BrushSettings {
    /// Builds settings from the `[brush]` config section.
    pub fn from_config(config: &BrushConfig) -> Self {
        Self {
            color: config.default_color.to_color(),
            size: config.default_size,
            family: config.family,
            epsilon: config.epsilon,
        }
    }

    /// Sets the ink color, clamping components into 0.0..=1.0.
    pub fn set_color(&mut self, color: Color) {
        if !color.is_normalized() {
            warn!("Brush color {color:?} is out of range; clamping");
        }
        self.color = color.clamped();
    }

    /// Sets the stroke size, clamped to the slider range.
    pub fn set_size(&mut self, size: f64) {
        self.size = if size.is_nan() {
            MIN_BRUSH_SIZE
        } else {
            size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE)
        };
    }

    /// Takes an immutable snapshot for a stroke that is starting now.
    pub fn brush(&self) -> Result<Brush, BrushError> {
        Brush::new(self.family, self.color, self.size, self.epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLACK, RED};

    #[test]
    fn defaults_match_toolbar() {
        let brush = BrushSettings::default().brush().unwrap();
        assert_eq!(brush.color(), BLACK);
        assert_eq!(brush.size(), 5.0);
        assert_eq!(brush.epsilon(), 0.1);
        assert_eq!(brush.family(), BrushFamily::Marker);
    }

    #[test]
    fn set_size_clamps_to_slider_range() {
        let mut settings = BrushSettings::default();
        settings.set_size(0.0);
        assert_eq!(settings.size, MIN_BRUSH_SIZE);
        settings.set_size(500.0);
        assert_eq!(settings.size, MAX_BRUSH_SIZE);
        settings.set_size(f64::NAN);
        assert_eq!(settings.size, MIN_BRUSH_SIZE);
        settings.set_size(12.5);
        assert_eq!(settings.size, 12.5);
    }

    #[test]
    fn set_color_clamps_out_of_range_components() {
        let mut settings = BrushSettings::default();
        settings.set_color(Color::new(2.0, 0.5, -1.0, 1.5));
        assert_eq!(settings.color, Color::new(1.0, 0.5, 0.0, 1.0));
        assert!(settings.brush().is_ok());
    }

    #[test]
    fn snapshot_is_detached_from_settings() {
        let mut settings = BrushSettings::default();
        let brush = settings.brush().unwrap();
        settings.set_color(RED);
        settings.set_size(20.0);
        assert_eq!(brush.color(), BLACK);
        assert_eq!(brush.size(), 5.0);
    }
}
