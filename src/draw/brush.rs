//! Brush description captured when a stroke starts.

use super::color::Color;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shape family that determines how a stroke's outline is tessellated and capped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum BrushFamily {
    /// Uniform width, round caps (default)
    #[default]
    Marker,
    /// Pressure-sensitive width, round caps
    Pen,
    /// Translucent, square caps
    Highlighter,
}

/// Errors produced when constructing a [`Brush`] from raw values.
#[derive(Debug, Error, PartialEq)]
pub enum BrushError {
    #[error("brush size must be a positive finite number, got {0}")]
    InvalidSize(f64),

    #[error("brush epsilon must be a positive finite number, got {0}")]
    InvalidEpsilon(f64),

    #[error("brush color components must lie in 0.0..=1.0")]
    InvalidColor,
}

/// Immutable brush snapshot.
///
/// A stroke records the brush that was current when its pointer went down;
/// later changes to the UI settings produce new `Brush` values and never touch
/// this one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brush {
    color: Color,
    size: f64,
    family: BrushFamily,
    epsilon: f64,
}

impl Brush {
    /// Creates a brush, rejecting non-positive size/epsilon and denormalized colors.
    pub fn new(
        family: BrushFamily,
        color: Color,
        size: f64,
        epsilon: f64,
    ) -> Result<Self, BrushError> {
        if !(size.is_finite() && size > 0.0) {
            return Err(BrushError::InvalidSize(size));
        }
        if !(epsilon.is_finite() && epsilon > 0.0) {
            return Err(BrushError::InvalidEpsilon(epsilon));
        }
        if !color.is_normalized() {
            return Err(BrushError::InvalidColor);
        }
        Ok(Self {
            color,
            size,
            family,
            epsilon,
        })
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn family(&self) -> BrushFamily {
        self.family
    }

    /// Smallest distance between two consecutive retained samples.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, RED};

    #[test]
    fn new_accepts_valid_values() {
        let brush = Brush::new(BrushFamily::Marker, RED, 5.0, 0.1).unwrap();
        assert_eq!(brush.color(), RED);
        assert_eq!(brush.size(), 5.0);
        assert_eq!(brush.epsilon(), 0.1);
        assert_eq!(brush.family(), BrushFamily::Marker);
    }

    #[test]
    fn new_rejects_bad_size_and_epsilon() {
        assert_eq!(
            Brush::new(BrushFamily::Pen, BLACK, 0.0, 0.1),
            Err(BrushError::InvalidSize(0.0))
        );
        assert!(matches!(
            Brush::new(BrushFamily::Pen, BLACK, f64::NAN, 0.1),
            Err(BrushError::InvalidSize(_))
        ));
        assert_eq!(
            Brush::new(BrushFamily::Pen, BLACK, 3.0, -1.0),
            Err(BrushError::InvalidEpsilon(-1.0))
        );
    }

    #[test]
    fn new_rejects_denormalized_color() {
        let color = Color::new(2.0, 0.0, 0.0, 1.0);
        assert_eq!(
            Brush::new(BrushFamily::Marker, color, 3.0, 0.1),
            Err(BrushError::InvalidColor)
        );
    }
}
