//! Finished stroke geometry.

use super::brush::Brush;
use crate::authoring::StrokeHandle;
use serde::{Deserialize, Serialize};

/// One input sample in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokePoint {
    pub x: f64,
    pub y: f64,
    /// Normalized contact pressure; devices without pressure report 1.0
    #[serde(default = "default_pressure")]
    pub pressure: f64,
}

fn default_pressure() -> f64 {
    1.0
}

impl StrokePoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            pressure: default_pressure(),
        }
    }

    pub fn with_pressure(x: f64, y: f64, pressure: f64) -> Self {
        Self { x, y, pressure }
    }

    /// Euclidean distance to another sample.
    pub fn distance_to(&self, other: &StrokePoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A completed, immutable stroke ready for display.
///
/// Produced by an authoring engine when a pointer lifts; ownership then moves
/// into the [`FinishedStrokeStore`](super::FinishedStrokeStore).
#[derive(Debug, Clone, PartialEq)]
pub struct FinishedStroke {
    handle: StrokeHandle,
    brush: Brush,
    points: Vec<StrokePoint>,
}

impl FinishedStroke {
    pub fn new(handle: StrokeHandle, brush: Brush, points: Vec<StrokePoint>) -> Self {
        Self {
            handle,
            brush,
            points,
        }
    }

    /// Handle the stroke was authored under; identifies the stroke in the store.
    pub fn handle(&self) -> StrokeHandle {
        self.handle
    }

    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    pub fn points(&self) -> &[StrokePoint] {
        &self.points
    }
}
