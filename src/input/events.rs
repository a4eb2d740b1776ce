//! Generic pointer event types for cross-backend compatibility.
//!
//! Backends map their native touch/stylus events onto these types; the replay
//! tool deserializes them straight from JSON.

use crate::draw::StrokePoint;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one physical contact for as long as it stays on the surface.
///
/// Ids are only unique among live contacts; a backend may hand out the same
/// id again once the previous contact has lifted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointerId(pub i32);

impl fmt::Display for PointerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pointer {}", self.0)
    }
}

/// What happened to the triggering pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerAction {
    /// First contact of a gesture
    Down,
    /// Additional contact joining a gesture already in progress
    PointerDown,
    /// One or more live contacts moved
    Move,
    /// Last contact of a gesture lifted
    Up,
    /// A contact lifted while others stay down
    PointerUp,
    /// The backend aborted the gesture (palm rejection, focus loss, ...)
    Cancel,
}

/// Samples delivered for one live pointer within an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointerSamples {
    pub id: PointerId,
    /// Real samples, oldest first (batched history plus the current position)
    #[serde(default)]
    pub samples: Vec<StrokePoint>,
    /// Extrapolated samples that are replaced on the next move
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub predicted: Vec<StrokePoint>,
}

/// A single pointer event.
///
/// `pointer_id` names the contact that triggered the event. `pointers` lists
/// the live contacts with their samples; move events may carry several
/// fingers at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub action: PointerAction,
    pub pointer_id: PointerId,
    #[serde(default)]
    pub pointers: Vec<PointerSamples>,
}

impl PointerEvent {
    /// Event whose only pointer is the triggering one, with a single sample.
    pub fn single(action: PointerAction, id: i32, x: f64, y: f64) -> Self {
        Self {
            action,
            pointer_id: PointerId(id),
            pointers: vec![PointerSamples {
                id: PointerId(id),
                samples: vec![StrokePoint::new(x, y)],
                predicted: Vec::new(),
            }],
        }
    }

    pub fn down(id: i32, x: f64, y: f64) -> Self {
        Self::single(PointerAction::Down, id, x, y)
    }

    pub fn pointer_down(id: i32, x: f64, y: f64) -> Self {
        Self::single(PointerAction::PointerDown, id, x, y)
    }

    pub fn up(id: i32, x: f64, y: f64) -> Self {
        Self::single(PointerAction::Up, id, x, y)
    }

    pub fn pointer_up(id: i32, x: f64, y: f64) -> Self {
        Self::single(PointerAction::PointerUp, id, x, y)
    }

    /// Cancel events carry no samples.
    pub fn cancel(id: i32) -> Self {
        Self {
            action: PointerAction::Cancel,
            pointer_id: PointerId(id),
            pointers: Vec::new(),
        }
    }

    /// Batched move: one `(id, x, y)` entry per live pointer.
    pub fn moved(positions: &[(i32, f64, f64)]) -> Self {
        let pointers = positions
            .iter()
            .map(|&(id, x, y)| PointerSamples {
                id: PointerId(id),
                samples: vec![StrokePoint::new(x, y)],
                predicted: Vec::new(),
            })
            .collect::<Vec<_>>();
        let pointer_id = pointers.first().map_or(PointerId(0), |p| p.id);
        Self {
            action: PointerAction::Move,
            pointer_id,
            pointers,
        }
    }

    /// Samples for one pointer, if the event carries any.
    pub fn samples_for(&self, id: PointerId) -> Option<&PointerSamples> {
        self.pointers.iter().find(|p| p.id == id)
    }

    /// Most recent real sample of the triggering pointer.
    pub fn trigger_sample(&self) -> Option<StrokePoint> {
        self.samples_for(self.pointer_id)
            .and_then(|p| p.samples.last().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_batched_move_from_json() {
        let json = r#"{
            "action": "move",
            "pointer_id": 1,
            "pointers": [
                {"id": 1, "samples": [{"x": 1.0, "y": 2.0}, {"x": 3.0, "y": 4.0, "pressure": 0.5}]},
                {"id": 2, "samples": [{"x": 9.0, "y": 9.0}], "predicted": [{"x": 10.0, "y": 10.0}]}
            ]
        }"#;
        let event: PointerEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.action, PointerAction::Move);
        assert_eq!(event.pointers.len(), 2);

        let first = event.samples_for(PointerId(1)).unwrap();
        assert_eq!(first.samples[0].pressure, 1.0);
        assert_eq!(first.samples[1].pressure, 0.5);
        assert_eq!(event.samples_for(PointerId(2)).unwrap().predicted.len(), 1);
    }

    #[test]
    fn trigger_sample_uses_latest_sample_of_trigger() {
        let event = PointerEvent::moved(&[(4, 1.0, 1.0), (5, 2.0, 2.0)]);
        assert_eq!(event.pointer_id, PointerId(4));
        assert_eq!(event.trigger_sample(), Some(StrokePoint::new(1.0, 1.0)));
        assert_eq!(PointerEvent::cancel(3).trigger_sample(), None);
    }
}
