//! Stroke authoring capability.
//!
//! An authoring engine turns raw samples into stroke geometry. The
//! coordinator drives it through [`AuthoringEngine`] and receives finished
//! strokes back through a [`FinishedListener`], which is the sending half of a
//! single-consumer channel. The engine may notify from any thread; the owner
//! loop drains the receiving half.

mod polyline;

pub use polyline::{DeliveryMode, PolylineEngine, PolylineError};

use crate::draw::{Brush, FinishedStroke, StrokePoint};
use crate::input::PointerId;
use std::fmt;
use std::sync::mpsc::{self, Receiver, Sender};

/// Opaque id an engine hands out for one in-progress stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StrokeHandle(pub u64);

impl fmt::Display for StrokeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stroke #{}", self.0)
    }
}

/// Strokes completed together, in completion order.
pub type FinishedBatch = Vec<(StrokeHandle, FinishedStroke)>;

/// Sending half of the finished-stroke channel.
#[derive(Debug, Clone)]
pub struct FinishedListener {
    tx: Sender<FinishedBatch>,
}

impl FinishedListener {
    /// Delivers a batch. Returns `false` once the receiving side is gone.
    pub fn notify(&self, batch: FinishedBatch) -> bool {
        if batch.is_empty() {
            return true;
        }
        self.tx.send(batch).is_ok()
    }
}

/// Creates a connected listener/receiver pair.
pub fn finished_channel() -> (FinishedListener, Receiver<FinishedBatch>) {
    let (tx, rx) = mpsc::channel();
    (FinishedListener { tx }, rx)
}

/// Operations the stroke coordinator needs from an authoring engine.
///
/// Strokes are addressed by the pointer that draws them while in progress,
/// and by [`StrokeHandle`] once finished.
pub trait AuthoringEngine {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Registers a listener that receives every finished batch.
    fn add_finished_listener(&mut self, listener: FinishedListener);

    /// Begins a stroke for `pointer` at `sample` using `brush`.
    fn start_stroke(
        &mut self,
        pointer: PointerId,
        sample: StrokePoint,
        brush: Brush,
    ) -> Result<StrokeHandle, Self::Error>;

    /// Appends real samples (oldest first) and replaces any predicted tail.
    fn add_to_stroke(
        &mut self,
        pointer: PointerId,
        samples: &[StrokePoint],
        predicted: &[StrokePoint],
    ) -> Result<(), Self::Error>;

    /// Finalizes the stroke. Completion may be reported later, in a batch.
    fn finish_stroke(
        &mut self,
        pointer: PointerId,
        sample: Option<StrokePoint>,
    ) -> Result<(), Self::Error>;

    /// Discards the stroke without producing a [`FinishedStroke`].
    fn cancel_stroke(&mut self, pointer: PointerId) -> Result<(), Self::Error>;

    /// Drops finished strokes from the engine's active set once they are stored elsewhere.
    fn remove_finished_strokes(&mut self, handles: &[StrokeHandle]);
}
