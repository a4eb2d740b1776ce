//! In-process authoring engine that records strokes as polylines.

use super::{AuthoringEngine, FinishedBatch, FinishedListener, StrokeHandle};
use crate::draw::{Brush, FinishedStroke, StrokePoint};
use crate::input::PointerId;
use log::{debug, trace};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// When finished strokes are reported to listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeliveryMode {
    /// Each `finish_stroke` reports its stroke right away
    #[default]
    Immediate,
    /// Finished strokes queue up until [`PolylineEngine::flush_finished`]
    Deferred,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolylineError {
    #[error("{0} already has a stroke in progress")]
    PointerBusy(PointerId),

    #[error("{0} has no stroke in progress")]
    UnknownPointer(PointerId),

    #[error("in-progress stroke limit ({0}) reached")]
    TooManyStrokes(usize),
}

#[derive(Debug)]
struct InProgressStroke {
    handle: StrokeHandle,
    brush: Brush,
    points: Vec<StrokePoint>,
    predicted: Vec<StrokePoint>,
}

impl InProgressStroke {
    /// Keeps a sample only if it moved at least `epsilon` from the previous one.
    fn push(&mut self, sample: StrokePoint) {
        let far_enough = self
            .points
            .last()
            .is_none_or(|last| last.distance_to(&sample) >= self.brush.epsilon());
        if far_enough {
            self.points.push(sample);
        }
    }
}

/// Authoring engine that keeps every retained sample as a polyline vertex.
///
/// Samples closer than the brush epsilon to their predecessor are dropped.
/// Finished strokes stay in the engine's active set (by handle only) until
/// [`AuthoringEngine::remove_finished_strokes`] releases them.
#[derive(Debug, Default)]
pub struct PolylineEngine {
    mode: DeliveryMode,
    /// Maximum simultaneous in-progress strokes (0 = unlimited)
    max_in_progress: usize,
    next_handle: u64,
    in_progress: HashMap<PointerId, InProgressStroke>,
    pending: FinishedBatch,
    awaiting_release: HashSet<StrokeHandle>,
    listeners: Vec<FinishedListener>,
}

impl PolylineEngine {
    pub fn new(mode: DeliveryMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Caps the number of simultaneous in-progress strokes (0 = unlimited).
    pub fn with_max_in_progress(mut self, max: usize) -> Self {
        self.max_in_progress = max;
        self
    }

    /// Reports all queued finished strokes to the listeners as one batch.
    ///
    /// Returns the number of strokes delivered.
    pub fn flush_finished(&mut self) -> usize {
        if self.pending.is_empty() {
            return 0;
        }
        let batch = std::mem::take(&mut self.pending);
        let count = batch.len();
        self.listeners.retain(|listener| listener.notify(batch.clone()));
        debug!("Delivered {count} finished stroke(s)");
        count
    }

    /// Number of strokes still being authored.
    pub fn in_progress_count(&self) -> usize {
        self.in_progress.len()
    }

    /// Samples accumulated so far for a pointer's stroke, predicted tail included.
    pub fn in_progress_points(&self, pointer: PointerId) -> Option<Vec<StrokePoint>> {
        self.in_progress.get(&pointer).map(|stroke| {
            stroke
                .points
                .iter()
                .chain(stroke.predicted.iter())
                .copied()
                .collect()
        })
    }

    /// True if the stroke has finished but not yet been released.
    pub fn is_awaiting_release(&self, handle: StrokeHandle) -> bool {
        self.awaiting_release.contains(&handle)
    }

    pub fn awaiting_release_count(&self) -> usize {
        self.awaiting_release.len()
    }
}

impl AuthoringEngine for PolylineEngine {
    type Error = PolylineError;

    fn add_finished_listener(&mut self, listener: FinishedListener) {
        self.listeners.push(listener);
    }

    fn start_stroke(
        &mut self,
        pointer: PointerId,
        sample: StrokePoint,
        brush: Brush,
    ) -> Result<StrokeHandle, PolylineError> {
        if self.in_progress.contains_key(&pointer) {
            return Err(PolylineError::PointerBusy(pointer));
        }
        if self.max_in_progress > 0 && self.in_progress.len() >= self.max_in_progress {
            return Err(PolylineError::TooManyStrokes(self.max_in_progress));
        }

        self.next_handle += 1;
        let handle = StrokeHandle(self.next_handle);
        self.in_progress.insert(
            pointer,
            InProgressStroke {
                handle,
                brush,
                points: vec![sample],
                predicted: Vec::new(),
            },
        );
        trace!("Started {handle} for {pointer}");
        Ok(handle)
    }

    fn add_to_stroke(
        &mut self,
        pointer: PointerId,
        samples: &[StrokePoint],
        predicted: &[StrokePoint],
    ) -> Result<(), PolylineError> {
        let stroke = self
            .in_progress
            .get_mut(&pointer)
            .ok_or(PolylineError::UnknownPointer(pointer))?;
        for sample in samples {
            stroke.push(*sample);
        }
        stroke.predicted = predicted.to_vec();
        Ok(())
    }

    fn finish_stroke(
        &mut self,
        pointer: PointerId,
        sample: Option<StrokePoint>,
    ) -> Result<(), PolylineError> {
        let mut stroke = self
            .in_progress
            .remove(&pointer)
            .ok_or(PolylineError::UnknownPointer(pointer))?;
        if let Some(sample) = sample {
            stroke.push(sample);
        }

        let handle = stroke.handle;
        self.awaiting_release.insert(handle);
        self.pending
            .push((handle, FinishedStroke::new(handle, stroke.brush, stroke.points)));
        trace!("Finished {handle} for {pointer}");

        if self.mode == DeliveryMode::Immediate {
            self.flush_finished();
        }
        Ok(())
    }

    fn cancel_stroke(&mut self, pointer: PointerId) -> Result<(), PolylineError> {
        let stroke = self
            .in_progress
            .remove(&pointer)
            .ok_or(PolylineError::UnknownPointer(pointer))?;
        trace!("Cancelled {} for {pointer}", stroke.handle);
        Ok(())
    }

    fn remove_finished_strokes(&mut self, handles: &[StrokeHandle]) {
        for handle in handles {
            self.awaiting_release.remove(handle);
        }
    }
}
