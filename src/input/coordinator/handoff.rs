use crate::authoring::{AuthoringEngine, FinishedBatch, StrokeHandle};
use log::{debug, warn};

use super::StrokeCoordinator;

impl<E: AuthoringEngine> StrokeCoordinator<E> {
    /// Moves every batch the engine has reported into the finished-stroke store.
    ///
    /// Called after each pointer event; backends whose engine reports from
    /// another thread also call it before rendering. Returns the number of
    /// strokes stored.
    pub fn dispatch_finished(&mut self) -> usize {
        let mut stored = 0;
        while let Ok(batch) = self.finished_rx.try_recv() {
            stored += self.hand_off(batch);
        }
        stored
    }

    /// Stores one batch in order, then releases its handles from the engine.
    ///
    /// Both steps happen within one `&mut self` call, so no snapshot can
    /// observe a released stroke that is missing from the store.
    fn hand_off(&mut self, batch: FinishedBatch) -> usize {
        let handles: Vec<StrokeHandle> = batch.iter().map(|(handle, _)| *handle).collect();

        for handle in &handles {
            // Engine-initiated finishes can arrive while the pointer is still tracked
            if let Some(pointer) = self.sessions.end_by_handle(*handle) {
                warn!("{handle} finished while {pointer} was still active; ending its session");
            }
        }

        let added = self
            .store
            .append(batch.into_iter().map(|(_, stroke)| stroke));
        self.engine.remove_finished_strokes(&handles);

        if added > 0 {
            self.needs_redraw = true;
        }
        debug!(
            "Handed off {added}/{} finished stroke(s) to the store",
            handles.len()
        );
        added
    }
}
