//! Ordered store of finished strokes.

use super::stroke::FinishedStroke;
use crate::authoring::StrokeHandle;
use log::{debug, warn};
use std::collections::HashSet;
use std::sync::Arc;

/// Point-in-time view of the store handed to the render pass.
///
/// Cloning is cheap; the view never changes after it is taken, even if the
/// store is appended to or cleared in the meantime.
pub type StrokeSnapshot = Arc<Vec<FinishedStroke>>;

/// Container for every stroke that has finished authoring.
///
/// Strokes are kept in finish order (first = bottom layer, last = top layer).
/// Writes are copy-on-write against outstanding snapshots, so a renderer
/// holding a [`StrokeSnapshot`] always sees either the state before a write or
/// the state after it.
#[derive(Debug, Default)]
pub struct FinishedStrokeStore {
    strokes: StrokeSnapshot,
    handles: HashSet<StrokeHandle>,
}

impl FinishedStrokeStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends strokes in the order given, skipping any whose handle is already stored.
    ///
    /// Returns how many strokes were actually added.
    pub fn append<I>(&mut self, strokes: I) -> usize
    where
        I: IntoIterator<Item = FinishedStroke>,
    {
        let mut added = 0;
        let mut incoming = strokes.into_iter().peekable();
        if incoming.peek().is_none() {
            return 0;
        }

        let list = Arc::make_mut(&mut self.strokes);
        for stroke in incoming {
            if !self.handles.insert(stroke.handle()) {
                warn!(
                    "Stroke {:?} is already stored; ignoring duplicate hand-off",
                    stroke.handle()
                );
                continue;
            }
            list.push(stroke);
            added += 1;
        }
        debug!("Stored {added} finished stroke(s), {} total", list.len());
        added
    }

    /// Removes every stored stroke in one step.
    pub fn clear(&mut self) {
        self.strokes = Arc::new(Vec::new());
        self.handles.clear();
    }

    /// Returns the current contents for rendering.
    pub fn snapshot(&self) -> StrokeSnapshot {
        Arc::clone(&self.strokes)
    }

    /// Returns true if a stroke with this handle has been stored.
    pub fn contains(&self, handle: StrokeHandle) -> bool {
        self.handles.contains(&handle)
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLACK, Brush, BrushFamily, StrokePoint};

    fn stroke(handle: u64) -> FinishedStroke {
        let brush = Brush::new(BrushFamily::Marker, BLACK, 5.0, 0.1).unwrap();
        FinishedStroke::new(
            StrokeHandle(handle),
            brush,
            vec![StrokePoint::new(0.0, 0.0), StrokePoint::new(1.0, 1.0)],
        )
    }

    #[test]
    fn append_preserves_order() {
        let mut store = FinishedStrokeStore::new();
        assert_eq!(store.append([stroke(2), stroke(1)]), 2);
        assert_eq!(store.append([stroke(3)]), 1);

        let handles: Vec<_> = store.snapshot().iter().map(|s| s.handle().0).collect();
        assert_eq!(handles, vec![2, 1, 3]);
    }

    #[test]
    fn append_skips_duplicate_handles() {
        let mut store = FinishedStrokeStore::new();
        store.append([stroke(7)]);
        assert_eq!(store.append([stroke(7), stroke(8)]), 1);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn snapshot_is_unaffected_by_later_writes() {
        let mut store = FinishedStrokeStore::new();
        store.append([stroke(1)]);
        let before = store.snapshot();

        store.append([stroke(2)]);
        assert_eq!(before.len(), 1);
        assert_eq!(store.snapshot().len(), 2);

        let before_clear = store.snapshot();
        store.clear();
        assert_eq!(before_clear.len(), 2);
        assert!(store.snapshot().is_empty());
        assert!(!store.contains(StrokeHandle(1)));
    }

    #[test]
    fn clear_allows_handle_to_be_stored_again() {
        let mut store = FinishedStrokeStore::new();
        store.append([stroke(1)]);
        store.clear();
        assert_eq!(store.append([stroke(1)]), 1);
    }
}
