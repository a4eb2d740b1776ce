//! Pointer session table: which live pointer is drawing which stroke.

use crate::authoring::StrokeHandle;
use crate::input::PointerId;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("{pointer} already has an active session ({existing})")]
    DuplicateSession {
        pointer: PointerId,
        existing: StrokeHandle,
    },
}

/// Maps each live pointer to the handle of its in-progress stroke.
///
/// A pointer is present exactly while its stroke is being authored: entries
/// are added on pointer-down and removed on up, cancel, or hand-off.
#[derive(Debug, Default)]
pub struct PointerSessionTable {
    sessions: HashMap<PointerId, StrokeHandle>,
    owners: HashMap<StrokeHandle, PointerId>,
}

impl PointerSessionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new session. Fails if the pointer already has one.
    pub fn begin(&mut self, pointer: PointerId, handle: StrokeHandle) -> Result<(), SessionError> {
        if let Some(&existing) = self.sessions.get(&pointer) {
            return Err(SessionError::DuplicateSession { pointer, existing });
        }
        self.sessions.insert(pointer, handle);
        self.owners.insert(handle, pointer);
        Ok(())
    }

    pub fn lookup(&self, pointer: PointerId) -> Option<StrokeHandle> {
        self.sessions.get(&pointer).copied()
    }

    /// Removes the pointer's session, returning its handle. No-op if absent.
    pub fn end(&mut self, pointer: PointerId) -> Option<StrokeHandle> {
        let handle = self.sessions.remove(&pointer)?;
        self.owners.remove(&handle);
        Some(handle)
    }

    /// Removes the session that owns `handle`, returning its pointer.
    pub fn end_by_handle(&mut self, handle: StrokeHandle) -> Option<PointerId> {
        let pointer = self.owners.remove(&handle)?;
        self.sessions.remove(&pointer);
        Some(pointer)
    }

    /// Removes every session, returning the pointers that were active.
    pub fn drain(&mut self) -> Vec<(PointerId, StrokeHandle)> {
        self.owners.clear();
        let mut drained: Vec<_> = self.sessions.drain().collect();
        drained.sort_unstable_by_key(|(pointer, _)| *pointer);
        drained
    }

    pub fn contains(&self, pointer: PointerId) -> bool {
        self.sessions.contains_key(&pointer)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn pointers(&self) -> impl Iterator<Item = PointerId> + '_ {
        self.sessions.keys().copied()
    }
}
