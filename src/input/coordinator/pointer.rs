use crate::authoring::{AuthoringEngine, StrokeHandle};
use crate::config::{CancelScope, DuplicateSessionPolicy};
use crate::input::events::{PointerAction, PointerEvent};
use crate::input::session::SessionError;
use crate::input::PointerId;
use log::{debug, trace, warn};

use super::{CoordinatorError, StrokeCoordinator};

type EventResult<E> = Result<(), CoordinatorError<<E as AuthoringEngine>::Error>>;

impl<E: AuthoringEngine> StrokeCoordinator<E> {
    /// Processes one pointer event.
    ///
    /// # Behavior
    /// - Down / PointerDown: snapshots the brush and starts a stroke for the trigger pointer
    /// - Move: appends samples for every pointer in the event that has a session
    /// - Up / PointerUp: ends the trigger pointer's session and finishes its stroke
    /// - Cancel: discards the trigger pointer's stroke (or every stroke, for gesture scope)
    ///
    /// Events for pointers without a session are ignored. Finished strokes the
    /// engine reported while handling the event are stored before returning.
    pub fn handle_pointer_event(&mut self, event: &PointerEvent) -> EventResult<E> {
        let result = match event.action {
            PointerAction::Down | PointerAction::PointerDown => self.on_pointer_down(event),
            PointerAction::Move => self.on_pointer_move(event),
            PointerAction::Up | PointerAction::PointerUp => self.on_pointer_up(event),
            PointerAction::Cancel => self.on_pointer_cancel(event.pointer_id),
        };
        self.dispatch_finished();
        result
    }

    fn on_pointer_down(&mut self, event: &PointerEvent) -> EventResult<E> {
        let pointer = event.pointer_id;
        let Some(sample) = event.trigger_sample() else {
            debug!("Down for {pointer} carried no sample; ignoring");
            return Ok(());
        };

        if let Some(existing) = self.sessions.lookup(pointer) {
            self.recover_duplicate_session(pointer, existing)?;
        }

        let brush = self.settings.brush()?;
        let handle = self
            .engine
            .start_stroke(pointer, sample, brush)
            .map_err(CoordinatorError::Engine)?;
        self.sessions.begin(pointer, handle)?;
        self.needs_redraw = true;
        debug!("Started {handle} for {pointer}");
        Ok(())
    }

    fn on_pointer_move(&mut self, event: &PointerEvent) -> EventResult<E> {
        // A failing pointer loses its session; the rest of the batch still lands
        let mut first_error = None;
        for pointer in &event.pointers {
            if !self.sessions.contains(pointer.id) {
                trace!("Move for untracked {}; ignoring", pointer.id);
                continue;
            }
            if pointer.samples.is_empty() && pointer.predicted.is_empty() {
                continue;
            }

            if let Err(err) =
                self.engine
                    .add_to_stroke(pointer.id, &pointer.samples, &pointer.predicted)
            {
                warn!("Engine rejected samples for {}: {err}", pointer.id);
                self.drop_session(pointer.id);
                self.needs_redraw = true;
                if first_error.is_none() {
                    first_error = Some(err);
                }
                continue;
            }
            self.needs_redraw = true;
        }

        match first_error {
            Some(err) => Err(CoordinatorError::Engine(err)),
            None => Ok(()),
        }
    }

    fn on_pointer_up(&mut self, event: &PointerEvent) -> EventResult<E> {
        let pointer = event.pointer_id;
        // The entry goes first so a reused id can start fresh while the finish drains
        let Some(handle) = self.sessions.end(pointer) else {
            trace!("Up for untracked {pointer}; ignoring");
            return Ok(());
        };

        self.engine
            .finish_stroke(pointer, event.trigger_sample())
            .map_err(CoordinatorError::Engine)?;
        self.needs_redraw = true;
        debug!("Finished {handle} for {pointer}");
        Ok(())
    }

    fn on_pointer_cancel(&mut self, pointer: PointerId) -> EventResult<E> {
        let targets: Vec<(PointerId, StrokeHandle)> = match self.cancel_scope {
            CancelScope::Pointer => self
                .sessions
                .end(pointer)
                .map(|handle| vec![(pointer, handle)])
                .unwrap_or_default(),
            CancelScope::Gesture => self.sessions.drain(),
        };

        if targets.is_empty() {
            trace!("Cancel for untracked {pointer}; ignoring");
            return Ok(());
        }

        // Every session is already gone; report the first engine failure, if any
        let mut first_error = None;
        for (pointer, handle) in targets {
            match self.engine.cancel_stroke(pointer) {
                Ok(()) => debug!("Cancelled {handle} for {pointer}"),
                Err(err) => {
                    warn!("Engine failed to cancel {handle} for {pointer}: {err}");
                    if first_error.is_none() {
                        first_error = Some(err);
                    }
                }
            }
        }
        self.needs_redraw = true;

        match first_error {
            Some(err) => Err(CoordinatorError::Engine(err)),
            None => Ok(()),
        }
    }

    /// Handles a pointer-down for a pointer that already has a session.
    fn recover_duplicate_session(
        &mut self,
        pointer: PointerId,
        existing: StrokeHandle,
    ) -> EventResult<E> {
        let violation = SessionError::DuplicateSession { pointer, existing };
        match self.duplicate_policy.resolve() {
            DuplicateSessionPolicy::Restart => {
                warn!("{violation}; cancelling it and starting a new stroke");
                self.sessions.end(pointer);
                self.engine
                    .cancel_stroke(pointer)
                    .map_err(CoordinatorError::Engine)
            }
            DuplicateSessionPolicy::Panic | DuplicateSessionPolicy::Auto => {
                panic!("stroke session invariant violated: {violation}")
            }
        }
    }

    /// Forgets a pointer whose stroke the engine failed on.
    fn drop_session(&mut self, pointer: PointerId) {
        if let Some(handle) = self.sessions.end(pointer) {
            warn!("Dropping session {handle} for {pointer} after engine failure");
            if let Err(err) = self.engine.cancel_stroke(pointer) {
                debug!("Engine could not discard {handle}: {err}");
            }
        }
    }
}
