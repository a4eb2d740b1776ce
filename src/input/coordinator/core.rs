//! Stroke lifecycle coordinator state and control surface.

use crate::authoring::{AuthoringEngine, FinishedBatch, finished_channel};
use crate::config::{CancelScope, Config, DuplicateSessionPolicy};
use crate::draw::{BrushError, Color, FinishedStrokeStore, StrokeSnapshot};
use crate::input::session::{PointerSessionTable, SessionError};
use crate::input::settings::BrushSettings;
use log::debug;
use std::sync::mpsc::Receiver;
use thiserror::Error;

/// Errors surfaced by [`StrokeCoordinator::handle_pointer_event`].
///
/// Engine failures are passed through untouched in [`CoordinatorError::Engine`].
#[derive(Debug, Error)]
pub enum CoordinatorError<E>
where
    E: std::error::Error + 'static,
{
    #[error(transparent)]
    Engine(E),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("cannot start stroke: {0}")]
    Brush(#[from] BrushError),
}

/// Maps pointer events to per-pointer stroke sessions and collects finished strokes.
///
/// Each live pointer is independently Idle (no table entry) or Active (one
/// entry naming its in-progress stroke). Finished strokes arrive from the
/// engine over a channel and are moved into the [`FinishedStrokeStore`] on
/// the owner loop, followed by releasing them from the engine.
///
/// The coordinator is driven from a single owner; it does no locking of its own.
pub struct StrokeCoordinator<E: AuthoringEngine> {
    pub(super) engine: E,
    pub(super) sessions: PointerSessionTable,
    pub(super) store: FinishedStrokeStore,
    pub(super) settings: BrushSettings,
    pub(super) finished_rx: Receiver<FinishedBatch>,
    pub(super) cancel_scope: CancelScope,
    pub(super) duplicate_policy: DuplicateSessionPolicy,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
}

impl<E: AuthoringEngine> StrokeCoordinator<E> {
    /// Creates a coordinator around `engine` and subscribes to its finished strokes.
    pub fn new(mut engine: E, settings: BrushSettings) -> Self {
        let (listener, finished_rx) = finished_channel();
        engine.add_finished_listener(listener);

        Self {
            engine,
            sessions: PointerSessionTable::new(),
            store: FinishedStrokeStore::new(),
            settings,
            finished_rx,
            cancel_scope: CancelScope::default(),
            duplicate_policy: DuplicateSessionPolicy::default(),
            needs_redraw: true,
        }
    }

    /// Creates a coordinator with brush defaults and input options from `config`.
    pub fn from_config(engine: E, config: &Config) -> Self {
        Self::new(engine, BrushSettings::from_config(&config.brush))
            .with_cancel_scope(config.input.cancel_scope)
            .with_duplicate_policy(config.input.duplicate_session)
    }

    pub fn with_cancel_scope(mut self, scope: CancelScope) -> Self {
        self.cancel_scope = scope;
        self
    }

    pub fn with_duplicate_policy(mut self, policy: DuplicateSessionPolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    // ------------------------------------------------------------------
    // Control surface
    // ------------------------------------------------------------------

    /// Sets the ink color for strokes that start from now on.
    pub fn set_brush_color(&mut self, color: Color) {
        self.settings.set_color(color);
        debug!("Brush color set to #{:08X}", self.settings.color.to_argb());
    }

    /// Sets the stroke size for strokes that start from now on.
    pub fn set_brush_size(&mut self, size: f64) {
        self.settings.set_size(size);
        debug!("Brush size set to {:.1}", self.settings.size);
    }

    /// Empties the finished-stroke store. In-progress strokes are untouched.
    pub fn clear_finished_strokes(&mut self) {
        self.store.clear();
        self.needs_redraw = true;
        debug!(
            "Cleared finished strokes ({} pointer(s) still drawing)",
            self.sessions.len()
        );
    }

    // ------------------------------------------------------------------
    // Read access
    // ------------------------------------------------------------------

    /// Point-in-time view of the finished strokes for the render pass.
    pub fn finished_strokes(&self) -> StrokeSnapshot {
        self.store.snapshot()
    }

    pub fn sessions(&self) -> &PointerSessionTable {
        &self.sessions
    }

    pub fn store(&self) -> &FinishedStrokeStore {
        &self.store
    }

    pub fn settings(&self) -> &BrushSettings {
        &self.settings
    }

    pub fn cancel_scope(&self) -> CancelScope {
        self.cancel_scope
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Mutable engine access for backend-specific driving (e.g. flushing batches).
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }
}
