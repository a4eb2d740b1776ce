//! Pointer input handling and the stroke lifecycle state machine.
//!
//! This module translates backend pointer events into stroke sessions. It
//! keeps the current brush settings, tracks which pointer is drawing which
//! stroke, and hands finished strokes over to the finished-stroke store.

pub mod coordinator;
pub mod events;
pub mod session;
pub mod settings;

// Re-export commonly used types at module level
pub use coordinator::{CoordinatorError, StrokeCoordinator};
pub use events::{PointerAction, PointerEvent, PointerId, PointerSamples};
pub use session::{PointerSessionTable, SessionError};
pub use settings::BrushSettings;
