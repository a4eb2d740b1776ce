//! Ink primitives and rendering (Cairo-based).
//!
//! This module defines the value types that flow out of the stroke lifecycle:
//! - [`Color`]: RGBA color representation with the stock palette
//! - [`Brush`]: immutable brush snapshot taken when a stroke starts
//! - [`FinishedStroke`]: completed geometry plus the brush it was drawn with
//! - [`FinishedStrokeStore`]: ordered collection of finished strokes
//! - Rendering through the [`StrokeRenderer`] capability

pub mod brush;
pub mod color;
pub mod render;
pub mod store;
pub mod stroke;

// Re-export commonly used types at module level
pub use brush::{Brush, BrushError, BrushFamily};
pub use color::Color;
pub use render::{CairoRenderer, StrokeRenderer, Transform, fill_background, render_strokes};
pub use store::{FinishedStrokeStore, StrokeSnapshot};
pub use stroke::{FinishedStroke, StrokePoint};

pub use color::{BLACK, BLUE, GREEN, PALETTE, RED, WHITE, YELLOW};
