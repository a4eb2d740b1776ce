//! Library exports for reusing inkboard subsystems.
//!
//! Exposes the stroke lifecycle coordinator alongside the brush, store, and
//! rendering types it relies on, so that backends and tools can drive
//! multi-touch ink capture without the bundled replay binary.

pub mod authoring;
pub mod config;
pub mod draw;
pub mod input;
pub mod replay;
pub mod util;

pub use config::Config;
pub use input::StrokeCoordinator;
