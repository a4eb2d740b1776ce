mod core;
mod handoff;
mod pointer;

pub use self::core::{CoordinatorError, StrokeCoordinator};
