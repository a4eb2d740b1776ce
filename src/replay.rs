//! Replays recorded pointer events through the stroke coordinator.
//!
//! Event scripts are JSON arrays of [`PointerEvent`]s. The replay runs them
//! through a [`StrokeCoordinator`] backed by the in-process
//! [`PolylineEngine`] and can export the finished strokes as a PNG.

use crate::authoring::{DeliveryMode, PolylineEngine};
use crate::config::Config;
use crate::draw::{
    CairoRenderer, FinishedStroke, StrokeSnapshot, Transform, WHITE, fill_background,
    render_strokes,
};
use crate::input::{PointerEvent, StrokeCoordinator};
use anyhow::{Context, Result};
use log::{debug, info};
use std::fs::{self, File};
use std::path::Path;

/// Outcome of a replay.
#[derive(Debug)]
pub struct ReplaySummary {
    /// Number of events processed
    pub events: usize,
    /// Finished strokes in finish order
    pub strokes: StrokeSnapshot,
    /// Pointers still down when the script ended
    pub active_pointers: usize,
    /// Frames a display driven by the same events would have redrawn
    pub redraws: usize,
}

/// Reads a JSON event script.
pub fn load_events(path: &Path) -> Result<Vec<PointerEvent>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read events from {}", path.display()))?;
    let events: Vec<PointerEvent> = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse events from {}", path.display()))?;
    debug!("Loaded {} event(s) from {}", events.len(), path.display());
    Ok(events)
}

/// Feeds `events` through a fresh coordinator configured from `config`.
pub fn replay(config: &Config, events: &[PointerEvent]) -> Result<ReplaySummary> {
    let engine = PolylineEngine::new(DeliveryMode::Immediate);
    let mut coordinator = StrokeCoordinator::from_config(engine, config);

    // One frame per event, rendered only when the coordinator asks for it
    let mut redraws = 0;
    let mut take_redraw = |coordinator: &mut StrokeCoordinator<PolylineEngine>| {
        if coordinator.needs_redraw {
            coordinator.needs_redraw = false;
            redraws += 1;
        }
    };

    take_redraw(&mut coordinator);
    for (index, event) in events.iter().enumerate() {
        coordinator
            .handle_pointer_event(event)
            .with_context(|| format!("Event #{index} ({:?}) failed", event.action))?;
        take_redraw(&mut coordinator);
    }
    coordinator.dispatch_finished();
    take_redraw(&mut coordinator);
    debug!("Replay needed {redraws} redraw(s)");

    let active_pointers = coordinator.sessions().len();
    if active_pointers > 0 {
        info!("{active_pointers} pointer(s) never lifted; their strokes are not finished");
    }

    Ok(ReplaySummary {
        events: events.len(),
        strokes: coordinator.finished_strokes(),
        active_pointers,
        redraws,
    })
}

/// Renders strokes onto a white canvas and writes it as PNG.
pub fn render_png(strokes: &[FinishedStroke], width: i32, height: i32, path: &Path) -> Result<()> {
    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)
        .context("Failed to create image surface")?;
    {
        let ctx = cairo::Context::new(&surface).context("Failed to create cairo context")?;
        fill_background(&ctx, WHITE).context("Failed to paint background")?;
        render_strokes(&CairoRenderer::new(), &ctx, strokes, &Transform::IDENTITY)
            .context("Failed to render strokes")?;
    }
    surface.flush();

    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    surface
        .write_to_png(&mut file)
        .with_context(|| format!("Failed to write PNG to {}", path.display()))?;
    info!("Wrote {} stroke(s) to {}", strokes.len(), path.display());
    Ok(())
}
