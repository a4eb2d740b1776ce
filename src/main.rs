use anyhow::Context;
use clap::Parser;
use inkboard::Config;
use inkboard::config::CancelScope;
use inkboard::replay;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "inkboard")]
#[command(version, about = "Multi-touch ink capture and stroke replay")]
struct Cli {
    /// Replay a JSON array of pointer events through the stroke coordinator
    #[arg(long, short = 'r', value_name = "EVENTS")]
    replay: Option<PathBuf>,

    /// Write the finished strokes to a PNG file (requires --replay)
    #[arg(long, short = 'o', value_name = "PNG", requires = "replay")]
    output: Option<PathBuf>,

    /// Canvas width in pixels for --output
    #[arg(long, default_value_t = 800)]
    width: i32,

    /// Canvas height in pixels for --output
    #[arg(long, default_value_t = 600)]
    height: i32,

    /// Config file to use instead of ~/.config/inkboard/config.toml
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Cancel scope override (pointer or gesture)
    #[arg(long, value_name = "SCOPE")]
    cancel_scope: Option<String>,
}

fn parse_cancel_scope(value: &str) -> anyhow::Result<CancelScope> {
    match value.to_lowercase().as_str() {
        "pointer" => Ok(CancelScope::Pointer),
        "gesture" => Ok(CancelScope::Gesture),
        other => Err(anyhow::anyhow!(
            "Invalid cancel scope '{other}' (expected 'pointer' or 'gesture')"
        )),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let Some(events_path) = cli.replay else {
        // No flags: show usage
        println!("inkboard: Multi-touch ink capture and stroke replay");
        println!();
        println!("Usage:");
        println!("  inkboard --replay events.json                 Replay pointer events");
        println!("  inkboard --replay events.json -o ink.png      Replay and export a PNG");
        println!("  inkboard --help                               Show help");
        println!();
        println!("Events are a JSON array such as:");
        println!(r#"  [{{"action": "down", "pointer_id": 1, "pointers": [{{"id": 1, "samples": [{{"x": 10, "y": 10}}]}}]}}]"#);
        return Ok(());
    };

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(scope) = cli.cancel_scope.as_deref() {
        config.input.cancel_scope = parse_cancel_scope(scope)?;
    }

    let events = replay::load_events(&events_path)?;
    let summary = replay::replay(&config, &events)
        .with_context(|| format!("Replay of {} failed", events_path.display()))?;

    println!("Replayed {} event(s)", summary.events);
    println!("Finished strokes: {}", summary.strokes.len());
    println!("Redraws: {}", summary.redraws);
    if summary.active_pointers > 0 {
        println!("Unfinished pointers: {}", summary.active_pointers);
    }

    if let Some(output) = cli.output {
        replay::render_png(&summary.strokes, cli.width, cli.height, &output)?;
        println!("Saved {}", output.display());
    }

    Ok(())
}
