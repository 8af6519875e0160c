//! `halo` - render a JSON sphere scene to an image.

mod cli;
mod logger;
mod progress;

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use halo_core::load_scene;
use halo_renderer::{save_png, NoProgress, ProgressReporter, Renderer};

use cli::Args;
use logger::init_logger;
use progress::TerminalProgress;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.log_level.into());

    let start = Instant::now();
    let scene = load_scene(&args.input)
        .with_context(|| format!("Failed to load scene from {}", args.input))?;

    let settings = args.to_settings();
    log::info!(
        "Rendering {}x{} @ {} spp, {} bounces, {} threads",
        settings.width,
        settings.height,
        settings.samples,
        settings.bounces,
        settings.threads
    );

    let mut renderer = Renderer::new(settings);
    renderer.set_scene(&scene);

    let mut reporter: Box<dyn ProgressReporter> = if args.no_progress {
        Box::new(NoProgress)
    } else {
        Box::new(TerminalProgress::new())
    };

    let image = renderer
        .render(reporter.as_mut())
        .context("Render failed")?;

    save_png(&image, &args.out).with_context(|| format!("Failed to write {}", args.out))?;
    log::info!("Wrote {} in {:.2?}", args.out, start.elapsed());

    Ok(())
}
