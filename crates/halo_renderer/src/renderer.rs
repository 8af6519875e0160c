//! Multi-threaded sample scheduler.
//!
//! The total sample budget is split across a fixed set of OS threads. Each
//! thread renders full frames into its own accumulation buffer; once every
//! thread has been joined the buffers are averaged into one framebuffer and
//! post-processed.

use std::thread;
use std::time::Instant;

use halo_core::{LoadError, Scene};
use halo_math::{Ray, Vec2, Vec3};
use thiserror::Error;

use crate::camera::Projection;
use crate::integrator::shade;
use crate::post::post_process;
use crate::progress::{ProgressReporter, WorkerStatus, PROGRESS_POLL_INTERVAL};
use crate::random::RandomSource;
use crate::settings::{RenderSettings, SettingsError};
use crate::Framebuffer;

/// Errors surfaced by the renderer.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Cannot render without scene set")]
    MissingScene,

    #[error("Invalid render settings: {0}")]
    InvalidSettings(#[from] SettingsError),

    #[error("Invalid scene: {0}")]
    InvalidScene(#[from] LoadError),

    #[error("Framebuffer holds {len} pixels, expected {width}x{height}")]
    BufferSize { width: u32, height: u32, len: usize },

    #[error("Failed to write image: {0}")]
    Image(#[from] image::ImageError),
}

/// Split `samples` across at most `threads` workers.
///
/// Every worker gets `samples / threads`, and the first `samples % threads`
/// workers get one more. With fewer samples than threads only `samples`
/// workers are used, one sample each.
pub fn partition_samples(samples: u32, threads: u32) -> Vec<u32> {
    if samples == 0 || threads == 0 {
        return Vec::new();
    }

    let threads = threads.min(samples);
    let base = samples / threads;
    let extra = samples % threads;

    (0..threads).map(|i| base + u32::from(i < extra)).collect()
}

/// Renders a scene according to `RenderSettings`.
pub struct Renderer<'a> {
    settings: RenderSettings,
    scene: Option<&'a Scene>,
}

impl<'a> Renderer<'a> {
    /// Create a renderer with no scene set.
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            settings,
            scene: None,
        }
    }

    /// Set the scene to render.
    pub fn set_scene(&mut self, scene: &'a Scene) {
        self.scene = Some(scene);
    }

    /// Builder form of `set_scene`.
    pub fn with_scene(mut self, scene: &'a Scene) -> Self {
        self.set_scene(scene);
        self
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Render the image: accumulate every sample, then tone map and clamp.
    pub fn render(&self, progress: &mut dyn ProgressReporter) -> Result<Framebuffer, RenderError> {
        let total = Instant::now();
        let scene = self.scene.ok_or(RenderError::MissingScene)?;
        let mut image = self.accumulate(progress)?;

        let post_start = Instant::now();
        post_process(&mut image, scene.enable_tone_mapping);
        log::info!("Post process took {:?}", post_start.elapsed());

        log::info!("Everything took {:?}", total.elapsed());
        Ok(image)
    }

    /// Run every sample and return the averaged, unclamped radiance.
    pub fn accumulate(&self, progress: &mut dyn ProgressReporter) -> Result<Framebuffer, RenderError> {
        let scene = self.scene.ok_or(RenderError::MissingScene)?;
        self.settings.validate()?;
        scene.validate()?;

        let RenderSettings {
            width,
            height,
            samples,
            bounces,
            threads,
        } = self.settings;

        let projection = Projection::from_scene(scene, width, height);
        let targets = partition_samples(samples, threads);
        if targets.len() < threads as usize {
            log::debug!("Only {} samples, using {} of {} threads", samples, targets.len(), threads);
        }

        // Two image-sized buffers per worker plus the merged image
        let mem_usage =
            (2 * targets.len() + 1) * self.settings.pixel_count() * std::mem::size_of::<Vec3>();
        log::info!(
            "{}x{} {} samples, {} bounces on {} threads, {}MiB required",
            width,
            height,
            samples,
            bounces,
            targets.len(),
            mem_usage / 1024 / 1024
        );

        let start = Instant::now();
        let statuses: Vec<WorkerStatus> = targets.iter().map(|&t| WorkerStatus::new(t)).collect();

        let buffers: Vec<Framebuffer> = thread::scope(|s| {
            let handles: Vec<_> = statuses
                .iter()
                .map(|status| {
                    let projection = &projection;
                    s.spawn(move || render_worker(scene, projection, bounces, status))
                })
                .collect();

            progress.start(&targets);
            loop {
                let completed = snapshot(&statuses);
                progress.update(&completed);

                if completed.iter().zip(&targets).all(|(done, target)| done >= target) {
                    break;
                }
                // A worker that exits early has panicked; stop polling and let
                // the join below re-raise it.
                let stalled = handles
                    .iter()
                    .zip(&statuses)
                    .any(|(handle, status)| handle.is_finished() && !status.is_done());
                if stalled {
                    break;
                }

                thread::sleep(PROGRESS_POLL_INTERVAL);
            }

            let buffers: Vec<Framebuffer> = handles
                .into_iter()
                .map(|handle| handle.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic)))
                .collect();

            progress.update(&snapshot(&statuses));
            progress.finish();
            buffers
        });
        log::info!("Rendering {} samples took {:?}", samples, start.elapsed());

        let mut image = Framebuffer::new(width, height);
        for buffer in &buffers {
            image.merge_scaled(buffer, samples);
        }
        Ok(image)
    }
}

fn snapshot(statuses: &[WorkerStatus]) -> Vec<u32> {
    statuses.iter().map(WorkerStatus::completed).collect()
}

/// Body of one worker thread: render `status.target()` full frames.
fn render_worker(
    scene: &Scene,
    projection: &Projection,
    bounces: u32,
    status: &WorkerStatus,
) -> Framebuffer {
    let mut rng = RandomSource::from_entropy();
    let mut accumulation = Framebuffer::new(projection.width, projection.height);
    let mut directions = vec![Vec3::ZERO; accumulation.len()];
    let origin = projection.position();

    for _ in 0..status.target() {
        // One sub-pixel offset for the whole frame
        let jitter = Vec2::new(rng.uniform_f32(), rng.uniform_f32());
        projection.ray_directions(jitter, &mut directions);

        for (pixel, &direction) in accumulation.pixels.iter_mut().zip(&directions) {
            *pixel += shade(Ray::new(origin, direction), scene, bounces, &mut rng);
        }
        status.complete_sample();
    }

    accumulation
}
