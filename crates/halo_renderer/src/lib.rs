//! Halo Renderer - CPU Path Tracing
//!
//! A Monte Carlo path tracer for scenes of spheres:
//!
//! - Per-sample jittered camera rays from a perspective projection
//! - Brute-force ray/sphere intersection
//! - Throughput-weighted emission with a roughness-perturbed mirror bounce
//! - Samples split across OS worker threads, merged into one framebuffer
//! - ACES filmic tone mapping and clamping

pub mod camera;
pub mod framebuffer;
pub mod integrator;
pub mod output;
pub mod post;
pub mod progress;
pub mod random;
pub mod renderer;
pub mod settings;
pub mod trace;

pub use camera::Projection;
pub use framebuffer::Framebuffer;
pub use integrator::shade;
pub use output::save_png;
pub use post::{post_process, tonemap_aces};
pub use progress::{LogProgress, NoProgress, ProgressReporter};
pub use random::RandomSource;
pub use renderer::{partition_samples, RenderError, Renderer};
pub use settings::{RenderSettings, SettingsError};
pub use trace::{trace, HitPayload};

/// Re-export Vec3 and the scene model.
pub use halo_core::{Material, Scene, Sphere};
pub use halo_math::{Ray, Vec3};

/// Color type alias (linear RGB)
pub type Color = Vec3;
