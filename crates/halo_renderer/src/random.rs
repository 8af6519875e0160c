//! Per-worker pseudorandom source.
//!
//! Every render worker owns one `RandomSource`, seeded from OS entropy when
//! the worker starts. Nothing is shared between workers.

use halo_math::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

/// Uniform sampling helpers over an owned PRNG.
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    /// Seed a new source from the operating system's entropy pool.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a reproducible source (tests, debugging).
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform f32 in [0, 1).
    #[inline]
    pub fn uniform_f32(&mut self) -> f32 {
        self.rng.gen()
    }

    /// Uniform f32 in [min, max).
    #[inline]
    pub fn uniform_range(&mut self, min: f32, max: f32) -> f32 {
        min + (max - min) * self.uniform_f32()
    }

    /// Uniform integer in [min, max], both ends inclusive.
    pub fn uniform_u32(&mut self, min: u32, max: u32) -> u32 {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        self.rng.gen_range(lo..=hi)
    }

    /// Point uniformly distributed on the surface of the unit sphere.
    pub fn unit_sphere(&mut self) -> Vec3 {
        let theta = self.uniform_range(0.0, TAU);
        let phi = self.uniform_range(-1.0, 1.0).acos();

        let (sin_phi, cos_phi) = phi.sin_cos();
        let (sin_theta, cos_theta) = theta.sin_cos();
        Vec3::new(sin_phi * cos_theta, sin_phi * sin_theta, cos_phi)
    }
}
