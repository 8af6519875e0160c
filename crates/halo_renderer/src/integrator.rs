//! Path integrator.
//!
//! Each camera ray bounces up to `bounces + 1` times. Emission is weighted
//! by the running product of albedos (throughput); there is no cosine term,
//! no PDF division and no Russian roulette.

use crate::random::RandomSource;
use crate::trace::trace;
use crate::Color;
use halo_core::Scene;
use halo_math::Ray;

/// Distance the origin is pushed off the surface after each hit.
pub const SURFACE_OFFSET: f32 = 0.0001;

/// Radiance carried back along one camera ray.
pub fn shade(mut ray: Ray, scene: &Scene, bounces: u32, rng: &mut RandomSource) -> Color {
    let mut light = Color::ZERO;
    let mut throughput = Color::ONE;

    for _ in 0..=bounces {
        let payload = trace(&ray, scene);
        if payload.is_miss() {
            light += scene.sky_light() * throughput;
            break;
        }

        let material = scene.material_of(payload.object);
        light += material.emission() * throughput;
        throughput *= material.albedo;

        ray.set_origin(payload.position + payload.normal * SURFACE_OFFSET);
        ray.reflect_with_offset(payload.normal, material.roughness * rng.unit_sphere());
        if !ray.is_on_hemisphere(payload.normal) {
            ray.flip_direction();
        }
    }

    light
}
