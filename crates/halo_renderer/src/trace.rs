//! Ray/scene intersection.
//!
//! Brute-force linear scan over the scene's spheres.

use halo_core::Scene;
use halo_math::{Ray, Vec3};

/// Result of tracing a ray against the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitPayload {
    /// Distance along the ray; negative means nothing was hit
    pub distance: f32,
    /// World-space hit point
    pub position: Vec3,
    /// Unit normal pointing away from the sphere center
    pub normal: Vec3,
    /// Index of the sphere that was hit
    pub object: usize,
}

impl HitPayload {
    /// The "no intersection" result.
    pub const MISS: HitPayload = HitPayload {
        distance: -1.0,
        position: Vec3::ZERO,
        normal: Vec3::ZERO,
        object: 0,
    };

    /// Check if this payload is a miss.
    #[inline]
    pub fn is_miss(&self) -> bool {
        self.distance < 0.0
    }
}

/// Find the closest sphere hit in front of the ray origin.
///
/// Only the nearer root of each sphere is considered, so a ray starting
/// inside a sphere does not hit that sphere. When two spheres are hit at
/// exactly the same distance the lower index wins.
pub fn trace(ray: &Ray, scene: &Scene) -> HitPayload {
    let mut closest: Option<usize> = None;
    let mut hit_distance = f32::MAX;

    for (i, sphere) in scene.spheres.iter().enumerate() {
        let origin = ray.origin - sphere.position;

        let a = ray.direction.dot(ray.direction);
        let b = 2.0 * origin.dot(ray.direction);
        let c = origin.dot(origin) - sphere.radius * sphere.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            continue;
        }

        let t = (-b - discriminant.sqrt()) / (2.0 * a);
        if t > 0.0 && t < hit_distance {
            hit_distance = t;
            closest = Some(i);
        }
    }

    match closest {
        Some(index) => closest_hit(ray, scene, hit_distance, index),
        None => HitPayload::MISS,
    }
}

fn closest_hit(ray: &Ray, scene: &Scene, distance: f32, object: usize) -> HitPayload {
    let center = scene.spheres[object].position;
    let local = (ray.origin - center) + ray.direction * distance;

    HitPayload {
        distance,
        position: local + center,
        normal: local.normalize(),
        object,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use halo_core::{Material, Sphere};

    fn scene_with(spheres: &[(Vec3, f32)]) -> Scene {
        let mut scene = Scene::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, 45.0);
        scene.add_material(Material::default());
        for &(center, radius) in spheres {
            scene.add_sphere(Sphere::new(center, radius, 0));
        }
        scene
    }

    #[test]
    fn test_hit_on_axis() {
        let scene = scene_with(&[(Vec3::ZERO, 1.0)]);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);

        let hit = trace(&ray, &scene);
        assert!(!hit.is_miss());
        assert!((hit.distance - 4.0).abs() < 1e-5);
        assert!((hit.position - Vec3::new(0.0, 0.0, 1.0)).length() < 1e-5);
        // Normal faces back toward the camera
        assert!((hit.normal - Vec3::Z).length() < 1e-5);
        assert_eq!(hit.object, 0);
    }

    #[test]
    fn test_miss() {
        let scene = scene_with(&[(Vec3::ZERO, 1.0)]);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::Y);

        let hit = trace(&ray, &scene);
        assert!(hit.is_miss());
        assert!(hit.distance < 0.0);
    }

    #[test]
    fn test_empty_scene_misses() {
        let scene = scene_with(&[]);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert_eq!(trace(&ray, &scene), HitPayload::MISS);
    }

    #[test]
    fn test_sphere_behind_origin_is_ignored() {
        let scene = scene_with(&[(Vec3::new(0.0, 0.0, 10.0), 1.0)]);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert!(trace(&ray, &scene).is_miss());
    }

    #[test]
    fn test_origin_inside_sphere_misses_it() {
        let scene = scene_with(&[(Vec3::ZERO, 2.0)]);
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        assert!(trace(&ray, &scene).is_miss());
    }

    #[test]
    fn test_nearest_sphere_wins() {
        let scene = scene_with(&[
            (Vec3::new(0.0, 0.0, -10.0), 1.0),
            (Vec3::new(0.0, 0.0, -3.0), 1.0),
            (Vec3::new(0.0, 0.0, -6.0), 1.0),
        ]);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        let hit = trace(&ray, &scene);
        assert_eq!(hit.object, 1);
        assert!((hit.distance - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_tie_resolves_to_lowest_index() {
        let scene = scene_with(&[
            (Vec3::new(0.0, 0.0, -3.0), 1.0),
            (Vec3::new(0.0, 0.0, -3.0), 1.0),
        ]);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert_eq!(trace(&ray, &scene).object, 0);
    }

    #[test]
    fn test_unnormalized_direction() {
        let scene = scene_with(&[(Vec3::new(0.0, 0.0, -3.0), 1.0)]);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -2.0));

        let hit = trace(&ray, &scene);
        // Distance is in units of the direction length
        assert!((hit.distance - 1.0).abs() < 1e-5);
        assert!((hit.position - Vec3::new(0.0, 0.0, -2.0)).length() < 1e-5);
    }
}
