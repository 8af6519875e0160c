//! Scene model for Halo.
//!
//! A scene is a camera pose, a sky, and flat lists of spheres and
//! materials. It is built once (from a file or in code) and then shared
//! read-only by every render worker.

use halo_math::Vec3;
use serde::Deserialize;

use crate::color::deserialize_vec3;
use crate::loader::{LoadError, LoadResult};

/// Surface description referenced by spheres through their material index.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Material {
    /// Reflectance per channel, by convention in [0, 1]
    #[serde(deserialize_with = "deserialize_vec3")]
    pub albedo: Vec3,

    /// 0 = perfect mirror, 1 = fully rough
    pub roughness: f32,

    /// Color of emitted light
    #[serde(deserialize_with = "deserialize_vec3")]
    pub emission_color: Vec3,

    /// Multiplier applied to `emission_color`
    pub emission_power: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            albedo: Vec3::ONE,
            roughness: 1.0,
            emission_color: Vec3::ZERO,
            emission_power: 0.0,
        }
    }
}

impl Material {
    /// Create a non-emissive material.
    pub fn new(albedo: Vec3, roughness: f32) -> Self {
        Self {
            albedo,
            roughness,
            ..Default::default()
        }
    }

    /// Create a material that emits `color * power`.
    pub fn emissive(color: Vec3, power: f32) -> Self {
        Self {
            emission_color: color,
            emission_power: power,
            ..Default::default()
        }
    }

    /// Light emitted by the surface.
    #[inline]
    pub fn emission(&self) -> Vec3 {
        self.emission_color * self.emission_power
    }

    /// Check if this material emits any light.
    pub fn is_emissive(&self) -> bool {
        self.emission().length_squared() > 0.0
    }
}

/// A sphere primitive.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Sphere {
    #[serde(deserialize_with = "deserialize_vec3")]
    pub position: Vec3,
    pub radius: f32,
    /// Index into `Scene::materials`
    pub mat_index: usize,
}

impl Default for Sphere {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            radius: 0.5,
            mat_index: 0,
        }
    }
}

impl Sphere {
    pub fn new(position: Vec3, radius: f32, mat_index: usize) -> Self {
        Self {
            position,
            radius,
            mat_index,
        }
    }
}

/// A complete scene: camera, sky, spheres and materials.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Scene {
    #[serde(rename = "CameraPos", deserialize_with = "deserialize_vec3")]
    pub camera_position: Vec3,

    #[serde(deserialize_with = "deserialize_vec3")]
    pub camera_look_at: Vec3,

    /// Vertical field of view in degrees
    #[serde(rename = "CameraVFOV")]
    pub camera_vfov: f32,

    #[serde(deserialize_with = "deserialize_vec3")]
    pub sky_color: Vec3,

    #[serde(default = "default_sky_intensity")]
    pub sky_intensity: f32,

    #[serde(default = "default_tone_mapping")]
    pub enable_tone_mapping: bool,

    #[serde(default)]
    pub spheres: Vec<Sphere>,

    #[serde(default)]
    pub materials: Vec<Material>,
}

fn default_sky_intensity() -> f32 {
    1.0
}

fn default_tone_mapping() -> bool {
    true
}

impl Scene {
    /// Create an empty scene with a black sky.
    pub fn new(camera_position: Vec3, camera_look_at: Vec3, camera_vfov: f32) -> Self {
        Self {
            camera_position,
            camera_look_at,
            camera_vfov,
            sky_color: Vec3::ZERO,
            sky_intensity: default_sky_intensity(),
            enable_tone_mapping: default_tone_mapping(),
            spheres: Vec::new(),
            materials: Vec::new(),
        }
    }

    /// Set the sky color and intensity.
    pub fn with_sky(mut self, color: Vec3, intensity: f32) -> Self {
        self.sky_color = color;
        self.sky_intensity = intensity;
        self
    }

    /// Enable or disable filmic tone mapping in the post-process.
    pub fn with_tone_mapping(mut self, enabled: bool) -> Self {
        self.enable_tone_mapping = enabled;
        self
    }

    /// Add a material to the scene and return its index.
    pub fn add_material(&mut self, material: Material) -> usize {
        let id = self.materials.len();
        self.materials.push(material);
        id
    }

    /// Add a sphere to the scene and return its index.
    pub fn add_sphere(&mut self, sphere: Sphere) -> usize {
        let id = self.spheres.len();
        self.spheres.push(sphere);
        id
    }

    /// Light arriving from the sky on rays that miss every sphere.
    #[inline]
    pub fn sky_light(&self) -> Vec3 {
        self.sky_color * self.sky_intensity
    }

    /// Material of the sphere at `sphere_index`.
    ///
    /// Panics if the index is out of range or the scene was not validated.
    #[inline]
    pub fn material_of(&self, sphere_index: usize) -> &Material {
        &self.materials[self.spheres[sphere_index].mat_index]
    }

    /// Get sphere count.
    pub fn sphere_count(&self) -> usize {
        self.spheres.len()
    }

    /// Check that every radius is positive and every material index is
    /// in range.
    pub fn validate(&self) -> LoadResult<()> {
        for (i, sphere) in self.spheres.iter().enumerate() {
            if sphere.radius.is_nan() || sphere.radius <= 0.0 {
                return Err(LoadError::InvalidRadius {
                    sphere: i,
                    radius: sphere.radius,
                });
            }
            if sphere.mat_index >= self.materials.len() {
                return Err(LoadError::InvalidMaterialIndex {
                    sphere: i,
                    index: sphere.mat_index,
                    count: self.materials.len(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_scene() -> Scene {
        Scene::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, 45.0)
    }

    #[test]
    fn test_scene_creation() {
        let mut scene = test_scene();

        let mat_id = scene.add_material(Material::new(Vec3::splat(0.8), 0.2));
        assert_eq!(mat_id, 0);

        scene.add_sphere(Sphere::new(Vec3::ZERO, 1.0, mat_id));
        scene.add_sphere(Sphere::new(Vec3::X, 0.5, mat_id));

        assert_eq!(scene.sphere_count(), 2);
        assert_eq!(scene.material_of(1).roughness, 0.2);
        assert!(scene.validate().is_ok());
    }

    #[test]
    fn test_derived_light() {
        let scene = test_scene().with_sky(Vec3::new(0.2, 0.3, 0.4), 2.0);
        assert!((scene.sky_light() - Vec3::new(0.4, 0.6, 0.8)).length() < 1e-6);

        let light = Material::emissive(Vec3::ONE, 5.0);
        assert_eq!(light.emission(), Vec3::splat(5.0));
        assert!(light.is_emissive());
        assert!(!Material::default().is_emissive());
    }

    #[test]
    fn test_validate_material_index() {
        let mut scene = test_scene();
        scene.add_material(Material::default());
        scene.add_sphere(Sphere::new(Vec3::ZERO, 1.0, 3));

        match scene.validate() {
            Err(LoadError::InvalidMaterialIndex { sphere, index, count }) => {
                assert_eq!((sphere, index, count), (0, 3, 1));
            }
            other => panic!("expected InvalidMaterialIndex, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_radius() {
        let mut scene = test_scene();
        scene.add_material(Material::default());
        scene.add_sphere(Sphere::new(Vec3::ZERO, 1.0, 0));
        scene.add_sphere(Sphere::new(Vec3::ZERO, 0.0, 0));

        assert!(matches!(
            scene.validate(),
            Err(LoadError::InvalidRadius { sphere: 1, .. })
        ));
    }

    #[test]
    fn test_empty_scene_is_valid() {
        assert!(test_scene().validate().is_ok());
    }
}
