//! Scene file loading.
//!
//! Scenes are JSON documents with PascalCase keys. See `color` for the
//! accepted vector spellings.
//!
//! ```json
//! {
//!     "CameraPos": [0, 0, 5],
//!     "CameraLookAt": [0, 0, 0],
//!     "CameraVFOV": 45,
//!     "SkyColor": "#87ceeb",
//!     "Spheres": [{ "Position": [0, 0, 0], "Radius": 1, "MatIndex": 0 }],
//!     "Materials": [{ "Albedo": [0.8, 0.2, 0.2], "Roughness": 0.3 }]
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::scene::Scene;

/// Errors that can occur during scene loading.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to open file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Sphere {sphere} references material {index}, but the scene has {count} materials")]
    InvalidMaterialIndex {
        sphere: usize,
        index: usize,
        count: usize,
    },

    #[error("Sphere {sphere} has non-positive radius {radius}")]
    InvalidRadius { sphere: usize, radius: f32 },
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Load and validate a scene file.
///
/// # Example
///
/// ```ignore
/// use halo_core::load_scene;
///
/// let scene = load_scene("scenes/three_spheres.json")?;
/// println!("Loaded {} spheres", scene.sphere_count());
/// ```
pub fn load_scene<P: AsRef<Path>>(path: P) -> LoadResult<Scene> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let scene = load_scene_from_str(&text)?;
    log::info!(
        "Loaded {} spheres and {} materials from {}",
        scene.spheres.len(),
        scene.materials.len(),
        path.display()
    );
    Ok(scene)
}

/// Parse and validate a scene from JSON text.
pub fn load_scene_from_str(text: &str) -> LoadResult<Scene> {
    let scene: Scene = serde_json::from_str(text)?;
    scene.validate()?;

    for (i, material) in scene.materials.iter().enumerate() {
        if !(0.0..=1.0).contains(&material.roughness) {
            log::warn!("Material {} has roughness {} outside [0, 1]", i, material.roughness);
        }
    }

    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Material, Sphere};
    use halo_math::Vec3;

    const MINIMAL: &str = r#"{
        "CameraPos": [0, 1, 5],
        "CameraLookAt": [0, 0, 0],
        "CameraVFOV": 45,
        "SkyColor": [0.2, 0.3, 0.4]
    }"#;

    #[test]
    fn test_load_minimal_scene_uses_defaults() {
        let scene = load_scene_from_str(MINIMAL).unwrap();

        assert_eq!(scene.camera_position, Vec3::new(0.0, 1.0, 5.0));
        assert_eq!(scene.camera_vfov, 45.0);
        assert_eq!(scene.sky_intensity, 1.0);
        assert!(scene.enable_tone_mapping);
        assert!(scene.spheres.is_empty());
        assert!(scene.materials.is_empty());
    }

    #[test]
    fn test_load_full_scene() {
        let json = r##"{
            "CameraPos": [0, 0, 5],
            "CameraLookAt": [0, 0, 0],
            "CameraVFOV": 60,
            "SkyColor": "#000",
            "SkyIntensity": 0.5,
            "EnableToneMapping": false,
            "Spheres": [
                { "Position": [0, 0, 0], "Radius": 1.0, "MatIndex": 1 },
                { "Position": [2, 0, 0] }
            ],
            "Materials": [
                { "Albedo": "#ff0000", "Roughness": 0.1 },
                { "EmissionColor": 1, "EmissionPower": 5 }
            ]
        }"##;

        let scene = load_scene_from_str(json).unwrap();

        assert!(!scene.enable_tone_mapping);
        assert_eq!(scene.sky_light(), Vec3::ZERO);
        assert_eq!(scene.spheres.len(), 2);
        assert_eq!(scene.spheres[1], Sphere::new(Vec3::new(2.0, 0.0, 0.0), 0.5, 0));

        assert_eq!(scene.materials[0].albedo, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(scene.materials[0].roughness, 0.1);
        assert_eq!(scene.materials[0].emission(), Vec3::ZERO);

        let light = &scene.materials[1];
        assert_eq!(light.albedo, Material::default().albedo);
        assert_eq!(light.roughness, 1.0);
        assert_eq!(light.emission(), Vec3::splat(5.0));
    }

    #[test]
    fn test_missing_required_field() {
        let json = r#"{ "CameraPos": [0, 0, 5], "CameraLookAt": [0, 0, 0] }"#;
        assert!(matches!(load_scene_from_str(json), Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            load_scene_from_str("{ not json"),
            Err(LoadError::Parse(_))
        ));
    }

    #[test]
    fn test_negative_material_index_is_rejected() {
        let json = r#"{
            "CameraPos": [0, 0, 5], "CameraLookAt": [0, 0, 0], "CameraVFOV": 45,
            "SkyColor": 0, "Spheres": [{ "MatIndex": -1 }], "Materials": [{}]
        }"#;
        assert!(matches!(load_scene_from_str(json), Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_out_of_range_material_index() {
        let json = r#"{
            "CameraPos": [0, 0, 5], "CameraLookAt": [0, 0, 0], "CameraVFOV": 45,
            "SkyColor": 0, "Spheres": [{ "MatIndex": 0 }]
        }"#;
        assert!(matches!(
            load_scene_from_str(json),
            Err(LoadError::InvalidMaterialIndex { sphere: 0, index: 0, count: 0 })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("halo_missing_scene_does_not_exist.json");
        let err = load_scene(&path).unwrap_err();

        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("halo_missing_scene_does_not_exist.json"));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("halo_scene_{}.json", std::process::id()));
        fs::write(&path, MINIMAL).unwrap();

        let scene = load_scene(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(scene.camera_look_at, Vec3::ZERO);
    }

    #[test]
    fn test_bundled_scenes_load() {
        let three = load_scene_from_str(include_str!("../../../scenes/three_spheres.json")).unwrap();
        assert_eq!(three.sphere_count(), 4);
        assert!(three.materials[3].is_emissive());

        let sky = load_scene_from_str(include_str!("../../../scenes/sky_only.json")).unwrap();
        assert_eq!(sky.sphere_count(), 0);
        assert!(!sky.enable_tone_mapping);

        let emissive = load_scene_from_str(include_str!("../../../scenes/emissive.json")).unwrap();
        assert_eq!(emissive.spheres[0].radius, 3.0);
        assert_eq!(emissive.materials[0].emission(), Vec3::splat(5.0));
    }
}
