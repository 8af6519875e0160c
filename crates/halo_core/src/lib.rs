//! Halo Core - Scene model and scene file loading.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `Sphere`, `Material`
//! - **Scene files**: JSON loading with defaults and validation
//!
//! # Example
//!
//! ```ignore
//! use halo_core::load_scene;
//!
//! let scene = load_scene("scene.json")?;
//! println!("Loaded {} spheres, {} materials",
//!     scene.spheres.len(),
//!     scene.materials.len());
//! ```

pub mod color;
pub mod loader;
pub mod scene;

// Re-export commonly used types
pub use color::{parse_hex_color, ColorError};
pub use loader::{load_scene, load_scene_from_str, LoadError, LoadResult};
pub use scene::{Material, Scene, Sphere};
