//! Simple path tracer example.
//!
//! Builds a small scene in code and saves it as `output.png`.
//!
//! ```text
//! RUST_LOG=debug cargo run --release -p halo_renderer --example simple_render
//! ```

use halo_renderer::{
    save_png, Color, LogProgress, Material, RenderSettings, Renderer, Scene, Sphere, Vec3,
};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let start = std::time::Instant::now();
    let scene = build_scene();
    println!("Scene built in {:?}", start.elapsed());

    let threads = std::thread::available_parallelism().map_or(4, |n| n.get() as u32);
    let settings = RenderSettings::default()
        .with_resolution(640, 360)
        .with_quality(64, 6)
        .with_threads(threads);

    println!(
        "Rendering {}x{} @ {} spp...",
        settings.width, settings.height, settings.samples
    );

    let renderer = Renderer::new(settings).with_scene(&scene);
    let image = match renderer.render(&mut LogProgress::default()) {
        Ok(image) => image,
        Err(e) => {
            eprintln!("Render failed: {e}");
            std::process::exit(1);
        }
    };

    let filename = "output.png";
    if let Err(e) = save_png(&image, filename) {
        eprintln!("Failed to save image: {e}");
        std::process::exit(1);
    }
    println!("Saved to {}", filename);
}

fn build_scene() -> Scene {
    let mut scene = Scene::new(Vec3::new(0.0, 1.5, 6.0), Vec3::new(0.0, 0.5, 0.0), 40.0)
        .with_sky(Color::new(0.6, 0.7, 0.9), 0.6);

    let ground = scene.add_material(Material::new(Color::splat(0.6), 1.0));
    let mirror = scene.add_material(Material::new(Color::new(0.9, 0.9, 0.9), 0.02));
    let clay = scene.add_material(Material::new(Color::new(0.8, 0.3, 0.2), 0.8));
    let lamp = scene.add_material(Material::emissive(Color::new(1.0, 0.8, 0.5), 6.0));

    // Ground
    scene.add_sphere(Sphere::new(Vec3::new(0.0, -1000.0, 0.0), 1000.0, ground));

    // Three main spheres
    scene.add_sphere(Sphere::new(Vec3::new(-1.6, 0.8, 0.0), 0.8, clay));
    scene.add_sphere(Sphere::new(Vec3::new(0.0, 1.0, -0.5), 1.0, mirror));
    scene.add_sphere(Sphere::new(Vec3::new(1.6, 0.6, 0.4), 0.6, lamp));

    println!("Created {} spheres", scene.sphere_count());
    scene
}
