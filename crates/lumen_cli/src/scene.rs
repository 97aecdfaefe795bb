//! Built-in demo scene.

use lumen_renderer::{Color, Dielectric, Lambertian, Material, Metal, Scene, Sphere, Vec3};
use std::sync::Arc;

/// Three spheres in a row (hollow glass, diffuse blue, fuzzy metal) on a
/// large yellow ground, with three small spheres in front.
pub fn demo_scene() -> Scene {
    let blue: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(0.1, 0.2, 0.5), 0.3));
    let yellow: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(0.8, 0.8, 0.0), 0.3));
    let gold: Arc<dyn Material> = Arc::new(Metal::new(Color::new(0.8, 0.6, 0.2), 0.3));
    let glass_in: Arc<dyn Material> = Arc::new(Dielectric::new(Color::ONE, 1.0, 1.5));
    let glass_out: Arc<dyn Material> = Arc::new(Dielectric::new(Color::ONE, 1.5, 1.0));

    Scene::new()
        // Hollow glass ball: shell outer and inner walls
        .with(Sphere::new(Vec3::new(-1.0, 0.0, -1.5), 0.5, glass_in))
        .with(Sphere::new(Vec3::new(-1.0, 0.0, -1.5), 0.45, glass_out))
        .with(Sphere::new(Vec3::new(0.0, 0.0, -1.5), 0.5, blue.clone()))
        .with(Sphere::new(Vec3::new(1.0, 0.0, -1.5), 0.5, gold.clone()))
        // Ground
        .with(Sphere::new(Vec3::new(0.0, -100.5, -2.0), 100.0, yellow.clone()))
        .with(Sphere::new(Vec3::new(-0.3, -0.4, -0.5), 0.1, blue))
        .with(Sphere::new(Vec3::new(0.4, -0.4, -0.5), 0.1, gold))
        .with(Sphere::new(Vec3::new(0.0, -0.4, -0.4), 0.1, yellow))
}
