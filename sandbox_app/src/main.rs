//! Drop demo application
//!
//! Scatters a handful of spheres and boxes above a static ground slab and
//! steps the scene headlessly, logging where everything ends up.
//!
//! Usage: `drop_demo [physics.toml | physics.ron]`

use rand::Rng;
use rigid_engine::config::{Config, ConfigError, PhysicsConfig};
use rigid_engine::foundation::logging;
use rigid_engine::foundation::math::{Quat, QuatExt, Vec3};
use rigid_engine::mesh::primitives::{box_mesh, uv_sphere};
use rigid_engine::physics::{BodyError, Collider, RigidBody};
use rigid_engine::scene::{BodyHandle, Scene};
use thiserror::Error;

const STEP: f64 = 1.0 / 120.0;
const SECONDS: f64 = 4.0;
const SPHERES: usize = 6;
const BOXES: usize = 3;

#[derive(Error, Debug)]
enum DemoError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("body construction: {0}")]
    Body(#[from] BodyError),
}

struct DropDemo {
    scene: Scene,
    dynamic: Vec<BodyHandle>,
}

impl DropDemo {
    fn new(config: PhysicsConfig) -> Result<Self, DemoError> {
        let mut scene = Scene::with_config(config);
        let gravity = scene.default_gravity();
        let mut rng = rand::thread_rng();
        let mut dynamic = Vec::new();

        // Slab rather than a plane so boxes land on it too
        let slab = Vec3::new(40.0, 1.0, 40.0);
        let ground = RigidBody::builder(Vec3::new(0.0, -0.5, 0.0), 0.0, box_mesh(1.0, slab))
            .with_static(true)
            .with_collider(Collider::cuboid(Vec3::zeros(), slab))
            .build()?;
        scene.add_body(ground);

        for _ in 0..SPHERES {
            let radius = rng.gen_range(0.3..0.8);
            let position = Vec3::new(rng.gen_range(-4.0..4.0), rng.gen_range(2.0..8.0), rng.gen_range(-4.0..4.0));
            let sphere = RigidBody::builder(position, rng.gen_range(0.5..3.0), uv_sphere(radius, 16, 16))
                .with_collider(Collider::sphere(radius, position))
                .with_restitution(rng.gen_range(0.2..0.7))
                .with_gravity(gravity)
                .build()?;
            dynamic.push(scene.add_body(sphere));
        }

        for _ in 0..BOXES {
            let size = Vec3::new(rng.gen_range(0.5..1.5), rng.gen_range(0.5..1.5), rng.gen_range(0.5..1.5));
            let position = Vec3::new(rng.gen_range(-4.0..4.0), rng.gen_range(4.0..10.0), rng.gen_range(-4.0..4.0));
            let tilt = Quat::from_axis_angle(&Vec3::new(1.0, 1.0, 0.0), rng.gen_range(0.0..1.0));
            let cuboid = RigidBody::builder(position, size.product(), box_mesh(1.0, size))
                .with_collider(Collider::cuboid(position, size))
                .with_orientation(tilt)
                .with_gravity(gravity)
                .build()?;
            dynamic.push(scene.add_body(cuboid));
        }

        log::info!("Created scene with {} bodies", scene.len());
        Ok(Self { scene, dynamic })
    }

    fn run(&mut self) {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let steps = (SECONDS / STEP).round() as usize;
        let mut contacts = 0;
        let mut failures = 0;

        for step in 0..steps {
            let report = self.scene.step(STEP);
            contacts += report.contacts_resolved;
            failures += report.unsupported_pairs.len() + report.integration_failures.len();

            if step % 120 == 0 {
                log::debug!("Step {}: {} contacts this step", step, report.contacts_resolved);
            }
        }

        log::info!(
            "Simulated {:.1}s in {} steps: {} contacts, {} skipped pairs or failures",
            SECONDS,
            steps,
            contacts,
            failures
        );

        for handle in &self.dynamic {
            if let Some(body) = self.scene.body(*handle) {
                let p = body.position();
                let v = body.velocity();
                log::info!(
                    "Body {:>2}: position ({:7.3}, {:7.3}, {:7.3})  velocity ({:7.3}, {:7.3}, {:7.3})",
                    handle.index(),
                    p.x,
                    p.y,
                    p.z,
                    v.x,
                    v.y,
                    v.z
                );
            }
        }
    }
}

fn load_config() -> Result<PhysicsConfig, DemoError> {
    let config = match std::env::args().nth(1) {
        Some(path) => PhysicsConfig::load_from_file(path)?,
        None => PhysicsConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;
    logging::init_with_filter(&config.log_filter);

    log::info!("Starting drop demo");
    let mut demo = DropDemo::new(config)?;
    demo.run();
    Ok(())
}
