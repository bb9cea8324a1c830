//! Bodies coming to rest on static ground and against each other

use crate::config::PhysicsConfig;
use crate::foundation::math::{Quat, Vec3};
use crate::mesh::primitives::{plane_mesh, unit_cube, uv_sphere};
use crate::physics::{Collider, RigidBody};
use crate::scene::Scene;

fn ground() -> RigidBody {
    RigidBody::builder(Vec3::zeros(), 0.0, plane_mesh(Vec3::new(20.0, 0.0, 20.0)))
        .with_static(true)
        .with_collider(Collider::plane(Vec3::y(), Vec3::zeros()).unwrap())
        .build()
        .unwrap()
}

fn falling_ball(height: f64) -> RigidBody {
    RigidBody::builder(Vec3::new(0.0, height, 0.0), 1.0, uv_sphere(0.5, 12, 12))
        .with_collider(Collider::sphere(0.5, Vec3::zeros()))
        .with_restitution(0.3)
        .build()
        .unwrap()
}

#[test]
fn test_ball_settles_on_ground() {
    let mut scene = Scene::new();
    let floor = scene.add_body(ground());
    let ball = scene.add_body(falling_ball(2.0));

    for _ in 0..600 {
        let report = scene.step(1.0 / 120.0);
        assert!(report.is_clean());
    }

    let body = scene.body(ball).unwrap();
    assert!(body.position().y > 0.3, "fell through: {}", body.position().y);
    assert!(body.position().y < 0.6);
    assert!(body.velocity().y.abs() < 0.5);

    assert_eq!(scene.body(floor).unwrap().position(), Vec3::zeros());
}

#[test]
fn test_bounce_reverses_velocity() {
    let mut scene = Scene::new();
    scene.add_body(ground());
    let ball = scene.add_body(falling_ball(0.6));
    scene.body_mut(ball).unwrap().set_velocity(Vec3::new(0.0, -5.0, 0.0));

    let mut bounced = false;
    for _ in 0..30 {
        scene.step(1.0 / 120.0);
        if scene.body(ball).unwrap().velocity().y > 0.0 {
            bounced = true;
            break;
        }
    }
    assert!(bounced);
}

#[test]
fn test_boxes_pushed_apart_sideways() {
    let mut scene = Scene::with_config(PhysicsConfig::new().with_default_gravity(Vec3::zeros()));
    let gravity = scene.default_gravity();
    let cube = |x: f64, vx: f64| {
        RigidBody::builder(Vec3::new(x, 0.0, 0.0), 1.0, unit_cube())
            .with_collider(Collider::cuboid(Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0)))
            .with_gravity(gravity)
            .with_velocity(Vec3::new(vx, 0.0, 0.0))
            .build()
            .unwrap()
    };
    let left = scene.add_body(cube(-1.0, 2.0));
    let right = scene.add_body(cube(1.0, -2.0));

    for _ in 0..100 {
        scene.step(0.01);
    }

    let (left, right) = (scene.body(left).unwrap(), scene.body(right).unwrap());
    assert!(left.velocity().x < 0.0);
    assert!(right.velocity().x > 0.0);
    assert!(right.position().x - left.position().x > 0.9);
    assert_eq!(left.orientation(), Quat::identity());
}

#[test]
fn test_angular_dynamics_opt_in() {
    let spin = |angular: bool| {
        let mut scene = Scene::with_config(PhysicsConfig::new().with_angular_dynamics(angular));
        let body = scene.add_body(RigidBody::builder(Vec3::zeros(), 1.0, unit_cube()).build().unwrap());
        scene.body_mut(body).unwrap().set_angular_velocity(Vec3::new(0.0, 1.0, 0.0));
        scene.step(0.1);
        scene.body(body).unwrap().orientation()
    };

    assert_eq!(spin(false), Quat::identity());
    assert!(spin(true).j > 0.0);
}
