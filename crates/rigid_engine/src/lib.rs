//! # Rigid Engine
//!
//! A small real-time rigid-body physics engine.
//!
//! ## Features
//!
//! - **Mass properties**: exact volume, centre of mass and inertia tensor of
//!   closed triangle meshes
//! - **Colliders**: sphere, axis-aligned box and plane with contact normals
//!   and penetration depth
//! - **Gravity**: uniform fields and inverse-square point attractors
//! - **Dynamics**: explicit Euler integration with impulse-based collision
//!   response and positional correction
//! - **Configuration**: TOML/RON tuning files through serde
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rigid_engine::prelude::*;
//!
//! fn main() -> Result<(), BodyError> {
//!     let mut scene = Scene::new();
//!
//!     let ground = RigidBody::builder(Vec3::zeros(), 0.0, plane_mesh(Vec3::new(50.0, 0.0, 50.0)))
//!         .with_static(true)
//!         .with_collider(Collider::plane(Vec3::y(), Vec3::zeros())?)
//!         .build()?;
//!     scene.add_body(ground);
//!
//!     let ball = RigidBody::builder(Vec3::new(0.0, 5.0, 0.0), 1.0, uv_sphere(0.5, 16, 16))
//!         .with_collider(Collider::sphere(0.5, Vec3::zeros()))
//!         .with_restitution(0.4)
//!         .build()?;
//!     let ball = scene.add_body(ball);
//!
//!     for _ in 0..240 {
//!         scene.step(1.0 / 60.0);
//!     }
//!     println!("{:?}", scene.body(ball).map(RigidBody::position));
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod foundation;
pub mod mesh;
pub mod physics;
pub mod scene;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, PhysicsConfig, ResolverConfig},
        foundation::math::{Mat3, Mat3Ext, MathError, Quat, QuatExt, Real, Vec3, Vec3Ext},
        mesh::{
            primitives::{box_mesh, plane_mesh, unit_cube, uv_sphere},
            Mesh, MeshError,
        },
        physics::{
            BodyError, Collider, CollisionError, Contact, GravitySource, MassProperties,
            RigidBody, RigidBodyBuilder, ShapeKind,
        },
        scene::{BodyHandle, Scene, StepReport},
    };
}
