//! Rigid-body physics
//!
//! Mass properties, gravity sources, bodies, narrow-phase collision and
//! impulse resolution. The [`Scene`](crate::scene::Scene) drives these once
//! per step: gravity, integration, then pairwise detection and resolution.

pub mod body;
pub mod collision;
pub mod gravity;
pub mod mass_properties;
pub mod resolver;

#[cfg(test)]
mod tests;

pub use body::{BodyError, RigidBody, RigidBodyBuilder};
pub use collision::{Collider, CollisionError, Contact, ShapeKind};
pub use gravity::{CentralGravity, GravitySource, UniformGravity, GRAVITATIONAL_CONSTANT};
pub use mass_properties::{parallel_axis_shift, MassProperties};
pub use resolver::{resolve_collision, Resolution};
