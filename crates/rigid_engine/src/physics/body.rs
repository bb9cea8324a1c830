//! Rigid bodies
//!
//! A [`RigidBody`] bundles linear state, orientation, mass data, a local
//! mesh and an optional collider. Bodies are created through
//! [`RigidBody::builder`] (or [`RigidBody::new`]) and then advanced by the
//! scene one step at a time.
//!
//! # Static bodies
//!
//! A static body has zero inverse mass and never moves: integration and
//! collision resolution leave it untouched. Static bodies may have zero
//! mass; a dynamic body with zero mass is rejected at construction.
//!
//! # Angular state
//!
//! Orientation, angular velocity and torque are tracked on every body, but
//! [`RigidBody::integrate`] only advances linear motion. Rotation is
//! advanced separately by [`RigidBody::integrate_angular`], which the scene
//! calls only when angular dynamics are enabled in its configuration.

use thiserror::Error;

use super::collision::Collider;
use super::gravity::GravitySource;
use super::mass_properties::MassProperties;
use crate::foundation::math::{Mat3, Mat3Ext, MathError, Quat, QuatExt, Real, Vec3};
use crate::mesh::Mesh;

/// Rigid body construction and integration errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyError {
    /// A dynamic body was given a mass of exactly zero
    #[error("dynamic body has zero mass; mark it static or give it a mass")]
    ZeroMass,

    /// The body's inertia tensor could not be inverted
    #[error("inertia update failed: {0}")]
    Math(#[from] MathError),
}

/// A simulated rigid body
#[derive(Debug, Clone)]
pub struct RigidBody {
    position: Vec3,
    velocity: Vec3,
    acceleration: Vec3,
    force: Vec3,

    orientation: Quat,
    angular_velocity: Vec3,
    torque: Vec3,

    mass: Real,
    inverse_mass: Real,
    restitution: Option<Real>,
    is_static: bool,

    mesh: Mesh,
    collider: Option<Collider>,
    gravity: GravitySource,

    mass_properties: MassProperties,
    inverse_inertia_world: Mat3,
}

impl RigidBody {
    /// Start building a body at `position` with `mass` and local `mesh`
    pub fn builder(position: Vec3, mass: Real, mesh: Mesh) -> RigidBodyBuilder {
        RigidBodyBuilder::new(position, mass, mesh)
    }

    /// Create a body from every construction input at once.
    ///
    /// `restitution` of `None` defers to the resolver's default, and a
    /// `gravity` of `None` means Earth gravity.
    pub fn new(
        position: Vec3,
        mass: Real,
        restitution: Option<Real>,
        mesh: Mesh,
        collider: Option<Collider>,
        is_static: bool,
        gravity: Option<GravitySource>,
    ) -> Result<Self, BodyError> {
        let mut builder = Self::builder(position, mass, mesh).with_static(is_static);
        builder.restitution = restitution;
        builder.collider = collider;
        if let Some(gravity) = gravity {
            builder = builder.with_gravity(gravity);
        }
        builder.build()
    }

    /// Accumulate a force for the next integration step
    pub fn apply_force(&mut self, force: Vec3) {
        self.force += force;
    }

    /// Accumulate a torque for the next angular integration step
    pub fn apply_torque(&mut self, torque: Vec3) {
        self.torque += torque;
    }

    /// Advance linear motion by `dt` with explicit Euler.
    ///
    /// In order: acceleration from the accumulated force, velocity, then
    /// position. Afterwards the force is cleared, a central gravity source is
    /// moved onto the body, the collider follows the body, and the
    /// world-space inverse inertia is recomputed from the current
    /// orientation. Static bodies are skipped entirely.
    pub fn integrate(&mut self, dt: Real) -> Result<(), BodyError> {
        if self.is_static {
            return Ok(());
        }

        self.acceleration = self.force * self.inverse_mass;
        self.velocity += self.acceleration * dt;
        self.position += self.velocity * dt;

        self.gravity.recenter(self.position);
        self.force = Vec3::zeros();
        self.sync_collider();

        self.update_inverse_inertia_world()
    }

    /// Advance orientation from angular velocity and accumulated torque.
    ///
    /// `ω += I⁻¹_world τ dt`, then `q += ½ dt (0, ω) q` and renormalise.
    /// The torque is cleared afterwards. Static bodies are skipped.
    pub fn integrate_angular(&mut self, dt: Real) -> Result<(), BodyError> {
        if self.is_static {
            return Ok(());
        }

        let angular_acceleration = self.inverse_inertia_world * self.torque;
        self.angular_velocity += angular_acceleration * dt;

        let half_dt = 0.5 * dt;
        let w = &self.angular_velocity;
        let spin = Quat::new(0.0, w.x * half_dt, w.y * half_dt, w.z * half_dt);
        self.orientation = (self.orientation + spin * self.orientation).normalize_or_identity();
        self.torque = Vec3::zeros();

        self.update_inverse_inertia_world()
    }

    /// Recompute `(R I Rᵀ)⁻¹` from the current orientation
    fn update_inverse_inertia_world(&mut self) -> Result<(), BodyError> {
        let rotation = self.orientation.to_mat3();
        let world = rotation * self.mass_properties.inertia_tensor * rotation.transpose();
        self.inverse_inertia_world = world.try_inverse_exact()?;
        Ok(())
    }

    fn sync_collider(&mut self) {
        if let Some(collider) = &mut self.collider {
            collider.sync_position(self.position);
        }
    }

    /// Destructively rotate the local mesh.
    ///
    /// Mass properties are not recomputed.
    pub fn apply_mesh_rotation(&mut self, rotation: &Quat) {
        self.mesh.apply_rotation(rotation);
    }

    /// Mesh centre of mass offset by the body position (orientation is not
    /// applied)
    pub fn world_center_of_mass(&self) -> Vec3 {
        self.position + self.mass_properties.center_of_mass
    }

    /// Mesh vertices with the body's orientation and position applied
    pub fn world_vertices(&self) -> Vec<Vec3> {
        self.mesh.transformed_vertices(&self.orientation, &self.position)
    }

    /// Move the body, keeping its collider in step
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.sync_collider();
    }

    /// Overwrite the linear velocity
    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    /// Overwrite the orientation
    pub fn set_orientation(&mut self, orientation: Quat) {
        self.orientation = orientation;
    }

    /// Overwrite the angular velocity
    pub fn set_angular_velocity(&mut self, angular_velocity: Vec3) {
        self.angular_velocity = angular_velocity;
    }

    /// World position
    pub const fn position(&self) -> Vec3 {
        self.position
    }

    /// Linear velocity
    pub const fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Acceleration computed by the last integration step
    pub const fn acceleration(&self) -> Vec3 {
        self.acceleration
    }

    /// Force accumulated since the last integration step
    pub const fn force(&self) -> Vec3 {
        self.force
    }

    /// Orientation quaternion
    pub const fn orientation(&self) -> Quat {
        self.orientation
    }

    /// Angular velocity in rad/s
    pub const fn angular_velocity(&self) -> Vec3 {
        self.angular_velocity
    }

    /// Torque accumulated since the last angular step
    pub const fn torque(&self) -> Vec3 {
        self.torque
    }

    /// Mass
    pub const fn mass(&self) -> Real {
        self.mass
    }

    /// Inverse mass, zero for static bodies
    pub const fn inverse_mass(&self) -> Real {
        self.inverse_mass
    }

    /// Restitution, if the body sets one
    pub const fn restitution(&self) -> Option<Real> {
        self.restitution
    }

    /// Whether the body is immovable
    pub const fn is_static(&self) -> bool {
        self.is_static
    }

    /// Local mesh
    pub const fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Collider, if any
    pub const fn collider(&self) -> Option<&Collider> {
        self.collider.as_ref()
    }

    /// Gravity source acting on this body
    pub const fn gravity(&self) -> &GravitySource {
        &self.gravity
    }

    /// Mass properties computed at construction
    pub const fn mass_properties(&self) -> &MassProperties {
        &self.mass_properties
    }

    /// World-space inverse inertia tensor (identity for static bodies)
    pub const fn inverse_inertia_world(&self) -> Mat3 {
        self.inverse_inertia_world
    }
}

/// Builder for [`RigidBody`]
#[derive(Debug, Clone)]
pub struct RigidBodyBuilder {
    position: Vec3,
    mass: Real,
    mesh: Mesh,
    restitution: Option<Real>,
    collider: Option<Collider>,
    is_static: bool,
    gravity: GravitySource,
    orientation: Quat,
    velocity: Vec3,
}

impl RigidBodyBuilder {
    /// Dynamic body under Earth gravity with no collider
    pub fn new(position: Vec3, mass: Real, mesh: Mesh) -> Self {
        Self {
            position,
            mass,
            mesh,
            restitution: None,
            collider: None,
            is_static: false,
            gravity: GravitySource::earth(),
            orientation: Quat::identity(),
            velocity: Vec3::zeros(),
        }
    }

    /// Set the restitution coefficient
    pub fn with_restitution(mut self, restitution: Real) -> Self {
        self.restitution = Some(restitution);
        self
    }

    /// Attach a collider; it is moved to the body position on build
    pub fn with_collider(mut self, collider: Collider) -> Self {
        self.collider = Some(collider);
        self
    }

    /// Mark the body static (immovable)
    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    /// Set the gravity source
    pub fn with_gravity(mut self, gravity: GravitySource) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the initial orientation
    pub fn with_orientation(mut self, orientation: Quat) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set the initial velocity
    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    /// Compute mass properties and build the body.
    ///
    /// Fails with [`BodyError::ZeroMass`] for a dynamic body of zero mass,
    /// and with [`BodyError::Math`] when a dynamic body's inertia tensor is
    /// singular (for instance a flat mesh).
    #[allow(clippy::float_cmp)]
    pub fn build(self) -> Result<RigidBody, BodyError> {
        if !self.is_static && self.mass == 0.0 {
            return Err(BodyError::ZeroMass);
        }

        let mass_properties = MassProperties::compute_unit_density(&self.mesh);
        let inverse_mass = if self.is_static { 0.0 } else { 1.0 / self.mass };

        let mut body = RigidBody {
            position: self.position,
            velocity: self.velocity,
            acceleration: Vec3::zeros(),
            force: Vec3::zeros(),
            orientation: self.orientation,
            angular_velocity: Vec3::zeros(),
            torque: Vec3::zeros(),
            mass: self.mass,
            inverse_mass,
            restitution: self.restitution,
            is_static: self.is_static,
            mesh: self.mesh,
            collider: self.collider,
            gravity: self.gravity,
            mass_properties,
            inverse_inertia_world: Mat3::identity(),
        };
        body.sync_collider();

        if !body.is_static {
            body.update_inverse_inertia_world()?;
        }

        log::trace!(
            "Built {} body: mass {}, volume {:.4}",
            if body.is_static { "static" } else { "dynamic" },
            body.mass,
            body.mass_properties.volume
        );

        Ok(body)
    }
}
