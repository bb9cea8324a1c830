//! Gravity sources
//!
//! Each body carries one [`GravitySource`]; the scene asks it for a force
//! once per step before integration.

use serde::{Deserialize, Serialize};

use super::body::RigidBody;
use crate::foundation::math::{Real, Vec3};

/// Newtonian gravitational constant in m³ kg⁻¹ s⁻²
pub const GRAVITATIONAL_CONSTANT: Real = 6.6743e-11;

/// Standard surface gravity used when a body is given no source
pub const EARTH_GRAVITY: Real = 9.8;

/// Constant acceleration field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UniformGravity {
    /// Acceleration applied to every body
    pub gravity: Vec3,
}

impl UniformGravity {
    /// Force on a body of `mass`
    pub fn force(&self, mass: Real) -> Vec3 {
        self.gravity * mass
    }
}

/// Inverse-square point-mass attractor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CentralGravity {
    /// Position of the attracting mass
    pub center: Vec3,
    /// Attracting mass in kg
    pub mass: Real,
}

impl CentralGravity {
    /// Force on a body of `mass` at `position`, directed toward the centre.
    ///
    /// Zero when the body sits exactly on the centre.
    #[allow(clippy::float_cmp)]
    pub fn force(&self, position: &Vec3, mass: Real) -> Vec3 {
        let delta = self.center - position;
        let distance_squared = delta.magnitude_squared();
        if distance_squared == 0.0 {
            return Vec3::zeros();
        }
        let magnitude = GRAVITATIONAL_CONSTANT * mass * self.mass / distance_squared;
        delta.normalize() * magnitude
    }
}

/// A force generator acting on a body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GravitySource {
    /// Constant field, `force = g * m`
    Uniform(UniformGravity),
    /// Point attractor, `force = G m M / r²`
    Central(CentralGravity),
}

impl GravitySource {
    /// Uniform field with acceleration `gravity`
    pub const fn uniform(gravity: Vec3) -> Self {
        Self::Uniform(UniformGravity { gravity })
    }

    /// Point attractor of `mass` at `center`
    pub const fn central(center: Vec3, mass: Real) -> Self {
        Self::Central(CentralGravity { center, mass })
    }

    /// 9.8 m/s² along -Y
    pub fn earth() -> Self {
        Self::uniform(Vec3::new(0.0, -EARTH_GRAVITY, 0.0))
    }

    /// Force on a body of `mass` at `position`
    pub fn force_at(&self, position: &Vec3, mass: Real) -> Vec3 {
        match self {
            Self::Uniform(uniform) => uniform.force(mass),
            Self::Central(central) => central.force(position, mass),
        }
    }

    /// Force on `body` at its current position
    pub fn force_on(&self, body: &RigidBody) -> Vec3 {
        self.force_at(&body.position(), body.mass())
    }

    /// Move a central attractor to `position`; uniform fields are unaffected.
    ///
    /// Called by body integration so that a central source tracks the body
    /// it is attached to.
    pub fn recenter(&mut self, position: Vec3) {
        if let Self::Central(central) = self {
            central.center = position;
        }
    }
}

impl Default for GravitySource {
    fn default() -> Self {
        Self::earth()
    }
}
