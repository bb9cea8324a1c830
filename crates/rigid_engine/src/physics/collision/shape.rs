//! Body colliders and shape-pair dispatch
//!
//! A [`Collider`] is the collision volume attached to a rigid body. Its
//! position follows the body; shapes carry no rotation of their own.

use super::primitives::{Cuboid, Plane, Sphere};
use super::{CollisionError, Contact, ShapeKind};
use crate::foundation::math::{MathError, Real, Vec3};

/// Collision volume attached to a body
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Collider {
    /// A sphere centred on the body
    Sphere(Sphere),
    /// An axis-aligned box centred on the body
    Box(Cuboid),
    /// An infinite plane through the body's position
    Plane(Plane),
}

impl Collider {
    /// Sphere of `radius` at `center`
    pub const fn sphere(radius: Real, center: Vec3) -> Self {
        Self::Sphere(Sphere::new(center, radius))
    }

    /// Axis-aligned box with full edge lengths `dimensions`
    pub const fn cuboid(center: Vec3, dimensions: Vec3) -> Self {
        Self::Box(Cuboid::new(center, dimensions))
    }

    /// Plane through `point`; fails for a zero normal
    pub fn plane(normal: Vec3, point: Vec3) -> Result<Self, MathError> {
        Ok(Self::Plane(Plane::new(normal, point)?))
    }

    /// Which shape this is
    pub const fn kind(&self) -> ShapeKind {
        match self {
            Self::Sphere(_) => ShapeKind::Sphere,
            Self::Box(_) => ShapeKind::Box,
            Self::Plane(_) => ShapeKind::Plane,
        }
    }

    /// Point the collider is positioned by: centre for sphere and box,
    /// reference point for a plane
    pub const fn anchor(&self) -> Vec3 {
        match self {
            Self::Sphere(sphere) => sphere.center,
            Self::Box(cuboid) => cuboid.center,
            Self::Plane(plane) => plane.point,
        }
    }

    /// Move the collider to `position`
    pub fn sync_position(&mut self, position: Vec3) {
        match self {
            Self::Sphere(sphere) => sphere.center = position,
            Self::Box(cuboid) => cuboid.center = position,
            Self::Plane(plane) => plane.point = position,
        }
    }

    /// Test `self` against `other`.
    ///
    /// Returns `Ok(None)` when the shapes are apart, and a contact whose
    /// normal points from `self` toward `other` when they overlap. Pairs
    /// with no contact algorithm (plane against box or plane) are reported
    /// as [`CollisionError::UnsupportedPair`] rather than silently ignored.
    pub fn detect_collision(&self, other: &Self) -> Result<Option<Contact>, CollisionError> {
        let contact = match (self, other) {
            (Self::Sphere(a), Self::Sphere(b)) => a.contact_sphere(b),
            (Self::Box(a), Self::Sphere(b)) => a.contact_sphere(b),
            (Self::Sphere(a), Self::Box(b)) => b.contact_sphere(a).map(Contact::flipped),
            (Self::Box(a), Self::Box(b)) => a.contact_cuboid(b),
            (Self::Plane(a), Self::Sphere(b)) => a.contact_sphere(b),
            (Self::Sphere(a), Self::Plane(b)) => b.contact_sphere(a).map(Contact::flipped),
            (Self::Plane(_), _) | (_, Self::Plane(_)) => {
                return Err(CollisionError::UnsupportedPair {
                    first: self.kind(),
                    second: other.kind(),
                });
            }
        };
        Ok(contact)
    }
}
