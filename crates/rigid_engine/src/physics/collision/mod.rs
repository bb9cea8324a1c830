//! Narrow-phase collision detection between body colliders
//!
//! # Module Organization
//!
//! - [`primitives`] - World-space shapes and their pairwise contact tests
//! - [`shape`] - The [`Collider`] attached to bodies and shape-pair dispatch
//!
//! # Normal convention
//!
//! A [`Contact`] returned by `a.detect_collision(&b)` always has its normal
//! pointing from `a` toward `b`. The resolver relies on this: it pushes `a`
//! along `-normal` and `b` along `+normal`.

pub mod primitives;
pub mod shape;

use std::fmt;

use thiserror::Error;

use crate::foundation::math::{Real, Vec3};

pub use primitives::{Cuboid, Plane, Sphere};
pub use shape::Collider;

/// Overlap between two colliders.
///
/// Only exists for colliding pairs; "no collision" is `None` at the call
/// site rather than a contact with placeholder values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit separation normal, from the first collider toward the second
    pub normal: Vec3,
    /// Penetration depth along `normal`, never negative
    pub depth: Real,
}

impl Contact {
    /// Create a contact; negative depths are clamped to zero
    pub fn new(normal: Vec3, depth: Real) -> Self {
        Self {
            normal,
            depth: depth.max(0.0),
        }
    }

    /// The same contact seen from the other collider
    #[must_use]
    pub fn flipped(self) -> Self {
        Self {
            normal: -self.normal,
            depth: self.depth,
        }
    }
}

/// Collider shape kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Sphere collider
    Sphere,
    /// Axis-aligned box collider
    Box,
    /// Infinite plane collider
    Plane,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Sphere => "sphere",
            Self::Box => "box",
            Self::Plane => "plane",
        };
        f.write_str(name)
    }
}

/// Collision detection errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionError {
    /// No contact algorithm exists for this pair of shapes
    #[error("no collision test for {first}-{second} pairs")]
    UnsupportedPair {
        /// Kind of the collider the test was invoked on
        first: ShapeKind,
        /// Kind of the collider it was tested against
        second: ShapeKind,
    },
}
