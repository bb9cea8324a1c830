//! Impulse-based collision response
//!
//! Resolution has two phases, both acting along the contact normal:
//!
//! 1. **Positional correction** pushes the bodies apart by a fraction of the
//!    penetration beyond the slop, split by inverse mass.
//! 2. **Velocity impulse** applies `j = -(1 + e) vₙ / (1/mₐ + 1/m_b)` when
//!    the bodies are approaching, with `e` the smaller restitution.
//!
//! Each body's share is weighted by its own inverse mass. Static bodies
//! have zero inverse mass and never move.

use super::body::RigidBody;
use super::collision::Contact;
use crate::config::ResolverConfig;
use crate::foundation::math::Real;

/// What a call to [`resolve_collision`] did
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Resolution {
    /// Whether positional correction was applied
    pub corrected: bool,
    /// Magnitude of the velocity impulse, if one was applied
    pub impulse: Option<Real>,
}

/// Resolve `contact` between `a` and `b`.
///
/// The contact normal must point from `a` toward `b`, as returned by
/// `a`'s collider tested against `b`'s. Nothing happens when both bodies
/// are static.
pub fn resolve_collision(
    a: &mut RigidBody,
    b: &mut RigidBody,
    contact: &Contact,
    config: &ResolverConfig,
) -> Resolution {
    let inverse_mass_a = a.inverse_mass();
    let inverse_mass_b = b.inverse_mass();
    let total_inverse_mass = inverse_mass_a + inverse_mass_b;
    let mut resolution = Resolution::default();

    if total_inverse_mass <= 0.0 {
        return resolution;
    }

    let normal = contact.normal;

    if contact.depth > config.slop {
        let correction =
            normal * ((contact.depth - config.slop) * config.correction_percent / total_inverse_mass);
        if !a.is_static() {
            a.set_position(a.position() - correction * inverse_mass_a);
        }
        if !b.is_static() {
            b.set_position(b.position() + correction * inverse_mass_b);
        }
        resolution.corrected = true;
    }

    let relative_velocity = b.velocity() - a.velocity();
    let velocity_along_normal = relative_velocity.dot(&normal);
    if velocity_along_normal > -config.separation_tolerance {
        return resolution;
    }

    let restitution = a
        .restitution()
        .unwrap_or(config.default_restitution)
        .min(b.restitution().unwrap_or(config.default_restitution));
    let magnitude = -(1.0 + restitution) * velocity_along_normal / total_inverse_mass;
    let impulse = normal * magnitude;

    if !a.is_static() {
        a.set_velocity(a.velocity() - impulse * inverse_mass_a);
    }
    if !b.is_static() {
        b.set_velocity(b.velocity() + impulse * inverse_mass_b);
    }

    log::trace!("Applied impulse {:.4} along {:?}", magnitude, normal);
    resolution.impulse = Some(magnitude);
    resolution
}
