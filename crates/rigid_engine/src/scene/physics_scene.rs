//! Scene ownership and stepping

use super::step_report::{PairFailure, StepReport};
use crate::config::PhysicsConfig;
use crate::foundation::math::Real;
use crate::physics::{resolve_collision, GravitySource, RigidBody};

/// Stable reference to a body in a [`Scene`], its insertion index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle(usize);

impl BodyHandle {
    /// Insertion index of the body
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Owns the bodies of a simulation and steps them
#[derive(Debug, Clone, Default)]
pub struct Scene {
    bodies: Vec<RigidBody>,
    config: PhysicsConfig,
}

impl Scene {
    /// Empty scene with default physics configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty scene with the given configuration
    pub fn with_config(config: PhysicsConfig) -> Self {
        Self {
            bodies: Vec::new(),
            config,
        }
    }

    /// Scene populated with `bodies` in order
    pub fn with_bodies(config: PhysicsConfig, bodies: impl IntoIterator<Item = RigidBody>) -> Self {
        Self {
            bodies: bodies.into_iter().collect(),
            config,
        }
    }

    /// Append a body; bodies are never removed, so the handle stays valid
    pub fn add_body(&mut self, body: RigidBody) -> BodyHandle {
        self.bodies.push(body);
        BodyHandle(self.bodies.len() - 1)
    }

    /// Body by handle
    pub fn body(&self, handle: BodyHandle) -> Option<&RigidBody> {
        self.bodies.get(handle.0)
    }

    /// Mutable body by handle
    pub fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut RigidBody> {
        self.bodies.get_mut(handle.0)
    }

    /// All bodies in insertion order
    pub fn bodies(&self) -> &[RigidBody] {
        &self.bodies
    }

    /// Number of bodies
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// True when the scene holds no bodies
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Physics configuration in use
    pub const fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// Uniform gravity built from the configured default acceleration, for
    /// passing to [`RigidBodyBuilder::with_gravity`](crate::physics::RigidBodyBuilder::with_gravity)
    pub fn default_gravity(&self) -> GravitySource {
        GravitySource::uniform(self.config.default_gravity)
    }

    /// Advance the simulation by `dt` seconds.
    ///
    /// `dt` is used as given, without clamping. Integration and collision
    /// failures are logged and returned in the report; the remaining bodies
    /// and pairs are still processed.
    pub fn step(&mut self, dt: Real) -> StepReport {
        let mut report = StepReport::default();

        self.apply_gravity();
        self.integrate(dt, &mut report);
        self.resolve_contacts(&mut report);

        log::trace!(
            "Stepped {} bodies by {}: {} contacts",
            self.bodies.len(),
            dt,
            report.contacts_resolved
        );
        report
    }

    #[allow(clippy::float_cmp)]
    fn apply_gravity(&mut self) {
        for body in &mut self.bodies {
            if body.mass() == 0.0 {
                continue;
            }
            let force = body.gravity().force_on(body);
            body.apply_force(force);
        }
    }

    fn integrate(&mut self, dt: Real, report: &mut StepReport) {
        let angular = self.config.angular_dynamics;

        for (index, body) in self.bodies.iter_mut().enumerate() {
            let mut result = body.integrate(dt);
            if angular && result.is_ok() {
                result = body.integrate_angular(dt);
            }

            if let Err(error) = result {
                log::warn!("Body {} failed to integrate: {}", index, error);
                report.integration_failures.push((BodyHandle(index), error));
            }
        }
    }

    fn resolve_contacts(&mut self, report: &mut StepReport) {
        let count = self.bodies.len();

        for i in 0..count {
            for j in (i + 1)..count {
                let (head, tail) = self.bodies.split_at_mut(j);
                let (a, b) = (&mut head[i], &mut tail[0]);

                let (Some(first), Some(second)) = (a.collider(), b.collider()) else {
                    continue;
                };

                match first.detect_collision(second) {
                    Ok(Some(contact)) => {
                        log::debug!(
                            "Contact between bodies {} and {}: depth {:.4}",
                            i,
                            j,
                            contact.depth
                        );
                        resolve_collision(a, b, &contact, &self.config.resolver);
                        report.contacts_resolved += 1;
                    }
                    Ok(None) => {}
                    Err(error) => {
                        log::warn!("Skipping bodies {} and {}: {}", i, j, error);
                        report.unsupported_pairs.push(PairFailure {
                            first: BodyHandle(i),
                            second: BodyHandle(j),
                            error,
                        });
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;
    use crate::mesh::primitives::unit_cube;
    use crate::physics::Collider;

    #[test]
    fn test_handles_follow_insertion_order() {
        let mut scene = Scene::new();
        assert!(scene.is_empty());

        let first = scene.add_body(RigidBody::builder(Vec3::zeros(), 1.0, unit_cube()).build().unwrap());
        let second = scene.add_body(
            RigidBody::builder(Vec3::new(5.0, 0.0, 0.0), 2.0, unit_cube()).build().unwrap(),
        );

        assert_eq!(first.index(), 0);
        assert_eq!(second.index(), 1);
        assert_eq!(scene.len(), 2);
        assert_eq!(scene.body(second).unwrap().mass(), 2.0);
        assert!(scene.body(BodyHandle(7)).is_none());
    }

    #[test]
    fn test_bodies_without_colliders_are_not_paired() {
        let mut scene = Scene::new();
        for _ in 0..3 {
            scene.add_body(RigidBody::builder(Vec3::zeros(), 1.0, unit_cube()).build().unwrap());
        }
        let report = scene.step(0.01);
        assert_eq!(report.contacts_resolved, 0);
        assert!(report.is_clean());
    }

    #[test]
    fn test_overlapping_pair_is_resolved() {
        let mut scene = Scene::new();
        let left = scene.add_body(
            RigidBody::builder(Vec3::zeros(), 1.0, unit_cube())
                .with_collider(Collider::sphere(1.0, Vec3::zeros()))
                .with_gravity(GravitySource::uniform(Vec3::zeros()))
                .build()
                .unwrap(),
        );
        let right = scene.add_body(
            RigidBody::builder(Vec3::new(1.5, 0.0, 0.0), 1.0, unit_cube())
                .with_collider(Collider::sphere(1.0, Vec3::zeros()))
                .with_gravity(GravitySource::uniform(Vec3::zeros()))
                .build()
                .unwrap(),
        );

        let report = scene.step(0.01);

        assert_eq!(report.contacts_resolved, 1);
        assert!(scene.body(left).unwrap().position().x < 0.0);
        assert!(scene.body(right).unwrap().position().x > 1.5);
    }

    #[test]
    fn test_unsupported_pair_is_reported_not_fatal() {
        let mut scene = Scene::new();
        scene.add_body(
            RigidBody::builder(Vec3::zeros(), 0.0, unit_cube())
                .with_static(true)
                .with_collider(Collider::plane(Vec3::y(), Vec3::zeros()).unwrap())
                .build()
                .unwrap(),
        );
        scene.add_body(
            RigidBody::builder(Vec3::new(0.0, 0.2, 0.0), 1.0, unit_cube())
                .with_collider(Collider::cuboid(Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0)))
                .build()
                .unwrap(),
        );

        let report = scene.step(0.01);

        assert!(!report.is_clean());
        assert_eq!(report.unsupported_pairs.len(), 1);
        assert_eq!(report.unsupported_pairs[0].second, BodyHandle(1));
        // The box still integrated
        assert!(scene.bodies()[1].velocity().y < 0.0);
    }

    #[test]
    fn test_default_gravity_comes_from_config() {
        let config = PhysicsConfig::new().with_default_gravity(Vec3::new(0.0, -1.62, 0.0));
        let scene = Scene::with_config(config);
        assert_eq!(scene.default_gravity(), GravitySource::uniform(Vec3::new(0.0, -1.62, 0.0)));
    }
}
